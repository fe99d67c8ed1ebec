use serde::{Deserialize, Serialize};

/// Photographer profile as served by the directory API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "profilePic", default)]
    pub profile_pic: String,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ProfileRecord {
    /// Helper to get the review count shown next to the rating
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// Client review attached to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

/// Active filter inputs for the listing view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "minRating", default)]
    pub min_rating: f64,
    #[serde(rename = "minPrice", default)]
    pub min_price: f64,
    #[serde(rename = "maxPrice", default = "default_max_price")]
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            styles: Vec::new(),
            city: None,
            min_rating: 0.0,
            min_price: 0.0,
            max_price: default_max_price(),
        }
    }
}

fn default_max_price() -> f64 { 50_000.0 }

impl FilterCriteria {
    /// Apply a single criteria change, returning the next criteria value.
    /// The previous value is left untouched so a view can diff against it.
    pub fn apply(&self, change: CriteriaChange) -> FilterCriteria {
        let mut next = self.clone();
        match change {
            CriteriaChange::QueryCommitted(query) => next.query = query,
            CriteriaChange::StyleToggled(style) => {
                if let Some(pos) = next.styles.iter().position(|s| *s == style) {
                    next.styles.remove(pos);
                } else {
                    next.styles.push(style);
                }
            }
            CriteriaChange::CitySelected(city) => next.city = city,
            CriteriaChange::MinRatingSet(rating) => next.min_rating = rating,
            CriteriaChange::PriceRangeSet { min, max } => {
                next.min_price = min;
                next.max_price = max;
            }
        }
        next
    }
}

/// Single edit to the filter criteria
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaChange {
    /// Search text that survived the debounce window
    QueryCommitted(String),
    /// Adds the style when absent, removes it when present
    StyleToggled(String),
    /// `None` selects all cities
    CitySelected(Option<String>),
    MinRatingSet(f64),
    PriceRangeSet { min: f64, max: f64 },
}

/// Result ordering selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "priceLowHigh")]
    PriceAscending,
    #[serde(rename = "ratingHighLow")]
    RatingDescending,
    #[serde(rename = "recentlyAdded")]
    RecentlyAdded,
}
