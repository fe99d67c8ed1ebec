use crate::core::debounce::Debouncer;
use crate::core::facets::Facets;
use crate::core::filters::apply_filters;
use crate::core::pagination::VisibleCursor;
use crate::core::sorting::sort_records;
use crate::models::{CriteriaChange, FilterCriteria, ProfileRecord, SortMode};
use crate::services::DirectoryClient;
use std::time::Duration;
use tokio::time::Instant;

/// Listing screen state
///
/// Owns the record collection fetched once per session plus every filter
/// input. The visible result list is derived on demand from the records,
/// criteria, sort mode and pagination cursor; nothing derived is stored, so
/// the pieces can never disagree.
#[derive(Debug)]
pub struct ListingView {
    records: Vec<ProfileRecord>,
    loading: bool,
    load_error: Option<String>,
    criteria: FilterCriteria,
    sort: SortMode,
    cursor: VisibleCursor,
    search: Debouncer,
}

impl ListingView {
    pub fn new(page_size: usize, quiet: Duration) -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            load_error: None,
            criteria: FilterCriteria::default(),
            sort: SortMode::None,
            cursor: VisibleCursor::new(page_size),
            search: Debouncer::new(quiet),
        }
    }

    /// Fetch the record collection from the directory API
    ///
    /// Errors are absorbed into the view's error state so the session keeps
    /// running with an empty listing.
    pub async fn refresh(&mut self, client: &DirectoryClient) {
        self.loading = true;

        match client.fetch_photographers().await {
            Ok(records) => {
                tracing::info!("Loaded {} photographers", records.len());
                self.set_records(records);
            }
            Err(e) => {
                tracing::error!("Failed to fetch photographers: {}", e);
                self.load_error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Replace the record collection and collapse pagination back to the
    /// first page. Filter criteria and sort mode carry over.
    pub fn set_records(&mut self, records: Vec<ProfileRecord>) {
        self.records = records;
        self.load_error = None;
        self.cursor.reset();
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Stage raw search box text; it only reaches the criteria once the
    /// quiet window elapses
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.search.update(text, now);
    }

    /// When the staged search text becomes due, if any
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Commit staged search text whose quiet window has elapsed. Returns
    /// true when the criteria changed.
    pub fn tick_search(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(query) => {
                self.apply(CriteriaChange::QueryCommitted(query));
                true
            }
            None => false,
        }
    }

    /// Apply a criteria change. The pagination cursor is left alone; revealed
    /// depth carries across filter changes.
    pub fn apply(&mut self, change: CriteriaChange) {
        self.criteria = self.criteria.apply(change);

        if self.criteria.min_price > self.criteria.max_price {
            tracing::warn!(
                "Price range inverted ({} > {}); no record can match",
                self.criteria.min_price,
                self.criteria.max_price
            );
        }
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Reveal one more page of results
    pub fn load_more(&mut self) {
        self.cursor.load_more();
    }

    pub fn visible_count(&self) -> usize {
        self.cursor.count()
    }

    /// Records passing the active criteria, in collection order
    pub fn filtered(&self) -> Vec<&ProfileRecord> {
        apply_filters(&self.records, &self.criteria)
    }

    /// The visible slice: filtered, then sorted, then cut to the revealed
    /// prefix
    pub fn visible(&self) -> Vec<&ProfileRecord> {
        let ordered = sort_records(&self.filtered(), self.sort);
        self.cursor.slice(&ordered).to_vec()
    }

    /// Whether more filtered results remain beyond the visible slice
    pub fn can_load_more(&self) -> bool {
        self.filtered().len() > self.cursor.count()
    }

    /// Sidebar options, always derived from the full unfiltered collection
    pub fn facets(&self) -> Facets {
        Facets::from_records(&self.records)
    }
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(
            crate::core::pagination::PAGE_SIZE,
            crate::core::debounce::DEFAULT_QUIET_PERIOD,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(id: u64, location: &str, price: f64, rating: f64) -> ProfileRecord {
        ProfileRecord {
            id,
            name: format!("Photographer {}", id),
            location: location.to_string(),
            price,
            rating,
            styles: vec!["Wedding".to_string()],
            tags: vec![],
            bio: String::new(),
            profile_pic: String::new(),
            portfolio: vec![],
            reviews: vec![],
        }
    }

    fn loaded_view(records: Vec<ProfileRecord>) -> ListingView {
        let mut view = ListingView::default();
        view.set_records(records);
        view
    }

    #[test]
    fn test_filter_then_sort_then_page() {
        let view = {
            let mut view = loaded_view(vec![
                create_test_record(1, "Austin", 1000.0, 3.0),
                create_test_record(2, "Austin", 2000.0, 4.0),
                create_test_record(3, "Austin", 3000.0, 5.0),
            ]);
            view.apply(CriteriaChange::MinRatingSet(4.0));
            view.set_sort(SortMode::RatingDescending);
            view
        };

        let visible: Vec<u64> = view.visible().iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![3, 2]);
    }

    #[test]
    fn test_load_more_reveals_pages() {
        let records: Vec<ProfileRecord> = (1..=12)
            .map(|id| create_test_record(id, "Austin", 1000.0, 4.0))
            .collect();
        let mut view = loaded_view(records);

        assert_eq!(view.visible().len(), 5);
        assert!(view.can_load_more());

        view.load_more();
        assert_eq!(view.visible().len(), 10);

        view.load_more();
        assert_eq!(view.visible().len(), 12);
        assert!(!view.can_load_more());
    }

    #[test]
    fn test_cursor_survives_filter_changes() {
        let records: Vec<ProfileRecord> = (1..=12)
            .map(|id| create_test_record(id, "Austin", 1000.0, 4.0))
            .collect();
        let mut view = loaded_view(records);

        view.load_more();
        assert_eq!(view.visible().len(), 10);

        // Narrow to two results, then widen again
        view.apply(CriteriaChange::PriceRangeSet { min: 0.0, max: 0.0 });
        assert_eq!(view.visible().len(), 0);

        view.apply(CriteriaChange::PriceRangeSet { min: 0.0, max: 50_000.0 });
        assert_eq!(view.visible().len(), 10);
    }

    #[test]
    fn test_fresh_records_reset_cursor() {
        let records: Vec<ProfileRecord> = (1..=12)
            .map(|id| create_test_record(id, "Austin", 1000.0, 4.0))
            .collect();
        let mut view = loaded_view(records.clone());

        view.load_more();
        view.set_records(records);

        assert_eq!(view.visible().len(), 5);
    }

    #[test]
    fn test_search_commits_after_quiet_window() {
        let mut view = loaded_view(vec![
            create_test_record(1, "Austin", 1000.0, 4.0),
            create_test_record(2, "Denver", 2000.0, 4.5),
        ]);
        let t0 = Instant::now();

        view.search_input("den", t0);

        // Still uncommitted inside the window
        assert!(!view.tick_search(t0 + Duration::from_millis(299)));
        assert_eq!(view.visible().len(), 2);

        assert!(view.tick_search(t0 + Duration::from_millis(300)));
        let visible: Vec<u64> = view.visible().iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_style_toggle_roundtrip() {
        let mut view = loaded_view(vec![create_test_record(1, "Austin", 1000.0, 4.0)]);

        view.apply(CriteriaChange::StyleToggled("Fashion".to_string()));
        assert!(view.visible().is_empty());

        view.apply(CriteriaChange::StyleToggled("Fashion".to_string()));
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_facets_come_from_full_collection() {
        let mut view = loaded_view(vec![
            create_test_record(1, "Austin", 1000.0, 4.0),
            create_test_record(2, "Denver", 2000.0, 4.5),
        ]);

        view.apply(CriteriaChange::CitySelected(Some("Austin".to_string())));

        assert_eq!(view.facets().cities, vec!["Austin", "Denver"]);
    }
}
