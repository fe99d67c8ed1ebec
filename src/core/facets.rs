use crate::models::ProfileRecord;

/// Filter options offered by the sidebar, derived from the full record
/// collection
///
/// Both lists keep first-appearance order and are extracted from the
/// unfiltered collection, so narrowing one filter never hides the other
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub cities: Vec<String>,
    pub styles: Vec<String>,
}

impl Facets {
    pub fn from_records(records: &[ProfileRecord]) -> Self {
        let mut cities: Vec<String> = Vec::new();
        let mut styles: Vec<String> = Vec::new();

        for record in records {
            if !cities.contains(&record.location) {
                cities.push(record.location.clone());
            }
            for style in &record.styles {
                if !styles.contains(style) {
                    styles.push(style.clone());
                }
            }
        }

        Self { cities, styles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(id: u64, location: &str, styles: &[&str]) -> ProfileRecord {
        ProfileRecord {
            id,
            name: format!("Photographer {}", id),
            location: location.to_string(),
            price: 1000.0,
            rating: 4.5,
            styles: styles.iter().map(|s| s.to_string()).collect(),
            tags: vec![],
            bio: String::new(),
            profile_pic: String::new(),
            portfolio: vec![],
            reviews: vec![],
        }
    }

    #[test]
    fn test_first_appearance_order() {
        let records = vec![
            create_test_record(1, "Austin", &["Wedding", "Portrait"]),
            create_test_record(2, "Denver", &["Portrait", "Fashion"]),
            create_test_record(3, "Austin", &["Wedding"]),
        ];

        let facets = Facets::from_records(&records);

        assert_eq!(facets.cities, vec!["Austin", "Denver"]);
        assert_eq!(facets.styles, vec!["Wedding", "Portrait", "Fashion"]);
    }

    #[test]
    fn test_case_variants_stay_distinct() {
        let records = vec![
            create_test_record(1, "Austin", &["Wedding"]),
            create_test_record(2, "austin", &["wedding"]),
        ];

        let facets = Facets::from_records(&records);

        assert_eq!(facets.cities, vec!["Austin", "austin"]);
        assert_eq!(facets.styles, vec!["Wedding", "wedding"]);
    }

    #[test]
    fn test_empty_records() {
        let facets = Facets::from_records(&[]);

        assert!(facets.cities.is_empty());
        assert!(facets.styles.is_empty());
    }
}
