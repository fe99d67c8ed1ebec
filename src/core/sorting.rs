use crate::models::{ProfileRecord, SortMode};

/// Order a filtered record set according to the selected sort mode
///
/// The sort is stable: records that compare equal keep the order they had in
/// the input, and `SortMode::None` returns the input order untouched. Newest
/// listings are approximated by descending id since the directory assigns ids
/// in insertion order.
pub fn sort_records<'a>(filtered: &[&'a ProfileRecord], mode: SortMode) -> Vec<&'a ProfileRecord> {
    let mut ordered = filtered.to_vec();

    match mode {
        SortMode::None => {}
        SortMode::PriceAscending => {
            ordered.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortMode::RatingDescending => {
            ordered.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortMode::RecentlyAdded => {
            ordered.sort_by(|a, b| b.id.cmp(&a.id));
        }
    }

    ordered
}
