use crate::models::{FilterCriteria, ProfileRecord};

/// Check if a record falls inside the committed price range (inclusive on
/// both ends)
#[inline]
pub fn matches_price(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    record.price >= criteria.min_price && record.price <= criteria.max_price
}

/// Check if a record meets the minimum rating threshold
///
/// A threshold of zero (or below) disables the check.
#[inline]
pub fn matches_rating(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    criteria.min_rating <= 0.0 || record.rating >= criteria.min_rating
}

/// Check if a record is based in the selected city
#[inline]
pub fn matches_city(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    match &criteria.city {
        None => true,
        Some(city) => record.location == *city,
    }
}

/// Check if a record carries every selected style tag
#[inline]
pub fn matches_styles(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    criteria.styles.iter().all(|style| record.styles.contains(style))
}

/// Check if a record matches the committed search text
///
/// Case-insensitive substring match against name, location and tags. Empty
/// text matches everything.
#[inline]
pub fn matches_query(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    if criteria.query.is_empty() {
        return true;
    }

    let needle = criteria.query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.location.to_lowercase().contains(&needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Check if a record passes every active criterion
pub fn matches_criteria(record: &ProfileRecord, criteria: &FilterCriteria) -> bool {
    // Cheap numeric checks first, text scan last
    if !matches_price(record, criteria) {
        return false;
    }

    if !matches_rating(record, criteria) {
        return false;
    }

    if !matches_city(record, criteria) {
        return false;
    }

    if !matches_styles(record, criteria) {
        return false;
    }

    matches_query(record, criteria)
}

/// Run the full filter pass over the record collection, preserving the
/// collection's order
pub fn apply_filters<'a>(
    records: &'a [ProfileRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProfileRecord> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .collect()
}
