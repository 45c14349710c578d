//! Distance validation shared by manual entry and voice capture

/// Shortest accepted carry distance, in yards
pub const MIN_DISTANCE: u32 = 1;

/// Longest accepted carry distance, in yards
pub const MAX_DISTANCE: u32 = 1000;

/// Whether a distance lies within the accepted 1-1000 yard range
pub fn is_valid_distance(distance: u32) -> bool {
    (MIN_DISTANCE..=MAX_DISTANCE).contains(&distance)
}

/// Validate a raw distance estimate, such as the output of speech capture
///
/// Negative or out-of-range values are rejected.
pub fn validate_distance(raw: i64) -> Option<u32> {
    u32::try_from(raw).ok().filter(|d| is_valid_distance(*d))
}

/// Pull the first integer out of free text ("about 152 yards" -> 152)
///
/// Returns `None` when no integer is present or it falls outside 1-1000.
pub fn extract_distance(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<i64>().ok().and_then(validate_distance)
}
