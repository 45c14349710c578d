//! Nickname derivation for clubs
//!
//! Ladder labels are tight on space, so every club gets a one or two
//! character nickname derived from its name unless the golfer sets one.

/// Derive a short nickname from a club name
///
/// Rules, first match wins:
/// 1. Empty name gives an empty nickname
/// 2. Leading digit: the digit plus the next alphanumeric, uppercased ("7 Iron" -> "7I")
/// 3. Two or more words: uppercased initials of the first two ("Pitching Wedge" -> "PW")
/// 4. Otherwise the first two alphanumerics as "Xy" ("Driver" -> "Dr")
/// 5. A single alphanumeric, uppercased ("D" -> "D")
///
/// # Examples
///
/// ```
/// use yardbook_domain::nickname::generate;
///
/// assert_eq!(generate("7 Iron"), "7I");
/// assert_eq!(generate("Sand Wedge"), "SW");
/// assert_eq!(generate("Driver"), "Dr");
/// ```
pub fn generate(name: &str) -> String {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    if first.is_numeric() {
        let mut nickname = first.to_string();
        if let Some(next) = chars.find(|c| c.is_alphanumeric()) {
            nickname.extend(next.to_uppercase());
        }
        return nickname;
    }

    let mut words = name.split(' ').filter(|w| !w.is_empty());
    if let (Some(w1), Some(w2)) = (words.next(), words.next()) {
        return w1
            .chars()
            .take(1)
            .chain(w2.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect();
    }

    let mut alphanumerics = name.chars().filter(|c| c.is_alphanumeric());
    match (alphanumerics.next(), alphanumerics.next()) {
        (Some(a), Some(b)) => a.to_uppercase().chain(b.to_lowercase()).collect(),
        (Some(a), None) => a.to_uppercase().collect(),
        _ => String::new(),
    }
}
