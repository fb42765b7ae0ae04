//! Identifier normalization for generated code.

use crate::schema::Table;

/// Converts a snake/kebab-case identifier like "user_profile" into
/// "UserProfile".
///
/// Splits on `-` and `_`, drops empty pieces and uppercases the first
/// character of every piece. The remaining characters are kept as written.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(['-', '_']).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Name of the class generated for a table, e.g. `user_profile` with the
/// suffix `db` becomes `UserProfileDb`.
#[must_use]
pub fn class_name(table: &Table, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => to_pascal_case(&format!("{}_{suffix}", table.name)),
        None => to_pascal_case(&table.name),
    }
}
