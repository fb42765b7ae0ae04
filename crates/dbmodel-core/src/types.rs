//! Facts about resolved C# types.

use crate::schema::Column;

/// Types from the `System` namespace that column types resolve to.
const SYSTEM_TYPES: &[&str] = &["Guid", "DateTime", "DateTimeOffset", "TimeSpan"];

/// Returns true if the type needs `using System;` in the generated file.
///
/// Nullable (`Guid?`) and array (`Guid[]`) forms are looked through.
#[must_use]
pub fn requires_system_using(type_name: &str) -> bool {
    let base = type_name.trim_end_matches(['?', '[', ']']);
    SYSTEM_TYPES.contains(&base)
}

/// Returns true if any of the columns needs `using System;`.
#[must_use]
pub fn columns_require_system_using(columns: &[Column]) -> bool {
    columns.iter().any(|c| requires_system_using(&c.type_name))
}
