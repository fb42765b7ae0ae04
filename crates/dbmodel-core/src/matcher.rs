//! Decides which interfaces a table implements.
//!
//! Matching only looks at column names. The type of a bound column is used
//! as the generic argument as is, without checking it against the interface.

use tracing::debug;

use crate::schema::Table;
use crate::spec::InterfaceDescriptor;

/// An interface that applies to a table, with its rendered declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedInterface<'a> {
    /// The matching descriptor.
    pub descriptor: &'a InterfaceDescriptor,
    /// The declaration as written after `:`, e.g. `IIdentity<Guid>`.
    pub declaration: String,
}

impl MatchedInterface<'_> {
    /// Namespace to import for this interface.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.descriptor.namespace
    }
}

/// Matches one descriptor against the table.
///
/// Every property must name a column, ignoring case. The columns backing
/// bound properties supply the generic arguments, in property order.
#[must_use]
pub fn match_interface<'a>(
    descriptor: &'a InterfaceDescriptor,
    table: &Table,
) -> Option<MatchedInterface<'a>> {
    let columns = descriptor
        .properties
        .iter()
        .map(|p| table.find_column_ignore_case(&p.name).map(|c| (p, c)))
        .collect::<Option<Vec<_>>>()?;

    let arguments: Vec<String> = columns
        .iter()
        .filter(|(p, _)| p.bound)
        .map(|(_, c)| c.type_as_string())
        .collect();

    let declaration = if arguments.is_empty() {
        descriptor.name.clone()
    } else {
        format!("{}<{}>", descriptor.name, arguments.join(", "))
    };

    Some(MatchedInterface {
        descriptor,
        declaration,
    })
}

/// Returns the descriptors the table satisfies, in input order.
#[must_use]
pub fn match_interfaces<'a>(
    table: &Table,
    descriptors: &'a [InterfaceDescriptor],
) -> Vec<MatchedInterface<'a>> {
    descriptors
        .iter()
        .filter_map(|d| {
            let matched = match_interface(d, table);
            debug!(
                table = %table.name,
                interface = %d,
                satisfied = matched.is_some(),
                "interface match"
            );
            matched
        })
        .collect()
}
