#![allow(dead_code)]

use dbmodel_core::{generate_class, Column, Error, Table};

pub const NS: &str = "Project.Generated.Global";

pub fn generate(
    table: &Table,
    entity_interface: Option<&str>,
    primary_key_attribute: Option<&str>,
    auto_increment_attribute: Option<&str>,
    suffix: Option<&str>,
) -> String {
    generate_class(
        NS,
        table,
        entity_interface,
        primary_key_attribute,
        auto_increment_attribute,
        suffix,
    )
    .unwrap_or_else(|e| panic!("Failed to generate class for {table}\nError: {e:?}"))
}

pub fn generate_err(table: &Table, entity_interface: &str) -> Error {
    generate_class(NS, table, Some(entity_interface), None, None, None)
        .expect_err(&format!("Expected format error for: {entity_interface}"))
}

pub fn user_profile(type_name: &str) -> Table {
    Table::new("user_profile").column(Column::new("id", type_name).primary_key())
}

/// The `class X : ...` header line of generated code.
pub fn header(code: &str) -> &str {
    code.lines()
        .find(|l| l.contains("public sealed class"))
        .unwrap_or_else(|| panic!("No class header in:\n{code}"))
        .trim()
}

/// All `using` lines, in order.
pub fn usings(code: &str) -> Vec<&str> {
    code.lines().filter(|l| l.starts_with("using ")).collect()
}
