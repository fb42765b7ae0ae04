//! # dbmodel-core
//!
//! Turns table descriptions into immutable C# value objects.
//!
//! This crate provides:
//! - A schema model (`Table`, `Column`) handed over by a DDL front end
//! - A small specification language for conditional interface implementation
//! - A matcher deciding which interfaces a table satisfies
//! - A deterministic emitter producing one class per table
//!
//! ## Interface specifications
//!
//! Specifications are `;`-separated `Namespace.Name(prop, prop!)` segments. An
//! interface applies to a table when every listed property names a column
//! (case-insensitively). Properties suffixed with `!` bind the column type as a
//! generic argument. A bare `Namespace.Name` is shorthand for
//! `Namespace.Name(id!)`.
//!
//! ```rust
//! use dbmodel_core::{Column, Table, generate_class};
//!
//! let table = Table::new("user_profile")
//!     .column(Column::new("id", "Guid").not_null().primary_key());
//!
//! let code = generate_class(
//!     "Project.Generated.Global",
//!     &table,
//!     Some("Odin.Api.IIdentity"),
//!     None,
//!     None,
//!     Some("db"),
//! )
//! .unwrap();
//!
//! assert!(code.starts_with("using System;\nusing Odin.Api;\n"));
//! assert!(code.contains("public sealed class UserProfileDb : IIdentity<Guid>"));
//! ```

pub mod codegen;
pub mod error;
pub mod matcher;
pub mod naming;
pub mod schema;
pub mod spec;
pub mod types;

pub use codegen::generate_class;
pub use error::{Error, Result};
pub use matcher::{match_interface, match_interfaces, MatchedInterface};
pub use naming::{class_name, to_pascal_case};
pub use schema::{Column, Schema, Table};
pub use spec::{
    parse_attribute_class, parse_interface_specs, AttributeDescriptor, InterfaceDescriptor,
    InterfaceProperty,
};
