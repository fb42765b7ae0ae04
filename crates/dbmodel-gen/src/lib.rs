//! Generates C# value objects for database tables.
//!
//! `dbmodel-gen` drives [`dbmodel_core`] over a whole schema:
//! - derives the namespace from the project and script directory names
//! - recreates `<project>/Generated/Db/<scripts>` on every run
//! - writes one `<ClassName>.cs` file per table
//!
//! # Example
//!
//! ```rust,no_run
//! use dbmodel_gen::prelude::*;
//!
//! let schema = load_schema("db/scripts/Global/schema.json".as_ref())?;
//! let parameters = Parameters::new("/src/Odin.Api")
//!     .entity_interface("Odin.Api.IIdentity")
//!     .primary_key_attribute("System.ComponentModel.DataAnnotations.Key")
//!     .suffix("Db");
//!
//! for file in generate(&schema, &parameters)? {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), GenerateError>(())
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Write classes for every schema
//! dbmodel-gen --project-path . --suffix Db generate db/Global.json db/Audit.json
//!
//! # Print the class of one table
//! dbmodel-gen --entity-interface "Odin.Api.IIdentity" show db/Global.json --table user_profile
//! ```

pub mod error;
pub mod generator;
pub mod params;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{GenerateError, Result};
    pub use crate::generator::{
        class_namespace, generate, load_schema, output_directory, render, render_table,
        GeneratedClass,
    };
    pub use crate::params::Parameters;
    pub use dbmodel_core::{Column, Schema, Table};
}
