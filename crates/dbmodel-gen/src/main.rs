//! dbmodel-gen CLI
//!
//! Command-line tool generating C# classes from table schemas.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dbmodel_gen::prelude::*;

/// Generates C# value objects for database tables.
#[derive(Parser)]
#[command(name = "dbmodel-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project directory receiving the `Generated/Db` tree.
    #[arg(short, long, env = "DBMODEL_PROJECT_PATH", default_value = ".")]
    project_path: PathBuf,

    /// Interfaces to implement, e.g. "Odin.Api.IIdentity;Odin.Api.IGroupEntity(role_id,group_id!)".
    #[arg(short, long, env = "DBMODEL_ENTITY_INTERFACE")]
    entity_interface: Option<String>,

    /// Attribute put on primary key properties, e.g. "System.ComponentModel.DataAnnotations.Key".
    #[arg(long, env = "DBMODEL_PRIMARY_KEY_ATTRIBUTE")]
    primary_key_attribute: Option<String>,

    /// Attribute put on auto-increment properties.
    #[arg(long, env = "DBMODEL_AUTO_INCREMENT_ATTRIBUTE")]
    auto_increment_attribute: Option<String>,

    /// Suffix appended to every class name.
    #[arg(short, long, env = "DBMODEL_SUFFIX")]
    suffix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one class file per table.
    Generate {
        /// Schema files (JSON).
        #[arg(required = true)]
        schemas: Vec<PathBuf>,
    },

    /// Print generated classes without writing files.
    Show {
        /// Schema file (JSON).
        schema: PathBuf,

        /// Only show the class of this table.
        #[arg(short, long)]
        table: Option<String>,
    },
}

impl Cli {
    fn parameters(&self) -> std::io::Result<Parameters> {
        Ok(Parameters {
            project_path: std::fs::canonicalize(&self.project_path)?,
            entity_interface: self.entity_interface.clone(),
            primary_key_attribute: self.primary_key_attribute.clone(),
            auto_increment_attribute: self.auto_increment_attribute.clone(),
            suffix: self.suffix.clone(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let parameters = cli.parameters()?;

    match &cli.command {
        Commands::Generate { schemas } => {
            let mut total = 0;
            for path in schemas {
                let schema = load_schema(path)?;
                total += generate(&schema, &parameters)?.len();
            }
            info!("Generated {} class(es) from {} schema(s).", total, schemas.len());
        }

        Commands::Show { schema, table } => {
            let schema = load_schema(schema)?;
            let ns = class_namespace(&schema, &parameters)?;

            let classes = match table {
                Some(name) => {
                    let table = schema
                        .get_table(name)
                        .ok_or_else(|| GenerateError::TableNotFound(name.clone()))?;
                    vec![render_table(table, &ns, &parameters)?]
                }
                None => render(&schema, &parameters)?,
            };

            for class in &classes {
                println!("// {}", class.file_name());
                println!("{}\n", class.content);
            }
        }
    }

    Ok(())
}
