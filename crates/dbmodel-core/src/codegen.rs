//! C# class generation.
//!
//! Generates one immutable class per table: `using` directives, a namespace,
//! a sealed class with a constructor taking every column and one get-only
//! property per column. The layout is fixed so that regenerated files diff
//! cleanly.

use tracing::debug;

use crate::error::Result;
use crate::matcher::{match_interfaces, MatchedInterface};
use crate::naming::{class_name, to_pascal_case};
use crate::schema::Table;
use crate::spec::{parse_attribute_class, parse_interface_specs, AttributeDescriptor};
use crate::types::columns_require_system_using;

/// Generates the C# source of the class for `table`.
///
/// # Arguments
///
/// * `ns` — Namespace of the generated class.
/// * `table` — The table to generate a class for.
/// * `entity_interface` — `;`-separated interface specification.
/// * `primary_key_attribute` — `Namespace.ClassName` of the attribute put on
///   primary key properties.
/// * `auto_increment_attribute` — `Namespace.ClassName` of the attribute put
///   on auto-increment properties.
/// * `suffix` — Appended to the table name before building the class name.
///
/// # Errors
///
/// Returns [`Error::Format`](crate::Error::Format) if one of the
/// specifications is malformed. Nothing is generated in that case.
pub fn generate_class(
    ns: &str,
    table: &Table,
    entity_interface: Option<&str>,
    primary_key_attribute: Option<&str>,
    auto_increment_attribute: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let interfaces = parse_interface_specs(entity_interface)?;
    let primary_key_attribute = parse_attribute_class(primary_key_attribute)?;
    let auto_increment_attribute = parse_attribute_class(auto_increment_attribute)?;

    let class_name = class_name(table, suffix);
    let matching = match_interfaces(table, &interfaces);
    debug!(
        table = %table.name,
        class = %class_name,
        interfaces = matching.len(),
        "generating class"
    );

    let mut out = String::new();
    for import in imports(
        table,
        &matching,
        primary_key_attribute.as_ref(),
        auto_increment_attribute.as_ref(),
    ) {
        out.push_str(&format!("using {import};\n"));
    }

    out.push_str(&format!("\nnamespace {ns}\n{{\n\n"));
    out.push_str(&format!("\tpublic sealed class {class_name}"));
    if !matching.is_empty() {
        out.push_str(" : ");
        out.push_str(&join(matching.iter().map(|m| m.declaration.as_str()), ", "));
    }
    out.push_str("\n\t{\n\n");

    render_constructor(&mut out, &class_name, table);
    render_properties(
        &mut out,
        table,
        primary_key_attribute.as_ref(),
        auto_increment_attribute.as_ref(),
    );

    out.push_str("\t}\n\n}");
    Ok(out)
}

// ================================================================
// Internal helpers
// ================================================================

/// Namespaces to import, in emission order.
///
/// Interface namespaces are deduplicated among themselves only. The
/// auto-increment attribute is imported alongside the primary key attribute,
/// unless both share a namespace.
fn imports<'a>(
    table: &Table,
    matching: &'a [MatchedInterface<'_>],
    primary_key_attribute: Option<&'a AttributeDescriptor>,
    auto_increment_attribute: Option<&'a AttributeDescriptor>,
) -> Vec<&'a str> {
    let mut imports: Vec<&str> = Vec::new();

    if columns_require_system_using(&table.columns) {
        imports.push("System");
    }

    let mut interface_namespaces: Vec<&str> = Vec::new();
    for matched in matching {
        let ns = matched.namespace();
        if !interface_namespaces.contains(&ns) {
            interface_namespaces.push(ns);
        }
    }
    imports.extend(interface_namespaces);

    let Some(primary_key) = primary_key_attribute else {
        return imports;
    };
    if !table.has_primary_key() {
        return imports;
    }

    if !imported_by_interface(matching, &primary_key.namespace) {
        imports.push(&primary_key.namespace);
    }

    if let Some(auto_increment) = auto_increment_attribute {
        if table.has_auto_increment()
            && !imported_by_interface(matching, &auto_increment.namespace)
            && auto_increment.namespace != primary_key.namespace
        {
            imports.push(&auto_increment.namespace);
        }
    }

    imports
}

/// Returns true if a matched interface lives in `ns`, ignoring case.
fn imported_by_interface(matching: &[MatchedInterface<'_>], ns: &str) -> bool {
    let ns = ns.to_lowercase();
    matching.iter().any(|m| m.namespace().to_lowercase() == ns)
}

/// Renders the constructor assigning every column to its property.
fn render_constructor(out: &mut String, class_name: &str, table: &Table) {
    let args = join(
        table
            .columns
            .iter()
            .map(|c| format!("{} {}", c.type_as_string(), c.name)),
        ", ",
    );
    out.push_str(&format!("\t\tpublic {class_name}({args})\n\t\t{{\n"));

    let assignments = join(
        table
            .columns
            .iter()
            .map(|c| format!("\t\t\t{} = {};", to_pascal_case(&c.name), c.name)),
        "\n",
    );
    out.push_str(&assignments);
    out.push_str("\n\t\t}\n\n");
}

/// Renders one get-only property per column with its attributes.
fn render_properties(
    out: &mut String,
    table: &Table,
    primary_key_attribute: Option<&AttributeDescriptor>,
    auto_increment_attribute: Option<&AttributeDescriptor>,
) {
    for column in &table.columns {
        if let Some(attribute) = primary_key_attribute {
            if table.is_primary_key(&column.name) {
                out.push_str(&format!("\t\t[{}]\n", attribute.name));
            }
        }

        if let Some(attribute) = auto_increment_attribute {
            if column.auto_increment {
                out.push_str(&format!("\t\t[{}]\n", attribute.name));
            }
        }

        out.push_str(&format!(
            "\t\tpublic {} {} {{ get; }}\n\n",
            column.type_as_string(),
            to_pascal_case(&column.name)
        ));
    }
}

fn join<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}
