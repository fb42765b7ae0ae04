//! Parsers for the interface and attribute specification strings.
//!
//! An interface specification is a `;`-separated list of segments:
//!
//! ```text
//! Odin.Api.IIdentity;Odin.Api.IRoleEntity(role_id);Odin.Api.IGroupEntity(role_id,group_id!)
//! ```
//!
//! Each segment names an interface by its full path and, optionally, the
//! columns a table needs for the interface to apply. A trailing `!` binds the
//! column's type as a generic argument of the interface. Without a property
//! list the interface requires a bound `id` column.
//!
//! An attribute specification is a single `Namespace.ClassName`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ns>\w+(?:\.\w+)*)\.(?P<name>\w+)\s*(?:\((?P<props>[^()]*)\))?$")
        .expect("Invalid interface segment regex")
});

/// Property of an interface that a table column must provide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceProperty {
    /// Column name, compared case-insensitively.
    pub name: String,
    /// Whether the column type becomes a generic argument.
    pub bound: bool,
}

impl InterfaceProperty {
    /// A property that only has to exist.
    #[must_use]
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: false,
        }
    }

    /// A property whose column type is passed as a generic argument.
    #[must_use]
    pub fn bound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: true,
        }
    }

    fn parse(token: &str, segment: &str) -> Result<Self> {
        let token = token.trim();
        let (name, bound) = match token.strip_suffix('!') {
            Some(name) => (name, true),
            None => (token, false),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(Error::format(segment));
        }
        Ok(Self {
            name: name.to_string(),
            bound,
        })
    }
}

impl fmt::Display for InterfaceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.bound {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// An interface a generated class may implement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceDescriptor {
    /// Namespace to import, e.g. `Odin.Api`.
    pub namespace: String,
    /// Simple interface name, e.g. `IIdentity`.
    pub name: String,
    /// Required properties, in declaration order.
    pub properties: Vec<InterfaceProperty>,
}

impl InterfaceDescriptor {
    /// Creates a descriptor with an explicit property list.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        properties: Vec<InterfaceProperty>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            properties,
        }
    }

    /// Properties contributing generic arguments, in order.
    pub fn bound_properties(&self) -> impl Iterator<Item = &InterfaceProperty> {
        self.properties.iter().filter(|p| p.bound)
    }
}

impl FromStr for InterfaceDescriptor {
    type Err = Error;

    fn from_str(segment: &str) -> Result<Self> {
        let caps = SEGMENT
            .captures(segment)
            .ok_or_else(|| Error::format(segment))?;

        let properties = match caps.name("props") {
            None => vec![InterfaceProperty::bound("id")],
            Some(list) if list.as_str().trim().is_empty() => Vec::new(),
            Some(list) => list
                .as_str()
                .split(',')
                .map(|token| InterfaceProperty::parse(token, segment))
                .collect::<Result<_>>()?,
        };

        Ok(Self::new(&caps["ns"], &caps["name"], properties))
    }
}

impl fmt::Display for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.namespace, self.name)?;
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{property}")?;
        }
        f.write_str(")")
    }
}

/// A marker attribute placed on primary key or auto-increment properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    /// Namespace to import.
    pub namespace: String,
    /// Attribute class name, written as `[Name]`.
    pub name: String,
}

impl FromStr for AttributeDescriptor {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        match trimmed.rsplit_once('.') {
            Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => Ok(Self {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::format(spec)),
        }
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Parses a `;`-separated interface specification.
///
/// Returns an empty list when no specification is configured. Fails on the
/// first segment that is not of the form `Namespace.ClassName[(props)]`.
pub fn parse_interface_specs(spec: Option<&str>) -> Result<Vec<InterfaceDescriptor>> {
    let Some(spec) = spec else {
        return Ok(Vec::new());
    };
    spec.split(';')
        .map(|segment| segment.trim().parse::<InterfaceDescriptor>())
        .collect()
}

/// Parses a `Namespace.ClassName` attribute specification.
pub fn parse_attribute_class(spec: Option<&str>) -> Result<Option<AttributeDescriptor>> {
    spec.map(str::parse::<AttributeDescriptor>).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> Vec<InterfaceDescriptor> {
        parse_interface_specs(Some(spec))
            .unwrap_or_else(|e| panic!("Failed to parse: {spec}\nError: {e:?}"))
    }

    #[test]
    fn absent_spec_yields_nothing() {
        assert!(parse_interface_specs(None).unwrap().is_empty());
    }

    #[test]
    fn bare_interface_defaults_to_bound_id() {
        let parsed = parse("Odin.Api.IIdentity");
        assert_eq!(
            parsed,
            vec![InterfaceDescriptor::new(
                "Odin.Api",
                "IIdentity",
                vec![InterfaceProperty::bound("id")]
            )]
        );
        assert_eq!(parsed, parse("Odin.Api.IIdentity(id!)"));
    }

    #[test]
    fn namespace_is_greedy() {
        let parsed = parse("Odin.Api.Entity.IDbEntity");
        assert_eq!(parsed[0].namespace, "Odin.Api.Entity");
        assert_eq!(parsed[0].name, "IDbEntity");
    }

    #[test]
    fn property_list_marks_bound_properties() {
        let parsed = parse("Odin.Api.IGroupEntity(role_id,group_id!)");
        assert_eq!(
            parsed[0].properties,
            vec![
                InterfaceProperty::unbound("role_id"),
                InterfaceProperty::bound("group_id")
            ]
        );
        let bound: Vec<_> = parsed[0].bound_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(bound, vec!["group_id"]);
    }

    #[test]
    fn empty_property_list_has_no_properties() {
        assert!(parse("Odin.Api.IMarker()")[0].properties.is_empty());
        assert!(parse("Odin.Api.IMarker( )")[0].properties.is_empty());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let parsed = parse(" Odin.Api.IRoleEntity (role_id) ; Odin.Api.IGroupEntity( role_id , group_id! ) ");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "IRoleEntity");
        assert_eq!(parsed[1].properties[1], InterfaceProperty::bound("group_id"));
    }

    #[test]
    fn segments_keep_input_order() {
        let names: Vec<_> = parse("A.IOne;B.ITwo;A.IThree")
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["IOne", "ITwo", "IThree"]);
    }

    #[test]
    fn missing_namespace_is_format_error() {
        assert_eq!(
            parse_interface_specs(Some("BadSpecNoNamespace")),
            Err(Error::format("BadSpecNoNamespace"))
        );
    }

    #[test]
    fn one_bad_segment_fails_everything() {
        let err = parse_interface_specs(Some("Odin.Api.IIdentity;Broken")).unwrap_err();
        assert_eq!(err, Error::format("Broken"));
    }

    #[test]
    fn empty_segment_is_format_error() {
        assert!(parse_interface_specs(Some("Odin.Api.IIdentity;")).is_err());
        assert!(parse_interface_specs(Some("")).is_err());
    }

    #[test]
    fn malformed_properties_are_format_errors() {
        for spec in [
            "Odin.Api.IFoo(a,,b)",
            "Odin.Api.IFoo(a b)",
            "Odin.Api.IFoo(!)",
            "Odin.Api.IFoo(a!!)",
            "Odin.Api.IFoo(a",
            "Odin.Api.IFoo(a)x",
        ] {
            assert!(parse_interface_specs(Some(spec)).is_err(), "{spec}");
        }
    }

    #[test]
    fn display_round_trips() {
        let parsed = parse("Odin.Api.IGroupEntity(role_id,group_id!)");
        assert_eq!(parsed[0].to_string(), "Odin.Api.IGroupEntity(role_id,group_id!)");
        assert_eq!(parse(&parsed[0].to_string()), parsed);
    }

    #[test]
    fn attribute_splits_on_last_dot() {
        let attr = parse_attribute_class(Some("System.ComponentModel.DataAnnotations.Key"))
            .unwrap()
            .unwrap();
        assert_eq!(attr.namespace, "System.ComponentModel.DataAnnotations");
        assert_eq!(attr.name, "Key");
    }

    #[test]
    fn absent_attribute_is_none() {
        assert_eq!(parse_attribute_class(None), Ok(None));
    }

    #[test]
    fn attribute_without_dot_is_format_error() {
        assert_eq!(
            parse_attribute_class(Some("Key")),
            Err(Error::format("Key"))
        );
        assert!(parse_attribute_class(Some("Odin.")).is_err());
        assert!(parse_attribute_class(Some(".Key")).is_err());
    }
}
