//! Persistence formats.
//!
//! The external interface accepts exactly the case-sensitive tags
//! `"JSON"` and `"YAML"`; anything else is unsupported and rejected at
//! the boundary rather than silently defaulted.

use std::fmt;

/// Closed set of supported persistence formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// All supported formats, in canonical enumeration order.
    pub const ALL: [Format; 2] = [Format::Json, Format::Yaml];

    /// Parses an external format tag. Case-sensitive.
    pub fn parse_tag(tag: &str) -> Option<Format> {
        match tag {
            "JSON" => Some(Format::Json),
            "YAML" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Canonical external tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// Canonical file extension, shared by save and load.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_accepts_canonical_tags() {
        assert_eq!(Format::parse_tag("JSON"), Some(Format::Json));
        assert_eq!(Format::parse_tag("YAML"), Some(Format::Yaml));
    }

    #[test]
    fn test_parse_tag_is_case_sensitive() {
        assert_eq!(Format::parse_tag("json"), None);
        assert_eq!(Format::parse_tag("Yaml"), None);
        assert_eq!(Format::parse_tag("XML"), None);
        assert_eq!(Format::parse_tag(""), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Format::Json.extension(), "json");
        assert_eq!(Format::Yaml.extension(), "yaml");
    }

    #[test]
    fn test_canonical_order_json_first() {
        assert_eq!(Format::ALL, [Format::Json, Format::Yaml]);
    }
}
