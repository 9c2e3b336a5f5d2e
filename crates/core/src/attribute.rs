//! The attribute-kind registry.
//!
//! A project carries generic many-to-many associations ("attributes")
//! against named lookup dimensions. Each dimension is a fixed enum variant
//! mapped to a concrete lookup table, so dispatch is a match on a tagged
//! variant rather than runtime table resolution by string.

use crate::error::CoreError;

/// A registered attribute dimension for a master project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Industry sectors, backed by the `sectors` lookup table.
    Sector,
    /// Skills/expertise, backed by the `skills` lookup table.
    Expertise,
}

impl AttributeKind {
    /// All registered kinds.
    pub const ALL: &'static [AttributeKind] = &[AttributeKind::Sector, AttributeKind::Expertise];

    /// Resolve a map name to its kind.
    ///
    /// Fails with a validation error for names outside the registry.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            "sector" => Ok(AttributeKind::Sector),
            "expertise" => Ok(AttributeKind::Expertise),
            other => Err(CoreError::validation(format!(
                "attribute type {other} not supported"
            ))),
        }
    }

    /// The map name stored in the association rows.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Sector => "sector",
            AttributeKind::Expertise => "expertise",
        }
    }

    /// The lookup table this kind resolves into.
    pub fn lookup_table(self) -> &'static str {
        match self {
            AttributeKind::Sector => "sectors",
            AttributeKind::Expertise => "skills",
        }
    }
}
