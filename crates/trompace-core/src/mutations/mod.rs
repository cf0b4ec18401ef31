//! Per-entity mutation builders.
//!
//! Each entity module exposes a create builder, an update builder, a
//! `delete_mutation` function and named relationship mutations. Validation
//! helpers shared by all of them live here.

pub mod entry_point;
pub mod media_object;
pub mod music_composition;
pub mod person;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};
use crate::language::Language;
use crate::templates::{link_template, mutation_link, LinkVerb};

pub use entry_point::{EntryPoint, EntryPointUpdate};
pub use media_object::{MediaObject, MediaObjectUpdate};
pub use music_composition::{MusicComposition, MusicCompositionUpdate};
pub use person::{Gender, Person, PersonUpdate};

/// Format used for web-resource metadata when the caller does not set one.
pub const DEFAULT_FORMAT: &str = "text/html";

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Minimal MIME type shape check: the value must contain a `/`.
pub fn check_mime_type(value: &str) -> Result<()> {
    if value.contains('/') {
        Ok(())
    } else {
        Err(ValidationError::NotAMimeType(value.to_string()))
    }
}

pub(crate) fn check_mime_types(values: &[String]) -> Result<()> {
    values.iter().try_for_each(|value| check_mime_type(value))
}

/// Validate an optional format, skipping absent and empty values.
pub(crate) fn opt_mime_type(value: Option<&str>) -> Result<()> {
    match value {
        Some(value) if !value.is_empty() => check_mime_type(value),
        _ => Ok(()),
    }
}

pub(crate) fn opt_language(value: Option<&str>) -> Result<Option<Language>> {
    match value {
        Some(code) if !code.is_empty() => code.parse().map(Some),
        _ => Ok(None),
    }
}

/// The entity types the CE stores and these builders cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    MediaObject,
    Person,
    MusicComposition,
    EntryPoint,
}

impl EntityType {
    /// Render the delete mutation for a node of this type.
    #[must_use]
    pub fn delete_mutation(self, identifier: &str) -> String {
        match self {
            Self::MediaObject => media_object::delete_mutation(identifier),
            Self::Person => person::delete_mutation(identifier),
            Self::MusicComposition => music_composition::delete_mutation(identifier),
            Self::EntryPoint => entry_point::delete_mutation(identifier),
        }
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "mediaobject" => Ok(Self::MediaObject),
            "person" | "artist" => Ok(Self::Person),
            "musiccomposition" => Ok(Self::MusicComposition),
            "entrypoint" => Ok(Self::EntryPoint),
            _ => Err(format!("unknown entity type: {}", s)),
        }
    }
}

/// A directed relationship between two existing CE nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    MusicCompositionBroadMatch,
    MusicCompositionExampleOfWork,
    MediaObjectExampleOfWork,
    MediaObjectEncoding,
    PersonExactMatch,
    EntryPointPotentialAction,
}

impl Relationship {
    pub const ALL: [Self; 6] = [
        Self::MusicCompositionBroadMatch,
        Self::MusicCompositionExampleOfWork,
        Self::MediaObjectExampleOfWork,
        Self::MediaObjectEncoding,
        Self::PersonExactMatch,
        Self::EntryPointPotentialAction,
    ];

    /// The relationship name used in the CE mutation, without the verb.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MusicCompositionBroadMatch => "MusicCompositionBroadMatch",
            Self::MusicCompositionExampleOfWork => "MusicCompositionExampleOfWork",
            Self::MediaObjectExampleOfWork => "MediaObjectExampleOfWork",
            Self::MediaObjectEncoding => "MediaObjectEncoding",
            Self::PersonExactMatch => "PersonExactMatch",
            Self::EntryPointPotentialAction => "EntryPointPotentialAction",
        }
    }

    /// Render the `verb` form of this relationship from one node to another.
    #[must_use]
    pub fn link_mutation(self, verb: LinkVerb, from_identifier: &str, to_identifier: &str) -> String {
        mutation_link(from_identifier, to_identifier, &link_template(verb, self.name()))
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|relationship| relationship.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown relationship: {}", s))
    }
}
