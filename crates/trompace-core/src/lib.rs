//! Mutation builders for the TROMPA Contributor Environment.
//!
//! This crate renders GraphQL mutation bodies for the entity types held in
//! the CE knowledge graph (media objects, persons, music compositions and
//! entry points). Every builder validates its input and returns a plain
//! string; nothing here performs I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod arguments;
pub mod error;
pub mod language;
pub mod mutations;
pub mod templates;

pub use arguments::{ArgValue, Arguments, Date};
pub use error::{Result, ValidationError};
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use templates::{document, LinkVerb};
