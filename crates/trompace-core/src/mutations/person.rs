//! Mutations for `Person` nodes (composers, performers and other artists).

use std::fmt;
use std::str::FromStr;

use crate::arguments::{ArgValue, Arguments, Date};
use crate::error::Result;
use crate::language::Language;
use crate::mutations::{
    check_mime_type, opt_language, opt_mime_type, require, Relationship, DEFAULT_FORMAT,
};
use crate::templates::{mutation_create, mutation_delete, mutation_update, LinkVerb};

const CREATE_PERSON: &str = "CreatePerson(
        {parameters}
    ) {
      identifier
    }";

const UPDATE_PERSON: &str = "UpdatePerson(
        {parameters}
    ) {
      identifier
    }";

const DELETE_PERSON: &str = "DeletePerson(
        identifier: {identifier}
    ) {
      identifier
    }";

/// Values of the CE `GenderType` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
    Unknown,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "other" => Ok(Self::Other),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("unknown gender: {}", s)),
        }
    }
}

impl From<Gender> for ArgValue {
    fn from(value: Gender) -> Self {
        Self::constant(value.as_str())
    }
}

/// A person to be created in the CE.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Title of the page the information was extracted from.
    pub title: String,
    /// Who contributed the person to the web resource; a name or base URL.
    pub contributor: String,
    pub creator: String,
    /// URL of the web resource represented by the node.
    pub source: String,
    /// Language the metadata is written in.
    pub language: String,
    /// MIME type of the source page.
    pub format: String,
    pub name: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<Date>,
    pub death_date: Option<Date>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub publisher: Option<String>,
}

impl Person {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        contributor: impl Into<String>,
        creator: impl Into<String>,
        source: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            contributor: contributor.into(),
            creator: creator.into(),
            source: source.into(),
            language: language.into(),
            format: DEFAULT_FORMAT.to_string(),
            name: None,
            family_name: None,
            given_name: None,
            gender: None,
            birth_date: None,
            death_date: None,
            description: None,
            image: None,
            publisher: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    #[must_use]
    pub fn with_given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn with_birth_date(mut self, date: impl Into<Date>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_death_date(mut self, date: impl Into<Date>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Render the `CreatePerson` mutation.
    pub fn create_mutation(&self) -> Result<String> {
        require("title", &self.title)?;
        require("contributor", &self.contributor)?;
        require("creator", &self.creator)?;
        require("source", &self.source)?;
        let language: Language = self.language.parse()?;
        check_mime_type(&self.format)?;

        let mut args = Arguments::new();
        args.push("title", &self.title)
            .push("contributor", &self.contributor)
            .push("creator", &self.creator)
            .push("source", &self.source)
            .push("format", &self.format)
            .push("language", language)
            .push_opt("name", self.name.as_deref())
            .push_opt("familyName", self.family_name.as_deref())
            .push_opt("givenName", self.given_name.as_deref())
            .push_opt("gender", self.gender)
            .push_opt("birthDate", self.birth_date)
            .push_opt("deathDate", self.death_date)
            .push_opt("description", self.description.as_deref())
            .push_opt("image", self.image.as_deref())
            .push_opt("publisher", self.publisher.as_deref());
        Ok(mutation_create(&args, CREATE_PERSON))
    }
}

/// Changes to an existing person. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonUpdate {
    pub identifier: String,
    pub title: Option<String>,
    pub contributor: Option<String>,
    pub creator: Option<String>,
    pub source: Option<String>,
    pub language: Option<String>,
    pub format: Option<String>,
    pub name: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<Date>,
    pub death_date: Option<Date>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub publisher: Option<String>,
}

impl PersonUpdate {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }

    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    #[must_use]
    pub fn with_given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn with_birth_date(mut self, date: impl Into<Date>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_death_date(mut self, date: impl Into<Date>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Render the `UpdatePerson` mutation with the fields that are set.
    pub fn update_mutation(&self) -> Result<String> {
        require("identifier", &self.identifier)?;
        let language = opt_language(self.language.as_deref())?;
        opt_mime_type(self.format.as_deref())?;

        let mut fields = Arguments::new();
        fields
            .push_opt("title", self.title.as_deref())
            .push_opt("contributor", self.contributor.as_deref())
            .push_opt("creator", self.creator.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("format", self.format.as_deref())
            .push_opt("language", language)
            .push_opt("name", self.name.as_deref())
            .push_opt("familyName", self.family_name.as_deref())
            .push_opt("givenName", self.given_name.as_deref())
            .push_opt("gender", self.gender)
            .push_opt("birthDate", self.birth_date)
            .push_opt("deathDate", self.death_date)
            .push_opt("description", self.description.as_deref())
            .push_opt("image", self.image.as_deref())
            .push_opt("publisher", self.publisher.as_deref());
        Ok(mutation_update(&self.identifier, &fields, UPDATE_PERSON))
    }
}

#[must_use]
pub fn delete_mutation(identifier: &str) -> String {
    mutation_delete(identifier, DELETE_PERSON)
}

/// Declare two person nodes as describing the same real person.
#[must_use]
pub fn add_exact_match_mutation(from_identifier: &str, to_identifier: &str) -> String {
    Relationship::PersonExactMatch.link_mutation(LinkVerb::Add, from_identifier, to_identifier)
}

#[must_use]
pub fn merge_exact_match_mutation(from_identifier: &str, to_identifier: &str) -> String {
    Relationship::PersonExactMatch.link_mutation(LinkVerb::Merge, from_identifier, to_identifier)
}

#[must_use]
pub fn remove_exact_match_mutation(from_identifier: &str, to_identifier: &str) -> String {
    Relationship::PersonExactMatch.link_mutation(LinkVerb::Remove, from_identifier, to_identifier)
}
