//! Mutations for `EntryPoint` nodes: the public entry of an application
//! (an algorithm or web service) registered in the CE.

use crate::arguments::Arguments;
use crate::error::Result;
use crate::language::Language;
use crate::mutations::{
    check_mime_type, check_mime_types, opt_language, opt_mime_type, require, Relationship,
    DEFAULT_FORMAT,
};
use crate::templates::{mutation_create, mutation_delete, mutation_update, LinkVerb};

const CREATE_ENTRY_POINT: &str = "CreateEntryPoint(
        {parameters}
    ) {
      identifier
    }";

const UPDATE_ENTRY_POINT: &str = "UpdateEntryPoint(
        {parameters}
    ) {
      identifier
    }";

const DELETE_ENTRY_POINT: &str = "DeleteEntryPoint(
        identifier: {identifier}
    ) {
      identifier
    }";

fn strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// An entry point to be created in the CE.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPoint {
    pub name: String,
    pub contributor: String,
    pub subject: String,
    pub description: String,
    pub creator: String,
    pub source: String,
    pub language: String,
    /// Free-text description of the platform running the action.
    pub action_platform: String,
    /// MIME types the entry point accepts.
    pub content_type: Vec<String>,
    /// MIME types the entry point produces.
    pub encoding_type: Vec<String>,
    pub format: String,
}

impl EntryPoint {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        contributor: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        creator: impl Into<String>,
        source: impl Into<String>,
        language: impl Into<String>,
        action_platform: impl Into<String>,
        content_type: impl IntoIterator<Item = impl Into<String>>,
        encoding_type: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            contributor: contributor.into(),
            subject: subject.into(),
            description: description.into(),
            creator: creator.into(),
            source: source.into(),
            language: language.into(),
            action_platform: action_platform.into(),
            content_type: strings(content_type),
            encoding_type: strings(encoding_type),
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Render the `CreateEntryPoint` mutation.
    pub fn create_mutation(&self) -> Result<String> {
        require("name", &self.name)?;
        require("contributor", &self.contributor)?;
        require("subject", &self.subject)?;
        require("description", &self.description)?;
        require("creator", &self.creator)?;
        require("source", &self.source)?;
        require("actionPlatform", &self.action_platform)?;
        let language: Language = self.language.parse()?;
        check_mime_type(&self.format)?;
        check_mime_types(&self.content_type)?;
        check_mime_types(&self.encoding_type)?;

        let mut args = Arguments::new();
        args.push("name", &self.name)
            .push("contributor", &self.contributor)
            .push("subject", &self.subject)
            .push("description", &self.description)
            .push("creator", &self.creator)
            .push("source", &self.source)
            .push("format", &self.format)
            .push("language", language)
            .push("actionPlatform", &self.action_platform)
            .push("contentType", self.content_type.clone())
            .push("encodingType", self.encoding_type.clone());
        Ok(mutation_create(&args, CREATE_ENTRY_POINT))
    }
}

/// Changes to an existing entry point. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPointUpdate {
    pub identifier: String,
    pub name: Option<String>,
    pub contributor: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub creator: Option<String>,
    pub source: Option<String>,
    pub format: Option<String>,
    pub language: Option<String>,
    pub action_platform: Option<String>,
    pub content_type: Option<Vec<String>>,
    pub encoding_type: Option<Vec<String>>,
}

impl EntryPointUpdate {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_action_platform(mut self, action_platform: impl Into<String>) -> Self {
        self.action_platform = Some(action_platform.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.content_type = Some(strings(content_type));
        self
    }

    #[must_use]
    pub fn with_encoding_type(mut self, encoding_type: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.encoding_type = Some(strings(encoding_type));
        self
    }

    /// Render the `UpdateEntryPoint` mutation with the fields that are set.
    pub fn update_mutation(&self) -> Result<String> {
        require("identifier", &self.identifier)?;
        let language = opt_language(self.language.as_deref())?;
        opt_mime_type(self.format.as_deref())?;
        if let Some(content_type) = &self.content_type {
            check_mime_types(content_type)?;
        }
        if let Some(encoding_type) = &self.encoding_type {
            check_mime_types(encoding_type)?;
        }

        let mut fields = Arguments::new();
        fields
            .push_opt("name", self.name.as_deref())
            .push_opt("contributor", self.contributor.as_deref())
            .push_opt("subject", self.subject.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("creator", self.creator.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("format", self.format.as_deref())
            .push_opt("language", language)
            .push_opt("actionPlatform", self.action_platform.as_deref())
            .push_opt("contentType", self.content_type.clone())
            .push_opt("encodingType", self.encoding_type.clone());
        Ok(mutation_update(&self.identifier, &fields, UPDATE_ENTRY_POINT))
    }
}

#[must_use]
pub fn delete_mutation(identifier: &str) -> String {
    mutation_delete(identifier, DELETE_ENTRY_POINT)
}

/// Attach a control action as a `potentialAction` of an entry point.
#[must_use]
pub fn add_potential_action_mutation(entry_point_id: &str, control_action_id: &str) -> String {
    Relationship::EntryPointPotentialAction.link_mutation(LinkVerb::Add, entry_point_id, control_action_id)
}

#[must_use]
pub fn remove_potential_action_mutation(entry_point_id: &str, control_action_id: &str) -> String {
    Relationship::EntryPointPotentialAction.link_mutation(LinkVerb::Remove, entry_point_id, control_action_id)
}
