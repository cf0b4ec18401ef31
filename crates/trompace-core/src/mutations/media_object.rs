//! Mutations for `MediaObject` nodes: an audio, video or score file
//! published on the web.

use crate::arguments::{Arguments, Date};
use crate::error::Result;
use crate::mutations::{check_mime_type, opt_language, opt_mime_type, require, Relationship};
use crate::templates::{mutation_create, mutation_delete, mutation_update, LinkVerb};

const CREATE_MEDIA_OBJECT: &str = "CreateMediaObject(
        {parameters}
    ) {
      identifier
    }";

const UPDATE_MEDIA_OBJECT: &str = "UpdateMediaObject(
        {parameters}
    ) {
      identifier
    }";

const DELETE_MEDIA_OBJECT: &str = "DeleteMediaObject(
        identifier: {identifier}
    ) {
      identifier
    }";

/// A media object to be created in the CE.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaObject {
    /// Person, organization or service that created the web resource.
    pub creator: String,
    /// MIME type of the encoding.
    pub encoding_format: String,
    pub content_url: String,
    pub embed_url: String,
    /// Title of the page the information was extracted from.
    pub title: Option<String>,
    /// URL of the web resource represented by the node.
    pub source: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub in_language: Option<String>,
    pub date_created: Option<Date>,
}

impl MediaObject {
    #[must_use]
    pub fn new(
        creator: impl Into<String>,
        encoding_format: impl Into<String>,
        content_url: impl Into<String>,
        embed_url: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            encoding_format: encoding_format.into(),
            content_url: content_url.into(),
            embed_url: embed_url.into(),
            title: None,
            source: None,
            name: None,
            description: None,
            in_language: None,
            date_created: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_in_language(mut self, code: impl Into<String>) -> Self {
        self.in_language = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_date_created(mut self, date: impl Into<Date>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    /// Render the `CreateMediaObject` mutation.
    ///
    /// # Errors
    /// `NotAMimeType` if `encoding_format` has no `/`, `UnsupportedLanguage`
    /// for an unknown `in_language`, `MissingField` for an empty required
    /// field.
    pub fn create_mutation(&self) -> Result<String> {
        require("creator", &self.creator)?;
        require("encodingFormat", &self.encoding_format)?;
        require("contentUrl", &self.content_url)?;
        require("embedUrl", &self.embed_url)?;
        check_mime_type(&self.encoding_format)?;
        let in_language = opt_language(self.in_language.as_deref())?;

        let mut args = Arguments::new();
        args.push("creator", &self.creator)
            .push("encodingFormat", &self.encoding_format)
            .push("contentUrl", &self.content_url)
            .push("embedUrl", &self.embed_url)
            .push_opt("title", self.title.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("name", self.name.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("inLanguage", in_language)
            .push_opt("dateCreated", self.date_created);
        Ok(mutation_create(&args, CREATE_MEDIA_OBJECT))
    }
}

/// Changes to an existing media object. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaObjectUpdate {
    pub identifier: String,
    pub creator: Option<String>,
    pub encoding_format: Option<String>,
    pub content_url: Option<String>,
    pub embed_url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub in_language: Option<String>,
    pub date_created: Option<Date>,
}

impl MediaObjectUpdate {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    #[must_use]
    pub fn with_encoding_format(mut self, encoding_format: impl Into<String>) -> Self {
        self.encoding_format = Some(encoding_format.into());
        self
    }

    #[must_use]
    pub fn with_content_url(mut self, content_url: impl Into<String>) -> Self {
        self.content_url = Some(content_url.into());
        self
    }

    #[must_use]
    pub fn with_embed_url(mut self, embed_url: impl Into<String>) -> Self {
        self.embed_url = Some(embed_url.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_in_language(mut self, code: impl Into<String>) -> Self {
        self.in_language = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_date_created(mut self, date: impl Into<Date>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    /// Render the `UpdateMediaObject` mutation with the fields that are set.
    pub fn update_mutation(&self) -> Result<String> {
        require("identifier", &self.identifier)?;
        opt_mime_type(self.encoding_format.as_deref())?;
        let in_language = opt_language(self.in_language.as_deref())?;

        let mut fields = Arguments::new();
        fields
            .push_opt("creator", self.creator.as_deref())
            .push_opt("encodingFormat", self.encoding_format.as_deref())
            .push_opt("contentUrl", self.content_url.as_deref())
            .push_opt("embedUrl", self.embed_url.as_deref())
            .push_opt("title", self.title.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("name", self.name.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("inLanguage", in_language)
            .push_opt("dateCreated", self.date_created);
        Ok(mutation_update(&self.identifier, &fields, UPDATE_MEDIA_OBJECT))
    }
}

#[must_use]
pub fn delete_mutation(identifier: &str) -> String {
    mutation_delete(identifier, DELETE_MEDIA_OBJECT)
}

/// Link a media object as an `exampleOfWork` of a music composition.
#[must_use]
pub fn add_example_of_work_mutation(media_object_id: &str, composition_id: &str) -> String {
    Relationship::MediaObjectExampleOfWork.link_mutation(LinkVerb::Add, media_object_id, composition_id)
}

/// Like [`add_example_of_work_mutation`], but only if the link is absent.
#[must_use]
pub fn merge_example_of_work_mutation(media_object_id: &str, composition_id: &str) -> String {
    Relationship::MediaObjectExampleOfWork.link_mutation(LinkVerb::Merge, media_object_id, composition_id)
}

#[must_use]
pub fn remove_example_of_work_mutation(media_object_id: &str, composition_id: &str) -> String {
    Relationship::MediaObjectExampleOfWork.link_mutation(LinkVerb::Remove, media_object_id, composition_id)
}

/// Link a node to the media object that encodes it.
#[must_use]
pub fn add_encoding_mutation(media_object_id: &str, encoded_id: &str) -> String {
    Relationship::MediaObjectEncoding.link_mutation(LinkVerb::Add, media_object_id, encoded_id)
}

#[must_use]
pub fn merge_encoding_mutation(media_object_id: &str, encoded_id: &str) -> String {
    Relationship::MediaObjectEncoding.link_mutation(LinkVerb::Merge, media_object_id, encoded_id)
}

#[must_use]
pub fn remove_encoding_mutation(media_object_id: &str, encoded_id: &str) -> String {
    Relationship::MediaObjectEncoding.link_mutation(LinkVerb::Remove, media_object_id, encoded_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn score() -> MediaObject {
        MediaObject::new(
            "https://www.cpdl.org",
            "application/pdf",
            "https://www.cpdl.org/scores/ave-verum.pdf",
            "https://www.cpdl.org/wiki/Ave_verum",
        )
    }

    #[test]
    fn test_create_renders_required_fields_in_order() {
        let rendered = score().create_mutation().unwrap();
        assert_eq!(
            rendered,
            "CreateMediaObject(
        creator: \"https://www.cpdl.org\"
        encodingFormat: \"application/pdf\"
        contentUrl: \"https://www.cpdl.org/scores/ave-verum.pdf\"
        embedUrl: \"https://www.cpdl.org/wiki/Ave_verum\"
    ) {
      identifier
    }"
        );
    }

    #[test]
    fn test_create_includes_optional_fields() {
        let rendered = score()
            .with_title("Ave verum corpus (Mozart)")
            .with_source("https://www.cpdl.org/wiki/Ave_verum")
            .with_in_language("EN")
            .with_date_created(1791)
            .create_mutation()
            .unwrap();
        assert!(rendered.contains("title: \"Ave verum corpus (Mozart)\""));
        assert!(rendered.contains("source: \"https://www.cpdl.org/wiki/Ave_verum\""));
        assert!(rendered.contains("inLanguage: en\n"));
        assert!(rendered.contains("dateCreated: {year: 1791}"));
    }

    #[test]
    fn test_create_rejects_format_without_slash() {
        for format in ["pdf", "application-pdf", ""] {
            let mut object = score();
            object.encoding_format = format.to_string();
            let err = object.create_mutation().unwrap_err();
            assert!(matches!(
                err,
                ValidationError::NotAMimeType(_) | ValidationError::MissingField(_)
            ));
        }
        let mut object = score();
        object.encoding_format = "pdf".to_string();
        assert_eq!(
            object.create_mutation(),
            Err(ValidationError::NotAMimeType("pdf".to_string()))
        );
    }

    #[test]
    fn test_create_accepts_any_format_with_slash() {
        for format in ["audio/mpeg", "x/y", "/"] {
            let mut object = score();
            object.encoding_format = format.to_string();
            assert!(object.create_mutation().is_ok(), "{} should pass", format);
        }
    }

    #[test]
    fn test_create_rejects_unsupported_in_language() {
        let err = score().with_in_language("la").create_mutation().unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedLanguage("la".to_string()));
    }

    #[test]
    fn test_create_rejects_empty_creator() {
        let mut object = score();
        object.creator.clear();
        assert_eq!(
            object.create_mutation(),
            Err(ValidationError::MissingField("creator"))
        );
    }

    #[test]
    fn test_update_only_renders_set_fields() {
        let rendered = MediaObjectUpdate::new("2eeca6dd-c62c-490e-beb0-2e3899fca74f")
            .with_title("No Document")
            .with_embed_url("")
            .update_mutation()
            .unwrap();
        assert_eq!(
            rendered,
            "UpdateMediaObject(
        identifier: \"2eeca6dd-c62c-490e-beb0-2e3899fca74f\"
        title: \"No Document\"
    ) {
      identifier
    }"
        );
    }

    #[test]
    fn test_update_validates_encoding_format() {
        let err = MediaObjectUpdate::new("abc")
            .with_encoding_format("mp3")
            .update_mutation()
            .unwrap_err();
        assert_eq!(err, ValidationError::NotAMimeType("mp3".to_string()));
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            delete_mutation("2eeca6dd-c62c-490e-beb0-2e3899fca74f"),
            "DeleteMediaObject(
        identifier: \"2eeca6dd-c62c-490e-beb0-2e3899fca74f\"
    ) {
      identifier
    }"
        );
    }

    #[test]
    fn test_merge_and_remove_encoding() {
        let merge = merge_encoding_mutation("ff562d2e", "59ce8093");
        let remove = remove_encoding_mutation("ff562d2e", "59ce8093");
        assert!(merge.starts_with("MergeMediaObjectEncoding("));
        assert!(merge.contains("from: {identifier: \"ff562d2e\"}"));
        assert!(merge.contains("to: {identifier: \"59ce8093\"}"));
        assert_eq!(merge.replacen("Merge", "Remove", 1), remove);
    }

    #[test]
    fn test_example_of_work_verbs() {
        assert!(add_example_of_work_mutation("a", "b").starts_with("AddMediaObjectExampleOfWork("));
        assert!(merge_example_of_work_mutation("a", "b").starts_with("MergeMediaObjectExampleOfWork("));
        assert!(remove_example_of_work_mutation("a", "b").starts_with("RemoveMediaObjectExampleOfWork("));
        assert!(add_encoding_mutation("a", "b").starts_with("AddMediaObjectEncoding("));
    }
}
