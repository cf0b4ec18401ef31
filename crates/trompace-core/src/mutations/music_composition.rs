//! Mutations for `MusicComposition` nodes.

use crate::arguments::Arguments;
use crate::error::Result;
use crate::language::Language;
use crate::mutations::{
    check_mime_type, opt_language, opt_mime_type, require, Relationship, DEFAULT_FORMAT,
};
use crate::templates::{mutation_create, mutation_delete, mutation_link, mutation_update, LinkVerb};

const CREATE_MUSIC_COMPOSITION: &str = "CreateMusicComposition(
        {parameters}
    ) {
      identifier
    }";

const UPDATE_MUSIC_COMPOSITION: &str = "UpdateMusicComposition(
        {parameters}
    ) {
      identifier
    }";

const DELETE_MUSIC_COMPOSITION: &str = "DeleteMusicComposition(
        identifier: {identifier}
    ) {
      identifier
    }";

// The composition is the `result` of the control action, so the action is the
// `from` side of the interface link.
const ADD_MUSIC_COMPOSITION_CONTROL_ACTION: &str = "AddActionInterfaceThingInterface(
    from: {identifier: {identifier_2}, type: ControlAction}
    to: {identifier: {identifier_1}, type: MusicComposition}
    field: result
  ) {
    from {
      __typename
    }
    to {
      __typename
    }
  }";

/// A music composition to be created in the CE.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicComposition {
    pub title: String,
    pub contributor: String,
    pub creator: String,
    pub source: String,
    pub publisher: String,
    /// Language the metadata is written in.
    pub language: String,
    /// Language of the composition itself (e.g. of its lyrics).
    pub in_language: String,
    pub format: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl MusicComposition {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        contributor: impl Into<String>,
        creator: impl Into<String>,
        source: impl Into<String>,
        publisher: impl Into<String>,
        language: impl Into<String>,
        in_language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            contributor: contributor.into(),
            creator: creator.into(),
            source: source.into(),
            publisher: publisher.into(),
            language: language.into(),
            in_language: in_language.into(),
            format: DEFAULT_FORMAT.to_string(),
            name: None,
            description: None,
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
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render the `CreateMusicComposition` mutation.
    pub fn create_mutation(&self) -> Result<String> {
        require("title", &self.title)?;
        require("contributor", &self.contributor)?;
        require("creator", &self.creator)?;
        require("source", &self.source)?;
        require("publisher", &self.publisher)?;
        let language: Language = self.language.parse()?;
        let in_language: Language = self.in_language.parse()?;
        check_mime_type(&self.format)?;

        let mut args = Arguments::new();
        args.push("title", &self.title)
            .push("publisher", &self.publisher)
            .push("contributor", &self.contributor)
            .push("creator", &self.creator)
            .push("source", &self.source)
            .push("format", &self.format)
            .push("language", language)
            .push("inLanguage", in_language)
            .push_opt("name", self.name.as_deref())
            .push_opt("description", self.description.as_deref());
        Ok(mutation_create(&args, CREATE_MUSIC_COMPOSITION))
    }
}

/// Changes to an existing composition. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MusicCompositionUpdate {
    pub identifier: String,
    pub title: Option<String>,
    pub name: Option<String>,
    pub publisher: Option<String>,
    pub contributor: Option<String>,
    pub creator: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub language: Option<String>,
    pub in_language: Option<String>,
}

impl MusicCompositionUpdate {
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
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
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
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
    pub fn with_in_language(mut self, in_language: impl Into<String>) -> Self {
        self.in_language = Some(in_language.into());
        self
    }

    /// Render the `UpdateMusicComposition` mutation with the fields that are
    /// set.
    pub fn update_mutation(&self) -> Result<String> {
        require("identifier", &self.identifier)?;
        let language = opt_language(self.language.as_deref())?;
        let in_language = opt_language(self.in_language.as_deref())?;
        opt_mime_type(self.format.as_deref())?;

        let mut fields = Arguments::new();
        fields
            .push_opt("title", self.title.as_deref())
            .push_opt("name", self.name.as_deref())
            .push_opt("publisher", self.publisher.as_deref())
            .push_opt("contributor", self.contributor.as_deref())
            .push_opt("creator", self.creator.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("format", self.format.as_deref())
            .push_opt("language", language)
            .push_opt("inLanguage", in_language);
        Ok(mutation_update(&self.identifier, &fields, UPDATE_MUSIC_COMPOSITION))
    }
}

#[must_use]
pub fn delete_mutation(identifier: &str) -> String {
    mutation_delete(identifier, DELETE_MUSIC_COMPOSITION)
}

/// Declare that one composition broadly matches another.
#[must_use]
pub fn add_broad_match_mutation(from_identifier: &str, to_identifier: &str) -> String {
    Relationship::MusicCompositionBroadMatch.link_mutation(LinkVerb::Add, from_identifier, to_identifier)
}

#[must_use]
pub fn remove_broad_match_mutation(from_identifier: &str, to_identifier: &str) -> String {
    Relationship::MusicCompositionBroadMatch.link_mutation(LinkVerb::Remove, from_identifier, to_identifier)
}

/// Mark `example_id` as an `exampleOfWork` of the composition `work_id`.
#[must_use]
pub fn add_example_of_work_mutation(example_id: &str, work_id: &str) -> String {
    Relationship::MusicCompositionExampleOfWork.link_mutation(LinkVerb::Add, example_id, work_id)
}

/// Like [`add_example_of_work_mutation`], but only if the link is absent.
#[must_use]
pub fn merge_example_of_work_mutation(example_id: &str, work_id: &str) -> String {
    Relationship::MusicCompositionExampleOfWork.link_mutation(LinkVerb::Merge, example_id, work_id)
}

#[must_use]
pub fn remove_example_of_work_mutation(example_id: &str, work_id: &str) -> String {
    Relationship::MusicCompositionExampleOfWork.link_mutation(LinkVerb::Remove, example_id, work_id)
}

/// Attach a composition as the `result` of a control action.
#[must_use]
pub fn add_control_action_mutation(composition_id: &str, control_action_id: &str) -> String {
    mutation_link(composition_id, control_action_id, ADD_MUSIC_COMPOSITION_CONTROL_ACTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn ave_maria() -> MusicComposition {
        MusicComposition::new(
            "Ave Maria (Victoria)",
            "https://www.cpdl.org",
            "https://www.cpdl.org/wiki/index.php/Ave_Maria_(Tomás_Luis_de_Victoria)",
            "https://www.cpdl.org/wiki/index.php/Ave_Maria_(Tomás_Luis_de_Victoria)",
            "https://www.cpdl.org",
            "en",
            "es",
        )
    }

    #[test]
    fn test_create_full_output() {
        let rendered = ave_maria()
            .with_name("Ave Maria")
            .create_mutation()
            .unwrap();
        assert_eq!(
            rendered,
            "CreateMusicComposition(
        title: \"Ave Maria (Victoria)\"
        publisher: \"https://www.cpdl.org\"
        contributor: \"https://www.cpdl.org\"
        creator: \"https://www.cpdl.org/wiki/index.php/Ave_Maria_(Tomás_Luis_de_Victoria)\"
        source: \"https://www.cpdl.org/wiki/index.php/Ave_Maria_(Tomás_Luis_de_Victoria)\"
        format: \"text/html\"
        language: en
        inLanguage: es
        name: \"Ave Maria\"
    ) {
      identifier
    }"
        );
    }

    #[test]
    fn test_create_validates_both_languages() {
        let mut composition = ave_maria();
        composition.in_language = "la".to_string();
        assert_eq!(
            composition.create_mutation(),
            Err(ValidationError::UnsupportedLanguage("la".to_string()))
        );

        let mut composition = ave_maria();
        composition.language = "zz".to_string();
        assert_eq!(
            composition.create_mutation(),
            Err(ValidationError::UnsupportedLanguage("zz".to_string()))
        );
    }

    #[test]
    fn test_create_rejects_bad_format() {
        assert_eq!(
            ave_maria().with_format("musicxml").create_mutation(),
            Err(ValidationError::NotAMimeType("musicxml".to_string()))
        );
    }

    #[test]
    fn test_update() {
        let rendered = MusicCompositionUpdate::new("2eeca6dd-c62c-490e-beb0-2e3899fca74f")
            .with_name("No Composition")
            .with_language("NL")
            .update_mutation()
            .unwrap();
        assert_eq!(
            rendered,
            "UpdateMusicComposition(
        identifier: \"2eeca6dd-c62c-490e-beb0-2e3899fca74f\"
        name: \"No Composition\"
        language: nl
    ) {
      identifier
    }"
        );
    }

    #[test]
    fn test_delete_has_only_identifier() {
        let rendered = delete_mutation("2eeca6dd-c62c-490e-beb0-2e3899fca74f");
        assert_eq!(rendered.matches("identifier: ").count(), 1);
        assert!(rendered.starts_with("DeleteMusicComposition("));
    }

    #[test]
    fn test_broad_match_add_remove() {
        let add = add_broad_match_mutation("ff562d2e", "59ce8093");
        let remove = remove_broad_match_mutation("ff562d2e", "59ce8093");
        assert_eq!(
            add,
            "AddMusicCompositionBroadMatch(
    from: {identifier: \"ff562d2e\"}
    to: {identifier: \"59ce8093\"}
  ) {
    from {
      identifier
    }
    to {
      identifier
    }
  }"
        );
        assert_eq!(add.replacen("Add", "Remove", 1), remove);
    }

    #[test]
    fn test_example_of_work_verbs() {
        assert!(merge_example_of_work_mutation("a", "b").starts_with("MergeMusicCompositionExampleOfWork("));
        assert!(add_example_of_work_mutation("a", "b").starts_with("AddMusicCompositionExampleOfWork("));
        assert!(remove_example_of_work_mutation("a", "b").starts_with("RemoveMusicCompositionExampleOfWork("));
    }

    #[test]
    fn test_control_action_puts_action_on_from_side() {
        let rendered = add_control_action_mutation("composition-1", "action-1");
        assert!(rendered.contains("from: {identifier: \"action-1\", type: ControlAction}"));
        assert!(rendered.contains("to: {identifier: \"composition-1\", type: MusicComposition}"));
        assert!(rendered.contains("field: result"));
    }
}
