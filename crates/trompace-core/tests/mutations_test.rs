//! End-to-end rendering tests across entity types.

use trompace_core::mutations::{
    entry_point, media_object, music_composition, person, EntityType, EntryPoint,
    MediaObjectUpdate, MusicCompositionUpdate, PersonUpdate, Relationship,
};
use trompace_core::{document, LinkVerb, ValidationError, SUPPORTED_LANGUAGES};

const VEROVIO_DESCRIPTION: &str = "Verovio supports conversion from MusicXML to MEI. When converting from this web interface, the resulting MEI data will be displayed directly in the MEI-Viewer. The MEI file can be saved through the MEI  button that will be displayed on the top right.";

fn verovio(language: &str) -> EntryPoint {
    EntryPoint::new(
        "Verovio MusicXML Converter",
        "https://www.verovio.org",
        "Music notation engraving library for MEI with MusicXML,Humdrum support, toolkits, JavaScript, Python",
        VEROVIO_DESCRIPTION,
        "Verovio",
        "https://github.com/rism-ch/verovio",
        language,
        "TROMPA algorithm proof of concept.",
        ["html/json"],
        ["html/text"],
    )
}

#[test]
fn test_create_entry_point_full_document() {
    let body = verovio("en").create_mutation().unwrap();
    let expected = format!(
        "mutation {{
  CreateEntryPoint(
        name: \"Verovio MusicXML Converter\"
        contributor: \"https://www.verovio.org\"
        subject: \"Music notation engraving library for MEI with MusicXML,Humdrum support, toolkits, JavaScript, Python\"
        description: \"{}\"
        creator: \"Verovio\"
        source: \"https://github.com/rism-ch/verovio\"
        format: \"text/html\"
        language: en
        actionPlatform: \"TROMPA algorithm proof of concept.\"
        contentType: [\"html/json\"]
        encodingType: [\"html/text\"]
    ) {{
      identifier
    }}
}}",
        VEROVIO_DESCRIPTION
    );
    assert_eq!(document(&body), expected);
}

#[test]
fn test_language_is_validated_for_every_entity() {
    for code in SUPPORTED_LANGUAGES {
        assert!(verovio(code).create_mutation().is_ok());
    }
    let err = verovio("pt").create_mutation().unwrap_err();
    assert_eq!(err, ValidationError::UnsupportedLanguage("pt".to_string()));
    assert_eq!(err.to_string(), "unsupported language: pt (supported: en, es, ca, nl, de, fr)");
}

#[test]
fn test_update_with_no_fields_renders_only_identifier() {
    let id = "2eeca6dd-c62c-490e-beb0-2e3899fca74f";
    let rendered = [
        MediaObjectUpdate::new(id).update_mutation().unwrap(),
        PersonUpdate::new(id).update_mutation().unwrap(),
        MusicCompositionUpdate::new(id).update_mutation().unwrap(),
        entry_point::EntryPointUpdate::new(id).update_mutation().unwrap(),
    ];
    for mutation in rendered {
        assert_eq!(mutation.matches(": ").count(), 1, "{}", mutation);
        assert!(mutation.contains(&format!("identifier: \"{}\"", id)));
    }
}

#[test]
fn test_update_requires_identifier() {
    assert_eq!(
        PersonUpdate::new("").with_name("Anon").update_mutation(),
        Err(ValidationError::MissingField("identifier"))
    );
}

#[test]
fn test_delete_has_exactly_one_parameter() {
    let deletes = [
        media_object::delete_mutation("x-1"),
        person::delete_mutation("x-1"),
        music_composition::delete_mutation("x-1"),
        entry_point::delete_mutation("x-1"),
    ];
    for mutation in deletes {
        assert_eq!(mutation.matches(": ").count(), 1, "{}", mutation);
        assert!(mutation.contains("identifier: \"x-1\""));
    }
}

#[test]
fn test_delete_escapes_identifier() {
    let rendered = EntityType::MediaObject.delete_mutation("a\"b");
    assert!(rendered.contains(r#"identifier: "a\"b""#));
}

#[test]
fn test_every_relationship_swaps_only_the_verb() {
    for relationship in Relationship::ALL {
        let add = relationship.link_mutation(LinkVerb::Add, "from-id", "to-id");
        let remove = relationship.link_mutation(LinkVerb::Remove, "from-id", "to-id");
        assert!(add.contains("from: {identifier: \"from-id\"}"));
        assert!(add.contains("to: {identifier: \"to-id\"}"));
        assert_eq!(add.replacen("Add", "Remove", 1), remove);
    }
}
