//! Commands that print a mutation document for piping into a GraphQL client.

use anyhow::{Context, Result};
use trompace_core::mutations::{EntityType, EntryPoint, Relationship};
use trompace_core::{document, LinkVerb};

#[derive(Debug, clap::Args)]
pub struct EntryPointArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub contributor: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub creator: String,
    #[arg(long)]
    pub source: String,
    /// One of en, es, ca, nl, de, fr
    #[arg(long)]
    pub language: String,
    #[arg(long)]
    pub action_platform: String,
    /// Accepted MIME type (repeatable)
    #[arg(long, required = true)]
    pub content_type: Vec<String>,
    /// Produced MIME type (repeatable)
    #[arg(long, required = true)]
    pub encoding_type: Vec<String>,
    /// MIME type of the entry point description
    #[arg(long)]
    pub format: Option<String>,
}

pub fn print_delete(entity: EntityType, identifier: &str) {
    println!("{}", document(&entity.delete_mutation(identifier)));
}

pub fn print_link(relationship: Relationship, verb: LinkVerb, from: &str, to: &str) {
    println!("{}", document(&relationship.link_mutation(verb, from, to)));
}

pub fn print_create_entry_point(args: EntryPointArgs) -> Result<()> {
    let mut entry_point = EntryPoint::new(
        args.name,
        args.contributor,
        args.subject,
        args.description,
        args.creator,
        args.source,
        args.language,
        args.action_platform,
        args.content_type,
        args.encoding_type,
    );
    if let Some(format) = args.format {
        entry_point = entry_point.with_format(format);
    }

    let body = entry_point
        .create_mutation()
        .context("Invalid entry point")?;
    println!("{}", document(&body));
    Ok(())
}
