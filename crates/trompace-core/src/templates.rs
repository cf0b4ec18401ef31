//! Mutation template rendering.
//!
//! Templates are plain strings with `{parameters}`, `{identifier}`,
//! `{identifier_1}` and `{identifier_2}` placeholders. Substitution is a
//! single left-to-right pass, so values containing placeholder-like text are
//! never expanded a second time. Braces that do not form a known placeholder
//! (selection sets, input objects) are copied through unchanged.

use std::fmt;
use std::str::FromStr;

use crate::arguments::{ArgValue, Arguments};

/// The verb of a relationship mutation between two existing nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkVerb {
    /// Create the edge; the CE assumes it does not exist yet.
    Add,
    /// Create the edge only if it is absent.
    Merge,
    /// Delete the edge if present.
    Remove,
}

impl LinkVerb {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Merge => "Merge",
            Self::Remove => "Remove",
        }
    }
}

impl fmt::Display for LinkVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "merge" => Ok(Self::Merge),
            "remove" => Ok(Self::Remove),
            _ => Err(format!("unknown link verb: {} (expected add, merge or remove)", s)),
        }
    }
}

/// Build the template for a directed relationship such as
/// `MusicCompositionBroadMatch`.
///
/// The add, merge and remove forms of a relationship differ only in the
/// leading verb.
#[must_use]
pub fn link_template(verb: LinkVerb, relationship: &str) -> String {
    format!(
        "{verb}{relationship}(
    from: {{identifier: {{identifier_1}}}}
    to: {{identifier: {{identifier_2}}}}
  ) {{
    from {{
      identifier
    }}
    to {{
      identifier
    }}
  }}"
    )
}

/// Render a create template with the given arguments.
#[must_use]
pub fn mutation_create(args: &Arguments, template: &str) -> String {
    fill(template, &[("parameters", args.render())])
}

/// Render an update template. `identifier` always leads the parameter list.
#[must_use]
pub fn mutation_update(identifier: &str, fields: &Arguments, template: &str) -> String {
    let mut args = Arguments::new();
    args.push("identifier", identifier).append(fields);
    mutation_create(&args, template)
}

/// Render a delete template with only the node identifier.
#[must_use]
pub fn mutation_delete(identifier: &str, template: &str) -> String {
    fill(
        template,
        &[("identifier", ArgValue::from(identifier).to_literal())],
    )
}

/// Render a relationship template between two existing nodes.
#[must_use]
pub fn mutation_link(from_identifier: &str, to_identifier: &str, template: &str) -> String {
    fill(
        template,
        &[
            ("identifier_1", ArgValue::from(from_identifier).to_literal()),
            ("identifier_2", ArgValue::from(to_identifier).to_literal()),
        ],
    )
}

/// Wrap a mutation body into a full GraphQL document.
#[must_use]
pub fn document(body: &str) -> String {
    format!("mutation {{\n  {}\n}}", body)
}

fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = values.iter().find(|(name, _)| {
            after
                .strip_prefix(name)
                .is_some_and(|tail| tail.starts_with('}'))
        });
        match placeholder {
            Some((name, value)) => {
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
