//! Ordered GraphQL argument sets and their literal rendering.
//!
//! All quoting and escaping for mutation parameters happens here. Entity
//! builders only decide *which* fields go into an [`Arguments`] set; the
//! textual form of each value is produced by [`ArgValue::write_literal`].

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Result, ValidationError};
use crate::language::Language;

/// Separator placed between rendered `name: value` pairs.
///
/// Matches the indentation of the `{parameters}` slot in the templates.
const PARAMETER_SEPARATOR: &str = "\n        ";

/// A calendar date with year, year-month or year-month-day precision.
///
/// Rendered as a CE `_Neo4jDateInput` literal containing only the supplied
/// components, e.g. `{year: 1685, month: 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl Date {
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    pub fn year_month(year: i32, month: u32) -> Result<Self> {
        check_month(month)?;
        Ok(Self {
            year,
            month: Some(month),
            day: None,
        })
    }

    /// A full calendar date. The day must exist in that month and year.
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        check_month(month)?;
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(ValidationError::InvalidDate(format!(
                "{}-{:02}-{:02} does not exist",
                year, month, day
            )));
        }
        Ok(Self {
            year,
            month: Some(month),
            day: Some(day),
        })
    }

    /// Build a date from an ordered `[year]`, `[year, month]` or
    /// `[year, month, day]` sequence.
    pub fn from_parts(parts: &[i32]) -> Result<Self> {
        match *parts {
            [year] => Ok(Self::year(year)),
            [year, month] => Self::year_month(year, to_component(month)?),
            [year, month, day] => Self::ymd(year, to_component(month)?, to_component(day)?),
            _ => Err(ValidationError::InvalidDate(format!(
                "expected 1 to 3 components, got {}",
                parts.len()
            ))),
        }
    }
}

fn check_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate(format!(
            "month {} out of range",
            month
        )))
    }
}

fn to_component(value: i32) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| ValidationError::InvalidDate(format!("negative component {}", value)))
}

impl From<i32> for Date {
    fn from(year: i32) -> Self {
        Self::year(year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{year: {}", self.year)?;
        if let Some(month) = self.month {
            write!(f, ", month: {}", month)?;
        }
        if let Some(day) = self.day {
            write!(f, ", day: {}", day)?;
        }
        f.write_str("}")
    }
}

/// A typed mutation argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Rendered as a quoted, escaped string literal.
    String(String),
    /// Rendered bare, for GraphQL enum values such as `en` or `female`.
    Constant(String),
    Date(Date),
    List(Vec<ArgValue>),
    Int(i64),
    /// Must be finite; build it with `ArgValue::try_from` to have that checked.
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    #[must_use]
    pub fn constant(value: impl Into<String>) -> Self {
        Self::Constant(value.into())
    }

    /// Empty strings and empty lists count as absent for optional fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) | Self::Constant(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Date(_) | Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// Append the GraphQL literal for this value to `out`.
    pub fn write_literal(&self, out: &mut String) {
        match self {
            // JSON string encoding is a valid GraphQL string literal
            Self::String(s) => out.push_str(&serde_json::Value::String(s.clone()).to_string()),
            Self::Constant(s) => out.push_str(s),
            Self::Date(date) => out.push_str(&date.to_string()),
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_literal(out);
                }
                out.push(']');
            }
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Float(n) => out.push_str(&n.to_string()),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        }
    }

    #[must_use]
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        self.write_literal(&mut out);
        out
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<Date> for ArgValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<Language> for ArgValue {
    fn from(value: Language) -> Self {
        Self::Constant(value.code().to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl TryFrom<f64> for ArgValue {
    type Error = ValidationError;

    /// GraphQL has no literal for NaN or infinity.
    fn try_from(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(ValidationError::NonFiniteNumber(value.to_string()))
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered set of named mutation arguments.
///
/// Insertion order is preserved so the rendered parameter block is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    entries: Vec<(&'static str, ArgValue)>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field unconditionally.
    pub fn push(&mut self, name: &'static str, value: impl Into<ArgValue>) -> &mut Self {
        self.entries.push((name, value.into()));
        self
    }

    /// Add a field only when it is present and non-empty.
    pub fn push_opt<V: Into<ArgValue>>(&mut self, name: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let value = value.into();
            if !value.is_empty() {
                self.entries.push((name, value));
            }
        }
        self
    }

    /// Append every field of `other`, keeping its order.
    pub fn append(&mut self, other: &Arguments) -> &mut Self {
        self.entries.extend(other.entries.iter().cloned());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Render the set as `name: value` pairs, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(PARAMETER_SEPARATOR);
            }
            out.push_str(name);
            out.push_str(": ");
            value.write_literal(&mut out);
        }
        out
    }
}
