//! # Login form schema
//!
//! Built from the server [`Metadata`]:
//!
//! | Field | Checks |
//! |-------|--------|
//! | `name` | required, length within the `text_short` rule |
//! | `password` | required, length within the `text_short#_` rule, contains a letter, a digit, an uppercase and a lowercase letter |
//!
//! Lengths are counted in characters, not bytes. A blank value counts as missing, and
//! the character classes are ASCII only. Each field reports its first failing check
//! only, in the order above.

use crate::error::Error;
use crate::models::{Account, Field, Metadata, Rule};

/// Metadata rule bounding the user name.
pub const NAME_RULE: &str = "text_short";
/// Metadata rule bounding the password.
pub const PASSWORD_RULE: &str = "text_short#_";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Required,
    Length(Rule),
    ContainsLetter,
    ContainsNumber,
    ContainsUppercase,
    ContainsLowercase,
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Check::Required => !value.trim().is_empty(),
            Check::Length(rule) => rule.contains(value.chars().count()),
            Check::ContainsLetter => value.chars().any(|c| c.is_ascii_alphabetic()),
            Check::ContainsNumber => value.chars().any(|c| c.is_ascii_digit()),
            Check::ContainsUppercase => value.chars().any(|c| c.is_ascii_uppercase()),
            Check::ContainsLowercase => value.chars().any(|c| c.is_ascii_lowercase()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Check::Required => "This field is required".to_string(),
            Check::Length(rule) => format!(
                "Must be between {} and {} characters",
                rule.min(),
                rule.max()
            ),
            Check::ContainsLetter => "Must contain a letter".to_string(),
            Check::ContainsNumber => "Must contain a number".to_string(),
            Check::ContainsUppercase => "Must contain an uppercase letter".to_string(),
            Check::ContainsLowercase => "Must contain a lowercase letter".to_string(),
        }
    }
}

/// One rejected field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub check: Check,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.check.message()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginSchema {
    name: Vec<Check>,
    password: Vec<Check>,
}

impl LoginSchema {
    /// `None` when the metadata is absent or lacks one of the two rules.
    pub fn from_metadata(metadata: Option<&Metadata>) -> Option<Self> {
        let metadata = metadata?;
        let name = metadata.rule(NAME_RULE)?;
        let password = metadata.rule(PASSWORD_RULE)?;

        Some(Self {
            name: vec![Check::Required, Check::Length(name)],
            password: vec![
                Check::Required,
                Check::Length(password),
                Check::ContainsLetter,
                Check::ContainsNumber,
                Check::ContainsUppercase,
                Check::ContainsLowercase,
            ],
        })
    }

    fn checks(&self, field: Field) -> &[Check] {
        match field {
            Field::Name => &self.name,
            Field::Password => &self.password,
        }
    }

    pub fn check_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.checks(field)
            .iter()
            .find(|check| !check.passes(value))
            .map(|check| FieldError {
                field,
                check: *check,
            })
    }

    pub fn validate(&self, account: &Account) -> Result<(), Error> {
        let errors: Vec<FieldError> = [Field::Name, Field::Password]
            .into_iter()
            .filter_map(|field| self.check_field(field, account.get(field)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

/// Rebuilds the schema only when the metadata it was derived from changes.
#[derive(Clone, Debug, Default)]
pub struct SchemaCache {
    source: Option<Metadata>,
    schema: Option<LoginSchema>,
    built: bool,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, metadata: Option<&Metadata>) -> Option<&LoginSchema> {
        if !self.built || self.source.as_ref() != metadata {
            self.source = metadata.cloned();
            self.schema = LoginSchema::from_metadata(metadata);
            self.built = true;
        }
        self.schema.as_ref()
    }
}
