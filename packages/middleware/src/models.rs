//! # Wire and form models
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Account`] | The `name`/`password` pair typed into the login form. |
//! | [`Field`] | Which of the two form fields an edit or error refers to. |
//! | [`Rule`] | An inclusive `{min, max}` length bound served by the `metadata` endpoint. |
//! | [`Metadata`] | The rule bundle plus the API path prefix, fetched once per session. |
//! | [`User`] | Opaque identity record returned by a successful login. |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Credential draft held by the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub password: String,
}

impl Account {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Password => self.password = value,
        }
    }

    /// Form-encoded body sent to the login endpoint.
    pub fn form(&self) -> [(&'static str, &str); 2] {
        [
            (Field::Name.as_str(), self.name.as_str()),
            (Field::Password.as_str(), self.password.as_str()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Password,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Password => "password",
        }
    }
}

/// Inclusive length bound. Deserialization rejects `min > max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    min: usize,
    max: usize,
}

#[derive(Deserialize)]
struct RawRule {
    min: usize,
    max: usize,
}

impl TryFrom<RawRule> for Rule {
    type Error = Error;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Rule::new(raw.min, raw.max)
    }
}

impl Rule {
    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidRule { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Server-supplied validation rules and API prefix.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub rules: BTreeMap<String, Rule>,
    #[serde(default)]
    pub api_prefix: String,
}

impl Metadata {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn rule(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).copied()
    }

    /// Builder used mostly by tests and fixtures.
    pub fn with_rule(mut self, name: &str, rule: Rule) -> Self {
        self.rules.insert(name.to_string(), rule);
        self
    }

    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = prefix.to_string();
        self
    }
}

/// Authenticated identity. The client never looks inside it except for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(serde_json::Value);

impl User {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    /// The `name` property when present, otherwise a generic label.
    pub fn display_name(&self) -> &str {
        self.0
            .get("name")
            .and_then(|name| name.as_str())
            .unwrap_or("Account")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_from_json() {
        let metadata = Metadata::from_json(
            r#"{"rules":{"text_short":{"min":2,"max":20},"text_short#_":{"min":6,"max":30}},"apiPrefix":"api"}"#,
        )
        .unwrap();

        assert_eq!(metadata.api_prefix, "api");
        assert_eq!(metadata.rule("text_short"), Some(Rule::new(2, 20).unwrap()));
        assert_eq!(metadata.rule("text_short#_").unwrap().max(), 30);
        assert!(metadata.rule("text_long").is_none());
    }

    #[test]
    fn test_inverted_rule_rejected() {
        assert!(matches!(
            Rule::new(5, 2),
            Err(Error::InvalidRule { min: 5, max: 2 })
        ));

        let err = Metadata::from_json(r#"{"rules":{"text_short":{"min":9,"max":1}},"apiPrefix":"api"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_rule_bounds_are_inclusive() {
        let rule = Rule::new(2, 4).unwrap();
        assert!(!rule.contains(1));
        assert!(rule.contains(2));
        assert!(rule.contains(4));
        assert!(!rule.contains(5));
    }

    #[test]
    fn test_user_display_name() {
        let user = User::from_json(r#"{"id":1,"name":"abc"}"#).unwrap();
        assert_eq!(user.display_name(), "abc");
        assert_eq!(user.value()["id"], 1);

        let anonymous = User::new(serde_json::json!({"id": 2}));
        assert_eq!(anonymous.display_name(), "Account");
    }

    #[test]
    fn test_account_form_fields() {
        let mut account = Account::default();
        account.set(Field::Name, "abc".to_string());
        account.set(Field::Password, "Abc123xy".to_string());

        assert_eq!(account.get(Field::Name), "abc");
        assert_eq!(
            account.form(),
            [("name", "abc"), ("password", "Abc123xy")]
        );
    }
}
