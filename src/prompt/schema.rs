//! Prompt schemas: which fields to ask for and how to validate them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Key used when a schema is built from a bare question.
pub const RESPONSE_KEY: &str = "response";

/// Help shown when a yes/no answer is not recognized.
pub const YES_NO_HELP: &str = "Enter 'y' or 'n'.";

/// Shown when an answer fails a pattern and the field has no message of its own.
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid input.";

/// A collected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PromptValue {
    Text(String),
    Bool(bool),
}

impl PromptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PromptValue::Text(text) => Some(text),
            PromptValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PromptValue::Bool(value) => Some(*value),
            PromptValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PromptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptValue::Text(text) => write!(f, "{}", text),
            PromptValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Answers keyed by field name.
pub type PromptResponse = BTreeMap<String, PromptValue>;

/// Converts a validated answer into its final value.
pub type BeforeFn = fn(&str) -> PromptValue;

/// One question.
#[derive(Debug, Clone)]
pub struct PromptField {
    pub description: String,
    pub pattern: Option<Regex>,
    pub message: Option<String>,
    pub before: Option<BeforeFn>,
    pub default: Option<String>,
    pub hidden: bool,
    pub required: bool,
}

impl PromptField {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            pattern: None,
            message: None,
            before: None,
            default: None,
            hidden: false,
            required: false,
        }
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Help shown when validation fails.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn before(mut self, before: BeforeFn) -> Self {
        self.before = Some(before);
        self
    }

    /// Answer used when the user just presses enter.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mask the input.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Validate `answer`, returning the help message to show on failure.
    pub fn check(&self, answer: &str) -> Result<(), String> {
        if self.required && answer.is_empty() {
            return Err(self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} is required.", self.description)));
        }
        match &self.pattern {
            Some(pattern) if !pattern.is_match(answer) => Err(self
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_INVALID_MESSAGE.to_string())),
            _ => Ok(()),
        }
    }

    /// Final value for an answer that passed [`PromptField::check`].
    pub fn finish(&self, answer: &str) -> PromptValue {
        match self.before {
            Some(before) => before(answer),
            None => PromptValue::Text(answer.to_string()),
        }
    }
}

/// Ordered list of fields to collect.
#[derive(Debug, Clone, Default)]
pub struct PromptSchema {
    fields: Vec<(String, PromptField)>,
}

impl PromptSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, field: PromptField) -> Self {
        self.fields.push((key.into(), field));
        self
    }

    pub fn fields(&self) -> &[(String, PromptField)] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<(String, PromptField)> {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&str> for PromptSchema {
    fn from(question: &str) -> Self {
        PromptSchema::new().field(RESPONSE_KEY, PromptField::new(question))
    }
}

impl From<String> for PromptSchema {
    fn from(question: String) -> Self {
        PromptSchema::new().field(RESPONSE_KEY, PromptField::new(question))
    }
}

impl From<PromptField> for PromptSchema {
    fn from(field: PromptField) -> Self {
        PromptSchema::new().field(RESPONSE_KEY, field)
    }
}

fn yes_no_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^(y|n|yes|no|t|f|1|0)$").expect("yes/no pattern is valid"))
}

fn yes_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^(y|yes|t|1)$").expect("yes pattern is valid"))
}

/// Interpret a recognized yes/no answer.
pub fn parse_yes_no(answer: &str) -> PromptValue {
    PromptValue::Bool(yes_pattern().is_match(answer))
}

/// Field accepting y/n, yes/no, t/f or 1/0 in any case.
pub fn yes_no_field(description: impl Into<String>) -> PromptField {
    PromptField::new(description)
        .pattern(yes_no_pattern().clone())
        .message(YES_NO_HELP)
        .before(parse_yes_no)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_question_schema() {
        let schema = PromptSchema::from("What is your name?");
        let fields = schema.fields();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, RESPONSE_KEY);
        assert_eq!(fields[0].1.description, "What is your name?");
        assert!(fields[0].1.pattern.is_none());
    }

    #[test]
    fn test_yes_no_accepts_all_forms() {
        let field = yes_no_field("Continue?");
        for answer in ["y", "Y", "YES", "yes", "t", "T", "1"] {
            assert!(field.check(answer).is_ok(), "answer = {}", answer);
            assert_eq!(field.finish(answer), PromptValue::Bool(true));
        }
        for answer in ["n", "NO", "no", "f", "F", "0"] {
            assert!(field.check(answer).is_ok(), "answer = {}", answer);
            assert_eq!(field.finish(answer), PromptValue::Bool(false));
        }
    }

    #[test]
    fn test_yes_no_rejects_other_answers() {
        let field = yes_no_field("Continue?");
        for answer in ["maybe", "", "yess", "2", " y"] {
            assert_eq!(field.check(answer), Err(YES_NO_HELP.to_string()));
        }
    }

    #[test]
    fn test_required_field() {
        let field = PromptField::new("Name").required();
        assert_eq!(field.check(""), Err("Name is required.".to_string()));
        assert!(field.check("Ada").is_ok());
    }

    #[test]
    fn test_pattern_without_message() {
        let field = PromptField::new("Port").pattern(Regex::new(r"^\d+$").unwrap());
        assert_eq!(field.check("http"), Err(DEFAULT_INVALID_MESSAGE.to_string()));
        assert_eq!(field.finish("8080"), PromptValue::Text("8080".to_string()));
    }

    #[test]
    fn test_value_serializes_untagged() {
        let mut response = PromptResponse::new();
        response.insert("name".to_string(), PromptValue::Text("Ada".to_string()));
        response.insert("ok".to_string(), PromptValue::Bool(true));

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"name":"Ada","ok":true}"#);
    }
}
