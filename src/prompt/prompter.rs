//! Validation loop driving an [`InputSource`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::prompt::input::InputSource;
use crate::prompt::schema::{PromptField, PromptResponse, PromptSchema, PromptValue};

/// Decoration around every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTheme {
    /// Printed before the description.
    pub message: String,
    /// Printed after the description.
    pub delimiter: String,
}

impl Default for PromptTheme {
    fn default() -> Self {
        Self {
            message: " * ".to_string(),
            delimiter: String::new(),
        }
    }
}

impl PromptTheme {
    pub fn label(&self, description: &str) -> String {
        format!("{}{}{}", self.message, description, self.delimiter)
    }
}

/// Asks the fields of a schema one after another, re-asking until each answer validates.
pub struct Prompter {
    theme: PromptTheme,
    input: Box<dyn InputSource>,
}

impl Prompter {
    pub fn new(theme: PromptTheme, input: Box<dyn InputSource>) -> Self {
        Self { theme, input }
    }

    pub fn theme(&self) -> &PromptTheme {
        &self.theme
    }

    /// Collect every field of `schema`.
    pub async fn ask(&mut self, schema: PromptSchema) -> Result<PromptResponse> {
        let mut response = PromptResponse::new();
        for (key, field) in schema.into_fields() {
            let value = self.ask_field(&field).await?;
            response.insert(key, value);
        }
        Ok(response)
    }

    async fn ask_field(&mut self, field: &PromptField) -> Result<PromptValue> {
        let label = self.theme.label(&field.description);
        loop {
            let answer = self.input.read(&label, field.hidden).await?;
            let answer = match (&field.default, answer.is_empty()) {
                (Some(default), true) => default.clone(),
                _ => answer,
            };

            match field.check(&answer) {
                Ok(()) => return Ok(field.finish(&answer)),
                Err(message) => {
                    debug!("Rejected answer for '{}'", field.description);
                    self.input.reject(&message).await?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::input::ScriptedInput;
    use crate::prompt::schema::{yes_no_field, RESPONSE_KEY, YES_NO_HELP};

    fn prompter(answers: &[&str]) -> (Prompter, ScriptedInput) {
        let input = ScriptedInput::new(answers.iter().copied());
        let prompter = Prompter::new(PromptTheme::default(), Box::new(input.clone()));
        (prompter, input)
    }

    #[tokio::test]
    async fn test_label_uses_theme() {
        let (mut prompter, input) = prompter(&["Ada"]);
        let response = prompter.ask(PromptSchema::from("Name")).await.unwrap();

        assert_eq!(response[RESPONSE_KEY], PromptValue::Text("Ada".to_string()));
        assert_eq!(input.labels(), vec![" * Name"]);
    }

    #[tokio::test]
    async fn test_custom_theme() {
        let theme = PromptTheme {
            message: "> ".to_string(),
            delimiter: ":".to_string(),
        };
        let input = ScriptedInput::new(["x"]);
        let mut prompter = Prompter::new(theme, Box::new(input.clone()));
        prompter.ask(PromptSchema::from("Key")).await.unwrap();

        assert_eq!(input.labels(), vec!["> Key:"]);
    }

    #[tokio::test]
    async fn test_reasks_until_valid() {
        let (mut prompter, input) = prompter(&["maybe", "later", "YES"]);
        let schema = PromptSchema::from(yes_no_field("Continue?"));
        let response = prompter.ask(schema).await.unwrap();

        assert_eq!(response[RESPONSE_KEY], PromptValue::Bool(true));
        assert_eq!(input.rejections(), vec![YES_NO_HELP, YES_NO_HELP]);
        assert_eq!(input.labels().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_answer_never_resolves_without_more_input() {
        let (mut prompter, input) = prompter(&["maybe"]);
        let result = prompter.ask(PromptSchema::from(yes_no_field("Continue?"))).await;

        assert!(matches!(result, Err(Error::Prompt(_))));
        assert_eq!(input.rejections(), vec![YES_NO_HELP]);
    }

    #[tokio::test]
    async fn test_default_applies_to_empty_answer() {
        let (mut prompter, _input) = prompter(&["", "8080"]);
        let schema = PromptSchema::new()
            .field("host", PromptField::new("Host").default_value("localhost"))
            .field("port", PromptField::new("Port").default_value("80"));
        let response = prompter.ask(schema).await.unwrap();

        assert_eq!(response["host"].as_str(), Some("localhost"));
        assert_eq!(response["port"].as_str(), Some("8080"));
    }

    #[tokio::test]
    async fn test_fields_collected_in_order() {
        let (mut prompter, input) = prompter(&["Ada", "secret"]);
        let schema = PromptSchema::new()
            .field("user", PromptField::new("User").required())
            .field("password", PromptField::new("Password").hidden());
        let response = prompter.ask(schema).await.unwrap();

        assert_eq!(response.len(), 2);
        assert_eq!(input.labels(), vec![" * User", " * Password"]);
    }
}
