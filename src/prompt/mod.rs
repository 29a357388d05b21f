//! Interactive prompts.
//!
//! Provides:
//! - Field schemas with pattern validation and pre-processing
//! - A validation loop that re-asks until answers are accepted
//! - Terminal and scripted answer sources

pub mod input;
pub mod prompter;
pub mod schema;

pub use input::{InputSource, ScriptedInput, TerminalInput};
pub use prompter::{PromptTheme, Prompter};
pub use schema::{
    parse_yes_no, yes_no_field, PromptField, PromptResponse, PromptSchema, PromptValue,
    RESPONSE_KEY, YES_NO_HELP,
};
