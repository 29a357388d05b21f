//! Where prompt answers come from.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use console::{style, Term};
use dialoguer::{Input, Password};

use crate::error::{Error, Result};

/// A source of answers for the prompter.
#[async_trait]
pub trait InputSource: Send {
    /// Show `label` and read one answer.
    async fn read(&mut self, label: &str, hidden: bool) -> Result<String>;

    /// Tell the user their last answer was not accepted.
    async fn reject(&mut self, message: &str) -> Result<()>;
}

/// Interactive terminal input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalInput;

#[async_trait]
impl InputSource for TerminalInput {
    async fn read(&mut self, label: &str, hidden: bool) -> Result<String> {
        let label = label.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            if hidden {
                Password::new()
                    .with_prompt(label)
                    .allow_empty_password(true)
                    .interact()
            } else {
                Input::<String>::new()
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()
            }
        })
        .await??;
        Ok(answer.trim().to_string())
    }

    async fn reject(&mut self, message: &str) -> Result<()> {
        Term::stderr().write_line(&style(message).red().to_string())?;
        Ok(())
    }
}

/// Everything a [`ScriptedInput`] was shown.
#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    labels: Vec<String>,
    rejections: Vec<String>,
}

/// Replays canned answers, for tests and non-interactive callers.
///
/// Clones share the same script, so a clone kept aside can inspect what the
/// prompter asked and rejected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Arc<Mutex<Script>>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Script {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Script::default()
        };
        Self {
            script: Arc::new(Mutex::new(script)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Labels shown so far, one per read.
    pub fn labels(&self) -> Vec<String> {
        self.lock().labels.clone()
    }

    /// Rejection messages shown so far.
    pub fn rejections(&self) -> Vec<String> {
        self.lock().rejections.clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lock().answers.len()
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read(&mut self, label: &str, _hidden: bool) -> Result<String> {
        let mut script = self.lock();
        script.labels.push(label.to_string());
        script
            .answers
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no answer left for '{}'", label)))
    }

    async fn reject(&mut self, message: &str) -> Result<()> {
        self.lock().rejections.push(message.to_string());
        Ok(())
    }
}
