//! Interactive prompts for filling in the registration form.
//!
//! This module provides functionality to:
//! - Prompt for text, password and file-path fields
//! - Offer the next step after a rejected submit
//! - Support batch mode (non-interactive) for CI/scripting

use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; missing values stay empty.
    pub batch_mode: bool,
}

impl PromptOptions {
    /// Prompts are shown only when stdin is a terminal and batch mode is off.
    pub fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && !self.batch_mode
    }
}

/// Error type for prompting.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Prompt for a text value, pre-filled with the current one.
pub fn prompt_text(label: &str, current: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Prompt for a password without echoing it.
pub fn prompt_password(label: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    Password::with_theme(&theme)
        .with_prompt(label)
        .allow_empty_password(true)
        .interact()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Let the user pick one item. `None` means the prompt was dismissed.
pub fn select(label: &str, items: &[String]) -> Result<Option<usize>, PromptError> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)
}

pub fn confirm(label: &str, default: bool) -> Result<bool, PromptError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(default)
        .interact()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof
                || io_err.kind() == io::ErrorKind::Interrupted
            {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `--tech` argument.
///
/// Expected format: `title=knowledge`. Without `=` the whole argument is the
/// title and the knowledge is left empty.
pub fn parse_tech_arg(arg: &str) -> (String, String) {
    match arg.split_once('=') {
        Some((title, knowledge)) => (title.trim().to_string(), knowledge.trim().to_string()),
        None => (arg.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tech_arg() {
        assert_eq!(parse_tech_arg("go=5"), ("go".to_string(), "5".to_string()));
        assert_eq!(parse_tech_arg(" rust = 8 "), ("rust".to_string(), "8".to_string()));
        assert_eq!(parse_tech_arg("c++=x=y"), ("c++".to_string(), "x=y".to_string()));
        assert_eq!(parse_tech_arg("zig"), ("zig".to_string(), String::new()));
        assert_eq!(parse_tech_arg("=3"), (String::new(), "3".to_string()));
    }

    #[test]
    fn test_batch_mode_is_never_interactive() {
        let options = PromptOptions { batch_mode: true };
        assert!(!options.is_interactive());
    }
}
