//! Interactive prompts

use std::future::Future;

use dialoguer::{console::Term, theme::ColorfulTheme, Input, Select};
use log::debug;

use crate::error::{FwdError, Result};

/// Predicate deciding whether free-text input is acceptable
pub type Validator = fn(&str) -> bool;

/// Asks the operator for a choice or a validated value.
///
/// Both prompts suspend until a valid answer is given; there is no retry
/// limit, only interruption ends them early.
pub trait Prompter: Send + Sync {
    /// Pick one of `choices`, returning its literal text
    fn select(
        &self,
        label: &str,
        choices: &[String],
    ) -> impl Future<Output = Result<String>> + Send;

    /// Read text, re-prompting until `validate` accepts it.
    /// Returns the raw text, not a parsed value.
    fn input_validated(
        &self,
        label: &str,
        validate: Validator,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Port predicate: trimmed text parses as a finite number
pub fn is_finite_number(input: &str) -> bool {
    input
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// `dialoguer` prompts rendered on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

fn ensure_terminal(term: &Term) -> Result<()> {
    if term.is_term() {
        Ok(())
    } else {
        Err(FwdError::Prompt("not a terminal".to_string()))
    }
}

fn check(validate: Validator, input: &str) -> std::result::Result<(), &'static str> {
    if validate(input) {
        Ok(())
    } else {
        Err("Please enter a number")
    }
}

impl Prompter for DialoguerPrompter {
    async fn select(&self, label: &str, choices: &[String]) -> Result<String> {
        if choices.is_empty() {
            return Err(FwdError::NoChoices(label.to_string()));
        }

        let label = label.to_string();
        let items = choices.to_vec();
        // dialoguer blocks on terminal reads
        tokio::task::spawn_blocking(move || {
            let term = Term::stderr();
            ensure_terminal(&term)?;

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(&label)
                .items(&items)
                .default(0)
                .interact_on(&term)?;

            let choice = items
                .get(selection)
                .cloned()
                .ok_or_else(|| FwdError::Prompt(format!("Invalid selection {}", selection)))?;
            debug!("User selected '{}' for '{}'", choice, label);
            Ok(choice)
        })
        .await?
    }

    async fn input_validated(&self, label: &str, validate: Validator) -> Result<String> {
        let label = label.to_string();
        tokio::task::spawn_blocking(move || {
            let term = Term::stderr();
            ensure_terminal(&term)?;

            let value: String = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(&label)
                .validate_with(move |input: &String| check(validate, input))
                .interact_text_on(&term)?;

            debug!("User entered '{}' for '{}'", value, label);
            Ok(value)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite_number_accepts_ports() {
        assert!(is_finite_number("8080"));
        assert!(is_finite_number("80"));
        assert!(is_finite_number(" 443 "));
    }

    #[test]
    fn test_is_finite_number_accepts_decimal_and_exponent() {
        assert!(is_finite_number("80.5"));
        assert!(is_finite_number("1e3"));
        assert!(is_finite_number("-1"));
    }

    #[test]
    fn test_is_finite_number_rejects_text() {
        assert!(!is_finite_number("abc"));
        assert!(!is_finite_number("80abc"));
        assert!(!is_finite_number(""));
        assert!(!is_finite_number("   "));
    }

    #[test]
    fn test_is_finite_number_decimal_only() {
        assert!(is_finite_number("+80"));
        assert!(!is_finite_number("0x1F"));
        assert!(!is_finite_number("0b11"));
    }

    #[test]
    fn test_is_finite_number_rejects_non_finite() {
        assert!(!is_finite_number("inf"));
        assert!(!is_finite_number("-infinity"));
        assert!(!is_finite_number("NaN"));
    }

    #[test]
    fn test_check_reports_message() {
        assert_eq!(check(is_finite_number, "8080"), Ok(()));
        assert_eq!(check(is_finite_number, "abc"), Err("Please enter a number"));
    }

    #[tokio::test]
    async fn test_select_rejects_empty_choices() {
        let result = DialoguerPrompter.select("Choose a pod", &[]).await;
        match result {
            Err(FwdError::NoChoices(label)) => assert_eq!(label, "Choose a pod"),
            other => panic!("Expected NoChoices, got {:?}", other),
        }
    }
}
