//! Interactive prompts shared by the commands.

use dialoguer::{Confirm, Input, Password, Select};

/// Free text. `initial` pre-fills the line when editing an existing record.
pub fn text(prompt: &str, initial: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(initial) = initial.filter(|s| !s.is_empty()) {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}

/// Free text where blank means "not set".
pub fn optional_text(prompt: &str, initial: Option<&str>) -> anyhow::Result<Option<String>> {
    let value = text(prompt, initial)?;
    Ok((!value.trim().is_empty()).then_some(value))
}

/// A whole number; blank means "not set".
pub fn optional_number(prompt: &str, initial: Option<i32>) -> anyhow::Result<Option<i32>> {
    let initial = initial.map(|n| n.to_string());
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() || value.trim().parse::<i32>().is_ok() {
                Ok(())
            } else {
                Err("Enter a whole number")
            }
        });
    if let Some(initial) = &initial {
        input = input.with_initial_text(initial);
    }
    let value = input.interact_text()?;
    Ok(value.trim().parse().ok())
}

pub fn flag(prompt: &str, default: bool) -> anyhow::Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
}

/// Asks before a destructive action; `assume_yes` skips the question.
pub fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    flag(prompt, false)
}

pub fn password(prompt: &str) -> anyhow::Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// Picks one of `labels`, returning its index.
pub fn choose(prompt: &str, labels: &[String], default: usize) -> anyhow::Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default.min(labels.len().saturating_sub(1)))
        .interact()?)
}

/// Picks one of `items` or none; the first row is "(none)".
pub fn choose_optional<T>(
    prompt: &str,
    items: &[T],
    label: impl Fn(&T) -> String,
    selected: impl Fn(&T) -> bool,
) -> anyhow::Result<Option<usize>> {
    let mut labels = vec!["(none)".to_string()];
    labels.extend(items.iter().map(&label));
    let default = items.iter().position(selected).map_or(0, |i| i + 1);
    let index = choose(prompt, &labels, default)?;
    Ok(index.checked_sub(1))
}

/// Uses the value given on the command line, else asks for it.
pub fn or_text(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => text(prompt, None),
    }
}

pub fn or_password(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => password(prompt),
    }
}
