// SPDX-License-Identifier: Apache-2.0
// Copyright Authors of roster

use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

/// Source of operator input for an interactive session.
pub(crate) trait Prompt {
    /// Returns the index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize>;

    fn text(&mut self, prompt: &str) -> anyhow::Result<String>;

    fn number<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString;

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// Answer taken when the operator just presses Enter at a yes/no question.
/// Only an explicit "y" activates a student.
pub(crate) const CONFIRM_DEFAULT: bool = false;

/// Reads input from the controlling terminal.
pub(crate) struct TermPrompt;

impl Prompt for TermPrompt {
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    // Unparsable input is re-prompted by dialoguer.
    fn number<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString,
    {
        Ok(Input::<T>::new().with_prompt(prompt).interact_text()?)
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(CONFIRM_DEFAULT)
            .interact()?)
    }
}
