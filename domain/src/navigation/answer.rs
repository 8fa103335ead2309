//! Submitted answer value object

use crate::core::ids::OptionId;
use serde::{Deserialize, Serialize};

/// An answer submitted by a respondent for one question.
///
/// Only the selected options matter for navigation; free text is carried
/// along for the delivery channel's own response record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Option ids the respondent selected, in submission order
    #[serde(default)]
    pub selected_options: Vec<OptionId>,
    /// Free-text content, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Answer {
    /// A single option selection.
    pub fn choice(option: impl Into<OptionId>) -> Self {
        Self {
            selected_options: vec![option.into()],
            text: None,
        }
    }

    /// Several option selections.
    pub fn choices<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionId>,
    {
        Self {
            selected_options: options.into_iter().map(Into::into).collect(),
            text: None,
        }
    }

    /// A free-text answer without any selection.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            selected_options: Vec::new(),
            text: Some(content.into()),
        }
    }

    /// An answer carrying nothing at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The selected option when exactly one was submitted.
    pub fn single_selection(&self) -> Option<OptionId> {
        match self.selected_options.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
