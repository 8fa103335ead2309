//! Identifier value objects.
//!
//! - [`QuestionId`] - a question inside one survey graph
//! - [`OptionId`] - an answer option of a branching question
//! - [`SurveyId`] - a survey definition
//! - [`ResponseId`] - one respondent's run through a survey
//!
//! All identifiers are integers assigned by the surrounding system. They
//! serialize transparently as plain numbers; the navigation record that must
//! never be a bare integer is [`NavigationDeterminant`](crate::NavigationDeterminant).

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw integer value.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier of a question within a survey.
    QuestionId,
    "Q"
);

integer_id!(
    /// Identifier of an answer option.
    OptionId,
    "opt"
);

integer_id!(
    /// Identifier of a survey definition.
    SurveyId,
    "survey#"
);

integer_id!(
    /// Identifier of a single respondent's response (and its traversal session).
    ResponseId,
    "response#"
);
