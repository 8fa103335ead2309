//! Navigation behavior parameters.

/// Controls runtime behavior of the navigate use case.
#[derive(Debug, Clone)]
pub struct NavigationParams {
    /// Refuse to start sessions on graphs that fail validation.
    ///
    /// The traversal guard protects running sessions either way; this only
    /// blocks new respondents from entering an unsafe survey.
    pub validate_before_start: bool,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            validate_before_start: true,
        }
    }
}

impl NavigationParams {
    pub fn with_validate_before_start(mut self, validate: bool) -> Self {
        self.validate_before_start = validate;
        self
    }
}
