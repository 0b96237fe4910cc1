//! UI interaction state

/// Transient interaction state that is not part of the view
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in the status bar
    pub error_message: Option<String>,

    /// Help window visibility
    pub show_help: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
