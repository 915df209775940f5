use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Envelope of every command's output.
///
/// JSON output serializes it as-is: `{"badge"?, "content", "suggestions"?}`.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Suggest a follow-up command.
    pub fn with_hint(mut self, description: impl Into<String>, command: &str) -> Self {
        self.suggestions
            .push(Guidance::new(description).with_command(command));
        self
    }

    /// Add a hint that has no command to run.
    pub fn with_note(mut self, description: impl Into<String>) -> Self {
        self.suggestions.push(Guidance::new(description));
        self
    }
}
