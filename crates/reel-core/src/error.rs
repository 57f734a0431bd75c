use thiserror::Error;

/// One or more field-rule violations, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Returns the violation messages in report order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("could not allocate a free video id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}
