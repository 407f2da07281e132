use crate::model::Mapping;

pub mod create;
pub mod delete;
pub mod expand;
pub mod list;
pub mod load;
pub mod persist;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Something for the user to read. Never a log line.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn at(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Error, content)
    }
}

/// Outcome of a single command.
///
/// A miss is not an error: `expand` leaves `expanded` as `None` and `delete`
/// leaves `affected` empty, each with a warning message explaining why.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Mappings created or removed by the command.
    pub affected: Vec<Mapping>,
    pub listed: Vec<Mapping>,
    pub expanded: Option<Mapping>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, mappings: Vec<Mapping>) -> Self {
        self.affected = mappings;
        self
    }

    pub fn with_listed(mut self, mappings: Vec<Mapping>) -> Self {
        self.listed = mappings;
        self
    }

    pub fn with_expanded(mut self, mapping: Mapping) -> Self {
        self.expanded = Some(mapping);
        self
    }

    /// True if any message is a warning or error.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
