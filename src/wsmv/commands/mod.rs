use crate::model::WorkspaceId;

pub mod migrate;
pub mod repair;
pub mod scan;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One line of the `list` output: a bundle and where it points.
#[derive(Debug, Clone)]
pub struct ListedBundle {
    pub id: WorkspaceId,
    pub location: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedBundle>,
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub repaired: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
