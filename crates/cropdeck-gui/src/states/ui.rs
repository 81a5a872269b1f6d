use std::path::PathBuf;

use super::target::TargetChoice;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub source_size: Option<(u32, u32)>,
    pub choice: TargetChoice,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
