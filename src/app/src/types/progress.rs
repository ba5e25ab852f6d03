use serde::{Deserialize, Serialize};

/// Position of a multi-step backend pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub message: String,
    pub step: u32,
    pub total: u32,
}

impl ProgressUpdate {
    pub fn new(message: impl Into<String>, step: u32, total: u32) -> Self {
        Self {
            message: message.into(),
            step,
            total,
        }
    }

    /// Completion in percent, `None` when the pipeline length is unknown
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let step = self.step.min(self.total);
        Some((step * 100 / self.total) as u8)
    }
}
