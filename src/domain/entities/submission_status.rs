use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Client-visible state of the waitlist submission flow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }
}
