use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/delete-point/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeleteResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}
