use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateRequest {
    /// Decode a raw request body. Anything that is not a JSON object with an
    /// optional string `title` decodes as a request without a title.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn raw_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub title: String,
    pub content: String,
}
