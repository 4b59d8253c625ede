// Transient request/response shapes. Nothing here outlives a single run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Fields sent to `/{account}/media`. The image URL must be publicly
/// fetchable: the platform downloads it server side.
#[derive(Clone)]
pub struct MediaCreationRequest {
    pub image_url: String,
    pub caption: String,
    pub account_id: String,
    pub access_token: String,
}

impl MediaCreationRequest {
    /// Form body as `(name, value)` pairs.
    pub fn form(&self) -> [(&'static str, &str); 3] {
        [
            ("image_url", self.image_url.as_str()),
            ("caption", self.caption.as_str()),
            ("access_token", self.access_token.as_str()),
        ]
    }
}

// Keep the token out of logs.
impl fmt::Debug for MediaCreationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaCreationRequest")
            .field("image_url", &self.image_url)
            .field("caption", &self.caption)
            .field("account_id", &self.account_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Identifier of a pending, unpublished media object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCreationResult {
    pub creation_id: String,
}

/// Final payload of `/{account}/media_publish`. `id` is guaranteed, any other
/// field the platform adds is kept in `fields`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl fmt::Display for PublishResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
