// API client module: a small blocking HTTP client for the two Graph API
// calls that put an image on the account's feed. Synchronous on purpose,
// there is only ever one request in flight.

use crate::config::Config;
use crate::error::{PublishError, Result, Stage};
use crate::model::{MediaCreationRequest, MediaCreationResult, PublishResult};
use anyhow::Context;
use reqwest::blocking::{Client, Response};
use serde_json::{Map, Value};

/// The two remote operations the workflow needs. `ApiClient` talks to the
/// real Graph API; tests can substitute their own implementation.
pub trait MediaApi {
    fn create_media(&self, image_url: &str, caption: &str) -> Result<MediaCreationResult>;
    fn publish_media(&self, creation: &MediaCreationResult) -> Result<PublishResult>;
}

/// Holds a reqwest blocking client, the API base URL and the account
/// credentials. The token travels as a form field, not a header.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    account_id: String,
    access_token: String,
}

impl ApiClient {
    /// Build a client from an already loaded `Config`. The configured timeout
    /// bounds every request.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.api_base_url.clone(),
            account_id: config.account_id.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn endpoint(&self, edge: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.account_id, edge)
    }

    fn post_form(&self, stage: Stage, url: &str, form: &[(&str, &str)]) -> Result<Response> {
        log::debug!("POST {} ({})", url, stage);
        self.client
            .post(url)
            .form(form)
            .send()
            .map_err(|source| PublishError::Transport { stage, source })
    }

    /// Create a pending media object from a public image URL and caption.
    /// Returns the creation id exactly as the platform sent it.
    pub fn create_media(&self, image_url: &str, caption: &str) -> Result<MediaCreationResult> {
        let req = MediaCreationRequest {
            image_url: image_url.to_string(),
            caption: caption.to_string(),
            account_id: self.account_id.clone(),
            access_token: self.access_token.clone(),
        };
        log::debug!("creating media: {:?}", req);

        let url = self.endpoint("media");
        let res = self.post_form(Stage::Creation, &url, &req.form())?;
        let (_, creation_id) = read_identified(Stage::Creation, res)?;
        Ok(MediaCreationResult { creation_id })
    }

    /// Publish a media object created by `create_media` in this same run.
    /// Returns the platform's full response.
    pub fn publish_media(&self, creation: &MediaCreationResult) -> Result<PublishResult> {
        let url = self.endpoint("media_publish");
        let form = [
            ("creation_id", creation.creation_id.as_str()),
            ("access_token", self.access_token.as_str()),
        ];
        let res = self.post_form(Stage::Publish, &url, &form)?;
        let (fields, id) = read_identified(Stage::Publish, res)?;
        Ok(PublishResult { id, fields })
    }
}

impl MediaApi for ApiClient {
    fn create_media(&self, image_url: &str, caption: &str) -> Result<MediaCreationResult> {
        ApiClient::create_media(self, image_url, caption)
    }

    fn publish_media(&self, creation: &MediaCreationResult) -> Result<PublishResult> {
        ApiClient::publish_media(self, creation)
    }
}

/// Check the status, then pull a non-empty string `id` out of the JSON body.
/// The status is checked first so a rejected call never reaches the parser.
fn read_identified(stage: Stage, res: Response) -> Result<(Map<String, Value>, String)> {
    let status = res.status();
    let body = res
        .text()
        .map_err(|source| PublishError::Transport { stage, source })?;
    log::debug!("{} response: {} {}", stage, status, body);

    if !status.is_success() {
        return Err(PublishError::Rejected {
            stage,
            status: status.as_u16(),
            body,
        });
    }
    match extract_id(&body) {
        Some(found) => Ok(found),
        None => Err(PublishError::Malformed { stage, body }),
    }
}

/// Split a JSON object body into its string `id` and the remaining fields.
fn extract_id(body: &str) -> Option<(Map<String, Value>, String)> {
    let mut fields = match serde_json::from_str(body).ok()? {
        Value::Object(map) => map,
        _ => return None,
    };
    match fields.remove("id")? {
        Value::String(id) if !id.is_empty() => Some((fields, id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::extract_id;

    #[test]
    fn id_is_taken_verbatim() {
        let (rest, id) = extract_id(r#"{"id": "17895695668004550", "x": 1}"#).unwrap();
        assert_eq!(id, "17895695668004550");
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn unusable_ids_are_rejected() {
        for body in [
            "{}",
            r#"{"id": ""}"#,
            r#"{"id": 177}"#,
            r#"["id"]"#,
            "not json",
            "",
        ] {
            assert!(extract_id(body).is_none(), "accepted {:?}", body);
        }
    }
}
