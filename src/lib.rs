// Library root
// -----------
// Publishes one hosted image to an Instagram account through the Graph API:
// create a pending media object, then publish it. The binary (`main.rs`)
// wires these modules together.
//
// Module responsibilities:
// - `config`: loads credentials and post settings once from the environment.
// - `api`: the blocking HTTP client for `/media` and `/media_publish`.
// - `model`: transient request/response types.
// - `error`: the Transport / Rejected / Malformed taxonomy, tagged by stage.
// - `workflow`: runs creation then publication, stopping at the first error.
// - `ui`: terminal prompts, spinners and the final report.
// - `logger`: `env_logger` setup for the binary.
pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod ui;
pub mod workflow;

pub use api::{ApiClient, MediaApi};
pub use config::{Config, Post};
pub use error::{PublishError, Stage};
pub use workflow::{Outcome, Workflow};
