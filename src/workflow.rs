// Orchestrates creation then publication. Strictly sequential: publish is
// only attempted with an id returned by creation in the same run. There is
// no retry and no rollback; a created-but-unpublished object simply stays
// pending on the platform.

use crate::api::MediaApi;
use crate::config::Post;
use crate::error::Result;
use crate::model::{MediaCreationResult, PublishResult};

/// Remediation checklist printed after any failure.
pub const GUIDANCE: &[&str] = &[
    "Check that ACCESS_TOKEN and IG_USER_ID are correct and still valid.",
    "The image must be hosted at a public URL the platform can fetch (invalid URLs are the most common failure).",
    "Confirm the Facebook app permissions (live mode, 'instagram_basic', 'instagram_content_publish', etc).",
    "Read the error log above for details.",
];

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub creation: MediaCreationResult,
    pub result: PublishResult,
}

/// Observer for stage transitions, used by the terminal front end to drive
/// its spinners. The unit type ignores every event.
pub trait Progress {
    fn creating(&self, _post: &Post) {}
    fn created(&self, _creation: &MediaCreationResult) {}
    fn publishing(&self, _creation: &MediaCreationResult) {}
    fn published(&self, _result: &PublishResult) {}
}

impl Progress for () {}

pub struct Workflow<'a, A: MediaApi> {
    api: &'a A,
    post: Post,
}

impl<'a, A: MediaApi> Workflow<'a, A> {
    pub fn new(api: &'a A, post: Post) -> Self {
        Workflow { api, post }
    }

    pub fn run(&self) -> Result<Outcome> {
        self.run_with(&())
    }

    /// Run both stages, reporting transitions to `progress`. The first error
    /// ends the run; an empty image URL or caption ends it before any request.
    pub fn run_with(&self, progress: &dyn Progress) -> Result<Outcome> {
        self.post.validate()?;

        progress.creating(&self.post);
        let creation = self
            .api
            .create_media(&self.post.image_url, &self.post.caption)?;
        log::debug!("creation finished, creation_id {}", creation.creation_id);
        progress.created(&creation);

        progress.publishing(&creation);
        let result = self.api.publish_media(&creation)?;
        log::debug!("published media {}", result.id);
        progress.published(&result);

        Ok(Outcome { creation, result })
    }
}
