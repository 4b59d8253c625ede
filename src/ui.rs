// UI layer: asks for the post content when running interactively, shows a
// spinner per stage and prints the outcome or the remediation checklist.

use crate::api::ApiClient;
use crate::config::{Config, Post};
use crate::error::PublishError;
use crate::model::{MediaCreationResult, PublishResult};
use crate::workflow::{Outcome, Progress, Workflow, GUIDANCE};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run the whole flow against the configured account. Returns `Ok(true)` when
/// the image went live, `Ok(false)` when the workflow failed and the failure
/// has already been reported to the user.
pub fn run(config: &Config) -> Result<bool> {
    let post = collect_post(config)?;
    let api = ApiClient::new(config)?;

    println!("Starting media creation on the Instagram account...");
    let spinners = Spinners::default();
    match Workflow::new(&api, post).run_with(&spinners) {
        Ok(outcome) => {
            spinners.finish();
            report_success(&outcome);
            Ok(true)
        }
        Err(e) => {
            spinners.abandon();
            report_failure(&e);
            Ok(false)
        }
    }
}

/// Use the configured post, prompting for any missing piece when a person
/// is at the keyboard. Unattended runs fall back to the defaults.
fn collect_post(config: &Config) -> Result<Post> {
    let defaults = config.post();
    if !std::io::stdin().is_tty() {
        return Ok(defaults);
    }

    let image_url = match &config.image_url {
        Some(url) => url.clone(),
        None => Input::new()
            .with_prompt("Public image URL")
            .default(defaults.image_url)
            .interact_text()
            .context("Failed to read image URL")?,
    };
    let caption = match &config.caption {
        Some(caption) => caption.clone(),
        None => Input::new()
            .with_prompt("Caption")
            .default(defaults.caption)
            .interact_text()
            .context("Failed to read caption")?,
    };
    Ok(Post { image_url, caption })
}

fn report_success(outcome: &Outcome) {
    println!(
        "{} (creation_id {})",
        "Published successfully!".green().bold(),
        outcome.creation.creation_id
    );
    println!("Returned data: {}", outcome.result);
}

fn report_failure(err: &PublishError) {
    println!("{} {}", "Workflow failed:".red().bold(), err);
    if err.is_timeout() {
        println!("The request timed out before the platform answered.");
    }
    println!("Recommendations:");
    for line in GUIDANCE {
        println!("- {}", line);
    }
}

/// One spinner at a time, swapped when the workflow moves to the next stage.
#[derive(Default)]
struct Spinners {
    current: std::cell::RefCell<Option<ProgressBar>>,
}

impl Spinners {
    fn start(&self, msg: String) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(100));
        if let Some(old) = self.current.replace(Some(spinner)) {
            old.finish_and_clear();
        }
    }

    fn finish(&self) {
        if let Some(spinner) = self.current.take() {
            spinner.finish_and_clear();
        }
    }

    fn abandon(&self) {
        if let Some(spinner) = self.current.take() {
            spinner.abandon();
        }
    }
}

impl Progress for Spinners {
    fn creating(&self, post: &Post) {
        self.start(format!("Creating media from {}...", post.image_url));
    }

    fn created(&self, creation: &MediaCreationResult) {
        let line = format!("Creation finished. creation_id: {}", creation.creation_id);
        match self.current.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn publishing(&self, _creation: &MediaCreationResult) {
        self.start("Publishing image to the feed...".into());
    }

    fn published(&self, _result: &PublishResult) {
        self.finish();
    }
}
