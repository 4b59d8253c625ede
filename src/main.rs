// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, load the config once and hand it to
//   the UI flow.
// - Exits with status 1 when the image could not be published.

use ig_publish::{config::Config, logger, ui};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    logger::init();

    // IG_USER_ID and ACCESS_TOKEN are required, see `config::Config::from_env`.
    let config = Config::from_env()?;

    if ui::run(&config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
