//! `--auth`: store an access token for later runs.

use anyhow::{Result, bail};
use dialoguer::Password;
use std::io::IsTerminal;

use crate::Context;
use crate::config;
use crate::paths;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!(
            "--auth needs an interactive terminal.\n\
             Set {} instead, or write {} as {{\"access_token\": \"...\"}}",
            config::ENV_ACCESS_TOKEN,
            paths::token_file()?.display()
        );
    }

    if !ctx.quiet {
        ui::info("Paste an OAuth access token with the presentations scope.");
        ui::dim("https://www.googleapis.com/auth/presentations");
    }

    let token = Password::new()
        .with_prompt("Access token")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Token cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let path = paths::token_file()?;
    config::save_token(&path, &token)?;
    ui::success(&format!("Saved access token to {}", path.display()));
    Ok(())
}
