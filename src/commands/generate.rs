//! Deck generation: pick the input mode, load it, run the client, report.

use anyhow::{Context as _, Result, bail};
use slidekit::gateway::google::GoogleSlidesGateway;
use slidekit::{Client, GenerationResult, Progress, ReviewData, SlideConfig, loader};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::Context;
use crate::cli::{Cli, OutputFormat};
use crate::config::{self, Settings};
use crate::progress::BatchProgress;
use crate::ui;

/// Where the deck content comes from, in precedence order.
#[derive(Debug, PartialEq, Eq)]
pub enum InputSource {
    /// `--config`: a slide layout
    Config(PathBuf),
    /// `--template` + `--data`: a slide layout with placeholders
    Template { template: PathBuf, data: PathBuf },
    /// `--input`, or stdin when `None`: code review data
    Review(Option<PathBuf>),
}

/// Loaded content ready to generate.
#[derive(Debug)]
pub enum Job {
    Layout(SlideConfig),
    Review(ReviewData),
}

pub fn run(ctx: &Context, cli: &Cli) -> Result<()> {
    let source = select_source(cli, io::stdin().is_terminal())?;
    if !ctx.quiet {
        ui::info(&format!("Generating from {}", describe(&source)));
    }
    let job = load_job(&source, cli.presentation_id.as_deref(), || {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Could not read stdin")?;
        Ok(content)
    })?;

    let settings = Settings::load()?;
    let format = cli.output.or(settings.output).unwrap_or_default();
    let token = config::access_token()?;

    let gateway = GoogleSlidesGateway::with_api_base(settings.api_base(), token);
    let client = Client::with_gateway(Box::new(gateway));

    let mut progress = BatchProgress::new(ctx.quiet);
    let result = generate(&client, &job, &mut progress);
    progress.finish();
    let result = result?;

    if !ctx.quiet {
        ui::success(&format!("Presentation ready: {}", result.presentation_id));
    }
    println!("{}", render_output(&result, format)?);
    Ok(())
}

/// Pick the input mode from the flags.
///
/// Fails before any file or network access when the flags are inconsistent.
pub fn select_source(cli: &Cli, stdin_is_terminal: bool) -> Result<InputSource> {
    if let Some(path) = &cli.config {
        return Ok(InputSource::Config(path.clone()));
    }

    if let Some(template) = &cli.template {
        let Some(data) = &cli.data else {
            bail!("--template requires --data to provide values");
        };
        return Ok(InputSource::Template {
            template: template.clone(),
            data: data.clone(),
        });
    }

    if let Some(path) = &cli.input {
        return Ok(InputSource::Review(Some(path.clone())));
    }

    if stdin_is_terminal {
        bail!("No input received. Use --config, --template, or provide JSON via stdin.");
    }
    Ok(InputSource::Review(None))
}

/// Load and parse the selected input.
///
/// `presentation_id` is applied to layouts only; review decks are always new.
pub fn load_job<F>(source: &InputSource, presentation_id: Option<&str>, read_stdin: F) -> Result<Job>
where
    F: FnOnce() -> Result<String>,
{
    let job = match source {
        InputSource::Config(path) => Job::Layout(loader::load_config(path)?),
        InputSource::Template { template, data } => {
            let values = loader::load_data(data)?;
            Job::Layout(loader::load_template(template, &values)?)
        }
        InputSource::Review(Some(path)) => Job::Review(loader::load_review(path)?),
        InputSource::Review(None) => {
            let content = read_stdin()?;
            Job::Review(loader::parse_review(&content, "stdin")?)
        }
    };

    match (job, presentation_id) {
        (Job::Layout(mut layout), Some(id)) => {
            layout.set_presentation_id(id);
            Ok(Job::Layout(layout))
        }
        (Job::Review(review), Some(_)) => {
            log::warn!("--presentation-id is ignored for review input");
            Ok(Job::Review(review))
        }
        (job, None) => Ok(job),
    }
}

pub fn generate<P: Progress>(client: &Client, job: &Job, progress: &mut P) -> Result<GenerationResult> {
    let result = match job {
        Job::Layout(layout) => client.generate_from_config(layout, progress)?,
        Job::Review(review) => client.generate_from_review(review, progress)?,
    };
    Ok(result)
}

pub fn render_output(result: &GenerationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Url => Ok(result.presentation_url.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Display a path for status lines.
pub fn describe(source: &InputSource) -> String {
    let show = |p: &Path| p.display().to_string();
    match source {
        InputSource::Config(path) => format!("layout {}", show(path)),
        InputSource::Template { template, data } => {
            format!("template {} with {}", show(template), show(data))
        }
        InputSource::Review(Some(path)) => format!("review {}", show(path)),
        InputSource::Review(None) => "review from stdin".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
