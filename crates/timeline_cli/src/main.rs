//! Command-line host for the timeline engine.
//!
//! # Responsibility
//! - Collect form values from flags or a JSON form file.
//! - Print the wikitext (default) or the full render plan (`--plan`).
//!
//! Usage:
//!   timeline --title Rome --start -100 --end 100 --minor 10 --major 50 \
//!     --event "-44=Ides of March" --event "27=Augustus"
//!   timeline --form form.json --plan

mod form;

use clap::Parser;
use form::{apply_overrides, load_form, FormOverrides};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
use timeline_core::{
    ExportConfig, TimelineForm, TimelineOutcome, TimelineService,
    DEFAULT_PERIODIC_CANDIDATE_LIMIT,
};

/// Exit code for rejected bounds; the message is still printed to stdout.
const EXIT_REJECTED: u8 = 2;
/// Exit code for increments over the `--max-ticks` budget.
const EXIT_TOO_MANY_TICKS: u8 = 3;

/// Build a timeline preview plan and its wiki template markup.
#[derive(Parser, Debug)]
#[command(name = "timeline", version)]
#[command(about = "Generate {{Timeline|data=...}} markup from timeline bounds and events")]
struct Args {
    /// JSON form file (`title`, `start`, `end`, `minor_increment`,
    /// `major_increment`, `events[{date,label}]`)
    #[arg(long)]
    form: Option<PathBuf>,

    /// Timeline title
    #[arg(long)]
    title: Option<String>,

    /// Start bound: number or date
    #[arg(long, allow_hyphen_values = true)]
    start: Option<String>,

    /// End bound: number or date
    #[arg(long, allow_hyphen_values = true)]
    end: Option<String>,

    /// Minor tick increment (0 disables)
    #[arg(long, allow_hyphen_values = true)]
    minor: Option<String>,

    /// Major tick increment (0 disables)
    #[arg(long, allow_hyphen_values = true)]
    major: Option<String>,

    /// Refuse increments that would generate more periodic ticks than this
    #[arg(long, default_value_t = DEFAULT_PERIODIC_CANDIDATE_LIMIT)]
    max_ticks: f64,

    /// Event as DATE=LABEL; repeatable, order is kept
    #[arg(long = "event", allow_hyphen_values = true)]
    events: Vec<String>,

    /// Wiki template name (overrides TIMELINE_TEMPLATE_NAME)
    #[arg(long)]
    template: Option<String>,

    /// Print ticks, placed events and document as JSON instead of wikitext
    #[arg(long)]
    plan: bool,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level for --log-dir
    #[arg(long, default_value_t = timeline_core::default_log_level().to_string())]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("timeline: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, String> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        timeline_core::init_logging(&args.log_level, log_dir).map_err(|err| err.to_string())?;
    }

    let base = match args.form.as_deref() {
        Some(path) => load_form(path).map_err(|err| err.to_string())?,
        None => TimelineForm::default(),
    };
    let form = apply_overrides(
        base,
        FormOverrides {
            title: args.title,
            start: args.start,
            end: args.end,
            minor: args.minor,
            major: args.major,
            events: args.events,
        },
    );

    let export = match args.template {
        Some(name) => ExportConfig::new(name),
        None => ExportConfig::from_env(),
    };
    debug!(
        "event=cli_render module=cli status=start events={} plan={}",
        form.events.len(),
        args.plan
    );

    let service = TimelineService::new(export);
    if let Err(err) = service.check_tick_budget(&form, args.max_ticks) {
        println!("{err}");
        return Ok(ExitCode::from(EXIT_TOO_MANY_TICKS));
    }

    let outcome = service.render(&form).map_err(|err| err.to_string())?;
    match outcome {
        TimelineOutcome::Rendered(render) => {
            if args.plan {
                let plan = serde_json::to_string_pretty(&render)
                    .map_err(|err| format!("failed to encode render plan: {err}"))?;
                println!("{plan}");
            } else {
                println!("{}", render.wikitext);
            }
            Ok(ExitCode::SUCCESS)
        }
        TimelineOutcome::Rejected(err) => {
            println!("{err}");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}
