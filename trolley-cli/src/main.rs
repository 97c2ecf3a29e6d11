mod console;
mod runner;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::{self, Write, stdout};

use console::Typewriter;
use runner::{SessionOutcome, SessionRunner};
use trolley_game::{DataLoader, EmbeddedData, ScenarioCatalog, Session, TextSpeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pace {
    /// 40 ms per character
    Cinematic,
    /// 20 ms per character
    Standard,
    /// No delay
    Instant,
}

impl From<Pace> for TextSpeed {
    fn from(pace: Pace) -> Self {
        match pace {
            Pace::Cinematic => Self::Cinematic,
            Pace::Standard => Self::Standard,
            Pace::Instant => Self::Instant,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "trolley-sim", version)]
#[command(about = "The Trolley Problem Moral Simulator - four scenarios, two choices each")]
struct Args {
    /// Text speed; skips the speed menu when given
    #[arg(long, value_enum)]
    pace: Option<Pace>,

    /// List the scenarios and exit
    #[arg(long)]
    list_scenarios: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = EmbeddedData
        .load_catalog()
        .context("failed to load scenario catalog")?;

    if maybe_list_scenarios(&args, &catalog, &mut stdout().lock())? {
        return Ok(());
    }

    let preset = args.pace.map(TextSpeed::from);
    let session = Session::new(catalog);
    let play = tokio::task::spawn_blocking(move || {
        let mut runner = SessionRunner::new(io::stdin().lock(), stdout(), session);
        runner.run(preset)
    });

    tokio::select! {
        joined = play => {
            let outcome = joined.context("session task failed")??;
            match outcome {
                SessionOutcome::Completed(summary) => log::debug!(
                    "session finished with {} decisions",
                    summary.decisions.len()
                ),
                SessionOutcome::Interrupted => log::debug!("session ended at end of input"),
            }
        }
        () = interrupted() => {
            log::info!("interrupt received");
            Typewriter::new(stdout(), TextSpeed::Instant).line(script::FAREWELL)?;
            // The session thread is parked on stdin and cannot be joined.
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("could not listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}

fn maybe_list_scenarios(
    args: &Args,
    catalog: &ScenarioCatalog,
    out: &mut impl Write,
) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    writeln!(out, "{}", "Available scenarios:".bold())?;
    for (idx, scenario) in catalog.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:52} - {}",
            idx + 1,
            scenario.name,
            scenario.kind
        )?;
    }
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            pace: None,
            list_scenarios: false,
        }
    }

    #[test]
    fn list_scenarios_writes_catalog_in_order() {
        colored::control::set_override(false);
        let catalog = ScenarioCatalog::load_from_static().unwrap();
        let args = Args {
            list_scenarios: true,
            ..base_args()
        };
        let mut out = Vec::new();
        assert!(maybe_list_scenarios(&args, &catalog, &mut out).unwrap());
        let content = String::from_utf8(out).unwrap();
        assert!(content.contains("Available scenarios"));
        let switch = content.find("Classic Switch").unwrap();
        let equal = content.find("Equal Numbers").unwrap();
        assert!(switch < equal);
        assert!(content.contains("self-driving"));
    }

    #[test]
    fn list_scenarios_returns_false_when_disabled() {
        let catalog = ScenarioCatalog::load_from_static().unwrap();
        let mut out = Vec::new();
        assert!(!maybe_list_scenarios(&base_args(), &catalog, &mut out).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn pace_maps_onto_text_speed() {
        assert_eq!(TextSpeed::from(Pace::Cinematic), TextSpeed::Cinematic);
        assert_eq!(TextSpeed::from(Pace::Standard), TextSpeed::Standard);
        assert_eq!(TextSpeed::from(Pace::Instant), TextSpeed::Instant);
    }

    #[test]
    fn parses_pace_flag() {
        let args = Args::try_parse_from(["trolley-sim", "--pace", "instant"]).unwrap();
        assert_eq!(args.pace, Some(Pace::Instant));
        assert!(Args::try_parse_from(["trolley-sim", "--pace", "warp"]).is_err());
    }
}
