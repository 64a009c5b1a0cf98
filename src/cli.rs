//! CLI interface for cpee-steps.
//!
//! Each subcommand is non-interactive: a log in, structured output out.
//! Logs are read from a path, or from stdin when the path is `-`.
//!
//! - `cpee-steps extract <log>` prints steps as JSON.
//! - `cpee-steps list <log>` prints one line per step.
//! - `cpee-steps show <log> --step <ref>` prints a step's content.
//! - `cpee-steps report <log>` prints what extraction dropped.
//!
//! A step reference is a step number or an unambiguous `change_uuid` prefix.

mod format;
mod select;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::model::{Extraction, SlotKind};
use crate::source::{self, LogSource, LogText};

use format::{format_report, format_slot, format_step_line};
use select::resolve_step;

/// cpee-steps: inspect the LLM-driven edit steps of a CPEE execution log.
#[derive(Debug, Parser)]
#[command(name = "cpee-steps", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file. Defaults to `~/.cpee-steps/config.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  cpee-steps list instance-42.xes.yaml
  cpee-steps show instance-42.xes.yaml --step 2 --slot output-cpee-tree
  curl -s "$LOG_URL" | cpee-steps extract - --out steps.json

Logging:
  Set CPEE_STEPS_LOG (e.g. "debug") to see skipped documents and
  overwritten slots on stderr."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract all steps as JSON.
    ///
    /// The JSON is written to `--out` (if given) or stdout.
    /// A one-line summary is printed to stderr when writing to a file.
    Extract {
        /// Log file, or `-` for stdin.
        log: LogSource,

        /// Write the JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Include the extraction report alongside the steps.
        #[arg(long)]
        report: bool,
    },

    /// List steps: number, change id, time, and which slots were found.
    List {
        /// Log file, or `-` for stdin.
        log: LogSource,
    },

    /// Print the content of one step.
    Show {
        /// Log file, or `-` for stdin.
        log: LogSource,

        /// Step number or unambiguous `change_uuid` prefix.
        #[arg(long)]
        step: String,

        /// Slot to print. All slots when omitted.
        #[arg(long, value_enum)]
        slot: Option<SlotArg>,
    },

    /// Summarize what extraction skipped, dropped, or overwrote.
    Report {
        /// Log file, or `-` for stdin.
        log: LogSource,
    },
}

/// CLI-facing slot name, mapped to the domain `SlotKind`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SlotArg {
    /// Process tree before the edit.
    InputCpeeTree,
    /// Diagram before the edit.
    InputIntermediate,
    /// The user's prompt.
    UserInput,
    /// Diagram after the edit.
    OutputIntermediate,
    /// Process tree after the edit.
    OutputCpeeTree,
}

impl SlotArg {
    fn to_domain(self) -> SlotKind {
        match self {
            Self::InputCpeeTree => SlotKind::InputCpeeTree,
            Self::InputIntermediate => SlotKind::InputIntermediate,
            Self::UserInput => SlotKind::UserInput,
            Self::OutputIntermediate => SlotKind::OutputIntermediate,
            Self::OutputCpeeTree => SlotKind::OutputCpeeTree,
        }
    }
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Extract { log, out, report } => cmd_extract(config, &log, out, report),
        Command::List { log } => cmd_list(config, &log),
        Command::Show { log, step, slot } => cmd_show(config, &log, &step, slot),
        Command::Report { log } => cmd_report(config, &log),
    }
}

fn load(config: &Config, log: &LogSource) -> Result<(LogText, Extraction), String> {
    let text = source::read_log(log).map_err(|e| e.to_string())?;
    let extraction = config.extractor().extract(&text.text);
    Ok((text, extraction))
}

fn cmd_extract(
    config: &Config,
    log: &LogSource,
    out: Option<PathBuf>,
    with_report: bool,
) -> Result<(), String> {
    let (_, extraction) = load(config, log)?;

    let json = if with_report {
        serde_json::to_string_pretty(&extraction)
    } else {
        serde_json::to_string_pretty(&extraction.steps)
    }
    .map_err(|e| format!("failed to serialize steps: {e}"))?;

    match out {
        Some(path) => {
            fs::write(&path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!(
                "Extracted {} step(s) from {log} → {}",
                extraction.steps.len(),
                path.display()
            );
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_list(config: &Config, log: &LogSource) -> Result<(), String> {
    let (_, extraction) = load(config, log)?;

    if extraction.steps.is_empty() {
        println!("No steps found");
        return Ok(());
    }

    let first = extraction.steps.first().map(|s| s.timestamp.as_str());
    for step in &extraction.steps {
        println!("{}", format_step_line(step, first));
    }

    Ok(())
}

fn cmd_show(
    config: &Config,
    log: &LogSource,
    reference: &str,
    slot: Option<SlotArg>,
) -> Result<(), String> {
    let (_, extraction) = load(config, log)?;
    let step = resolve_step(&extraction.steps, reference)?;

    match slot {
        Some(slot) => {
            println!("{}", format_slot(step.content.get(slot.to_domain())));
        }
        None => {
            println!("Step {} ({})", step.step_number, step.change_uuid);
            for kind in SlotKind::ALL {
                println!();
                println!("== {kind} ==");
                println!("{}", format_slot(step.content.get(kind)));
            }
        }
    }

    Ok(())
}

fn cmd_report(config: &Config, log: &LogSource) -> Result<(), String> {
    let (text, extraction) = load(config, log)?;
    println!("Source: {log} ({})", text.digest);
    for line in format_report(&extraction) {
        println!("{line}");
    }
    Ok(())
}
