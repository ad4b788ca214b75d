//! CLI entry point for safezone.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `safezone-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use safezone_app::{
    CheckInput, DEMO_INCIDENTS, ExplainOutput, GeojsonInput, WatchSession, parse_report_json,
    render_markdown, resolve_settings, run_check, run_explain, run_geojson, run_watch,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use safezone_domain::{ReportSet, haversine_distance_m, validate_point};
use safezone_settings::Overrides;
use safezone_types::{GeoPoint, SafezoneReport};
use std::io::BufReader;

#[derive(Parser, Debug)]
#[command(
    name = "safezone",
    version,
    about = "Safe-radius proximity checks for geolocated incident reports"
)]
struct Cli {
    /// Path to safezone config TOML (missing file means defaults).
    #[arg(long, default_value = "safezone.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override the safe radius in meters.
    #[arg(long)]
    threshold_m: Option<f64>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a scenario and write artifacts.
    Check {
        /// Scenario JSON (safezone.scenario.v1).
        #[arg(long)]
        scenario: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/safezone/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/safezone/report.md")]
        markdown_out: Utf8PathBuf,

        /// Write a GeoJSON map overlay alongside the JSON.
        #[arg(long)]
        write_geojson: bool,

        /// Where to write the GeoJSON overlay (if enabled).
        #[arg(long, default_value = "artifacts/safezone/overlay.geojson")]
        geojson_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/safezone/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render a GeoJSON map overlay for a scenario.
    Geojson {
        /// Scenario JSON (safezone.scenario.v1).
        #[arg(long)]
        scenario: Utf8PathBuf,

        /// Where to write the GeoJSON (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print the great-circle distance in meters between two points.
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },

    /// Replay JSON-lines position/report events and print one status line per event.
    Watch {
        /// Events file (reads stdin if not specified).
        #[arg(long)]
        events: Option<Utf8PathBuf>,

        /// Start with the two built-in demo incidents already reported.
        #[arg(long)]
        seed_demo: bool,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "proximity.safe_radius") or code (e.g., "report_within_radius").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref scenario,
            ref report_out,
            write_markdown,
            ref markdown_out,
            write_geojson,
            ref geojson_out,
        } => cmd_check(
            &cli,
            scenario,
            report_out,
            Artifact::when(write_markdown, markdown_out),
            Artifact::when(write_geojson, geojson_out),
        ),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Geojson {
            ref scenario,
            ref output,
        } => cmd_geojson(&cli, scenario, output.as_deref()),
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => cmd_distance(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2)),
        Commands::Watch {
            ref events,
            seed_demo,
        } => cmd_watch(&cli, events.as_deref(), seed_demo),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

/// An optional output file toggled by a `--write-*` flag.
struct Artifact<'a>(Option<&'a Utf8Path>);

impl<'a> Artifact<'a> {
    fn when(enabled: bool, path: &'a Utf8Path) -> Self {
        Self(enabled.then_some(path))
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        threshold_m: cli.threshold_m,
        max_findings: cli.max_findings,
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(config = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn read_scenario(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read scenario: {}", path))
}

fn cmd_check(
    cli: &Cli,
    scenario_path: &Utf8Path,
    report_out: &Utf8Path,
    markdown: Artifact<'_>,
    geojson: Artifact<'_>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let scenario_text = read_scenario(scenario_path)?;

        let output = run_check(CheckInput {
            scenario_text: &scenario_text,
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        tracing::info!(path = %report_out, verdict = ?output.report.verdict, "report written");

        if let Artifact(Some(path)) = markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(path, &md).context("write markdown")?;
            tracing::info!(path = %path, "markdown written");
        }

        if let Artifact(Some(path)) = geojson {
            let gj = run_geojson(GeojsonInput {
                scenario_text: &scenario_text,
                config_text: &cfg_text,
                overrides: overrides(cli),
            })?;
            write_json_file(path, &gj).context("write geojson")?;
            tracing::info!(path = %path, "geojson written");
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("safezone error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn ensure_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &SafezoneReport) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn write_json_file(path: &Utf8Path, value: &serde_json::Value) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("serialize json")?;
    text.push('\n');
    write_text_file(path, &text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_geojson(
    cli: &Cli,
    scenario_path: &Utf8Path,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let scenario_text = read_scenario(scenario_path)?;

    let gj = run_geojson(GeojsonInput {
        scenario_text: &scenario_text,
        config_text: &cfg_text,
        overrides: overrides(cli),
    })?;

    if let Some(out_path) = output {
        write_json_file(out_path, &gj).context("write geojson output")?;
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(&gj).context("serialize geojson")?
        );
    }

    Ok(())
}

fn cmd_distance(a: GeoPoint, b: GeoPoint) -> anyhow::Result<()> {
    let a = validate_point(a).context("first point")?;
    let b = validate_point(b).context("second point")?;
    println!("{:.2}", haversine_distance_m(a, b));
    Ok(())
}

fn cmd_watch(cli: &Cli, events: Option<&Utf8Path>, seed_demo: bool) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let resolved = resolve_settings(&cfg_text, overrides(cli))?;

    let seed = if seed_demo {
        DEMO_INCIDENTS.into_iter().collect()
    } else {
        ReportSet::new()
    };
    let mut session = WatchSession::new(resolved.effective.threshold, seed);

    let stdout = std::io::stdout().lock();
    let summary = match events {
        Some(path) => {
            let file =
                std::fs::File::open(path).with_context(|| format!("open events: {}", path))?;
            run_watch(BufReader::new(file), stdout, &mut session)?
        }
        None => run_watch(std::io::stdin().lock(), stdout, &mut session)?,
    };

    tracing::info!(
        events = summary.events,
        transitions = summary.transitions,
        final_status = summary.final_status.unwrap_or("unknown"),
        "watch finished"
    );
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", safezone_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                safezone_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
