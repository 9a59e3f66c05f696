//! Demonstration runner: config resolution plus report rendering

use std::io::Write;

use serde::Serialize;
use tracing::{error, info, warn};

use faultdemo_core::config::FaultDemoConfig;
use faultdemo_core::demonstrator::{DemoReport, Demonstrator};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Resolve the effective configuration.
///
/// Without `--config` no file is read: built-in defaults plus env overrides.
/// `--log-level` is applied last and re-validated.
pub fn resolve_config(cli: &Cli) -> Result<FaultDemoConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => FaultDemoConfig::load(path)?,
        None => FaultDemoConfig::from_env()?,
    };

    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Run the scenario sequence `repeat` times and render every run to stdout.
///
/// A failed write is logged, not returned: once the scenarios have run the
/// invocation counts as complete.
pub fn execute(config: &FaultDemoConfig, repeat: u32, writer: &OutputWriter) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    execute_to(config, repeat, writer, &mut handle);
}

fn execute_to(config: &FaultDemoConfig, repeat: u32, writer: &OutputWriter, w: &mut dyn Write) {
    let runs = collect_runs(config, repeat);
    if let Err(e) = writer.render_to(&runs, w) {
        error!(error = %e, "failed to write demonstration report");
    }
}

fn collect_runs(config: &FaultDemoConfig, repeat: u32) -> DemoRuns {
    let demonstrator = Demonstrator::new(&config.scenarios);
    let runs: Vec<DemoReport> = (0..repeat).map(|_| demonstrator.run()).collect();
    for (run, report) in runs.iter().enumerate() {
        if !report.all_caught() {
            warn!(
                run = run + 1,
                caught = report.caught_count(),
                scenarios = report.scenarios.len(),
                "some scenarios did not catch their designated fault"
            );
        }
    }
    info!(
        runs = runs.len(),
        scenarios = demonstrator.len(),
        "demonstration complete"
    );
    DemoRuns { runs }
}

/// Every report produced by one invocation.
#[derive(Debug, Serialize)]
pub struct DemoRuns {
    pub runs: Vec<DemoReport>,
}

impl Render for DemoRuns {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        for run in &self.runs {
            run.write_lines(w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use clap::Parser;

    fn render(runs: &DemoRuns, format: OutputFormat) -> Vec<u8> {
        let mut buffer = Vec::new();
        OutputWriter::new(format)
            .render_to(runs, &mut buffer)
            .expect("rendering should succeed");
        buffer
    }

    #[test]
    fn test_single_run_renders_eleven_lines() {
        let runs = collect_runs(&FaultDemoConfig::default(), 1);
        let output = String::from_utf8(render(&runs, OutputFormat::Text)).expect("valid UTF-8");
        assert_eq!(output.lines().count(), 11);
        assert_eq!(
            output.lines().nth(5),
            Some("ArithmeticException caught: Division by zero.")
        );
    }

    #[test]
    fn test_repeated_runs_render_identical_blocks() {
        let runs = collect_runs(&FaultDemoConfig::default(), 2);
        let output = String::from_utf8(render(&runs, OutputFormat::Text)).expect("valid UTF-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[..11], lines[11..]);
    }

    #[test]
    fn test_json_rendering_contains_every_run() {
        let runs = collect_runs(&FaultDemoConfig::default(), 2);
        let parsed: serde_json::Value =
            serde_json::from_slice(&render(&runs, OutputFormat::Json)).expect("valid JSON");
        let runs = parsed["runs"].as_array().expect("runs array");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["scenarios"].as_array().map(Vec::len), Some(11));
    }

    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("no space left on device"))
        }
    }

    #[test]
    fn test_write_failure_is_logged_not_raised() {
        // Given: a sink that rejects every write
        let config = FaultDemoConfig::default();

        // When/Then: both formats return normally
        execute_to(&config, 1, &OutputWriter::new(OutputFormat::Text), &mut FullSink);
        execute_to(&config, 1, &OutputWriter::new(OutputFormat::Json), &mut FullSink);
    }

    #[test]
    fn test_resolve_config_applies_log_level_override() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("faultdemo.toml");
        std::fs::write(&path, "[general]\nlog_level = \"info\"\n").expect("should write");

        let cli = Cli::try_parse_from([
            "faultdemo",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--log-level",
            "debug",
        ])
        .expect("parse succeeded");
        let config = resolve_config(&cli).expect("config should resolve");
        assert_eq!(config.general.log_level, "debug");
    }

    #[test]
    fn test_resolve_config_rejects_invalid_log_level() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("faultdemo.toml");
        std::fs::write(&path, "").expect("should write");

        let cli = Cli::try_parse_from([
            "faultdemo",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--log-level",
            "chatty",
        ])
        .expect("parse succeeded");
        let err = resolve_config(&cli).expect_err("invalid level should fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_resolve_config_missing_file_is_config_error() {
        let cli = Cli::try_parse_from(["faultdemo", "--config", "/nonexistent/faultdemo.toml"])
            .expect("parse succeeded");
        let err = resolve_config(&cli).expect_err("missing file should fail");
        assert_eq!(err.exit_code(), 2);
    }
}
