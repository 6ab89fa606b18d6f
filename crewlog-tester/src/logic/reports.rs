use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;
use crate::remote::RemoteResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    logic: &'a [ScenarioResult],
    remote: &'a [RemoteResult],
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64 * 100.0
    }
}

fn source_label(result: &RemoteResult) -> String {
    match &result.source {
        crewlog_game::ResolutionSource::Remote => String::from("remote"),
        crewlog_game::ResolutionSource::Fallback { reason } => format!("fallback ({reason})"),
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    remote: &[RemoteResult],
    total_duration: Duration,
) -> Result<()> {
    if !results.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
        writeln!(out, "{}", "==============================".cyan())?;

        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        writeln!(out, "Total runs: {total}")?;
        writeln!(out, "Passed: {}", passed.to_string().green())?;
        writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
        writeln!(out, "Success rate: {:.1}%", success_rate(passed, total))?;
        writeln!(out, "Total time: {total_duration:?}")?;
        writeln!(out)?;

        for result in results {
            let status = if result.passed {
                "✅ PASS".green()
            } else {
                "❌ FAIL".red()
            };
            writeln!(out, "{status} {} (seed {})", result.scenario_name.bold(), result.seed)?;
            writeln!(
                out,
                "   Iterations: {}/{} successful",
                result.successful_iterations, result.iterations_run
            )?;
            writeln!(out, "   Average time: {:?}", result.average_duration)?;
            if !result.failures.is_empty() {
                writeln!(out, "   Failures:")?;
                for failure in &result.failures {
                    writeln!(out, "     • {}", failure.red())?;
                }
            }
            writeln!(out)?;
        }
    }

    if !remote.is_empty() {
        writeln!(out, "{}", "🌐 Remote Probe Results".bright_blue().bold())?;
        writeln!(out, "{}", "=======================".blue())?;
        let answered = remote.iter().filter(|r| r.answered_remotely()).count();
        writeln!(out, "Answered by service: {answered}/{}", remote.len())?;
        for result in remote {
            let marker = if result.invariant_failures.is_empty() {
                "✅".green()
            } else {
                "⚠️".yellow()
            };
            writeln!(
                out,
                "{marker} {} (seed {}) - {} - {} hypotheses in {:?}",
                result.scenario_name.bold(),
                result.seed,
                source_label(result),
                result.hypotheses,
                result.duration
            )?;
            for failure in &result.invariant_failures {
                writeln!(out, "     • {}", failure.yellow())?;
            }
        }
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    remote: &[RemoteResult],
) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        logic: results,
        remote,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    remote: &[RemoteResult],
) -> Result<()> {
    writeln!(out, "# Crewlog Test Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Logic runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(passed, total))?;

    if !results.is_empty() {
        writeln!(out, "## Logic Results\n")?;
        for result in results {
            let status = if result.passed { "✅" } else { "❌" };
            writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
            writeln!(
                out,
                "- **Iterations**: {}/{} successful",
                result.successful_iterations, result.iterations_run
            )?;
            writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
            if !result.failures.is_empty() {
                writeln!(out, "- **Failures**:")?;
                for failure in &result.failures {
                    writeln!(out, "  - {failure}")?;
                }
            }
            writeln!(out)?;
        }
    }

    if !remote.is_empty() {
        writeln!(out, "## Remote Probe\n")?;
        writeln!(out, "| Scenario | Seed | Source | Hypotheses | Issues |")?;
        writeln!(out, "|---|---|---|---|---|")?;
        for result in remote {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                result.scenario_name,
                result.seed,
                source_label(result),
                result.hypotheses,
                result.invariant_failures.len()
            )?;
        }
    }
    Ok(())
}
