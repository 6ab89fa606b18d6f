mod common;
mod logic;
mod remote;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use crewlog_game::ResolverConfig;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::scenario::{Scenario, expand_scenarios, get_scenario, list_scenarios};
use common::{load_weights, parse_seeds, split_csv};
use logic::{LogicTester, ScenarioResult};
use remote::{RemoteProber, RemoteResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Resolve catalog scenarios offline through the local heuristic
    Logic,
    /// Send catalog scenarios to a live reasoning service
    Remote,
    /// Run both logic and remote passes
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "crewlog-tester", version)]
#[command(about = "Scenario runner and service probe for the Crewlog resolution pipeline")]
struct Args {
    /// Test mode: logic (offline), remote (live service), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Reasoning service URL (remote mode)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request deadline in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// JSON file overriding the local heuristic weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let config = build_config(&args)?;
    let seeds = parse_seeds(&split_csv(&args.seeds))?;
    let scenarios = resolve_scenarios(&args.scenarios);

    let logic_results = run_logic_scenarios(&args, &config, &scenarios, &seeds).await;
    let remote_results = run_remote_scenarios(&args, &config, &scenarios, &seeds).await;

    write_reports(&args, &logic_results, &remote_results, start_time)?;

    if logic_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛰️  Crewlog Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn build_config(args: &Args) -> Result<ResolverConfig> {
    let mut config = ResolverConfig::default();
    if let Some(endpoint) = args.endpoint.as_deref() {
        config = config.with_endpoint(endpoint);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if let Some(path) = args.weights.as_deref() {
        config = config.with_weights(load_weights(path)?);
    }
    log::debug!("resolver config: {config:?}");
    Ok(config)
}

fn resolve_scenarios(arg: &str) -> Vec<Scenario> {
    expand_scenarios(&split_csv(arg))
        .into_iter()
        .filter_map(|key| {
            let found = get_scenario(&key);
            if found.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", key.yellow());
            }
            found
        })
        .collect()
}

async fn run_logic_scenarios(
    args: &Args,
    config: &ResolverConfig,
    scenarios: &[Scenario],
    seeds: &[u64],
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(config.clone(), args.verbose);
    for scenario in scenarios {
        results.extend(tester.run_scenario(scenario, seeds, args.iterations).await);
    }
    results
}

async fn run_remote_scenarios(
    args: &Args,
    config: &ResolverConfig,
    scenarios: &[Scenario],
    seeds: &[u64],
) -> Vec<RemoteResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Remote | TestMode::Both) {
        return results;
    }

    let prober = RemoteProber::new(config.clone());
    println!(
        "{} {}",
        "🌐 Probing".bright_blue().bold(),
        prober.endpoint().blue()
    );
    println!("{}", "-".repeat(30).blue());

    for scenario in scenarios {
        for &seed in seeds {
            match prober.probe(scenario, seed).await {
                Ok(result) => {
                    if args.verbose {
                        println!(
                            "   {} seed {seed}: {} hypotheses",
                            scenario.name, result.hypotheses
                        );
                    }
                    results.push(result);
                }
                Err(err) => eprintln!("❌ {} seed {seed}: {err:#}", scenario.name),
            }
        }
    }
    results
}

fn write_reports(
    args: &Args,
    logic_results: &[ScenarioResult],
    remote_results: &[RemoteResult],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            logic::reports::generate_json_report(&mut output_target, logic_results, remote_results)?;
        }
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(
                &mut output_target,
                logic_results,
                remote_results,
            )?;
        }
        ReportFormat::Console => {
            if logic_results.is_empty() && remote_results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    logic_results,
                    remote_results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: String::from("smoke"),
            list_scenarios: false,
            seeds: String::from("1337"),
            iterations: 1,
            report: ReportFormat::Json,
            output: None,
            endpoint: None,
            timeout_ms: None,
            weights: None,
            verbose: false,
        }
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "crewlog-tester",
            "--mode",
            "both",
            "--report",
            "markdown",
            "--endpoint",
            "http://localhost:8000/solve",
            "--timeout-ms",
            "250",
        ])
        .unwrap();
        assert_eq!(args.mode, TestMode::Both);
        assert_eq!(args.report, ReportFormat::Markdown);
        let config = build_config(&args).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8000/solve");
        assert_eq!(config.timeout_ms, 250);
    }

    #[test]
    fn default_config_when_no_overrides() {
        let config = build_config(&base_args()).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let scenarios = resolve_scenarios("smoke,nope,smoke");
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].key, "smoke");
    }

    #[tokio::test]
    async fn logic_mode_only_runs_logic() {
        let args = base_args();
        let config = ResolverConfig::default();
        let scenarios = resolve_scenarios("all");
        let logic = run_logic_scenarios(&args, &config, &scenarios, &[1]).await;
        assert_eq!(logic.len(), scenarios.len());
        assert!(logic.iter().all(|r| r.passed));
        let remote = run_remote_scenarios(&args, &config, &scenarios, &[1]).await;
        assert!(remote.is_empty());
    }

    #[test]
    fn output_target_writes_to_file() {
        let path = std::env::temp_dir().join(format!("crewlog-output-{}.txt", std::process::id()));
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        writeln!(target, "hello").unwrap();
        target.flush_inner().unwrap();
        drop(target);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
        let _ = std::fs::remove_file(path);
    }
}
