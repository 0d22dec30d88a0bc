mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, StorefrontPage, new_session};
use common::scenario::{ScenarioCtx, all_scenario_keys, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, parse_seeds, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Property sweeps over generated inventories (fast, no browser)
    Logic,
    /// Browser automation against a running storefront
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "thriftfindr-tester", version)]
#[command(about = "Automated QA for ThriftFindr - catalog property sweeps and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of generated inventories per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the running storefront
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
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
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&split_csv(&args.seeds))?;

    let all_results = run_logic_scenarios(&args, &scenarios, &seeds);

    run_browser_scenarios(&args, &scenarios, &seeds).await?;

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
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
    println!("{}", "🛍️  ThriftFindr Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        let Some(combined) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if let Some(logic_scenario) = combined.as_logic_scenario() {
            results.extend(logic_tester.run_scenario(&logic_scenario, seeds, args.iterations));
        } else {
            eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            );
        }
    }

    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Result<()> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(());
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };
        log::info!("Started {} session", kind.label());

        run_browser_scenarios_for_driver(args, scenarios, seeds, kind, &driver).await;
        let _ = driver.quit().await;
    }

    Ok(())
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) {
    let label = kind.label();
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        for &seed in seeds {
            let ctx = ScenarioCtx {
                base_url: args.base_url.clone(),
                seed,
                page: StorefrontPage::new(driver),
                verbose: args.verbose,
            };

            let scenario_start = Instant::now();
            match scenario.run_browser(driver, &ctx).await {
                Ok(()) => {
                    println!(
                        "✅ [{} seed {}] {} - {:?}",
                        label.green(),
                        seed,
                        scenario_name,
                        scenario_start.elapsed()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "❌ [{} seed {}] {} - {:?}: {:#}",
                        label.red(),
                        seed,
                        scenario_name,
                        scenario_start.elapsed(),
                        e
                    );
                    let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name, seed);
                    if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                        log::warn!("Could not capture artifacts into {dir}: {capture_err:#}");
                    }
                }
            }
        }
    }
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# ThriftFindr Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
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
