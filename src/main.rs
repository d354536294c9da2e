mod demo;
mod report;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use maturity_engine::assessment::{AnswerSheetImporter, AssessmentTree, RawAnswers};
use maturity_engine::config::AppConfig;
use maturity_engine::error::AppError;
use maturity_engine::scoring::{
    CalculationOptions, PolicyId, PolicyRecord, PolicyRegistry, ScoringEngine,
};
use maturity_engine::telemetry;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

use report::{AnswerSource, ScoreReport};

#[derive(Parser, Debug)]
#[command(
    name = "maturity",
    about = "Score enterprise architecture maturity assessments from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an assessment tree against a recorded answer sheet
    Score(ScoreArgs),
    /// Print the maturity level table
    Levels(OutputArgs),
    /// Score the built-in sample assessment with the standard policy (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Assessment tree JSON (pillars → topics → metrics)
    #[arg(long)]
    tree: PathBuf,
    /// JSON array of scoring policy records
    #[arg(long)]
    policies: PathBuf,
    /// Answer sheet CSV with a `metric_id,value` header
    #[arg(long)]
    answers: PathBuf,
    /// Optional answer sheet layered over the recorded answers
    #[arg(long)]
    what_if: Option<PathBuf>,
    /// Policy id to score with instead of the registry default
    #[arg(long)]
    policy: Option<String>,
    /// Skip improvement recommendations
    #[arg(long)]
    no_recommendations: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Skip improvement recommendations
    #[arg(long)]
    no_recommendations: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Emit pretty-printed JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = config.environment.label(), "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(&config, args),
        Command::Levels(output) => report::print_levels(output.json),
        Command::Demo(args) => run_demo(&config, args),
    }
}

fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        tree,
        policies,
        answers,
        what_if,
        policy,
        no_recommendations,
        output,
    } = args;

    let tree: AssessmentTree = read_json(&tree)?;
    let records: Vec<PolicyRecord> = read_json(&policies)?;
    let registry = PolicyRegistry::from_records(records)?;

    let explicit = policy.map(PolicyId).or_else(|| config.scoring.policy_id.clone());
    let engine = ScoringEngine::from_registry(&registry, explicit.as_ref())?;

    let recorded = read_answers(&answers)?;
    let (answers, source) = match what_if {
        Some(path) => {
            let overrides = read_answers(&path)?;
            info!(overrides = overrides.len(), "applying what-if answers");
            (recorded.with_overrides(&overrides), AnswerSource::WhatIf)
        }
        None => (recorded, AnswerSource::Recorded),
    };

    let options = CalculationOptions {
        include_recommendations: config.scoring.include_recommendations && !no_recommendations,
    };
    let score = engine.calculate_with(&tree, &answers, options);

    report::print_score(&ScoreReport::new(&score, source, Utc::now()), output.json)
}

fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::new(demo::policy());
    let options = CalculationOptions {
        include_recommendations: config.scoring.include_recommendations
            && !args.no_recommendations,
    };

    let score = engine.calculate_with(&demo::tree(), &demo::answers(), options);

    report::print_score(
        &ScoreReport::new(&score, AnswerSource::Sample, Utc::now()),
        args.output.json,
    )
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn read_answers(path: &Path) -> Result<RawAnswers, AppError> {
    let file = File::open(path)?;
    Ok(AnswerSheetImporter::from_reader(BufReader::new(file))?)
}
