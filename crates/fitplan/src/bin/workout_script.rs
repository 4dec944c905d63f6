//! One-shot plan generation from the command line.
//!
//! ```text
//! workout-script [FITNESS_LEVEL] [GOAL] [DURATION] [EQUIPMENT] [--format markdown] [--pdf]
//! ```

use anyhow::Context as _;
use chrono::Local;
use clap::{Parser, ValueEnum};
use fitplan::{
    config::AppConfig, export::PdfExporter, generator::WorkoutGenerator, logging::LoggingConfig,
    types::WorkoutRequest,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The plan text only.
    Plain,
    /// Heading, request fields and plan.
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "workout-script", version, about = "Generate a personalised workout plan")]
struct Args {
    /// Fitness level, passed to the model verbatim.
    #[arg(default_value = "Beginner")]
    fitness_level: String,

    /// Training goal.
    #[arg(default_value = "Weight gain")]
    goal: String,

    /// Session length in minutes.
    #[arg(default_value_t = 23)]
    duration: u32,

    /// Available equipment.
    #[arg(default_value = "Bodyweight")]
    equipment: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Also export the plan as PDF into `FITPLAN_OUTPUT_DIR`.
    #[arg(long)]
    pdf: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()
        .init()
        .context("failed to initialise logging")?;
    let config = AppConfig::from_env().context("invalid configuration")?;

    let generator = WorkoutGenerator::from_init(config.gemini_adapter());
    let request = WorkoutRequest::new(
        args.fitness_level.as_str(),
        args.goal.as_str(),
        args.duration,
        args.equipment.as_str(),
    );

    let result = generator.attempt(request).await;

    match args.format {
        OutputFormat::Plain => println!("{}", result.plan),
        OutputFormat::Markdown => print!("{}", result.to_markdown()),
    }

    if args.pdf {
        let exporter = PdfExporter::new(&config.output_dir);
        match exporter.export_at(&result, Local::now()) {
            Ok(path) => info!(path = %path.display(), "PDF written"),
            Err(err) => error!(error = %err, "PDF export failed"),
        }
    }

    Ok(())
}
