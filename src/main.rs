mod input;
mod logging;
mod model;
mod pipeline;
mod questions;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::answers::{load_answers_file, parse_answer_list};
use crate::input::prompt::collect_responses;
use crate::input::{AnswersSource, InputError, ResponseSet};
use crate::model::scale::ScaleDef;
use crate::pipeline::recommend::run_recommend;
use crate::pipeline::report::{ReportInput, render_json, render_text, write_reports};
use crate::pipeline::score::run_scoring;
use crate::questions::{Polarity, Questionnaire};

#[derive(Debug, Parser)]
#[command(
    name = "humility-scale",
    version,
    about = "Likert-scale intellectual humility self-assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ask the ten questions interactively and score the answers.
    Run {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Score answers given on the command line or read from a file.
    Score {
        /// Comma or whitespace separated answers, e.g. "3,4,2,5,1,3,4,4,2,3".
        #[arg(
            long,
            value_name = "LIST",
            required_unless_present = "answers_file",
            conflicts_with = "answers_file"
        )]
        answers: Option<String>,
        /// File holding the answers, separated by commas, spaces or newlines.
        #[arg(long, value_name = "PATH")]
        answers_file: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the questionnaire and exit.
    Questions,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Report format printed to stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Directory to write assessment.txt and summary.json into.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Map the achievable totals onto the full 1-10 range instead of
    /// dividing by the theoretical maximum.
    #[arg(long)]
    rebased: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let questions = Questionnaire::builtin();

    match cli.command {
        Commands::Run { output } => {
            let scale = resolve_scale(output.rebased);
            print_intro(&questions);
            let mut reader = io::stdin().lock();
            let mut writer = io::stdout().lock();
            let responses = collect_responses(&questions, &scale, &mut reader, &mut writer)?;
            writeln!(writer)?;
            drop(writer);
            finish(
                &responses,
                &questions,
                &scale,
                AnswersSource::Interactive,
                &output,
            )
        }
        Commands::Score {
            answers,
            answers_file,
            output,
        } => {
            let scale = resolve_scale(output.rebased);
            let (responses, source) = if let Some(list) = answers {
                (
                    parse_answer_list(&list, &questions, &scale)?,
                    AnswersSource::Inline,
                )
            } else if let Some(path) = answers_file {
                (
                    load_answers_file(&path, &questions, &scale)?,
                    AnswersSource::File(path),
                )
            } else {
                return Err(InputError::MissingInput(
                    "provide --answers or --answers-file".to_string(),
                )
                .into());
            };
            finish(&responses, &questions, &scale, source, &output)
        }
        Commands::Questions => {
            print_questions(&questions, &ScaleDef::direct_v1());
            Ok(())
        }
    }
}

fn resolve_scale(rebased: bool) -> ScaleDef {
    if rebased {
        ScaleDef::rebased_v1()
    } else {
        ScaleDef::direct_v1()
    }
}

fn finish(
    responses: &ResponseSet,
    questions: &Questionnaire,
    scale: &ScaleDef,
    source: AnswersSource,
    output: &OutputArgs,
) -> Result<(), AppError> {
    tracing::info!(
        "scoring {} answers: source={}, scale={}",
        responses.len(),
        source,
        scale.mode.name()
    );

    let outcome = run_scoring(responses, questions, scale);
    let recommendation = run_recommend(outcome.score);

    let input = ReportInput {
        outcome: &outcome,
        recommendation: &recommendation,
        scale,
        questions,
        answers_source: source.to_string(),
        tool_name: "humility-scale".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    match output.format {
        OutputFormat::Text => print!("{}", render_text(&input)),
        OutputFormat::Json => println!("{}", render_json(&input)?),
    }

    if let Some(dir) = &output.out {
        write_reports(&input, dir)?;
    }

    Ok(())
}

fn print_intro(questions: &Questionnaire) {
    println!("Intellectual Humility Assessment");
    println!(
        "{} quick questions to gauge how intellectually humble you are.",
        questions.len()
    );
    println!("Answer honestly for the most accurate result.");
    println!();
}

fn print_questions(questions: &Questionnaire, scale: &ScaleDef) {
    println!(
        "Answers run {}-{}; the neutral default is {}.",
        scale.response_min, scale.response_max, scale.neutral
    );
    println!();
    for (idx, question) in questions.questions.iter().enumerate() {
        let marker = if question.polarity == Polarity::Reverse {
            "  [reverse-scored]"
        } else {
            ""
        };
        println!("Q{}. {}{}", idx + 1, question.prompt, marker);
    }
}
