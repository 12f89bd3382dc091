//! Command-line front end for the compensation estimator.
//!
//! Collects the survey form's inputs as flags, loads the trained artifact
//! pair, and prints the reversed-log compensation estimate. The `choices`
//! subcommand lists every field's enumerated options so an external form
//! shell can render its widgets from the same schema the encoder uses.

use std::path::PathBuf;
use std::process;

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use salarycast::survey::{
    CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend,
    SurveyResponse,
};
use salarycast::SalaryPredictor;

/// Survey-driven yearly compensation estimator.
#[derive(Parser)]
#[command(name = "salarycast", version, about = "Survey-driven yearly compensation estimator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate yearly compensation from survey answers
    Predict(PredictArgs),

    /// List every survey field and its enumerated choices
    Choices {
        /// Emit the choice lists as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PredictArgs {
    /// Path to the trained model weights artifact
    #[arg(long, default_value = "model.json")]
    model: PathBuf,

    /// Path to the trained feature-column schema artifact
    #[arg(long, default_value = "feature_cols.json")]
    columns: PathBuf,

    /// Years of coding experience (0-50)
    #[arg(long, default_value_t = 5.0)]
    years_coding: f32,

    /// Years of machine-learning experience (0-2)
    #[arg(long, default_value_t = 2.0)]
    years_ml: f32,

    /// Money spent on ML/cloud tooling in the last five years, USD (0-100000)
    #[arg(long, default_value_t = 1000)]
    money_spent: u32,

    /// Country of residence (exact survey label)
    #[arg(long, default_value_t = Country::France)]
    country: Country,

    /// Current role (exact survey label)
    #[arg(long, default_value_t = JobTitle::DataScientist)]
    job_title: JobTitle,

    /// Industry of the current employer (exact survey label)
    #[arg(long, default_value_t = Industry::OnlineServices)]
    industry: Industry,

    /// Employer's ML maturity (exact survey label)
    #[arg(long, default_value_t = MlMaturity::RecentlyAdopted)]
    ml_maturity: MlMaturity,

    /// Emit the estimate as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Predict(args) => cmd_predict(&args),
        Commands::Choices { json } => cmd_choices(json),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn cmd_predict(args: &PredictArgs) -> Result<()> {
    ensure!(
        (0.0..=50.0).contains(&args.years_coding),
        "--years-coding must be between 0 and 50"
    );
    ensure!(
        (0.0..=2.0).contains(&args.years_ml),
        "--years-ml must be between 0 and 2"
    );
    ensure!(
        args.money_spent <= 100_000,
        "--money-spent must be between 0 and 100000"
    );

    let predictor = SalaryPredictor::load(&args.model, &args.columns)
        .context("required model artifacts could not be loaded")?;

    let response = SurveyResponse {
        coding_experience: CodingExperience::from_years(args.years_coding),
        ml_experience: MlExperience::from_years(args.years_ml),
        ml_spend: MlSpend::from_dollars(args.money_spent),
        country: args.country,
        job_title: args.job_title,
        industry: args.industry,
        ml_maturity: args.ml_maturity,
    };

    let estimate = predictor.predict(&response);
    tracing::debug!(estimate, "scored survey response");

    if args.json {
        let payload = json!({
            "estimate_usd": estimate,
            "country": response.country.label(),
            "job_title": response.job_title.label(),
            "industry": response.industry.label(),
        });
        println!("{payload}");
    } else {
        println!("Estimated yearly compensation: {}", format_usd(estimate));
    }
    Ok(())
}

fn cmd_choices(as_json: bool) -> Result<()> {
    let fields: Vec<(&str, Vec<&str>)> = vec![
        (
            "coding-experience",
            CodingExperience::ALL.iter().map(|c| c.label()).collect(),
        ),
        (
            "ml-experience",
            MlExperience::ALL.iter().map(|c| c.label()).collect(),
        ),
        ("ml-spend", MlSpend::ALL.iter().map(|c| c.label()).collect()),
        ("country", Country::ALL.iter().map(|c| c.label()).collect()),
        ("job-title", JobTitle::ALL.iter().map(|c| c.label()).collect()),
        ("industry", Industry::ALL.iter().map(|c| c.label()).collect()),
        (
            "ml-maturity",
            MlMaturity::ALL.iter().map(|c| c.label()).collect(),
        ),
    ];

    if as_json {
        let payload: serde_json::Map<String, serde_json::Value> = fields
            .into_iter()
            .map(|(name, choices)| (name.to_string(), json!(choices)))
            .collect();
        println!("{}", serde_json::Value::Object(payload));
    } else {
        for (name, choices) in fields {
            println!("{name}:");
            for choice in choices {
                println!("  - {choice}");
            }
        }
    }
    Ok(())
}

/// Format a dollar amount with thousands separators and two decimals.
fn format_usd(amount: f32) -> String {
    let negative = amount < 0.0;
    let cents = (f64::from(amount.abs()) * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{rem:02}")
}
