mod render;
mod repl;

use clap::{Parser, Subcommand};
use health_core::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "healthlog")]
#[command(about = "Personal health logging tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive logging session (default)
    Session,

    /// Add amounts and show totals against recommendations
    Summary {
        /// Steps to add (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        steps: Vec<u64>,

        /// Liters of water to add (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        water: Vec<f64>,

        /// Hours of sleep to add (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        sleep: Vec<f64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get advice for a description of your symptoms
    Advise {
        #[arg(required = true, num_args = 1..)]
        symptoms: Vec<String>,
    },

    /// Calculate body mass index
    Bmi {
        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Show a random health tip
    Tip {
        /// Seed for a reproducible tip
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    health_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render::warning(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Session) | None => cmd_session(&config),
        Some(Commands::Summary {
            steps,
            water,
            sleep,
            json,
        }) => cmd_summary(&config, steps, water, sleep, json),
        Some(Commands::Advise { symptoms }) => cmd_advise(&config, &symptoms.join(" ")),
        Some(Commands::Bmi { weight, height }) => cmd_bmi(&config, weight, height),
        Some(Commands::Tip { seed }) => cmd_tip(&config, seed),
    }
}

fn cmd_session(config: &Config) -> Result<()> {
    let mut session = HealthSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}

fn cmd_summary(
    config: &Config,
    steps: Vec<u64>,
    water: Vec<f64>,
    sleep: Vec<f64>,
    json: bool,
) -> Result<()> {
    let mut session = HealthSession::new(config);

    for n in steps {
        session.add_steps(n)?;
    }
    for v in water {
        session.add_water(v)?;
    }
    for v in sleep {
        session.add_sleep(v)?;
    }

    let summary = session.summarize();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}",
            render::summary(&summary, session.accumulator().thresholds())
        );
    }
    Ok(())
}

fn cmd_advise(config: &Config, symptoms: &str) -> Result<()> {
    let session = HealthSession::new(config);
    let advice = session.advise(symptoms)?;
    println!("{}", render::advice(&advice));
    Ok(())
}

fn cmd_bmi(config: &Config, weight: f64, height: f64) -> Result<()> {
    let session = HealthSession::new(config);
    let reading = session.calculate_bmi(weight, height)?;
    println!("{}", render::bmi(&reading));
    Ok(())
}

fn cmd_tip(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut tips = config.tips.clone();
    if seed.is_some() {
        tips.seed = seed;
    }
    let mut picker = TipPicker::new(tips.tips, tips.seed);
    println!("{}", render::tip(picker.next_tip()));
    Ok(())
}
