//! Interactive session loop.
//!
//! Each input line is one command. A command runs to completion and its
//! result is printed before the next line is read. Rejected input prints a
//! warning and leaves the session untouched.

use crate::render;
use health_core::{Error, HealthSession, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A parsed session command
#[derive(Debug, PartialEq)]
pub enum Command {
    Steps(u64),
    Water(f64),
    Sleep(f64),
    Summary,
    Advise(String),
    Bmi { weight: f64, height: f64 },
    Tip,
    Doctors,
    Appointment { date: String, doctor: String },
    Records(PathBuf),
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  steps N                  add N steps
  water LITERS             add water intake
  sleep HOURS              add sleep
  summary                  show totals against recommendations
  advise SYMPTOMS...       get advice for your symptoms
  bmi WEIGHT_KG HEIGHT_CM  calculate BMI
  tip                      show a health tip
  doctors                  list doctors
  appointment DATE DOCTOR  schedule an appointment (DATE as YYYY-MM-DD)
  records PATH             attach a medical records file
  help                     show this message
  quit                     end the session";

fn parse_number<T: std::str::FromStr>(what: &str, text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a valid {}", text.trim(), what)))
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "steps" => Command::Steps(parse_number("step count", rest)?),
        "water" => Command::Water(parse_number("amount of water", rest)?),
        "sleep" => Command::Sleep(parse_number("number of hours", rest)?),
        "summary" => Command::Summary,
        "advise" | "advice" => Command::Advise(rest.to_string()),
        "bmi" => {
            let mut parts = rest.split_whitespace();
            let (Some(weight), Some(height), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(Error::InvalidInput(
                    "usage: bmi WEIGHT_KG HEIGHT_CM".into(),
                ));
            };
            Command::Bmi {
                weight: parse_number("weight", weight)?,
                height: parse_number("height", height)?,
            }
        }
        "tip" => Command::Tip,
        "doctors" => Command::Doctors,
        "appointment" => {
            let (date, doctor) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                Error::InvalidInput("usage: appointment DATE DOCTOR".into())
            })?;
            Command::Appointment {
                date: date.to_string(),
                doctor: doctor.trim().to_string(),
            }
        }
        "records" => Command::Records(PathBuf::from(rest)),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(Error::InvalidInput(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Run a command against the session and return the text to show
pub fn execute(session: &mut HealthSession, command: Command) -> Result<String> {
    let text = match command {
        Command::Steps(n) => render::steps_added(n, session.add_steps(n)?),
        Command::Water(v) => render::water_added(v, session.add_water(v)?),
        Command::Sleep(v) => render::sleep_added(v, session.add_sleep(v)?),
        Command::Summary => {
            render::summary(&session.summarize(), session.accumulator().thresholds())
        }
        Command::Advise(text) => render::advice(&session.advise(&text)?),
        Command::Bmi { weight, height } => render::bmi(&session.calculate_bmi(weight, height)?),
        Command::Tip => render::tip(session.daily_tip()),
        Command::Doctors => render::doctors(session.doctors()),
        Command::Appointment { date, doctor } => {
            render::appointment(session.schedule_appointment(&doctor, &date)?)
        }
        Command::Records(path) => match session.attach_records(&path)? {
            Some(path) => render::records(path),
            None => "No file selected.".to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(text)
}

/// Read commands from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut HealthSession,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", render::banner(session))?;
    writeln!(out, "{}", render::tip(session.daily_tip()))?;
    writeln!(out, "Type 'help' for a list of commands.")?;

    for line in input.lines() {
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", render::warning(e))?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        match execute(session, command) {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(e) => {
                tracing::debug!("Command rejected: {}", e);
                writeln!(out, "{}", render::warning(e))?;
            }
        }
        out.flush()?;
    }

    writeln!(
        out,
        "{}",
        render::summary(&session.summarize(), session.accumulator().thresholds())
    )?;
    Ok(())
}
