use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_progress, format_questions, format_time_projection};
use crate::domain::estimate::EstimationMode;
use crate::domain::question::{QuestionId, questions};
use crate::domain::responses::ResponseSet;
use crate::services::estimate_mapper::MAX_SCORE;
use crate::services::estimation_error::EstimationError;
use crate::services::estimation_yaml::{EstimationYamlError, load_team_parameters_from_yaml_file};
use crate::services::session::EstimationSession;

const HELP: &str = "Commands:
  select <question> <label|value>   answer a question
  mode <story-points|days>          switch the estimation mode
  set <velocity|sprint-length|buffer|hours> <number>
  calculate                         calculate story points or days
  time                              calculate the time estimation
  reset                             clear all answers and results
  status                            show answers, settings and results
  questions                         list the questions
  quit                              leave the session";

#[derive(Error, Debug)]
pub enum InteractiveCommandError {
    #[error("failed to load team parameters: {0}")]
    TeamConfig(#[from] EstimationYamlError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Continue(String),
    Quit,
}

pub fn interactive_command(cmd: Commands) -> Result<(), InteractiveCommandError> {
    if let Commands::Interactive { team_config, mode } = cmd {
        let team = match team_config {
            Some(path) => load_team_parameters_from_yaml_file(path)?,
            None => Default::default(),
        };
        let session = EstimationSession::new()
            .with_mode(mode.unwrap_or_default())
            .with_team_parameters(team);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(stdin.lock(), &mut stdout, session)?;
    }
    Ok(())
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    mut session: EstimationSession,
) -> io::Result<EstimationSession> {
    writeln!(output, "Agile Estimation Tool (type 'help' for commands)")?;
    writeln!(output, "{}", format_progress(session.responses()))?;

    for line in input.lines() {
        match handle_line(&mut session, &line?) {
            Reply::Continue(message) if message.is_empty() => {}
            Reply::Continue(message) => writeln!(output, "{message}")?,
            Reply::Quit => break,
        }
    }
    info!(answered = session.responses().answered_count(), "interactive session finished");
    Ok(session)
}

pub fn handle_line(session: &mut EstimationSession, line: &str) -> Reply {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Reply::Continue(String::new());
    }
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let message = match command.as_str() {
        "select" | "answer" => select(session, &args),
        "mode" => set_mode(session, &args),
        "set" => set_parameter(session, &args),
        "calculate" | "calc" => calculate(session),
        "time" => time(session),
        "reset" => {
            session.reset();
            format!("Form reset. {}", format_progress(session.responses()))
        }
        "status" => status(session),
        "questions" => format_questions(questions()),
        "help" => HELP.to_string(),
        "quit" | "exit" => return Reply::Quit,
        other => format!("Unknown command: {other} (type 'help')"),
    };
    Reply::Continue(message)
}

fn select(session: &mut EstimationSession, args: &[&str]) -> String {
    let [question, answer @ ..] = args else {
        return "Usage: select <question> <label|value>".to_string();
    };
    if answer.is_empty() {
        return "Usage: select <question> <label|value>".to_string();
    }
    let question_id: QuestionId = match question.parse() {
        Ok(id) => id,
        Err(e) => return format!("{e}"),
    };
    let answer = answer.join(" ");
    let definition = question_id.question();
    let value = match answer.parse::<u8>() {
        Ok(value) => value,
        Err(_) => match definition.option_by_label(&answer) {
            Some(option) => option.value,
            None => return format!("'{answer}' is not an option of question {question_id}"),
        },
    };

    match session.select_option(question_id, value) {
        Ok(()) => {
            let label = session
                .responses()
                .selected_option(question_id)
                .map_or("", |option| option.label);
            format!(
                "{}: {} ({}). {}",
                definition.title,
                label,
                value,
                format_progress(session.responses())
            )
        }
        Err(e) => format!("{e}"),
    }
}

fn set_mode(session: &mut EstimationSession, args: &[&str]) -> String {
    let [mode] = args else {
        return "Usage: mode <story-points|days>".to_string();
    };
    match mode.parse::<EstimationMode>() {
        Ok(mode) => {
            session.set_mode(mode);
            format!("Mode: {}", mode.unit())
        }
        Err(e) => format!("{e}"),
    }
}

fn set_parameter(session: &mut EstimationSession, args: &[&str]) -> String {
    let [name, value] = args else {
        return "Usage: set <velocity|sprint-length|buffer|hours> <number>".to_string();
    };
    let Ok(value) = value.parse::<f64>() else {
        return format!("'{value}' is not a number");
    };
    let team = session.team_parameters_mut();
    let (label, field) = match name.to_ascii_lowercase().as_str() {
        "velocity" | "team-velocity" => ("Team velocity", &mut team.team_velocity),
        "sprint" | "sprint-length" => ("Sprint length", &mut team.sprint_length),
        "buffer" | "buffer-percentage" => ("Buffer percentage", &mut team.buffer_percentage),
        "hours" | "working-hours-per-day" => {
            ("Working hours per day", &mut team.working_hours_per_day)
        }
        _ => return format!("Unknown parameter: {name}"),
    };
    *field = value;
    format!("{label} set to {value}")
}

fn calculate(session: &mut EstimationSession) -> String {
    match session.calculate_estimate() {
        Ok(estimate) => format!(
            "{}: {}\nTotal Score: {}/{} ({})",
            session.mode().unit(),
            estimate,
            session.total_score(),
            MAX_SCORE,
            session.severity()
        ),
        Err(EstimationError::IncompleteResponses { .. }) => format!(
            "Please answer all questions before calculating. {}",
            format_progress(session.responses())
        ),
        Err(e) => format!("{e}"),
    }
}

fn time(session: &mut EstimationSession) -> String {
    match session.calculate_time_projection() {
        Ok(projection) => format_time_projection(&projection),
        Err(EstimationError::NoEstimateYet) => {
            "Please calculate story points or days first.".to_string()
        }
        Err(e) => format!("Cannot calculate time estimation: {e}"),
    }
}

fn status(session: &EstimationSession) -> String {
    let mut lines = vec![
        format!("Mode: {}", session.mode().unit()),
        format_progress(session.responses()),
    ];
    lines.extend(answer_lines(session.responses()));

    let team = session.team_parameters();
    lines.push(format!(
        "Team: velocity {} per {} days, buffer {}%, {} hours per day",
        team.team_velocity, team.sprint_length, team.buffer_percentage, team.working_hours_per_day
    ));
    match session.current_estimate() {
        Some(estimate) => lines.push(format!("Estimate: {estimate} {}", session.mode().unit())),
        None => lines.push("Estimate: not calculated".to_string()),
    }
    if let Some(projection) = session.time_projection() {
        lines.push(format_time_projection(projection));
    }
    lines.join("\n")
}

fn answer_lines(responses: &ResponseSet) -> Vec<String> {
    responses
        .iter()
        .map(|(id, _)| match responses.selected_option(id) {
            Some(option) => format!("  {}: {} ({})", id.question().title, option.label, option.value),
            None => format!("  {}: -", id.question().title),
        })
        .collect()
}
