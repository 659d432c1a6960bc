use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_questions;
use crate::domain::question::questions;

pub fn questions_command(cmd: Commands) {
    if let Commands::Questions = cmd {
        println!("{}", format_questions(questions()));
    }
}
