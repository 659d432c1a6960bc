pub mod base_commands;
pub mod estimate_cmd;
pub mod interactive_cmd;
pub mod questions_cmd;
pub mod report_format;
