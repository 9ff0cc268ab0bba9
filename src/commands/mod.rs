pub mod base_commands;
pub mod compare_cmd;
pub mod estimate_cmd;
pub mod exact_cmd;
pub mod report_format;
pub mod run_cmd;
pub mod summary;
