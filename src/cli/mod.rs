pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, print_help, Cli, Commands, CreateArgs, RestoreArgs,
    ShowArgs, TemplateArgs,
};
pub use runner::run;
