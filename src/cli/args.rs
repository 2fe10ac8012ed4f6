use crate::constants::{
    exit_codes, verbosity, ALL_TEMPLATES, DEFAULT_BOOTSTRAP_PROGRAM, DEFAULT_TEMPLATE,
};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Create uv projects with custom templates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory containing templates (defaults to `~/.uv_templates`).
    #[arg(long = "template-dir", value_name = "DIR", global = true)]
    pub template_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project.
    Create(CreateArgs),

    /// List available templates.
    #[command(visible_alias = "ls")]
    List,

    /// Show template content.
    Show(ShowArgs),

    /// Create a custom template from a file.
    Template(TemplateArgs),

    /// Restore built-in templates to their default content.
    Restore(RestoreArgs),
}

/// Arguments for the create command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the project.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template to use.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Target directory for the project (defaults to `./<PROJECT_NAME>`).
    #[arg(long = "target-dir", value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Author name (defaults to `$USER`).
    #[arg(long = "author-name", value_name = "NAME")]
    pub author_name: Option<String>,

    /// Author email (defaults to `<author.name>@example.com`).
    #[arg(long = "author-email", value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Program used to bootstrap the project, run as `<PROGRAM> init <DIR>`.
    #[arg(long = "uv", value_name = "PROGRAM", default_value = DEFAULT_BOOTSTRAP_PROGRAM)]
    pub uv: String,

    /// Fail on placeholders other than `{project_name}`, `{author_name}`
    /// and `{author_email}` instead of leaving them as-is.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the show command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Name of the template to show.
    #[arg(value_name = "TEMPLATE_NAME")]
    pub template_name: String,
}

/// Arguments for the template command.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Name of the template.
    #[arg(value_name = "TEMPLATE_NAME")]
    pub template_name: String,

    /// Path to the template TOML file.
    #[arg(value_name = "TEMPLATE_FILE")]
    pub template_file: PathBuf,
}

/// Arguments for the restore command.
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Name of the template to restore, or `all`.
    #[arg(value_name = "TEMPLATE_NAME", default_value = ALL_TEMPLATES)]
    pub template_name: String,
}

/// Parse command line arguments.
///
/// # Exits
/// * With status code 1 and the usage help on an unknown sub-command
/// * With clap's default error handling for other argument errors
pub fn get_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            eprintln!("{}", e.render());
            print_help();
            std::process::exit(exit_codes::FAILURE);
        }
        Err(e) => e.exit(),
    }
}

/// Prints the top-level usage help to stdout.
pub fn print_help() {
    let mut command = Cli::command().help_template(HELP_TEMPLATE);
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
