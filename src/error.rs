use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: directory '{path}' already exists.")]
    AlreadyExists { path: String },

    /// The named template has no file in the store.
    #[error("Template '{name}' not found. Available templates: {}", .available.join(", "))]
    TemplateNotFound { name: String, available: Vec<String> },

    /// When the bootstrap command could not be started or exited with an error.
    #[error("Bootstrap command `{command}` failed: {reason}")]
    BootstrapFailed { command: String, reason: String },

    #[error("Template '{name}' is not a built-in template and cannot be restored.")]
    UnknownDefaultTemplate { name: String },

    #[error("Invalid template name '{name}'.")]
    InvalidTemplateName { name: String },

    #[error("Unknown placeholder '{{{name}}}' in template.")]
    UnknownPlaceholder { name: String },

    /// Any failure after the project directory has been populated by the
    /// bootstrap command. The directory has already been removed.
    #[error("Error creating project '{project}': {source}")]
    ProjectCreation {
        project: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with uv-create's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(exit_codes::FAILURE);
}
