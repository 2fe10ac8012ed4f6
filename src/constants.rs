//! Constants used throughout uv-create

/// Extension of every file in the template store
pub const TEMPLATE_EXTENSION: &str = "toml";

/// Store directory name, relative to the user's home directory
pub const DEFAULT_TEMPLATE_DIR: &str = ".uv_templates";

/// Name of the template used when `create` is not given one
pub const DEFAULT_TEMPLATE: &str = "basic";

/// Restore target meaning every built-in template
pub const ALL_TEMPLATES: &str = "all";

/// Manifest written into every new project
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Pre-commit configuration file name, both next to the executable and in the project
pub const PRE_COMMIT_FILENAME: &str = ".pre-commit-config.yaml";

/// Default bootstrap program and its sub-command
pub const DEFAULT_BOOTSTRAP_PROGRAM: &str = "uv";
pub const BOOTSTRAP_SUBCOMMAND: &str = "init";

/// Author defaults
pub mod author {
    /// Environment variables consulted, in order, for the author name
    pub const NAME_ENV_VARS: &[&str] = &["USER", "USERNAME"];
    pub const FALLBACK_NAME: &str = "Your Name";
    pub const EMAIL_DOMAIN: &str = "example.com";
}

/// Placeholder names recognised by the renderer
pub mod placeholders {
    pub const PROJECT_NAME: &str = "project_name";
    pub const AUTHOR_NAME: &str = "author_name";
    pub const AUTHOR_EMAIL: &str = "author_email";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
