//! Built-in file bodies shipped inside the binary.
//!
//! The default template set seeds a fresh store and is the reference used by
//! `restore`. The remaining bodies are written into generated projects.

/// Canonical body of the `basic` template.
pub const BASIC_TEMPLATE: &str = include_str!("basic.toml");

/// Pre-commit configuration used when none is installed next to the executable.
pub const PRE_COMMIT_CONFIG: &str = include_str!("pre-commit-config.yaml");

/// Starter module for the `web` archetype.
pub const WEB_MAIN: &str = include_str!("web_main.py");

/// Starter module for the `cli` archetype.
pub const CLI_MAIN: &str = include_str!("cli.py");

/// Every built-in template as `(name, body)`.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[("basic", BASIC_TEMPLATE)];

/// Returns the canonical body of a built-in template.
pub fn default_template(name: &str) -> Option<&'static str> {
    DEFAULT_TEMPLATES.iter().find(|(default, _)| *default == name).map(|(_, body)| *body)
}
