use crate::constants::{author, placeholders};
use crate::error::{Error, Result};
use log::warn;
use regex::{Captures, Regex};

/// A placeholder is a bare identifier inside single braces.
pub const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z_][A-Za-z0-9_]*)\}";

/// How placeholders outside the known bindings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Leave unknown placeholders in the output as literal text.
    #[default]
    Verbatim,
    /// Fail on the first unknown placeholder.
    Strict,
}

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub project_name: String,
    pub author_name: String,
    pub author_email: String,
}

impl Bindings {
    /// Builds bindings, deriving the author name from the environment and the
    /// email from the author name when they are missing or blank.
    pub fn resolve(
        project_name: &str,
        author_name: Option<String>,
        author_email: Option<String>,
    ) -> Self {
        let author_name =
            author_name.filter(|name| !name.trim().is_empty()).unwrap_or_else(default_author_name);
        let author_email = author_email
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| derive_author_email(&author_name));
        Self { project_name: project_name.to_string(), author_name, author_email }
    }

    /// Looks up the value bound to a placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            placeholders::PROJECT_NAME => Some(&self.project_name),
            placeholders::AUTHOR_NAME => Some(&self.author_name),
            placeholders::AUTHOR_EMAIL => Some(&self.author_email),
            _ => None,
        }
    }
}

/// Author name from `USER`/`USERNAME`, falling back to a fixed placeholder name.
pub fn default_author_name() -> String {
    author::NAME_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| author::FALLBACK_NAME.to_string())
}

/// `Jane Doe` becomes `jane.doe@example.com`.
pub fn derive_author_email(author_name: &str) -> String {
    format!("{}@{}", author_name.to_lowercase().replace(' ', "."), author::EMAIL_DOMAIN)
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String>;
}

/// Replaces `{identifier}` markers with their bound values.
///
/// Only bare identifiers inside single braces are placeholders; any other
/// brace text, such as a TOML inline table, passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderer {
    policy: PlaceholderPolicy,
}

impl PlaceholderRenderer {
    pub fn new(policy: PlaceholderPolicy) -> Self {
        Self { policy }
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        let regex = Regex::new(PLACEHOLDER_PATTERN)
            .map_err(|e| anyhow::anyhow!("Invalid placeholder pattern: {e}"))?;

        if self.policy == PlaceholderPolicy::Strict {
            if let Some(unknown) =
                regex.captures_iter(template).find(|caps| bindings.get(&caps[1]).is_none())
            {
                return Err(Error::UnknownPlaceholder { name: unknown[1].to_string() });
            }
        }

        let rendered = regex.replace_all(template, |caps: &Captures| match bindings.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => {
                warn!("Leaving unknown placeholder '{}' as literal text", &caps[0]);
                caps[0].to_string()
            }
        });
        Ok(rendered.into_owned())
    }
}
