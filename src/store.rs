//! Template store for managing `.toml` templates.
//!
//! A store is a single directory holding one `<name>.toml` file per template.
//! Built-in templates are seeded into it on first use and can be reset to
//! their canonical body at any time.

use crate::constants::{ALL_TEMPLATES, DEFAULT_TEMPLATE_DIR, TEMPLATE_EXTENSION};
use crate::defaults::{default_template, DEFAULT_TEMPLATES};
use crate::error::{Error, Result};
use crate::ioutils::read_file;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Manages the local template store.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    /// Root directory for the template store.
    store_dir: PathBuf,
}

impl TemplateStore {
    /// Creates a TemplateStore at `~/.uv_templates`.
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self::with_dir(home_dir.join(DEFAULT_TEMPLATE_DIR)))
    }

    /// Creates a TemplateStore with a custom directory.
    pub fn with_dir(store_dir: PathBuf) -> Self {
        Self { store_dir }
    }

    /// Creates a store rooted at `store_dir`, or at the default location when
    /// `None`, and makes sure it is seeded.
    pub fn open(store_dir: Option<PathBuf>) -> Result<Self> {
        let store = match store_dir {
            Some(dir) => Self::with_dir(dir),
            None => Self::new()?,
        };
        store.ensure()?;
        Ok(store)
    }

    /// Returns the path to the store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Creates the store directory if needed and writes every built-in
    /// template whose file is missing. Existing files are never touched.
    pub fn ensure(&self) -> Result<()> {
        self.ensure_store_dir()?;
        for (name, body) in DEFAULT_TEMPLATES {
            let path = self.template_path(name);
            if !path.exists() {
                fs::write(&path, body)?;
                debug!("Seeded default template '{}' at {}", name, path.display());
            }
        }
        Ok(())
    }

    fn ensure_store_dir(&self) -> Result<()> {
        if !self.store_dir.exists() {
            fs::create_dir_all(&self.store_dir).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create store directory '{}': {}",
                    self.store_dir.display(),
                    e
                )
            })?;
            debug!("Created template store at: {}", self.store_dir.display());
        }
        Ok(())
    }

    /// Returns the path to a template's file.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.store_dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    /// Checks if a template file exists.
    pub fn contains(&self, name: &str) -> bool {
        self.template_path(name).is_file()
    }

    /// Lists the names of all templates in the store, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.store_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.store_dir)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().map(|e| e != TEMPLATE_EXTENSION).unwrap_or(true)
            {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => debug!("Skipping non UTF-8 template file '{}'", path.display()),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Returns the literal text of a template.
    pub fn read(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        if !self.contains(name) {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
                available: self.list()?,
            });
        }
        read_file(self.template_path(name))
    }

    /// Creates or overwrites a template. The content is stored as given.
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        validate_name(name)?;
        self.ensure_store_dir()?;
        let path = self.template_path(name);
        fs::write(&path, content)?;
        info!("Wrote template '{}' to {}", name, path.display());
        Ok(())
    }

    /// Overwrites a built-in template, or every built-in template when `name`
    /// is `all`, with its canonical body. Returns the names that were reset.
    pub fn reset(&self, name: &str) -> Result<Vec<String>> {
        self.ensure_store_dir()?;

        let targets: Vec<(&str, &str)> = if name == ALL_TEMPLATES {
            DEFAULT_TEMPLATES.to_vec()
        } else {
            let body = default_template(name)
                .ok_or_else(|| Error::UnknownDefaultTemplate { name: name.to_string() })?;
            vec![(name, body)]
        };

        let mut reset = Vec::with_capacity(targets.len());
        for (template, body) in targets {
            fs::write(self.template_path(template), body)?;
            info!("Reset template '{}' to its default content", template);
            reset.push(template.to_string());
        }
        Ok(reset)
    }
}

/// A name must map to exactly one file directly inside the store.
fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || Path::new(name).components().count() != 1;
    if invalid {
        return Err(Error::InvalidTemplateName { name: name.to_string() });
    }
    Ok(())
}
