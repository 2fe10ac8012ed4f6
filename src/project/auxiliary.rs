//! Files written next to the manifest: starter modules for the `web` and
//! `cli` archetypes and the pre-commit configuration.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::constants::PRE_COMMIT_FILENAME;
use crate::defaults::{CLI_MAIN, PRE_COMMIT_CONFIG, WEB_MAIN};
use crate::error::Result;
use crate::ioutils::{copy_file, write_file};

/// Template names that come with a starter source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    Web,
    Cli,
}

impl Archetype {
    pub fn from_template(template: &str) -> Option<Self> {
        match template {
            "web" => Some(Archetype::Web),
            "cli" => Some(Archetype::Cli),
            _ => None,
        }
    }

    /// Path of the starter file relative to the project root.
    pub fn starter_path(&self, project_name: &str) -> PathBuf {
        let file_name = match self {
            Archetype::Web => "main.py",
            Archetype::Cli => "cli.py",
        };
        Path::new("src").join(package_name(project_name)).join(file_name)
    }

    pub fn starter_source(&self) -> &'static str {
        match self {
            Archetype::Web => WEB_MAIN,
            Archetype::Cli => CLI_MAIN,
        }
    }
}

impl Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Archetype::Web => "web",
            Archetype::Cli => "cli",
        };
        write!(f, "{s}")
    }
}

/// Importable package name: `My-App.core` becomes `my_app_core`.
pub fn package_name(project_name: &str) -> String {
    project_name.to_lowercase().replace(['-', '.'], "_")
}

/// Writes the archetype's starter file, if the template has one.
pub fn write_starter_file(
    project_dir: &Path,
    template: &str,
    project_name: &str,
) -> Result<Option<PathBuf>> {
    let Some(archetype) = Archetype::from_template(template) else {
        return Ok(None);
    };
    let relative = archetype.starter_path(project_name);
    write_file(archetype.starter_source(), project_dir.join(&relative))?;
    log::info!("Created {archetype} starter file {}", relative.display());
    Ok(Some(relative))
}

/// Where the project's pre-commit configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreCommitOrigin {
    Copied(PathBuf),
    Default,
}

/// `.pre-commit-config.yaml` next to the running executable, if resolvable.
pub fn default_pre_commit_source() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(PRE_COMMIT_FILENAME))
}

/// Copies `source` into the project when it exists, otherwise writes the
/// built-in configuration.
pub fn write_pre_commit_config(
    project_dir: &Path,
    source: Option<&Path>,
) -> Result<PreCommitOrigin> {
    let dest = project_dir.join(PRE_COMMIT_FILENAME);
    match source.filter(|path| path.is_file()) {
        Some(source) => {
            copy_file(source, &dest)?;
            log::info!("Copied {} to the project", source.display());
            Ok(PreCommitOrigin::Copied(source.to_path_buf()))
        }
        None => {
            log::warn!("{PRE_COMMIT_FILENAME} not found, writing the default configuration");
            write_file(PRE_COMMIT_CONFIG, &dest)?;
            Ok(PreCommitOrigin::Default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_special_templates_only() {
        assert_eq!(Archetype::from_template("web"), Some(Archetype::Web));
        assert_eq!(Archetype::from_template("cli"), Some(Archetype::Cli));
        assert_eq!(Archetype::from_template("basic"), None);
        assert_eq!(Archetype::from_template("Web"), None);
    }

    #[test]
    fn package_name_is_importable() {
        assert_eq!(package_name("site"), "site");
        assert_eq!(package_name("My-App.core"), "my_app_core");
    }

    #[test]
    fn starter_paths_live_under_src_package() {
        assert_eq!(Archetype::Web.starter_path("my-site"), Path::new("src/my_site/main.py"));
        assert_eq!(Archetype::Cli.starter_path("tool"), Path::new("src/tool/cli.py"));
    }

    #[test]
    fn non_archetype_template_writes_no_starter() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(write_starter_file(tmp.path(), "basic", "demo").unwrap(), None);
        assert!(!tmp.path().join("src").exists());
    }

    #[test]
    fn cli_starter_is_written_with_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let written = write_starter_file(tmp.path(), "cli", "tool").unwrap().unwrap();
        let content = std::fs::read_to_string(tmp.path().join(written)).unwrap();
        assert_eq!(content, CLI_MAIN);
        assert!(content.contains("import click"));
    }

    #[test]
    fn pre_commit_config_is_copied_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("custom.yaml");
        std::fs::write(&source, "repos: []\n").unwrap();
        let project = tmp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let origin = write_pre_commit_config(&project, Some(&source)).unwrap();
        assert_eq!(origin, PreCommitOrigin::Copied(source));
        assert_eq!(
            std::fs::read_to_string(project.join(PRE_COMMIT_FILENAME)).unwrap(),
            "repos: []\n"
        );
    }

    #[test]
    fn default_pre_commit_config_is_written_when_source_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.yaml");

        let origin = write_pre_commit_config(tmp.path(), Some(&missing)).unwrap();
        assert_eq!(origin, PreCommitOrigin::Default);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(PRE_COMMIT_FILENAME)).unwrap(),
            PRE_COMMIT_CONFIG
        );
    }
}
