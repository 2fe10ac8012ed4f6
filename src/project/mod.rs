//! Project generation: bootstrap a directory, then render the chosen
//! template into its manifest and add the auxiliary files.

pub mod auxiliary;
pub mod guard;

pub use auxiliary::{package_name, Archetype, PreCommitOrigin};
pub use guard::ProjectDirGuard;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrapper, CommandBootstrapper};
use crate::constants::{DEFAULT_TEMPLATE, MANIFEST_FILENAME};
use crate::error::{Error, Result};
use crate::ioutils::{create_dir_all, ensure_absent, write_file};
use crate::renderer::{Bindings, PlaceholderRenderer, TemplateRenderer};
use crate::store::TemplateStore;

/// Per-call inputs of [`ProjectInitializer::create`].
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub project_name: String,
    pub template: String,
    /// Defaults to `<working dir>/<project_name>`.
    pub target_dir: Option<PathBuf>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl CreateOptions {
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self {
            project_name: project_name.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            target_dir: None,
            author_name: None,
            author_email: None,
        }
    }

    pub fn template<S: Into<String>>(mut self, template: S) -> Self {
        self.template = template.into();
        self
    }

    pub fn target_dir<P: Into<PathBuf>>(mut self, target_dir: P) -> Self {
        self.target_dir = Some(target_dir.into());
        self
    }

    pub fn author<S: Into<String>>(mut self, name: S, email: Option<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_email = email;
        self
    }
}

/// Outcome of a successful project creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub name: String,
    pub template: String,
    pub location: PathBuf,
    pub bindings: Bindings,
    pub starter_file: Option<PathBuf>,
    pub pre_commit: PreCommitOrigin,
    pub next_steps: Vec<String>,
}

impl Display for CreatedProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Successfully created project '{}' using template '{}'",
            self.name, self.template
        )?;
        writeln!(f, "Project location: {}", self.location.display())?;
        write!(f, "Next steps:")?;
        for step in &self.next_steps {
            write!(f, "\n   {step}")?;
        }
        Ok(())
    }
}

/// Creates projects from templates held in a [`TemplateStore`].
pub struct ProjectInitializer {
    store: TemplateStore,
    bootstrapper: Box<dyn Bootstrapper>,
    renderer: Box<dyn TemplateRenderer>,
    working_dir: PathBuf,
    pre_commit_source: Option<PathBuf>,
}

impl ProjectInitializer {
    /// Uses `uv init`, the verbatim placeholder policy, the current directory
    /// and the pre-commit file next to the executable.
    pub fn new(store: TemplateStore) -> Result<Self> {
        Ok(Self {
            store,
            bootstrapper: Box::new(CommandBootstrapper::default()),
            renderer: Box::new(PlaceholderRenderer::default()),
            working_dir: std::env::current_dir()?,
            pre_commit_source: auxiliary::default_pre_commit_source(),
        })
    }

    pub fn with_bootstrapper(mut self, bootstrapper: Box<dyn Bootstrapper>) -> Self {
        self.bootstrapper = bootstrapper;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_working_dir<P: Into<PathBuf>>(mut self, working_dir: P) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    pub fn with_pre_commit_source(mut self, source: Option<PathBuf>) -> Self {
        self.pre_commit_source = source;
        self
    }

    /// Creates a new project.
    ///
    /// # Errors
    /// * `AlreadyExists` - the target directory is present; nothing is touched
    /// * `BootstrapFailed` - the bootstrap command failed
    /// * `TemplateNotFound` - the template is not in the store
    /// * `ProjectCreation` - rendering or writing files failed
    ///
    /// Every error after the directory has been created removes it again.
    pub fn create(&self, options: CreateOptions) -> Result<CreatedProject> {
        let CreateOptions { project_name, template, target_dir, author_name, author_email } =
            options;
        let bindings = Bindings::resolve(&project_name, author_name, author_email);
        let explicit_target = target_dir.is_some();
        let project_dir =
            ensure_absent(target_dir.unwrap_or_else(|| self.working_dir.join(&project_name)))?;

        create_dir_all(&project_dir)?;
        let guard = ProjectDirGuard::new(&project_dir);
        log::info!("Created project directory {}", project_dir.display());

        self.bootstrapper.bootstrap(&project_dir)?;
        log::info!("Bootstrapped with `{}`", self.bootstrapper.describe(&project_dir));

        let body = self.store.read(&template)?;

        let (starter_file, pre_commit) = self
            .populate(&project_dir, &template, &body, &bindings)
            .map_err(|e| Error::ProjectCreation {
                project: project_name.clone(),
                source: Box::new(e),
            })?;

        guard.disarm();

        let cd_target =
            if explicit_target { project_dir.display().to_string() } else { project_name.clone() };
        Ok(CreatedProject {
            name: project_name,
            template,
            location: project_dir,
            bindings,
            starter_file,
            pre_commit,
            next_steps: vec![format!("cd {cd_target}"), "uv sync".to_string()],
        })
    }

    /// Writes the manifest, the starter file and the pre-commit configuration.
    fn populate(
        &self,
        project_dir: &Path,
        template: &str,
        body: &str,
        bindings: &Bindings,
    ) -> Result<(Option<PathBuf>, PreCommitOrigin)> {
        let manifest = self.renderer.render(body, bindings)?;
        write_file(&manifest, project_dir.join(MANIFEST_FILENAME))?;
        log::info!("Wrote {MANIFEST_FILENAME} from template '{template}'");

        let starter_file =
            auxiliary::write_starter_file(project_dir, template, &bindings.project_name)?;
        let pre_commit =
            auxiliary::write_pre_commit_config(project_dir, self.pre_commit_source.as_deref())?;
        Ok((starter_file, pre_commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_options_default_to_basic_template() {
        let options = CreateOptions::new("demo");
        assert_eq!(options.template, DEFAULT_TEMPLATE);
        assert!(options.target_dir.is_none());
        assert!(options.author_name.is_none());
    }

    #[test]
    fn report_lists_location_and_next_steps() {
        let created = CreatedProject {
            name: "demo".to_string(),
            template: "basic".to_string(),
            location: PathBuf::from("/work/demo"),
            bindings: Bindings::resolve("demo", Some("A".to_string()), None),
            starter_file: None,
            pre_commit: PreCommitOrigin::Default,
            next_steps: vec!["cd demo".to_string(), "uv sync".to_string()],
        };
        assert_eq!(
            created.to_string(),
            "Successfully created project 'demo' using template 'basic'\n\
             Project location: /work/demo\n\
             Next steps:\n   cd demo\n   uv sync"
        );
    }
}
