use std::path::{Path, PathBuf};

/// Removes a freshly created project directory when dropped, unless disarmed.
///
/// Created right after the directory itself, so every early return and
/// every `?` between creation and success rolls the directory back.
#[derive(Debug)]
pub struct ProjectDirGuard {
    path: PathBuf,
    armed: bool,
}

impl ProjectDirGuard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf(), armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the directory.
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ProjectDirGuard {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => log::debug!("Removed partially created project at {}", self.path.display()),
            Err(e) => log::warn!(
                "Failed to remove partially created project at {}: {e}",
                self.path.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_guard_removes_directory_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("demo");
        std::fs::create_dir_all(project.join("src/demo")).unwrap();
        std::fs::write(project.join("src/demo/__init__.py"), "").unwrap();

        drop(ProjectDirGuard::new(&project));
        assert!(!project.exists());
    }

    #[test]
    fn disarmed_guard_keeps_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("demo");
        std::fs::create_dir_all(&project).unwrap();

        let guard = ProjectDirGuard::new(&project);
        assert_eq!(guard.path(), project);
        guard.disarm();
        assert!(project.is_dir());
    }

    #[test]
    fn guard_tolerates_directory_already_gone() {
        let tmp = tempfile::tempdir().unwrap();
        drop(ProjectDirGuard::new(tmp.path().join("never-created")));
    }
}
