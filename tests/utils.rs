#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use walkdir::WalkDir;

use uv_create::error::{Error, Result};
use uv_create::{Bootstrapper, ProjectInitializer, TemplateStore};

/// Stands in for `uv init`: writes a few files into the target directory, then
/// succeeds or fails.
pub struct FakeBootstrapper {
    files: Vec<(&'static str, &'static str)>,
    fail: bool,
    calls: Rc<Cell<usize>>,
}

impl FakeBootstrapper {
    pub fn succeeding() -> Self {
        Self { files: Vec::new(), fail: false, calls: Rc::new(Cell::new(0)) }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::succeeding() }
    }

    pub fn writing(mut self, relative: &'static str, content: &'static str) -> Self {
        self.files.push((relative, content));
        self
    }

    /// Shared counter of `bootstrap` invocations.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl Bootstrapper for FakeBootstrapper {
    fn bootstrap(&self, target_dir: &Path) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        for (relative, content) in &self.files {
            let path = target_dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        if self.fail {
            return Err(Error::BootstrapFailed {
                command: self.describe(target_dir),
                reason: "exited with exit status: 2".to_string(),
            });
        }
        Ok(())
    }

    fn describe(&self, target_dir: &Path) -> String {
        format!("fake init {}", target_dir.display())
    }
}

/// A scratch workspace with a seeded template store and a working directory.
pub struct Workspace {
    pub root: tempfile::TempDir,
    pub store: TemplateStore,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let store = TemplateStore::open(Some(root.path().join("templates"))).unwrap();
        fs::create_dir_all(root.path().join("work")).unwrap();
        Self { root, store }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Initializer rooted in this workspace, with no pre-commit file installed.
    pub fn initializer(&self, bootstrapper: FakeBootstrapper) -> ProjectInitializer {
        ProjectInitializer::new(self.store.clone())
            .unwrap()
            .with_bootstrapper(Box::new(bootstrapper))
            .with_working_dir(self.work_dir())
            .with_pre_commit_source(Some(self.root.path().join("missing-pre-commit.yaml")))
    }
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints which files differ between a generated project and the expected tree.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    for file in actual_files.difference(&expected_files) {
        println!("  + {}", file.display());
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {}", file.display());
    }
    for file in actual_files.intersection(&expected_files) {
        let left = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let right = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if left != right {
            println!("  ~ {}\n--- actual:\n{left}\n--- expected:\n{right}", file.display());
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing a diff otherwise.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
