/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Built-in templates and generated file bodies.
pub mod defaults;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// The on-disk directory of `.toml` templates.
pub mod store;

/// Placeholder substitution.
pub mod renderer;

/// Runs the external command that initializes a new project.
pub mod bootstrap;

/// Project generation orchestration.
pub mod project;

pub use bootstrap::{Bootstrapper, CommandBootstrapper};
pub use project::{CreateOptions, CreatedProject, ProjectInitializer};
pub use renderer::{Bindings, PlaceholderPolicy, PlaceholderRenderer, TemplateRenderer};
pub use store::TemplateStore;
