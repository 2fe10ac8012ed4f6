use crate::{
    bootstrap::CommandBootstrapper,
    cli::args::{Commands, CreateArgs},
    constants::ALL_TEMPLATES,
    error::Result,
    ioutils::read_file,
    project::{CreateOptions, ProjectInitializer},
    renderer::{PlaceholderPolicy, PlaceholderRenderer},
    store::TemplateStore,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Width of the rule printed under a template's name by `show`.
const RULE_WIDTH: usize = 50;

/// Dispatches a parsed sub-command, writing user-facing output to `out`.
///
/// The template store is opened (and seeded) before any command runs.
pub fn run<W: Write>(
    command: Commands,
    template_dir: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let store = TemplateStore::open(template_dir)?;
    log::debug!("Using template store at {}", store.store_dir().display());

    match command {
        Commands::Create(args) => handle_create(store, args, out),
        Commands::List => handle_list(&store, out),
        Commands::Show(args) => handle_show(&store, &args.template_name, out),
        Commands::Template(args) => {
            handle_template(&store, &args.template_name, &args.template_file, out)
        }
        Commands::Restore(args) => handle_restore(&store, &args.template_name, out),
    }
}

fn handle_create<W: Write>(store: TemplateStore, args: CreateArgs, out: &mut W) -> Result<()> {
    let policy = if args.strict { PlaceholderPolicy::Strict } else { PlaceholderPolicy::Verbatim };
    let initializer = ProjectInitializer::new(store)?
        .with_bootstrapper(Box::new(CommandBootstrapper::uv(&args.uv)))
        .with_renderer(Box::new(PlaceholderRenderer::new(policy)));

    let mut options = CreateOptions::new(args.project_name).template(args.template);
    options.target_dir = args.target_dir;
    options.author_name = args.author_name;
    options.author_email = args.author_email;

    let created = initializer.create(options)?;
    writeln!(out, "{created}")?;
    Ok(())
}

fn handle_list<W: Write>(store: &TemplateStore, out: &mut W) -> Result<()> {
    writeln!(out, "Available templates:")?;
    for name in store.list()? {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}

fn handle_show<W: Write>(store: &TemplateStore, name: &str, out: &mut W) -> Result<()> {
    let content = store.read(name)?;
    writeln!(out, "Template: {name}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{content}")?;
    Ok(())
}

fn handle_template<W: Write>(
    store: &TemplateStore,
    name: &str,
    template_file: &Path,
    out: &mut W,
) -> Result<()> {
    let content = read_file(template_file).map_err(|e| {
        anyhow::anyhow!("Failed to read template file '{}': {}", template_file.display(), e)
    })?;
    store.write(name, &content)?;
    writeln!(out, "Created custom template: {name}")?;
    Ok(())
}

fn handle_restore<W: Write>(store: &TemplateStore, name: &str, out: &mut W) -> Result<()> {
    for restored in store.reset(name)? {
        writeln!(out, "Reset template '{restored}' to default content")?;
    }
    if name == ALL_TEMPLATES {
        writeln!(out, "Reset all templates to default content")?;
    }
    Ok(())
}
