//! create-poetry-app - scaffold a new Python project with Poetry

use anyhow::Result;
use clap::Parser;
use poetry_scaffold_core::CreateArgs;

#[derive(Parser, Debug)]
#[command(name = "create-poetry-app")]
#[command(about = "Create a new Python project using Poetry.")]
#[command(version)]
pub struct Args {
    /// Use default values (skips all prompts except project name and template)
    #[arg(short = 'y')]
    pub yes: bool,

    /// Project name
    #[arg(short = 'p', long = "project-name")]
    pub project_name: Option<String>,

    /// Package name
    #[arg(short = 'n', long = "package-name")]
    pub package_name: Option<String>,

    /// Python version (e.g., 3.12 or ^3.12 or ~3.12)
    #[arg(short = 'v', long = "python-version")]
    pub python_version: Option<String>,

    /// Upper Python version limit (numbers only, e.g., 3.13)
    #[arg(short = 'u', long = "upper-python-version")]
    pub upper_python_version: Option<String>,

    /// Project description
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    /// Author name
    #[arg(short = 'a', long = "author-name")]
    pub author_name: Option<String>,

    /// Author email
    #[arg(short = 'e', long = "author-email")]
    pub author_email: Option<String>,

    /// Virtualenv configuration: set virtualenvs.in-project to true/false
    #[arg(short = 'c', long = "venv-in-project")]
    pub venv_in_project: Option<String>,

    /// Project template (e.g., datascience, ai)
    #[arg(short = 't', long = "template")]
    pub template: Option<String>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            yes: args.yes,
            project_name: args.project_name,
            package_name: args.package_name,
            python_version: args.python_version,
            upper_python_version: args.upper_python_version,
            description: args.description,
            author_name: args.author_name,
            author_email: args.author_email,
            venv_in_project: args.venv_in_project,
            template: args.template,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = poetry_scaffold_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
