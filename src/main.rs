use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textgrab::copy::{copy_files_content, CopierConfig};
use textgrab::errors::GrabError;
use textgrab::logger::initialize_logger;
use textgrab::prompt::prompt_template_choice;
use textgrab::templates::{init_config, set_template, template_names, TEMPLATES};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    /// Copy matching file contents to the clipboard
    Copy(CopyArgs),
    /// Write a fresh project config, optionally from a template
    Init(InitArgs),
    /// Change the template of an existing project config
    SetTemplate(SetTemplateArgs),
    /// List the built-in templates
    Templates,
}

#[derive(Parser, Debug, Clone)]
struct CopyArgs {
    #[arg(short, long, help = "Project root (defaults to the current directory)")]
    root: Option<PathBuf>,
    #[arg(short = 's', long, default_value = "false")]
    no_stats: bool,
}

#[derive(Parser, Debug, Clone)]
struct InitArgs {
    #[arg(short, long, help = "Project root (defaults to the current directory)")]
    root: Option<PathBuf>,
    #[arg(short, long, help = "Template name, or 'none'")]
    template: Option<String>,
}

#[derive(Parser, Debug, Clone)]
struct SetTemplateArgs {
    #[arg(short, long, help = "Project root (defaults to the current directory)")]
    root: Option<PathBuf>,
    #[arg(short, long, help = "Template name, or 'none'")]
    template: Option<String>,
}

fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf, GrabError> {
    let root = match flag {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    std::fs::canonicalize(&root).map_err(|e| {
        GrabError::ConfigError(format!("No project root at {}: {}", root.display(), e))
    })
}

async fn choose_template(flag: Option<String>) -> Result<String, GrabError> {
    if let Some(name) = flag {
        return Ok(name);
    }
    prompt_template_choice()
        .await?
        .ok_or_else(|| GrabError::MissingInput("no template chosen".to_owned()))
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let outcome = match cli_args.cmd {
        SubCommands::Copy(args) => run_copy(args).await,
        SubCommands::Init(args) => run_init(args).await,
        SubCommands::SetTemplate(args) => run_set_template(args).await,
        SubCommands::Templates => {
            for name in template_names() {
                if let Some(template) = TEMPLATES.get(name) {
                    println!("{:<14} {}", name, template.extensions.join(", "));
                }
            }
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_copy(args: CopyArgs) -> Result<(), GrabError> {
    let root = resolve_root(args.root)?;
    copy_files_content(CopierConfig {
        root,
        no_stats: args.no_stats,
    })
    .await
}

async fn run_init(args: InitArgs) -> Result<(), GrabError> {
    let root = resolve_root(args.root)?;
    let choice = choose_template(args.template).await?;
    init_config(&root, Some(&choice)).await
}

async fn run_set_template(args: SetTemplateArgs) -> Result<(), GrabError> {
    let root = resolve_root(args.root)?;
    let choice = choose_template(args.template).await?;
    set_template(&root, &choice).await
}
