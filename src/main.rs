//! Polyhedra - rotating 3D and 4D wireframes in a terminal or a window

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use polyhedra::app::run_window;
use polyhedra::catalog::{build_catalog, export_builtin, listing, DirectoryPolicy};
use polyhedra::config::AppConfig;
use polyhedra::systems::TerminalSystem;
use polyhedra::AppError;

#[derive(Debug, Parser)]
#[command(name = "polyhedra")]
#[command(about = "Rotating 3D and 4D polyhedra wireframes", long_about = None)]
struct Cli {
    /// Directory holding default.toml and user.toml
    #[arg(long, default_value = "config")]
    config: PathBuf,

    /// Load shape files from this directory
    #[arg(long)]
    shapes: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Draw with characters in this terminal (default)
    Terminal,
    /// Draw with the GPU in a window
    Window,
    /// Write every built-in shape as a shape file
    Export {
        dir: PathBuf,
    },
    /// Print the shape catalog
    List,
}

fn load_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::extract_from(&cli.config)?;
    if let Some(dir) = &cli.shapes {
        config.shapes.directory = Some(dir.clone());
    }
    config.validate()?;
    Ok(config)
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(mode: Mode, config: AppConfig) -> Result<(), AppError> {
    match mode {
        Mode::Terminal => {
            let catalog = build_catalog(&config.shapes, DirectoryPolicy::Append)?;
            let controls = config.controls.terminal();
            let mut terminal = TerminalSystem::new(&config.terminal, controls, catalog)?;
            terminal.run()?;
        }
        Mode::Window => {
            let catalog = build_catalog(&config.shapes, DirectoryPolicy::Replace)?;
            let controls = config.controls.window();
            run_window(config.window, controls, catalog)?;
        }
        Mode::Export { dir } => {
            for path in export_builtin(&dir, &config.shapes.extension)? {
                println!("{}", path.display());
            }
        }
        Mode::List => {
            let catalog = build_catalog(&config.shapes, DirectoryPolicy::Append)?;
            for line in listing(&catalog) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.debug.log_level);

    match run(cli.command.unwrap_or(Mode::Terminal), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
