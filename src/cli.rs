use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::{
    app,
    codec::{self, ActivityRecord},
    constants::FILE_PATHS,
    storage::{self, StorageError},
};

/// Shaded stdout rendering of the five levels, darkest to brightest.
const LEVEL_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

#[derive(Parser, Debug)]
#[command(name = "hatch")]
#[command(about = "Paint a GitHub-style contribution chart in your terminal", long_about = None)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Chart CSV path")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print a saved chart to stdout")]
    Show,

    #[command(about = "Export the chart records")]
    Export {
        #[arg(long, value_enum, help = "Export format")]
        format: ExportFormat,

        #[arg(long, short, help = "Output path")]
        out: Option<PathBuf>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Json,
}

#[derive(Debug, Serialize)]
struct ChartExport {
    schema_version: u32,
    exported_at: DateTime<Utc>,
    records: Vec<ActivityRecord>,
}

fn show_chart(path: &Path) -> Result<(), StorageError> {
    let grid = storage::load_chart(path)?;
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|&level| LEVEL_GLYPHS[(level as usize).min(LEVEL_GLYPHS.len() - 1)])
            .collect();
        println!("{}", line);
    }

    let painted = grid.cells_by_day().filter(|&(_, _, level)| level > 0).count();
    println!("{} of {} days painted", painted, codec::day_count());
    Ok(())
}

fn export_chart(
    path: &Path,
    format: ExportFormat,
    out_path: Option<PathBuf>,
) -> Result<(), String> {
    let grid = storage::load_chart(path).map_err(|e| e.to_string())?;

    let export = ChartExport {
        schema_version: 1,
        exported_at: Utc::now(),
        records: grid
            .cells_by_day()
            .map(|(column, row, level)| {
                ActivityRecord::for_level(codec::day_number(column, row), level)
            })
            .collect(),
    };

    match format {
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&export).map_err(|e| e.to_string())?;
            if let Some(out) = out_path {
                std::fs::write(&out, json).map_err(|e| e.to_string())?;
                println!("Exported to {}", out.display());
            } else {
                println!("{}", json);
            }
        }
    }

    Ok(())
}

fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    match shell {
        "bash" => {
            clap_complete::generate(Shell::Bash, &mut Cli::command(), "hatch", &mut io::stdout());
        }
        "zsh" => {
            clap_complete::generate(Shell::Zsh, &mut Cli::command(), "hatch", &mut io::stdout());
        }
        "fish" => {
            clap_complete::generate(Shell::Fish, &mut Cli::command(), "hatch", &mut io::stdout());
        }
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    }
    Ok(())
}

pub fn run() {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(|| PathBuf::from(FILE_PATHS.chart));

    match cli.command {
        None => {
            if let Err(e) = app::run_ui(path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Show) => {
            if let Err(e) = show_chart(&path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Export { format, out }) => {
            if let Err(e) = export_chart(&path, format, out) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Completions { shell }) => {
            if let Err(e) = print_completions(&shell) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
