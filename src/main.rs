use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use serde::Serialize;
use tracing::debug;

use fleetdeck::app::column_resize::{ResizeEvent, resize};
use fleetdeck::app::device_limit::plan_limit;
use fleetdeck::app::selection::DeviceSelection;
use fleetdeck::domain::{ColumnAttribute, ColumnHeader, PlanId};
use fleetdeck::error;
use fleetdeck::infra::config::{ConsoleConfig, default_config_path};

/// Runs the device-console table and subscription calculations from the
/// command line and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to $FLEETDECK_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Redistribute width after dragging a column boundary
    Resize {
        /// Measured header cell widths, left to right
        #[arg(long, value_delimiter = ',', required = true)]
        widths: Vec<f64>,
        /// Resizable column names (defaults to one per width but the last)
        #[arg(long, value_delimiter = ',')]
        headers: Vec<String>,
        /// Attribute scope for the named columns
        #[arg(long, default_value = "inventory")]
        scope: String,
        /// Boundary index (column that is dragged)
        #[arg(long)]
        index: usize,
        /// Previous pointer x coordinate
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        /// Current pointer x coordinate
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        /// Overrides the configured minimum width
        #[arg(long)]
        min_width: Option<f64>,
    },
    /// Toggle a row in a selection
    Toggle {
        /// Currently selected rows
        #[arg(long, value_delimiter = ',')]
        selected: Vec<usize>,
        /// Clicked row
        #[arg(long)]
        row: usize,
    },
    /// Settle a requested device limit against a plan
    Limit {
        #[arg(long, default_value = "os")]
        plan: String,
        #[arg(long)]
        requested: u32,
        /// Limit the organization already pays for
        #[arg(long, default_value_t = 0)]
        current: u32,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<ConsoleConfig> {
    match path.or_else(default_config_path) {
        Some(path) => Ok(ConsoleConfig::load_or_default(&path)?),
        None => Ok(ConsoleConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::init_logging();
    error::install_hooks()?;

    let args = Args::parse();
    let config = load_config(args.config)?;
    debug!(?config, "effective config");

    match args.command {
        Command::Resize {
            widths,
            headers,
            scope,
            index,
            from,
            to,
            min_width,
        } => {
            let names: Vec<String> = if headers.is_empty() {
                (0..widths.len().saturating_sub(1))
                    .map(|i| format!("column{i}"))
                    .collect()
            } else {
                headers
            };
            if names.len() > widths.len() {
                return Err(eyre!(
                    "{} headers but only {} measured widths",
                    names.len(),
                    widths.len()
                ));
            }
            let headers: Vec<ColumnHeader> = names
                .into_iter()
                .map(|name| ColumnHeader::new(ColumnAttribute::new(name, scope.as_str())))
                .collect();

            let mut resize_config = config.resize_config();
            if let Some(min_width) = min_width {
                resize_config.min_width = min_width;
            }
            let event = ResizeEvent {
                measured_widths: &widths,
                pointer_x: to,
                previous_pointer_x: from,
                index,
            };
            print_json(&resize(&event, &headers, &resize_config).columns)
        }
        Command::Toggle { selected, row } => {
            let selection: DeviceSelection = selected.into_iter().collect();
            print_json(&selection.toggle(row))
        }
        Command::Limit {
            plan,
            requested,
            current,
        } => {
            let plan: PlanId = plan.parse().map_err(|e: String| eyre!(e))?;
            print_json(&plan_limit(requested, plan, current, &config.limit_rules()))
        }
    }
}
