//! Command-line argument parsing for the dashboard
//!
//! Supports:
//! - Showing the current grid at a given viewport width
//! - Adding, removing and resetting widgets
//! - Replaying a recorded sequence of grid engine events

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::registry::WidgetType;

/// A responsive widget dashboard
#[derive(Parser, Debug)]
#[command(name = "gridboard", version, about = "A responsive widget dashboard")]
pub struct CliArgs {
    /// Viewport width in pixels
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    /// Grid container height in pixels
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep layout storage in this directory
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the dashboard grid (default)
    Show,
    /// Add a widget at the first free position
    Add {
        #[arg(value_name = "TYPE")]
        widget_type: WidgetType,
    },
    /// Remove a widget by id
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Restore the default dashboard
    Reset,
    /// List registered widget types
    Types,
    /// Feed a YAML list of messages through the dashboard
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl CliArgs {
    /// The subcommand to run, `show` if none was given
    pub fn command(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::Show)
    }

    /// Apply viewport overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(width) = self.width {
            config.viewport_width = width;
        }
        if let Some(height) = self.height {
            config.container_height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_show() {
        let args = CliArgs::try_parse_from(["gridboard"]).unwrap();
        assert_eq!(args.command(), CliCommand::Show);
    }

    #[test]
    fn test_add_parses_widget_type() {
        let args = CliArgs::try_parse_from(["gridboard", "add", "order-book"]).unwrap();
        assert_eq!(
            args.command(),
            CliCommand::Add {
                widget_type: WidgetType::OrderBook
            }
        );
    }

    #[test]
    fn test_add_rejects_unknown_type() {
        assert!(CliArgs::try_parse_from(["gridboard", "add", "spreadsheet"]).is_err());
    }

    #[test]
    fn test_width_override() {
        let args = CliArgs::try_parse_from(["gridboard", "--width", "700", "show"]).unwrap();
        let mut config = DashboardConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.viewport_width, 700);
        assert_eq!(config.container_height, 900);
    }
}
