//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! layout persistence, interaction classification and reflow issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=gridboard::store=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridboard/logs/gridboard.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::classifier::InteractionState;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and defaults to
/// `warn`. File logging writes to `~/.config/gridboard/logs/gridboard.log`
/// with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gridboard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the canonical layout for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub cols: u32,
    pub state: InteractionState,
    pub pending_write: bool,
    pub items: Vec<ItemInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            cols: model.cols,
            state: model.classifier.state(),
            pending_write: model.store.has_pending_write(),
            items: model
                .layout()
                .iter()
                .map(|item| ItemInfo {
                    id: item.id.clone(),
                    x: item.x,
                    y: item.y,
                    w: item.w,
                    h: item.h,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cols != other.cols {
            changes.push(format!("cols: {} → {}", self.cols, other.cols));
        }
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.pending_write != other.pending_write {
            let status = if other.pending_write {
                "scheduled"
            } else {
                "cleared"
            };
            changes.push(format!("write {}", status));
        }

        for before in &self.items {
            match other.items.iter().find(|i| i.id == before.id) {
                None => changes.push(format!("-{}", before.id)),
                Some(after) if after != before => changes.push(format!(
                    "{}: ({},{} {}x{}) → ({},{} {}x{})",
                    before.id,
                    before.x,
                    before.y,
                    before.w,
                    before.h,
                    after.x,
                    after.y,
                    after.w,
                    after.h
                )),
                Some(_) => {}
            }
        }
        for after in &other.items {
            if !self.items.iter().any(|i| i.id == after.id) {
                changes.push(format!("+{} ({},{} {}x{})", after.id, after.x, after.y, after.w, after.h));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
