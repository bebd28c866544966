//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! panel placement and state transition issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=panel_dock::panel::resolver=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/panel-dock/logs/panel-dock.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::{PanelId, PanelState, Slot};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the logs directory with daily rotation. Calling this twice is harmless;
/// the second registration is ignored.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panel-dock.log");
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

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of panel placement for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub id: PanelId,
    pub slot: Slot,
    pub is_visible: bool,
    pub size: Option<f32>,
}

impl PanelInfo {
    fn placement(&self) -> String {
        let visibility = if self.is_visible { "visible" } else { "hidden" };
        format!("{}@{}", visibility, self.slot)
    }
}

impl LayoutSnapshot {
    pub fn from_state(state: &PanelState) -> Self {
        Self {
            panels: state
                .panels()
                .map(|p| PanelInfo {
                    id: p.id,
                    slot: p.slot,
                    is_visible: p.is_visible,
                    size: p.size,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    ///
    /// e.g. `file-tree: hidden@left → visible@left; terminal: size 300 → 350`
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for before in &self.panels {
            let Some(after) = other.panels.iter().find(|p| p.id == before.id) else {
                changes.push(format!("{}: removed", before.id));
                continue;
            };
            if before.slot != after.slot || before.is_visible != after.is_visible {
                changes.push(format!(
                    "{}: {} → {}",
                    before.id,
                    before.placement(),
                    after.placement()
                ));
            }
            if before.size != after.size {
                let fmt_size = |s: Option<f32>| s.map_or("none".to_string(), |s| s.to_string());
                changes.push(format!(
                    "{}: size {} → {}",
                    before.id,
                    fmt_size(before.size),
                    fmt_size(after.size)
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
