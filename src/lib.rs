//! gridboard - Elm-style responsive widget dashboard
//!
//! This crate provides the core types and logic for a dashboard of widgets
//! on a responsive, collision-free grid whose layout is persisted across
//! sessions, implementing the Elm Architecture pattern.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drop_target;
pub mod enrich;
pub mod geometry;
pub mod messages;
pub mod mock_data;
pub mod model;
pub mod placement;
pub mod registry;
pub mod runtime;
pub mod store;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DashboardConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use registry::WidgetType;
pub use runtime::Runtime;
