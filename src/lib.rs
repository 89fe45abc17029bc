pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;
pub mod views;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{FileTokenStore, HttpCoachApi, MemoryTokenStore};
pub use app::RosterApp;
pub use config::Settings;
pub use utils::error::{AppError, Result};
pub use views::{CoachDetailView, CoachListView};
