pub mod actions;
pub mod app;
pub mod config;
pub mod disputes;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod permissions;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tabs;
pub mod transport;
pub mod ui;

pub use app::router;
pub use config::Settings;
pub use state::AppState;
pub use storage::check_version;
pub use store::{HttpStore, RemoteStore};
