//! `trip-server` exposes the trip planner over HTTP.
//! Requests are enriched with local guide snippets and forwarded to an LLM.

pub mod config;
pub mod error;
pub mod planner;
pub mod protocol;
pub mod server;

pub use config::{ModelSettings, ServerConfig};
pub use error::ApiError;
pub use planner::TripPlanner;
pub use server::{AppState, app_router, bind_listener, build_state, run_server};
