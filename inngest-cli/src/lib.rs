//! Command-line access to the Inngest events API.
//!
//! Environment variables:
//! - `INNGEST_SIGNING_KEY` (required, sent as a bearer token)
//! - `INNGEST_API_URL` (optional, defaults to the local dev server)

mod client;
mod config;
mod error;
mod listing;
mod render;
mod window;

pub use client::{EventFilter, InngestClient};
pub use config::{InngestConfig, DEFAULT_API_URL, SIGNING_KEY_VAR};
pub use error::InngestError;
pub use listing::Listing;
pub use render::{render_detail, render_events, render_runs};
pub use window::TimeWindow;
