//! Command-line access to LangSmith sessions, runs and threads.
//!
//! ```rust,no_run
//! use secrecy::SecretString;
//! use langsmith_cli::{LangSmithClient, LangSmithConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), langsmith_cli::LangSmithError> {
//!     let config = LangSmithConfig::new(SecretString::new("key".to_string()));
//!     let client = LangSmithClient::new(config);
//!     let thread = client.last_thread("my-session-id").await?;
//!     println!("{}", serde_json::to_string_pretty(&thread).unwrap_or_default());
//!     Ok(())
//! }
//! ```
mod client;
mod config;
mod error;
mod lenient;
mod query;
mod thread;
mod window;

pub use client::{LangSmithClient, LAST_THREAD_WINDOWS};
pub use config::{LangSmithConfig, API_KEY_VAR, DEFAULT_API_URL};
pub use error::LangSmithError;
pub use lenient::{or_passthrough, reparse_json};
pub use query::{RunQuery, RUN_FIELDS, RUN_LIMIT};
pub use thread::{parse_messages, reshape_thread, MessageParseError};
pub use window::TimeWindow;
