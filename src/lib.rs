//! Adapter that pulls tasks from an Asana-style task service.
//!
//! Fetches projects, tags and users, denormalizes each project's tasks
//! against them, and returns a bounded, ordered list of [`NormalizedTask`]
//! records for a downstream consumer. All state is request-scoped: nothing
//! is persisted between calls.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod refs;
pub mod section;
pub mod timestamp;
pub mod types;

pub use client::ApiClient;
pub use config::Config;
pub use error::FetchError;
pub use fetch::{get_tasks, TaskFeed};
pub use refs::ReferenceMaps;
pub use types::{BasicRecord, NormalizedTask};
