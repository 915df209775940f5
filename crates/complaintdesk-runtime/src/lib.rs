//! Complaint desk runtime.
//!
//! `Desk` owns the fetched collection together with the list filter, the
//! selected complaint and both form drafts. Every mutating action goes
//! through the store and then replaces the collection with a fresh snapshot.

pub mod config;
pub mod desk;
pub mod error;
pub mod notice;

pub use config::{CONFIG_ENV, Config, ENDPOINT_ENV, resolve_config_path};
pub use desk::Desk;
pub use error::{Error, Result};
pub use notice::{Notice, NoticeLevel};
