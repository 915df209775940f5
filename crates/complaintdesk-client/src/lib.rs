//! Client for the complaint collaborator store.
//!
//! The store exposes one endpoint:
//!
//! - `GET`  → the full collection, newest first
//! - `POST` → create a complaint
//! - `PUT`  → update status, or attach a response
//!
//! # Example
//!
//! ```rust,no_run
//! use complaintdesk_client::{ComplaintStore, HttpComplaintStore, StoreConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = HttpComplaintStore::new(StoreConfig::new("https://example.com/complaints"))?;
//! let complaints = store.list().await?;
//! println!("{} complaints", complaints.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod store;

pub use error::{Result, StoreError};
pub use http::{HttpComplaintStore, StoreConfig};
pub use store::ComplaintStore;
