pub mod config;
pub mod context;
pub mod list;
pub mod respond;
pub mod show;
pub mod stats;
pub mod status;
pub mod submit;

pub use context::HandlerContext;
