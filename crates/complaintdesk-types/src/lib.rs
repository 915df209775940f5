pub mod domain;
pub mod error;
pub mod request;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use request::*;
pub use util::*;
