// Engine module - pure logic over the complaint collection (filtering, statistics, validation)
// This layer sits between the wire types and the stateful runtime; nothing here does I/O.

pub mod draft;
pub mod filter;
pub mod stats;
pub mod validation;

pub use draft::ComplaintDraft;
pub use filter::{ComplaintFilter, FieldFilter, KindFilter, StatusFilter};
pub use stats::ComplaintStats;
pub use validation::{
    MAX_PHOTO_BYTES, ValidationError, check_photo_size, validate_complaint, validate_response,
};
