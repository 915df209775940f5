mod complaint;
mod id;
mod kind;
mod photo;
mod status;

pub use complaint::Complaint;
pub use id::ComplaintId;
pub use kind::ComplaintKind;
pub use photo::{Photo, mime_from_extension};
pub use status::ComplaintStatus;
