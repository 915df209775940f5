pub mod complaint;
pub mod config;
pub mod stats;

pub use complaint::{present_complaint_detail, present_complaint_list, present_notice};
pub use config::{present_config, present_endpoint_saved};
pub use stats::present_stats;
