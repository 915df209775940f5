//! # Presentation Layer
//!
//! Console output follows an MVVM-style, strictly unidirectional flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                                                                  ==(Text)==> [ View ] --> Output
//! ```
//!
//! * `view_models/` holds raw data (ids, keywords, counts). JSON output is an
//!   API and always dumps the full view model, ignoring `ViewMode`.
//! * `presenters/` turn desk state into view models and decide which hints to show.
//! * `views/` implement `fmt::Display` per `ViewMode` (layout, truncation, labels).
//! * `renderers/` pick JSON or text and paint the badge and hints.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
