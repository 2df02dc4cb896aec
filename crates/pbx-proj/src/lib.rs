//! Project root document for pbx.
//!
//! [`Proj`] is the top of a project-description graph: format version
//! fields, the root object token, and the [`Objects`] store holding every
//! entity. This crate adds the two operations that live above the store:
//!
//! - **Name metadata** — deriving the project's display name from its
//!   storage location inside a `.xcodeproj` bundle.
//! - **Persistence** — flushing the whole graph through an external
//!   [`ProjEncoder`] to a file, with explicit overwrite semantics.
//!
//! # Modules
//!
//! - [`error`] — [`WriteError`] for persistence failures
//! - [`proj`] — The [`Proj`] document and the name updater
//! - [`write`] — The [`ProjEncoder`] trait and [`Proj::write`]
//!
//! [`Objects`]: pbx_store::Objects

pub mod error;
pub mod proj;
pub mod write;

pub use error::WriteError;
pub use proj::Proj;
pub use write::ProjEncoder;
