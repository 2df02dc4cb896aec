//! Foundation types for pbx.
//!
//! This crate provides the types shared by every other pbx crate: the
//! reference token that identifies entities in a project graph, and the
//! build-phase kind enumeration with its display labels.
//!
//! # Key Types
//!
//! - [`ObjectRef`] — Opaque reference token, globally unique across the graph
//! - [`PhaseKind`] — The six build-phase kinds and their display labels

pub mod kind;
pub mod object_ref;

pub use kind::PhaseKind;
pub use object_ref::ObjectRef;
