//! Object store, reference resolver, and identifier allocator for pbx
//! project graphs.
//!
//! A project-description document is backed by a graph of heterogeneous
//! entities — file references, groups, build files, build phases,
//! configurations — each identified by an opaque [`ObjectRef`] token and
//! related to other entities purely by reference. This crate owns the three
//! pieces of that graph that carry real invariants:
//!
//! - **Store** ([`Objects`]) — a single flat map from token to entity,
//!   enforcing that a token is bound to at most one entity of any kind.
//! - **Resolver** — read-only projections answering "what does this
//!   reference mean": display names, build-phase membership, phase labels.
//!   Callers never need to know which kind a token belongs to.
//! - **Allocator** — generation of new tokens guaranteed unused anywhere in
//!   the graph, with a deterministic per-kind discriminator.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`objects`] — Entity structs, the [`Object`] enum, and [`ObjectKind`]
//! - [`store`] — The [`Objects`] container
//! - [`resolve`] — Display-name and build-phase resolution
//! - [`alloc`] — Reference-token allocation
//!
//! [`ObjectRef`]: pbx_types::ObjectRef

pub mod alloc;
pub mod error;
pub mod objects;
pub mod resolve;
pub mod store;

pub use alloc::MAX_ALLOC_ATTEMPTS;
pub use error::{StoreError, StoreResult};
pub use objects::{
    BuildConfiguration, BuildFile, CopyFilesBuildPhase, FileReference, FrameworksBuildPhase,
    Group, HeadersBuildPhase, Object, ObjectKind, Project, ResourcesBuildPhase,
    ShellScriptBuildPhase, SourcesBuildPhase, VariantGroup, VersionGroup,
};
pub use resolve::FILE_PHASE_SCAN_ORDER;
pub use store::Objects;
