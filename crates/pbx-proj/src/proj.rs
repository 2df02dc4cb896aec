//! The project root document and its name metadata.

use std::ffi::OsStr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use pbx_store::Objects;
use pbx_types::ObjectRef;

/// Extension of the bundle directory that holds a project document.
const PROJECT_BUNDLE_EXTENSION: &str = "xcodeproj";

/// Default archive format version for new documents.
const DEFAULT_ARCHIVE_VERSION: u32 = 1;

/// Default object format version for new documents.
const DEFAULT_OBJECT_VERSION: u32 = 46;

/// A project-description document: format versions, the root object token,
/// and the store holding every entity of the graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proj {
    /// Archive format version.
    pub archive_version: u32,
    /// Object format version.
    pub object_version: u32,
    /// Token of the root project entity.
    pub root_object: ObjectRef,
    /// All entities of the graph.
    pub objects: Objects,
}

impl Proj {
    /// Create an empty document rooted at the given token.
    ///
    /// The caller still has to insert the root project entity under
    /// `root_object`; the store starts empty.
    pub fn new(root_object: ObjectRef) -> Self {
        Self {
            archive_version: DEFAULT_ARCHIVE_VERSION,
            object_version: DEFAULT_OBJECT_VERSION,
            root_object,
            objects: Objects::new(),
        }
    }

    /// Derive the project's display name from its storage location.
    ///
    /// The name is needed for certain annotations when the document is
    /// serialized. A path like `.../MyApp.xcodeproj/project.pbxproj` sets
    /// the root project's name to `MyApp`; any path whose parent directory
    /// is not a project bundle leaves the graph untouched, as does a graph
    /// whose root entity is missing.
    pub fn update_project_name(&mut self, path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        if parent.extension().and_then(OsStr::to_str) != Some(PROJECT_BUNDLE_EXTENSION) {
            debug!(path = %path.display(), "not a project bundle path, name unchanged");
            return;
        }
        let Some(name) = parent.file_stem().and_then(OsStr::to_str) else {
            return;
        };
        if let Some(project) = self.objects.project_mut(&self.root_object) {
            project.name = Some(name.to_string());
            debug!(name, "project name derived from bundle path");
        }
    }
}
