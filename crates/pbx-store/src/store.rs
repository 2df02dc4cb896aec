//! The flat object store keyed by reference token.
//!
//! [`Objects`] holds every entity of a project graph in one
//! `BTreeMap<ObjectRef, Object>`. The single map doubles as the global
//! uniqueness index: a token maps to at most one entity, of exactly one
//! kind, and the allocator's existence test is a plain key lookup instead
//! of a scan over per-kind collections.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use pbx_types::ObjectRef;

use crate::error::{StoreError, StoreResult};
use crate::objects::{
    BuildConfiguration, BuildFile, CopyFilesBuildPhase, FileReference, Group, Object, Project,
    VariantGroup, VersionGroup,
};

/// All entities of a project graph, keyed by reference token.
///
/// Mutation goes through [`insert`](Self::insert) and
/// [`remove`](Self::remove) so the uniqueness invariant is checked on every
/// binding. Lookup is available both untyped ([`get`](Self::get)) and per
/// kind (e.g. [`file_reference`](Self::file_reference)); resolution helpers
/// live in the `resolve` module.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objects {
    objects: BTreeMap<ObjectRef, Object>,
}

impl Objects {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
        }
    }

    /// Number of entities in the store, across all kinds.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns `true` if any entity anywhere in the graph uses this token.
    pub fn contains(&self, reference: &ObjectRef) -> bool {
        self.objects.contains_key(reference)
    }

    /// Bind an entity to a reference token.
    ///
    /// Fails with [`StoreError::DuplicateRef`] if the token is already bound
    /// to any entity of any kind; the existing binding is left untouched.
    pub fn insert(
        &mut self,
        reference: ObjectRef,
        object: impl Into<Object>,
    ) -> StoreResult<()> {
        if let Some(existing) = self.objects.get(&reference) {
            return Err(StoreError::DuplicateRef {
                reference,
                existing: existing.kind(),
            });
        }
        self.objects.insert(reference, object.into());
        Ok(())
    }

    /// Look up an entity by token, whatever its kind.
    pub fn get(&self, reference: &ObjectRef) -> Option<&Object> {
        self.objects.get(reference)
    }

    /// Mutable lookup, for graph-construction code wiring up references.
    pub fn get_mut(&mut self, reference: &ObjectRef) -> Option<&mut Object> {
        self.objects.get_mut(reference)
    }

    /// Remove the entity bound to a token, returning it if present.
    pub fn remove(&mut self, reference: &ObjectRef) -> Option<Object> {
        self.objects.remove(reference)
    }

    /// Iterate over all entities in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectRef, &Object)> {
        self.objects.iter()
    }

    // -----------------------------------------------------------------------
    // Typed lookup
    // -----------------------------------------------------------------------

    /// Look up a file reference by token.
    pub fn file_reference(&self, reference: &ObjectRef) -> Option<&FileReference> {
        match self.objects.get(reference) {
            Some(Object::FileReference(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up a group by token.
    pub fn group(&self, reference: &ObjectRef) -> Option<&Group> {
        match self.objects.get(reference) {
            Some(Object::Group(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up a variant group by token.
    pub fn variant_group(&self, reference: &ObjectRef) -> Option<&VariantGroup> {
        match self.objects.get(reference) {
            Some(Object::VariantGroup(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up a version group by token.
    pub fn version_group(&self, reference: &ObjectRef) -> Option<&VersionGroup> {
        match self.objects.get(reference) {
            Some(Object::VersionGroup(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up a build file by token.
    pub fn build_file(&self, reference: &ObjectRef) -> Option<&BuildFile> {
        match self.objects.get(reference) {
            Some(Object::BuildFile(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up a build configuration by token.
    pub fn build_configuration(&self, reference: &ObjectRef) -> Option<&BuildConfiguration> {
        match self.objects.get(reference) {
            Some(Object::BuildConfiguration(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Look up the project entity by token.
    pub fn project(&self, reference: &ObjectRef) -> Option<&Project> {
        match self.objects.get(reference) {
            Some(Object::Project(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Mutable project lookup, used by the project-name updater.
    pub fn project_mut(&mut self, reference: &ObjectRef) -> Option<&mut Project> {
        match self.objects.get_mut(reference) {
            Some(Object::Project(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Iterate over all copy-files phases in token order.
    ///
    /// Several copy-files phases may coexist; the resolver walks them to
    /// find the specific instance owning a build file.
    pub fn copy_files_phases(
        &self,
    ) -> impl Iterator<Item = (&ObjectRef, &CopyFilesBuildPhase)> {
        self.objects.iter().filter_map(|(reference, object)| {
            if let Object::CopyFiles(phase) = object {
                Some((reference, phase))
            } else {
                None
            }
        })
    }
}

impl fmt::Debug for Objects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Objects")
            .field("object_count", &self.objects.len())
            .finish()
    }
}
