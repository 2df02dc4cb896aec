use std::fmt;

use serde::{Deserialize, Serialize};

use pbx_types::{ObjectRef, PhaseKind};

/// The kind of entity stored in a project graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Reference to a file on disk.
    FileReference,
    /// Group of file references.
    Group,
    /// Localized variant group.
    VariantGroup,
    /// Versioned group (e.g. a data model with multiple versions).
    VersionGroup,
    /// Membership link between a build phase and a file-like entity.
    BuildFile,
    /// Compile sources build phase.
    SourcesBuildPhase,
    /// Link frameworks build phase.
    FrameworksBuildPhase,
    /// Copy resources build phase.
    ResourcesBuildPhase,
    /// Copy-files build phase.
    CopyFilesBuildPhase,
    /// Run-script build phase.
    ShellScriptBuildPhase,
    /// Copy headers build phase.
    HeadersBuildPhase,
    /// Named build configuration.
    BuildConfiguration,
    /// The root project entity.
    Project,
}

impl ObjectKind {
    /// Stable, versioned discriminator domain for this kind.
    ///
    /// Used by the reference allocator to derive the kind segment of new
    /// tokens. The string is part of the token format contract: changing it
    /// changes every token allocated for the kind, so it carries an explicit
    /// version suffix.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::FileReference => "pbx-file-reference-v1",
            Self::Group => "pbx-group-v1",
            Self::VariantGroup => "pbx-variant-group-v1",
            Self::VersionGroup => "pbx-version-group-v1",
            Self::BuildFile => "pbx-build-file-v1",
            Self::SourcesBuildPhase => "pbx-sources-phase-v1",
            Self::FrameworksBuildPhase => "pbx-frameworks-phase-v1",
            Self::ResourcesBuildPhase => "pbx-resources-phase-v1",
            Self::CopyFilesBuildPhase => "pbx-copy-files-phase-v1",
            Self::ShellScriptBuildPhase => "pbx-shell-script-phase-v1",
            Self::HeadersBuildPhase => "pbx-headers-phase-v1",
            Self::BuildConfiguration => "pbx-build-configuration-v1",
            Self::Project => "pbx-project-v1",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileReference => write!(f, "file reference"),
            Self::Group => write!(f, "group"),
            Self::VariantGroup => write!(f, "variant group"),
            Self::VersionGroup => write!(f, "version group"),
            Self::BuildFile => write!(f, "build file"),
            Self::SourcesBuildPhase => write!(f, "sources build phase"),
            Self::FrameworksBuildPhase => write!(f, "frameworks build phase"),
            Self::ResourcesBuildPhase => write!(f, "resources build phase"),
            Self::CopyFilesBuildPhase => write!(f, "copy-files build phase"),
            Self::ShellScriptBuildPhase => write!(f, "shell-script build phase"),
            Self::HeadersBuildPhase => write!(f, "headers build phase"),
            Self::BuildConfiguration => write!(f, "build configuration"),
            Self::Project => write!(f, "project"),
        }
    }
}

// ---------------------------------------------------------------------------
// File-like entities
// ---------------------------------------------------------------------------

/// Reference to a file on disk.
///
/// The display name is `name` when present, falling back to `path`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Explicit display name, if the document carries one.
    pub name: Option<String>,
    /// Path of the referenced file.
    pub path: Option<String>,
}

impl FileReference {
    /// Create a file reference with an explicit name and path.
    pub fn new(name: Option<String>, path: Option<String>) -> Self {
        Self { name, path }
    }

    /// Create a file reference identified by path alone.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: Some(path.into()),
        }
    }

    /// Display name: `name` when present, else `path`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.path.as_deref())
    }
}

/// Group of file references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name of the group.
    pub name: String,
}

impl Group {
    /// Create a group with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Localized variant group.
///
/// Resolved before plain groups when a token is turned into a display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    /// Display name of the variant group.
    pub name: String,
}

impl VariantGroup {
    /// Create a variant group with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Versioned group, e.g. a data model with several versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    /// Display name of the version group.
    pub name: String,
}

impl VersionGroup {
    /// Create a version group with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Build files and phases
// ---------------------------------------------------------------------------

/// Membership link between a build phase and a file-like entity.
///
/// A build file carries no content of its own; it points at a file
/// reference (or group) via `file_ref` and is itself referenced from the
/// `files` sequence of exactly one build phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFile {
    /// The file-like entity this build file links into a phase.
    pub file_ref: Option<ObjectRef>,
}

impl BuildFile {
    /// Create a build file linking to the given file-like entity.
    pub fn new(file_ref: ObjectRef) -> Self {
        Self {
            file_ref: Some(file_ref),
        }
    }
}

/// Compile sources build phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesBuildPhase {
    /// Build-file references, in insertion order.
    pub files: Vec<ObjectRef>,
}

impl SourcesBuildPhase {
    /// Create a sources phase over the given build files.
    pub fn new(files: Vec<ObjectRef>) -> Self {
        Self { files }
    }
}

/// Link frameworks build phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworksBuildPhase {
    /// Build-file references, in insertion order.
    pub files: Vec<ObjectRef>,
}

impl FrameworksBuildPhase {
    /// Create a frameworks phase over the given build files.
    pub fn new(files: Vec<ObjectRef>) -> Self {
        Self { files }
    }
}

/// Copy resources build phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesBuildPhase {
    /// Build-file references, in insertion order.
    pub files: Vec<ObjectRef>,
}

impl ResourcesBuildPhase {
    /// Create a resources phase over the given build files.
    pub fn new(files: Vec<ObjectRef>) -> Self {
        Self { files }
    }
}

/// Copy headers build phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadersBuildPhase {
    /// Build-file references, in insertion order.
    pub files: Vec<ObjectRef>,
}

impl HeadersBuildPhase {
    /// Create a headers phase over the given build files.
    pub fn new(files: Vec<ObjectRef>) -> Self {
        Self { files }
    }
}

/// Copy-files build phase.
///
/// Several copy-files phases may coexist in one graph, each with its own
/// custom display name ("Embed Frameworks", "Copy Plugins", …). A phase
/// without a name falls back to the kind's default label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFilesBuildPhase {
    /// Build-file references, in insertion order.
    pub files: Vec<ObjectRef>,
    /// Custom display name for this phase instance.
    pub name: Option<String>,
}

impl CopyFilesBuildPhase {
    /// Create a copy-files phase over the given build files.
    pub fn new(files: Vec<ObjectRef>, name: Option<String>) -> Self {
        Self { files, name }
    }
}

/// Run-script build phase.
///
/// Carries no file membership list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellScriptBuildPhase {
    /// Custom display name for this phase instance.
    pub name: Option<String>,
}

impl ShellScriptBuildPhase {
    /// Create a shell-script phase with the given display name.
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

// ---------------------------------------------------------------------------
// Configurations and the project root
// ---------------------------------------------------------------------------

/// Named build configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    /// Configuration name ("Debug", "Release", …).
    pub name: String,
}

impl BuildConfiguration {
    /// Create a configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The root project entity.
///
/// A graph contains exactly one, referenced by the document's root token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project display name, derived from the bundle path when written.
    pub name: Option<String>,
}

impl Project {
    /// Create a project entity with no name yet.
    pub fn new() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// The tagged entity
// ---------------------------------------------------------------------------

/// An entity in the project graph: kind tag plus entity payload.
///
/// The store keys one flat map of `Object` values by reference token, which
/// is what makes the global uniqueness invariant structural: a token cannot
/// be bound to two kinds at once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Object {
    FileReference(FileReference),
    Group(Group),
    VariantGroup(VariantGroup),
    VersionGroup(VersionGroup),
    BuildFile(BuildFile),
    Sources(SourcesBuildPhase),
    Frameworks(FrameworksBuildPhase),
    Resources(ResourcesBuildPhase),
    CopyFiles(CopyFilesBuildPhase),
    ShellScript(ShellScriptBuildPhase),
    Headers(HeadersBuildPhase),
    BuildConfiguration(BuildConfiguration),
    Project(Project),
}

impl Object {
    /// The kind tag of this entity.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::FileReference(_) => ObjectKind::FileReference,
            Self::Group(_) => ObjectKind::Group,
            Self::VariantGroup(_) => ObjectKind::VariantGroup,
            Self::VersionGroup(_) => ObjectKind::VersionGroup,
            Self::BuildFile(_) => ObjectKind::BuildFile,
            Self::Sources(_) => ObjectKind::SourcesBuildPhase,
            Self::Frameworks(_) => ObjectKind::FrameworksBuildPhase,
            Self::Resources(_) => ObjectKind::ResourcesBuildPhase,
            Self::CopyFiles(_) => ObjectKind::CopyFilesBuildPhase,
            Self::ShellScript(_) => ObjectKind::ShellScriptBuildPhase,
            Self::Headers(_) => ObjectKind::HeadersBuildPhase,
            Self::BuildConfiguration(_) => ObjectKind::BuildConfiguration,
            Self::Project(_) => ObjectKind::Project,
        }
    }

    /// The build-phase kind, if this entity is a build phase.
    pub fn phase_kind(&self) -> Option<PhaseKind> {
        match self {
            Self::Sources(_) => Some(PhaseKind::Sources),
            Self::Frameworks(_) => Some(PhaseKind::Frameworks),
            Self::Resources(_) => Some(PhaseKind::Resources),
            Self::CopyFiles(_) => Some(PhaseKind::CopyFiles),
            Self::ShellScript(_) => Some(PhaseKind::ShellScript),
            Self::Headers(_) => Some(PhaseKind::Headers),
            _ => None,
        }
    }

    /// The build-file membership sequence, for phases that own one.
    ///
    /// `None` for shell-script phases (which have no file membership) and
    /// for every non-phase entity.
    pub fn phase_files(&self) -> Option<&[ObjectRef]> {
        match self {
            Self::Sources(phase) => Some(&phase.files),
            Self::Frameworks(phase) => Some(&phase.files),
            Self::Resources(phase) => Some(&phase.files),
            Self::CopyFiles(phase) => Some(&phase.files),
            Self::Headers(phase) => Some(&phase.files),
            _ => None,
        }
    }
}

impl From<FileReference> for Object {
    fn from(entity: FileReference) -> Self {
        Self::FileReference(entity)
    }
}

impl From<Group> for Object {
    fn from(entity: Group) -> Self {
        Self::Group(entity)
    }
}

impl From<VariantGroup> for Object {
    fn from(entity: VariantGroup) -> Self {
        Self::VariantGroup(entity)
    }
}

impl From<VersionGroup> for Object {
    fn from(entity: VersionGroup) -> Self {
        Self::VersionGroup(entity)
    }
}

impl From<BuildFile> for Object {
    fn from(entity: BuildFile) -> Self {
        Self::BuildFile(entity)
    }
}

impl From<SourcesBuildPhase> for Object {
    fn from(entity: SourcesBuildPhase) -> Self {
        Self::Sources(entity)
    }
}

impl From<FrameworksBuildPhase> for Object {
    fn from(entity: FrameworksBuildPhase) -> Self {
        Self::Frameworks(entity)
    }
}

impl From<ResourcesBuildPhase> for Object {
    fn from(entity: ResourcesBuildPhase) -> Self {
        Self::Resources(entity)
    }
}

impl From<CopyFilesBuildPhase> for Object {
    fn from(entity: CopyFilesBuildPhase) -> Self {
        Self::CopyFiles(entity)
    }
}

impl From<ShellScriptBuildPhase> for Object {
    fn from(entity: ShellScriptBuildPhase) -> Self {
        Self::ShellScript(entity)
    }
}

impl From<HeadersBuildPhase> for Object {
    fn from(entity: HeadersBuildPhase) -> Self {
        Self::Headers(entity)
    }
}

impl From<BuildConfiguration> for Object {
    fn from(entity: BuildConfiguration) -> Self {
        Self::BuildConfiguration(entity)
    }
}

impl From<Project> for Object {
    fn from(entity: Project) -> Self {
        Self::Project(entity)
    }
}
