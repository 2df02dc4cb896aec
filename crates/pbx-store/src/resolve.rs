//! Reference resolution: turning tokens into human-meaningful facts.
//!
//! Every operation here is a read-only projection over [`Objects`]. Callers
//! hand in a token without knowing which kind it belongs to and get back a
//! display name, a build-phase kind, or a phase label; absence is a valid
//! outcome, never an error. The scan cost this buys is acceptable because
//! graphs are small (hundreds to low thousands of entities) and resolution
//! is not on a hot path.

use pbx_types::{ObjectRef, PhaseKind};

use crate::objects::Object;
use crate::store::Objects;

/// Fixed scan order for locating the phase that owns a build file.
///
/// Shell-script phases are excluded: they carry no file membership. If the
/// at-most-one-owner invariant is violated by external graph edits, the
/// first kind in this order wins.
pub const FILE_PHASE_SCAN_ORDER: [PhaseKind; 5] = [
    PhaseKind::Sources,
    PhaseKind::Frameworks,
    PhaseKind::Resources,
    PhaseKind::CopyFiles,
    PhaseKind::Headers,
];

impl Objects {
    /// Display name of a file-like entity.
    ///
    /// Resolves variant groups, groups, and version groups by their name,
    /// and file references by name falling back to path. Returns `None`
    /// when the token is absent or bound to any other kind.
    pub fn file_name(&self, reference: &ObjectRef) -> Option<&str> {
        match self.get(reference)? {
            Object::VariantGroup(group) => Some(group.name.as_str()),
            Object::Group(group) => Some(group.name.as_str()),
            Object::VersionGroup(group) => Some(group.name.as_str()),
            Object::FileReference(file) => file.display_name(),
            _ => None,
        }
    }

    /// Display name of the file behind a build file.
    ///
    /// Follows the build file's `file_ref` and delegates to
    /// [`file_name`](Self::file_name). Returns `None` when the build file
    /// or its `file_ref` is absent.
    pub fn build_file_name(&self, reference: &ObjectRef) -> Option<&str> {
        let build_file = self.build_file(reference)?;
        let file_ref = build_file.file_ref.as_ref()?;
        self.file_name(file_ref)
    }

    /// Name of a build configuration.
    pub fn configuration_name(&self, reference: &ObjectRef) -> Option<&str> {
        self.build_configuration(reference)
            .map(|config| config.name.as_str())
    }

    /// The kind of build phase a build file belongs to.
    ///
    /// Scans phase kinds in [`FILE_PHASE_SCAN_ORDER`] and returns the first
    /// kind with some phase instance whose file sequence contains the
    /// token. `None` when no phase contains it.
    pub fn file_build_phase(&self, build_file: &ObjectRef) -> Option<PhaseKind> {
        FILE_PHASE_SCAN_ORDER.into_iter().find(|kind| {
            self.iter().any(|(_, object)| {
                object.phase_kind() == Some(*kind)
                    && object
                        .phase_files()
                        .is_some_and(|files| files.contains(build_file))
            })
        })
    }

    /// The kind of the build phase bound to a token.
    ///
    /// Direct lookup across all six phase kinds; tokens are globally unique
    /// so at most one can match. `None` when the token is absent or not a
    /// phase.
    pub fn build_phase_kind(&self, reference: &ObjectRef) -> Option<PhaseKind> {
        self.get(reference)?.phase_kind()
    }

    /// Display label of the build phase bound to a token.
    ///
    /// Sources, frameworks, resources, and headers phases have fixed
    /// labels. Copy-files and shell-script phases use their own name when
    /// present, falling back to the kind's default label.
    pub fn build_phase_label(&self, reference: &ObjectRef) -> Option<&str> {
        match self.get(reference)? {
            Object::Sources(_) => Some(PhaseKind::Sources.label()),
            Object::Frameworks(_) => Some(PhaseKind::Frameworks.label()),
            Object::Resources(_) => Some(PhaseKind::Resources.label()),
            Object::Headers(_) => Some(PhaseKind::Headers.label()),
            Object::CopyFiles(phase) => Some(
                phase
                    .name
                    .as_deref()
                    .unwrap_or(PhaseKind::CopyFiles.label()),
            ),
            Object::ShellScript(phase) => Some(
                phase
                    .name
                    .as_deref()
                    .unwrap_or(PhaseKind::ShellScript.label()),
            ),
            _ => None,
        }
    }

    /// Display label of the phase a build file belongs to.
    ///
    /// For copy-files membership the label comes from the specific phase
    /// instance containing the token — multiple copy-files phases may
    /// coexist with distinct custom names. Every other kind uses its fixed
    /// label.
    pub fn file_build_phase_label(&self, build_file: &ObjectRef) -> Option<&str> {
        match self.file_build_phase(build_file)? {
            PhaseKind::CopyFiles => {
                let name = self
                    .copy_files_phases()
                    .find(|(_, phase)| phase.files.contains(build_file))
                    .and_then(|(_, phase)| phase.name.as_deref());
                Some(name.unwrap_or(PhaseKind::CopyFiles.label()))
            }
            kind => Some(kind.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        BuildConfiguration, BuildFile, CopyFilesBuildPhase, FileReference, FrameworksBuildPhase,
        Group, HeadersBuildPhase, ResourcesBuildPhase, ShellScriptBuildPhase, SourcesBuildPhase,
        VariantGroup, VersionGroup,
    };

    fn r(token: &str) -> ObjectRef {
        ObjectRef::new(token)
    }

    // -----------------------------------------------------------------------
    // file_name
    // -----------------------------------------------------------------------

    #[test]
    fn file_name_resolves_each_file_like_kind() {
        let mut store = Objects::new();
        store
            .insert(r("VG"), VariantGroup::new("Localizable.strings"))
            .unwrap();
        store.insert(r("G"), Group::new("Sources")).unwrap();
        store
            .insert(r("XV"), VersionGroup::new("Model.xcdatamodeld"))
            .unwrap();
        store
            .insert(
                r("FR"),
                FileReference::new(Some("App.c".into()), Some("Sources/App.c".into())),
            )
            .unwrap();

        assert_eq!(store.file_name(&r("VG")), Some("Localizable.strings"));
        assert_eq!(store.file_name(&r("G")), Some("Sources"));
        assert_eq!(store.file_name(&r("XV")), Some("Model.xcdatamodeld"));
        assert_eq!(store.file_name(&r("FR")), Some("App.c"));
    }

    #[test]
    fn file_name_falls_back_to_path() {
        let mut store = Objects::new();
        store
            .insert(r("FR"), FileReference::from_path("main.c"))
            .unwrap();
        assert_eq!(store.file_name(&r("FR")), Some("main.c"));
    }

    #[test]
    fn file_name_none_for_absent_or_foreign_tokens() {
        let mut store = Objects::new();
        store.insert(r("B"), BuildFile::new(r("FR"))).unwrap();
        store
            .insert(r("C"), BuildConfiguration::new("Debug"))
            .unwrap();

        assert_eq!(store.file_name(&r("MISSING")), None);
        // Bound tokens of non-file kinds do not resolve to a name.
        assert_eq!(store.file_name(&r("B")), None);
        assert_eq!(store.file_name(&r("C")), None);
    }

    #[test]
    fn file_name_none_when_reference_has_neither_name_nor_path() {
        let mut store = Objects::new();
        store.insert(r("FR"), FileReference::default()).unwrap();
        assert_eq!(store.file_name(&r("FR")), None);
    }

    // -----------------------------------------------------------------------
    // build_file_name
    // -----------------------------------------------------------------------

    #[test]
    fn build_file_name_follows_file_ref() {
        let mut store = Objects::new();
        store
            .insert(r("FR"), FileReference::from_path("main.c"))
            .unwrap();
        store.insert(r("B"), BuildFile::new(r("FR"))).unwrap();

        assert_eq!(store.build_file_name(&r("B")), Some("main.c"));
    }

    #[test]
    fn build_file_name_none_without_file_ref() {
        let mut store = Objects::new();
        store.insert(r("B"), BuildFile::default()).unwrap();
        assert_eq!(store.build_file_name(&r("B")), None);
    }

    #[test]
    fn build_file_name_none_for_dangling_file_ref() {
        let mut store = Objects::new();
        store.insert(r("B"), BuildFile::new(r("GONE"))).unwrap();
        assert_eq!(store.build_file_name(&r("B")), None);
    }

    #[test]
    fn build_file_name_none_for_missing_build_file() {
        let store = Objects::new();
        assert_eq!(store.build_file_name(&r("B")), None);
    }

    // -----------------------------------------------------------------------
    // configuration_name
    // -----------------------------------------------------------------------

    #[test]
    fn configuration_name_direct_lookup() {
        let mut store = Objects::new();
        store
            .insert(r("C"), BuildConfiguration::new("Release"))
            .unwrap();
        assert_eq!(store.configuration_name(&r("C")), Some("Release"));
        assert_eq!(store.configuration_name(&r("MISSING")), None);
    }

    // -----------------------------------------------------------------------
    // file_build_phase
    // -----------------------------------------------------------------------

    #[test]
    fn file_build_phase_none_when_unowned() {
        let mut store = Objects::new();
        store.insert(r("B"), BuildFile::default()).unwrap();
        store
            .insert(r("S"), SourcesBuildPhase::new(vec![r("OTHER")]))
            .unwrap();
        assert_eq!(store.file_build_phase(&r("B")), None);
    }

    #[test]
    fn file_build_phase_finds_the_unique_owner() {
        let mut store = Objects::new();
        store
            .insert(r("S"), SourcesBuildPhase::new(vec![r("B1")]))
            .unwrap();
        store
            .insert(r("F"), FrameworksBuildPhase::new(vec![r("B2")]))
            .unwrap();
        store
            .insert(r("R"), ResourcesBuildPhase::new(vec![r("B3")]))
            .unwrap();
        store
            .insert(r("CP"), CopyFilesBuildPhase::new(vec![r("B4")], None))
            .unwrap();
        store
            .insert(r("H"), HeadersBuildPhase::new(vec![r("B5")]))
            .unwrap();

        assert_eq!(store.file_build_phase(&r("B1")), Some(PhaseKind::Sources));
        assert_eq!(store.file_build_phase(&r("B2")), Some(PhaseKind::Frameworks));
        assert_eq!(store.file_build_phase(&r("B3")), Some(PhaseKind::Resources));
        assert_eq!(store.file_build_phase(&r("B4")), Some(PhaseKind::CopyFiles));
        assert_eq!(store.file_build_phase(&r("B5")), Some(PhaseKind::Headers));
    }

    #[test]
    fn file_build_phase_scan_order_breaks_ties() {
        // Two phases claiming the same build file: invariant violation the
        // fixed scan order resolves in favor of the earlier kind.
        let mut store = Objects::new();
        store
            .insert(r("H"), HeadersBuildPhase::new(vec![r("B")]))
            .unwrap();
        store
            .insert(r("F"), FrameworksBuildPhase::new(vec![r("B")]))
            .unwrap();
        assert_eq!(store.file_build_phase(&r("B")), Some(PhaseKind::Frameworks));
    }

    // -----------------------------------------------------------------------
    // build_phase_kind / build_phase_label
    // -----------------------------------------------------------------------

    #[test]
    fn build_phase_kind_for_each_phase() {
        let mut store = Objects::new();
        store.insert(r("S"), SourcesBuildPhase::default()).unwrap();
        store
            .insert(r("SS"), ShellScriptBuildPhase::default())
            .unwrap();
        store.insert(r("G"), Group::new("Sources")).unwrap();

        assert_eq!(store.build_phase_kind(&r("S")), Some(PhaseKind::Sources));
        assert_eq!(
            store.build_phase_kind(&r("SS")),
            Some(PhaseKind::ShellScript)
        );
        assert_eq!(store.build_phase_kind(&r("G")), None);
        assert_eq!(store.build_phase_kind(&r("MISSING")), None);
    }

    #[test]
    fn build_phase_label_fixed_kinds() {
        let mut store = Objects::new();
        store.insert(r("S"), SourcesBuildPhase::default()).unwrap();
        store
            .insert(r("F"), FrameworksBuildPhase::default())
            .unwrap();
        store
            .insert(r("R"), ResourcesBuildPhase::default())
            .unwrap();
        store.insert(r("H"), HeadersBuildPhase::default()).unwrap();

        assert_eq!(store.build_phase_label(&r("S")), Some("Sources"));
        assert_eq!(store.build_phase_label(&r("F")), Some("Frameworks"));
        assert_eq!(store.build_phase_label(&r("R")), Some("Resources"));
        assert_eq!(store.build_phase_label(&r("H")), Some("Headers"));
    }

    #[test]
    fn build_phase_label_copy_files_custom_and_default() {
        let mut store = Objects::new();
        store
            .insert(
                r("CP1"),
                CopyFilesBuildPhase::new(vec![], Some("Embed Frameworks".into())),
            )
            .unwrap();
        store
            .insert(r("CP2"), CopyFilesBuildPhase::new(vec![], None))
            .unwrap();

        assert_eq!(store.build_phase_label(&r("CP1")), Some("Embed Frameworks"));
        assert_eq!(store.build_phase_label(&r("CP2")), Some("CopyFiles"));
    }

    #[test]
    fn build_phase_label_shell_script_custom_and_default() {
        let mut store = Objects::new();
        store
            .insert(r("SS1"), ShellScriptBuildPhase::new(Some("Run Lint".into())))
            .unwrap();
        store
            .insert(r("SS2"), ShellScriptBuildPhase::new(None))
            .unwrap();

        assert_eq!(store.build_phase_label(&r("SS1")), Some("Run Lint"));
        assert_eq!(store.build_phase_label(&r("SS2")), Some("ShellScript"));
    }

    #[test]
    fn build_phase_label_none_for_non_phases() {
        let mut store = Objects::new();
        store.insert(r("G"), Group::new("Sources")).unwrap();
        assert_eq!(store.build_phase_label(&r("G")), None);
        assert_eq!(store.build_phase_label(&r("MISSING")), None);
    }

    // -----------------------------------------------------------------------
    // file_build_phase_label
    // -----------------------------------------------------------------------

    #[test]
    fn file_build_phase_label_uses_owning_copy_files_instance() {
        // Two coexisting copy-files phases with distinct custom names:
        // the label must come from the instance owning the build file.
        let mut store = Objects::new();
        store
            .insert(
                r("CP1"),
                CopyFilesBuildPhase::new(vec![r("B1")], Some("Embed Frameworks".into())),
            )
            .unwrap();
        store
            .insert(
                r("CP2"),
                CopyFilesBuildPhase::new(vec![r("B2")], Some("Copy Plugins".into())),
            )
            .unwrap();
        store
            .insert(r("CP3"), CopyFilesBuildPhase::new(vec![r("B3")], None))
            .unwrap();

        assert_eq!(
            store.file_build_phase_label(&r("B1")),
            Some("Embed Frameworks")
        );
        assert_eq!(store.file_build_phase_label(&r("B2")), Some("Copy Plugins"));
        assert_eq!(store.file_build_phase_label(&r("B3")), Some("CopyFiles"));
    }

    #[test]
    fn file_build_phase_label_fixed_for_other_kinds() {
        let mut store = Objects::new();
        store
            .insert(r("S"), SourcesBuildPhase::new(vec![r("B")]))
            .unwrap();
        assert_eq!(store.file_build_phase_label(&r("B")), Some("Sources"));
        assert_eq!(store.file_build_phase_label(&r("UNOWNED")), None);
    }

    // -----------------------------------------------------------------------
    // End to end
    // -----------------------------------------------------------------------

    #[test]
    fn resolves_a_minimal_sources_graph() {
        let mut store = Objects::new();
        store
            .insert(r("FR"), FileReference::from_path("main.c"))
            .unwrap();
        store.insert(r("B"), BuildFile::new(r("FR"))).unwrap();
        store
            .insert(r("S"), SourcesBuildPhase::new(vec![r("B")]))
            .unwrap();

        assert_eq!(store.file_name(&r("FR")), Some("main.c"));
        assert_eq!(store.build_file_name(&r("B")), Some("main.c"));
        assert_eq!(store.file_build_phase(&r("B")), Some(PhaseKind::Sources));
        assert_eq!(store.file_build_phase_label(&r("B")), Some("Sources"));
    }
}
