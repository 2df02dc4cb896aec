use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of build phase in a project graph.
///
/// The first five kinds own an ordered list of build-file references;
/// `ShellScript` carries no file membership at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    /// Compile sources phase.
    Sources,
    /// Link frameworks phase.
    Frameworks,
    /// Copy resources phase.
    Resources,
    /// Copy-files phase; instances may carry a custom display name.
    CopyFiles,
    /// Run-script phase; instances may carry a custom display name.
    ShellScript,
    /// Copy headers phase.
    Headers,
}

impl PhaseKind {
    /// The display label for this kind.
    ///
    /// For `CopyFiles` and `ShellScript` this is the default label used when
    /// a phase instance has no custom name of its own.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sources => "Sources",
            Self::Frameworks => "Frameworks",
            Self::Resources => "Resources",
            Self::CopyFiles => "CopyFiles",
            Self::ShellScript => "ShellScript",
            Self::Headers => "Headers",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
