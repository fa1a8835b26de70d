use std::path::{
    Component,
    Path,
};

use miette::Diagnostic;
use thiserror::Error;

// GetError

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum GetError {
    #[diagnostic(code(directory::get), help("check the contents of the directory"))]
    #[error("path indicated a directory, but file '{name}' was found")]
    UnexpectedFile { name: String },
    #[diagnostic(code(directory::get), help("paths are resolved downwards only"))]
    #[error("path contained a parent component, which is not supported")]
    UnexpectedParent,
    #[diagnostic(code(directory::get), help("use a relative or '/'-rooted path"))]
    #[error("path contained a prefix, which is not supported")]
    UnexpectedPrefix,
}

// Names

/// Child names along `path`. Root and current-directory components name the
/// directory the lookup starts from, so they contribute nothing.
pub(crate) fn names(path: &Path) -> Result<Vec<String>, GetError> {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir | Component::RootDir => None,
            Component::ParentDir => Some(Err(GetError::UnexpectedParent)),
            Component::Prefix(_) => Some(Err(GetError::UnexpectedPrefix)),
            Component::Normal(name) => Some(Ok(name.to_string_lossy().into_owned())),
        })
        .collect()
}
