use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    GetError,
    Node,
};

// =============================================================================

// Directory Errors

// -----------------------------------------------------------------------------

// Directory Errors - Add

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Diagnostic, Error)]
pub enum AddError {
    #[diagnostic(
        code(directory::add),
        help("remove the existing component first, or choose another name")
    )]
    #[error("Component {name} already exists in {directory}")]
    DuplicateName {
        name: String,
        directory: String,
        rejected: Node,
    },
}

// -----------------------------------------------------------------------------

// Directory Errors - Remove

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Diagnostic, Error)]
pub enum RemoveError {
    #[diagnostic(code(directory::remove), help("check the contents of the directory"))]
    #[error("Component {name} not found in {directory}")]
    NotFound { name: String, directory: String },
}

// =============================================================================

// FileSystem Errors

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Diagnostic, Error)]
pub enum FileSystemError {
    #[diagnostic(code(file_system::path), help("check that every component of the path exists"))]
    #[error("no directory found at '{}'", .path.display())]
    DirectoryNotFound { path: PathBuf },
    #[diagnostic(code(file_system::get))]
    #[error(transparent)]
    Get(#[from] GetError),
    #[diagnostic(code(file_system::add))]
    #[error(transparent)]
    Add(#[from] AddError),
    #[diagnostic(code(file_system::remove))]
    #[error(transparent)]
    Remove(#[from] RemoveError),
}
