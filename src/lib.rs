#![deny(
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    unsafe_code,
    unused
)]
#![deny(
    rust_2018_compatibility,
    rust_2018_idioms
)]
#![deny(
    rust_2021_compatibility,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions
)]
#![deny(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions,
    missing_docs,
    rustdoc::all
)]

//! An in-memory tree of files and directories.
//!
//! Files and directories share one contract ([`Named`], [`Size`], [`Render`]),
//! so client code can display or measure any part of a tree without caring
//! which kind of node it holds. Directories own their children outright.

mod directory;
mod error;
mod file;
mod file_system;
mod node;
mod render;
mod traits;

pub use directory::{
    count::Count,
    get::GetError,
    Directory,
};
pub use error::{
    AddError,
    FileSystemError,
    RemoveError,
};
pub use file::File;
pub use file_system::FileSystem;
pub use node::{
    Entry,
    Node,
};
pub use render::{
    Line,
    Lines,
    Total,
};
pub use traits::{
    Named,
    Render,
    Size,
};
