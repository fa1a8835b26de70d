use std::{
    path::Path,
    sync::Arc,
};

use async_lock::{
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};
use futures::FutureExt;

use crate::{
    Directory,
    FileSystemError,
    Node,
    Render,
    Size,
};

// =============================================================================
// FileSystem
// =============================================================================

/// A cloneable, lock-guarded handle to a tree, for callers that share one
/// tree between tasks. Every operation holds the lock for its full duration,
/// so sizes and renders always see a consistent set of children.
#[derive(Debug)]
pub struct FileSystem {
    root: Arc<RwLock<Directory>>,
}

// -----------------------------------------------------------------------------
// FileSystem - Traits
// -----------------------------------------------------------------------------

impl Clone for FileSystem {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// FileSystem - Methods
// -----------------------------------------------------------------------------

// FileSystem - Methods - New

impl FileSystem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_root(Directory::new(name))
    }

    #[must_use]
    pub fn from_root(root: Directory) -> Self {
        Self {
            root: Arc::new(RwLock::new(root)),
        }
    }
}

// FileSystem - Methods - Read/Write

impl FileSystem {
    pub async fn read<T, R>(&self, f: R) -> T
    where
        R: FnOnce(RwLockReadGuard<'_, Directory>) -> T,
    {
        self.root.read().map(f).await
    }

    pub async fn write<T, W>(&self, f: W) -> T
    where
        W: FnOnce(RwLockWriteGuard<'_, Directory>) -> T,
    {
        self.root.write().map(f).await
    }
}

// FileSystem - Methods - Children

impl FileSystem {
    /// Adds `child` to the directory at `path`.
    pub async fn add<P>(&self, path: P, child: impl Into<Node>) -> Result<(), FileSystemError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let child = child.into();

        self.write(|mut root| -> Result<(), FileSystemError> {
            let dir = root
                .get_dir_mut(path)?
                .ok_or_else(|| FileSystemError::DirectoryNotFound {
                    path: path.to_path_buf(),
                })?;

            Ok(dir.add(child)?)
        })
        .await
    }

    /// Removes the child called `name` from the directory at `path`.
    pub async fn remove<P>(&self, path: P, name: &str) -> Result<Node, FileSystemError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        self.write(|mut root| -> Result<Node, FileSystemError> {
            let dir = root
                .get_dir_mut(path)?
                .ok_or_else(|| FileSystemError::DirectoryNotFound {
                    path: path.to_path_buf(),
                })?;

            Ok(dir.remove(name)?)
        })
        .await
    }

    pub async fn contains<P>(&self, path: P, name: &str) -> Result<bool, FileSystemError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        self.read(|root| -> Result<bool, FileSystemError> {
            let dir = root
                .get_dir(path)?
                .ok_or_else(|| FileSystemError::DirectoryNotFound {
                    path: path.to_path_buf(),
                })?;

            Ok(dir.contains(name))
        })
        .await
    }
}

// FileSystem - Methods - Size/Render

impl FileSystem {
    pub async fn size(&self) -> u64 {
        self.read(|root| root.size()).await
    }

    pub async fn render(&self) -> Vec<String> {
        self.read(|root| root.lines(0).map(|line| line.to_string()).collect())
            .await
    }
}
