use crate::{
    Directory,
    File,
    Lines,
    Named,
    Render,
    Size,
};

// =============================================================================
// Node
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

// -----------------------------------------------------------------------------
// Node - Standard Traits
// -----------------------------------------------------------------------------

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Self::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

// -----------------------------------------------------------------------------
// Node - Library Traits
// -----------------------------------------------------------------------------

impl Named for Node {
    fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.name(),
        }
    }
}

impl Size for Node {
    fn size(&self) -> u64 {
        match self {
            Self::Directory(dir) => dir.size(),
            Self::File(file) => file.size(),
        }
    }
}

impl Render for Node {
    fn lines(&self, indent: usize) -> Lines<'_> {
        Lines::new(indent, Entry::from(self))
    }
}

// =============================================================================
// Entry
// =============================================================================

/// A borrowed view of a node, used where the node may also be a bare
/// [`Directory`] or [`File`] rather than one held in a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry<'a> {
    Directory(&'a Directory),
    File(&'a File),
}

// -----------------------------------------------------------------------------
// Entry - Standard Traits
// -----------------------------------------------------------------------------

impl<'a> From<&'a Node> for Entry<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Directory(dir) => Self::Directory(dir),
            Node::File(file) => Self::File(file),
        }
    }
}

// -----------------------------------------------------------------------------
// Entry - Library Traits
// -----------------------------------------------------------------------------

impl Named for Entry<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.name(),
        }
    }
}

impl Size for Entry<'_> {
    fn size(&self) -> u64 {
        match self {
            Self::Directory(dir) => dir.size(),
            Self::File(file) => file.size(),
        }
    }
}

impl Render for Entry<'_> {
    fn lines(&self, indent: usize) -> Lines<'_> {
        Lines::new(indent, *self)
    }
}
