use crate::{
    Entry,
    Lines,
    Named,
    Render,
    Size,
};

// =============================================================================
// File
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

// -----------------------------------------------------------------------------
// File - Traits
// -----------------------------------------------------------------------------

impl Named for File {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Size for File {
    fn size(&self) -> u64 {
        self.size
    }
}

impl Render for File {
    fn lines(&self, indent: usize) -> Lines<'_> {
        Lines::new(indent, Entry::File(self))
    }
}

// -----------------------------------------------------------------------------
// File - Methods
// -----------------------------------------------------------------------------

impl File {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}
