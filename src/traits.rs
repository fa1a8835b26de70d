use std::io::{
    self,
    Write,
};

use crate::Lines;

// =============================================================================
// Named
// =============================================================================

pub trait Named {
    fn name(&self) -> &str;
}

// =============================================================================
// Size
// =============================================================================

/// Size in kilobytes. Directories recompute theirs from their children on
/// every call, saturating at `u64::MAX`.
pub trait Size {
    fn size(&self) -> u64;
}

// =============================================================================
// Render
// =============================================================================

pub trait Render {
    /// Lines describing this node and, for directories, every descendant in
    /// pre-order. Children sit two columns deeper than their parent.
    fn lines(&self, indent: usize) -> Lines<'_>;

    fn write_to<W>(&self, indent: usize, mut writer: W) -> io::Result<()>
    where
        W: Write,
    {
        self.lines(indent)
            .try_for_each(|line| writeln!(writer, "{line}"))
    }

    fn display(&self, indent: usize) {
        for line in self.lines(indent) {
            println!("{line}");
        }
    }
}
