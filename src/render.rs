use std::fmt::{
    self,
    Display,
    Formatter,
};

use crate::{
    Entry,
    Named,
    Size,
};

const INDENT_STEP: usize = 2;

// =============================================================================
// Line
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub indent: usize,
    pub entry: Entry<'a>,
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indent = self.indent;

        match self.entry {
            Entry::Directory(dir) => write!(f, "{:indent$}Directory: {}", "", dir.name()),
            Entry::File(file) => {
                write!(f, "{:indent$}File: {} ({} KB)", "", file.name(), file.size())
            }
        }
    }
}

// =============================================================================
// Lines
// =============================================================================

/// Pre-order walk over a tree, yielding one [`Line`] per node.
#[derive(Debug)]
pub struct Lines<'a> {
    stack: Vec<Line<'a>>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(indent: usize, entry: Entry<'a>) -> Self {
        Self {
            stack: vec![Line { indent, entry }],
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.stack.pop()?;

        if let Entry::Directory(dir) = line.entry {
            let indent = line.indent + INDENT_STEP;

            // reversed, so the first child is popped first
            self.stack.extend(
                dir.children()
                    .iter()
                    .rev()
                    .map(|child| Line {
                        indent,
                        entry: Entry::from(child),
                    }),
            );
        }

        Some(line)
    }
}

// =============================================================================
// Total
// =============================================================================

/// Summary line for a tree, e.g. `Total Size of 'root': 180 KB`.
#[derive(Debug)]
pub struct Total<'a, N>(pub &'a N)
where
    N: ?Sized;

impl<N> Clone for Total<'_, N>
where
    N: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Total<'_, N> where N: ?Sized {}

impl<N> Display for Total<'_, N>
where
    N: Named + Size + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Total Size of '{}': {} KB", self.0.name(), self.0.size())
    }
}
