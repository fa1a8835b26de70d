pub mod count;
pub mod get;

use std::path::Path;

use tracing::{
    debug,
    warn,
};

use self::{
    count::Count,
    get::{
        names,
        GetError,
    },
};
use crate::{
    AddError,
    Entry,
    Lines,
    Named,
    Node,
    RemoveError,
    Render,
    Size,
};

// =============================================================================
// Directory
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    name: String,
    children: Vec<Node>,
}

// -----------------------------------------------------------------------------
// Directory - Library Traits
// -----------------------------------------------------------------------------

impl Count for Directory {
    fn count(&self) -> usize {
        self.children.len()
    }

    fn count_dir(&self) -> usize {
        self.count_predicate(|child| matches!(child, Node::Directory(_)))
    }

    fn count_file(&self) -> usize {
        self.count_predicate(|child| matches!(child, Node::File(_)))
    }
}

impl Named for Directory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Render for Directory {
    fn lines(&self, indent: usize) -> Lines<'_> {
        Lines::new(indent, Entry::Directory(self))
    }
}

impl Size for Directory {
    fn size(&self) -> u64 {
        self.children
            .iter()
            .map(Size::size)
            .fold(0, u64::saturating_add)
    }
}

// -----------------------------------------------------------------------------
// Directory - Methods
// -----------------------------------------------------------------------------

// Directory - Methods - Create

impl Directory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}


// Directory - Methods - Children

impl Directory {
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Appends `child` unless a child of the same name is already present, in
    /// which case the rejected node is handed back inside the error.
    pub fn add(&mut self, child: impl Into<Node>) -> Result<(), AddError> {
        let child = child.into();

        if self.contains(child.name()) {
            let err = AddError::DuplicateName {
                name: child.name().to_owned(),
                directory: self.name.clone(),
                rejected: child,
            };

            warn!("{err}");

            return Err(err);
        }

        debug!(directory = %self.name, child = %child.name(), "added");

        self.children.push(child);

        Ok(())
    }

    /// Detaches the child called `name`, returning ownership of it (and of
    /// everything beneath it) to the caller.
    pub fn remove(&mut self, name: &str) -> Result<Node, RemoveError> {
        match self.children.iter().position(|child| child.name() == name) {
            Some(index) => {
                debug!(directory = %self.name, child = %name, "removed");

                Ok(self.children.remove(index))
            }
            _ => {
                let err = RemoveError::NotFound {
                    name: name.to_owned(),
                    directory: self.name.clone(),
                };

                warn!("{err}");

                Err(err)
            }
        }
    }
}



// Directory - Methods - Count

impl Directory {
    fn count_predicate<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Node) -> bool,
    {
        self.children
            .iter()
            .filter(|child| predicate(child))
            .count()
    }
}


// Directory - Methods - Get

impl Directory {
    /// Resolves `path` relative to this directory. An empty path, `/` or `.`
    /// resolve to the directory itself.
    pub fn get<P>(&self, path: P) -> Result<Option<Entry<'_>>, GetError>
    where
        P: AsRef<Path>,
    {
        let mut current = Entry::Directory(self);

        for name in names(path.as_ref())? {
            current = match current {
                Entry::Directory(dir) => match dir.child(&name) {
                    Some(node) => Entry::from(node),
                    _ => return Ok(None),
                },
                Entry::File(file) => {
                    return Err(GetError::UnexpectedFile {
                        name: file.name().to_owned(),
                    })
                }
            };
        }

        Ok(Some(current))
    }

    pub fn get_dir<P>(&self, path: P) -> Result<Option<&Self>, GetError>
    where
        P: AsRef<Path>,
    {
        match self.get(path)? {
            Some(Entry::Directory(dir)) => Ok(Some(dir)),
            Some(Entry::File(file)) => Err(GetError::UnexpectedFile {
                name: file.name().to_owned(),
            }),
            None => Ok(None),
        }
    }

    pub fn get_dir_mut<P>(&mut self, path: P) -> Result<Option<&mut Self>, GetError>
    where
        P: AsRef<Path>,
    {
        let mut current = self;

        for name in names(path.as_ref())? {
            current = match current
                .children
                .iter_mut()
                .find(|child| child.name() == name.as_str())
            {
                Some(Node::Directory(dir)) => dir,
                Some(Node::File(_)) => return Err(GetError::UnexpectedFile { name }),
                None => return Ok(None),
            };
        }

        Ok(Some(current))
    }
}
