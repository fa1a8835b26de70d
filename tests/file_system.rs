use fstree::{
    AddError,
    Count,
    Directory,
    File,
    FileSystem,
    FileSystemError,
    Named,
    Node,
    RemoveError,
    Render,
    Size,
    Total,
};

fn documents() -> anyhow::Result<Directory> {
    let mut docs = Directory::new("Documents");

    docs.add(File::new("file1.txt", 10))?;
    docs.add(File::new("file2.txt", 20))?;

    Ok(docs)
}

fn pictures() -> anyhow::Result<Directory> {
    let mut pics = Directory::new("Pictures");

    pics.add(File::new("pic1.jpg", 50))?;
    pics.add(File::new("pic2.jpg", 100))?;

    Ok(pics)
}

fn root() -> anyhow::Result<Directory> {
    let mut root = Directory::new("root");

    root.add(documents()?)?;
    root.add(pictures()?)?;

    Ok(root)
}

#[test]
fn sizes_aggregate() -> anyhow::Result<()> {
    assert_eq!(documents()?.size(), 30);
    assert_eq!(pictures()?.size(), 150);
    assert_eq!(root()?.size(), 180);
    assert_eq!(Directory::new("empty").size(), 0);

    Ok(())
}

#[test]
fn size_is_sum_of_children_at_depth() -> anyhow::Result<()> {
    let mut current = Directory::new("level-0");

    current.add(File::new("leaf", 1))?;

    for depth in 1..=5 {
        let mut parent = Directory::new(format!("level-{depth}"));

        parent.add(current)?;
        parent.add(File::new("leaf", 1))?;
        current = parent;
    }

    let sum: u64 = current.children().iter().map(Size::size).sum();

    assert_eq!(current.size(), sum);
    assert_eq!(current.size(), 6);

    Ok(())
}

#[test]
fn duplicate_add_leaves_root_unchanged() -> anyhow::Result<()> {
    let mut root = root()?;
    let count = root.count();
    let docs_again = Directory::new("Documents");

    match root.add(docs_again) {
        Err(AddError::DuplicateName { rejected, .. }) => {
            assert_eq!(rejected.name(), "Documents");
            assert_eq!(rejected.size(), 0);
        }
        Ok(()) => panic!("duplicate was added"),
    }

    assert_eq!(root.count(), count);
    assert_eq!(root.size(), 180);

    Ok(())
}

#[test]
fn remove_releases_subtree() -> anyhow::Result<()> {
    let mut root = root()?;
    let removed = root.remove("Pictures")?;

    assert!(!root.contains("Pictures"));
    assert_eq!(root.size(), 30);
    assert!(matches!(&removed, Node::Directory(dir) if dir.count_file() == 2));
    assert_eq!(removed.size(), 150);

    Ok(())
}

#[test]
fn remove_missing_reports_not_found() -> anyhow::Result<()> {
    let mut docs = documents()?;

    match docs.remove("file3.txt") {
        Err(RemoveError::NotFound { name, directory }) => {
            assert_eq!(name, "file3.txt");
            assert_eq!(directory, "Documents");
        }
        Ok(node) => panic!("unexpectedly removed {node:?}"),
    }

    assert_eq!(docs.count(), 2);

    Ok(())
}

#[test]
fn remove_then_size() -> anyhow::Result<()> {
    let mut docs = documents()?;

    docs.remove("file1.txt")?;

    assert_eq!(docs.size(), 20);

    Ok(())
}

#[test]
fn display_lines() -> anyhow::Result<()> {
    let root = root()?;
    let lines: Vec<String> = root.lines(0).map(|line| line.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "Directory: root",
            "  Directory: Documents",
            "    File: file1.txt (10 KB)",
            "    File: file2.txt (20 KB)",
            "  Directory: Pictures",
            "    File: pic1.jpg (50 KB)",
            "    File: pic2.jpg (100 KB)",
        ]
    );
    assert_eq!(Total(&root).to_string(), "Total Size of 'root': 180 KB");

    Ok(())
}

#[test]
fn get_by_path() -> anyhow::Result<()> {
    let root = root()?;
    let pic = root.get("/Pictures/pic2.jpg")?;

    assert_eq!(pic.map(|entry| entry.size()), Some(100));
    assert!(root.get_dir("Documents")?.is_some());

    Ok(())
}

#[tokio::test]
async fn shared_file_system() -> anyhow::Result<()> {
    let fs = FileSystem::from_root(root()?);

    fs.add("Documents", File::new("file3.txt", 5)).await?;

    assert_eq!(fs.size().await, 185);
    assert!(fs.contains("/Documents", "file3.txt").await?);

    let removed = fs.remove("/", "Pictures").await?;

    assert_eq!(removed.name(), "Pictures");
    assert_eq!(fs.size().await, 35);

    let result = fs.remove("/", "Pictures").await;

    assert!(matches!(
        result,
        Err(FileSystemError::Remove(RemoveError::NotFound { .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn concurrent_adds() -> anyhow::Result<()> {
    let fs = FileSystem::new("root");
    let handles: Vec<_> = (0..8_u64)
        .map(|n| {
            let fs = fs.clone();

            tokio::spawn(async move { fs.add("/", File::new(format!("file-{n}"), n)).await })
        })
        .collect();

    for handle in handles {
        handle.await??;
    }

    assert_eq!(fs.size().await, (0..8).sum::<u64>());
    assert_eq!(fs.read(|root| root.count()).await, 8);

    Ok(())
}
