use std::io::{
    self,
    Write,
};

use clap::Parser as _;
use fstree::{
    Directory,
    File,
    Render,
    Total,
};
use miette::IntoDiagnostic;
use tracing::debug;

use crate::cli::Cli;

mod cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    let root = sample()?;

    run(&root, io::stdout().lock()).into_diagnostic()
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn sample() -> miette::Result<Directory> {
    let mut root = Directory::new("root");
    let mut docs = Directory::new("Documents");
    let mut pics = Directory::new("Pictures");

    docs.add(File::new("file1.txt", 10))?;
    docs.add(File::new("file2.txt", 20))?;
    pics.add(File::new("pic1.jpg", 50))?;
    pics.add(File::new("pic2.jpg", 100))?;

    root.add(docs)?;
    root.add(pics)?;

    Ok(root)
}

fn run<W>(root: &Directory, mut out: W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "File System Structure:")?;
    root.write_to(0, &mut out)?;
    writeln!(out)?;
    writeln!(out, "{}", Total(root))
}
