// Count

pub trait Count {
    fn count(&self) -> usize;

    fn count_dir(&self) -> usize;

    fn count_file(&self) -> usize;
}
