use std::path::{Path, PathBuf};

/// Ordered, append-only list of track paths.
///
/// Entries keep insertion order and duplicates are allowed. The playlist has
/// no cursor of its own; the playback controller owns the current position.
#[derive(Debug, Default)]
pub struct Playlist {
    paths: Vec<PathBuf>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single track path.
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Append several track paths, keeping argument order.
    pub fn extend<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.paths.extend(paths);
    }

    /// Track path at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over all track paths in playlist order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order_and_allows_duplicates() {
        let mut pl = Playlist::new();
        pl.push(PathBuf::from("a.mp3"));
        pl.push(PathBuf::from("b.mp3"));
        pl.push(PathBuf::from("a.mp3"));

        assert_eq!(pl.len(), 3);
        assert_eq!(pl.get(0), Some(Path::new("a.mp3")));
        assert_eq!(pl.get(1), Some(Path::new("b.mp3")));
        assert_eq!(pl.get(2), Some(Path::new("a.mp3")));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut pl = Playlist::new();
        assert!(pl.is_empty());
        assert_eq!(pl.get(0), None);

        pl.push(PathBuf::from("a.mp3"));
        assert_eq!(pl.get(1), None);
        assert_eq!(pl.get(usize::MAX), None);
    }

    #[test]
    fn extend_appends_in_argument_order() {
        let mut pl = Playlist::new();
        pl.push(PathBuf::from("first.flac"));
        pl.extend([PathBuf::from("x.mp3"), PathBuf::from("y.mp3")]);

        let all: Vec<_> = pl.iter().collect();
        assert_eq!(
            all,
            vec![
                Path::new("first.flac"),
                Path::new("x.mp3"),
                Path::new("y.mp3")
            ]
        );
    }
}
