//! Destinations for exported files.
//!
//! Exporters produce a file name and content; a [`SaveTarget`] decides where
//! they go. [`DirectoryTarget`] writes to disk, [`MemoryTarget`] keeps files
//! in memory (tests, and the WASM bindings where the browser does the download).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Somewhere an exported file can be saved.
pub trait SaveTarget {
    /// Persist `content` under `name`.
    fn save(&mut self, name: &str, content: &[u8]) -> io::Result<()>;
}

/// Saves files into a directory.
///
/// Path separators in the file name are replaced, so a story titled
/// `"Part 1/2"` is saved as `Part 1_2.html` inside the directory.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a file named `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(sanitize_file_name(name))
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, name: &str, content: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(name), content)
    }
}

/// Keeps saved files in memory, in save order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    files: Vec<(String, Vec<u8>)>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    /// Content of the most recent file saved under `name`, as text.
    pub fn get(&self, name: &str) -> Option<String> {
        self.files
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, c)| String::from_utf8_lossy(c).into_owned())
    }
}

impl SaveTarget for MemoryTarget {
    fn save(&mut self, name: &str, content: &[u8]) -> io::Result<()> {
        self.files.push((name.to_string(), content.to_vec()));
        Ok(())
    }
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_target_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut target = DirectoryTarget::new(dir.path());
        target.save("Cave.json", b"{}").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("Cave.json")).unwrap(), "{}");
    }

    #[test]
    fn test_directory_target_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let mut target = DirectoryTarget::new(&nested);
        target.save("a.html", b"x").unwrap();
        assert!(nested.join("a.html").exists());
    }

    #[test]
    fn test_separators_replaced() {
        let target = DirectoryTarget::new("/tmp/out");
        assert_eq!(
            target.path_for("Part 1/2.html"),
            PathBuf::from("/tmp/out/Part 1_2.html")
        );
    }

    #[test]
    fn test_memory_target_latest_wins() {
        let mut target = MemoryTarget::new();
        target.save("a", b"1").unwrap();
        target.save("a", b"2").unwrap();
        assert_eq!(target.get("a").as_deref(), Some("2"));
        assert_eq!(target.files().len(), 2);
    }
}
