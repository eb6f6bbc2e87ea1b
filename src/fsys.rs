//! Filesystem port.
//!
//! All file and directory access in the generator goes through the [`Fsys`]
//! trait so the mutation pipelines can be unit-tested against [`MemFsys`]
//! without touching the real filesystem. [`OsFsys`] is the production
//! implementation and delegates straight to `std::fs`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Capability interface over the filesystem operations the generator needs.
pub trait Fsys {
    /// Absolute path of the working directory (the target project root).
    fn getwd(&self) -> io::Result<PathBuf>;

    /// Whether `path` names an existing file or directory. A plain
    /// "not found" is `Ok(false)`; any other stat failure propagates.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents from offset zero.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Append to the file, creating it when missing.
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// OS-backed implementation used by the binary.
pub struct OsFsys;

impl Fsys for OsFsys {
    fn getwd(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(contents.as_bytes())
    }
}

/// In-memory test double.
///
/// Stores file contents and created directories in maps; `seed` pre-populates
/// a file (creating its parent directories), `contents` and `has_dir` inspect
/// the state after a pipeline ran.
pub struct MemFsys {
    cwd: PathBuf,
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemFsys {
    pub fn new(cwd: &str) -> Self {
        MemFsys {
            cwd: PathBuf::from(cwd),
            files: RefCell::new(BTreeMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn seed(&self, path: &str, contents: &str) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.to_string());
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(Path::new(path))
    }

    fn insert_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl Fsys for MemFsys {
    fn getwd(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.insert_dirs(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display())))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(contents);
        Ok(())
    }
}
