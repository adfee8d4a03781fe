use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug)]
pub enum FsError {
    NotFound(EntryKind),
    NotADirectory,
    IsADirectory,
    SourceMissing,
    Io {
        action: &'static str,
        source: std::io::Error,
    },
}

impl FsError {
    fn io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| FsError::Io { action, source }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound(EntryKind::Directory) => write!(f, "Directory not found."),
            FsError::NotFound(EntryKind::File) => write!(f, "File not found."),
            FsError::NotADirectory => write!(f, "not a directory"),
            FsError::IsADirectory => write!(f, "is a directory, not a file"),
            FsError::SourceMissing => write!(f, "source does not exist"),
            FsError::Io { action, source } => write!(f, "Could not {}: {}", action, source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub reverse: bool,
}

/// Filesystem operations behind the verbs. Paths arrive already resolved
/// against the session's current directory.
pub trait FileSystem {
    /// Succeeds only if `target` is an existing directory.
    fn change_dir(&self, target: &Path) -> Result<(), FsError>;
    /// Entry names in directory-iteration order, filtered, then optionally reversed.
    fn list(&self, dir: &Path, options: ListOptions) -> Result<Vec<String>, FsError>;
    fn make_dir(&self, path: &Path) -> Result<(), FsError>;
    fn remove_dir(&self, path: &Path) -> Result<(), FsError>;
    /// Fails if the file already exists.
    fn create_file(&self, path: &Path) -> Result<(), FsError>;
    fn remove_file(&self, path: &Path) -> Result<(), FsError>;
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, FsError>;
    /// Replaces an existing destination file.
    fn move_or_rename(&self, source: &Path, destination: &Path) -> Result<(), FsError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn change_dir(&self, target: &Path) -> Result<(), FsError> {
        let metadata =
            fs::metadata(target).map_err(|_| FsError::NotFound(EntryKind::Directory))?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(FsError::NotADirectory)
        }
    }

    fn list(&self, dir: &Path, options: ListOptions) -> Result<Vec<String>, FsError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(FsError::io("list directory"))? {
            let entry = entry.map_err(FsError::io("list directory"))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if options.show_hidden || !name.starts_with('.') {
                names.push(name);
            }
        }

        if options.reverse {
            names.reverse();
        }
        Ok(names)
    }

    fn make_dir(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(FsError::io("create directory"))
    }

    fn remove_dir(&self, path: &Path) -> Result<(), FsError> {
        let metadata =
            fs::symlink_metadata(path).map_err(|_| FsError::NotFound(EntryKind::Directory))?;
        if !metadata.is_dir() {
            return Err(FsError::NotADirectory);
        }
        fs::remove_dir(path).map_err(FsError::io("remove directory"))
    }

    fn create_file(&self, path: &Path) -> Result<(), FsError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(FsError::io("create file"))
    }

    fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        let metadata =
            fs::symlink_metadata(path).map_err(|_| FsError::NotFound(EntryKind::File))?;
        if metadata.is_dir() {
            return Err(FsError::IsADirectory);
        }
        fs::remove_file(path).map_err(FsError::io("remove file"))
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let file = File::open(path).map_err(FsError::io("read file"))?;
        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(FsError::io("read file"))
    }

    fn move_or_rename(&self, source: &Path, destination: &Path) -> Result<(), FsError> {
        if fs::symlink_metadata(source).is_err() {
            return Err(FsError::SourceMissing);
        }
        fs::rename(source, destination).map_err(FsError::io("move"))
    }
}
