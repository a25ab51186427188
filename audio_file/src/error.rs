use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Which end of the pipeline a handle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Source,
    Destination,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Destination => write!(f, "destination"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot open file: {}", .path.display())]
    Open { path: PathBuf, source: hound::Error },
    #[error("Unsupported output format for file: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("Cannot create file: {}", .path.display())]
    Create { path: PathBuf, source: hound::Error },
    #[error("Error reading from file: {}", .path.display())]
    Read { path: PathBuf, source: hound::Error },
    #[error("Error writing to file: {}", .path.display())]
    Write { path: PathBuf, source: hound::Error },
    #[error("Failed to close {role} file: {}", .path.display())]
    Close {
        role: Role,
        path: PathBuf,
        source: hound::Error,
    },
    #[error("Failed to clean up codec: {open} file handle(s) still open")]
    Teardown { open: usize },
}
