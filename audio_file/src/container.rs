//! # Container
//!
//! Destination formats are chosen by file extension alone.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    Wav,
}

impl Container {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "wav" | "wave" => Some(Container::Wav),
            _ => None,
        }
    }
}
