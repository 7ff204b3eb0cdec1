//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of placing one staged file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Final path relative to the server working directory,
    /// e.g. `uploads/Images/photo.jpg`.
    pub stored: PathBuf,
    /// Category folder the file landed in.
    pub category: String,
}
