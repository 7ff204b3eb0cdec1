//! Trait definitions for the placer module.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::error::PlacerError;
use super::types::PlacedFile;

/// A placer that stages incoming uploads and moves them into category
/// folders.
#[async_trait]
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Writes uploaded bytes into the staging area under a collision-free
    /// name and returns the staged path.
    async fn stage(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, PlacerError>;

    /// Moves a staged file into its category folder, renaming on collision,
    /// and returns where it ended up.
    async fn place(&self, staged: &Path) -> Result<PlacedFile, PlacerError>;
}
