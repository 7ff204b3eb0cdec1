//! File system placer implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::PlacerError;
use super::traits::Placer;
use super::types::PlacedFile;
use crate::metrics::{FILES_PLACED, PLACEMENT_FAILURES};
use crate::rules::RuleSet;

/// File system based placer.
///
/// Holds the upload root and an immutable rule set, both fixed at
/// construction. Staged files live directly under the upload root; placement
/// moves them into `<root>/<Category>/`.
///
/// Collision handling probes the directory for a free name and then writes
/// or renames, without locking. Two concurrent requests for the same name
/// can race between the probe and the write; this matches the original
/// check-then-act behavior and is an accepted limitation.
pub struct FsPlacer {
    upload_root: PathBuf,
    rules: RuleSet,
}

impl FsPlacer {
    /// Creates a placer rooted at `upload_root` with the given rules.
    pub fn new(upload_root: impl Into<PathBuf>, rules: RuleSet) -> Self {
        Self {
            upload_root: upload_root.into(),
            rules,
        }
    }

    /// Creates a placer with the built-in rule table.
    pub fn with_defaults(upload_root: impl Into<PathBuf>) -> Self {
        Self::new(upload_root, RuleSet::default())
    }

    pub fn upload_root(&self) -> &Path {
        &self.upload_root
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Splits a file name into stem and suffix, keeping the dot with the
    /// suffix. A leading dot is part of the stem, so `.bashrc` has no
    /// suffix, and only the last extension counts: `a.tar.gz` -> (`a.tar`,
    /// `.gz`).
    fn split_name(file_name: &str) -> (&str, &str) {
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name.split_at(idx),
            _ => (file_name, ""),
        }
    }

    /// Finds a free path for `file_name` inside `dir`, appending ` (N)`
    /// before the suffix until a name is unused.
    fn collision_free(dir: &Path, file_name: &str) -> PathBuf {
        let candidate = dir.join(file_name);
        if !candidate.exists() {
            return candidate;
        }

        let (stem, suffix) = Self::split_name(file_name);
        let mut i = 1u32;
        loop {
            let candidate = dir.join(format!("{} ({}){}", stem, i, suffix));
            if !candidate.exists() {
                return candidate;
            }
            i += 1;
        }
    }

    /// Path of a placed file relative to the server working directory:
    /// the upload root's directory name joined with category and file name.
    fn stored_path(&self, category: &str, file_name: &str) -> PathBuf {
        self.upload_root
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(category)
            .join(file_name)
    }
}

#[async_trait]
impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    async fn stage(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, PlacerError> {
        fs::create_dir_all(&self.upload_root).await.map_err(|e| {
            PlacerError::DirectoryCreationFailed {
                path: self.upload_root.clone(),
                source: e,
            }
        })?;

        let staged = Self::collision_free(&self.upload_root, file_name);
        fs::write(&staged, data)
            .await
            .map_err(|e| PlacerError::StageFailed {
                path: staged.clone(),
                source: e,
            })?;

        debug!("Staged upload at {}", staged.display());
        Ok(staged)
    }

    async fn place(&self, staged: &Path) -> Result<PlacedFile, PlacerError> {
        if !staged.exists() {
            return Err(PlacerError::SourceNotFound {
                path: staged.to_path_buf(),
            });
        }

        let category = self.rules.category_for(staged).to_string();
        let target_dir = self.upload_root.join(&category);
        fs::create_dir_all(&target_dir).await.map_err(|e| {
            PlacerError::DirectoryCreationFailed {
                path: target_dir.clone(),
                source: e,
            }
        })?;

        let file_name = staged
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| PlacerError::SourceNotFound {
                path: staged.to_path_buf(),
            })?;

        let destination = Self::collision_free(&target_dir, &file_name);
        if let Err(e) = fs::rename(staged, &destination).await {
            PLACEMENT_FAILURES.inc();
            return Err(PlacerError::move_failed(
                staged.to_path_buf(),
                destination,
                e,
            ));
        }

        debug!(
            "Placed {} -> {} (category: {})",
            staged.display(),
            destination.display(),
            category
        );
        FILES_PLACED.with_label_values(&[&category]).inc();

        let final_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or(file_name);

        Ok(PlacedFile {
            stored: self.stored_path(&category, &final_name),
            category,
        })
    }
}
