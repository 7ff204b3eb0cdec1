//! Placer module for staging uploads and moving them into category folders.
//!
//! This module provides the `Placer` trait and the filesystem implementation
//! used by the upload endpoint. An upload is first staged into the upload
//! root under a collision-free name, then placed: its extension picks a
//! category folder (created on demand), name collisions get a ` (N)` counter
//! appended before the extension, and the staged file is renamed into place.
//!
//! Placement never overwrites a pre-existing file. A failed rename
//! propagates as an error with no retry and no rollback.
//!
//! # Example
//!
//! ```ignore
//! use sortbox_core::placer::{FsPlacer, Placer};
//!
//! let placer = FsPlacer::with_defaults("uploads");
//! let staged = placer.stage("photo.jpg", &bytes).await?;
//! let placed = placer.place(&staged).await?;
//! println!("{} -> {}", placed.category, placed.stored.display());
//! ```

mod error;
mod fs_placer;
mod traits;
mod types;

pub use error::PlacerError;
pub use fs_placer::FsPlacer;
pub use traits::Placer;
pub use types::PlacedFile;
