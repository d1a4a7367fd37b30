//! Premium before/after photo gallery.
//!
//! Examples are grouped by procedure name and persisted as one blob under
//! [`StorageKey::PremiumExamples`]. The backing store has a hard quota and
//! embedded images dominate it, so writes are bounded twice: each image is
//! capped at [`MAX_IMAGE_BYTES`] decoded bytes, and each group keeps only
//! its most recent examples. The in-memory mirror is committed only after
//! a successful persist, so a failed write never leaves the mirror ahead
//! of the stored state.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;
use visualiza_core::{ExampleId, ImageData, StorageKey, UserId};

use crate::models::premium::{DEFAULT_PREMIUM_PROCEDURE_NAMES, PhotoExample};
use crate::storage::{NamespacedStore, StorageError};

/// Largest accepted decoded image payload, in bytes.
pub const MAX_IMAGE_BYTES: usize = 500_000;

/// Examples kept per procedure group.
pub const MAX_EXAMPLES_PER_PROCEDURE: usize = 5;

/// Reduced per-group bound used when a persist hits the storage quota.
pub const REDUCED_EXAMPLES_PER_PROCEDURE: usize = 3;

/// Errors that can occur when writing to the gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// An image exceeds the decoded-size cap.
    #[error("Image is {0} bytes; the limit is {MAX_IMAGE_BYTES} bytes")]
    ImageTooLarge(usize),

    /// The store rejected the write even after dropping older examples.
    #[error("Local storage is full, even after dropping older examples")]
    StorageFull,

    /// A non-quota storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Per-user photo gallery over the namespaced local store.
pub struct PremiumGallery {
    store: NamespacedStore,
    user_id: UserId,
    examples: HashMap<String, Vec<PhotoExample>>,
    procedures: Vec<String>,
}

impl PremiumGallery {
    /// Load the user's gallery, seeding the standard procedure names when
    /// none are stored yet.
    #[must_use]
    pub fn load(store: NamespacedStore, user_id: UserId) -> Self {
        let examples = store
            .load(StorageKey::PremiumExamples, &user_id)
            .unwrap_or_default();
        let procedures = store
            .load(StorageKey::PremiumProcedures, &user_id)
            .unwrap_or_else(|| {
                DEFAULT_PREMIUM_PROCEDURE_NAMES
                    .iter()
                    .map(|name| (*name).to_owned())
                    .collect()
            });
        Self {
            store,
            user_id,
            examples,
            procedures,
        }
    }

    /// The user's procedure names, in display order.
    #[must_use]
    pub fn procedures(&self) -> &[String] {
        &self.procedures
    }

    /// The stored examples for `procedure`, newest first.
    #[must_use]
    pub fn examples_for(&self, procedure: &str) -> &[PhotoExample] {
        self.examples.get(procedure).map_or(&[], Vec::as_slice)
    }

    /// Add a procedure name to the list.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError` if the name list cannot be persisted.
    pub fn add_procedure(&mut self, name: &str) -> Result<(), GalleryError> {
        if self.procedures.iter().any(|p| p == name) {
            return Ok(());
        }
        let mut candidate = self.procedures.clone();
        candidate.push(name.to_owned());
        self.store
            .save(StorageKey::PremiumProcedures, &self.user_id, &candidate)?;
        self.procedures = candidate;
        Ok(())
    }

    /// Prepend a new example to `procedure`, minting its ID.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::ImageTooLarge` when either image exceeds the
    /// cap (the collection is untouched), or `GalleryError::StorageFull`
    /// when the persist fails at both bounds.
    pub fn add_example(
        &mut self,
        procedure: &str,
        before_image: ImageData,
        after_image: ImageData,
        ml_used: Option<f64>,
        notes: String,
    ) -> Result<ExampleId, GalleryError> {
        check_image(&before_image)?;
        check_image(&after_image)?;

        let example = PhotoExample {
            id: ExampleId::mint(),
            before_image_url: before_image,
            after_image_url: after_image,
            ml_used,
            notes,
        };
        let id = example.id.clone();

        let mut candidate = self.examples.clone();
        candidate
            .entry(procedure.to_owned())
            .or_default()
            .insert(0, example);
        self.persist(candidate)?;
        Ok(id)
    }

    /// Remove the example with `id` from `procedure`.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError` if the persist fails.
    pub fn remove_example(
        &mut self,
        procedure: &str,
        id: &ExampleId,
    ) -> Result<(), GalleryError> {
        let mut candidate = self.examples.clone();
        if let Some(group) = candidate.get_mut(procedure) {
            group.retain(|example| example.id != *id);
        }
        self.persist(candidate)
    }

    /// Persist `candidate` and commit it as the new mirror.
    ///
    /// Every group is truncated to the bound before writing; a quota
    /// failure is retried once at the reduced bound. On failure the mirror
    /// keeps the last persisted state.
    fn persist(
        &mut self,
        mut candidate: HashMap<String, Vec<PhotoExample>>,
    ) -> Result<(), GalleryError> {
        truncate_groups(&mut candidate, MAX_EXAMPLES_PER_PROCEDURE);
        match self
            .store
            .save(StorageKey::PremiumExamples, &self.user_id, &candidate)
        {
            Ok(()) => {
                self.examples = candidate;
                return Ok(());
            }
            Err(StorageError::QuotaExceeded) => {
                warn!(
                    user_id = %self.user_id,
                    "storage quota hit, retrying with reduced gallery bound"
                );
            }
            Err(error) => return Err(error.into()),
        }

        truncate_groups(&mut candidate, REDUCED_EXAMPLES_PER_PROCEDURE);
        match self
            .store
            .save(StorageKey::PremiumExamples, &self.user_id, &candidate)
        {
            Ok(()) => {
                self.examples = candidate;
                Ok(())
            }
            Err(StorageError::QuotaExceeded) => Err(GalleryError::StorageFull),
            Err(error) => Err(error.into()),
        }
    }
}

fn check_image(image: &ImageData) -> Result<(), GalleryError> {
    let len = image.byte_len();
    if len > MAX_IMAGE_BYTES {
        return Err(GalleryError::ImageTooLarge(len));
    }
    Ok(())
}

fn truncate_groups(groups: &mut HashMap<String, Vec<PhotoExample>>, bound: usize) {
    for group in groups.values_mut() {
        group.truncate(bound);
    }
}
