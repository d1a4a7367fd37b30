//! Premium client area: unlock flag, promotional procedures, and the
//! WhatsApp share-message builders.

use std::fmt::Write as _;

use tracing::info;
use visualiza_core::{ImageData, ProcedureId, StorageKey, UserId};

use crate::error::{ConsoleError, Result};
use crate::models::premium::PremiumClientProcedure;
use crate::services::gallery::{GalleryError, MAX_IMAGE_BYTES};
use crate::storage::NamespacedStore;

/// Per-user premium client area over the namespaced local store.
pub struct PremiumClientArea {
    store: NamespacedStore,
    user_id: UserId,
    unlocked: bool,
    procedures: Vec<PremiumClientProcedure>,
}

impl PremiumClientArea {
    /// Load the user's premium client data. Missing or malformed blobs
    /// start the area locked and empty.
    #[must_use]
    pub fn load(store: NamespacedStore, user_id: UserId) -> Self {
        let unlocked = store
            .load(StorageKey::PremiumClientUnlocked, &user_id)
            .unwrap_or(false);
        let procedures = store
            .load(StorageKey::PremiumClientProcedures, &user_id)
            .unwrap_or_default();
        Self {
            store,
            user_id,
            unlocked,
            procedures,
        }
    }

    /// Whether the area has been unlocked for this user.
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Unlock the area and persist the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    pub fn unlock(&mut self) -> Result<()> {
        self.store
            .save(StorageKey::PremiumClientUnlocked, &self.user_id, &true)?;
        self.unlocked = true;
        info!(user_id = %self.user_id, "premium client area unlocked");
        Ok(())
    }

    /// The user's promotional procedures, oldest first.
    #[must_use]
    pub fn procedures(&self) -> &[PremiumClientProcedure] {
        &self.procedures
    }

    /// Add a promotional procedure. The name is stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` when name or discount is blank,
    /// a gallery error when an image exceeds the cap, or a storage error.
    #[allow(clippy::too_many_arguments)]
    pub fn add_procedure(
        &mut self,
        name: &str,
        discount: &str,
        description: String,
        before_image: Option<ImageData>,
        after_image: Option<ImageData>,
        ml_used: Option<f64>,
        notes: Option<String>,
    ) -> Result<ProcedureId> {
        if name.trim().is_empty() {
            return Err(ConsoleError::missing_field("name"));
        }
        if discount.trim().is_empty() {
            return Err(ConsoleError::missing_field("discount"));
        }
        for image in before_image.iter().chain(after_image.iter()) {
            let len = image.byte_len();
            if len > MAX_IMAGE_BYTES {
                return Err(GalleryError::ImageTooLarge(len).into());
            }
        }

        let procedure = PremiumClientProcedure {
            id: ProcedureId::mint(),
            name: name.trim().to_uppercase(),
            discount: discount.trim().to_owned(),
            description,
            before_image_url: before_image,
            after_image_url: after_image,
            ml_used,
            notes,
        };
        let id = procedure.id.clone();

        let mut candidate = self.procedures.clone();
        candidate.push(procedure);
        self.store
            .save(StorageKey::PremiumClientProcedures, &self.user_id, &candidate)?;
        self.procedures = candidate;
        Ok(id)
    }

    /// Remove the promotional procedure with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted.
    pub fn remove_procedure(&mut self, id: &ProcedureId) -> Result<()> {
        let mut candidate = self.procedures.clone();
        candidate.retain(|procedure| procedure.id != *id);
        self.store
            .save(StorageKey::PremiumClientProcedures, &self.user_id, &candidate)?;
        self.procedures = candidate;
        Ok(())
    }
}

/// WhatsApp message offering one promotional procedure to a client.
#[must_use]
pub fn offer_message(procedure: &PremiumClientProcedure) -> String {
    let mut message = format!(
        "🎁 OFERTA EXCLUSIVA PARA VOCÊ! 🎁\n\n✨ {}\n💰 Desconto: {}\n\n",
        procedure.name, procedure.discount
    );
    if !procedure.description.is_empty() {
        let _ = write!(message, "📝 {}\n\n", procedure.description);
    }
    if let Some(ml) = procedure.ml_used {
        let _ = writeln!(message, "💉 Quantidade: {ml} ML");
    }
    if let Some(notes) = &procedure.notes {
        let _ = write!(message, "\n📌 {notes}\n");
    }
    message.push_str("\n🌟 Aproveite esta promoção exclusiva!\n\nEnviado com carinho pela sua biomédica! 💜");
    message
}

/// WhatsApp message listing premium recommendations for an esthetician.
#[must_use]
pub fn recommendations_message(names: &[String]) -> String {
    let list = names
        .iter()
        .map(|name| format!("• {name}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("🌟 RECOMENDAÇÕES PREMIUM 🌟\n\n{list}\n\nGostaria de agendar uma avaliação!")
}
