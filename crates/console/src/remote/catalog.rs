//! Procedure catalog records.

use serde_json::json;
use tracing::info;
use visualiza_core::{ExampleId, ProcedureId, UserId};

use crate::models::catalog::{
    DEFAULT_PREMIUM_PROCEDURES, DEFAULT_PROCEDURES, NewPremiumProcedure, NewProcedure,
    NewProcedureExample, PremiumProcedure, Procedure, ProcedureExample,
};
use crate::remote::{Query, RecordStoreClient, RecordStoreError};

const PROCEDURES: &str = "procedures";
const EXAMPLES: &str = "procedure_examples";
const PREMIUM_PROCEDURES: &str = "premium_procedures";

/// Repository for catalog procedures.
pub struct ProcedureRepository<'a> {
    records: &'a RecordStoreClient,
}

impl<'a> ProcedureRepository<'a> {
    #[must_use]
    pub const fn new(records: &'a RecordStoreClient) -> Self {
        Self { records }
    }

    /// List the catalog, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Procedure>, RecordStoreError> {
        self.records
            .select(PROCEDURES, &Query::new().order_asc("created_at"))
            .await
    }

    /// List the catalog, seeding the standard procedures under `user_id`
    /// when the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the seeding insert fails.
    pub async fn list_or_seed(&self, user_id: &UserId) -> Result<Vec<Procedure>, RecordStoreError> {
        let existing = self.list().await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        info!(user_id = %user_id, "seeding default procedure catalog");
        let rows: Vec<NewProcedure> = DEFAULT_PROCEDURES
            .iter()
            .map(|(name, description)| NewProcedure {
                user_id: user_id.clone(),
                name: (*name).to_owned(),
                description: Some((*description).to_owned()),
            })
            .collect();
        self.records.insert(PROCEDURES, &rows).await
    }

    /// Add a procedure to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, row: NewProcedure) -> Result<Procedure, RecordStoreError> {
        let created: Vec<Procedure> = self.records.insert(PROCEDURES, &[row]).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Parse("insert returned no representation".to_owned()))
    }

    /// Rename or re-describe a procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(
        &self,
        id: &ProcedureId,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), RecordStoreError> {
        self.records
            .update(
                PROCEDURES,
                &json!({ "name": name, "description": description }),
                &Query::new().eq("id", id),
            )
            .await
    }

    /// Remove a procedure and its examples.
    ///
    /// # Errors
    ///
    /// Returns an error if either delete fails.
    pub async fn delete(&self, id: &ProcedureId) -> Result<(), RecordStoreError> {
        self.records
            .delete(EXAMPLES, &Query::new().eq("procedure_id", id))
            .await?;
        self.records
            .delete(PROCEDURES, &Query::new().eq("id", id))
            .await
    }
}

/// Repository for before/after examples on catalog procedures.
pub struct ExampleRepository<'a> {
    records: &'a RecordStoreClient,
}

impl<'a> ExampleRepository<'a> {
    #[must_use]
    pub const fn new(records: &'a RecordStoreClient) -> Self {
        Self { records }
    }

    /// List a user's examples for one procedure, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_for(
        &self,
        procedure_id: &ProcedureId,
        user_id: &UserId,
    ) -> Result<Vec<ProcedureExample>, RecordStoreError> {
        self.records
            .select(
                EXAMPLES,
                &Query::new()
                    .eq("procedure_id", procedure_id)
                    .eq("user_id", user_id)
                    .order_desc("created_at"),
            )
            .await
    }

    /// Attach an example to a procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(
        &self,
        row: NewProcedureExample,
    ) -> Result<ProcedureExample, RecordStoreError> {
        let created: Vec<ProcedureExample> = self.records.insert(EXAMPLES, &[row]).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Parse("insert returned no representation".to_owned()))
    }

    /// Remove one of the user's examples.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(
        &self,
        id: &ExampleId,
        user_id: &UserId,
    ) -> Result<(), RecordStoreError> {
        self.records
            .delete(
                EXAMPLES,
                &Query::new().eq("id", id).eq("user_id", user_id),
            )
            .await
    }
}

/// Repository for premium recommendation procedures.
pub struct PremiumProcedureRepository<'a> {
    records: &'a RecordStoreClient,
}

impl<'a> PremiumProcedureRepository<'a> {
    #[must_use]
    pub const fn new(records: &'a RecordStoreClient) -> Self {
        Self { records }
    }

    /// List a user's premium procedures, oldest first, seeding the standard
    /// set when the user has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the seeding insert fails.
    pub async fn list_or_seed(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PremiumProcedure>, RecordStoreError> {
        let existing: Vec<PremiumProcedure> = self
            .records
            .select(
                PREMIUM_PROCEDURES,
                &Query::new().eq("user_id", user_id).order_asc("created_at"),
            )
            .await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        info!(user_id = %user_id, "seeding default premium procedures");
        let rows: Vec<NewPremiumProcedure> = DEFAULT_PREMIUM_PROCEDURES
            .iter()
            .map(|(name, description)| NewPremiumProcedure {
                user_id: user_id.clone(),
                name: (*name).to_owned(),
                description: Some((*description).to_owned()),
            })
            .collect();
        self.records.insert(PREMIUM_PROCEDURES, &rows).await
    }

    /// Add a premium procedure for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(
        &self,
        row: NewPremiumProcedure,
    ) -> Result<PremiumProcedure, RecordStoreError> {
        let created: Vec<PremiumProcedure> =
            self.records.insert(PREMIUM_PROCEDURES, &[row]).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Parse("insert returned no representation".to_owned()))
    }

    /// Rename or re-describe one of the user's premium procedures.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(
        &self,
        id: &ProcedureId,
        user_id: &UserId,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), RecordStoreError> {
        self.records
            .update(
                PREMIUM_PROCEDURES,
                &json!({ "name": name, "description": description }),
                &Query::new().eq("id", id).eq("user_id", user_id),
            )
            .await
    }

    /// Remove one of the user's premium procedures.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(
        &self,
        id: &ProcedureId,
        user_id: &UserId,
    ) -> Result<(), RecordStoreError> {
        self.records
            .delete(
                PREMIUM_PROCEDURES,
                &Query::new().eq("id", id).eq("user_id", user_id),
            )
            .await
    }
}
