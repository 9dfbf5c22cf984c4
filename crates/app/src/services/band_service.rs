//! Band service — use-cases for managing bands, reports and readiness checks.

use bandservice_domain::band::{Band, BandPatch, NewBand};
use bandservice_domain::error::{BandError, NotFoundError, ValidationError};
use bandservice_domain::id::{BandId, TaskId};
use bandservice_domain::report::{self, Report};

use crate::ports::BandRepository;

/// Application service for band operations.
pub struct BandService<R> {
    repo: R,
}

impl<R: BandRepository> BandService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a band by its exact name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn read_by_name(&self, name: &str) -> Result<Option<Band>, BandError> {
        self.repo.get_by_name(name).await
    }

    /// Create a new band after validating domain invariants and checking
    /// that no band with the same name exists.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::Validation`] if invariants fail or the name is
    /// taken, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, band), fields(band_name = %band.name))]
    pub async fn create(&self, band: NewBand) -> Result<Band, BandError> {
        band.validate()?;
        if self.repo.get_by_name(&band.name).await?.is_some() {
            return Err(ValidationError::DuplicateName(band.name).into());
        }
        let created = self.repo.create(band).await?;
        tracing::debug!(band_id = %created.id, "band created");
        Ok(created)
    }

    /// Look up a band by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn read_by_id(&self, id: BandId) -> Result<Option<Band>, BandError> {
        self.repo.get_by_id(id).await
    }

    /// List all bands, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_all(&self) -> Result<Vec<Band>, BandError> {
        self.repo.get_all().await
    }

    /// Build the report for every band, keyed by band name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_report(&self) -> Result<Report, BandError> {
        let bands = self.repo.get_all().await?;
        Ok(report::global(&bands))
    }

    /// Build the report entries for a single band.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::NotFound`] when no band with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_single_report(&self, id: BandId) -> Result<Vec<String>, BandError> {
        let band = self.require(id).await?;
        Ok(report::band_entries(&band))
    }

    /// Check whether a band has every member a task requires.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::NotFound`] when the band or the task does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_ready_check(&self, id: BandId, task_id: TaskId) -> Result<String, BandError> {
        let band = self.require(id).await?;
        let task = band.task(task_id).ok_or_else(|| NotFoundError {
            entity: "Task",
            id: task_id.to_string(),
        })?;
        Ok(task.readiness(&band.members).to_string())
    }

    /// Delete a band by id. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: BandId) -> Result<(), BandError> {
        self.repo.delete(id).await
    }

    /// Apply a partial update to an existing band.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::NotFound`] when no band with `id` exists,
    /// [`BandError::Validation`] if the patched band breaks an invariant or
    /// takes the name of another band, or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: BandId, patch: BandPatch) -> Result<Band, BandError> {
        let mut band = self.require(id).await?;
        band.apply(patch);
        band.validate()?;

        if let Some(other) = self.repo.get_by_name(&band.name).await?
            && other.id != band.id
        {
            return Err(ValidationError::DuplicateName(band.name).into());
        }

        self.repo.update(band).await
    }

    async fn require(&self, id: BandId) -> Result<Band, BandError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Band",
                id: id.to_string(),
            }
            .into()
        })
    }
}
