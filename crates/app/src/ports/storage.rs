//! Storage port — repository trait for band persistence.

use std::future::Future;

use bandservice_domain::band::{Band, NewBand};
use bandservice_domain::error::BandError;
use bandservice_domain::id::BandId;

/// Repository for persisting and querying [`Band`]s.
pub trait BandRepository {
    /// Persist a new band and return it with its assigned id.
    fn create(&self, band: NewBand) -> impl Future<Output = Result<Band, BandError>> + Send;

    /// Get a band by its identifier.
    fn get_by_id(
        &self,
        id: BandId,
    ) -> impl Future<Output = Result<Option<Band>, BandError>> + Send;

    /// Get a band by its exact name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Band>, BandError>> + Send;

    /// List every band, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Band>, BandError>> + Send;

    /// Overwrite an existing band.
    fn update(&self, band: Band) -> impl Future<Output = Result<Band, BandError>> + Send;

    /// Remove a band. Removing an unknown id is not an error.
    fn delete(&self, id: BandId) -> impl Future<Output = Result<(), BandError>> + Send;
}
