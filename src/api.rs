/*!
Operation contracts of the two resource families.

The view layer depends on these traits rather than on [`Client`] directly,
so view flows can run against any transport — the reqwest-backed client in
production, a recording stub in tests.

[`Client`]: crate::Client
*/
use async_trait::async_trait;

use crate::error::ClientError;
use crate::{
    AddressFilters, AddressValidation, GeographicAddress, GeographicSubAddress, ValidationFilters,
    ValidationPatch, ValidationRequest,
};

/// Read access to geographic addresses and their sub-addresses.
#[async_trait]
pub trait AddressApi {
    /// Lists addresses matching the active filters. Blank filter values are
    /// never sent.
    async fn addresses(
        &self,
        filters: &AddressFilters,
    ) -> Result<Vec<GeographicAddress>, ClientError>;

    /// Fetches one address by id, optionally with a field projection.
    async fn address_by_id(
        &self,
        id: &str,
        filters: &AddressFilters,
    ) -> Result<GeographicAddress, ClientError>;

    /// Lists the sub-addresses of an address.
    async fn sub_addresses(
        &self,
        address_id: &str,
    ) -> Result<Vec<GeographicSubAddress>, ClientError>;

    /// Fetches one sub-address of an address.
    async fn sub_address(
        &self,
        address_id: &str,
        sub_address_id: &str,
    ) -> Result<GeographicSubAddress, ClientError>;
}

/// Access to address validations: creation, search and partial update.
#[async_trait]
pub trait ValidationApi {
    /// Submits a candidate address for validation.
    async fn create_validation(
        &self,
        request: &ValidationRequest,
    ) -> Result<AddressValidation, ClientError>;

    /// Lists past validations matching the active filters.
    async fn validations(
        &self,
        filters: &ValidationFilters,
    ) -> Result<Vec<AddressValidation>, ClientError>;

    /// Fetches one validation by id.
    async fn validation_by_id(
        &self,
        id: &str,
        filters: &ValidationFilters,
    ) -> Result<AddressValidation, ClientError>;

    /// Applies a merge-patch to a validation. Only the fields present in
    /// the patch change server-side. Callers re-fetch rather than relying
    /// on a response body.
    async fn update_validation(
        &self,
        id: &str,
        patch: &ValidationPatch,
    ) -> Result<(), ClientError>;
}
