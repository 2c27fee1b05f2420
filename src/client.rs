use async_trait::async_trait;
use log::debug;
use mime::Mime;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{AddressApi, ValidationApi};
use crate::error::{ApiError, ClientError};
use crate::{
    AddressFilters, AddressValidation, Config, GeographicAddress, GeographicSubAddress,
    ValidationFilters, ValidationPatch, ValidationRequest,
};

const GEOGRAPHIC_ADDRESS: &str = "geographicAddress";
const GEOGRAPHIC_SUB_ADDRESS: &str = "geographicSubAddress";
const GEOGRAPHIC_ADDRESS_VALIDATION: &str = "geographicAddressValidation";

lazy_static! {
    /// Content type signalling RFC 7396 merge-patch semantics, so the
    /// backend does not require a full resource replacement.
    static ref MERGE_PATCH_JSON: Mime = "application/merge-patch+json".parse().unwrap();
}

/// TMF Geographic Address Management API client.
///
/// Wraps HTTP calls to the two resource families (addresses, validations).
/// All operations are asynchronous, surface the raw failure to the caller
/// and perform no retries; timeouts are whatever the transport defaults to.
#[derive(Debug, Clone)]
pub struct Client {
    pub config: Config,

    pub http_client: reqwest::Client,
}

impl Client {
    /// Creates a client.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmf_address::{Client, Config};
    /// use url::Url;
    ///
    /// let client = Client::new(
    ///     Config::new(Url::parse("https://api.example.com/tmf-api").unwrap()),
    ///     reqwest::Client::new(),
    /// );
    /// ```
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        Client {
            config,
            http_client,
        }
    }

    /// Creates a client with the environment-resolved base URL.
    pub fn from_env() -> Self {
        Client::new(Config::from_env(), reqwest::Client::new())
    }

    fn resource_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::CannotBeABase)?
            .extend(segments);
        Ok(url)
    }

    fn addresses_url(&self, filters: &AddressFilters) -> Result<Url, ClientError> {
        let mut url = self.resource_url(&[GEOGRAPHIC_ADDRESS])?;
        filters.append_to(&mut url);
        Ok(url)
    }

    fn address_url(&self, id: &str, filters: &AddressFilters) -> Result<Url, ClientError> {
        let mut url = self.resource_url(&[GEOGRAPHIC_ADDRESS, id])?;
        filters.append_to(&mut url);
        Ok(url)
    }

    fn sub_addresses_url(&self, address_id: &str) -> Result<Url, ClientError> {
        self.resource_url(&[GEOGRAPHIC_ADDRESS, address_id, GEOGRAPHIC_SUB_ADDRESS])
    }

    fn sub_address_url(&self, address_id: &str, sub_address_id: &str) -> Result<Url, ClientError> {
        self.resource_url(&[
            GEOGRAPHIC_ADDRESS,
            address_id,
            GEOGRAPHIC_SUB_ADDRESS,
            sub_address_id,
        ])
    }

    fn validations_url(&self, filters: &ValidationFilters) -> Result<Url, ClientError> {
        let mut url = self.resource_url(&[GEOGRAPHIC_ADDRESS_VALIDATION])?;
        filters.append_to(&mut url);
        Ok(url)
    }

    fn validation_url(&self, id: &str, filters: &ValidationFilters) -> Result<Url, ClientError> {
        let mut url = self.resource_url(&[GEOGRAPHIC_ADDRESS_VALIDATION, id])?;
        filters.append_to(&mut url);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let json = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .json::<Value>()
            .await?;

        parse_resource(json)
    }
}

// A body that deserializes as a TMF error report is a failure regardless of
// what the transport said.
fn parse_resource<T: DeserializeOwned>(json: Value) -> Result<T, ClientError> {
    let error: Result<ApiError, _> = serde_json::from_value(json.clone());

    if let Ok(error) = error {
        Err(ClientError::from(error))
    } else {
        Ok(serde_json::from_value(json)?)
    }
}

#[async_trait]
impl AddressApi for Client {
    async fn addresses(
        &self,
        filters: &AddressFilters,
    ) -> Result<Vec<GeographicAddress>, ClientError> {
        let url = self.addresses_url(filters)?;
        self.fetch(url).await
    }

    async fn address_by_id(
        &self,
        id: &str,
        filters: &AddressFilters,
    ) -> Result<GeographicAddress, ClientError> {
        let url = self.address_url(id, filters)?;
        self.fetch(url).await
    }

    async fn sub_addresses(
        &self,
        address_id: &str,
    ) -> Result<Vec<GeographicSubAddress>, ClientError> {
        let url = self.sub_addresses_url(address_id)?;
        self.fetch(url).await
    }

    async fn sub_address(
        &self,
        address_id: &str,
        sub_address_id: &str,
    ) -> Result<GeographicSubAddress, ClientError> {
        let url = self.sub_address_url(address_id, sub_address_id)?;
        self.fetch(url).await
    }
}

#[async_trait]
impl ValidationApi for Client {
    async fn create_validation(
        &self,
        request: &ValidationRequest,
    ) -> Result<AddressValidation, ClientError> {
        let url = self.resource_url(&[GEOGRAPHIC_ADDRESS_VALIDATION])?;
        debug!("POST {}", url);
        let json = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?
            .json::<Value>()
            .await?;

        parse_resource(json)
    }

    async fn validations(
        &self,
        filters: &ValidationFilters,
    ) -> Result<Vec<AddressValidation>, ClientError> {
        let url = self.validations_url(filters)?;
        self.fetch(url).await
    }

    async fn validation_by_id(
        &self,
        id: &str,
        filters: &ValidationFilters,
    ) -> Result<AddressValidation, ClientError> {
        let url = self.validation_url(id, filters)?;
        self.fetch(url).await
    }

    async fn update_validation(
        &self,
        id: &str,
        patch: &ValidationPatch,
    ) -> Result<(), ClientError> {
        let url = self.resource_url(&[GEOGRAPHIC_ADDRESS_VALIDATION, id])?;
        debug!("PATCH {}", url);
        let response = self
            .http_client
            .patch(url)
            .header(CONTENT_TYPE, MERGE_PATCH_JSON.as_ref())
            .header(ACCEPT, "application/json")
            .json(patch)
            .send()
            .await?;

        if response.status().is_success() {
            // Callers re-fetch the resource, the response body is not needed.
            return Ok(());
        }

        let json = response.json::<Value>().await?;
        let error: ApiError = serde_json::from_value(json)?;
        Err(ClientError::from(error))
    }
}
