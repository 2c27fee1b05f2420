/*!
View models of the three screens.

Each view owns its fetched records, its filter state and a view-local error
banner; no state is shared across screens. View methods run on a single
task: every network call is awaited to completion and its outcome replaces
the view state wholesale, so a stale response simply loses to whichever
call resolves last. Failures are caught inside the view and stored as
banner text, cleared by the next successful action.
*/
mod address_detail;
mod address_list;
mod validation_form;
mod validation_list;

pub use address_detail::AddressDetailView;
pub use address_list::AddressListView;
pub use validation_form::{AddressDraft, ValidationFormView};
pub use validation_list::{ValidationDetailView, ValidationListView};

/// Fetch lifecycle of a list view: `Idle` until the first load, then
/// `Loading` on every search or clear, settling in `Loaded` or `Errored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::api::{AddressApi, ValidationApi};
    use crate::error::{ApiError, ClientError};
    use crate::{
        AddressFilters, AddressValidation, GeographicAddress, GeographicSubAddress, StreetType,
        ValidationFilters, ValidationPatch, ValidationRequest, ValidationState,
    };

    pub(crate) fn stub_error() -> ClientError {
        ClientError::Api(ApiError {
            code: "500".to_string(),
            reason: "backend unavailable".to_string(),
            message: None,
            status: None,
        })
    }

    pub(crate) fn sample_address(id: &str) -> GeographicAddress {
        GeographicAddress {
            id: id.to_string(),
            href: None,
            name: Some("Head Office".to_string()),
            street_nr: "12".to_string(),
            street_name: "Main".to_string(),
            street_type: Some(StreetType::Street),
            street_suffix: None,
            city: "Springfield".to_string(),
            state_or_province: "IL".to_string(),
            country: "USA".to_string(),
            postcode: "62701".to_string(),
            locality: "Downtown".to_string(),
            geographic_sub_address: vec![],
        }
    }

    pub(crate) fn sample_validation(id: &str, state: ValidationState) -> AddressValidation {
        AddressValidation {
            id: id.to_string(),
            href: None,
            state,
            validation_result: "success".to_string(),
            validation_date: None,
            provide_alternative: false,
            submitted_geographic_address: sample_address(""),
            valid_geographic_address: None,
            alternate_geographic_address: vec![],
        }
    }

    /// Transport stub that records every call and serves canned responses.
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub calls: Mutex<Vec<String>>,
        pub addresses: Vec<GeographicAddress>,
        pub address: Option<GeographicAddress>,
        pub sub_addresses: Vec<GeographicSubAddress>,
        pub validations: Vec<AddressValidation>,
        pub validation: Option<AddressValidation>,
        pub fail_addresses: bool,
        pub fail_sub_addresses: bool,
        pub fail_validations: bool,
        pub fail_create: bool,
        pub fail_update: bool,
    }

    impl FakeApi {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn count(&self, prefix: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }
    }

    #[async_trait]
    impl AddressApi for FakeApi {
        async fn addresses(
            &self,
            filters: &AddressFilters,
        ) -> Result<Vec<GeographicAddress>, ClientError> {
            self.record(format!("addresses {:?}", filters.pairs()));
            if self.fail_addresses {
                return Err(stub_error());
            }
            Ok(self.addresses.clone())
        }

        async fn address_by_id(
            &self,
            id: &str,
            filters: &AddressFilters,
        ) -> Result<GeographicAddress, ClientError> {
            self.record(format!("address_by_id {} {:?}", id, filters.pairs()));
            self.address.clone().ok_or_else(stub_error)
        }

        async fn sub_addresses(
            &self,
            address_id: &str,
        ) -> Result<Vec<GeographicSubAddress>, ClientError> {
            self.record(format!("sub_addresses {}", address_id));
            if self.fail_sub_addresses {
                return Err(stub_error());
            }
            Ok(self.sub_addresses.clone())
        }

        async fn sub_address(
            &self,
            address_id: &str,
            sub_address_id: &str,
        ) -> Result<GeographicSubAddress, ClientError> {
            self.record(format!("sub_address {} {}", address_id, sub_address_id));
            self.sub_addresses
                .iter()
                .find(|sub| sub.id == sub_address_id)
                .cloned()
                .ok_or_else(stub_error)
        }
    }

    #[async_trait]
    impl ValidationApi for FakeApi {
        async fn create_validation(
            &self,
            request: &ValidationRequest,
        ) -> Result<AddressValidation, ClientError> {
            self.record(format!(
                "create_validation {}",
                serde_json::to_string(request).unwrap()
            ));
            if self.fail_create {
                return Err(stub_error());
            }
            self.validation.clone().ok_or_else(stub_error)
        }

        async fn validations(
            &self,
            filters: &ValidationFilters,
        ) -> Result<Vec<AddressValidation>, ClientError> {
            self.record(format!("validations {:?}", filters.pairs()));
            if self.fail_validations {
                return Err(stub_error());
            }
            Ok(self.validations.clone())
        }

        async fn validation_by_id(
            &self,
            id: &str,
            filters: &ValidationFilters,
        ) -> Result<AddressValidation, ClientError> {
            self.record(format!("validation_by_id {} {:?}", id, filters.pairs()));
            self.validation.clone().ok_or_else(stub_error)
        }

        async fn update_validation(
            &self,
            id: &str,
            patch: &ValidationPatch,
        ) -> Result<(), ClientError> {
            self.record(format!(
                "update_validation {} {}",
                id,
                serde_json::to_string(patch).unwrap()
            ));
            if self.fail_update {
                return Err(stub_error());
            }
            Ok(())
        }
    }
}
