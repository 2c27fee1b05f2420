use std::fmt::Write;
use validator::Validate;

use crate::api::ValidationApi;
use crate::display;
use crate::{AddressValidation, GeographicAddress, StreetType, ValidationRequest};

/// Candidate address being typed into the validation form.
///
/// Everything but `name` is required; `street_type` is a selection control
/// restricted to the six accepted values and defaulting to `street`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AddressDraft {
    pub name: String,
    #[validate(length(min = 1))]
    pub street_nr: String,
    #[validate(length(min = 1))]
    pub street_name: String,
    pub street_type: StreetType,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state_or_province: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub postcode: String,
    #[validate(length(min = 1))]
    pub locality: String,
}

impl AddressDraft {
    fn to_address(&self) -> GeographicAddress {
        GeographicAddress {
            id: String::new(),
            href: None,
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            street_nr: self.street_nr.clone(),
            street_name: self.street_name.clone(),
            street_type: Some(self.street_type),
            street_suffix: None,
            city: self.city.clone(),
            state_or_province: self.state_or_province.clone(),
            country: self.country.clone(),
            postcode: self.postcode.clone(),
            locality: self.locality.clone(),
            geographic_sub_address: vec![],
        }
    }
}

/// The address validation screen: one draft, one outcome.
#[derive(Debug, Clone, Default)]
pub struct ValidationFormView {
    pub draft: AddressDraft,
    pub provide_alternative: bool,
    /// True while a submission is in flight.
    pub busy: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub result: Option<AddressValidation>,
}

impl ValidationFormView {
    pub fn new() -> Self {
        ValidationFormView::default()
    }

    /// Whether the draft passes the required-field gate.
    pub fn can_submit(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Submits the draft for validation.
    ///
    /// Refuses without a network call while required fields are empty. On
    /// success the returned validation replaces any prior result and the
    /// form returns to its defaults; on failure the draft is kept as typed.
    pub async fn submit<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        if self.draft.validate().is_err() {
            self.error = Some("All required fields must be filled in.".to_string());
            return;
        }

        self.busy = true;
        self.error = None;
        self.success = None;
        self.result = None;

        let request = ValidationRequest {
            provide_alternative: self.provide_alternative,
            submitted_geographic_address: self.draft.to_address(),
        };

        match api.create_validation(&request).await {
            Ok(validation) => {
                self.result = Some(validation);
                self.success = Some("Address validation completed successfully!".to_string());
                self.draft = AddressDraft::default();
                self.provide_alternative = false;
            }
            Err(err) => {
                self.error = Some(format!("Failed to validate address: {}", err));
            }
        }
        self.busy = false;
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(ref error) = self.error {
            let _ = writeln!(out, "{}", error);
        }
        if let Some(ref success) = self.success {
            let _ = writeln!(out, "{}", success);
        }

        let result = match self.result {
            Some(ref result) => result,
            None => return out,
        };

        out.push_str("--- Validation Result ---\n");
        display::field(&mut out, "Validation ID", &result.id);
        display::field(&mut out, "Status", result.state.as_str());
        display::field(&mut out, "Result", &result.validation_result);
        display::field(
            &mut out,
            "Validation Date",
            &display::local_timestamp(&result.validation_date),
        );

        out.push_str(&display::address_panel(
            "Submitted Address",
            &result.submitted_geographic_address,
        ));
        if let Some(ref valid) = result.valid_geographic_address {
            out.push_str(&display::address_panel("Valid Address", valid));
        }
        for (index, alternate) in result.alternate_geographic_address.iter().enumerate() {
            out.push_str(&display::address_panel(
                &format!("Alternative Address {}", index + 1),
                alternate,
            ));
        }
        out
    }
}
