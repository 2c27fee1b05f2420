use std::fmt::Write;

use crate::api::ValidationApi;
use crate::display;
use crate::views::FetchStatus;
use crate::{AddressValidation, ValidationFilters, ValidationPatch, ValidationState};

/// Detail view of one selected validation.
///
/// `updating` is set while a state transition is in flight and blocks a
/// second transition from the same open detail; it does not block list
/// refreshes.
#[derive(Debug, Clone)]
pub struct ValidationDetailView {
    pub validation: AddressValidation,
    pub updating: bool,
}

impl ValidationDetailView {
    fn new(validation: AddressValidation) -> Self {
        ValidationDetailView {
            validation,
            updating: false,
        }
    }

    pub fn render(&self) -> String {
        let validation = &self.validation;
        let mut out = String::from("--- Validation Details ---\n");
        display::field(&mut out, "Validation ID", &validation.id);
        display::field(&mut out, "Status", validation.state.as_str());
        display::field(&mut out, "Result", &validation.validation_result);
        display::field(
            &mut out,
            "Validation Date",
            &display::local_timestamp(&validation.validation_date),
        );
        display::field(
            &mut out,
            "Provide Alternative",
            if validation.provide_alternative {
                "Yes"
            } else {
                "No"
            },
        );

        out.push_str(&display::address_panel(
            "Submitted Address",
            &validation.submitted_geographic_address,
        ));
        if let Some(ref valid) = validation.valid_geographic_address {
            out.push_str(&display::address_panel("Valid Address", valid));
        }
        for (index, alternate) in validation.alternate_geographic_address.iter().enumerate() {
            out.push_str(&display::address_panel(
                &format!("Alternative Address {}", index + 1),
                alternate,
            ));
        }

        let actions = if self.updating {
            "[Mark as Completed] [Mark as Failed] (updating...)"
        } else {
            "[Mark as Completed] [Mark as Failed]"
        };
        let _ = writeln!(out, "{}", actions);
        out
    }
}

/// The validation history screen: a filterable summary list with at most
/// one open detail view and two state-transition actions.
#[derive(Debug, Clone, Default)]
pub struct ValidationListView {
    pub filters: ValidationFilters,
    pub validations: Vec<AddressValidation>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub detail: Option<ValidationDetailView>,
}

impl ValidationListView {
    pub fn new() -> Self {
        ValidationListView::default()
    }

    /// Initial unfiltered load, issued when the screen mounts.
    pub async fn open<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        self.fetch(api, &ValidationFilters::default()).await;
    }

    /// Re-fetches the list with the active (trimmed, non-blank) filters.
    pub async fn search<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        let active = self.filters.trimmed();
        self.fetch(api, &active).await;
    }

    /// Resets both filters and re-issues an unfiltered list call.
    pub async fn clear<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        self.filters = ValidationFilters::default();
        self.fetch(api, &ValidationFilters::default()).await;
    }

    async fn fetch<V>(&mut self, api: &V, filters: &ValidationFilters)
    where
        V: ValidationApi + Sync,
    {
        self.status = FetchStatus::Loading;
        self.error = None;
        match api.validations(filters).await {
            Ok(validations) => {
                self.validations = validations;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                self.error = Some(format!("Failed to fetch validations: {}", err));
                self.status = FetchStatus::Errored;
            }
        }
    }

    /// Opens the detail view for the validation at `index`. Unlike the
    /// address list there is no projection shortcut: the record is always
    /// re-fetched by id.
    pub async fn select<V>(&mut self, api: &V, index: usize)
    where
        V: ValidationApi + Sync,
    {
        let id = match self.validations.get(index) {
            Some(validation) => validation.id.clone(),
            None => return,
        };

        match api.validation_by_id(&id, &ValidationFilters::default()).await {
            Ok(validation) => self.detail = Some(ValidationDetailView::new(validation)),
            Err(err) => {
                self.error = Some(format!("Failed to fetch validation details: {}", err));
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// "Mark as Completed" action of the open detail view.
    pub async fn mark_completed<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        self.update_state(api, ValidationState::Completed).await;
    }

    /// "Mark as Failed" action of the open detail view.
    pub async fn mark_failed<V>(&mut self, api: &V)
    where
        V: ValidationApi + Sync,
    {
        self.update_state(api, ValidationState::Failed).await;
    }

    async fn update_state<V>(&mut self, api: &V, state: ValidationState)
    where
        V: ValidationApi + Sync,
    {
        let id = match self.detail {
            Some(ref detail) if !detail.updating => detail.validation.id.clone(),
            _ => return,
        };
        if let Some(ref mut detail) = self.detail {
            detail.updating = true;
        }
        self.error = None;

        match api.update_validation(&id, &ValidationPatch::state(state)).await {
            Ok(()) => {
                // Refresh the open detail, then the summary list. The
                // backend update stands even if a refresh fails.
                match api.validation_by_id(&id, &ValidationFilters::default()).await {
                    Ok(validation) => {
                        if let Some(ref mut detail) = self.detail {
                            detail.validation = validation;
                        }
                        let active = self.filters.trimmed();
                        self.fetch(api, &active).await;
                    }
                    Err(err) => {
                        self.error = Some(format!("Failed to update validation: {}", err));
                    }
                }
            }
            Err(err) => {
                self.error = Some(format!("Failed to update validation: {}", err));
            }
        }

        if let Some(ref mut detail) = self.detail {
            detail.updating = false;
        }
    }

    pub fn render(&self) -> String {
        if self.status.is_loading() {
            return "Loading validations...\n".to_string();
        }

        let mut out = String::new();
        if let Some(ref error) = self.error {
            let _ = writeln!(out, "{}", error);
        }

        let _ = writeln!(out, "Validation History ({})", self.validations.len());
        if self.validations.is_empty() {
            out.push_str("No validations found.\n");
        } else {
            for validation in &self.validations {
                let _ = writeln!(
                    out,
                    "- Validation {} | {} | {} | {} | Alternatives: {}",
                    validation.id,
                    validation.state,
                    validation.validation_result,
                    display::local_timestamp(&validation.validation_date),
                    if validation.provide_alternative {
                        "Yes"
                    } else {
                        "No"
                    },
                );
            }
        }

        if let Some(ref detail) = self.detail {
            out.push_str(&detail.render());
        }
        out
    }
}
