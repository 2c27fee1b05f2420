use std::fmt::Write;

use crate::api::AddressApi;
use crate::display;
use crate::views::{AddressDetailView, FetchStatus};
use crate::{AddressFilters, GeographicAddress};

/// The address search screen: a filterable summary list with at most one
/// open detail view.
#[derive(Debug, Clone, Default)]
pub struct AddressListView {
    pub filters: AddressFilters,
    pub addresses: Vec<GeographicAddress>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub detail: Option<AddressDetailView>,
}

impl AddressListView {
    pub fn new() -> Self {
        AddressListView::default()
    }

    /// Initial unfiltered load, issued when the screen mounts.
    pub async fn open<A>(&mut self, api: &A)
    where
        A: AddressApi + Sync,
    {
        self.fetch(api, &AddressFilters::default()).await;
    }

    /// Re-fetches the list with the active (trimmed, non-blank) filters.
    pub async fn search<A>(&mut self, api: &A)
    where
        A: AddressApi + Sync,
    {
        let active = self.filters.trimmed();
        self.fetch(api, &active).await;
    }

    /// Resets all filters and re-issues an unfiltered list call.
    pub async fn clear<A>(&mut self, api: &A)
    where
        A: AddressApi + Sync,
    {
        self.filters = AddressFilters::default();
        self.fetch(api, &AddressFilters::default()).await;
    }

    async fn fetch<A>(&mut self, api: &A, filters: &AddressFilters)
    where
        A: AddressApi + Sync,
    {
        self.status = FetchStatus::Loading;
        self.error = None;
        match api.addresses(filters).await {
            Ok(addresses) => {
                // Response replaces prior results, never merges.
                self.addresses = addresses;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                self.error = Some(format!("Failed to fetch addresses: {}", err));
                self.status = FetchStatus::Errored;
            }
        }
    }

    /// Opens the detail view for the address at `index`, discarding any
    /// previously open detail.
    ///
    /// When the active filters carry a `fields` projection the held summary
    /// may be partial, so the full record is re-fetched by id first.
    pub async fn select<A>(&mut self, api: &A, index: usize)
    where
        A: AddressApi + Sync,
    {
        let address = match self.addresses.get(index) {
            Some(address) => address.clone(),
            None => return,
        };

        let full = if self.filters.has_field_projection() {
            match api.address_by_id(&address.id, &AddressFilters::default()).await {
                Ok(full) => full,
                Err(err) => {
                    self.error = Some(format!("Failed to fetch address details: {}", err));
                    return;
                }
            }
        } else {
            address
        };

        let mut detail = AddressDetailView::new(full);
        detail.load_sub_addresses(api).await;
        self.detail = Some(detail);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn render(&self) -> String {
        if self.status.is_loading() {
            return "Loading addresses...\n".to_string();
        }

        let mut out = String::new();
        if let Some(ref error) = self.error {
            let _ = writeln!(out, "{}", error);
        }

        let _ = writeln!(out, "Addresses ({})", self.addresses.len());
        if self.addresses.is_empty() {
            out.push_str("No addresses found.\n");
        } else {
            for address in &self.addresses {
                let _ = writeln!(
                    out,
                    "- {} | {} | {}, {} {}",
                    address.name.as_deref().unwrap_or("Unnamed Address"),
                    display::street_line(address),
                    address.city,
                    address.country,
                    address.postcode,
                );
            }
        }

        if let Some(ref detail) = self.detail {
            out.push_str(&detail.render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{sample_address, FakeApi};

    #[tokio::test]
    async fn open_issues_unfiltered_fetch() {
        let api = FakeApi {
            addresses: vec![sample_address("1"), sample_address("2")],
            ..Default::default()
        };
        let mut view = AddressListView::new();
        assert_eq!(view.status, FetchStatus::Idle);
        view.open(&api).await;

        assert_eq!(api.calls(), vec!["addresses []"]);
        assert_eq!(view.status, FetchStatus::Loaded);
        assert_eq!(view.addresses.len(), 2);
    }

    #[tokio::test]
    async fn search_sends_trimmed_active_filters_and_replaces_results() {
        let api = FakeApi {
            addresses: vec![sample_address("1")],
            ..Default::default()
        };
        let mut view = AddressListView::new();
        view.addresses = vec![sample_address("stale-1"), sample_address("stale-2")];
        view.filters.city = "  Springfield ".to_string();
        view.filters.postcode = "   ".to_string();
        view.search(&api).await;

        assert_eq!(api.calls(), vec![r#"addresses [("city", "Springfield")]"#]);
        assert_eq!(view.addresses.len(), 1);
        assert_eq!(view.addresses[0].id, "1");
    }

    #[tokio::test]
    async fn clear_resets_filters_and_refetches() {
        let api = FakeApi::default();
        let mut view = AddressListView::new();
        view.filters.country = "USA".to_string();
        view.clear(&api).await;

        assert_eq!(view.filters, AddressFilters::default());
        assert_eq!(api.calls(), vec!["addresses []"]);
    }

    #[tokio::test]
    async fn fetch_failure_sets_banner_and_errored_status() {
        let api = FakeApi {
            fail_addresses: true,
            ..Default::default()
        };
        let mut view = AddressListView::new();
        view.open(&api).await;

        assert_eq!(view.status, FetchStatus::Errored);
        assert!(view
            .error
            .as_deref()
            .unwrap()
            .starts_with("Failed to fetch addresses:"));

        // The next successful action clears the banner.
        let api = FakeApi::default();
        view.search(&api).await;
        assert!(view.error.is_none());
        assert_eq!(view.status, FetchStatus::Loaded);
    }

    #[tokio::test]
    async fn select_without_projection_uses_held_summary() {
        let api = FakeApi {
            addresses: vec![sample_address("42")],
            ..Default::default()
        };
        let mut view = AddressListView::new();
        view.open(&api).await;
        view.select(&api, 0).await;

        assert_eq!(api.count("address_by_id"), 0);
        assert_eq!(api.count("sub_addresses"), 1);
        assert_eq!(view.detail.as_ref().unwrap().address.id, "42");
    }

    #[tokio::test]
    async fn select_under_projection_refetches_full_record_once() {
        let mut projected = sample_address("42");
        projected.street_name = String::new();
        let api = FakeApi {
            addresses: vec![projected],
            address: Some(sample_address("42")),
            ..Default::default()
        };
        let mut view = AddressListView::new();
        view.filters.fields = "city,postcode".to_string();
        view.search(&api).await;
        view.select(&api, 0).await;

        assert_eq!(api.count("address_by_id"), 1);
        // The full-record fetch carries no projection of its own.
        assert!(api.calls().contains(&"address_by_id 42 []".to_string()));
        assert_eq!(view.detail.as_ref().unwrap().address.street_name, "Main");
    }

    #[tokio::test]
    async fn select_replaces_previous_detail() {
        let api = FakeApi {
            addresses: vec![sample_address("1"), sample_address("2")],
            ..Default::default()
        };
        let mut view = AddressListView::new();
        view.open(&api).await;
        view.select(&api, 0).await;
        view.detail.as_mut().unwrap().sub_addresses = vec![crate::GeographicSubAddress {
            id: "old".to_string(),
            href: None,
            sub_address_type: String::new(),
            sub_address_name: String::new(),
            sub_address_number: String::new(),
        }];
        view.select(&api, 1).await;

        let detail = view.detail.as_ref().unwrap();
        assert_eq!(detail.address.id, "2");
        assert!(detail.sub_addresses.is_empty());
    }

    #[tokio::test]
    async fn select_out_of_range_is_ignored() {
        let api = FakeApi::default();
        let mut view = AddressListView::new();
        view.select(&api, 5).await;
        assert!(api.calls().is_empty());
        assert!(view.detail.is_none());
    }

    #[tokio::test]
    async fn renders_empty_list_message() {
        let api = FakeApi::default();
        let mut view = AddressListView::new();
        view.open(&api).await;
        let rendered = view.render();
        assert!(rendered.contains("Addresses (0)"));
        assert!(rendered.contains("No addresses found."));
    }
}
