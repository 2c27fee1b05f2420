use crate::api::AddressApi;
use crate::display;
use crate::views::FetchStatus;
use crate::{GeographicAddress, GeographicSubAddress};

/// Detail view of one selected address.
///
/// Sub-addresses are fetched lazily when the view opens. A fetch failure is
/// shown inline without closing the view; an empty result is not an error.
#[derive(Debug, Clone)]
pub struct AddressDetailView {
    pub address: GeographicAddress,
    pub sub_addresses: Vec<GeographicSubAddress>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl AddressDetailView {
    pub fn new(address: GeographicAddress) -> Self {
        AddressDetailView {
            address,
            sub_addresses: vec![],
            status: FetchStatus::Idle,
            error: None,
        }
    }

    /// Loads the sub-addresses of the displayed address.
    pub async fn load_sub_addresses<A>(&mut self, api: &A)
    where
        A: AddressApi + Sync,
    {
        self.status = FetchStatus::Loading;
        self.error = None;
        match api.sub_addresses(&self.address.id).await {
            Ok(sub_addresses) => {
                self.sub_addresses = sub_addresses;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                self.error = Some(format!("Failed to fetch sub-addresses: {}", err));
                self.status = FetchStatus::Errored;
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("--- Address Details ---\n");
        display::field(&mut out, "ID", &self.address.id);
        display::field(
            &mut out,
            "Name",
            self.address.name.as_deref().unwrap_or("N/A"),
        );
        display::field(
            &mut out,
            "Street Address",
            &display::street_line(&self.address),
        );
        display::field(&mut out, "City", &self.address.city);
        display::field(&mut out, "State/Province", &self.address.state_or_province);
        display::field(&mut out, "Country", &self.address.country);
        display::field(&mut out, "Postcode", &self.address.postcode);
        display::field(&mut out, "Locality", &self.address.locality);
        if let Some(ref href) = self.address.href {
            display::field(&mut out, "HREF", href);
        }

        out.push_str("Sub-Addresses:\n");
        if self.status.is_loading() {
            out.push_str("Loading sub-addresses...\n");
        } else if let Some(ref error) = self.error {
            out.push_str(error);
            out.push('\n');
        } else if self.sub_addresses.is_empty() {
            out.push_str("No sub-addresses found.\n");
        } else {
            for sub_address in &self.sub_addresses {
                out.push_str(&display::sub_address_panel(sub_address));
            }
        }
        out
    }
}
