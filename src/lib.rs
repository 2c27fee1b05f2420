/*!
# TMF Geographic Address Management & Validation client library using async / await

## Features

Client for a TMF-style Geographic Address Management API (TMF673): listing
and searching addresses, lazily fetching their sub-addresses, submitting
address-validation requests and reviewing validation history, including
merge-patch state transitions.

On top of the [`Client`] it ships the view models of the three screens of
the reference UI — address list with detail, validation form, validation
history — as framework-agnostic state machines over the [`AddressApi`] /
[`ValidationApi`] traits.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP client.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
tmf-address = "0.3"
tokio = { version = "1", features = ["full"] }
```

Search addresses and open a detail view:

```rust,no_run
use tmf_address::views::AddressListView;
use tmf_address::Client;

#[tokio::main]
async fn main() {
    // Base URL from TMF_API_BASE_URL, or the local dev proxy.
    let client = Client::from_env();

    let mut view = AddressListView::new();
    view.open(&client).await;

    view.filters.city = "Springfield".to_string();
    view.search(&client).await;
    view.select(&client, 0).await;

    println!("{}", view.render());
}
```

Submit an address for validation:

```rust,no_run
use tmf_address::views::ValidationFormView;
use tmf_address::Client;

#[tokio::main]
async fn main() {
    let client = Client::from_env();

    let mut form = ValidationFormView::new();
    form.draft.street_nr = "12".to_string();
    form.draft.street_name = "Main".to_string();
    form.draft.city = "Springfield".to_string();
    form.draft.state_or_province = "IL".to_string();
    form.draft.country = "USA".to_string();
    form.draft.postcode = "62701".to_string();
    form.draft.locality = "Downtown".to_string();
    form.provide_alternative = true;

    form.submit(&client).await;
    println!("{}", form.render());
}
```
*/
#[macro_use]
extern crate lazy_static;

mod address;
pub mod api;
mod client;
mod config;
mod deserializers;
pub mod display;
pub mod error;
mod filter;
mod validation;
pub mod views;

pub use address::{GeographicAddress, GeographicSubAddress, StreetType, SubAddressRef};
pub use api::{AddressApi, ValidationApi};
pub use client::Client;
pub use config::{Config, BASE_URL_ENV};
pub use error::{ApiError, ClientError};
pub use filter::{AddressFilters, ValidationFilters};
pub use validation::{AddressValidation, ValidationPatch, ValidationRequest, ValidationState};
