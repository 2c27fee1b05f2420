/*!
Plain-text rendering shared by the views.

Every screen that shows an address uses the same panel layout, whether it
is a list selection, a submitted address or a validation alternate.
*/
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

use crate::{GeographicAddress, GeographicSubAddress};

/// Renders one address panel under the given title.
pub fn address_panel(title: &str, address: &GeographicAddress) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", title);
    field(&mut out, "Name", address.name.as_deref().unwrap_or("N/A"));
    field(&mut out, "Street", &street_line(address));
    field(&mut out, "City", &address.city);
    field(&mut out, "State/Province", &address.state_or_province);
    field(&mut out, "Country", &address.country);
    field(&mut out, "Postcode", &address.postcode);
    field(&mut out, "Locality", &address.locality);
    out
}

/// Single-line street description: number, name, type, optional suffix.
pub fn street_line(address: &GeographicAddress) -> String {
    let mut line = format!("{} {}", address.street_nr, address.street_name);
    if let Some(street_type) = address.street_type {
        let _ = write!(line, " {}", street_type);
    }
    if let Some(ref suffix) = address.street_suffix {
        let _ = write!(line, " {}", suffix);
    }
    line
}

pub fn sub_address_panel(sub_address: &GeographicSubAddress) -> String {
    let mut out = String::new();
    field(&mut out, "ID", &sub_address.id);
    field(&mut out, "Type", &sub_address.sub_address_type);
    field(&mut out, "Name", &sub_address.sub_address_name);
    field(&mut out, "Number", &sub_address.sub_address_number);
    out
}

/// Timestamp in the local timezone, or `N/A` when the backend omitted it.
pub fn local_timestamp(timestamp: &Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(value) => value
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "N/A".to_string(),
    }
}

pub(crate) fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{}: {}", label, value);
}
