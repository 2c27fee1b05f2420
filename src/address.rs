use serde::{Deserialize, Serialize};

/// Structured postal address record as managed by the Geographic Address
/// Management API.
///
/// Owned by the backend: the client reads and displays it, and only
/// constructs one itself as the `submittedGeographicAddress` of a
/// validation request. Every display field defaults to an empty string so
/// that partial records returned under a `fields` projection still
/// deserialize.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicAddress {
    /// Server-assigned identifier. Empty on a submitted draft.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Hyperlink reference to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub street_nr: String,
    #[serde(default)]
    pub street_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_type: Option<StreetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_suffix: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state_or_province: String,
    #[serde(default)]
    pub country: String,
    // Countries like the UK use alphanumeric postal codes, so you can't just use a number here
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub locality: String,
    /// References to child units of this address. The full sub-address
    /// records live under their own sub-resource and are fetched on demand.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geographic_sub_address: Vec<SubAddressRef>,
}

/// The six street types the API accepts.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StreetType {
    #[default]
    Street,
    Avenue,
    Road,
    Lane,
    Drive,
    Boulevard,
}

impl StreetType {
    pub fn as_str(&self) -> &'static str {
        use self::StreetType::*;
        match *self {
            Street => "street",
            Avenue => "avenue",
            Road => "road",
            Lane => "lane",
            Drive => "drive",
            Boulevard => "boulevard",
        }
    }

    /// All accepted values, in the order the selection control offers them.
    pub fn all() -> &'static [StreetType] {
        use self::StreetType::*;
        &[Street, Avenue, Road, Lane, Drive, Boulevard]
    }
}

impl std::fmt::Display for StreetType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a sub-address as embedded in its parent
/// [`GeographicAddress`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubAddressRef {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Child unit of an address, e.g. an apartment or unit. Belongs to exactly
/// one [`GeographicAddress`] and is only fetched when the parent's detail
/// view opens.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeographicSubAddress {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub sub_address_type: String,
    #[serde(default)]
    pub sub_address_name: String,
    #[serde(default)]
    pub sub_address_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let address: GeographicAddress = serde_json::from_str(
            r#"{
                "id": "42",
                "href": "https://host/tmf-api/geographicAddress/42",
                "name": "Head Office",
                "streetNr": "12",
                "streetName": "Main",
                "streetType": "avenue",
                "streetSuffix": "West",
                "city": "Springfield",
                "stateOrProvince": "IL",
                "country": "USA",
                "postcode": "62701",
                "locality": "Downtown",
                "geographicSubAddress": [{"id": "42-1"}]
            }"#,
        )
        .unwrap();
        assert_eq!(address.id, "42");
        assert_eq!(address.street_type, Some(StreetType::Avenue));
        assert_eq!(address.street_suffix.as_deref(), Some("West"));
        assert_eq!(address.geographic_sub_address.len(), 1);
    }

    #[test]
    fn deserializes_projected_record() {
        // A `fields=city,postcode` projection drops everything else.
        let address: GeographicAddress =
            serde_json::from_str(r#"{"id": "42", "city": "Springfield", "postcode": "62701"}"#)
                .unwrap();
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.street_name, "");
        assert_eq!(address.street_type, None);
        assert!(address.geographic_sub_address.is_empty());
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = GeographicAddress {
            id: String::new(),
            href: None,
            name: None,
            street_nr: "1".into(),
            street_name: "Main".into(),
            street_type: Some(StreetType::Street),
            street_suffix: None,
            city: "Springfield".into(),
            state_or_province: "IL".into(),
            country: "USA".into(),
            postcode: "62701".into(),
            locality: "Downtown".into(),
            geographic_sub_address: vec![],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("href").is_none());
        assert_eq!(json["streetType"], "street");
    }
}
