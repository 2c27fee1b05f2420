/*!
Client-side search criteria.

Filters are transient key-value sets owned by a view. A blank or
whitespace-only value means "unset" and must never reach the backend;
non-blank values are sent verbatim, in declaration order.
*/
use url::Url;

/// Search criteria for the address list.
///
/// `fields` is a comma-separated projection: when it is active, list
/// results may be partial and a detail view must re-fetch the full record
/// by id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressFilters {
    pub country: String,
    pub city: String,
    pub postcode: String,
    pub fields: String,
}

impl AddressFilters {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, &str)> {
        active_pairs(&[
            ("country", &self.country),
            ("city", &self.city),
            ("postcode", &self.postcode),
            ("fields", &self.fields),
        ])
    }

    /// Whether list results may be missing fields because of a projection.
    pub fn has_field_projection(&self) -> bool {
        !self.fields.trim().is_empty()
    }

    /// Copy with every value trimmed, as the search action applies it.
    pub fn trimmed(&self) -> Self {
        AddressFilters {
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            postcode: self.postcode.trim().to_string(),
            fields: self.fields.trim().to_string(),
        }
    }

    pub(crate) fn append_to(&self, url: &mut Url) {
        append_query(url, &self.pairs());
    }
}

/// Search criteria for the validation history.
///
/// Both values come from fixed select boxes: `state` is one of the three
/// lifecycle states or empty, `provide_alternative` is `"true"`, `"false"`
/// or empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationFilters {
    pub state: String,
    pub provide_alternative: String,
}

impl ValidationFilters {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, &str)> {
        active_pairs(&[
            ("state", &self.state),
            ("provideAlternative", &self.provide_alternative),
        ])
    }

    pub fn trimmed(&self) -> Self {
        ValidationFilters {
            state: self.state.trim().to_string(),
            provide_alternative: self.provide_alternative.trim().to_string(),
        }
    }

    pub(crate) fn append_to(&self, url: &mut Url) {
        append_query(url, &self.pairs());
    }
}

fn active_pairs<'a>(candidates: &[(&'static str, &'a String)]) -> Vec<(&'static str, &'a str)> {
    candidates
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (*key, value.as_str()))
        .collect()
}

// Taking query_pairs_mut unconditionally leaves a dangling `?` on the url,
// so only touch the query when something is active.
fn append_query(url: &mut Url, pairs: &[(&'static str, &str)]) {
    if pairs.is_empty() {
        return;
    }
    let mut query = url.query_pairs_mut();
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
}
