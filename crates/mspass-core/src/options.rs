//! Persist [`AlphabetOptions`] in a URL query string.
//!
//! Options travel as `generatorOptions=capital+lower+numeric`, listing only
//! the enabled blocks. Decoding is substring-based: a flag is set iff its
//! marker appears anywhere in the parameter value.

use url::{form_urlencoded, Url};

use crate::alphabet::AlphabetOptions;

/// Name of the query parameter carrying the options.
pub const PARAMETER_NAME: &str = "generatorOptions";

const SEPARATOR: &str = "+";
const CAPITAL_MARKER: &str = "capital";
const LOWER_MARKER: &str = "lower";
const NUMERIC_MARKER: &str = "numeric";

/// Encode `options` as a `name=value` query fragment.
///
/// Returns an empty string when no block is enabled, so the parameter is
/// left out entirely.
#[must_use]
pub fn encode_query(options: &AlphabetOptions) -> String {
    let markers: Vec<&str> = [
        (options.include_uppercase, CAPITAL_MARKER),
        (options.include_lowercase, LOWER_MARKER),
        (options.include_digits, NUMERIC_MARKER),
    ]
    .into_iter()
    .filter_map(|(enabled, marker)| enabled.then_some(marker))
    .collect();

    if markers.is_empty() {
        return String::new();
    }
    format!("{PARAMETER_NAME}={}", markers.join(SEPARATOR))
}

/// Decode options from a query string or a full URL.
///
/// An absolute URL contributes its query component. Otherwise the input is
/// the query itself, with at most one leading `?` stripped. A `#` fragment
/// is ignored either way. Returns `None` when the query has no
/// [`PARAMETER_NAME`] parameter.
#[must_use]
pub fn parse_query(input: &str) -> Option<AlphabetOptions> {
    let parsed = Url::parse(input).ok();
    let query = match &parsed {
        Some(url) => url.query().unwrap_or_default(),
        None => {
            let query = input.strip_prefix('?').unwrap_or(input);
            query.split_once('#').map_or(query, |(head, _)| head)
        }
    };

    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == PARAMETER_NAME)
        .map(|(_, value)| AlphabetOptions {
            include_uppercase: value.contains(CAPITAL_MARKER),
            include_lowercase: value.contains(LOWER_MARKER),
            include_digits: value.contains(NUMERIC_MARKER),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
