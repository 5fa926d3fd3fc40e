//! Alphabet option persistence commands.
//!
//! Converts between block selections and the `generatorOptions=` query
//! fragment used to share a selection as a link.

use mspass_core::alphabet::AlphabetOptions;
use mspass_core::options::{encode_query, parse_query};

/// Encode a block selection as a query fragment.
///
/// # Errors
///
/// Returns a string error if no block is selected; such a selection has no
/// query representation.
pub fn encode_options(options: &AlphabetOptions) -> Result<String, String> {
    let query = encode_query(options);
    if query.is_empty() {
        return Err("At least one character block must be enabled.".to_string());
    }
    Ok(query)
}

/// Decode a query fragment or URL into a block selection.
///
/// # Errors
///
/// Returns a string error if the input has no `generatorOptions` parameter.
pub fn decode_options(input: &str) -> Result<AlphabetOptions, String> {
    let options =
        parse_query(input).ok_or_else(|| format!("No generatorOptions parameter in '{input}'."))?;
    tracing::debug!(?options, "decoded alphabet options");
    Ok(options)
}
