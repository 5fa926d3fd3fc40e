//! Password derivation command.
//!
//! Stateless: wraps `mspass_core::password` for the command line. Secrets
//! arrive as [`SecretString`] and are never logged; only their lengths are.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use mspass_core::alphabet::AlphabetOptions;
use mspass_core::options::parse_query;
use mspass_core::params::MiddleSquareParams;
use mspass_core::password;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Options for one derivation.
///
/// Block flags default to `true`. When `options_query` is set it replaces the
/// flags entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivePasswordRequest {
    /// Include uppercase letters (default: true).
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default: true).
    pub lowercase: Option<bool>,
    /// Include digits (default: true).
    pub digits: Option<bool>,
    /// Persisted options, as a `generatorOptions=` query or a full URL.
    pub options_query: Option<String>,
}

/// Derivation result.
///
/// `Debug` is manually implemented to mask the derived value and prevent
/// accidental logging of secret material.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivePasswordResult {
    /// Identity string of the parameters the value was derived under.
    pub configuration: String,
    /// The derived password.
    pub value: String,
}

impl std::fmt::Debug for DerivePasswordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivePasswordResult")
            .field("configuration", &self.configuration)
            .field("value", &"***")
            .finish()
    }
}

impl Drop for DerivePasswordResult {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the alphabet selection of a request.
///
/// # Errors
///
/// Returns a string error if `options_query` carries no `generatorOptions`
/// parameter.
pub fn resolve_options(request: &DerivePasswordRequest) -> Result<AlphabetOptions, String> {
    if let Some(query) = &request.options_query {
        return parse_query(query)
            .ok_or_else(|| format!("No generatorOptions parameter in '{query}'."));
    }
    Ok(AlphabetOptions {
        include_uppercase: request.uppercase.unwrap_or(true),
        include_lowercase: request.lowercase.unwrap_or(true),
        include_digits: request.digits.unwrap_or(true),
    })
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Derive the password for `secret` and `key`.
///
/// # Errors
///
/// Returns a string error if the options cannot be resolved, or if there is
/// nothing to derive (empty secret, empty key, or no character block).
pub fn derive_password(
    secret: &SecretString,
    key: &SecretString,
    request: &DerivePasswordRequest,
) -> Result<DerivePasswordResult, String> {
    let options = resolve_options(request)?;
    let params = MiddleSquareParams::DEFAULT;
    let secret = secret.expose_secret();
    let key = key.expose_secret();

    let secret_len = secret.chars().count();
    let key_len = key.chars().count();
    tracing::debug!(
        configuration = %params,
        secret_len,
        key_len,
        steps = params.step_count(secret_len, key_len),
        ?options,
        "deriving password"
    );

    let value = password::derive_password(secret, key, &options);
    if value.is_empty() {
        return Err(
            "Nothing to derive: secret and key must be non-empty and at least one \
             character block must be enabled."
                .to_string(),
        );
    }

    Ok(DerivePasswordResult {
        configuration: params.identity(),
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
