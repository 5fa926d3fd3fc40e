//! Secret input from the terminal or from stdin.
//!
//! Lines are taken verbatim apart from the line terminator: leading and
//! trailing spaces are part of the secret.

use std::io::BufRead;

use anyhow::{Context, Result};
use secrecy::SecretString;

/// The two secrets a derivation consumes.
pub struct SecretInputs {
    /// The primary secret.
    pub secret: SecretString,
    /// The mixing key.
    pub key: SecretString,
}

/// Prompt for secret and key on the terminal without echo.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn prompt() -> Result<SecretInputs> {
    let secret = rpassword::prompt_password("Secret: ").context("reading secret")?;
    let key = rpassword::prompt_password("Key: ").context("reading key")?;
    Ok(SecretInputs {
        secret: SecretString::from(secret),
        key: SecretString::from(key),
    })
}

/// Read secret and key as the first two lines of `reader`.
///
/// # Errors
///
/// Returns an error if reading fails or fewer than two lines are available.
pub fn read_lines<R: BufRead>(reader: R) -> Result<SecretInputs> {
    let mut lines = reader.lines();
    let mut next = |name: &str| -> Result<SecretString> {
        let line = lines
            .next()
            .with_context(|| format!("input ended before the {name} line"))?
            .with_context(|| format!("reading {name}"))?;
        Ok(SecretString::from(line))
    };
    let secret = next("secret")?;
    let key = next("key")?;
    Ok(SecretInputs { secret, key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    #[test]
    fn reads_two_lines() {
        let inputs = read_lines(Cursor::new("abc\nxy\n")).unwrap();
        assert_eq!(inputs.secret.expose_secret(), "abc");
        assert_eq!(inputs.key.expose_secret(), "xy");
    }

    #[test]
    fn keeps_surrounding_spaces_and_strips_crlf() {
        let inputs = read_lines(Cursor::new(" pass word \r\nkey\r\n")).unwrap();
        assert_eq!(inputs.secret.expose_secret(), " pass word ");
        assert_eq!(inputs.key.expose_secret(), "key");
    }

    #[test]
    fn last_line_without_terminator() {
        let inputs = read_lines(Cursor::new("abc\nxy")).unwrap();
        assert_eq!(inputs.key.expose_secret(), "xy");
    }

    #[test]
    fn missing_key_line_error() {
        let err = read_lines(Cursor::new("abc\n")).err().unwrap();
        assert!(err.to_string().contains("before the key line"));
    }
}
