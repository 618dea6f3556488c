//! Address validation.

use serde::Serialize;

use crate::onion::{parse_onion_address, strip_onion_suffix};
use crate::parsing::parse_address;
use crate::{AddressError, Network};

/// Result of address validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the address is valid.
    pub is_valid: bool,
    /// Detected preset network, if the version byte matches one.
    pub network: Option<Network>,
    /// Whether the address is an onion v3 address.
    pub is_onion: bool,
    /// Validation messages (warnings or errors).
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid(network: Option<Network>) -> Self {
        Self {
            is_valid: true,
            network,
            is_onion: false,
            messages: vec![],
        }
    }

    /// Create a valid onion result.
    pub fn valid_onion() -> Self {
        Self {
            is_valid: true,
            network: None,
            is_onion: true,
            messages: vec![],
        }
    }

    /// Create an invalid result with an error message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            network: None,
            is_onion: false,
            messages: vec![message.into()],
        }
    }

    /// Add a warning message.
    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

/// Validate a Base58Check address or an onion v3 address.
///
/// Malformed input yields `Ok` with `is_valid == false`; the error
/// message is kept in `messages`.
///
/// # Example
/// ```rust
/// use coinkey_address::validate_address;
///
/// let result = validate_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
/// assert!(result.is_valid);
/// ```
pub fn validate_address(address: &str) -> Result<ValidationResult, AddressError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Ok(ValidationResult::invalid("Empty address"));
    }

    if strip_onion_suffix(trimmed).is_some() {
        return validate_onion_address(trimmed);
    }

    let parsed = match parse_address(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(ValidationResult::invalid(e.to_string())),
    };

    let network = parsed.network();
    let result = ValidationResult::valid(network);
    if network.is_none() {
        return Ok(result.with_warning(format!(
            "Version byte 0x{:02x} does not match a known network",
            parsed.version
        )));
    }

    Ok(result)
}

/// Validate an onion v3 address.
pub fn validate_onion_address(address: &str) -> Result<ValidationResult, AddressError> {
    let public_key = match parse_onion_address(address) {
        Ok(public_key) => public_key,
        Err(e) => return Ok(ValidationResult::invalid(e.to_string())),
    };

    if public_key.to_verifying_key().is_err() {
        return Ok(ValidationResult::valid_onion()
            .with_warning("Public key is not a valid Ed25519 point"));
    }

    Ok(ValidationResult::valid_onion())
}

/// Check whether an address carries the version byte of `network`.
pub fn validate_network(address: &str, network: Network) -> bool {
    parse_address(address)
        .map(|parsed| parsed.version == network.pubkey_hash_version())
        .unwrap_or(false)
}
