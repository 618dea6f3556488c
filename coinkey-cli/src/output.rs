//! Text and JSON rendering.

use coinkey_address::{KeyBundle, ValidationResult};
use serde::Serialize;

use crate::commands::WifSummary;
use crate::config::OutputFormat;
use crate::error::CliError;

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:<18}{}\n", format!("{}:", label), value));
}

/// Render a derived key bundle.
pub fn render_bundle(bundle: &KeyBundle, format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return to_json(bundle);
    }

    let mut out = String::new();
    line(&mut out, "network", &bundle.network.to_string());
    line(&mut out, "public key", &bundle.public_key.to_hex());
    line(&mut out, "public key hash", &hex::encode(bundle.public_key_hash));
    line(&mut out, "address", &bundle.address);
    line(&mut out, "wif", &bundle.wif_uncompressed);
    line(&mut out, "wif (compressed)", &bundle.wif_compressed);
    if let Some(onion) = &bundle.onion {
        line(&mut out, "onion public key", &onion.public_key.to_hex());
        line(&mut out, "onion address", &onion.address);
    }
    Ok(out)
}

/// Render an address validation result.
pub fn render_validation(
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return to_json(result);
    }

    let mut out = String::new();
    line(&mut out, "valid", if result.is_valid { "yes" } else { "no" });
    if result.is_onion {
        line(&mut out, "kind", "onion v3");
    } else if let Some(network) = result.network {
        line(&mut out, "network", &network.to_string());
    }
    for message in &result.messages {
        line(&mut out, "note", message);
    }
    Ok(out)
}

/// Render a decoded WIF key.
pub fn render_wif(summary: &WifSummary, format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return to_json(summary);
    }

    let mut out = String::new();
    line(&mut out, "version", &format!("0x{:02x}", summary.version));
    line(
        &mut out,
        "network",
        &summary
            .network
            .map(|network| network.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    );
    line(
        &mut out,
        "compressed",
        if summary.compressed { "yes" } else { "no" },
    );
    line(&mut out, "public key", &summary.public_key);
    if let Some(address) = &summary.address {
        line(&mut out, "address", address);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinkey_address::{derive_key_bundle_from_hex, validate_address, Network};

    fn bundle() -> KeyBundle {
        derive_key_bundle_from_hex("1", Network::Bitcoin, None).unwrap()
    }

    #[test]
    fn test_render_bundle_text() {
        let text = render_bundle(&bundle(), OutputFormat::Text).unwrap();

        assert!(text.contains("address:          1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH\n"));
        assert!(text.contains("network:          bitcoin\n"));
        assert!(!text.contains("onion"));
    }

    #[test]
    fn test_render_bundle_json() {
        let json = render_bundle(&bundle(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["address"], "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(
            value["wif_compressed"],
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
    }

    #[test]
    fn test_render_validation() {
        let result = validate_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
        let text = render_validation(&result, OutputFormat::Text).unwrap();
        assert!(text.starts_with("valid:            yes\n"));

        let json = render_validation(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_valid"], true);
        assert_eq!(value["network"], "bitcoin");
    }

    #[test]
    fn test_render_wif_unknown_network() {
        let summary = WifSummary {
            version: 0x42,
            network: None,
            compressed: true,
            public_key: "02ab".to_string(),
            address: None,
        };
        let text = render_wif(&summary, OutputFormat::Text).unwrap();

        assert!(text.contains("version:          0x42\n"));
        assert!(text.contains("network:          unknown\n"));
        assert!(!text.contains("address"));
    }
}
