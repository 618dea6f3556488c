//! Subcommand handlers.

use coinkey_address::{
    derive_key_bundle, p2pkh_address, parse_wif, public_key_hash, validate_address, KeyBundle,
    Network, ValidationResult,
};
use coinkey_crypto::{key_bytes_from_passphrase, OnionKeyPair};
use coinkey_curve::{serialize_uncompressed, SecretScalar, SECP256K1};
use log::info;
use serde::Serialize;

use crate::cli::DeriveArgs;
use crate::config::{parse_network, CliConfig};
use crate::error::CliError;

/// Public view of a decoded WIF key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifSummary {
    pub version: u8,
    pub network: Option<Network>,
    pub compressed: bool,
    /// Public key in the encoding the WIF flag selects.
    pub public_key: String,
    /// Address over the compressed public key, when the network is known.
    pub address: Option<String>,
}

/// Run `derive`.
pub fn derive(args: &DeriveArgs, config: &CliConfig) -> Result<KeyBundle, CliError> {
    let scalar = read_scalar(args)?;
    let network = select_network(args, config)?;
    let onion_key = select_onion_key(args, config, &scalar)?;

    info!("deriving keys for network {}", network);
    Ok(derive_key_bundle(&scalar, network, onion_key.as_ref())?)
}

/// Run `validate`.
pub fn validate(address: &str) -> Result<ValidationResult, CliError> {
    Ok(validate_address(address)?)
}

/// Run `decode-wif`.
pub fn decode_wif(wif: &str) -> Result<WifSummary, CliError> {
    let decoded = parse_wif(wif)?;
    let network = decoded.network();

    let point = decoded.scalar.public_point(&SECP256K1)?;
    let compressed_key = decoded.scalar.public_key(&SECP256K1)?;
    let public_key = if decoded.compressed {
        compressed_key.to_hex()
    } else {
        hex::encode(serialize_uncompressed(&SECP256K1, &point)?)
    };

    Ok(WifSummary {
        version: decoded.version,
        network,
        compressed: decoded.compressed,
        public_key,
        address: network.map(|network| p2pkh_address(&compressed_key, network)),
    })
}

fn read_scalar(args: &DeriveArgs) -> Result<SecretScalar, CliError> {
    match (&args.hex, &args.passphrase) {
        (Some(hex), _) => Ok(SecretScalar::from_hex(hex, &SECP256K1)?),
        (None, Some(passphrase)) => {
            let key_bytes = key_bytes_from_passphrase(passphrase, args.scheme)?;
            Ok(SecretScalar::from_bytes(&*key_bytes, &SECP256K1)?)
        }
        (None, None) => Err(CliError::MissingInput(
            "--hex or --passphrase".to_string(),
        )),
    }
}

fn select_network(args: &DeriveArgs, config: &CliConfig) -> Result<Network, CliError> {
    match (args.pubkey_version, args.privkey_version, &args.network) {
        (Some(pubkey_hash), Some(private_key), _) => Ok(Network::Custom {
            pubkey_hash,
            private_key,
        }),
        (_, _, Some(name)) => Ok(parse_network(name)?),
        _ => Ok(config.network),
    }
}

fn select_onion_key(
    args: &DeriveArgs,
    config: &CliConfig,
    scalar: &SecretScalar,
) -> Result<Option<OnionKeyPair>, CliError> {
    if let Some(seed) = &args.onion_seed {
        return Ok(Some(OnionKeyPair::from_seed_hex(seed)?));
    }
    if args.onion_from_key {
        let public_key = scalar.public_key(&SECP256K1)?;
        return Ok(Some(OnionKeyPair::from_public_key_hash(&public_key_hash(
            &public_key,
        ))));
    }
    match &config.onion_seed {
        Some(seed) => Ok(Some(OnionKeyPair::from_seed_hex(seed)?)),
        None => Ok(None),
    }
}
