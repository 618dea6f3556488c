//! Command-line arguments.

use clap::{ArgGroup, Args, Parser, Subcommand};
use coinkey_crypto::PassphraseScheme;

use crate::config::parse_version_byte;

#[derive(Parser)]
#[command(name = "coinkey", version)]
#[command(about = "Derive coin addresses, WIF keys and onion addresses from a secp256k1 key")]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the public key, address, WIF keys and optional onion address
    Derive(DeriveArgs),
    /// Check a Base58Check or onion v3 address
    Validate {
        /// The address to check
        address: String,
    },
    /// Decode a WIF private key and show its public identifiers
    DecodeWif {
        /// The WIF string
        wif: String,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("key").required(true).args(["hex", "passphrase"])))]
pub struct DeriveArgs {
    /// Private scalar as hex, with or without 0x
    #[arg(long)]
    pub hex: Option<String>,

    /// Passphrase stretched into the private scalar
    #[arg(long)]
    pub passphrase: Option<String>,

    /// Passphrase scheme: iguana or double-sha256
    #[arg(long, default_value_t = PassphraseScheme::Iguana)]
    pub scheme: PassphraseScheme,

    /// Network preset: bitcoin, testnet or komodo
    #[arg(long, conflicts_with_all = ["pubkey_version", "privkey_version"])]
    pub network: Option<String>,

    /// Custom address version byte (decimal or 0x-hex)
    #[arg(long, requires = "privkey_version", value_parser = parse_version_byte)]
    pub pubkey_version: Option<u8>,

    /// Custom WIF version byte (decimal or 0x-hex)
    #[arg(long, requires = "pubkey_version", value_parser = parse_version_byte)]
    pub privkey_version: Option<u8>,

    /// 32-byte hex seed of the hidden-service key
    #[arg(long, conflicts_with = "onion_from_key")]
    pub onion_seed: Option<String>,

    /// Seed the hidden-service key with SHA-256 of the public-key hash
    #[arg(long)]
    pub onion_from_key: bool,
}
