//! The chain-agnostic address representation shared by all encoders.

use serde::{Deserialize, Serialize};

use crate::hashes::hash160;

/// The network an address belongs to. Encoders are parameterized by a single
/// network, and refuse to encode a `DecodedAddress` from another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main network
    Mainnet,
    /// Public test network
    Testnet,
    /// Local regression-test network
    Regtest,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        };
        f.write_str(s)
    }
}

/// The predicate an address commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// Pay to Pubkeyhash
    PubkeyHash,
    /// Pay to Scripthash
    ScriptHash,
}

/// An address with its textual encoding stripped away. Decoding a string
/// under one chain's rules produces a `DecodedAddress`, and encoding it under
/// another chain's rules produces the equivalent address on that chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedAddress {
    /// The network whose version byte or prefix the address carried
    pub network: Network,
    /// Pubkey hash or script hash
    pub kind: AddressKind,
    /// The hash payload. 20 bytes for every legacy address.
    pub hash: Vec<u8>,
}

impl DecodedAddress {
    /// Instantiate a new `DecodedAddress`
    pub fn new<T>(network: Network, kind: AddressKind, hash: T) -> Self
    where
        T: Into<Vec<u8>>,
    {
        Self {
            network,
            kind,
            hash: hash.into(),
        }
    }

    /// Build the pubkey-hash address of a serialized public key
    pub fn p2pkh(network: Network, pubkey: &[u8]) -> Self {
        Self::new(network, AddressKind::PubkeyHash, hash160(pubkey).to_vec())
    }

    /// Build the script-hash address of a serialized redeem script
    pub fn p2sh(network: Network, redeem_script: &[u8]) -> Self {
        Self::new(network, AddressKind::ScriptHash, hash160(redeem_script).to_vec())
    }

    /// The hash payload
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}
