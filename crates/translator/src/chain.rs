use serde::{Deserialize, Serialize};

use crate::TranslateError;

/// The chains an address may be translated between. Each variant selects one
/// `AddressEncoder` in the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Bitcoin, legacy base58check addresses
    Btc,
    /// Bitcoin Cash, CashAddr addresses
    Bch,
}

impl Chain {
    /// All supported chains, in sniffing order
    pub const ALL: [Chain; 2] = [Chain::Btc, Chain::Bch];

    /// The short identifier of the chain
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Btc => "btc",
            Chain::Bch => "bch",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Chain {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "btc" => Ok(Chain::Btc),
            "bch" => Ok(Chain::Bch),
            _ => Err(TranslateError::UnsupportedChain(s.to_owned())),
        }
    }
}
