use forkaddr_core::enc::AddressEncoder;

use crate::{chain::Chain, enc::Address, translator::ChainTranslator, TranslateError};

#[cfg(feature = "mainnet")]
/// Types bound to the default network
pub mod network {
    /// The default translator, selected by feature flag
    pub type Translator = crate::translator::MainnetTranslator;
    /// The default legacy encoder, selected by feature flag
    pub type LegacyEncoder = crate::enc::MainnetLegacyEncoder;
    /// The default CashAddr encoder, selected by feature flag
    pub type CashAddrEncoder = crate::enc::MainnetCashAddrEncoder;
}

#[cfg(all(feature = "testnet", not(feature = "mainnet")))]
/// Types bound to the default network
pub mod network {
    /// The default translator, selected by feature flag
    pub type Translator = crate::translator::TestnetTranslator;
    /// The default legacy encoder, selected by feature flag
    pub type LegacyEncoder = crate::enc::TestnetLegacyEncoder;
    /// The default CashAddr encoder, selected by feature flag
    pub type CashAddrEncoder = crate::enc::TestnetCashAddrEncoder;
}

#[cfg(all(feature = "regtest", not(any(feature = "mainnet", feature = "testnet"))))]
/// Types bound to the default network
pub mod network {
    /// The default translator, selected by feature flag
    pub type Translator = crate::translator::RegtestTranslator;
    /// The default legacy encoder, selected by feature flag
    pub type LegacyEncoder = crate::enc::RegtestLegacyEncoder;
    /// The default CashAddr encoder, selected by feature flag
    pub type CashAddrEncoder = crate::enc::RegtestCashAddrEncoder;
}

/// Parses either encoding on the default network, trying legacy first.
impl std::str::FromStr for Address {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match network::Translator::address_coin(s) {
            Some(Chain::Btc) => Ok(network::LegacyEncoder::string_to_address(s)?),
            Some(Chain::Bch) => Ok(network::CashAddrEncoder::string_to_address(s)?),
            None => Err(TranslateError::UnknownChain(s.to_owned())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: &str = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(|e: TranslateError| serde::de::Error::custom(e.to_string()))
    }
}
