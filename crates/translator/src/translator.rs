use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use forkaddr_core::{
    enc::{AddressEncoder, EncodingResult},
    types::{DecodedAddress, Network},
};

use crate::{
    chain::Chain,
    enc::{Address, CashAddrEncoder, ForkEncoderMarker, LegacyEncoder},
    nets::{Main, NetworkParams, Reg, Test},
    TranslateError, TranslateResult,
};

/// One address or an ordered batch of addresses. `translate` returns the
/// same shape it was given. Deserializes from either a JSON string or a JSON
/// array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Addresses {
    /// A single address
    Single(String),
    /// An ordered batch of addresses
    Batch(Vec<String>),
}

impl Addresses {
    /// View the addresses as a slice, regardless of shape
    pub fn as_slice(&self) -> &[String] {
        match self {
            Addresses::Single(s) => std::slice::from_ref(s),
            Addresses::Batch(v) => v,
        }
    }

    /// The number of addresses
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True for an empty batch
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The first address, if any
    pub fn first(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }

    /// Iterate over the addresses in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }

    /// Flatten into a vector, regardless of shape
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Addresses::Single(s) => vec![s],
            Addresses::Batch(v) => v,
        }
    }

    /// Apply `f` to every address, keeping the shape. Stops at the first
    /// error.
    fn try_map<F>(self, mut f: F) -> TranslateResult<Addresses>
    where
        F: FnMut(&str) -> TranslateResult<String>,
    {
        match self {
            Addresses::Single(s) => f(&s).map(Addresses::Single),
            Addresses::Batch(v) => v
                .iter()
                .map(|s| f(s))
                .collect::<TranslateResult<Vec<_>>>()
                .map(Addresses::Batch),
        }
    }
}

impl From<&str> for Addresses {
    fn from(s: &str) -> Self {
        Addresses::Single(s.to_owned())
    }
}

impl From<String> for Addresses {
    fn from(s: String) -> Self {
        Addresses::Single(s)
    }
}

impl From<Address> for Addresses {
    fn from(a: Address) -> Self {
        Addresses::Single(a.into_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for Addresses {
    fn from(v: Vec<S>) -> Self {
        Addresses::Batch(v.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Addresses {
    fn from(v: &[S]) -> Self {
        Addresses::Batch(v.iter().map(|s| s.as_ref().to_owned()).collect())
    }
}

fn decode_with<E: ForkEncoderMarker>(address: &str) -> EncodingResult<DecodedAddress> {
    E::decode_str(address)
}

/// Translates addresses between the legacy and CashAddr encodings.
/// Implementors decide how the network of an address is resolved; every
/// provided method is built on `decode` and `encode`. Stateless: every
/// function is associated, and calls share nothing.
pub trait ChainTranslator {
    /// Decode `address` under `chain`'s rules.
    fn decode(chain: Chain, address: &str) -> EncodingResult<DecodedAddress>;

    /// Encode `decoded` under `chain`'s rules.
    fn encode(chain: Chain, decoded: &DecodedAddress) -> EncodingResult<Address>;

    /// Determine which chain's rules `address` satisfies, trying BTC first.
    /// Returns `None` if neither accepts it. This is a best-effort sniff, not
    /// a validator.
    fn address_coin(address: &str) -> Option<Chain> {
        Chain::ALL.iter().copied().find(|chain| {
            match Self::decode(*chain, address) {
                Ok(_) => true,
                Err(e) => {
                    trace!(%chain, address, err = %e, "address rejected");
                    false
                }
            }
        })
    }

    /// Translate a single address from `source` to `target`.
    fn translate_one(address: &str, target: Chain, source: Chain) -> TranslateResult<String> {
        let decoded = Self::decode(source, address)?;
        let translated = Self::encode(target, &decoded)?.into_string();
        trace!(%source, %target, network = %decoded.network, address, translated = %translated, "translated address");
        Ok(translated)
    }

    /// Translate one address or a batch of addresses to `target`.
    ///
    /// If `source` is `None`, the chain of the first address is sniffed and
    /// assumed for the entire batch. A batch mixing chains must pass
    /// `source` explicitly or use `translate_mixed`; otherwise the elements
    /// on the other chain fail to decode and the whole call errors.
    ///
    /// Any decoding failure fails the whole call.
    fn translate<A>(addresses: A, target: Chain, source: Option<Chain>) -> TranslateResult<Addresses>
    where
        A: Into<Addresses>,
    {
        let addresses = addresses.into();
        let source = match source {
            Some(chain) => chain,
            None => {
                if addresses.is_empty() {
                    return Ok(addresses);
                }
                let first = addresses.first().unwrap_or_default();
                let chain = Self::address_coin(first)
                    .ok_or_else(|| TranslateError::UnknownChain(first.to_owned()))?;
                debug!(%chain, count = addresses.len(), "inferred source chain from first address");
                chain
            }
        };
        addresses.try_map(|a| Self::translate_one(a, target, source))
    }

    /// Translate addresses to `target`, sniffing the chain of every element
    /// separately.
    fn translate_mixed<A>(addresses: A, target: Chain) -> TranslateResult<Addresses>
    where
        A: Into<Addresses>,
    {
        addresses.into().try_map(|a| {
            let source = Self::address_coin(a).ok_or_else(|| TranslateError::UnknownChain(a.to_owned()))?;
            Self::translate_one(a, target, source)
        })
    }

    /// Translate incoming CashAddr addresses to legacy addresses.
    fn translate_input<A>(addresses: A) -> TranslateResult<Addresses>
    where
        A: Into<Addresses>,
    {
        Self::translate(addresses, Chain::Btc, Some(Chain::Bch))
    }

    /// Translate outgoing legacy addresses to CashAddr addresses.
    fn translate_output<A>(addresses: A) -> TranslateResult<Addresses>
    where
        A: Into<Addresses>,
    {
        Self::translate(addresses, Chain::Bch, Some(Chain::Btc))
    }
}

/// Translates addresses of one fixed network. Parameterized by a
/// `NetworkParams` type. Addresses of any other network are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTranslator<P: NetworkParams>(PhantomData<fn(P) -> P>);

impl<P: NetworkParams> ChainTranslator for NetworkTranslator<P> {
    fn decode(chain: Chain, address: &str) -> EncodingResult<DecodedAddress> {
        match chain {
            Chain::Btc => decode_with::<LegacyEncoder<P>>(address),
            Chain::Bch => decode_with::<CashAddrEncoder<P>>(address),
        }
    }

    fn encode(chain: Chain, decoded: &DecodedAddress) -> EncodingResult<Address> {
        match chain {
            Chain::Btc => LegacyEncoder::<P>::encode_address(decoded),
            Chain::Bch => CashAddrEncoder::<P>::encode_address(decoded),
        }
    }
}

/// A translator for Mainnet
pub type MainnetTranslator = NetworkTranslator<Main>;

/// A translator for Testnet
pub type TestnetTranslator = NetworkTranslator<Test>;

/// A translator for Regtest
pub type RegtestTranslator = NetworkTranslator<Reg>;

/// Translates addresses of any network. The network is resolved per address
/// while decoding, trying mainnet, then testnet, then regtest, and carried
/// through `DecodedAddress` to the encoder.
///
/// Testnet and regtest share their legacy version bytes, so a legacy
/// `m`/`n`/`2` address always resolves to testnet. Use `RegtestTranslator`
/// to translate legacy regtest addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressTranslator;

impl ChainTranslator for AddressTranslator {
    fn decode(chain: Chain, address: &str) -> EncodingResult<DecodedAddress> {
        let mut err = match MainnetTranslator::decode(chain, address) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => e,
        };
        let others: [fn(Chain, &str) -> EncodingResult<DecodedAddress>; 2] =
            [TestnetTranslator::decode, RegtestTranslator::decode];
        for decode in others.iter() {
            match decode(chain, address) {
                Ok(decoded) => return Ok(decoded),
                // keep the most specific failure
                Err(e) if err.is_network_mismatch() && !e.is_network_mismatch() => err = e,
                Err(_) => {}
            }
        }
        Err(err)
    }

    fn encode(chain: Chain, decoded: &DecodedAddress) -> EncodingResult<Address> {
        match decoded.network {
            Network::Mainnet => MainnetTranslator::encode(chain, decoded),
            Network::Testnet => TestnetTranslator::encode(chain, decoded),
            Network::Regtest => RegtestTranslator::encode(chain, decoded),
        }
    }
}
