//! Defines parameterized encoders for the two supported chains: legacy
//! base58check for BTC and CashAddr for BCH.

use std::marker::PhantomData;

use forkaddr_core::{
    enc::{
        decode_base58, decode_cashaddr, encode_base58, encode_cashaddr, AddressEncoder,
        EncodingError, EncodingResult,
    },
    types::{AddressKind, DecodedAddress},
};

use crate::nets::{Main, NetworkParams, Reg, Test};

/// The available address types, implemented as a type enum around strings.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub enum Address {
    /// Pay to Pubkeyhash
    PKH(String),
    /// Pay to Scripthash
    SH(String),
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        match &self {
            Address::PKH(s) => s,
            Address::SH(s) => s,
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Address {
    /// Wrap a string in the variant matching `kind`
    pub fn new(kind: AddressKind, s: String) -> Self {
        match kind {
            AddressKind::PubkeyHash => Address::PKH(s),
            AddressKind::ScriptHash => Address::SH(s),
        }
    }

    /// Get a clone of the string underlying the address type.
    pub fn as_string(&self) -> String {
        self.as_ref().to_owned()
    }

    /// Consume the address, returning the underlying string.
    pub fn into_string(self) -> String {
        match self {
            Address::PKH(s) | Address::SH(s) => s,
        }
    }

    /// The address kind implied by the variant
    pub fn kind(&self) -> AddressKind {
        match self {
            Address::PKH(_) => AddressKind::PubkeyHash,
            Address::SH(_) => AddressKind::ScriptHash,
        }
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

fn check_network<P: NetworkParams>(decoded: &DecodedAddress) -> EncodingResult<()> {
    if decoded.network != P::NETWORK {
        return Err(EncodingError::WrongNetwork {
            got: decoded.network,
            expected: P::NETWORK,
        });
    }
    Ok(())
}

/// Catch a variant that disagrees with the kind its string decodes to
fn check_kind(addr: &Address, kind: AddressKind) -> EncodingResult<()> {
    if addr.kind() != kind {
        return Err(EncodingError::KindMismatch {
            got: kind,
            expected: addr.kind(),
        });
    }
    Ok(())
}

/// Marker trait to simplify encoder representation elsewhere
pub trait ForkEncoderMarker:
    AddressEncoder<Address = Address, Error = EncodingError>
{
}

/// The legacy base58check encoder used by BTC. Parameterized by a
/// `NetworkParams` type.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyEncoder<P: NetworkParams>(PhantomData<fn(P) -> P>);

impl<P: NetworkParams> LegacyEncoder<P> {
    fn parse(s: &str) -> EncodingResult<(AddressKind, Vec<u8>)> {
        let (version, hash) = decode_base58(s)?;
        let kind = if version == P::PKH_VERSION {
            AddressKind::PubkeyHash
        } else if version == P::SH_VERSION {
            AddressKind::ScriptHash
        } else {
            return Err(EncodingError::WrongVersion { got: version });
        };
        if hash.len() != 20 {
            return Err(EncodingError::InvalidSizeError);
        }
        Ok((kind, hash))
    }
}

impl<P: NetworkParams> AddressEncoder for LegacyEncoder<P> {
    type Address = Address;
    type Error = EncodingError;

    fn encode_address(decoded: &DecodedAddress) -> EncodingResult<Address> {
        check_network::<P>(decoded)?;
        if decoded.hash.len() != 20 {
            return Err(EncodingError::InvalidSizeError);
        }
        let version = match decoded.kind {
            AddressKind::PubkeyHash => P::PKH_VERSION,
            AddressKind::ScriptHash => P::SH_VERSION,
        };
        Ok(Address::new(decoded.kind, encode_base58(version, &decoded.hash)))
    }

    fn decode_address(addr: &Address) -> EncodingResult<DecodedAddress> {
        let (kind, hash) = Self::parse(addr.as_ref())?;
        check_kind(addr, kind)?;
        Ok(DecodedAddress::new(P::NETWORK, kind, hash))
    }

    fn string_to_address(s: &str) -> EncodingResult<Address> {
        let (kind, _) = Self::parse(s)?;
        Ok(Address::new(kind, s.to_owned()))
    }
}

impl<P: NetworkParams> ForkEncoderMarker for LegacyEncoder<P> {}

/// The CashAddr encoder used by BCH. Parameterized by a `NetworkParams`
/// type. Addresses are normalized to lowercase with the prefix attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CashAddrEncoder<P: NetworkParams>(PhantomData<fn(P) -> P>);

impl<P: NetworkParams> AddressEncoder for CashAddrEncoder<P> {
    type Address = Address;
    type Error = EncodingError;

    fn encode_address(decoded: &DecodedAddress) -> EncodingResult<Address> {
        check_network::<P>(decoded)?;
        let s = encode_cashaddr(P::CASHADDR_PREFIX, decoded.kind, &decoded.hash)?;
        Ok(Address::new(decoded.kind, s))
    }

    fn decode_address(addr: &Address) -> EncodingResult<DecodedAddress> {
        let (kind, hash) = decode_cashaddr(P::CASHADDR_PREFIX, addr.as_ref())?;
        check_kind(addr, kind)?;
        Ok(DecodedAddress::new(P::NETWORK, kind, hash))
    }

    fn string_to_address(s: &str) -> EncodingResult<Address> {
        let (kind, hash) = decode_cashaddr(P::CASHADDR_PREFIX, s)?;
        let s = encode_cashaddr(P::CASHADDR_PREFIX, kind, &hash)?;
        Ok(Address::new(kind, s))
    }
}

impl<P: NetworkParams> ForkEncoderMarker for CashAddrEncoder<P> {}

/// A legacy encoder for Mainnet
pub type MainnetLegacyEncoder = LegacyEncoder<Main>;

/// A legacy encoder for Testnet
pub type TestnetLegacyEncoder = LegacyEncoder<Test>;

/// A legacy encoder for Regtest
pub type RegtestLegacyEncoder = LegacyEncoder<Reg>;

/// A CashAddr encoder for Mainnet
pub type MainnetCashAddrEncoder = CashAddrEncoder<Main>;

/// A CashAddr encoder for Testnet
pub type TestnetCashAddrEncoder = CashAddrEncoder<Test>;

/// A CashAddr encoder for Regtest
pub type RegtestCashAddrEncoder = CashAddrEncoder<Reg>;

#[cfg(test)]
mod test {
    use super::*;
    use forkaddr_core::types::Network;

    #[test]
    fn it_wraps_address_strings() {
        let cases = [
            (
                "1AqE7oGF1EUoJviX1uuYrwpRBdEBTuGhES",
                Address::PKH("1AqE7oGF1EUoJviX1uuYrwpRBdEBTuGhES".to_owned()),
            ),
            (
                "3HXNFmJpxjgTVFN35Y9f6Waje5YFsLEQZ2",
                Address::SH("3HXNFmJpxjgTVFN35Y9f6Waje5YFsLEQZ2".to_owned()),
            ),
        ];
        for case in cases.iter() {
            assert_eq!(MainnetLegacyEncoder::string_to_address(case.0).unwrap(), case.1);
        }

        let cases = [
            (
                "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
                Address::PKH("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a".to_owned()),
            ),
            (
                "PPM2QSZNHKS23Z7629MMS6S4CWEF74VCWVN0H829PQ",
                Address::SH("bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq".to_owned()),
            ),
        ];
        for case in cases.iter() {
            assert_eq!(MainnetCashAddrEncoder::string_to_address(case.0).unwrap(), case.1);
        }

        let errors = [
            "hello",
            "this isn't a real address",
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            "bc1qza7dfgl2q83cf68fqkkdd754qx546h4u9vd9tg",
        ];
        for case in errors.iter() {
            match MainnetLegacyEncoder::string_to_address(case) {
                Err(_) => {}
                other => panic!("expected err, got {:?}", other),
            }
        }
    }

    #[test]
    fn it_rejects_other_networks() {
        // mainnet legacy under testnet params
        match TestnetLegacyEncoder::string_to_address("1AqE7oGF1EUoJviX1uuYrwpRBdEBTuGhES") {
            Err(EncodingError::WrongVersion { got: 0x00 }) => {}
            other => panic!("expected WrongVersion, got {:?}", other),
        }
        match RegtestCashAddrEncoder::string_to_address(
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
        ) {
            Err(EncodingError::WrongPrefix { .. }) => {}
            other => panic!("expected WrongPrefix, got {:?}", other),
        }

        let decoded =
            MainnetLegacyEncoder::decode_str("1AqE7oGF1EUoJviX1uuYrwpRBdEBTuGhES").unwrap();
        match TestnetCashAddrEncoder::encode_address(&decoded) {
            Err(EncodingError::WrongNetwork { got, expected }) => {
                assert_eq!(got, Network::Mainnet);
                assert_eq!(expected, Network::Testnet);
            }
            other => panic!("expected WrongNetwork, got {:?}", other),
        }
    }

    #[test]
    fn it_encodes_testnet_and_regtest_prefixes() {
        let hash = hex::decode("76a04053bda0a88bda5177b86a15c3b29f559873").unwrap();
        let pkh = DecodedAddress::new(Network::Testnet, AddressKind::PubkeyHash, hash.clone());
        let legacy = TestnetLegacyEncoder::encode_address(&pkh).unwrap();
        assert!(legacy.as_ref().starts_with('m') || legacy.as_ref().starts_with('n'));
        assert_eq!(TestnetLegacyEncoder::decode_address(&legacy).unwrap(), pkh);

        let cash = TestnetCashAddrEncoder::encode_address(&pkh).unwrap();
        assert!(cash.as_ref().starts_with("bchtest:q"));

        let sh = DecodedAddress::new(Network::Regtest, AddressKind::ScriptHash, hash);
        assert!(RegtestLegacyEncoder::encode_address(&sh)
            .unwrap()
            .as_ref()
            .starts_with('2'));
        assert!(RegtestCashAddrEncoder::encode_address(&sh)
            .unwrap()
            .as_ref()
            .starts_with("bchreg:p"));
    }

    #[test]
    fn it_refuses_long_hashes_in_legacy() {
        let decoded = DecodedAddress::new(Network::Mainnet, AddressKind::ScriptHash, vec![7u8; 32]);
        let cash = MainnetCashAddrEncoder::encode_address(&decoded).unwrap();
        assert_eq!(MainnetCashAddrEncoder::decode_address(&cash).unwrap(), decoded);
        match MainnetLegacyEncoder::encode_address(&decoded) {
            Err(EncodingError::InvalidSizeError) => {}
            other => panic!("expected InvalidSizeError, got {:?}", other),
        }
    }

    #[test]
    fn it_catches_mismatched_variants() {
        let wrong = Address::SH("1AqE7oGF1EUoJviX1uuYrwpRBdEBTuGhES".to_owned());
        match MainnetLegacyEncoder::decode_address(&wrong) {
            Err(EncodingError::KindMismatch { got, expected }) => {
                assert_eq!(got, AddressKind::PubkeyHash);
                assert_eq!(expected, AddressKind::ScriptHash);
            }
            other => panic!("expected KindMismatch, got {:?}", other),
        }

        let wrong = Address::PKH("bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq".to_owned());
        match MainnetCashAddrEncoder::decode_address(&wrong) {
            Err(EncodingError::KindMismatch { got, .. }) => assert_eq!(got, AddressKind::ScriptHash),
            other => panic!("expected KindMismatch, got {:?}", other),
        }
    }
}
