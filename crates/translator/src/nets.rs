//! Compile-time network parameters. Every encoder and translator is
//! parameterized by one of the param structs below.

use forkaddr_core::types::Network;

/// NetworkParams holds the encoding parameters of a network shared by both
/// chains: the legacy base58check version bytes and the CashAddr prefix.
pub trait NetworkParams {
    /// The network these parameters describe
    const NETWORK: Network;
    /// The Legacy PKH base58check version byte. 0x00 for mainnet.
    const PKH_VERSION: u8;
    /// The Legacy SH base58check version byte. 0x05 for mainnet.
    const SH_VERSION: u8;
    /// The CashAddr prefix. "bitcoincash" for mainnet.
    const CASHADDR_PREFIX: &'static str;
}

/// A param struct for Mainnet
#[derive(Debug, Clone)]
pub struct Main;

impl NetworkParams for Main {
    const NETWORK: Network = Network::Mainnet;
    const PKH_VERSION: u8 = 0x00;
    const SH_VERSION: u8 = 0x05;
    const CASHADDR_PREFIX: &'static str = "bitcoincash";
}

/// A param struct for Testnet
#[derive(Debug, Clone)]
pub struct Test;

impl NetworkParams for Test {
    const NETWORK: Network = Network::Testnet;
    const PKH_VERSION: u8 = 0x6f;
    const SH_VERSION: u8 = 0xc4;
    const CASHADDR_PREFIX: &'static str = "bchtest";
}

/// A param struct for Regtest. Legacy version bytes are shared with Testnet.
#[derive(Debug, Clone)]
pub struct Reg;

impl NetworkParams for Reg {
    const NETWORK: Network = Network::Regtest;
    const PKH_VERSION: u8 = 0x6f;
    const SH_VERSION: u8 = 0xc4;
    const CASHADDR_PREFIX: &'static str = "bchreg";
}
