//! Re-exports of common types

pub use crate::{
    chain::Chain,
    enc::*,
    nets::*,
    translator::*,
    TranslateError, TranslateResult,
};

pub use forkaddr_core::prelude::*;

#[cfg(any(feature = "mainnet", feature = "testnet", feature = "regtest"))]
pub use crate::defaults::*;
