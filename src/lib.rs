//! Núcleo de conversão de montantes de token (ponto fixo).
//! String decimal digitada na UI <-> inteiro em unidades base do ledger.

pub mod codec;
pub mod obs;
pub mod telemetry;

pub use codec::amount::TokenAmount;
pub use codec::decode::decode;
pub use codec::encode::{encode, try_encode};
pub use codec::error::{AmountError, Result};
pub use codec::format::format_rate;
pub use codec::types::{BaseUnits, Decimals, U256};
