//! Tipos básicos do codec (escala decimal) + U256 para ledgers de palavra fixa.

use num_bigint::BigUint;
use uint::construct_uint;
construct_uint! {
    /// Inteiro de 256 bits para ledgers cujo tipo de fio é uma palavra de 256 bits.
    pub struct U256(4);
}

/// Quantidade de dígitos fracionários do token.
pub type Decimals = u32;

/// Montante em unidades base (inteiro não-negativo de precisão arbitrária).
pub type BaseUnits = BigUint;

pub const DEFAULT_DECIMALS: Decimals = 8;      // maioria dos ledgers ICRC
pub const DEFAULT_RATE_DECIMALS: usize = 6;    // casas da taxa exibida
pub const DECIMAL_SEPARATOR: char = '.';
