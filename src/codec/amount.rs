//! Montante com metadado de escala explícito.
//! Substitui as leituras de `decimals` em registros globais: quem cria o
//! montante informa a escala do token.

use core::fmt;

use num_traits::{ToPrimitive, Zero};

use super::decode::decode;
use super::encode::{encode, try_encode};
use super::error::{AmountError, Result};
use super::error_catalog::AmountErrorCode;
use super::types::{BaseUnits, Decimals, U256};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    pub value: BaseUnits,
    pub decimals: Decimals,
}

impl TokenAmount {
    pub fn new(value: BaseUnits, decimals: Decimals) -> Self {
        Self { value, decimals }
    }

    pub fn zero(decimals: Decimals) -> Self {
        Self::new(BaseUnits::zero(), decimals)
    }

    /// Parse leniente (ver [`encode`]).
    pub fn parse(raw: &str, decimals: Decimals) -> Self {
        Self::new(encode(raw, decimals), decimals)
    }

    /// Parse estrito (ver [`try_encode`]).
    pub fn try_parse(raw: &str, decimals: Decimals) -> Result<Self> {
        Ok(Self::new(try_encode(raw, decimals)?, decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn to_u128(&self) -> Result<u128> {
        self.value.to_u128().ok_or_else(|| self.overflow("u128"))
    }

    /// Downcast para palavra de 256 bits (ledgers estilo ERC-20).
    pub fn to_u256(&self) -> Result<U256> {
        if self.value.bits() > 256 {
            return Err(self.overflow("U256"));
        }
        Ok(U256::from_big_endian(&self.value.to_bytes_be()))
    }

    pub fn checked_add(&self, other: &TokenAmount) -> Result<TokenAmount> {
        self.ensure_same_scale(other)?;
        Ok(Self::new(&self.value + &other.value, self.decimals))
    }

    /// Subtração sem underflow: `other > self` é `Overflow`.
    pub fn checked_sub(&self, other: &TokenAmount) -> Result<TokenAmount> {
        self.ensure_same_scale(other)?;
        if other.value > self.value {
            return Err(AmountError::new(AmountErrorCode::Overflow)
                .with_context("target", "BaseUnits")
                .with_context("lhs", self)
                .with_context("rhs", other));
        }
        Ok(Self::new(&self.value - &other.value, self.decimals))
    }

    fn ensure_same_scale(&self, other: &TokenAmount) -> Result<()> {
        if self.decimals != other.decimals {
            crate::amount_bail!(AmountErrorCode::DecimalsMismatch, left => self.decimals, right => other.decimals);
        }
        Ok(())
    }

    fn overflow(&self, target: &str) -> AmountError {
        AmountError::new(AmountErrorCode::Overflow)
            .with_context("target", target)
            .with_context("value", &self.value)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decode(&self.value, self.decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_parse_display_scenario() {
        let typed = TokenAmount::parse("12.5", 8);
        assert_eq!(typed.value, BaseUnits::from(1_250_000_000u64));
        let reported = TokenAmount::new(BaseUnits::from(1_250_000_000u64), 8);
        assert_eq!(reported.to_string(), "12.5");
        assert_eq!(typed, reported);
    }

    #[test]
    fn t_try_parse_distinguishes_empty() {
        assert!(TokenAmount::parse("", 8).is_zero());
        let err = TokenAmount::try_parse("", 8).unwrap_err();
        assert_eq!(err.code, AmountErrorCode::EmptyInput);
    }

    #[test]
    fn t_u128_u256_downcast() {
        let a = TokenAmount::parse("1.5", 18);
        assert_eq!(a.to_u128().unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(a.to_u256().unwrap(), U256::from(1_500_000_000_000_000_000u128));

        let big = TokenAmount::new(BaseUnits::from(u128::MAX) + 1u8, 0);
        assert_eq!(big.to_u128().unwrap_err().code, AmountErrorCode::Overflow);
        assert_eq!(big.to_u256().unwrap(), U256::from(u128::MAX) + U256::from(1u8));

        let huge = TokenAmount::new(BaseUnits::from(1u8) << 256usize, 0);
        assert_eq!(huge.to_u256().unwrap_err().code, AmountErrorCode::Overflow);
    }

    #[test]
    fn t_add_sub_same_scale() {
        let a = TokenAmount::parse("10", 8);
        let b = TokenAmount::parse("2.5", 8);
        assert_eq!(a.checked_sub(&b).unwrap().to_string(), "7.5");
        assert_eq!(a.checked_add(&b).unwrap().to_string(), "12.5");
        assert_eq!(b.checked_sub(&a).unwrap_err().code, AmountErrorCode::Overflow);
    }

    #[test]
    fn t_mismatched_scale_rejected() {
        let a = TokenAmount::parse("1", 8);
        let b = TokenAmount::parse("1", 6);
        let err = a.checked_add(&b).unwrap_err();
        assert_eq!(err.code, AmountErrorCode::DecimalsMismatch);
        assert_eq!(err.to_user_string(), "[AMT-0005] decimals 8 != 6");
    }
}
