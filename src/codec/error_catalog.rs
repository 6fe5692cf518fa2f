//! Catálogo imutável de erros do codec de montantes.
use core::fmt;

/// Código de erro do codec.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AmountErrorCode {
    /// Campo de montante vazio.
    EmptyInput,
    /// Texto não tem forma numérica.
    MalformedInput,
    /// Montante negativo (unidades base são sempre >= 0).
    NegativeAmount,
    /// Valor não cabe no tipo inteiro de destino.
    Overflow,
    /// Operação entre montantes com `decimals` diferentes.
    DecimalsMismatch,
    /// Denominador zero em razão/taxa.
    ZeroDenominator,
}

impl AmountErrorCode {
    /// Código textual estável do erro.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "AMT-0001",
            Self::MalformedInput => "AMT-0002",
            Self::NegativeAmount => "AMT-0003",
            Self::Overflow => "AMT-0004",
            Self::DecimalsMismatch => "AMT-0005",
            Self::ZeroDenominator => "AMT-0006",
        }
    }

    /// Título curto em português.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Montante vazio",
            Self::MalformedInput => "Montante malformado",
            Self::NegativeAmount => "Montante negativo",
            Self::Overflow => "Overflow numérico",
            Self::DecimalsMismatch => "Decimais incompatíveis",
            Self::ZeroDenominator => "Denominador zero",
        }
    }

    /// Mensagem base em português.
    pub const fn message_pt(&self) -> &'static str {
        match self {
            Self::EmptyInput => "amount não pode ser vazio",
            Self::MalformedInput => "amount '{amount}' não é um número decimal",
            Self::NegativeAmount => "amount deve ser >= 0",
            Self::Overflow => "valor excede o tipo {target}",
            Self::DecimalsMismatch => "decimals {left} != {right}",
            Self::ZeroDenominator => "denominador da taxa é 0",
        }
    }

    /// Retorna todas as variantes em ordem estável.
    pub fn all() -> &'static [AmountErrorCode] {
        const ALL: &[AmountErrorCode] = &[
            AmountErrorCode::EmptyInput,
            AmountErrorCode::MalformedInput,
            AmountErrorCode::NegativeAmount,
            AmountErrorCode::Overflow,
            AmountErrorCode::DecimalsMismatch,
            AmountErrorCode::ZeroDenominator,
        ];
        ALL
    }
}

impl fmt::Display for AmountErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (pt-BR).
pub fn default_locale_message(code: AmountErrorCode) -> &'static str {
    code.message_pt()
}
