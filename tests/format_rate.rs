use token_amount_core::codec::format::{exchange_rate, format_rate, format_rate_default};
use token_amount_core::TokenAmount;

#[test]
fn vectors() {
    assert_eq!(format_rate(0.0, 6), "0");
    assert_eq!(format_rate(1.5, 6), "1.5");
    assert_eq!(format_rate(1.000000, 6), "1");
}

#[test]
fn output_never_has_trailing_zero_or_dot() {
    for v in [0.1, 0.25, 1.0, 10.0, 1234.5, 0.000001, 0.0000004, 99.999999, 1e12] {
        let s = format_rate_default(v);
        assert!(!s.ends_with('.'), "{} -> {}", v, s);
        if s.contains('.') {
            assert!(!s.ends_with('0'), "{} -> {}", v, s);
        }
        let frac_len = s.split_once('.').map_or(0, |(_, f)| f.len());
        assert!(frac_len <= 6, "{} -> {}", v, s);
    }
}

#[test]
fn numeric_strings_share_the_number_path() {
    assert_eq!(format_rate("1.500", 6), format_rate(1.5, 6));
    assert_eq!(format_rate(" 7 ", 6), "7");
}

#[test]
fn pool_rate_between_tokens() {
    // 100 ckBTC (8 casas) por 2_500_000.75 USDC (6 casas)
    let btc = TokenAmount::parse("100", 8);
    let usdc = TokenAmount::parse("2500000.75", 6);
    assert_eq!(exchange_rate(&btc, &usdc, 6), "25000.0075");
    assert_eq!(exchange_rate(&usdc, &btc, 8), "0.00003999");
}

#[test]
fn exact_ties_round_half_to_even() {
    // empates exatos em binário seguem o `{:.N}` do Rust (par mais próximo)
    assert_eq!(format_rate(0.5, 0), "0");
    assert_eq!(format_rate(1.5, 0), "2");
    assert_eq!(format_rate(2.5, 0), "2");
    assert_eq!(format_rate(0.125, 2), "0.12");
    assert_eq!(format_rate(0.375, 2), "0.38");
}
