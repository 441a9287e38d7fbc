//! Brazilian Real currency formatting.

/// Format a value as pt-BR BRL currency: `R$ 1.234,56`.
///
/// Dot as thousands separator, comma as decimal separator, always two
/// decimal places. Negative values carry a leading minus: `-R$ 78,90`.
/// Rounds to the nearest cent, half away from zero.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let reais = total_cents / 100;
    let cents = total_cents % 100;

    // Group the integer part with dots every three digits
    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R$ {},{:02}", grouped, cents)
    } else {
        format!("R$ {},{:02}", grouped, cents)
    }
}
