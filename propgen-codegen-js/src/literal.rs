use propgen_spec::Literal;

/// Render a default value as a JavaScript expression.
///
/// Strings are wrapped in double quotes as-is; embedded quotes are not escaped.
pub fn format_default_value(value: &Literal) -> String {
    match value {
        Literal::NullFunction => "() => null".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(digits) => digits.clone(),
        Literal::Float(f) => format_float(*f),
        Literal::String(s) => format!("\"{}\"", s),
    }
}

/// Shortest round-trip form of a non-negative float.
///
/// Plain notation keeps a fractional part (`5.0`). Exponents below -4 or
/// from 16 up use scientific notation with a signed, two-digit exponent
/// (`1e-05`, `1.5e+16`).
fn format_float(value: f64) -> String {
    if value.is_infinite() {
        return "inf".to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}
