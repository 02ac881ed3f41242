//! Default value literals and the coercion rules applied to raw `--defaults` text.

/// Sentinel text that stands for a function returning `null`.
pub const NULL_FUNC: &str = "null_func";

/// A default value, coerced from its raw command-line text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A function producing `null` (`null_func` on the command line).
    NullFunction,
    Bool(bool),
    /// Decimal digits with leading zeros removed, of any length.
    Int(String),
    Float(f64),
    /// Raw text, kept exactly as given.
    String(String),
}

impl Literal {
    /// Coerce raw value text into a literal.
    ///
    /// Rules are tried in order and the first match wins:
    /// the `null_func` sentinel, digits only, digits with a single dot,
    /// `true`/`false` in any case, and finally plain text.
    ///
    /// A leading sign is never treated as numeric, so `-5` stays a string.
    pub fn coerce(text: &str) -> Self {
        if text == NULL_FUNC {
            return Literal::NullFunction;
        }

        if is_digits(text) {
            let digits = text.trim_start_matches('0');
            let digits = if digits.is_empty() { "0" } else { digits };
            return Literal::Int(digits.to_string());
        }

        if is_decimal(text) {
            if let Ok(value) = text.parse() {
                return Literal::Float(value);
            }
        }

        if text.eq_ignore_ascii_case("true") {
            return Literal::Bool(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Literal::Bool(false);
        }

        Literal::String(text.to_string())
    }

    /// Short name of the literal kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::NullFunction => "null function",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Digits with at most one `.` somewhere among them.
fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((int, frac)) => {
            !(int.is_empty() && frac.is_empty())
                && int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
        }
        None => is_digits(text),
    }
}
