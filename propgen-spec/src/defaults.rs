use indexmap::IndexMap;

use crate::{Error, Literal, Result};

/// Default values keyed by prop name, in first-insertion order.
pub type DefaultValues = IndexMap<String, Literal>;

/// Parse `--defaults` tokens of the form `name:value`.
///
/// Only the first colon separates name from value, so values may contain
/// colons. A name given twice keeps its first position and its last value.
pub fn parse_defaults<I, S>(tokens: I) -> Result<DefaultValues>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut defaults = DefaultValues::new();

    for token in tokens {
        let token = token.as_ref();
        let (name, value) = token
            .split_once(':')
            .ok_or_else(|| Error::invalid_default(token))?;

        let literal = Literal::coerce(value);
        log::debug!("default '{}' reads as {}", name, literal.kind());
        defaults.insert(name.to_string(), literal);
    }

    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(token: &str) -> (String, Literal) {
        let defaults = parse_defaults([token]).unwrap();
        assert_eq!(defaults.len(), 1);
        defaults.into_iter().next().unwrap()
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_coerced_kinds() {
        assert_eq!(
            single("count:42"),
            ("count".to_string(), Literal::Int("42".into()))
        );
        assert_eq!(single("ratio:3.14"), ("ratio".to_string(), Literal::Float(3.14)));
        assert_eq!(single("flag:true"), ("flag".to_string(), Literal::Bool(true)));
        assert_eq!(single("cb:null_func"), ("cb".to_string(), Literal::NullFunction));
        assert_eq!(
            single("label:hello"),
            ("label".to_string(), Literal::String("hello".into()))
        );
    }

    #[test]
    fn test_negative_number_is_string() {
        assert_eq!(single("neg:-5"), ("neg".to_string(), Literal::String("-5".into())));
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        assert_eq!(
            single("url:http://localhost:3000"),
            ("url".to_string(), Literal::String("http://localhost:3000".into()))
        );
    }

    #[test]
    fn test_empty_value_is_empty_string() {
        assert_eq!(single("title:"), ("title".to_string(), Literal::String(String::new())));
    }

    #[test]
    fn test_last_write_wins_in_first_position() {
        let defaults = parse_defaults(["a:1", "b:2", "a:3"]).unwrap();
        let entries: Vec<_> = defaults.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), Literal::Int("3".into())),
                ("b".to_string(), Literal::Int("2".into()))
            ]
        );
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        let err = parse_defaults(["ok:1", "nocolon"]).unwrap_err();
        assert!(matches!(*err, Error::InvalidDefaultFormat { .. }));
        assert!(err.to_string().contains("'nocolon'"));
        assert!(err.to_string().contains("name:value"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_defaults(Vec::<&str>::new()).unwrap().is_empty());
    }
}
