use crate::{DefaultValues, PropertySpec, Result, parse_defaults, parse_properties};

/// Everything one invocation describes about a component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    /// Display name, used as the export binding and the file stem
    pub name: String,
    pub props: Vec<PropertySpec>,
    pub defaults: DefaultValues,
}

impl ComponentSpec {
    /// Parse raw `--props` and `--defaults` tokens for a component.
    ///
    /// Props are validated before defaults; the first malformed token is reported.
    /// Defaults are not checked against the declared props.
    pub fn parse<P, D>(name: impl Into<String>, props: P, defaults: D) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let props = parse_properties(props)?;
        let defaults = parse_defaults(defaults)?;

        Ok(Self {
            name: name.into(),
            props,
            defaults,
        })
    }

    pub fn has_defaults(&self) -> bool {
        !self.defaults.is_empty()
    }
}
