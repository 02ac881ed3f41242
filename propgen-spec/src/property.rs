use std::str::FromStr;

use crate::{Error, Result};

/// A single declared prop: its name, validator type tag and required flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: String,
    /// Name of the validator on the schema facility (e.g. `string`, `func`).
    ///
    /// Passed through verbatim, except for [`PropertySpec::OBJECT_OF_ANY`].
    pub type_tag: String,
    pub required: bool,
}

impl PropertySpec {
    /// Type tag that expands to an object-of-any validator.
    pub const OBJECT_OF_ANY: &'static str = "objectOfany";

    pub fn new(name: impl Into<String>, type_tag: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            required,
        }
    }

    /// Returns true if this prop uses the `objectOfany` escape hatch
    pub fn is_object_of_any(&self) -> bool {
        self.type_tag == Self::OBJECT_OF_ANY
    }
}

impl FromStr for PropertySpec {
    type Err = Box<Error>;

    /// Parse a `name:type:required` token.
    ///
    /// Only the literal `true` (any case) marks a prop as required; every other
    /// flag value, including an empty one, means optional.
    fn from_str(token: &str) -> Result<Self> {
        let fields: Vec<&str> = token.split(':').collect();
        match fields.as_slice() {
            [name, type_tag, required] => Ok(Self::new(
                *name,
                *type_tag,
                required.eq_ignore_ascii_case("true"),
            )),
            _ => Err(Error::invalid_property(token)),
        }
    }
}

/// Parse `--props` tokens, keeping their order.
pub fn parse_properties<I, S>(tokens: I) -> Result<Vec<PropertySpec>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let props = tokens
        .into_iter()
        .map(|token| token.as_ref().parse::<PropertySpec>())
        .collect::<Result<Vec<_>>>()?;

    log::debug!("parsed {} prop(s)", props.len());
    Ok(props)
}
