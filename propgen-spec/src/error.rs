use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for token parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid prop format '{token}'. Use name:type:required (e.g., myProp:string:true).")]
    #[diagnostic(
        code(propgen::invalid_prop),
        help("a prop needs exactly three colon-separated fields: name, type and required flag")
    )]
    InvalidPropertyFormat {
        #[source_code]
        src: NamedSource<String>,
        #[label("found {fields} field(s)")]
        span: SourceSpan,
        token: String,
        fields: usize,
    },

    #[error("Invalid default format '{token}'. Use name:value (e.g., myProp:defaultValue).")]
    #[diagnostic(
        code(propgen::invalid_default),
        help("separate the prop name from its default value with a colon")
    )]
    InvalidDefaultFormat {
        #[source_code]
        src: NamedSource<String>,
        #[label("missing ':'")]
        span: SourceSpan,
        token: String,
    },
}

impl Error {
    /// Create an invalid prop error for a `--props` token
    pub fn invalid_property(token: &str) -> Box<Self> {
        Box::new(Error::InvalidPropertyFormat {
            src: NamedSource::new("--props", token.to_string()),
            span: (0, token.len()).into(),
            token: token.to_string(),
            fields: token.split(':').count(),
        })
    }

    /// Create an invalid default error for a `--defaults` token
    pub fn invalid_default(token: &str) -> Box<Self> {
        Box::new(Error::InvalidDefaultFormat {
            src: NamedSource::new("--defaults", token.to_string()),
            span: (0, token.len()).into(),
            token: token.to_string(),
        })
    }
}
