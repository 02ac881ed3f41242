//! JavaScript object literal builder.

use propgen_codegen::CodeFragment;

/// The value side of an object property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Expression emitted verbatim (e.g. `PropTypes.func`, `42`).
    Raw(String),
    /// Shorthand property (`key,`), where the key names a binding in scope.
    Shorthand,
}

/// One entry of an object literal body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property { key: String, value: PropertyValue },
    /// A `//` comment line placed before the next property.
    Comment(String),
}

impl Member {
    fn to_fragment(&self) -> CodeFragment {
        match self {
            Member::Property { key, value } => match value {
                PropertyValue::Raw(s) => CodeFragment::line(format!("{}: {},", key, s)),
                PropertyValue::Shorthand => CodeFragment::line(format!("{},", key)),
            },
            Member::Comment(text) => CodeFragment::comment(text.clone()),
        }
    }
}

/// Builder for JavaScript object literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    members: Vec<Member>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    fn property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.members.push(Member::Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(key, PropertyValue::Raw(value.into()))
    }

    /// Add a shorthand property (`name,`).
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        self.property(name, PropertyValue::Shorthand)
    }

    /// Conditionally add a shorthand property.
    pub fn shorthand_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition {
            self.shorthand(name)
        } else {
            self
        }
    }

    /// Add a comment line before the next property.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.members.push(Member::Comment(text.into()));
        self
    }

    /// Fragments for the lines between the braces, one per member.
    ///
    /// An object without members still gets one empty line, so the braces
    /// never close on the line they open.
    pub fn body_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::Blank];
        }
        self.member_fragments()
    }

    /// Fragments for the members alone.
    pub fn member_fragments(&self) -> Vec<CodeFragment> {
        self.members.iter().map(Member::to_fragment).collect()
    }
}
