//! Indentation configuration for code generation.

/// Indentation of generated code, as a number of spaces per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 2-space indentation (JavaScript, JSX).
    pub const JAVASCRIPT: Self = Self(2);

    /// Width of one indent level in spaces.
    pub fn width(&self) -> usize {
        usize::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(Indent::JAVASCRIPT.width(), 2);
        assert_eq!(Indent(4).width(), 4);
    }
}
