//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `//` line comment.
    Comment(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a line comment fragment.
    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// A group of nodes rendered back to back, with no blank line between them.
impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct One(&'static str);

    impl Renderable for One {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(self.0)]
        }
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "const a = {",
            vec![CodeFragment::line("b: 1,")],
            Some("};".to_string()),
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "const a = {");
                assert_eq!(body, vec![CodeFragment::Line("b: 1,".to_string())]);
                assert_eq!(close, Some("};".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }

    #[test]
    fn test_slice_concatenates_fragments() {
        let nodes = [One("a"), One("b")];
        assert_eq!(
            nodes[..].to_fragments(),
            vec![CodeFragment::line("a"), CodeFragment::line("b")]
        );
    }

    #[test]
    fn test_reference_renders_like_value() {
        fn fragments<R: Renderable>(node: R) -> Vec<CodeFragment> {
            node.to_fragments()
        }

        let node = One("x");
        assert_eq!(fragments(&node), vec![CodeFragment::line("x")]);
    }
}
