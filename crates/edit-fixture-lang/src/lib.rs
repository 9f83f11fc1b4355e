#![warn(missing_docs)]
//! `edit-fixture-lang` - data-driven language configuration for `edit-fixture` documents.
//!
//! This crate stays dependency-free. It describes just enough of a language for the document
//! layer to partition text (comments, string and char literals) and for the project layer to
//! find declarations.

/// Comment tokens for a language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Line comments only.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            ..Self::default()
        }
    }

    /// Both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// The line comment token, if configured and non-empty.
    pub fn line_token(&self) -> Option<&str> {
        self.line.as_deref().filter(|s| !s.is_empty())
    }

    /// The block comment tokens, if both are configured and non-empty.
    pub fn block_tokens(&self) -> Option<(&str, &str)> {
        let start = self.block_start.as_deref().filter(|s| !s.is_empty())?;
        let end = self.block_end.as_deref().filter(|s| !s.is_empty())?;
        Some((start, end))
    }
}

/// What a declaration keyword introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A package or namespace.
    Package,
    /// A singleton object or module.
    Object,
    /// A class.
    Class,
    /// A trait or interface.
    Trait,
    /// A type alias or abstract type.
    Type,
    /// A function or method.
    Function,
    /// An immutable binding.
    Value,
    /// A mutable binding.
    Variable,
}

/// A keyword that starts a named declaration (`class Foo`, `def bar`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationKeyword {
    /// The keyword text.
    pub keyword: String,
    /// What the keyword declares.
    pub kind: DeclarationKind,
}

impl DeclarationKeyword {
    /// Create a declaration keyword.
    pub fn new(keyword: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            keyword: keyword.into(),
            kind,
        }
    }
}

/// Lexical description of a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Display name.
    pub name: String,
    /// Comment tokens.
    pub comments: CommentConfig,
    /// String literal delimiter.
    pub string_delimiter: Option<char>,
    /// Character literal delimiter.
    pub char_delimiter: Option<char>,
    /// Escape character inside literals.
    pub escape: char,
    /// Keywords that introduce named declarations.
    pub declaration_keywords: Vec<DeclarationKeyword>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::plain()
    }
}

impl LanguageConfig {
    /// Plain text: no comments, literals or declarations. Everything is code.
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            comments: CommentConfig::default(),
            string_delimiter: None,
            char_delimiter: None,
            escape: '\\',
            declaration_keywords: Vec::new(),
        }
    }

    /// A Scala-like language: `//` and `/* */` comments, `"` strings, `'` chars.
    pub fn scala_like() -> Self {
        use DeclarationKind::*;
        let keywords = [
            ("package", Package),
            ("object", Object),
            ("class", Class),
            ("trait", Trait),
            ("type", Type),
            ("def", Function),
            ("val", Value),
            ("var", Variable),
        ];

        Self {
            name: "scala".to_string(),
            comments: CommentConfig::line_and_block("//", "/*", "*/"),
            string_delimiter: Some('"'),
            char_delimiter: Some('\''),
            escape: '\\',
            declaration_keywords: keywords
                .into_iter()
                .map(|(keyword, kind)| DeclarationKeyword::new(keyword, kind))
                .collect(),
        }
    }

    /// Look up the declaration kind introduced by `keyword`.
    pub fn declaration_kind(&self, keyword: &str) -> Option<DeclarationKind> {
        self.declaration_keywords
            .iter()
            .find(|k| k.keyword == keyword)
            .map(|k| k.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_tokens() {
        let comments = CommentConfig::line_and_block("//", "/*", "*/");
        assert_eq!(comments.line_token(), Some("//"));
        assert_eq!(comments.block_tokens(), Some(("/*", "*/")));

        let line_only = CommentConfig::line("#");
        assert_eq!(line_only.block_tokens(), None);

        let empty = CommentConfig::line("");
        assert_eq!(empty.line_token(), None);
    }

    #[test]
    fn test_scala_like_keywords() {
        let lang = LanguageConfig::scala_like();
        assert_eq!(lang.declaration_kind("def"), Some(DeclarationKind::Function));
        assert_eq!(lang.declaration_kind("object"), Some(DeclarationKind::Object));
        assert_eq!(lang.declaration_kind("fn"), None);
    }

    #[test]
    fn test_plain_is_default() {
        let lang = LanguageConfig::default();
        assert_eq!(lang.name, "plain");
        assert!(lang.declaration_keywords.is_empty());
        assert_eq!(lang.comments.line_token(), None);
    }
}
