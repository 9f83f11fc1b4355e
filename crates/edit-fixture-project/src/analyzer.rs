//! Declaration analysis.
//!
//! The analyzer stands in for a language front end: it finds `keyword Name` declarations in the
//! code partitions of a document. It is built once per [`crate::ProjectSuite`] and shared by
//! every test in it.

use edit_fixture_document::{Document, PartitionKind};
use edit_fixture_lang::{DeclarationKind, LanguageConfig};
use regex::Regex;
use std::ops::Range;

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Declared identifier.
    pub name: String,
    /// What the declaration introduces.
    pub kind: DeclarationKind,
    /// Character range of the identifier.
    pub range: Range<usize>,
}

/// Finds declarations with a pattern compiled from the language's keywords.
#[derive(Debug, Clone)]
pub struct Analyzer {
    language: LanguageConfig,
    pattern: Option<Regex>,
}

impl Analyzer {
    /// Compile the declaration pattern for `language`.
    pub fn new(language: &LanguageConfig) -> Result<Self, regex::Error> {
        let keywords: Vec<String> = language
            .declaration_keywords
            .iter()
            .map(|k| regex::escape(&k.keyword))
            .collect();

        let pattern = if keywords.is_empty() {
            None
        } else {
            let source = format!(
                r"\b({})\s+([\p{{L}}_][\p{{L}}\p{{N}}_]*)",
                keywords.join("|")
            );
            Some(Regex::new(&source)?)
        };

        Ok(Self {
            language: language.clone(),
            pattern,
        })
    }

    /// Language this analyzer was built for.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Declarations in `document`, in document order. Keywords inside comments and literals
    /// are ignored.
    pub fn analyze(&self, document: &Document) -> Vec<Symbol> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        let index = document.line_index();
        let mut symbols = Vec::new();

        for line in 0..index.line_count() {
            let Some(text) = index.line_text(line) else {
                continue;
            };
            let line_start = index.position_to_char_offset(line, 0);

            for caps in pattern.captures_iter(&text) {
                let (Some(keyword), Some(name)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let keyword_at = line_start + text[..keyword.start()].chars().count();
                let in_code = document
                    .partition_at(keyword_at)
                    .is_some_and(|p| p.kind == PartitionKind::Code);
                if !in_code {
                    continue;
                }
                let Some(kind) = self.language.declaration_kind(keyword.as_str()) else {
                    continue;
                };

                let start = line_start + text[..name.start()].chars().count();
                let end = start + name.as_str().chars().count();
                symbols.push(Symbol {
                    name: name.as_str().to_string(),
                    kind,
                    range: start..end,
                });
            }
        }

        symbols
    }
}
