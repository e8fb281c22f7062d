//! Parse configuration.

use serde::{Deserialize, Serialize};

/// Goal symbol the program is parsed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

impl SourceType {
    #[inline]
    pub fn is_module(self) -> bool {
        self == SourceType::Module
    }
}

/// Options recognised by the parser.
///
/// Deserializes from the camelCase JSON hosts usually pass
/// (`{"sourceType": "module", "tolerant": true}`); missing keys take defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Record recoverable errors and keep going.
    pub tolerant: bool,
    /// Retain comments into `Program.comments`.
    pub comments: bool,
    /// Collect every consumed token into `Program.tokens`.
    pub tokens: bool,
    /// Serializers should emit byte ranges.
    pub range: bool,
    /// Serializers should emit line/column locations.
    pub loc: bool,
    pub source_type: SourceType,
    /// Enable the JSX grammar extension.
    pub jsx: bool,
}

impl ParseOptions {
    pub fn script() -> Self {
        ParseOptions::default()
    }

    pub fn module() -> Self {
        ParseOptions {
            source_type: SourceType::Module,
            ..ParseOptions::default()
        }
    }

    pub fn with_tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_tokens(mut self, tokens: bool) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    pub fn with_loc(mut self, loc: bool) -> Self {
        self.loc = loc;
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    pub fn with_jsx(mut self, jsx: bool) -> Self {
        self.jsx = jsx;
        self
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.source_type.is_module()
    }
}
