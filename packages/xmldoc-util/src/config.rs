//! Configuration constants and parser options.

/// Root tag name used when a document is built from a mapping.
pub const DEFAULT_ROOT_NAME: &str = "data";

/// Path expression selecting the context node itself.
pub const DEFAULT_XPATH: &str = ".";

/// Indentation unit for formatted output.
///
/// Two spaces, the same unit libxml2 uses for `xmlSaveFormatFile`.
pub const INDENT: &str = "  ";

/// Options forwarded to the underlying parser.
///
/// Defaults mirror `roxmltree`: DTDs are rejected and the node count is
/// effectively unbounded.
///
/// # Examples
/// ```
/// use xmldoc_util::config::ParseOptions;
///
/// let options = ParseOptions::default().allow_dtd(true);
/// assert!(options.allow_dtd);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept documents that carry a DOCTYPE declaration.
    pub allow_dtd: bool,
    /// Maximum number of nodes a parsed document may contain.
    pub nodes_limit: u32,
}

impl ParseOptions {
    /// Set whether DOCTYPE declarations are accepted.
    #[must_use]
    pub fn allow_dtd(mut self, allow: bool) -> Self {
        self.allow_dtd = allow;
        self
    }

    /// Set the maximum number of nodes.
    #[must_use]
    pub fn nodes_limit(mut self, limit: u32) -> Self {
        self.nodes_limit = limit;
        self
    }

    pub(crate) fn to_roxmltree<'input>(self) -> roxmltree::ParsingOptions<'input> {
        roxmltree::ParsingOptions {
            allow_dtd: self.allow_dtd,
            nodes_limit: self.nodes_limit,
            ..roxmltree::ParsingOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_dtd: false,
            nodes_limit: u32::MAX,
        }
    }
}
