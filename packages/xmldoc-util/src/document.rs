//! Document wrapper for easy creation, copying, parsing and writing.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use sxd_document::dom::{ChildOfRoot, Document, Element};
use sxd_document::Package;

use crate::config::ParseOptions;
use crate::error::{Result, XmlUtilError};
use crate::serial::write_document;
use crate::xml::{
    fill_node_flags, fill_node_string_lists, fill_node_strings, get_tag_name, import_element,
    import_parsed_element,
};

/// An XML document that always has exactly one root element.
///
/// The wrapper owns its tree exclusively. Copies (via [`Clone`] or the
/// `from_*` constructors) are deep imports, never shared nodes.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
///
/// let mut doc = EasyDocument::new();
/// assert!(doc.is_empty());
///
/// doc.parse("<greeting lang=\"en\">hello</greeting>").unwrap();
/// assert!(doc.has_content());
/// assert_eq!(doc.root().name().local_part(), "greeting");
/// ```
pub struct EasyDocument {
    package: Package,
}

impl EasyDocument {
    /// Create a document whose root element has an empty tag name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_name("")
    }

    /// Create a document with an empty root element named `root_name`.
    #[must_use]
    pub fn with_root_name(root_name: &str) -> Self {
        let package = Package::new();
        {
            let doc = package.as_document();
            doc.root().append_child(doc.create_element(root_name));
        }
        Self { package }
    }

    /// Deep-import `element` as the root of a new document.
    #[must_use]
    pub fn from_element(element: Element<'_>) -> Self {
        let package = Package::new();
        {
            let doc = package.as_document();
            doc.root().append_child(import_element(doc, element));
        }
        Self { package }
    }

    /// Deep-import the root element of another library document.
    ///
    /// A package without a root element yields an empty document.
    #[must_use]
    pub fn from_package(package: &Package) -> Self {
        match root_element(package.as_document()) {
            Some(root) => Self::from_element(root),
            None => Self::new(),
        }
    }

    /// Deep-import a parsed `roxmltree` node as the root of a new document.
    ///
    /// The document node stands for its root element. Nodes that are not
    /// elements (text, comments) yield an empty document.
    #[must_use]
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let node = if node.is_root() {
            node.document().root_element()
        } else {
            node
        };
        if !node.is_element() {
            return Self::new();
        }

        let package = Package::new();
        {
            let doc = package.as_document();
            doc.root().append_child(import_parsed_element(doc, node));
        }
        Self { package }
    }

    /// Build `<root_name>` with one text child per entry of `data`.
    ///
    /// # Examples
    /// ```
    /// use xmldoc_util::config::DEFAULT_ROOT_NAME;
    /// use xmldoc_util::xml::StringMap;
    /// use xmldoc_util::EasyDocument;
    ///
    /// let data = StringMap::from([("a".to_string(), "1".to_string())]);
    /// let doc = EasyDocument::from_string_map(&data, DEFAULT_ROOT_NAME);
    /// assert_eq!(doc.to_string(), "<?xml version=\"1.0\"?><data><a>1</a></data>");
    /// ```
    #[must_use]
    pub fn from_string_map<I, K, V>(data: I, root_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let doc = Self::with_root_name(root_name);
        fill_node_strings(doc.root(), data);
        doc
    }

    /// Build `<root_name>` with one text child per value of every key.
    #[must_use]
    pub fn from_string_vec_map<I, K, L>(data: I, root_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let doc = Self::with_root_name(root_name);
        fill_node_string_lists(doc.root(), data);
        doc
    }

    /// Build `<root_name>` with an empty child for every set flag.
    #[must_use]
    pub fn from_bool_map<I, K, B>(data: I, root_name: &str) -> Self
    where
        I: IntoIterator<Item = (K, B)>,
        K: AsRef<str>,
        B: std::borrow::Borrow<bool>,
    {
        let doc = Self::with_root_name(root_name);
        fill_node_flags(doc.root(), data);
        doc
    }

    /// Read and parse an XML file.
    ///
    /// # Errors
    /// `Io` when the file cannot be read, otherwise as [`EasyDocument::parse_bytes`].
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        let mut doc = Self::new();
        doc.parse_bytes(&bytes)?;
        Ok(doc)
    }

    /// Discard all content, leaving a single root element with an empty
    /// tag name.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Parse `text` and make its root element the root of this document.
    ///
    /// The operation is atomic: on error the previous content is kept.
    ///
    /// # Errors
    /// * `EmptyDocument` if `text` is empty or holds only XML whitespace
    ///   (space, tab, carriage return, line feed)
    /// * `EmptyRoot` if the parsed document has no root element
    /// * `XmlParse` for any other parser failure
    pub fn parse(&mut self, text: &str) -> Result<()> {
        self.parse_with_options(text, ParseOptions::default())
    }

    /// Validate `bytes` as UTF-8, then parse them like [`EasyDocument::parse`].
    ///
    /// # Errors
    /// `Encoding` if `bytes` is not valid UTF-8, otherwise as
    /// [`EasyDocument::parse`].
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes)?;
        self.parse(text)
    }

    /// Parse `text` with explicit parser options.
    ///
    /// # Errors
    /// As [`EasyDocument::parse`].
    pub fn parse_with_options(&mut self, text: &str, options: ParseOptions) -> Result<()> {
        if is_xml_blank(text) {
            return Err(XmlUtilError::EmptyDocument);
        }

        let parsed = roxmltree::Document::parse_with_options(text, options.to_roxmltree())
            .map_err(|err| match err {
                roxmltree::Error::NoRootNode => XmlUtilError::EmptyRoot,
                other => XmlUtilError::XmlParse(other),
            })?;

        let root = parsed.root_element();
        tracing::debug!(
            bytes = text.len(),
            root = %root.tag_name().name(),
            "Parsed XML document"
        );

        *self = Self::from_node(root);
        Ok(())
    }

    /// Serialize the document.
    ///
    /// `formatted` requests indented output; otherwise the tree is written
    /// as stored.
    pub fn write_to_string(&self, formatted: bool) -> String {
        write_document(self.as_document(), formatted)
    }

    /// Serialize the document into a file.
    ///
    /// # Errors
    /// `Io` when the file cannot be written.
    pub fn write_file(&self, path: impl AsRef<Path>, formatted: bool) -> Result<()> {
        let path = path.as_ref();
        let text = self.write_to_string(formatted);
        tracing::debug!(path = %path.display(), bytes = text.len(), "Writing XML document");
        fs::write(path, text)?;
        Ok(())
    }

    /// Whether the root has a non-empty tag name or any child.
    #[must_use]
    pub fn has_content(&self) -> bool {
        let root = self.root();
        !get_tag_name(root).is_empty() || !root.children().is_empty()
    }

    /// Negation of [`EasyDocument::has_content`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_content()
    }

    /// The root element.
    ///
    /// If the root was detached through the raw library handle, a new
    /// root with an empty tag name is created first.
    pub fn root(&self) -> Element<'_> {
        let doc = self.as_document();
        if let Some(root) = root_element(doc) {
            return root;
        }

        tracing::warn!("Document lost its root element, recreating an empty one");
        let root = doc.create_element("");
        doc.root().append_child(root);
        root
    }

    /// Direct access to the underlying library document.
    pub fn as_document(&self) -> Document<'_> {
        self.package.as_document()
    }
}

/// Whether `text` consists only of the whitespace characters XML defines.
fn is_xml_blank(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

fn root_element(doc: Document<'_>) -> Option<Element<'_>> {
    doc.root()
        .children()
        .into_iter()
        .find_map(ChildOfRoot::element)
}

impl Default for EasyDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EasyDocument {
    fn clone(&self) -> Self {
        Self::from_element(self.root())
    }
}

impl fmt::Debug for EasyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyDocument")
            .field("root", &get_tag_name(self.root()))
            .field("children", &self.root().children().len())
            .finish()
    }
}

impl fmt::Display for EasyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.write_to_string(false))
    }
}

impl FromStr for EasyDocument {
    type Err = XmlUtilError;

    fn from_str(text: &str) -> Result<Self> {
        let mut doc = Self::new();
        doc.parse(text)?;
        Ok(doc)
    }
}

impl From<&roxmltree::Document<'_>> for EasyDocument {
    fn from(parsed: &roxmltree::Document<'_>) -> Self {
        Self::from_node(parsed.root_element())
    }
}
