//! XML utility functions for navigating and copying DOM subtrees.

use sxd_document::dom::{ChildOfElement, Element};

use super::import::import_child_under;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML element
///
/// # Returns
/// Local tag name (e.g., "item" for `<ns:item>`)
///
/// # Examples
/// ```
/// use sxd_document::Package;
/// use xmldoc_util::xml::get_tag_name;
///
/// let package = Package::new();
/// let doc = package.as_document();
/// let item = doc.create_element(("urn:shop", "item"));
/// assert_eq!(get_tag_name(item), "item");
/// ```
pub fn get_tag_name(node: Element<'_>) -> &str {
    node.name().local_part()
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent element to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
pub fn find_child<'d>(node: Element<'d>, tag: &str) -> Option<Element<'d>> {
    element_children(node).find(|child| get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::find_children;
///
/// let doc: EasyDocument = "<root><item>1</item><item>2</item><other/></root>".parse().unwrap();
/// let items: Vec<_> = find_children(doc.root(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'d, 't>(
    node: Element<'d>,
    tag: &'t str,
) -> impl Iterator<Item = Element<'d>> + 't
where
    'd: 't,
{
    element_children(node).filter(move |child| get_tag_name(*child) == tag)
}

/// Get all element children of a node.
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children(node: Element<'_>) -> impl Iterator<Item = Element<'_>> {
    node.children().into_iter().filter_map(ChildOfElement::element)
}

/// Get the concatenated direct text content of a node, trimmed.
///
/// Text inside child elements is not included.
pub fn get_text(node: Element<'_>) -> String {
    let text: String = node
        .children()
        .into_iter()
        .filter_map(ChildOfElement::text)
        .map(|text| text.text())
        .collect();
    text.trim().to_string()
}

/// Check if a node has a specific tag name.
pub fn has_tag(node: Element<'_>, tag: &str) -> bool {
    get_tag_name(node) == tag
}

/// Deep-import every child of `src` into `dest`, preserving order.
///
/// `src` itself is not copied, and it may belong to a different document
/// than `dest`. Copies keep their namespaces: a copied element whose default
/// namespace differs from the one in effect at `dest` declares its own.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::copy_children;
///
/// let source: EasyDocument = "<src><a>1</a><b/></src>".parse().unwrap();
/// let dest = EasyDocument::with_root_name("dest");
/// copy_children(dest.root(), source.root());
///
/// assert_eq!(dest.write_to_string(false), "<?xml version=\"1.0\"?><dest><a>1</a><b/></dest>");
/// ```
pub fn copy_children(dest: Element<'_>, src: Element<'_>) {
    let doc = dest.document();
    let children = src.children();
    tracing::trace!(
        count = children.len(),
        dest = %get_tag_name(dest),
        src = %get_tag_name(src),
        "Copying children"
    );
    let inherited = dest
        .recursive_default_namespace_uri()
        .filter(|uri| !uri.is_empty());
    for child in children {
        dest.append_child(import_child_under(doc, child, inherited));
    }
}
