//! Deep import of nodes into a destination document.
//!
//! Two sources are supported: elements of another (or the same)
//! `sxd-document` tree, and nodes of a read-only `roxmltree` document.
//! Imported copies are detached; callers append them where they belong.
//!
//! Every imported element keeps its in-scope prefix bindings. A default
//! namespace is declared only where it changes, so the serializer emits one
//! `xmlns` per change rather than one per element.

use roxmltree::NodeType;
use sxd_document::dom::{ChildOfElement, Document, Element};
use sxd_document::QName;

/// Prefix bound to the XML namespace in every document.
const XML_PREFIX: &str = "xml";

/// Deep-copy an element and its subtree into `doc`.
///
/// # Arguments
/// * `doc` - Destination document
/// * `src` - Element to copy, from any document
///
/// # Returns
/// Detached copy owned by `doc`
///
/// # Examples
/// ```
/// use sxd_document::Package;
/// use xmldoc_util::xml::import_element;
///
/// let source = Package::new();
/// let src_doc = source.as_document();
/// let item = src_doc.create_element("item");
/// item.set_text("1");
///
/// let dest = Package::new();
/// let dest_doc = dest.as_document();
/// let copy = import_element(dest_doc, item);
/// dest_doc.root().append_child(copy);
///
/// assert_eq!(copy.name().local_part(), "item");
/// assert_eq!(copy.children().len(), 1);
/// ```
pub fn import_element<'d>(doc: Document<'d>, src: Element<'_>) -> Element<'d> {
    import_element_under(doc, src, None)
}

/// Deep-copy an element that will be attached below an element whose
/// default namespace is `inherited`.
///
/// A default namespace is declared on the copy only where it differs from
/// the one in effect at its new position.
pub(crate) fn import_element_under<'d>(
    doc: Document<'d>,
    src: Element<'_>,
    inherited: Option<&str>,
) -> Element<'d> {
    let copy = doc.create_element(src.name());
    copy.set_preferred_prefix(src.preferred_prefix());

    let default = non_empty(src.recursive_default_namespace_uri());
    declare_default_namespace(copy, default, inherited);

    for namespace in src.namespaces_in_scope() {
        if namespace.prefix() != XML_PREFIX {
            copy.register_prefix(namespace.prefix(), namespace.uri());
        }
    }

    for attribute in src.attributes() {
        let imported = copy.set_attribute_value(attribute.name(), attribute.value());
        imported.set_preferred_prefix(attribute.preferred_prefix());
    }

    for child in src.children() {
        copy.append_child(import_child_under(doc, child, default));
    }

    copy
}

/// Deep-copy any child node (element, text, comment or processing
/// instruction) into `doc`.
pub fn import_child<'d>(doc: Document<'d>, src: ChildOfElement<'_>) -> ChildOfElement<'d> {
    import_child_under(doc, src, None)
}

/// Deep-copy a child node that will be attached below an element whose
/// default namespace is `inherited`.
pub(crate) fn import_child_under<'d>(
    doc: Document<'d>,
    src: ChildOfElement<'_>,
    inherited: Option<&str>,
) -> ChildOfElement<'d> {
    match src {
        ChildOfElement::Element(element) => import_element_under(doc, element, inherited).into(),
        ChildOfElement::Text(text) => doc.create_text(text.text()).into(),
        ChildOfElement::Comment(comment) => doc.create_comment(comment.text()).into(),
        ChildOfElement::ProcessingInstruction(pi) => {
            doc.create_processing_instruction(pi.target(), pi.value()).into()
        }
    }
}

/// Deep-copy a parsed `roxmltree` element and its subtree into `doc`.
///
/// Non-element nodes are not valid roots; use [`import_parsed_child`] for
/// those.
pub fn import_parsed_element<'d>(doc: Document<'d>, src: roxmltree::Node<'_, '_>) -> Element<'d> {
    import_parsed_under(doc, src, None)
}

fn import_parsed_under<'d>(
    doc: Document<'d>,
    src: roxmltree::Node<'_, '_>,
    inherited: Option<&str>,
) -> Element<'d> {
    let tag = src.tag_name();
    let copy = doc.create_element(QName::with_namespace_uri(tag.namespace(), tag.name()));
    if let Some(uri) = tag.namespace() {
        copy.set_preferred_prefix(src.lookup_prefix(uri));
    }

    let default = non_empty(src.default_namespace());
    declare_default_namespace(copy, default, inherited);

    for namespace in src.namespaces() {
        if let Some(prefix) = namespace.name() {
            copy.register_prefix(prefix, namespace.uri());
        }
    }

    for attribute in src.attributes() {
        let name = QName::with_namespace_uri(attribute.namespace(), attribute.name());
        let imported = copy.set_attribute_value(name, attribute.value());
        if let Some(uri) = attribute.namespace() {
            imported.set_preferred_prefix(src.lookup_prefix(uri));
        }
    }

    for child in src.children() {
        let imported = match child.node_type() {
            NodeType::Element => Some(import_parsed_under(doc, child, default).into()),
            _ => import_parsed_child(doc, child),
        };
        if let Some(imported) = imported {
            copy.append_child(imported);
        }
    }

    copy
}

/// Deep-copy a parsed `roxmltree` child node into `doc`.
///
/// Returns `None` for the document node, which has no element-level
/// counterpart.
pub fn import_parsed_child<'d>(
    doc: Document<'d>,
    src: roxmltree::Node<'_, '_>,
) -> Option<ChildOfElement<'d>> {
    match src.node_type() {
        NodeType::Element => Some(import_parsed_element(doc, src).into()),
        NodeType::Text => src.text().map(|text| doc.create_text(text).into()),
        NodeType::Comment => src.text().map(|text| doc.create_comment(text).into()),
        NodeType::PI => src
            .pi()
            .map(|pi| doc.create_processing_instruction(pi.target, pi.value).into()),
        NodeType::Root => None,
    }
}

/// An empty URI stands for "no namespace".
fn non_empty(uri: Option<&str>) -> Option<&str> {
    uri.filter(|uri| !uri.is_empty())
}

/// Declare `default` on `copy` when it differs from `inherited`; an empty
/// URI undeclares an inherited default.
fn declare_default_namespace(copy: Element<'_>, default: Option<&str>, inherited: Option<&str>) {
    if default != inherited {
        copy.set_default_namespace_uri(Some(default.unwrap_or("")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sxd_document::Package;

    fn root_element(doc: Document<'_>) -> Element<'_> {
        doc.root()
            .children()
            .into_iter()
            .find_map(|child| child.element())
            .unwrap()
    }

    #[test]
    fn test_import_element_copies_subtree() {
        let source = sxd_document::parser::parse(
            r#"<order id="7"><item>apple</item><!--note--><?pi data?></order>"#,
        )
        .unwrap();
        let src = root_element(source.as_document());

        let dest = Package::new();
        let doc = dest.as_document();
        let copy = import_element(doc, src);
        doc.root().append_child(copy);

        assert_eq!(copy.name().local_part(), "order");
        assert_eq!(copy.attribute_value("id"), Some("7"));

        let children = copy.children();
        assert_eq!(children.len(), 3);
        let item = children[0].element().unwrap();
        assert_eq!(item.name().local_part(), "item");
        assert_eq!(item.children()[0].text().unwrap().text(), "apple");
        assert_eq!(children[1].comment().unwrap().text(), "note");
        let pi = children[2].processing_instruction().unwrap();
        assert_eq!(pi.target(), "pi");
        assert_eq!(pi.value(), Some("data"));
    }

    #[test]
    fn test_import_element_is_independent_of_source() {
        let source = Package::new();
        let src_doc = source.as_document();
        let src = src_doc.create_element("a");
        src.set_text("before");

        let dest = Package::new();
        let copy = import_element(dest.as_document(), src);
        src.set_text("after");

        assert_eq!(copy.children()[0].text().unwrap().text(), "before");
    }

    #[test]
    fn test_import_element_keeps_namespaces() {
        let source = sxd_document::parser::parse(
            r#"<r xmlns="urn:default" xmlns:p="urn:p"><p:child/></r>"#,
        )
        .unwrap();
        let src = root_element(source.as_document());
        let child = src.children()[0].element().unwrap();

        let dest = Package::new();
        let copy = import_element(dest.as_document(), child);

        assert_eq!(copy.name().namespace_uri(), Some("urn:p"));
        assert_eq!(copy.namespace_uri_for_prefix("p"), Some("urn:p"));
        assert_eq!(copy.recursive_default_namespace_uri(), Some("urn:default"));
    }

    #[test]
    fn test_import_parsed_element() {
        let parsed = roxmltree::Document::parse(
            r#"<config xmlns:x="urn:x" x:mode="fast">text<opt/><!-- c --></config>"#,
        )
        .unwrap();

        let dest = Package::new();
        let doc = dest.as_document();
        let copy = import_parsed_element(doc, parsed.root_element());

        assert_eq!(copy.name().local_part(), "config");
        assert_eq!(copy.attribute_value(("urn:x", "mode")), Some("fast"));
        assert_eq!(copy.namespace_uri_for_prefix("x"), Some("urn:x"));

        let children = copy.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].text().unwrap().text(), "text");
        assert_eq!(children[1].element().unwrap().name().local_part(), "opt");
        assert_eq!(children[2].comment().unwrap().text(), " c ");
    }

    #[test]
    fn test_import_parsed_declares_default_namespace_where_it_changes() {
        let parsed = roxmltree::Document::parse(
            r#"<r xmlns="urn:d"><a><plain xmlns=""><leaf/></plain></a></r>"#,
        )
        .unwrap();

        let dest = Package::new();
        let copy = import_parsed_element(dest.as_document(), parsed.root_element());
        let a = copy.children()[0].element().unwrap();
        let plain = a.children()[0].element().unwrap();
        let leaf = plain.children()[0].element().unwrap();

        assert_eq!(copy.default_namespace_uri(), Some("urn:d"));
        assert_eq!(a.default_namespace_uri(), None);
        assert_eq!(plain.default_namespace_uri(), Some(""));
        assert_eq!(plain.name().namespace_uri(), None);
        assert_eq!(leaf.default_namespace_uri(), None);
    }

    #[test]
    fn test_import_child_copies_text() {
        let source = Package::new();
        let src_doc = source.as_document();
        let text = src_doc.create_text("a < b");

        let dest = Package::new();
        let copy = import_child(dest.as_document(), text.into());
        assert_eq!(copy.text().map(|t| t.text()), Some("a < b"));
    }

    #[test]
    fn test_import_parsed_child_skips_document_node() {
        let parsed = roxmltree::Document::parse("<a/>").unwrap();
        let dest = Package::new();
        assert!(import_parsed_child(dest.as_document(), parsed.root()).is_none());
    }
}
