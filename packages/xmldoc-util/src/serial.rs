//! Serialization of `sxd-document` trees to XML text.
//!
//! Markup, escaping and namespace declarations come from
//! `sxd_document::writer`. Output is the XML declaration immediately
//! followed by the document children, with attribute values in double
//! quotes.
//!
//! Formatted output is produced by laying out a copy of the tree: an element
//! whose children contain no text gets a newline and indentation before each
//! child and before its end tag. Elements with text keep their content
//! verbatim, together with their whole subtree, so no significant whitespace
//! is introduced.

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Document, Element};
use sxd_document::writer::Writer;
use sxd_document::Package;

use crate::config::INDENT;
use crate::xml::import_element;

/// Serialize a whole document.
///
/// # Arguments
/// * `doc` - Document to write
/// * `formatted` - Indent element-only content
///
/// # Returns
/// XML text including the declaration
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::serial::write_document;
///
/// let doc: EasyDocument = "<a><b>1</b></a>".parse().unwrap();
/// assert_eq!(
///     write_document(doc.as_document(), false),
///     "<?xml version=\"1.0\"?><a><b>1</b></a>"
/// );
/// assert_eq!(
///     write_document(doc.as_document(), true),
///     "<?xml version=\"1.0\"?><a>\n  <b>1</b>\n</a>"
/// );
/// ```
pub fn write_document(doc: Document<'_>, formatted: bool) -> String {
    if !formatted {
        return format_document(doc);
    }

    let package = Package::new();
    let copy = package.as_document();
    for child in doc.root().children() {
        match child {
            ChildOfRoot::Element(element) => {
                let element = import_element(copy, element);
                lay_out(copy, element, 0);
                copy.root().append_child(element);
            }
            ChildOfRoot::Comment(comment) => {
                copy.root().append_child(copy.create_comment(comment.text()));
            }
            ChildOfRoot::ProcessingInstruction(pi) => {
                copy.root()
                    .append_child(copy.create_processing_instruction(pi.target(), pi.value()));
            }
        }
    }
    format_document(copy)
}

fn format_document(doc: Document<'_>) -> String {
    let mut out = Vec::new();
    if let Err(error) = Writer::new()
        .set_single_quotes(false)
        .format_document(&doc, &mut out)
    {
        tracing::warn!(%error, "Serialization stopped early");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Insert indentation text around the children of element-only content.
fn lay_out<'d>(doc: Document<'d>, element: Element<'d>, depth: usize) {
    let children = element.children();
    if children.is_empty() || children.iter().any(|child| child.text().is_some()) {
        return;
    }

    let inner = format!("\n{}", INDENT.repeat(depth + 1));
    let mut laid_out: Vec<ChildOfElement<'d>> = Vec::with_capacity(children.len() * 2 + 1);
    for child in children {
        if let ChildOfElement::Element(nested) = child {
            lay_out(doc, nested, depth + 1);
        }
        laid_out.push(doc.create_text(&inner).into());
        laid_out.push(child);
    }
    laid_out.push(doc.create_text(&format!("\n{}", INDENT.repeat(depth))).into());
    element.replace_children(laid_out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::copy_children;
    use crate::EasyDocument;
    use pretty_assertions::assert_eq;

    fn parse(xml: &str) -> EasyDocument {
        xml.parse().unwrap()
    }

    /// Element names and non-blank text in document order, with depth.
    fn outline(doc: &EasyDocument) -> Vec<(usize, String)> {
        fn walk(element: Element<'_>, depth: usize, out: &mut Vec<(usize, String)>) {
            out.push((depth, format!("<{}>", element.name().local_part())));
            for child in element.children() {
                match child {
                    ChildOfElement::Element(nested) => walk(nested, depth + 1, out),
                    ChildOfElement::Text(text) if !text.text().trim().is_empty() => {
                        out.push((depth + 1, text.text().to_string()));
                    }
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(doc.root(), 0, &mut out);
        out
    }

    #[test]
    fn test_compact_output() {
        let doc = parse("<root>\n<a x=\"1\">text</a><b/></root>");
        assert_eq!(
            doc.write_to_string(false),
            "<?xml version=\"1.0\"?><root>\n<a x=\"1\">text</a><b/></root>"
        );
    }

    #[test]
    fn test_formatted_output() {
        let doc = parse("<root><a><b>1</b><c/></a><d>x<e><f/></e></d></root>");
        assert_eq!(
            doc.write_to_string(true),
            "<?xml version=\"1.0\"?><root>\n  <a>\n    <b>1</b>\n    <c/>\n  </a>\n  \
             <d>x<e><f/></e></d>\n</root>"
        );
    }

    #[test]
    fn test_formatting_leaves_source_untouched() {
        let doc = parse("<r><a/></r>");
        let _ = doc.write_to_string(true);
        assert_eq!(doc.root().children().len(), 1);
        assert_eq!(doc.write_to_string(false), "<?xml version=\"1.0\"?><r><a/></r>");
    }

    #[test]
    fn test_formatted_and_compact_reparse_alike() {
        for xml in [
            "<r><a><b>1</b></a><c/></r>",
            "<r xmlns=\"urn:d\"><a k=\"v\"><!--c--><b>x<i>y</i>z</b></a><?p q?></r>",
        ] {
            let doc = parse(xml);
            let compact = parse(&doc.write_to_string(false));
            let formatted = parse(&doc.write_to_string(true));
            assert_eq!(outline(&formatted), outline(&compact), "{xml}");
            assert_eq!(outline(&compact), outline(&doc), "{xml}");
        }
    }

    #[test]
    fn test_escaping() {
        let doc = EasyDocument::with_root_name("r");
        let root = doc.root();
        root.set_attribute_value("q", "say \"hi\" & <bye>");
        root.set_text("1 < 2 && 3 > 2");
        assert_eq!(
            doc.write_to_string(false),
            "<?xml version=\"1.0\"?>\
             <r q=\"say &quot;hi&quot; &amp; &lt;bye&gt;\">1 &lt; 2 &amp;&amp; 3 &gt; 2</r>"
        );
    }

    #[test]
    fn test_comments_and_processing_instructions() {
        let doc = parse("<r><!-- note --><?target some data?><?bare?></r>");
        assert_eq!(
            doc.write_to_string(false),
            "<?xml version=\"1.0\"?><r><!-- note --><?target some data?><?bare?></r>"
        );
    }

    #[test]
    fn test_root_level_siblings() {
        let package = Package::new();
        let doc = package.as_document();
        doc.root().append_child(doc.create_comment("head"));
        doc.root().append_child(doc.create_element("r"));
        assert_eq!(write_document(doc, false), "<?xml version=\"1.0\"?><!--head--><r/>");
        assert_eq!(write_document(doc, true), "<?xml version=\"1.0\"?><!--head--><r/>");
    }

    #[test]
    fn test_namespace_declarations_round_trip() {
        let doc = parse(r#"<r xmlns="urn:d" xmlns:p="urn:p"><p:a p:k="v"/><b/></r>"#);
        let written = doc.write_to_string(false);
        assert_eq!(
            written,
            r#"<?xml version="1.0"?><r xmlns='urn:d'><p:a p:k="v" xmlns:p='urn:p'/><b/></r>"#
        );
        assert_eq!(outline(&parse(&written)), outline(&doc));
    }

    #[test]
    fn test_imported_namespaced_child_declares_binding() {
        let source = parse(r#"<r xmlns:p="urn:p"><p:a/></r>"#);
        let dest = EasyDocument::with_root_name("out");
        copy_children(dest.root(), source.root());
        assert_eq!(
            dest.write_to_string(false),
            r#"<?xml version="1.0"?><out><p:a xmlns:p='urn:p'/></out>"#
        );
    }

    #[test]
    fn test_unprefixed_namespaced_attribute_gets_prefix() {
        let doc = EasyDocument::with_root_name("r");
        doc.root().set_attribute_value(("urn:a", "k"), "v");
        let written = doc.write_to_string(false);
        assert_eq!(
            written,
            r#"<?xml version="1.0"?><r autons0:k="v" xmlns:autons0='urn:a'/>"#
        );
        let reparsed = parse(&written);
        assert_eq!(reparsed.root().attribute_value(("urn:a", "k")), Some("v"));
    }

    #[test]
    fn test_default_namespace_is_undeclared_for_copied_plain_child() {
        let source = parse("<src><plain/></src>");
        let doc = parse(r#"<r xmlns="urn:d"/>"#);
        copy_children(doc.root(), source.root());
        assert_eq!(
            doc.write_to_string(false),
            r#"<?xml version="1.0"?><r xmlns='urn:d'><plain xmlns=''/></r>"#
        );
    }

    #[test]
    fn test_default_namespace_declared_once() {
        let doc = parse(r#"<r xmlns="urn:d"><a><b/></a></r>"#);
        assert_eq!(
            doc.write_to_string(true),
            "<?xml version=\"1.0\"?><r xmlns='urn:d'>\n  <a>\n    <b/>\n  </a>\n</r>"
        );
    }
}
