//! Path-query accessors.
//!
//! Each accessor compiles the path with `sxd-xpath`, evaluates it against
//! the given node and applies the XPath 1.0 coercion for the requested type
//! (`boolean()`, `string()`, `number()`). Compilation and evaluation errors
//! are returned as they come from the query engine.

use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

use crate::error::Result;

/// Evaluate `xpath` against `node` and return the raw value.
fn evaluate<'d, N>(node: N, xpath: &str) -> Result<Value<'d>>
where
    N: Into<Node<'d>>,
{
    let factory = Factory::new();
    let compiled = factory
        .build(xpath)
        .map_err(sxd_xpath::Error::from)?
        .ok_or(sxd_xpath::Error::NoXPath)?;

    let context = Context::new();
    let value = compiled
        .evaluate(&context, node)
        .map_err(sxd_xpath::Error::from)?;
    Ok(value)
}

/// Evaluate a path expression and coerce the result to a boolean.
///
/// Node-sets are true when non-empty, strings when non-empty, numbers when
/// neither zero nor NaN.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::get_boolean;
///
/// let doc: EasyDocument = "<cfg><debug/></cfg>".parse().unwrap();
/// assert!(get_boolean(doc.root(), "debug").unwrap());
/// assert!(!get_boolean(doc.root(), "verbose").unwrap());
/// ```
pub fn get_boolean<'d, N>(node: N, xpath: &str) -> Result<bool>
where
    N: Into<Node<'d>>,
{
    Ok(evaluate(node, xpath)?.into_boolean())
}

/// Evaluate a path expression and coerce the result to a string.
///
/// A node-set yields the string value of its first node in document order,
/// or the empty string when it is empty.
///
/// # Examples
/// ```
/// use xmldoc_util::config::DEFAULT_XPATH;
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::get_string;
///
/// let doc: EasyDocument = "<user><name>Ada</name></user>".parse().unwrap();
/// assert_eq!(get_string(doc.root(), "name").unwrap(), "Ada");
/// assert_eq!(get_string(doc.root(), DEFAULT_XPATH).unwrap(), "Ada");
/// ```
pub fn get_string<'d, N>(node: N, xpath: &str) -> Result<String>
where
    N: Into<Node<'d>>,
{
    Ok(evaluate(node, xpath)?.into_string())
}

/// Evaluate a path expression, coerce the result to a number and convert
/// it to `T`.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::get_number;
///
/// let doc: EasyDocument = "<order><qty>3</qty><price>2.5</price></order>".parse().unwrap();
/// assert_eq!(get_number::<u32, _>(doc.root(), "qty").unwrap(), 3);
/// assert_eq!(get_number::<f64, _>(doc.root(), "qty * price").unwrap(), 7.5);
/// ```
pub fn get_number<'d, T, N>(node: N, xpath: &str) -> Result<T>
where
    T: FromXPathNumber,
    N: Into<Node<'d>>,
{
    Ok(T::from_xpath_number(evaluate(node, xpath)?.into_number()))
}

/// Conversion from an XPath number (an `f64`) into a Rust numeric type.
///
/// Integer targets truncate toward zero and saturate at their bounds; NaN
/// becomes zero.
pub trait FromXPathNumber {
    /// Convert an XPath number.
    fn from_xpath_number(value: f64) -> Self;
}

macro_rules! impl_from_xpath_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromXPathNumber for $ty {
                #[inline]
                fn from_xpath_number(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_from_xpath_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
