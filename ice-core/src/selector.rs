//! Minimal CSS selector lists.
//!
//! Delegated listeners only ever need compound selectors made of an optional
//! tag name followed by attribute conditions, joined in a comma list:
//!
//! ```text
//! a[data-ice], div[data-ice], button[data-ice]
//! [data-ice-custom-event]
//! [data-ice^="dblclick|"]
//! ```
//!
//! Combinators and pseudo-classes are rejected at parse time.

use crate::{
    document::{Document, ElementId},
    error::SelectorError,
};
use std::{fmt, str::FromStr};

/// Condition applied to one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeOp {
    /// `[name]`
    Exists,
    /// `[name="value"]`
    Equals(String),
    /// `[name^="value"]`
    Prefix(String),
}

/// One attribute condition, e.g. `[data-ice^="click|"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeMatcher {
    name: String,
    op: AttributeOp,
}

impl AttributeMatcher {
    /// Create a matcher.
    pub fn new(name: impl Into<String>, op: AttributeOp) -> Self {
        Self {
            name: name.into(),
            op,
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Condition on the value.
    pub fn op(&self) -> &AttributeOp {
        &self.op
    }

    fn matches<D: Document>(&self, doc: &D, element: ElementId) -> bool {
        match (&self.op, doc.attribute(element, &self.name)) {
            (_, None) => false,
            (AttributeOp::Exists, Some(_)) => true,
            (AttributeOp::Equals(expected), Some(value)) => value == expected,
            (AttributeOp::Prefix(prefix), Some(value)) => value.starts_with(prefix.as_str()),
        }
    }
}

/// A tag name and/or attribute conditions that must all hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compound {
    tag: Option<String>,
    attributes: Vec<AttributeMatcher>,
}

impl Compound {
    /// Create a compound selector.
    pub fn new(tag: Option<&str>, attributes: Vec<AttributeMatcher>) -> Self {
        Self {
            tag: tag.map(str::to_ascii_lowercase),
            attributes,
        }
    }

    /// Required tag name, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Attribute conditions.
    pub fn attributes(&self) -> &[AttributeMatcher] {
        &self.attributes
    }

    fn matches<D: Document>(&self, doc: &D, element: ElementId) -> bool {
        let tag_ok = match &self.tag {
            None => true,
            Some(tag) if tag == "*" => true,
            Some(tag) => doc
                .tag_name(element)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag)),
        };
        tag_ok && self.attributes.iter().all(|a| a.matches(doc, element))
    }
}

/// A comma-separated list of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// `[name]`
    pub fn attribute(name: &str) -> Self {
        Self {
            compounds: vec![Compound::new(
                None,
                vec![AttributeMatcher::new(name, AttributeOp::Exists)],
            )],
        }
    }

    /// `[name^="prefix"]`
    pub fn attribute_prefix(name: &str, prefix: &str) -> Self {
        Self {
            compounds: vec![Compound::new(
                None,
                vec![AttributeMatcher::new(
                    name,
                    AttributeOp::Prefix(prefix.to_string()),
                )],
            )],
        }
    }

    /// `t1[name], t2[name], ...`
    pub fn tags_with_attribute<'a>(tags: impl IntoIterator<Item = &'a str>, name: &str) -> Self {
        Self {
            compounds: tags
                .into_iter()
                .map(|tag| {
                    Compound::new(
                        Some(tag),
                        vec![AttributeMatcher::new(name, AttributeOp::Exists)],
                    )
                })
                .collect(),
        }
    }

    /// The compound selectors of the list.
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Whether any entry of the list matches the element.
    pub fn matches<D: Document>(&self, doc: &D, element: ElementId) -> bool {
        self.compounds.iter().any(|c| c.matches(doc, element))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compounds = split_top_level(s)
            .into_iter()
            .map(parse_compound)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compounds })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{compound}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        for attr in &self.attributes {
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AttributeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            AttributeOp::Exists => write!(f, "[{}]", self.name),
            AttributeOp::Equals(v) => write!(f, "[{}=\"{}\"]", self.name, escape(v)),
            AttributeOp::Prefix(v) => write!(f, "[{}^=\"{}\"]", self.name, escape(v)),
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Split on commas that are outside brackets and quotes.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(raw: &str) -> Result<Compound, SelectorError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(SelectorError::Empty);
    }

    let tag_end = s.find('[').unwrap_or(s.len());
    let tag = &s[..tag_end];
    if !tag.is_empty() && tag != "*" && !tag.chars().all(is_name_char) {
        return Err(SelectorError::Trailing(tag.to_string()));
    }

    let mut attributes = Vec::new();
    let mut rest = &s[tag_end..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(SelectorError::Trailing(rest.to_string()));
        }
        let close = find_closing_bracket(rest)
            .ok_or_else(|| SelectorError::Unterminated(s.to_string()))?;
        attributes.push(parse_attribute(&rest[1..close], s)?);
        rest = &rest[close + 1..];
    }

    let tag = (!tag.is_empty()).then_some(tag);
    Ok(Compound::new(tag, attributes))
}

/// Byte index of the `]` closing the bracket at index 0.
fn find_closing_bracket(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            ']' => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_attribute(inner: &str, whole: &str) -> Result<AttributeMatcher, SelectorError> {
    let inner = inner.trim();
    let Some(pos) = inner.find(|c: char| "=^~|$*!".contains(c)) else {
        if inner.is_empty() || !inner.chars().all(is_name_char) {
            return Err(SelectorError::InvalidValue(whole.to_string()));
        }
        return Ok(AttributeMatcher::new(inner, AttributeOp::Exists));
    };

    let name = inner[..pos].trim();
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(SelectorError::InvalidValue(whole.to_string()));
    }

    let tail = &inner[pos..];
    let (op, value) = if let Some(value) = tail.strip_prefix("^=") {
        (AttributeOp::Prefix(String::new()), value)
    } else if let Some(value) = tail.strip_prefix('=') {
        (AttributeOp::Equals(String::new()), value)
    } else {
        return Err(SelectorError::UnsupportedOperator(whole.to_string()));
    };

    let value = parse_value(value.trim())
        .ok_or_else(|| SelectorError::InvalidValue(whole.to_string()))?;
    let op = match op {
        AttributeOp::Prefix(_) => AttributeOp::Prefix(value),
        _ => AttributeOp::Equals(value),
    };
    Ok(AttributeMatcher::new(name, op))
}

fn parse_value(raw: &str) -> Option<String> {
    let mut chars = raw.chars();
    match chars.next()? {
        q @ ('"' | '\'') => {
            let mut value = String::new();
            let mut escaped = false;
            let mut closed = false;
            for c in chars.by_ref() {
                if escaped {
                    value.push(c);
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    closed = true;
                    break;
                } else {
                    value.push(c);
                }
            }
            (closed && chars.next().is_none()).then_some(value)
        }
        _ => raw
            .chars()
            .all(|c| is_name_char(c) || c == '.' || c == '|')
            .then(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render_list() {
        let sel: Selector = "a[data-ice], DIV[data-ice] ,button[data-ice]".parse().unwrap();
        assert_eq!(sel.compounds().len(), 3);
        assert_eq!(sel.compounds()[1].tag(), Some("div"));
        assert_eq!(sel.to_string(), "a[data-ice], div[data-ice], button[data-ice]");
    }

    #[test]
    fn test_parse_prefix_operator() {
        let sel: Selector = r#"[data-ice^="click|"]"#.parse().unwrap();
        let attr = &sel.compounds()[0].attributes()[0];
        assert_eq!(attr.name(), "data-ice");
        assert_eq!(attr.op(), &AttributeOp::Prefix("click|".into()));
        assert_eq!(sel, Selector::attribute_prefix("data-ice", "click|"));
    }

    #[test]
    fn test_quoted_values_keep_commas_and_brackets() {
        let sel: Selector = r#"[data-x="a,b]"], [data-y='it\'s']"#.parse().unwrap();
        assert_eq!(sel.compounds().len(), 2);
        assert_eq!(
            sel.compounds()[0].attributes()[0].op(),
            &AttributeOp::Equals("a,b]".into())
        );
        assert_eq!(
            sel.compounds()[1].attributes()[0].op(),
            &AttributeOp::Equals("it's".into())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Selector>(), Err(SelectorError::Empty));
        assert_eq!("a,".parse::<Selector>(), Err(SelectorError::Empty));
        assert!(matches!(
            "[data-ice".parse::<Selector>(),
            Err(SelectorError::Unterminated(_))
        ));
        assert!(matches!(
            "[data-ice~=x]".parse::<Selector>(),
            Err(SelectorError::UnsupportedOperator(_))
        ));
        assert!(matches!(
            "form input[data-ice]".parse::<Selector>(),
            Err(SelectorError::Trailing(_))
        ));
        assert!(matches!(
            r#"[data-ice="open]"#.parse::<Selector>(),
            Err(SelectorError::Unterminated(_))
        ));
    }

    #[test]
    fn test_tags_with_attribute() {
        let sel = Selector::tags_with_attribute(["form"], "data-ice");
        assert_eq!(sel.to_string(), "form[data-ice]");
    }
}
