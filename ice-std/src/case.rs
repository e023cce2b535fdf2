//! Case conversions between event names, data keys and attribute names.
//!
//! Three spellings of the same name meet in the attribute surface:
//!
//! | attribute               | data key         | event name     |
//! |-------------------------|------------------|----------------|
//! | `data-ice-dblclick`     | `iceDblclick`    | `dblclick`     |
//! | `data-ice-custom-event` | `iceCustomEvent` | `custom.event` |

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Upper-case the first character and every ASCII letter that follows a
/// `-`, `_` or `.`, dropping the separator.
///
/// `custom.event` becomes `CustomEvent`, `dblclick` becomes `Dblclick`.
/// Separators before anything but a letter are kept: `step-2` becomes
/// `Step-2`.
pub fn camelize(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if i == 0 && is_word(c) {
            out.extend(c.to_uppercase());
            i += 1;
        } else if matches!(c, '-' | '_' | '.')
            && chars.get(i + 1).is_some_and(char::is_ascii_alphabetic)
        {
            out.extend(chars[i + 1].to_uppercase());
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Lower-case every ASCII capital, preceded by `splitter` unless it is the
/// first character.
///
/// `CustomEvent` with `.` becomes `custom.event`.
pub fn uncamelize(s: &str, splitter: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push(splitter);
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Data key of a `data-*` attribute: `data-ice-custom-event` → `iceCustomEvent`.
///
/// Only a lower-case ASCII letter after a `-` is camel-cased, so
/// [`attribute_name`] restores the original attribute. Returns `None` for
/// attributes outside the `data-` namespace.
pub fn data_key(attribute: &str) -> Option<String> {
    let rest = attribute.strip_prefix("data-")?;
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    Some(out)
}

/// Attribute name of a data key: `iceCustomEvent` → `data-ice-custom-event`.
pub fn attribute_name(key: &str) -> String {
    format!("data-{}", uncamelize(key, '-'))
}
