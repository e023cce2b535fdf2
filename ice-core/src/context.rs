//! # Invocation context
//!
//! Two things travel with every invocation besides the element and the
//! event:
//!
//! - the [`Receiver`]: the stateful container the handler was found on, or
//!   [`Receiver::Global`] when it was reached through plain namespaces;
//! - the declared arguments, an opaque string that handlers can parse with
//!   [`FromArgs`].
//!
//! # Class convention
//!
//! A namespace entry that answers the probe with [`TypeTag::Class`] is a
//! stateful container. The resolver makes the innermost such container the
//! receiver, so handlers nested under it behave as its methods.

use std::{any::Any, fmt, str::FromStr, sync::Arc};
use thiserror::Error;

/// Answer of the "what kind of object am I" probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A stateful container; it becomes the receiver of its methods.
    Class,
}

/// A stateful container acting as receiver.
#[derive(Clone)]
pub struct InstanceRef {
    name: Arc<str>,
    state: Arc<dyn Any + Send + Sync>,
}

impl InstanceRef {
    /// Wrap shared state under a name.
    pub fn new(name: impl Into<Arc<str>>, state: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    /// Name the instance was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the state as a concrete type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        self.state.downcast_ref::<T>()
    }

    /// Whether both references point at the same state.
    pub fn ptr_eq(&self, other: &InstanceRef) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for InstanceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The `this` of an invocation.
#[derive(Debug, Clone, Default)]
pub enum Receiver {
    /// Reached through plain namespaces only.
    #[default]
    Global,
    /// A method of a stateful container.
    Instance(InstanceRef),
}

impl Receiver {
    /// Whether this is the global receiver.
    pub fn is_global(&self) -> bool {
        matches!(self, Receiver::Global)
    }

    /// The instance, if any.
    pub fn instance(&self) -> Option<&InstanceRef> {
        match self {
            Receiver::Global => None,
            Receiver::Instance(instance) => Some(instance),
        }
    }

    /// Borrow the instance state as a concrete type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        self.instance().and_then(InstanceRef::downcast)
    }
}

/// Error type for argument extraction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("argument extraction failed: {message}")]
pub struct ExtractError {
    message: String,
}

impl ExtractError {
    /// Create a new extraction error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Extract a typed value from the declared arguments.
///
/// The arguments are opaque; this is a convenience for handlers that know
/// what their element declares.
pub trait FromArgs: Sized {
    /// Attempt to extract `Self`.
    fn from_args(args: Option<&str>) -> Result<Self, ExtractError>;
}

impl FromArgs for String {
    fn from_args(args: Option<&str>) -> Result<Self, ExtractError> {
        args.map(str::to_string)
            .ok_or_else(|| ExtractError::new("no arguments declared"))
    }
}

// Missing arguments are a valid outcome for optional extraction, malformed
// ones are not.
impl<T: FromArgs> FromArgs for Option<T> {
    fn from_args(args: Option<&str>) -> Result<Self, ExtractError> {
        match args {
            None => Ok(None),
            Some(_) => T::from_args(args).map(Some),
        }
    }
}

macro_rules! from_args_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArgs for $ty {
                fn from_args(args: Option<&str>) -> Result<Self, ExtractError> {
                    let raw = args.ok_or_else(|| ExtractError::new("no arguments declared"))?;
                    <$ty as FromStr>::from_str(raw.trim()).map_err(|e| {
                        ExtractError::new(format!(
                            "`{raw}` is not a valid {}: {e}",
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

from_args_via_from_str!(bool, i32, i64, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_extraction() {
        assert_eq!(i64::from_args(Some("4")), Ok(4));
        assert_eq!(f64::from_args(Some(" 2.5 ")), Ok(2.5));
        assert!(i64::from_args(Some("four")).is_err());
        assert!(i64::from_args(None).is_err());
    }

    #[test]
    fn test_optional_extraction() {
        assert_eq!(Option::<u32>::from_args(None), Ok(None));
        assert_eq!(Option::<u32>::from_args(Some("7")), Ok(Some(7)));
        assert!(Option::<u32>::from_args(Some("x")).is_err());
    }

    #[test]
    fn test_receiver_downcast() {
        let state: Arc<dyn Any + Send + Sync> = Arc::new(41_u32);
        let receiver = Receiver::Instance(InstanceRef::new("counter", state));
        assert!(!receiver.is_global());
        assert_eq!(receiver.downcast::<u32>(), Some(&41));
        assert_eq!(receiver.downcast::<String>(), None);
        assert_eq!(receiver.instance().map(InstanceRef::name), Some("counter"));
        assert!(Receiver::Global.downcast::<u32>().is_none());
    }
}
