//! Namespace tree with the stateful-container convention.

use super::split_path;
use ice_core::{
    Call, Handler, HandlerPath, InstanceRef, Method, NamespaceError, Receiver, Resolve,
    ResolvedHandler, TypeTag,
};
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// One entry of a namespace.
#[derive(Clone)]
pub enum Member {
    /// A callable.
    Handler(Arc<dyn Handler>),
    /// A plain object grouping members.
    Namespace(Namespace),
    /// A stateful container; its methods are invoked with it as receiver.
    Instance(Instance),
}

impl Member {
    /// The "what kind of object am I" probe.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Member::Instance(_) => Some(TypeTag::Class),
            Member::Handler(_) | Member::Namespace(_) => None,
        }
    }

    /// Property lookup. Handlers have no properties.
    pub fn member(&self, name: &str) -> Option<&Member> {
        match self {
            Member::Handler(_) => None,
            Member::Namespace(ns) => ns.members.get(name),
            Member::Instance(instance) => instance.members.members.get(name),
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Handler(_) => f.write_str("Handler"),
            Member::Namespace(ns) => f.debug_tuple("Namespace").field(ns).finish(),
            Member::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
        }
    }
}

/// A stateful container: shared state plus the members reachable under it.
#[derive(Clone)]
pub struct Instance {
    state: InstanceRef,
    members: Namespace,
}

impl Instance {
    /// Create an instance around `state`.
    pub fn new<T: Any + Send + Sync>(name: &str, state: T) -> Self {
        Self::from_shared(name, Arc::new(state))
    }

    /// Create an instance around state the host keeps a handle to.
    pub fn from_shared<T: Any + Send + Sync>(name: &str, state: Arc<T>) -> Self {
        Self {
            state: InstanceRef::new(name, state),
            members: Namespace::new(),
        }
    }

    /// Add a method running against the instance state.
    ///
    /// The state type must match the one the instance was created with,
    /// otherwise the method never runs.
    pub fn method<T, F>(self, path: &str, f: F) -> Result<Self, NamespaceError>
    where
        T: Any + Send + Sync,
        F: Fn(&T, Call<'_>) + Send + Sync + 'static,
    {
        self.handler(path, Method::new(f))
    }

    /// Add a plain handler under the instance.
    pub fn handler<H: Handler>(mut self, path: &str, handler: H) -> Result<Self, NamespaceError> {
        self.members.insert(path, handler)?;
        Ok(self)
    }

    /// Add a nested instance.
    pub fn instance(mut self, path: &str, instance: Instance) -> Result<Self, NamespaceError> {
        self.members.insert_instance(path, instance)?;
        Ok(self)
    }

    /// The receiver handle of this instance.
    pub fn state(&self) -> &InstanceRef {
        &self.state
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("name", &self.state.name())
            .field("members", &self.members)
            .finish()
    }
}

/// A tree of handlers, plain namespaces and instances.
///
/// Resolution walks the path segments from the root. Missing segments are
/// skipped rather than failing, and the innermost instance crossed on the way
/// becomes the receiver.
#[derive(Clone, Default)]
pub struct Namespace {
    members: HashMap<String, Member>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the namespace has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Direct member lookup.
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Register a handler, creating intermediate namespaces.
    ///
    /// An existing entry at the final segment is replaced.
    pub fn insert<H: Handler>(&mut self, path: &str, handler: H) -> Result<(), NamespaceError> {
        self.insert_member(path, Member::Handler(Arc::new(handler)))
    }

    /// Register an already shared handler.
    pub fn insert_shared(
        &mut self,
        path: &str,
        handler: Arc<dyn Handler>,
    ) -> Result<(), NamespaceError> {
        self.insert_member(path, Member::Handler(handler))
    }

    /// Register a stateful instance.
    pub fn insert_instance(
        &mut self,
        path: &str,
        instance: Instance,
    ) -> Result<(), NamespaceError> {
        self.insert_member(path, Member::Instance(instance))
    }

    /// Register a nested namespace.
    pub fn insert_namespace(&mut self, path: &str, ns: Namespace) -> Result<(), NamespaceError> {
        self.insert_member(path, Member::Namespace(ns))
    }

    /// Register a handler (builder style).
    pub fn with<H: Handler>(mut self, path: &str, handler: H) -> Result<Self, NamespaceError> {
        self.insert(path, handler)?;
        Ok(self)
    }

    /// Register an instance (builder style).
    pub fn with_instance(mut self, path: &str, instance: Instance) -> Result<Self, NamespaceError> {
        self.insert_instance(path, instance)?;
        Ok(self)
    }

    /// Remove the entry at `path`, returning it.
    pub fn remove(&mut self, path: &str) -> Option<Member> {
        let segments = split_path(path).ok()?;
        let (last, parents) = segments.split_last()?;
        let mut ns = self;
        for segment in parents {
            ns = match ns.members.get_mut(segment)? {
                Member::Namespace(inner) => inner,
                Member::Instance(instance) => &mut instance.members,
                Member::Handler(_) => return None,
            };
        }
        ns.members.remove(last)
    }

    fn insert_member(&mut self, path: &str, member: Member) -> Result<(), NamespaceError> {
        let segments = split_path(path)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(NamespaceError::EmptyPath);
        };

        let mut ns = self;
        for segment in parents {
            let entry = ns
                .members
                .entry(segment.clone())
                .or_insert_with(|| Member::Namespace(Namespace::new()));
            ns = match entry {
                Member::Namespace(inner) => inner,
                Member::Instance(instance) => &mut instance.members,
                Member::Handler(_) => {
                    return Err(NamespaceError::Conflict {
                        path: path.to_string(),
                        existing: "handler",
                    });
                }
            };
        }
        ns.members.insert(last.clone(), member);
        Ok(())
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.members.iter()).finish()
    }
}

impl Resolve for Namespace {
    fn resolve(&self, path: &HandlerPath) -> Option<ResolvedHandler> {
        // `None` stands for the root itself.
        let mut current: Option<&Member> = None;
        let mut receiver = Receiver::Global;

        for segment in path.segments() {
            if let Some(Member::Instance(instance)) =
                current.filter(|member| member.type_tag() == Some(TypeTag::Class))
            {
                receiver = Receiver::Instance(instance.state.clone());
            }
            let next = match current {
                None => self.members.get(segment.as_str()),
                Some(member) => member.member(segment),
            };
            if let Some(next) = next {
                current = Some(next);
            }
        }

        match current? {
            Member::Handler(handler) => Some(ResolvedHandler::new(handler.clone(), receiver)),
            Member::Namespace(_) | Member::Instance(_) => None,
        }
    }
}
