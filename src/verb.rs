//! The records owned by a [`PathDefinition`]: verb bindings and the dispatch
//! targets registered against them.
//!
//! [`PathDefinition`]: crate::PathDefinition
use crate::reflection::{Location, PathId};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
/// A single HTTP-verb binding registered under a [`PathDefinition`].
///
/// A binding is created fully method-tagged by
/// [`PathDefinition::add_verb`] (or one of its named wrappers) and then
/// optionally enriched—with a sub-path, an accepted content type, a route
/// identifier and dispatch targets. It never reverts to an earlier state and
/// it is never removed from its owner's collection.
///
/// `VerbDefinition` holds data, nothing else: no cross-field rule is checked
/// here. The construction path in [`PathDefinition`] is the only place where
/// such rules are applied.
///
/// [`PathDefinition`]: crate::PathDefinition
/// [`PathDefinition::add_verb`]: crate::PathDefinition::add_verb
pub struct VerbDefinition {
    /// The HTTP method this binding answers to.
    ///
    /// Any string is accepted, custom verbs included. Rejecting methods it
    /// doesn't understand is the consuming engine's job.
    pub method: String,
    /// An optional sub-path appended under the owning path.
    ///
    /// If `None`, the owning path is used as-is.
    pub uri: Option<String>,
    /// The content type accepted by this binding, if constrained.
    pub accept: Option<String>,
    /// A caller-assigned identifier for the route materialized from this
    /// binding.
    pub route_id: Option<String>,
    /// The dispatch targets registered against this binding, in registration
    /// order.
    pub outputs: Vec<DispatchTarget>,
    /// The id of the [`PathDefinition`] this binding was registered against.
    ///
    /// `None` only for records produced outside the fluent path, e.g. by a
    /// structured-format mapping layer.
    ///
    /// [`PathDefinition`]: crate::PathDefinition
    pub path: Option<PathId>,
    /// The location where this binding was registered.
    pub registered_at: Location,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
/// An opaque reference to the endpoint that requests matched by a verb
/// binding are forwarded to.
///
/// The model never interprets the URI; its structure is owned by the
/// consuming engine.
pub struct DispatchTarget {
    /// The endpoint URI that matched requests are forwarded to.
    pub uri: String,
}

impl DispatchTarget {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl From<&str> for DispatchTarget {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for DispatchTarget {
    fn from(uri: String) -> Self {
        Self::new(uri)
    }
}
