//! Errors that can occur while assembling a [`PathDefinition`].
//!
//! [`PathDefinition`]: crate::PathDefinition

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
/// The error returned by the mutators that operate on the last-registered
/// verb binding of a [`PathDefinition`].
///
/// It is a usage error, not a data error: it is raised synchronously, it is
/// never recovered internally and it always aborts the in-progress fluent
/// chain.
///
/// [`PathDefinition`]: crate::PathDefinition
pub enum BlueprintError {
    /// There is no verb binding to operate on yet.
    ///
    /// Returned by [`PathDefinition::accept`] and [`PathDefinition::to`]
    /// when they are invoked before any verb binding has been registered.
    ///
    /// [`PathDefinition::accept`]: crate::PathDefinition::accept
    /// [`PathDefinition::to`]: crate::PathDefinition::to
    #[error("there is no verb binding to operate on: add a verb binding first, e.g. via `get`, `post` or `delete`")]
    NoVerbBinding,
}
