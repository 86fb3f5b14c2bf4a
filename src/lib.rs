//! A declarative, in-memory model for REST endpoint definitions.
//!
//! A [`PathDefinition`] couples a base path with an ordered list of
//! [`VerbDefinition`]s—one per HTTP-verb binding, each carrying an optional
//! sub-path, an accepted content type, a route identifier and the dispatch
//! targets that matched requests are forwarded to.
//!
//! Definitions are assembled through a fluent API and then handed over, as a
//! plain object tree, to the routing engine that materializes the actual
//! request handlers. This crate is only the model: it performs no HTTP
//! validation, no URI template parsing and no dispatching of its own.
//!
//! ```rust
//! use rest_blueprint::PathDefinition;
//!
//! let mut users = PathDefinition::new("/users");
//! users
//!     .get(None)
//!     .post("/bulk")
//!     .accept("application/json")?
//!     .route_id("create-users");
//!
//! assert_eq!(users.verbs.len(), 2);
//! # Ok::<(), rest_blueprint::BlueprintError>(())
//! ```
pub use errors::BlueprintError;
pub use path::PathDefinition;
pub use reflection::{Location, PathId};
pub use verb::{DispatchTarget, VerbDefinition};

mod errors;
mod path;
mod reflection;
mod verb;
