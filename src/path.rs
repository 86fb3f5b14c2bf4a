use std::path::Path;

use crate::errors::BlueprintError;
use crate::reflection::{Location, PathId};
use crate::verb::{DispatchTarget, VerbDefinition};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
/// One base path and the verb bindings registered under it.
///
/// `PathDefinition` is the entry point for building REST endpoint
/// definitions. You register verb bindings against it via [`add_verb`] or
/// one of the named wrappers ([`get`], [`post`], [`put`], [`delete`],
/// [`head`], [`verb`]), then refine the **last registered** binding via
/// [`accept`], [`route_id`] and [`to`].
///
/// ```rust
/// use rest_blueprint::PathDefinition;
///
/// let mut orders = PathDefinition::new("/orders");
/// orders
///     .get(None)
///     .route_id("list-orders")
///     .post("/bulk")
///     .accept("application/json")?;
/// # Ok::<(), rest_blueprint::BlueprintError>(())
/// ```
///
/// The completed tree is consumed by a routing engine, either directly or
/// after a [`persist`]/[`load`] round trip. All fields are public so that a
/// structured-format mapping layer can populate and read every one of them
/// without going through the fluent API.
///
/// [`add_verb`]: Self::add_verb
/// [`get`]: Self::get
/// [`post`]: Self::post
/// [`put`]: Self::put
/// [`delete`]: Self::delete
/// [`head`]: Self::head
/// [`verb`]: Self::verb
/// [`accept`]: Self::accept
/// [`route_id`]: Self::route_id
/// [`to`]: Self::to
/// [`persist`]: Self::persist
/// [`load`]: Self::load
pub struct PathDefinition {
    /// The identity assigned to this definition when it was created.
    ///
    /// Verb bindings registered against this definition carry it as their
    /// back-reference.
    pub id: PathId,
    /// The base path shared by all verb bindings below.
    ///
    /// No format validation is performed here; that belongs to the consuming
    /// engine, if anywhere.
    pub uri: String,
    /// All registered verb bindings, in the order they were registered.
    ///
    /// The order matters: the fluent mutators operate on the last element.
    /// The collection is live—the model does not defend it against external
    /// mutation.
    pub verbs: Vec<VerbDefinition>,
    /// The location where this definition was created.
    pub creation_location: Location,
}

impl PathDefinition {
    #[track_caller]
    /// Create a new definition for the given base path.
    ///
    /// The definition starts out with no verb bindings.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            id: PathId::next(),
            uri: uri.into(),
            verbs: Vec::new(),
            creation_location: Location::caller(),
        }
    }

    #[track_caller]
    /// Register a new verb binding.
    ///
    /// This is the single mutation primitive behind every named wrapper: it
    /// creates a [`VerbDefinition`] tagged with `method`, points it back at
    /// this definition, sets its sub-path if `url` is `Some`, and appends it
    /// to [`verbs`](Self::verbs).
    ///
    /// `method` is taken verbatim—`"get"`, `"post"`, or any custom verb the
    /// consuming engine understands.
    pub fn add_verb(&mut self, method: impl Into<String>, url: Option<&str>) -> &mut Self {
        let verb = VerbDefinition {
            method: method.into(),
            uri: url.map(Into::into),
            accept: None,
            route_id: None,
            outputs: Vec::new(),
            path: Some(self.id),
            registered_at: Location::caller(),
        };
        self.verbs.push(verb);
        self
    }

    #[track_caller]
    /// Register a `get` binding, with an optional sub-path.
    ///
    /// ```rust
    /// use rest_blueprint::PathDefinition;
    ///
    /// let mut users = PathDefinition::new("/users");
    /// // `/users` itself..
    /// users.get(None);
    /// // ..and `/users/{id}` (the sub-path is not parsed, only stored).
    /// users.get("/{id}");
    /// ```
    pub fn get<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb("get", url.into())
    }

    #[track_caller]
    /// Register a `post` binding, with an optional sub-path.
    pub fn post<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb("post", url.into())
    }

    #[track_caller]
    /// Register a `put` binding, with an optional sub-path.
    pub fn put<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb("put", url.into())
    }

    #[track_caller]
    /// Register a `delete` binding, with an optional sub-path.
    pub fn delete<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb("delete", url.into())
    }

    #[track_caller]
    /// Register a `head` binding, with an optional sub-path.
    pub fn head<'a>(&mut self, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb("head", url.into())
    }

    #[track_caller]
    /// Register a binding for an arbitrary verb, with an optional sub-path.
    ///
    /// The method string is stored as-is, without validation.
    pub fn verb<'a>(&mut self, method: impl Into<String>, url: impl Into<Option<&'a str>>) -> &mut Self {
        self.add_verb(method, url.into())
    }

    /// Assign a route identifier to the last registered verb binding.
    ///
    /// If no verb binding has been registered yet there is nothing to name
    /// and the call is a quiet no-op. This diverges from [`accept`] and
    /// [`to`], which treat the same situation as an error; the divergence is
    /// kept for compatibility with the behaviour this model reproduces.
    ///
    /// [`accept`]: Self::accept
    /// [`to`]: Self::to
    pub fn route_id(&mut self, route_id: impl Into<String>) -> &mut Self {
        if let Some(verb) = self.last_verb_mut() {
            verb.route_id = Some(route_id.into());
        }
        self
    }

    /// Constrain the content type accepted by the last registered verb
    /// binding.
    ///
    /// ```rust
    /// use rest_blueprint::PathDefinition;
    ///
    /// let mut users = PathDefinition::new("/users");
    /// users.post(None).accept("application/json")?;
    /// # Ok::<(), rest_blueprint::BlueprintError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError::NoVerbBinding`] if no verb binding has been
    /// registered yet.
    pub fn accept(&mut self, content_type: impl Into<String>) -> Result<&mut Self, BlueprintError> {
        let Some(verb) = self.last_verb_mut() else {
            return Err(BlueprintError::NoVerbBinding);
        };
        verb.accept = Some(content_type.into());
        Ok(self)
    }

    #[deprecated(note = "append dispatch targets through the consuming engine's verb-level API instead")]
    /// Append a dispatch target to the last registered verb binding.
    ///
    /// Unlike the other mutators, `to` returns the [`VerbDefinition`] it
    /// mutated rather than the definition itself: callers that use this
    /// entry point resume chaining from the binding. The asymmetric return
    /// type is kept for compatibility; this is a legacy entry point, not the
    /// primary chaining style.
    ///
    /// ```rust
    /// # #![allow(deprecated)]
    /// use rest_blueprint::PathDefinition;
    ///
    /// let mut users = PathDefinition::new("/users");
    /// users.post(None);
    /// let binding = users.to("queue:registrations")?;
    /// assert_eq!(binding.outputs[0].uri, "queue:registrations");
    /// # Ok::<(), rest_blueprint::BlueprintError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError::NoVerbBinding`] if no verb binding has been
    /// registered yet.
    pub fn to(
        &mut self,
        target: impl Into<DispatchTarget>,
    ) -> Result<&mut VerbDefinition, BlueprintError> {
        let Some(verb) = self.last_verb_mut() else {
            return Err(BlueprintError::NoVerbBinding);
        };
        verb.outputs.push(target.into());
        Ok(verb)
    }

    // Single access point for the "operate on the last binding" mutators.
    // Each caller decides what an empty collection means: no-op for
    // `route_id`, an error for `accept` and `to`.
    fn last_verb_mut(&mut self) -> Option<&mut VerbDefinition> {
        self.verbs.last_mut()
    }
}

/// Methods to serialize and deserialize a [`PathDefinition`].
///
/// These are used to hand the definition tree over to the consuming engine.
impl PathDefinition {
    /// Serialize the definition tree to a file in RON format.
    pub fn persist(&self, filepath: &Path) -> Result<(), anyhow::Error> {
        let config = ron::ser::PrettyConfig::default();
        let contents = ron::ser::to_string_pretty(self, config)?;
        fs_err::write(filepath, contents)?;
        Ok(())
    }

    /// Read a RON-encoded definition tree from a file.
    pub fn load(filepath: &Path) -> Result<Self, anyhow::Error> {
        let contents = fs_err::read_to_string(filepath)?;
        let value = ron::de::from_str(&contents)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BlueprintError, DispatchTarget, PathDefinition};

    #[test]
    fn verbs_are_stored_in_registration_order() {
        let mut path = PathDefinition::new("/inventory");
        path.get(None).post(None).delete("/stale");
        let methods: Vec<_> = path.verbs.iter().map(|v| v.method.as_str()).collect();
        assert_eq!(methods, ["get", "post", "delete"]);
    }

    #[test]
    fn each_wrapper_fixes_its_method_string() {
        let mut path = PathDefinition::new("/users");
        path.get(None).post(None).put(None).delete(None).head(None);
        let methods: Vec<_> = path.verbs.iter().map(|v| v.method.as_str()).collect();
        assert_eq!(methods, ["get", "post", "put", "delete", "head"]);
    }

    #[test]
    fn custom_verbs_are_accepted_verbatim() {
        let mut path = PathDefinition::new("/jobs");
        path.verb("purge", None).verb("lock", "/all");
        assert_eq!(path.verbs[0].method, "purge");
        assert_eq!(path.verbs[1].method, "lock");
        assert_eq!(path.verbs[1].uri.as_deref(), Some("/all"));
    }

    #[test]
    fn bindings_point_back_at_their_owner() {
        let mut first = PathDefinition::new("/a");
        let mut second = PathDefinition::new("/b");
        first.get(None);
        second.get(None);
        assert_ne!(first.id, second.id);
        assert_eq!(first.verbs[0].path, Some(first.id));
        assert_eq!(second.verbs[0].path, Some(second.id));
    }

    #[test]
    fn the_sub_path_is_only_set_when_supplied() {
        let mut path = PathDefinition::new("/users");
        path.get(None).put("/archive");
        assert_eq!(path.verbs[0].uri, None);
        assert_eq!(path.verbs[1].uri.as_deref(), Some("/archive"));
    }

    #[test]
    fn accept_requires_a_verb_binding() {
        let mut path = PathDefinition::new("/users");
        let err = path.accept("application/json").unwrap_err();
        assert_eq!(err, BlueprintError::NoVerbBinding);
        assert!(path.verbs.is_empty());
    }

    #[test]
    fn accept_targets_the_last_binding_only() {
        let mut path = PathDefinition::new("/users");
        path.get(None).post(None);
        path.accept("application/json").unwrap();
        assert_eq!(path.verbs[0].accept, None);
        assert_eq!(path.verbs[1].accept.as_deref(), Some("application/json"));
    }

    #[test]
    fn naming_a_route_before_any_binding_is_a_quiet_no_op() {
        let mut path = PathDefinition::new("/users");
        path.route_id("orphan");
        assert!(path.verbs.is_empty());
    }

    #[test]
    fn route_id_targets_the_last_binding_only() {
        let mut path = PathDefinition::new("/users");
        path.get(None).post(None).route_id("create");
        assert_eq!(path.verbs[0].route_id, None);
        assert_eq!(path.verbs[1].route_id.as_deref(), Some("create"));
    }

    #[test]
    #[allow(deprecated)]
    fn dispatch_targets_require_a_verb_binding() {
        let mut path = PathDefinition::new("/users");
        let err = path.to("direct:create").unwrap_err();
        assert_eq!(err, BlueprintError::NoVerbBinding);
    }

    #[test]
    #[allow(deprecated)]
    fn dispatch_targets_accumulate_on_the_last_binding() {
        let mut path = PathDefinition::new("/users");
        path.get(None).post(None);
        let binding = path.to("queue:audit").unwrap();
        assert_eq!(binding.method, "post");
        binding.outputs.push(DispatchTarget::new("queue:archive"));
        let targets: Vec<_> = path.verbs[1]
            .outputs
            .iter()
            .map(|t| t.uri.as_str())
            .collect();
        assert_eq!(targets, ["queue:audit", "queue:archive"]);
        assert!(path.verbs[0].outputs.is_empty());
    }

    #[test]
    fn a_full_chain_builds_the_expected_tree() {
        let mut path = PathDefinition::new("/users");
        path.get(None)
            .post("/bulk")
            .accept("application/json")
            .unwrap()
            .route_id("createUsers");

        assert_eq!(path.uri, "/users");
        assert_eq!(path.verbs.len(), 2);

        let first = &path.verbs[0];
        assert_eq!(first.method, "get");
        assert_eq!(first.uri, None);
        assert_eq!(first.accept, None);
        assert_eq!(first.route_id, None);

        let second = &path.verbs[1];
        assert_eq!(second.method, "post");
        assert_eq!(second.uri.as_deref(), Some("/bulk"));
        assert_eq!(second.accept.as_deref(), Some("application/json"));
        assert_eq!(second.route_id.as_deref(), Some("createUsers"));
    }

    #[test]
    fn definitions_survive_a_persist_load_round_trip() {
        let mut path = PathDefinition::new("/orders");
        path.get("/open")
            .accept("application/json")
            .unwrap()
            .route_id("open-orders");

        let file = tempfile::NamedTempFile::new().unwrap();
        path.persist(file.path()).unwrap();
        let loaded = PathDefinition::load(file.path()).unwrap();
        assert_eq!(loaded, path);
    }
}
