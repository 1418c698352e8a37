//! Registry of linked application constructors.
//!
//! This is the seam between the gateway and its backend: a deployment
//! build registers the backend's application constructor under the name
//! its service manifest declares, and the bootstrap looks that name up
//! at acquisition time. The gateway crate itself registers nothing.

use std::collections::HashMap;

use axum::Router;

type AppConstructor = Box<dyn Fn() -> Router + Send + Sync>;

/// Named application constructors available in this build.
#[derive(Default)]
pub struct AppRegistry {
    constructors: HashMap<String, AppConstructor>,
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register an application constructor under `application`.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register<F>(mut self, application: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Router + Send + Sync + 'static,
    {
        self.constructors
            .insert(application.into(), Box::new(constructor));
        self
    }

    /// Construct the application registered under `application`, if any.
    pub fn construct(&self, application: &str) -> Option<Router> {
        self.constructors.get(application).map(|build| build())
    }

    /// Whether `application` is registered.
    pub fn contains(&self, application: &str) -> bool {
        self.constructors.contains_key(application)
    }

    /// Number of registered applications.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry has no registrations.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
