//! Route descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ModelDescriptor, Schema};
use crate::types::TypeRef;

/// HTTP verb of a route.
///
/// Every verb the routing layer can register is representable; only GET,
/// POST, PUT and DELETE have client emission rules, and the rest surface as
/// warnings at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Get the uppercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The metadata tuple describing one HTTP endpoint: verb, path template,
/// request/response shapes, handler identity, and pagination/sort
/// participation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub method: HttpMethod,
    /// Path template with `:name` placeholder segments.
    pub path: String,
    /// Request shape, when the route binds one.
    pub request: Option<ModelDescriptor>,
    /// Response shape, when the route declares one.
    pub response: Option<TypeRef>,
    /// Identity of the handler factory, e.g. `api::users::list_users_handler`.
    /// Only used to derive the emitted function name.
    pub handler: String,
    pub pagination: bool,
    pub sort: bool,
}

impl RouteDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            request: None,
            response: None,
            handler: String::new(),
            pagination: false,
            sort: false,
        }
    }

    /// Attach the request descriptor.
    pub fn request(mut self, model: ModelDescriptor) -> Self {
        self.request = Some(model);
        self
    }

    /// Attach the request descriptor from a [`Schema`] impl.
    pub fn request_schema<T: Schema>(self) -> Self {
        self.request(T::descriptor())
    }

    /// Attach the response type.
    pub fn response(mut self, ty: TypeRef) -> Self {
        self.response = Some(ty);
        self
    }

    /// Set the handler identity the function name derives from.
    pub fn handler(mut self, ident: impl Into<String>) -> Self {
        self.handler = ident.into();
        self
    }

    /// Mark the route as paginated.
    pub fn paginated(mut self) -> Self {
        self.pagination = true;
        self
    }

    /// Mark the route as sortable.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Registry key. Routes sharing a key overwrite each other,
    /// last write wins.
    pub fn key(&self) -> String {
        format!("{}:{}", self.method.as_str(), self.path)
    }
}
