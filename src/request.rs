//! Outbound request descriptions and pagination helpers.

// self
use crate::{_prelude::*, error::ConfigError};

/// HTTP methods the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// Fetch a resource.
	Get,
	/// Create a resource or submit a command body.
	Post,
	/// Replace or partially update a resource.
	Put,
	/// Delete a resource.
	Delete,
}
impl Method {
	/// Returns the canonical method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Chainable description of one outbound API call.
///
/// The value is inert data: [`send`](crate::client::SessionClient::send) reads it, attaches the
/// bearer header to an internal copy, and leaves the caller's value untouched, so the same
/// request can be replayed after a refresh or reused across calls. The `Authorization` header is
/// owned by the client; requests that set it are rejected before any network I/O.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	method: Method,
	path: String,
	query: Vec<(String, String)>,
	headers: Vec<(String, String)>,
	body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Creates a request for the provided method and path.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
	}

	/// Creates a GET request.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::Get, path)
	}

	/// Creates a POST request.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::Post, path)
	}

	/// Creates a PUT request.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::Put, path)
	}

	/// Creates a DELETE request.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::Delete, path)
	}

	/// Appends a query parameter.
	pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((name.into(), value.into()));

		self
	}

	/// Appends a header. Names are stored lowercase.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into().to_ascii_lowercase(), value.into()));

		self
	}

	/// Serializes `body` as the JSON request body.
	pub fn json<T>(mut self, body: &T) -> Result<Self, ConfigError>
	where
		T: ?Sized + Serialize,
	{
		self.body =
			Some(serde_json::to_vec(body).map_err(|source| ConfigError::InvalidBody { source })?);

		Ok(self)
	}

	/// HTTP method of the call.
	pub fn method(&self) -> Method {
		self.method
	}

	/// Request path, joined onto the backend base URL at dispatch time.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Query parameters in append order.
	pub fn query_pairs(&self) -> &[(String, String)] {
		&self.query
	}

	/// Caller-supplied headers in append order.
	pub fn headers(&self) -> &[(String, String)] {
		&self.headers
	}

	/// Serialized request body, if any.
	pub fn body(&self) -> Option<&[u8]> {
		self.body.as_deref()
	}

	pub(crate) fn ensure_no_reserved_header(&self) -> Result<(), ConfigError> {
		match self.headers.iter().find(|(name, _)| name.eq_ignore_ascii_case("authorization")) {
			Some((name, _)) => Err(ConfigError::ReservedHeader { name: name.clone() }),
			None => Ok(()),
		}
	}
}

/// Pagination and projection parameters for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
	/// Maximum number of records to return; `0` asks the backend for everything.
	pub limit: Option<u32>,
	/// Number of records to skip from the start of the collection.
	pub skip: Option<u32>,
	/// Comma-separated field projection.
	pub select: Option<String>,
}
impl PageQuery {
	/// Creates an empty query that accepts the backend's defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the page size.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);

		self
	}

	/// Sets the page offset.
	pub fn with_skip(mut self, skip: u32) -> Self {
		self.skip = Some(skip);

		self
	}

	/// Restricts returned fields to the provided comma-separated projection.
	pub fn with_select(mut self, select: impl Into<String>) -> Self {
		self.select = Some(select.into());

		self
	}

	pub(crate) fn apply(&self, mut request: ApiRequest) -> ApiRequest {
		if let Some(limit) = self.limit {
			request = request.query("limit", limit.to_string());
		}
		if let Some(skip) = self.skip {
			request = request.query("skip", skip.to_string());
		}
		if let Some(select) = &self.select {
			request = request.query("select", select.clone());
		}

		request
	}
}
