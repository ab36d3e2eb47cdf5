//! Backend descriptor: endpoints and session parameters of the consumed REST API.

// self
use crate::{_prelude::*, error::ConfigError};

/// Describes the backend the client talks to.
///
/// The backend is consumed, not owned: the descriptor only records where the login, refresh,
/// and identity endpoints live and how long issued sessions should last. The lifetime is sent
/// on the wire as `expiresInMins`, so it must be a positive whole number of minutes.
#[derive(Clone, Debug)]
pub struct BackendDescriptor {
	/// Base URL every request path is joined onto.
	pub base_url: Url,
	/// Path of the login endpoint.
	pub login_path: String,
	/// Path of the refresh endpoint.
	pub refresh_path: String,
	/// Path of the identity endpoint.
	pub identity_path: String,
	/// Requested session lifetime.
	pub session_ttl: Duration,
}
impl BackendDescriptor {
	/// Default identity endpoint path.
	pub const DEFAULT_IDENTITY_PATH: &'static str = "/auth/me";
	/// Default login endpoint path.
	pub const DEFAULT_LOGIN_PATH: &'static str = "/auth/login";
	/// Default refresh endpoint path.
	pub const DEFAULT_REFRESH_PATH: &'static str = "/auth/refresh";
	/// Default session lifetime requested from the backend.
	pub const DEFAULT_SESSION_TTL: Duration = Duration::minutes(30);

	/// Returns a builder for the provided base URL.
	pub fn builder(base_url: Url) -> BackendDescriptorBuilder {
		BackendDescriptorBuilder {
			base_url,
			login_path: Self::DEFAULT_LOGIN_PATH.into(),
			refresh_path: Self::DEFAULT_REFRESH_PATH.into(),
			identity_path: Self::DEFAULT_IDENTITY_PATH.into(),
			session_ttl: Self::DEFAULT_SESSION_TTL,
		}
	}

	/// Joins a request path onto the base URL, preserving any path prefix the base carries.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let mut url = self.base_url.clone();

		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|()| ConfigError::InvalidPath { path: path.to_owned() })?;

			segments.pop_if_empty();

			for segment in path.split('/').filter(|segment| !segment.is_empty()) {
				segments.push(segment);
			}
		}

		Ok(url)
	}

	/// Session lifetime as the integral minute count sent to the backend.
	pub fn session_ttl_minutes(&self) -> u64 {
		self.session_ttl.whole_minutes().unsigned_abs()
	}
}

/// Builder for [`BackendDescriptor`].
#[derive(Clone, Debug)]
pub struct BackendDescriptorBuilder {
	base_url: Url,
	login_path: String,
	refresh_path: String,
	identity_path: String,
	session_ttl: Duration,
}
impl BackendDescriptorBuilder {
	/// Overrides the login endpoint path.
	pub fn login_path(mut self, path: impl Into<String>) -> Self {
		self.login_path = path.into();

		self
	}

	/// Overrides the refresh endpoint path.
	pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
		self.refresh_path = path.into();

		self
	}

	/// Overrides the identity endpoint path.
	pub fn identity_path(mut self, path: impl Into<String>) -> Self {
		self.identity_path = path.into();

		self
	}

	/// Overrides the requested session lifetime.
	pub fn session_ttl(mut self, ttl: Duration) -> Self {
		self.session_ttl = ttl;

		self
	}

	/// Consumes the builder and produces a validated [`BackendDescriptor`].
	pub fn build(self) -> Result<BackendDescriptor, BackendDescriptorError> {
		if self.base_url.cannot_be_a_base() {
			return Err(BackendDescriptorError::OpaqueBaseUrl);
		}

		for (endpoint, path) in [
			("login", &self.login_path),
			("refresh", &self.refresh_path),
			("identity", &self.identity_path),
		] {
			if !path.starts_with('/') {
				return Err(BackendDescriptorError::RelativePath { endpoint });
			}
		}
		if self.session_ttl.whole_minutes() < 1 || self.session_ttl.whole_seconds() % 60 != 0 {
			return Err(BackendDescriptorError::InvalidSessionTtl);
		}

		Ok(BackendDescriptor {
			base_url: self.base_url,
			login_path: self.login_path,
			refresh_path: self.refresh_path,
			identity_path: self.identity_path,
			session_ttl: self.session_ttl,
		})
	}
}

/// Errors produced by [`BackendDescriptorBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum BackendDescriptorError {
	/// Base URL cannot serve as a base for joined request paths.
	#[error("Base URL cannot be a base for request paths.")]
	OpaqueBaseUrl,
	/// An endpoint path does not start with `/`.
	#[error("The {endpoint} path must be absolute (start with `/`).")]
	RelativePath {
		/// Endpoint label (login, refresh, identity).
		endpoint: &'static str,
	},
	/// Session lifetime is not a positive whole number of minutes.
	#[error("Session TTL must be a positive whole number of minutes.")]
	InvalidSessionTtl,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse backend URL fixture.")
	}

	#[test]
	fn builder_applies_defaults() {
		let descriptor = BackendDescriptor::builder(url("https://dummyjson.com"))
			.build()
			.expect("Default descriptor should build successfully.");

		assert_eq!(descriptor.login_path, "/auth/login");
		assert_eq!(descriptor.refresh_path, "/auth/refresh");
		assert_eq!(descriptor.identity_path, "/auth/me");
		assert_eq!(descriptor.session_ttl_minutes(), 30);
	}

	#[test]
	fn builder_rejects_invalid_inputs() {
		let err = BackendDescriptor::builder(url("data:text/plain,hello"))
			.build()
			.expect_err("Opaque base URLs should be rejected.");

		assert_eq!(err, BackendDescriptorError::OpaqueBaseUrl);

		let err = BackendDescriptor::builder(url("https://dummyjson.com"))
			.refresh_path("auth/refresh")
			.build()
			.expect_err("Relative endpoint paths should be rejected.");

		assert_eq!(err, BackendDescriptorError::RelativePath { endpoint: "refresh" });

		let err = BackendDescriptor::builder(url("https://dummyjson.com"))
			.session_ttl(Duration::seconds(90))
			.build()
			.expect_err("Sub-minute session lifetimes should be rejected.");

		assert_eq!(err, BackendDescriptorError::InvalidSessionTtl);
	}

	#[test]
	fn endpoint_preserves_base_path_prefix() {
		let descriptor = BackendDescriptor::builder(url("https://api.example.com/v2/"))
			.build()
			.expect("Prefixed descriptor should build successfully.");
		let joined = descriptor
			.endpoint("/products/search")
			.expect("Endpoint join should succeed for a normal path.");

		assert_eq!(joined.as_str(), "https://api.example.com/v2/products/search");
	}
}
