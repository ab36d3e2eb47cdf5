//! Client-level error types shared across the session, store, and transport layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem or API misuse.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Session-lifecycle failure; the caller must re-authenticate.
	#[error(transparent)]
	Session(#[from] SessionError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The access credential was rejected again after the one permitted refresh-and-retry cycle.
	#[error("Access credential was rejected after a completed session refresh.")]
	Unauthorized,
	/// Backend rejected the request with a non-401 status; passed through unmodified.
	#[error("Backend rejected the request with status {status}: {message}.")]
	Backend {
		/// HTTP status code returned by the backend.
		status: u16,
		/// Backend- or client-supplied message summarizing the rejection.
		message: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Backend returned a body that could not be decoded into the expected type.
	#[error("Backend returned a response body that could not be decoded.")]
	Decode {
		/// Structured decoding failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response, when available.
		status: Option<u16>,
	},
}

/// Session-lifecycle failures raised by the refresh protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum SessionError {
	/// The refresh itself failed; stored credentials were cleared and the caller must log in
	/// again. The client only signals this outcome, it performs no navigation of its own.
	#[error("Session has expired; re-authentication is required.")]
	Expired,
}

/// Configuration and API-misuse failures raised locally, before any network I/O.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The caller attached a header that the client owns.
	#[error("The `{name}` header is managed by the client and must not be set by callers.")]
	ReservedHeader {
		/// Header name supplied by the caller.
		name: String,
	},
	/// A request path cannot be joined onto the backend base URL.
	#[error("Request path `{path}` cannot be joined onto the backend base URL.")]
	InvalidPath {
		/// Path supplied by the caller.
		path: String,
	},
	/// A request body failed to serialize to JSON.
	#[error("Request body could not be serialized.")]
	InvalidBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// The upload helper was configured without an upload preset.
	#[error("Upload helper requires a non-empty upload preset.")]
	MissingUploadPreset,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO); surfaced unchanged, never retried by the client.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the backend.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
