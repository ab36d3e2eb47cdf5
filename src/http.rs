//! Transport primitives for backend calls.
//!
//! [`HttpTransport`] is the crate's only dependency on an HTTP stack: the session client hands a
//! fully resolved [`RawRequest`] to the transport and maps the [`RawResponse`] itself, so
//! swapping reqwest for another stack (or a scripted fake in tests) never touches the refresh
//! protocol.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError, request::Method};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing backend requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared across client
/// clones without additional wrappers, and the returned futures must be `Send` so callers can
/// hop executors freely.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request and resolves with the raw response or a transport failure.
	fn execute(&self, request: RawRequest) -> TransportFuture<'_, RawResponse>;
}

/// Fully resolved outbound request handed to the transport.
#[derive(Clone, Debug)]
pub struct RawRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL, query included.
	pub url: Url,
	/// Headers as lowercase name/value pairs; the bearer header is already attached here.
	pub headers: Vec<(String, String)>,
	/// Serialized request body, if any.
	pub body: Option<Vec<u8>>,
}

/// Raw response surfaced by the transport before the client maps it.
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers as lowercase name/value pairs.
	pub headers: Vec<(String, String)>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns the first header with the provided name (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Parses the `Retry-After` hint, accepting both delta-seconds and RFC 2822 dates.
	pub fn retry_after(&self) -> Option<Duration> {
		let raw = self.header("retry-after")?.trim();

		if let Ok(secs) = raw.parse::<u64>() {
			return Some(Duration::seconds(secs as i64));
		}
		if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
			let delta = moment - OffsetDateTime::now_utc();

			if delta.is_positive() {
				return Some(delta);
			}
		}

		None
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default client follows redirects and negotiates HTTP/2; pass a preconfigured client via
/// [`with_client`](Self::with_client) to change timeouts, proxies, or TLS settings.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: RawRequest) -> TransportFuture<'_, RawResponse> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut headers = HeaderMap::new();

			for (name, value) in &request.headers {
				let name =
					HeaderName::from_bytes(name.as_bytes()).map_err(TransportError::network)?;
				let value = HeaderValue::from_str(value).map_err(TransportError::network)?;

				headers.append(name, value);
			}

			let mut builder =
				client.request(request.method.into(), request.url).headers(headers);

			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.map(|(name, value)| {
					(name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned())
				})
				.collect();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, headers, body })
		})
	}
}

#[cfg(feature = "reqwest")]
impl From<Method> for reqwest::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}
