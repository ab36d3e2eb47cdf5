//! Request dispatch and the authorization-failure recovery path.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	client::SessionClient,
	http::{HttpTransport, RawRequest, RawResponse},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::ApiRequest,
};

const STATUS_UNAUTHORIZED: u16 = 401;

impl<C> SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Sends one request, attaching the current access credential and refreshing the session at
	/// most once if the backend reports an authorization failure.
	///
	/// The caller's request value is never mutated; the bearer header is attached to an
	/// internal copy. Statuses other than 401 are passed through unmodified, either as a
	/// successful [`ApiResponse`] or as [`Error::Backend`].
	pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
		const KIND: FlowKind = FlowKind::Resource;

		let span = FlowSpan::new(KIND, "send");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.send_inner(request)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	/// Sends one request and decodes the response body as JSON.
	pub async fn send_json<T>(&self, request: &ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.send(request).await?.json()
	}

	async fn send_inner(&self, request: &ApiRequest) -> Result<ApiResponse> {
		request.ensure_no_reserved_header()?;

		let observed_serial = self.refresh_serial();
		let credentials = self.store.load().await?;
		let first = self.dispatch(request, credentials.as_ref()).await?;

		if first.status != STATUS_UNAUTHORIZED {
			return Self::complete(first);
		}

		let rotated = self.recover_session(observed_serial).await?;
		let replay = self.dispatch(request, Some(&rotated)).await?;

		if replay.status == STATUS_UNAUTHORIZED {
			return Err(Error::Unauthorized);
		}

		Self::complete(replay)
	}

	pub(crate) async fn dispatch(
		&self,
		request: &ApiRequest,
		credentials: Option<&Credentials>,
	) -> Result<RawResponse> {
		let mut url = self.backend.endpoint(request.path())?;

		if !request.query_pairs().is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (name, value) in request.query_pairs() {
				pairs.append_pair(name, value);
			}
		}

		let mut headers = request.headers().to_vec();

		if request.body().is_some() {
			headers.push(("content-type".into(), "application/json".into()));
		}
		if let Some(credentials) = credentials {
			headers.push((
				"authorization".into(),
				format!("Bearer {}", credentials.access_token.expose()),
			));
		}

		let raw = self
			.transport
			.execute(RawRequest {
				method: request.method(),
				url,
				headers,
				body: request.body().map(<[u8]>::to_vec),
			})
			.await?;

		Ok(raw)
	}

	pub(crate) fn complete(raw: RawResponse) -> Result<ApiResponse> {
		if (200..300).contains(&raw.status) {
			return Ok(ApiResponse { status: raw.status, headers: raw.headers, body: raw.body });
		}

		let retry_after = raw.retry_after();

		Err(Error::Backend { status: raw.status, message: backend_message(&raw), retry_after })
	}
}

fn backend_message(raw: &RawResponse) -> String {
	#[derive(Deserialize)]
	struct Payload {
		message: String,
	}

	if let Ok(payload) = serde_json::from_slice::<Payload>(&raw.body) {
		return payload.message;
	}

	let text = String::from_utf8_lossy(&raw.body);
	let text = text.trim();

	if text.is_empty() { "(empty body)".into() } else { text.into() }
}

/// Successful response surfaced to callers.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code (always in the 2xx range).
	pub status: u16,
	/// Response headers as lowercase name/value pairs.
	pub headers: Vec<(String, String)>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Decodes the body as JSON into the requested type.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { source, status: Some(self.status) })
	}
}
