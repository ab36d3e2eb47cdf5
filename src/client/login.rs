//! Session establishment and teardown.

// self
use crate::{
	_prelude::*,
	auth::{SessionGrant, UserIdentity},
	client::SessionClient,
	http::HttpTransport,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::ApiRequest,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
	username: &'a str,
	password: &'a str,
	expires_in_mins: u64,
}

impl<C> SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Authenticates against the backend and stores the issued credential pair.
	///
	/// Login dispatches outside the refresh protocol: a rejected password surfaces directly as
	/// [`Error::Backend`] instead of triggering a refresh attempt.
	pub async fn login(&self, username: &str, password: &str) -> Result<UserIdentity> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.login_inner(username, password)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	async fn login_inner(&self, username: &str, password: &str) -> Result<UserIdentity> {
		let request = ApiRequest::post(self.backend.login_path.clone()).json(&LoginRequest {
			username,
			password,
			expires_in_mins: self.backend.session_ttl_minutes(),
		})?;
		let raw = self.dispatch(&request, None).await?;
		let response = Self::complete(raw)?;
		let grant: SessionGrant = response.json()?;
		let credentials = grant.into_credentials(OffsetDateTime::now_utc());
		let subject = credentials.subject.clone();

		self.store.save(credentials).await?;

		Ok(subject)
	}

	/// Ends the stored session.
	///
	/// The backend keeps no server-side session to invalidate; clearing the store is the whole
	/// operation.
	pub async fn logout(&self) -> Result<()> {
		self.store.clear().await?;

		Ok(())
	}

	/// Fetches the identity bound to the current session.
	pub async fn current_user(&self) -> Result<UserIdentity> {
		self.send_json(&ApiRequest::get(self.backend.identity_path.clone())).await
	}
}
