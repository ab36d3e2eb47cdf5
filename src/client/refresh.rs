//! Singleflight session refresh: at most one credential rotation in flight.
//!
//! Every dispatch records the refresh *serial* before it goes out. A request that comes back
//! with an authorization failure enters the gate: if the serial is unchanged it leads the
//! refresh itself; if the serial moved, a refresh already resolved while the request was in
//! flight and the recorded outcome is adopted instead of starting a second rotation. The gate
//! mutex doubles as the queue: joiners block on it until the leader resolves.

// std
use std::sync::atomic::Ordering;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, SessionGrant},
	client::SessionClient,
	error::SessionError,
	http::HttpTransport,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	request::ApiRequest,
};

/// Resolution of the most recent refresh, shared with gate joiners.
#[derive(Clone, Copy, Debug)]
pub(crate) enum RefreshOutcome {
	/// New credentials were stored; joiners reload them and replay.
	Rotated,
	/// The refresh failed and the store was cleared; joiners fail immediately.
	Expired,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
	refresh_token: &'a str,
	expires_in_mins: u64,
}

impl<C> SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	pub(crate) fn refresh_serial(&self) -> u64 {
		self.refresh_serial.load(Ordering::Acquire)
	}

	/// Resolves an authorization failure observed at `observed_serial` into fresh credentials,
	/// or a terminal session error.
	pub(crate) async fn recover_session(&self, observed_serial: u64) -> Result<Credentials> {
		let mut gate = self.refresh_gate.lock().await;

		if self.refresh_serial() != observed_serial {
			// A refresh resolved between this request's dispatch and now; adopt its outcome.
			self.session_metrics.record_join();

			return match *gate {
				Some(RefreshOutcome::Rotated) => match self.store.load().await? {
					Some(credentials) => Ok(credentials),
					None => Err(SessionError::Expired.into()),
				},
				_ => Err(SessionError::Expired.into()),
			};
		}

		let result = self.refresh_session().await;

		*gate =
			Some(if result.is_ok() { RefreshOutcome::Rotated } else { RefreshOutcome::Expired });
		self.refresh_serial.fetch_add(1, Ordering::AcqRel);

		result
	}

	/// Performs one refresh call; stores rotated credentials on success, clears the store on
	/// any failure.
	async fn refresh_session(&self) -> Result<Credentials> {
		const KIND: FlowKind = FlowKind::Refresh;

		let span = FlowSpan::new(KIND, "refresh_session");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);
		self.session_metrics.record_attempt();

		let result = span.instrument(self.refresh_session_inner()).await;

		match &result {
			Ok(_) => {
				obs::record_flow_outcome(KIND, FlowOutcome::Success);
				self.session_metrics.record_success();
			},
			Err(_) => {
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
				self.session_metrics.record_failure();
			},
		}

		result
	}

	async fn refresh_session_inner(&self) -> Result<Credentials> {
		let refresh_token = match self.store.load().await? {
			Some(credentials) => credentials.refresh_token,
			None => return self.expire_session().await,
		};
		let request = ApiRequest::post(self.backend.refresh_path.clone()).json(&RefreshRequest {
			refresh_token: refresh_token.expose(),
			expires_in_mins: self.backend.session_ttl_minutes(),
		})?;
		// The refresh call carries no bearer header; the refresh token in the body is the
		// sole proof of identity.
		let raw = match self.dispatch(&request, None).await {
			Ok(raw) => raw,
			Err(_) => return self.expire_session().await,
		};

		if !(200..300).contains(&raw.status) {
			return self.expire_session().await;
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&raw.body);
		let grant: SessionGrant = match serde_path_to_error::deserialize(&mut deserializer) {
			Ok(grant) => grant,
			Err(_) => return self.expire_session().await,
		};
		let credentials = grant.into_credentials(OffsetDateTime::now_utc());

		self.store.save(credentials.clone()).await?;

		Ok(credentials)
	}

	async fn expire_session(&self) -> Result<Credentials> {
		self.store.clear().await?;

		Err(SessionError::Expired.into())
	}
}
