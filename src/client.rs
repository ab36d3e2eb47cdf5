//! The session-aware API client.

mod login;
mod metrics;
mod refresh;
mod send;

pub use metrics::SessionMetrics;
pub use send::ApiResponse;

// std
use std::sync::atomic::AtomicU64;
// self
use crate::{
	_prelude::*, backend::BackendDescriptor, client::refresh::RefreshOutcome,
	http::HttpTransport, store::CredentialStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Session client specialized for the crate's default reqwest transport.
pub type ReqwestSessionClient = SessionClient<ReqwestTransport>;

/// Issues backend calls with bearer attachment and one transparent session refresh on expiry.
///
/// The client owns no ambient state: the credential store and transport are injected at
/// construction, and every caller goes through [`send`](Self::send) so no call site handles
/// refresh logic itself. Clones share the store, the transport, and the refresh gate, so any
/// number of concurrent callers still produce at most one credential rotation at a time.
#[derive(Clone)]
pub struct SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<C>,
	/// Credential store persisting the current session.
	pub store: Arc<dyn CredentialStore>,
	/// Descriptor of the consumed backend.
	pub backend: BackendDescriptor,
	/// Shared counters for refresh outcomes and singleflight joins.
	pub session_metrics: Arc<SessionMetrics>,
	refresh_serial: Arc<AtomicU64>,
	refresh_gate: Arc<AsyncMutex<Option<RefreshOutcome>>>,
}
impl<C> SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		store: Arc<dyn CredentialStore>,
		backend: BackendDescriptor,
		transport: impl Into<Arc<C>>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			backend,
			session_metrics: Default::default(),
			refresh_serial: Default::default(),
			refresh_gate: Default::default(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl SessionClient<ReqwestTransport> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(store: Arc<dyn CredentialStore>, backend: BackendDescriptor) -> Self {
		Self::with_transport(store, backend, ReqwestTransport::default())
	}
}
impl<C> Debug for SessionClient<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionClient").field("backend", &self.backend).finish()
	}
}
