//! Fetch State Machine
//!
//! `FetchState` is what a view renders. `FetchCycle` owns it for one mounted
//! view and decides which completions are allowed to change it.

use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::shape::ResponseShape;
use crate::transport::Transport;

/// Render state of one view instance
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: FetchResult<T>) -> Self {
        match result {
            Ok(payload) => FetchState::Loaded(payload),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request within a `FetchCycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Request sequencing for one view instance.
///
/// Only the most recently issued ticket may settle the state; anything else
/// is a stale response and is dropped. After `dispose` nothing changes.
#[derive(Debug, Clone)]
pub struct FetchCycle<T> {
    state: FetchState<T>,
    issued: u64,
    pending: Option<Ticket>,
    disposed: bool,
}

impl<T> Default for FetchCycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchCycle<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            issued: 0,
            pending: None,
            disposed: false,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Ticket of the request currently in flight, if any
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Start a request: state becomes `Loading` and any older ticket goes stale.
    /// Returns `None` once the view is disposed.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.disposed {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        self.state = FetchState::Loading;
        debug!(ticket = ticket.0, "fetch cycle started");
        Some(ticket)
    }

    /// Apply the outcome of `ticket`. Returns the new state when accepted.
    pub fn complete(&mut self, ticket: Ticket, outcome: FetchResult<T>) -> Option<&FetchState<T>> {
        if self.disposed {
            debug!(ticket = ticket.0, "dropping completion for disposed view");
            return None;
        }
        if self.pending != Some(ticket) {
            debug!(ticket = ticket.0, latest = self.issued, "dropping stale completion");
            return None;
        }
        self.pending = None;
        self.state = FetchState::from_result(outcome);
        Some(&self.state)
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }
}

/// One GET against `url`, decoded with shape `S`.
pub async fn fetch_resource<S, C>(transport: &C, url: &str) -> FetchResult<S::Output>
where
    S: ResponseShape,
    C: Transport + ?Sized,
{
    debug!(url, "requesting catalog resource");
    let result = round_trip::<S, C>(transport, url).await;
    if let Err(err) = &result {
        warn!(url, error = %err, "catalog request failed");
    }
    result
}

async fn round_trip<S, C>(transport: &C, url: &str) -> FetchResult<S::Output>
where
    S: ResponseShape,
    C: Transport + ?Sized,
{
    let response = transport.get(url).await?;
    if !response.is_success() {
        return Err(FetchError::HttpStatus(response.status));
    }
    S::decode(&response.body)
}

/// `fetch(url) -> FetchState`: a whole round trip mapped to its final state
pub async fn fetch<S, C>(transport: &C, url: &str) -> FetchState<S::Output>
where
    S: ResponseShape,
    C: Transport + ?Sized,
{
    FetchState::from_result(fetch_resource::<S, C>(transport, url).await)
}
