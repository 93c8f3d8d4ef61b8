//! Web access gate for weather fetches.
//!
//! Zellij answers the permission prompt asynchronously, so a city can be
//! confirmed before the plugin is allowed to make requests:
//!
//! ```text
//! Pending ──granted──► Granted   (queued fetch for the awaited token is sent)
//!    │
//!    └────denied────► Denied    (queued and later fetches fail at once)
//! ```
//!
//! Only the fetch the viewed city is still waiting on survives the queue;
//! anything superseded by a refresh or a deselect is dropped.

use crate::app::Event;
use crate::domain::RequestId;

/// Failure reported for fetches after web access was denied.
pub const ACCESS_DENIED: &str = "web access was not granted";

/// Outcome of the web access prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Permission {
    /// No answer yet.
    #[default]
    Pending,
    Granted,
    Denied,
}

/// What the shim should do with a fetch that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated {
    /// Send the HTTP request.
    Send { city: String, request: RequestId },
    /// Feed this completion back into `handle_event`.
    Fail(Event),
}

/// Holds fetches until the permission prompt is answered.
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    permission: Permission,
    queued: Vec<(String, RequestId)>,
}

impl PermissionGate {
    #[must_use]
    pub const fn permission(&self) -> Permission {
        self.permission
    }

    /// Number of fetches waiting for an answer.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Passes a fetch through the gate. Returns `None` while the prompt is
    /// unanswered; the fetch is queued.
    pub fn submit(&mut self, city: String, request: RequestId) -> Option<Gated> {
        match self.permission {
            Permission::Granted => Some(Gated::Send { city, request }),
            Permission::Denied => Some(denied(request)),
            Permission::Pending => {
                tracing::debug!(city = %city, request_id = %request, "queueing fetch until permission resolves");
                self.queued.push((city, request));
                None
            }
        }
    }

    /// Records the prompt answer and releases the queue.
    ///
    /// `awaited` is the token the state is still waiting on
    /// ([`AppState::awaited_request`](crate::app::AppState::awaited_request));
    /// queued fetches under any other token are dropped. A repeated answer
    /// only updates the permission.
    pub fn resolve(&mut self, granted: bool, awaited: Option<RequestId>) -> Vec<Gated> {
        self.permission = if granted {
            Permission::Granted
        } else {
            tracing::warn!("web access denied - weather lookups will fail");
            Permission::Denied
        };

        std::mem::take(&mut self.queued)
            .into_iter()
            .filter(|(city, request)| {
                let current = awaited == Some(*request);
                if !current {
                    tracing::debug!(city = %city, request_id = %request, "dropping superseded queued fetch");
                }
                current
            })
            .filter_map(|(city, request)| self.submit(city, request))
            .collect()
    }
}

fn denied(request: RequestId) -> Gated {
    Gated::Fail(Event::WeatherFetched {
        request,
        outcome: Err(ACCESS_DENIED.to_string()),
    })
}
