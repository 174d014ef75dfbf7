//! Who is in the room. All writes to the participants collection go through
//! the handlers and the sweep in this module; nothing else touches it.

mod ping;
mod register;
pub mod sweep;

use std::time::Duration;

use axum::{Router, routing::post};
use tracing::warn;

use crate::AppState;
use crate::clock;
use crate::model::{BROADCAST, KIND_STATUS};
use crate::store::Store;

/// How long a participant may go without pinging before eviction.
pub const LIVENESS_WINDOW: Duration = Duration::from_millis(10_000);
/// How often the sweep looks for stale participants.
pub const SWEEP_PERIOD: Duration = Duration::from_secs(15);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", post(register::register).get(register::list))
        .route("/status", post(ping::ping))
}

/// Best-effort room notice ("entra na sala...", "sai da sala..."): one
/// retry, then the notice is dropped and logged. Presence itself has
/// already been updated by the time this runs.
pub(crate) async fn announce(store: &Store, name: &str, text: &str) {
    for attempt in 0..2u8 {
        match store
            .insert_message(name, BROADCAST, text, KIND_STATUS, &clock::wall_clock())
            .await
        {
            Ok(_) => return,
            Err(err) if attempt == 0 => {
                warn!(%name, error = %err, "room notice failed, retrying once");
            }
            Err(err) => {
                warn!(%name, error = %err, "room notice dropped");
            }
        }
    }
}
