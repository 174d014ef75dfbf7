use tracing::{info, warn};

use super::{LIVENESS_WINDOW, SWEEP_PERIOD};
use crate::clock;
use crate::model::LEAVE_TEXT;
use crate::store::Store;

/// Lives as long as the process; one pass per tick. A failed pass is logged
/// and left for the next tick, there is no in-process retry queue.
pub async fn run(store: Store) {
    let mut tick = tokio::time::interval(SWEEP_PERIOD);
    loop {
        tick.tick().await;
        match sweep_once(&store).await {
            Ok(0) => {}
            Ok(evicted) => info!(evicted, "evicted stale participants"),
            Err(err) => warn!(error = %err, "presence sweep failed, retrying next tick"),
        }
    }
}

/// One eviction pass: atomically remove everyone whose last ping fell out
/// of the liveness window, then announce each departure. Notices go out for
/// exactly the rows the delete returned.
pub async fn sweep_once(store: &Store) -> Result<usize, sqlx::Error> {
    let cutoff = clock::now_millis() - LIVENESS_WINDOW.as_millis() as i64;
    let evicted = store.evict_stale_before(cutoff).await?;
    for participant in &evicted {
        super::announce(store, &participant.name, LEAVE_TEXT).await;
    }
    Ok(evicted.len())
}
