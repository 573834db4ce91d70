//! Polling Query
//!
//! Fetches the asset list on mount and then once per interval, folding each
//! outcome into a `QueryState` signal.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use coinwatch::QueryState;
use gloo_timers::callback::Interval;

use crate::api;

/// Refetch interval
pub const POLL_INTERVAL_MS: u32 = 60_000;

/// Start polling and return the query signal.
///
/// Polling stops when the owning scope is cleaned up; a fetch that resolves
/// after that is dropped. A tick is skipped while the previous fetch is
/// still running.
pub fn use_asset_query() -> RwSignal<QueryState> {
    let query = create_rw_signal(QueryState::new());
    let alive = Rc::new(Cell::new(true));
    let in_flight = Rc::new(Cell::new(false));
    let endpoint = api::get_api_url();

    let poll = {
        let alive = alive.clone();
        move || {
            if in_flight.get() {
                return;
            }
            in_flight.set(true);
            query.update(QueryState::begin_fetch);

            let alive = alive.clone();
            let in_flight = in_flight.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let result = api::fetch_assets(&endpoint).await;
                in_flight.set(false);
                if !alive.get() {
                    return;
                }

                let now = chrono::Utc::now();
                match result {
                    Ok(assets) => query.update(|q| q.succeed(assets, now)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch assets: {}", e).into());
                        query.update(|q| q.fail(e, now));
                    }
                }
            });
        }
    };

    poll();
    let interval = Interval::new(POLL_INTERVAL_MS, poll);

    on_cleanup(move || {
        alive.set(false);
        drop(interval);
    });

    query
}
