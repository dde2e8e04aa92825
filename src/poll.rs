//! Periodic refresh for the metric pages.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::on_cleanup;
use log::warn;

/// Runs `tick` immediately, then again every `period` until the calling
/// reactive scope is disposed, at which point the interval is cleared so no
/// orphaned timer keeps firing after the view is gone.
///
/// Each tick typically spawns a fetch; overlapping in-flight requests are
/// neither deduplicated nor aborted, so across ticks the last response to
/// resolve wins.
pub fn poll_while_mounted(period: Duration, tick: impl Fn() + 'static) {
	tick();
	match set_interval_with_handle(tick, period) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("poll: could not install interval timer: {err:?}"),
	}
}
