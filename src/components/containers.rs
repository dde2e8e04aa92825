//! Container metric cards for the Docker page.

use leptos::prelude::*;

use crate::api::ContainerMetrics;

/// Coarse container lifecycle category behind the status chip. Anything the
/// daemon reports beyond running/exited (paused, restarting, ...) lands in
/// [`ContainerState::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerState {
	/// Container is up.
	Running,
	/// Container stopped.
	Exited,
	/// Any other daemon state, or state unknown.
	Other,
}

impl ContainerState {
	/// Categorize the daemon's raw state string.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw.map(str::to_ascii_lowercase).as_deref() {
			Some("running") => ContainerState::Running,
			Some("exited") => ContainerState::Exited,
			_ => ContainerState::Other,
		}
	}

	/// Chip styling class.
	pub fn chip_class(self) -> &'static str {
		match self {
			ContainerState::Running => "chip chip-ok",
			ContainerState::Exited => "chip chip-error",
			ContainerState::Other => "chip chip-warn",
		}
	}
}

/// Uptime figure as the card shows it, in whole minutes.
pub fn format_uptime(seconds: f64) -> String {
	format!("{} minutes", (seconds / 60.0).floor() as u64)
}

fn stat(value: &Option<String>) -> String {
	value.clone().unwrap_or_else(|| "n/a".to_string())
}

/// One container's metrics, with an expandable detail section.
#[component]
pub fn ContainerCard(
	/// Metrics snapshot for the container.
	container: ContainerMetrics,
) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let state = ContainerState::parse(container.state.as_deref());
	let state_label = container.state.clone().unwrap_or_else(|| "unknown".to_string());
	let usage = container.resource_usage.clone();

	let uptime = container
		.uptime
		.map(format_uptime)
		.unwrap_or_else(|| "n/a".to_string());
	let restarts = container
		.restart_count
		.map(|n| n.to_string())
		.unwrap_or_else(|| "n/a".to_string());

	view! {
		<article class="card container-card">
			<header class="card-header">
				<div>
					<h3>{container.container_name.clone()}</h3>
					<span class=state.chip_class()>{state_label}</span>
					<p class="subheader">{container.image_name.clone()}</p>
				</div>
				<button
					class="expand-toggle"
					on:click=move |_| expanded.update(|e| *e = !*e)
				>
					{move || if expanded.get() { "Less" } else { "More" }}
				</button>
			</header>
			<div class="stat-row">
				<div class="stat">
					<span class="stat-label">"CPU"</span>
					<span class="stat-value">{stat(&usage.cpu_percent)}</span>
				</div>
				<div class="stat">
					<span class="stat-label">"Memory"</span>
					<span class="stat-value">{stat(&usage.memory_usage)}</span>
				</div>
				<div class="stat">
					<span class="stat-label">"Memory %"</span>
					<span class="stat-value">{stat(&usage.memory_percent)}</span>
				</div>
			</div>
			<Show when=move || expanded.get()>
				<div class="detail-grid">
					<p>"Network I/O: " {stat(&usage.network_io)}</p>
					<p>"Block I/O: " {stat(&usage.block_io)}</p>
					<p>"PIDs: " {stat(&usage.pids)}</p>
					<p>"Uptime: " {uptime.clone()}</p>
					<p>"Restarts: " {restarts.clone()}</p>
				</div>
			</Show>
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn state_categories_cover_daemon_strings() {
		assert_eq!(ContainerState::parse(Some("running")), ContainerState::Running);
		assert_eq!(ContainerState::parse(Some("Running")), ContainerState::Running);
		assert_eq!(ContainerState::parse(Some("exited")), ContainerState::Exited);
		assert_eq!(ContainerState::parse(Some("restarting")), ContainerState::Other);
		assert_eq!(ContainerState::parse(None), ContainerState::Other);
	}

	#[test]
	fn uptime_renders_whole_minutes() {
		assert_eq!(format_uptime(4210.5), "70 minutes");
		assert_eq!(format_uptime(59.0), "0 minutes");
	}
}
