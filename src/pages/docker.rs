//! Docker page: per-container metrics and image vulnerability reports,
//! refreshed every 30 seconds while the page is mounted.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContainerMetrics, VulnerabilityReport};
use crate::components::containers::ContainerCard;
use crate::components::vulnerabilities::VulnerabilityCard;
use crate::poll::poll_while_mounted;

/// Refresh period for container metrics and scan results.
const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Container monitoring page.
#[component]
pub fn Docker() -> impl IntoView {
	let metrics = RwSignal::new(Vec::<ContainerMetrics>::new());
	let vulnerabilities = RwSignal::new(VulnerabilityReport::default());
	let error = RwSignal::new(None::<String>);
	let loading = RwSignal::new(true);

	poll_while_mounted(REFRESH_PERIOD, move || {
		spawn_local(async move {
			// Either fetch failing surfaces the message but keeps the last
			// good data of the other on screen.
			match api::container_metrics().await {
				Ok(list) => {
					metrics.set(list);
					error.set(None);
				}
				Err(err) => error.set(Some(err.to_string())),
			}
			match api::vulnerability_report().await {
				Ok(report) => vulnerabilities.set(report),
				Err(err) => error.set(Some(err.to_string())),
			}
			loading.set(false);
		});
	});

	view! {
		<div class="docker-page">
			{move || {
				error
					.get()
					.map(|message| view! { <p class="error-text">"Error: " {message}</p> })
			}}
			<Show when=move || loading.get()>
				<p class="loading-text">"Loading container metrics..."</p>
			</Show>

			<div class="card-grid">
				<For
					each=move || metrics.get()
					key=|container| container.container_name.clone()
					children=|container| view! { <ContainerCard container=container /> }
				/>
			</div>
			<div class="card-grid">
				<For
					each=move || vulnerabilities.get().results
					key=|report| report.image.clone()
					children=|report| view! { <VulnerabilityCard report=report /> }
				/>
			</div>
		</div>
	}
}
