//! AWS page: tabbed CloudWatch charts, refreshed every 60 seconds while the
//! page is mounted.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CloudMetrics};
use crate::components::charts::{MetricChart, StatKind};
use crate::poll::poll_while_mounted;

/// Refresh period for instance metrics.
const REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// Hypervisor metrics come with all three statistics; the in-guest agent only
/// publishes averages.
const EC2_STATS: &[StatKind] = &[StatKind::Average, StatKind::Maximum, StatKind::Minimum];
const AGENT_STATS: &[StatKind] = &[StatKind::Average];

/// The two metric namespaces shown as tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AwsTab {
	Ec2,
	CwAgent,
}

impl AwsTab {
	fn label(self) -> &'static str {
		match self {
			AwsTab::Ec2 => "EC2 Metrics",
			AwsTab::CwAgent => "CWAgent Metrics",
		}
	}
}

/// Cloud instance monitoring page.
#[component]
pub fn Aws() -> impl IntoView {
	let tab = RwSignal::new(AwsTab::Ec2);
	let metrics = RwSignal::new(CloudMetrics::default());
	let error = RwSignal::new(None::<String>);

	poll_while_mounted(REFRESH_PERIOD, move || {
		spawn_local(async move {
			match api::cloud_metrics().await {
				Ok(data) => {
					metrics.set(data);
					error.set(None);
				}
				Err(err) => error.set(Some(err.to_string())),
			}
		});
	});

	let tab_button = move |this: AwsTab| {
		view! {
			<button
				class=move || if tab.get() == this { "tab tab-active" } else { "tab" }
				on:click=move |_| tab.set(this)
			>
				{this.label()}
			</button>
		}
	};

	view! {
		<div class="aws-page">
			{move || {
				error
					.get()
					.map(|message| view! { <p class="error-text">"Error: " {message}</p> })
			}}
			<div class="tab-row">
				{tab_button(AwsTab::Ec2)}
				{tab_button(AwsTab::CwAgent)}
			</div>

			<Show when=move || tab.get() == AwsTab::Ec2>
				<div class="chart-grid">
					<MetricChart
						title="CPU Utilization"
						points=Signal::derive(move || metrics.with(|m| m.ec2.cpu_utilization.clone()))
						stats=EC2_STATS
					/>
					<MetricChart
						title="Network In"
						points=Signal::derive(move || metrics.with(|m| m.ec2.network_in.clone()))
						stats=EC2_STATS
					/>
					<MetricChart
						title="Network Out"
						points=Signal::derive(move || metrics.with(|m| m.ec2.network_out.clone()))
						stats=EC2_STATS
					/>
				</div>
			</Show>
			<Show when=move || tab.get() == AwsTab::CwAgent>
				<div class="chart-grid">
					<MetricChart
						title="Memory Usage"
						points=Signal::derive(move || {
							metrics.with(|m| m.cwagent.mem_used_percent.clone())
						})
						stats=AGENT_STATS
					/>
					<MetricChart
						title="CPU Active Usage"
						points=Signal::derive(move || {
							metrics.with(|m| m.cwagent.cpu_usage_active.clone())
						})
						stats=AGENT_STATS
					/>
				</div>
			</Show>
		</div>
	}
}
