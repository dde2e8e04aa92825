//! Vulnerability report cards for the Docker page.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::api::{ImageReport, Severity, Vulnerability};

/// Chip styling class for a severity.
pub fn severity_class(severity: Severity) -> &'static str {
	match severity {
		Severity::Critical | Severity::High => "chip chip-error",
		Severity::Medium => "chip chip-warn",
		Severity::Low => "chip chip-info",
		Severity::Unknown => "chip",
	}
}

/// Findings per severity, ordered most severe first.
pub fn severity_counts(vulnerabilities: &[Vulnerability]) -> BTreeMap<Severity, usize> {
	let mut counts = BTreeMap::new();
	for vuln in vulnerabilities {
		*counts.entry(vuln.severity).or_insert(0) += 1;
	}
	counts
}

/// Scan results for one image: severity summary chips with an expandable
/// findings table.
#[component]
pub fn VulnerabilityCard(
	/// Scan outcome for the image.
	report: ImageReport,
) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let counts = severity_counts(&report.vulnerabilities);
	let rows = report.vulnerabilities.clone();

	view! {
		<article class="card vulnerability-card">
			<header class="card-header">
				<div>
					<h3>"Vulnerabilities - " {report.image.clone()}</h3>
					{report.comments.clone().map(|c| view! { <p class="subheader">{c}</p> })}
					{report
						.error
						.clone()
						.map(|e| view! { <p class="error-text">{format!("Scan failed: {e}")}</p> })}
				</div>
				<button
					class="expand-toggle"
					on:click=move |_| expanded.update(|e| *e = !*e)
				>
					{move || if expanded.get() { "Less" } else { "More" }}
				</button>
			</header>
			<div class="chip-row">
				{counts
					.iter()
					.map(|(severity, count)| {
						view! {
							<span class=severity_class(*severity)>
								{format!("{severity}: {count}")}
							</span>
						}
					})
					.collect_view()}
			</div>
			<Show when=move || expanded.get()>
				<table class="vulnerability-table">
					<thead>
						<tr>
							<th>"CVE"</th>
							<th>"Severity"</th>
							<th>"Package"</th>
							<th>"Installed"</th>
							<th>"Fixed"</th>
							<th>"Solution"</th>
						</tr>
					</thead>
					<tbody>
						{rows
							.iter()
							.map(|vuln| {
								view! {
									<tr>
										<td>
											<a href=vuln.nvd_link.clone() target="_blank" rel="noreferrer">
												{vuln.cve.clone()}
											</a>
										</td>
										<td>
											<span class=severity_class(vuln.severity)>
												{vuln.severity.to_string()}
											</span>
										</td>
										<td>{vuln.package.clone()}</td>
										<td>{vuln.installed.clone()}</td>
										<td>{vuln.fixed.clone()}</td>
										<td>{vuln.solution.clone()}</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			</Show>
		</article>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vuln(severity: Severity) -> Vulnerability {
		Vulnerability {
			cve: "CVE-0000-0000".into(),
			severity,
			package: "pkg".into(),
			installed: "1.0".into(),
			fixed: "1.1".into(),
			solution: "upgrade".into(),
			nvd_link: String::new(),
		}
	}

	#[test]
	fn counts_group_by_severity_most_severe_first() {
		let counts = severity_counts(&[
			vuln(Severity::High),
			vuln(Severity::Critical),
			vuln(Severity::High),
			vuln(Severity::Low),
		]);

		let ordered: Vec<(Severity, usize)> = counts.into_iter().collect();
		assert_eq!(
			ordered,
			vec![
				(Severity::Critical, 1),
				(Severity::High, 2),
				(Severity::Low, 1),
			]
		);
	}

	#[test]
	fn empty_report_counts_nothing() {
		assert!(severity_counts(&[]).is_empty());
	}
}
