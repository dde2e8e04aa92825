//! Wire types for the monitoring backend's JSON responses.
//!
//! Field names follow the backend exactly; serde does the shape validation at
//! this boundary so downstream code can assume well-formed values.

use std::fmt;

use serde::Deserialize;

/// One service extracted from the uploaded Compose file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ServiceNode {
	/// Unique service name; doubles as the primary render-node id.
	pub id: String,
	/// Display label (the backend sends the service name again).
	pub label: String,
	/// Named volumes mounted by this service.
	#[serde(default)]
	pub volumes: Vec<String>,
	/// Exposed ports; the Compose format allows both `8080` and `"8080:80"`.
	#[serde(default)]
	pub ports: Vec<PortSpec>,
	/// Networks this service joins.
	#[serde(default)]
	pub networks: Vec<String>,
}

/// A port value as it appears in a Compose file: a bare number or a mapping
/// string such as `"8080:80"`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PortSpec {
	/// Bare numeric port.
	Number(i64),
	/// Mapping or otherwise annotated port string.
	Text(String),
}

impl fmt::Display for PortSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PortSpec::Number(n) => write!(f, "{n}"),
			PortSpec::Text(s) => f.write_str(s),
		}
	}
}

/// Relation kinds the Compose parser asserts between two services.
///
/// Closed set: anything the backend invents later folds into [`RelationKind::Other`],
/// which renders gray.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
	/// `depends_on` relationship.
	Dependency,
	/// Shared network membership.
	Network,
	/// Shared volume mount.
	Volume,
	/// Port exposure.
	Port,
	/// Unrecognized relation string.
	#[default]
	#[serde(other)]
	Other,
}

/// A relation asserted by the Compose parser between two graph entities.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DependencyEdge {
	/// Source service id.
	pub source: String,
	/// Target id (a service for dependency edges).
	pub target: String,
	/// Relation category.
	#[serde(rename = "type", default)]
	pub kind: RelationKind,
}

/// Response of `POST /upload-docker-compose/`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ComposeGraph {
	/// Services found in the Compose file.
	#[serde(default)]
	pub nodes: Vec<ServiceNode>,
	/// Relations between them.
	#[serde(default)]
	pub edges: Vec<DependencyEdge>,
}

/// `docker stats` figures for one container. The daemon reports these as
/// preformatted strings ("0.50%", "1.5MiB / 7.7GiB"); they pass through as-is.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ResourceUsage {
	/// CPU percentage.
	#[serde(default)]
	pub cpu_percent: Option<String>,
	/// Memory used / limit.
	#[serde(default)]
	pub memory_usage: Option<String>,
	/// Memory percentage.
	#[serde(default)]
	pub memory_percent: Option<String>,
	/// Network receive / transmit totals.
	#[serde(default)]
	pub network_io: Option<String>,
	/// Block device read / write totals.
	#[serde(default)]
	pub block_io: Option<String>,
	/// Process count.
	#[serde(default)]
	pub pids: Option<String>,
}

/// One element of the `GET /metrics/` array.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContainerMetrics {
	/// Container name.
	pub container_name: String,
	/// Image the container runs.
	pub image_name: String,
	/// Raw daemon state string ("running", "exited", ...); null if inspect failed.
	#[serde(default)]
	pub state: Option<String>,
	/// Healthcheck status when the container defines one.
	#[serde(default)]
	pub health: Option<String>,
	/// Live resource usage.
	#[serde(default)]
	pub resource_usage: ResourceUsage,
	/// Seconds since the container started.
	#[serde(default)]
	pub uptime: Option<f64>,
	/// Times the daemon restarted the container.
	#[serde(default)]
	pub restart_count: Option<u32>,
}

/// Vulnerability severity as reported by the scanner. Unknown strings fold
/// into [`Severity::Unknown`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
	/// Critical severity.
	Critical,
	/// High severity.
	High,
	/// Medium severity.
	Medium,
	/// Low severity.
	Low,
	/// Anything the scanner reports that we do not model.
	#[serde(other)]
	Unknown,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Severity::Critical => "CRITICAL",
			Severity::High => "HIGH",
			Severity::Medium => "MEDIUM",
			Severity::Low => "LOW",
			Severity::Unknown => "UNKNOWN",
		})
	}
}

/// A single CVE finding for an image.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Vulnerability {
	/// CVE identifier.
	pub cve: String,
	/// Scanner severity.
	pub severity: Severity,
	/// Affected package.
	pub package: String,
	/// Installed package version.
	pub installed: String,
	/// Version that fixes the finding, or "Not Fixed".
	pub fixed: String,
	/// Suggested remediation.
	pub solution: String,
	/// Link to the NVD detail page. The backend uses a space in the key.
	#[serde(rename = "nvd link", default)]
	pub nvd_link: String,
}

/// Scan outcome for one image.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImageReport {
	/// Image reference ("nginx:alpine").
	pub image: String,
	/// Findings; empty when the image is clean or the scan failed.
	#[serde(default)]
	pub vulnerabilities: Vec<Vulnerability>,
	/// Human-readable scan summary.
	#[serde(default)]
	pub comments: Option<String>,
	/// Scan error, mutually exclusive with findings.
	#[serde(default)]
	pub error: Option<String>,
}

/// Response of `GET /vulnerabilities/`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct VulnerabilityReport {
	/// One entry per scanned image.
	#[serde(default)]
	pub results: Vec<ImageReport>,
}

/// One CloudWatch datapoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MetricPoint {
	/// ISO timestamp of the sample.
	#[serde(rename = "Timestamp", default)]
	pub timestamp: String,
	/// Average over the period.
	#[serde(rename = "Average", default)]
	pub average: Option<f64>,
	/// Maximum over the period.
	#[serde(rename = "Maximum", default)]
	pub maximum: Option<f64>,
	/// Minimum over the period.
	#[serde(rename = "Minimum", default)]
	pub minimum: Option<f64>,
}

/// Metrics under the `AWS/EC2` namespace.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Ec2Namespace {
	/// Instance CPU utilization.
	#[serde(rename = "CPUUtilization", default)]
	pub cpu_utilization: Vec<MetricPoint>,
	/// Bytes received.
	#[serde(rename = "NetworkIn", default)]
	pub network_in: Vec<MetricPoint>,
	/// Bytes sent.
	#[serde(rename = "NetworkOut", default)]
	pub network_out: Vec<MetricPoint>,
}

/// Metrics published by the CloudWatch agent on the instance.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CwAgentNamespace {
	/// Memory used percentage.
	#[serde(default)]
	pub mem_used_percent: Vec<MetricPoint>,
	/// Active CPU usage.
	#[serde(default)]
	pub cpu_usage_active: Vec<MetricPoint>,
}

/// Response of `GET /get-ec2/`, keyed by CloudWatch namespace.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CloudMetrics {
	/// Hypervisor-level instance metrics.
	#[serde(rename = "AWS/EC2", default)]
	pub ec2: Ec2Namespace,
	/// In-guest agent metrics.
	#[serde(rename = "CWAgent", default)]
	pub cwagent: CwAgentNamespace,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compose_graph_accepts_mixed_port_shapes() {
		let graph: ComposeGraph = serde_json::from_str(
			r#"{
				"nodes": [
					{"id": "web", "label": "web", "volumes": ["data"], "ports": [80, "8443:443"], "networks": ["front"]}
				],
				"edges": [
					{"source": "web", "target": "db", "type": "dependency"}
				]
			}"#,
		)
		.unwrap();

		assert_eq!(graph.nodes.len(), 1);
		let ports: Vec<String> = graph.nodes[0].ports.iter().map(|p| p.to_string()).collect();
		assert_eq!(ports, vec!["80", "8443:443"]);
		assert_eq!(graph.edges[0].kind, RelationKind::Dependency);
	}

	#[test]
	fn unknown_relation_kind_folds_into_other() {
		let edge: DependencyEdge =
			serde_json::from_str(r#"{"source": "a", "target": "b", "type": "sidecar"}"#).unwrap();
		assert_eq!(edge.kind, RelationKind::Other);

		// The backend omits `type` on some edge families.
		let edge: DependencyEdge = serde_json::from_str(r#"{"source": "a", "target": "b"}"#).unwrap();
		assert_eq!(edge.kind, RelationKind::Other);
	}

	#[test]
	fn vulnerability_reads_spaced_nvd_key() {
		let vuln: Vulnerability = serde_json::from_str(
			r#"{
				"cve": "CVE-2024-0001",
				"severity": "CRITICAL",
				"package": "openssl",
				"installed": "1.1.1",
				"fixed": "3.0.0",
				"solution": "Upgrade openssl to 3.0.0",
				"nvd link": "https://nvd.nist.gov/vuln/detail/CVE-2024-0001"
			}"#,
		)
		.unwrap();
		assert_eq!(vuln.severity, Severity::Critical);
		assert!(vuln.nvd_link.ends_with("CVE-2024-0001"));

		let odd: Vulnerability = serde_json::from_str(
			r#"{
				"cve": "CVE-2024-0002",
				"severity": "NEGLIGIBLE",
				"package": "zlib",
				"installed": "1.2",
				"fixed": "Not Fixed",
				"solution": "none"
			}"#,
		)
		.unwrap();
		assert_eq!(odd.severity, Severity::Unknown);
	}

	#[test]
	fn container_metrics_tolerate_missing_stats() {
		let metrics: Vec<ContainerMetrics> = serde_json::from_str(
			r#"[{
				"container_name": "web-1",
				"image_name": "nginx:alpine",
				"state": "running",
				"resource_usage": {"cpu_percent": "0.50%", "pids": "4"},
				"uptime": 4210.5,
				"restart_count": 2
			}, {
				"container_name": "db-1",
				"image_name": "postgres:16",
				"state": null,
				"uptime": null,
				"restart_count": null
			}]"#,
		)
		.unwrap();

		assert_eq!(metrics[0].resource_usage.cpu_percent.as_deref(), Some("0.50%"));
		assert_eq!(metrics[0].resource_usage.memory_usage, None);
		assert_eq!(metrics[1].state, None);
		assert_eq!(metrics[1].resource_usage, ResourceUsage::default());
	}

	#[test]
	fn cloud_metrics_default_missing_namespaces() {
		let metrics: CloudMetrics = serde_json::from_str(
			r#"{
				"AWS/EC2": {
					"CPUUtilization": [
						{"Timestamp": "2025-01-01T00:00:00Z", "Average": 12.5, "Maximum": 30.0, "Minimum": 1.0}
					]
				}
			}"#,
		)
		.unwrap();

		assert_eq!(metrics.ec2.cpu_utilization.len(), 1);
		assert_eq!(metrics.ec2.cpu_utilization[0].average, Some(12.5));
		assert!(metrics.ec2.network_in.is_empty());
		assert!(metrics.cwagent.mem_used_percent.is_empty());
	}
}
