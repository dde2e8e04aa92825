//! Backend API: wire types and fetch wrappers.

mod client;
mod types;

pub use client::{
	ApiError, cloud_metrics, container_metrics, request_recommendations, upload_compose,
	vulnerability_report,
};
pub use types::{
	CloudMetrics, ComposeGraph, ContainerMetrics, CwAgentNamespace, DependencyEdge, Ec2Namespace,
	ImageReport, MetricPoint, PortSpec, RelationKind, ResourceUsage, Severity, ServiceNode,
	Vulnerability, VulnerabilityReport,
};
