//! Expansion of the parsed Compose description into the render graph.

use std::collections::HashSet;

use crate::api::ComposeGraph;

use super::model::{EdgeKind, NodeKind, RenderEdge, RenderGraph, RenderNode, ResourceKind};

/// Builds the full render graph from the backend's service/relation data.
///
/// Pure: the input is untouched and rebuilding from identical input yields a
/// set-equal node/edge collection, so the caller can tear down the previous
/// widget and reconstruct it on every new upload. Shape validation happened
/// at the serde boundary; ids referenced by relation edges are passed through
/// as-is.
pub fn build_render_graph(compose: &ComposeGraph) -> RenderGraph {
	let mut nodes = Vec::with_capacity(compose.nodes.len());
	let mut edges = Vec::new();
	let mut synthetic_seen: HashSet<String> = HashSet::new();

	for service in &compose.nodes {
		nodes.push(RenderNode {
			id: service.id.clone(),
			label: service.label.clone(),
			kind: NodeKind::Service,
		});
	}

	for service in &compose.nodes {
		let volumes = service.volumes.iter().cloned();
		let ports = service.ports.iter().map(|p| p.to_string());
		let networks = service.networks.iter().cloned();

		let references = volumes
			.map(|v| (ResourceKind::Volume, v))
			.chain(ports.map(|p| (ResourceKind::Port, p)))
			.chain(networks.map(|n| (ResourceKind::Network, n)));

		for (kind, value) in references {
			let id = kind.synthetic_id(&value);
			if synthetic_seen.insert(id.clone()) {
				nodes.push(RenderNode {
					id: id.clone(),
					label: kind.label(&value),
					kind: NodeKind::Resource(kind),
				});
			}
			// One attachment edge per reference, shared node or not: fan-in
			// from several services shows as several edges into one node.
			edges.push(RenderEdge {
				id: None,
				source: service.id.clone(),
				target: id,
				kind: EdgeKind::Attachment(kind),
			});
		}
	}

	for relation in &compose.edges {
		edges.push(RenderEdge {
			id: Some(format!("edge-{}-{}", relation.source, relation.target)),
			source: relation.source.clone(),
			target: relation.target.clone(),
			kind: EdgeKind::Relation(relation.kind),
		});
	}

	RenderGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use crate::api::{DependencyEdge, PortSpec, RelationKind, ServiceNode};

	use super::*;

	fn service(id: &str, volumes: &[&str], ports: &[i64], networks: &[&str]) -> ServiceNode {
		ServiceNode {
			id: id.to_string(),
			label: id.to_string(),
			volumes: volumes.iter().map(|v| v.to_string()).collect(),
			ports: ports.iter().map(|p| PortSpec::Number(*p)).collect(),
			networks: networks.iter().map(|n| n.to_string()).collect(),
		}
	}

	fn compose(nodes: Vec<ServiceNode>, edges: Vec<DependencyEdge>) -> ComposeGraph {
		ComposeGraph { nodes, edges }
	}

	fn ids(graph: &RenderGraph) -> HashSet<&str> {
		graph.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	#[test]
	fn shared_volume_collapses_to_one_node_with_fan_in() {
		let input = compose(
			(0..4).map(|i| service(&format!("svc{i}"), &["shared"], &[], &[])).collect(),
			vec![],
		);
		let graph = build_render_graph(&input);

		let volume_nodes: Vec<_> = graph
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Resource(ResourceKind::Volume))
			.collect();
		assert_eq!(volume_nodes.len(), 1);
		assert_eq!(volume_nodes[0].id, "volume-shared");

		let attachments: Vec<_> = graph
			.edges
			.iter()
			.filter(|e| e.target == "volume-shared")
			.collect();
		assert_eq!(attachments.len(), 4);
		assert!(
			attachments
				.iter()
				.all(|e| e.kind == EdgeKind::Attachment(ResourceKind::Volume))
		);
	}

	#[test]
	fn rebuild_from_identical_input_is_set_equal() {
		let input = compose(
			vec![
				service("web", &["data"], &[80, 443], &["front"]),
				service("db", &["data"], &[], &["front", "back"]),
			],
			vec![DependencyEdge {
				source: "web".into(),
				target: "db".into(),
				kind: RelationKind::Dependency,
			}],
		);

		let first = build_render_graph(&input);
		let second = build_render_graph(&input);

		let first_nodes: HashSet<_> = first.nodes.iter().collect();
		let second_nodes: HashSet<_> = second.nodes.iter().collect();
		assert_eq!(first_nodes, second_nodes);

		let first_edges: HashSet<_> = first.edges.iter().collect();
		let second_edges: HashSet<_> = second.edges.iter().collect();
		assert_eq!(first_edges, second_edges);

		// No duplicate synthetic nodes within one build either.
		let unique: HashSet<_> = first.nodes.iter().map(|n| &n.id).collect();
		assert_eq!(unique.len(), first.nodes.len());
	}

	#[test]
	fn kind_prefix_keeps_same_value_apart_across_kinds() {
		let input = compose(vec![service("svc", &["80"], &[80], &["80"])], vec![]);
		let graph = build_render_graph(&input);

		let synthetic: HashSet<&str> = graph
			.nodes
			.iter()
			.filter(|n| n.kind != NodeKind::Service)
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(
			synthetic,
			HashSet::from(["volume-80", "port-80", "network-80"])
		);

		// A service name never aliases a synthetic node of another value.
		assert!(ids(&graph).contains("svc"));
		assert_eq!(graph.nodes.len(), 4);
	}

	#[test]
	fn full_scenario_produces_expected_nodes_and_edges() {
		let input = compose(
			vec![
				service("web", &["data"], &[80], &["net1"]),
				service("db", &["data"], &[], &["net1"]),
			],
			vec![DependencyEdge {
				source: "web".into(),
				target: "db".into(),
				kind: RelationKind::Dependency,
			}],
		);
		let graph = build_render_graph(&input);

		assert_eq!(
			ids(&graph),
			HashSet::from(["web", "db", "volume-data", "port-80", "network-net1"])
		);
		assert_eq!(graph.nodes.len(), 5);
		assert_eq!(graph.edges.len(), 6);

		let pairs: HashSet<(&str, &str)> = graph
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		assert_eq!(
			pairs,
			HashSet::from([
				("web", "volume-data"),
				("web", "port-80"),
				("web", "network-net1"),
				("db", "volume-data"),
				("db", "network-net1"),
				("web", "db"),
			])
		);

		let relation = graph
			.edges
			.iter()
			.find(|e| e.id.is_some())
			.expect("relation edge present");
		assert_eq!(relation.id.as_deref(), Some("edge-web-db"));
		assert_eq!(relation.kind, EdgeKind::Relation(RelationKind::Dependency));
	}

	#[test]
	fn empty_input_builds_empty_graph() {
		let graph = build_render_graph(&ComposeGraph::default());
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn every_attachment_edge_references_existing_nodes() {
		let input = compose(
			vec![
				service("a", &["v1", "v2"], &[8080], &["n"]),
				service("b", &["v2"], &[8080], &["n"]),
			],
			vec![],
		);
		let graph = build_render_graph(&input);
		let known = ids(&graph);

		for edge in &graph.edges {
			assert!(known.contains(edge.source.as_str()), "missing {}", edge.source);
			assert!(known.contains(edge.target.as_str()), "missing {}", edge.target);
		}
	}
}
