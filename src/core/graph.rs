use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Interface,
    Property,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// interface -> one of its properties
    Owns,
    /// parent interface -> interface extending it
    Extends,
}

/// A visualization node. Only `id`, `type` and `description` are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub label: String,
    pub description: String,
    #[serde(skip)]
    pub kind: NodeKind,
}

/// Directed link between node ids. Ids are carried as text so that colliding
/// ids are written out exactly as they were assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(skip)]
    pub kind: LinkKind,
}

pub type DeclarationGraph = Graph<GraphNode, GraphLink, Directed>;

impl GraphNode {
    pub fn interface(id: String, label: String, description: String) -> Self {
        Self {
            id,
            label,
            description,
            kind: NodeKind::Interface,
        }
    }

    pub fn property(id: String, label: String, description: String) -> Self {
        Self {
            id,
            label,
            description,
            kind: NodeKind::Property,
        }
    }
}

impl GraphLink {
    pub fn new(kind: LinkKind, source: String, target: String) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }
}

/// Accumulates nodes and links in insertion order.
///
/// Links are attached by node index rather than by id lookup, because legacy
/// ids may collide (interface `"11"` vs. property 1 of interface `"1"`).
pub struct GraphBuilder {
    graph: DeclarationGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    pub fn add_link(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        kind: LinkKind,
    ) -> Option<petgraph::graph::EdgeIndex> {
        let source_id = self.graph.node_weight(source)?.id.clone();
        let target_id = self.graph.node_weight(target)?.id.clone();
        let link = GraphLink::new(kind, source_id, target_id);
        Some(self.graph.add_edge(source, target, link))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn build(self) -> DeclarationGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
