use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::graph::{DeclarationGraph, GraphBuilder, GraphNode, LinkKind};
use super::ids::{IdAllocator, IdScheme};
use crate::parsers::{InterfaceRecord, PropertyRecord};

pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "Base definition for all elements in a resource.";

/// Link source produced by the legacy id collision, and its replacement
const COLLIDED_SOURCE: &str = "00";
const PATCHED_SOURCE: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub id_scheme: IdScheme,
    /// Used for interfaces whose doc comment was empty
    pub fallback_description: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            id_scheme: IdScheme::default(),
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub interfaces: usize,
    pub properties: usize,
    pub ownership_links: usize,
    pub extension_links: usize,
    pub unresolved_parents: usize,
}

/// Outcome of looking up an `extends` target while converting in order.
enum ParentLink {
    None,
    Resolved(NodeIndex),
    Unresolved,
}

/// Converts interface records into a declaration graph.
pub struct GraphConverter {
    options: BuildOptions,
}

impl GraphConverter {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn convert(&self, interfaces: &[InterfaceRecord]) -> (DeclarationGraph, GraphStats) {
        let mut builder = GraphBuilder::new();
        let mut ids = IdAllocator::new();
        let mut stats = GraphStats::default();
        // Later declarations with the same name shadow earlier ones
        let mut interface_nodes: HashMap<&str, NodeIndex> = HashMap::new();

        for interface in interfaces {
            let interface_id = ids.next_interface_id();
            let interface_node = self.interface_node(interface, interface_id.clone());
            let interface_idx = builder.add_node(interface_node);
            interface_nodes.insert(interface.name.as_str(), interface_idx);
            stats.interfaces += 1;

            for (position, property) in interface.properties.iter().enumerate() {
                let property_id = self.options.id_scheme.property_id(&interface_id, position + 1);
                let property_idx = builder.add_node(property_node(property, property_id));
                stats.properties += 1;
                if builder
                    .add_link(interface_idx, property_idx, LinkKind::Owns)
                    .is_some()
                {
                    stats.ownership_links += 1;
                }
            }

            match resolve_parent(interface, &interface_nodes) {
                ParentLink::Resolved(parent_idx) => {
                    if builder
                        .add_link(parent_idx, interface_idx, LinkKind::Extends)
                        .is_some()
                    {
                        stats.extension_links += 1;
                    }
                }
                ParentLink::Unresolved => {
                    debug!(
                        interface = %interface.name,
                        parent = interface.parent.as_deref().unwrap_or_default(),
                        "parent not declared earlier; no extension link"
                    );
                    stats.unresolved_parents += 1;
                }
                ParentLink::None => {}
            }
        }

        (builder.build(), stats)
    }

    fn interface_node(&self, interface: &InterfaceRecord, id: String) -> GraphNode {
        let category = if interface.parent.is_some() {
            "DataType"
        } else {
            "types"
        };
        let description = if interface.description.is_empty() {
            self.options.fallback_description.clone()
        } else {
            interface.description.clone()
        };
        GraphNode::interface(
            id,
            format!("{}_category:{}", interface.name, category),
            description,
        )
    }
}

impl Default for GraphConverter {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

fn resolve_parent(
    interface: &InterfaceRecord,
    interface_nodes: &HashMap<&str, NodeIndex>,
) -> ParentLink {
    match interface.parent.as_deref() {
        None => ParentLink::None,
        // A self-extending interface was just registered under its own name
        Some(parent) if parent == interface.name => ParentLink::Unresolved,
        Some(parent) => match interface_nodes.get(parent) {
            Some(&idx) => ParentLink::Resolved(idx),
            None => ParentLink::Unresolved,
        },
    }
}

fn property_node(property: &PropertyRecord, id: String) -> GraphNode {
    let optional_mark = if property.optional { "?" } else { "" };
    GraphNode::property(
        id,
        format!(
            "{}{}_type:{}",
            property.name,
            optional_mark,
            display_type(&property.type_text)
        ),
        property.description.clone(),
    )
}

/// Function signatures are bracketed and lose their single quotes.
pub fn display_type(type_text: &str) -> String {
    if type_text.starts_with('(') {
        format!("[{}]", type_text.replace('\'', ""))
    } else {
        type_text.to_string()
    }
}

/// Rewrites every link whose source is literally `"00"` to `"0"`.
/// Returns the number of links changed.
pub fn patch_collided_sources(graph: &mut DeclarationGraph) -> usize {
    let mut patched = 0;
    for link in graph.edge_weights_mut() {
        if link.source == COLLIDED_SOURCE {
            link.source = PATCHED_SOURCE.to_string();
            patched += 1;
        }
    }
    patched
}
