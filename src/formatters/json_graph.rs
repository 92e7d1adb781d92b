use anyhow::{Context, Result};
use clap::ValueEnum;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::{DeclarationGraph, GraphLink, GraphNode};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum JsonStyle {
    /// Two-space indentation
    #[default]
    Pretty,
    Compact,
}

impl JsonStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            JsonStyle::Pretty => "pretty",
            JsonStyle::Compact => "compact",
        }
    }
}

/// Document consumed by the force-graph viewer
#[derive(Serialize)]
struct GraphDocument<'a> {
    nodes: Vec<&'a GraphNode>,
    links: Vec<&'a GraphLink>,
}

/// Writes a declaration graph as `{ "nodes": [...], "links": [...] }`
pub struct GraphJsonFormatter {
    style: JsonStyle,
}

impl GraphJsonFormatter {
    pub fn new() -> Self {
        Self {
            style: JsonStyle::Pretty,
        }
    }

    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces `output_path` in one rename, so readers never see a partial file.
    pub fn format_to_file(&self, graph: &DeclarationGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;

        let parent = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to stage output in {}", parent.display()))?;
        staged.write_all(json_content.as_bytes())?;
        staged
            .persist(output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DeclarationGraph) -> Result<String> {
        // Index order and edge order are insertion order
        let document = GraphDocument {
            nodes: graph
                .node_indices()
                .filter_map(|idx| graph.node_weight(idx))
                .collect(),
            links: graph.edge_references().map(|edge| edge.weight()).collect(),
        };

        let json = match self.style {
            JsonStyle::Pretty => serde_json::to_string_pretty(&document)?,
            JsonStyle::Compact => serde_json::to_string(&document)?,
        };
        Ok(json)
    }
}

impl Default for GraphJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
