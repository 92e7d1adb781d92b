use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::converter::{patch_collided_sources, BuildOptions, GraphConverter, GraphStats};
use super::DeclarationGraph;
use crate::parsers::typescript::TypeScriptDeclarationParser;
use crate::parsers::{DeclarationParser, InterfaceRecord};

/// Runs extraction, graph construction and the id patch over one document.
pub struct DeclarationAnalyzer {
    parser: TypeScriptDeclarationParser,
    converter: GraphConverter,
}

impl DeclarationAnalyzer {
    pub fn new(options: BuildOptions) -> Result<Self> {
        Ok(Self {
            parser: TypeScriptDeclarationParser::new()?,
            converter: GraphConverter::new(options),
        })
    }

    pub fn analyze_file(&self, input: &Path) -> Result<(DeclarationGraph, GraphStats)> {
        info!(
            input = %input.display(),
            dialect = self.parser.dialect_name(),
            "reading declarations"
        );
        let interfaces = self.parser.parse_file(input)?;
        Ok(self.build(&interfaces))
    }

    pub fn analyze_source(&self, source: &str) -> (DeclarationGraph, GraphStats) {
        let interfaces = self.parser.parse_source(source);
        self.build(&interfaces)
    }

    fn build(&self, interfaces: &[InterfaceRecord]) -> (DeclarationGraph, GraphStats) {
        info!(interfaces = interfaces.len(), "extracted interface records");

        let (mut graph, stats) = self.converter.convert(interfaces);
        info!(
            nodes = graph.node_count(),
            links = graph.edge_count(),
            properties = stats.properties,
            unresolved_parents = stats.unresolved_parents,
            "built declaration graph"
        );

        let patched = patch_collided_sources(&mut graph);
        if patched > 0 {
            info!(patched, "rewrote collided link sources");
        }

        (graph, stats)
    }
}
