pub mod analyzer;
pub mod converter;
pub mod graph;
pub mod ids;

pub use analyzer::DeclarationAnalyzer;
pub use converter::{BuildOptions, GraphConverter, GraphStats};
pub use graph::{DeclarationGraph, GraphBuilder, GraphLink, GraphNode, LinkKind, NodeKind};
pub use ids::{IdAllocator, IdScheme};
