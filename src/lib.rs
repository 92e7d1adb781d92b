//! # DECLGRAPH
//!
//! Turns exported interface declarations into a directed graph for visualization.
//!
//! The extractor is a line-oriented state machine over a narrow `.d.ts`
//! convention: doc comments before `export interface Name [extends Parent] {`
//! lines, property lines of the form `name[?]: <type> | undefined;`, and a
//! closing `}` on its own line.
//!
//! ## Output
//!
//! A single JSON document with `nodes` (`id`, `type`, `description`) and
//! `links` (`source`, `target`).

pub mod core;
pub mod formatters;
pub mod parsers;
