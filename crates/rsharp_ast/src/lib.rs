//! rsharp_ast: syntax tree definitions for the C#-like surface language.
//!
//! Defines the node types, the `SyntaxKind` enum, a uniform `SyntaxNode`
//! reference for walkers, parent navigation via `SyntaxTree`, and a
//! `NodeFactory` for building trees without a parser.

pub mod factory;
pub mod generated;
pub mod node;
pub mod syntax_kind;
pub mod syntax_node;
pub mod tree;
pub mod types;

// Re-export key types
pub use factory::NodeFactory;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use syntax_node::{Children, SyntaxNode};
pub use tree::SyntaxTree;
pub use types::*;
