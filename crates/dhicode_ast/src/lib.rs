//! dhicode_ast: Abstract Syntax Tree definitions for DhiCode.
//!
//! Defines the closed set of statement and expression nodes, their canonical
//! text rendering, a builder that turns scanner tokens into arena-allocated
//! nodes, and a visitor for walking finished trees.

pub mod builder;
pub mod node;
mod render;
pub mod visitor;

// Re-export key types
pub use builder::{NodeBuilder, NodeError};
pub use node::*;
pub use visitor::AstVisitor;
