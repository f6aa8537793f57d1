//! dhicode_core: Core utilities shared by the DhiCode front end.
//!
//! Provides source positions, line maps, and the arena that owns AST nodes.

pub mod arena;
pub mod text;

// Re-export commonly used types
pub use arena::AstArena;
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
