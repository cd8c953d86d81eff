//! rsharp_core: Core utilities shared by the rsharp front end.
//!
//! Provides the syntax arena, string interning, and text ranges used by the
//! tree and the binder.

pub mod arena;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::SyntaxArena;
pub use intern::{InternedString, StringInterner};
pub use text::{TextPos, TextRange};
