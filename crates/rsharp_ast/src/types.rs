//! Identifier types shared between the tree and the binder.

/// Node ID for referencing syntax nodes. Unique within one factory.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

/// Symbol ID for referencing binder symbols by index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SymbolId(pub u32);
