//! rsharp_binder: Local scope construction for the binder.
//!
//! Finds variables declared inside expressions (pattern variables and out
//! variables), manufactures their symbols through a `SymbolFactory`, and
//! registers them, together with ordinary locals, in block scopes.

mod error;
mod expression_variable_finder;
mod locals;
mod scope;
mod symbol;

pub use error::FinderError;
pub use expression_variable_finder::{find_expression_variables, find_expression_variables_in_list};
pub use locals::LocalScopeBuilder;
pub use scope::{Scope, ScopeId, Scopes};
pub use symbol::{LocalDeclarationKind, LocalSymbol, LocalSymbolFactory, SymbolFactory, SymbolTable};
