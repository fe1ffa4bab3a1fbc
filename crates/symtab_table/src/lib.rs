//! symtab_table: Scoped symbol table core.
//!
//! Each lexical scope owns a fixed-size bucketed hash table of name → type
//! bindings. The scope stack chains those tables by lexical nesting and
//! implements shadowed lookup: the innermost declaration of a name is always
//! the one observed. Bucket placement is delegated to a pluggable hash
//! strategy, and every table tracks a collision count used to compare
//! strategies against each other.

pub mod binding;
pub mod error;
pub mod frame;
pub mod stack;
pub mod trace;

// Re-export commonly used types
pub use binding::Binding;
pub use error::SymtabError;
pub use frame::ScopeFrame;
pub use stack::ScopeStack;
pub use trace::{NullSink, TraceSink, WriteSink};
