//! Model-to-model passes run before emission.
//!
//! - `hierarchy`: overload copy-down, flattening and doc propagation over
//!   supertype/interface edges
//! - `conflicts`: per-type member cleanup run at emission time
//! - `roots`: closure of the types reachable from a set of root names

mod conflicts;
mod hierarchy;
mod roots;


pub use conflicts::MemberConflicts;
pub use hierarchy::HierarchyTransformer;
pub use roots::reachable_roots;
