//! TypeScript declaration emitter.
//!
//! Renders the definitions of one module as a `declare module` block.
//! Qualified names from other modules become imports; nested types are
//! expected to have been lifted into a module named after their enclosing
//! type.

mod emitter;
mod naming;
mod render;

#[cfg(test)]
mod naming_tests;

pub use emitter::Emitter;
pub use naming::escape_param_name;
