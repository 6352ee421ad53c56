//! Tally Plugin System
//!
//! Provides the `FunctionPlugin` trait for exposing statistics as named
//! functions over untyped `Value` arguments, plus the registry that
//! dispatches, documents and lists them.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, TraceStep};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext, TraceStep};
    pub use tally_core::prelude::*;
}
