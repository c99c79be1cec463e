//! MCP tool definitions and the registry that routes calls to them.

pub mod datafiles;
pub mod railways;
pub mod registry;
pub mod weather;

pub use registry::{ToolDescriptor, ToolRegistry};
