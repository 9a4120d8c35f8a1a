//! MCP server module
//!
//! Serves the Chileme tools over the Model Context Protocol.

mod server;

pub use server::ChilemeService;
