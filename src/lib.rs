//! mycontext-tutorials library
//!
//! Pipeline for producing the my-context visual tutorial site: generate
//! demo context homes through the my-context CLI, export styled terminal
//! panels as HTML, and assemble the final tutorial pages.

pub mod commands;
pub mod config;
pub mod mycontext;
pub mod recorder;
