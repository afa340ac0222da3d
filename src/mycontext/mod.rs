//! Interface to the external my-context tool
//!
//! Two consumption surfaces, matching how the tool is used upstream:
//! [`cli`] drives the binary via subprocess for demo-data generation, and
//! [`store`] reads the persisted state of a context home directly. Both
//! take the context home as an explicit path; the `MY_CONTEXT_HOME`
//! environment variable is only ever set on spawned child processes.

pub mod cli;
pub mod panels;
pub mod store;
