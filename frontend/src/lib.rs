//! Browser side of the condominium file generator: the generation workflow,
//! its `fetch`/download plumbing and the build-time configuration. The yew
//! page in the binary drives it.

pub mod config;
pub mod generation;
pub mod logger;
