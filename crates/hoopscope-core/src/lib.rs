// Library root: player stat store, CSV loading, the comparison resolver, and
// renderer-agnostic chart assembly shared by the dashboard binary.

pub mod charts;
pub mod config;
pub mod export;
pub mod loader;
pub mod resolver;
pub mod stats;
