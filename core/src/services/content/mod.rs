//! Content service module: the read/write facade over the content store.

pub mod fixtures;
mod navigation;
mod service;

pub use navigation::build_navigation_tree;
pub use service::{ContentService, ContentServiceConfig};

#[cfg(test)]
mod tests;
