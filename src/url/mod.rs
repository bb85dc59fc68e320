//! URL handling module for Ripple-Check
//!
//! This module provides seed URL parsing, link resolution, HTML entity
//! decoding, host matching and the scope policy for discovered links.

mod domain;
mod entities;
mod matcher;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::{extract_host, trim_host};
pub use entities::decode_entities;
pub use matcher::{is_subdomain, same_host};
pub use normalize::{parse_seed_url, resolve_link};
pub use scope::{ScopeDecision, ScopePolicy};
