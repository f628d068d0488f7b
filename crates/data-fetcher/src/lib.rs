//! Data fetcher — fetch one fixed endpoint and answer heuristic queries about its payload.

pub mod analyze;
pub mod fetch;
pub mod inspector;
pub mod normalize;
pub mod router;
pub mod summary;
pub mod types;

pub use analyze::{analyze, QueryKind};
pub use fetch::Fetcher;
pub use inspector::{DataInspector, OPERATIONS};
pub use normalize::normalize;
pub use router::answer;
pub use summary::summarize;
pub use types::*;
