//! Index-keyed storage and hash collections with a deterministic hasher.
mod keyed_vec;

use fnv::FnvBuildHasher;
pub use keyed_vec::*;

/// Iteration order is stable between runs.
#[allow(clippy::disallowed_types, reason = "this is how we define our HashMap")]
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
#[allow(clippy::disallowed_types, reason = "this is how we define our HashSet")]
pub type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;
