//! Hash collections backed by `rustc-hash`.

pub use rustc_hash::{FxHashMap, FxHashSet};
