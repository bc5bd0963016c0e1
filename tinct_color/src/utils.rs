use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
