//! In-place d-ary, page-aware max-heap operations with compile-time
//! geometry.
//!
//! Every operation works directly on a caller-provided slice and is generic
//! over a fanout `F >= 2` and a page factor `P >= 1`. With `P == 1` the
//! layout is a plain d-ary heap; with `P > 1` each parent is clustered with
//! its children inside pages of `F * P` slots so sibling scans during
//! sift-down stay within one cache line group. Pick the geometry to match
//! the element size and the machine; `F = 4, P = 1` is a strong default.
//!
//! Nothing here allocates and no state is kept between calls. On top of the
//! slice operations sit an N-way merge of sorted ranges and a small
//! `Vec`-backed [`PriorityQueue`](data_structures::PriorityQueue).

// Internals
// ---------
pub mod heap_primitives;

// Slice operations
// ----------------
pub mod heap;
pub mod merge;

// Containers
// ----------
pub mod data_structures;
