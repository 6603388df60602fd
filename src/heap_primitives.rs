// Index arithmetic for an implicit d-ary heap laid out in pages.
//
// A heap is a tree-like structure where every subtree's root orders no worse
// than the rest of the subtree, stored in an array that's traversed in a
// non-linear way. These are the indices we assign to each node for a plain
// d-ary layout (`P == 1`, here with `F == 2`),
//
// ```text
//                           0
//              1                         2
//       3            4            5             6
//   7      8      9     10    11     12     13     14
// 15 16  17 18  19 20  21 22 23 24  25
// ```
//
// With a page factor `P > 1` the indices behind the root are grouped into
// pages of `F * P` consecutive slots, and a parent whose children fit on its
// own page sits `F` slots before its child run, so sibling scans during
// sift-down stay inside one page. For `F = 2, P = 2` (pages of 4),
//
// ```text
// node      0 | 1    2    3     4     | 5    6     7    8   | ...
// children  1 | 3,4  5,6  9,10  13,14 | 7,8  17,18 ...      |
//           2 '------ page 0 ---------'------ page 1 -------'
// ```
//
// Node 1 keeps its children on page 0 (the fast path); nodes 2, 3 and 4 send
// theirs to later pages (the slow path).

/// Slots per page behind the root.
#[inline(always)]
#[must_use]
pub const fn page_size<const F: usize, const P: usize>() -> usize {
    F * P
}

/// Per page, the number of nodes whose children start a later page.
#[inline(always)]
#[must_use]
pub const fn page_leaves<const F: usize, const P: usize>() -> usize {
    (F - 1) * P + 1
}

/// The parent node
///
/// `u` must be greater than 0; the root has no parent.
///
/// ```
/// use paged_heap::heap_primitives::index_parent;
/// // Plain 4-ary layout
/// assert_eq!(index_parent::<4, 1>(1), 0);
/// assert_eq!(index_parent::<4, 1>(4), 0);
/// assert_eq!(index_parent::<4, 1>(5), 1);
/// // Binary layout in pages of 4
/// assert_eq!(index_parent::<2, 2>(2), 0);
/// assert_eq!(index_parent::<2, 2>(4), 1);
/// assert_eq!(index_parent::<2, 2>(5), 2);
/// assert_eq!(index_parent::<2, 2>(9), 3);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const F: usize, const P: usize>(u: usize) -> usize {
    debug_assert!(F >= 2);
    debug_assert!(P >= 1);
    debug_assert!(u > 0);

    let u = u - 1;
    if P == 1 {
        return u / F;
    }

    if u < F {
        // Parent is root.
        return 0;
    }

    debug_assert!(P <= usize::MAX / F);
    let page_size = page_size::<F, P>();
    let v = u % page_size;
    if v >= F {
        // Fast path. Parent is on the same page as the child.
        return u - v + v / F;
    }

    // Slow path. Parent is on an earlier page.
    let w = u / page_size - 1;
    let page_leaves = page_leaves::<F, P>();
    (w / page_leaves + 1) * page_size + w % page_leaves - page_leaves + 1
}

/// The first of the `F` children
///
/// Returns `usize::MAX` when the child index would not fit a `usize`; callers
/// walking down compare the result against the heap size anyway, which keeps
/// the sentinel out of bounds.
///
/// ```
/// use paged_heap::heap_primitives::index_first_child;
/// // Plain 4-ary layout
/// assert_eq!(index_first_child::<4, 1>(0), 1);
/// assert_eq!(index_first_child::<4, 1>(1), 5);
/// // Binary layout in pages of 4
/// assert_eq!(index_first_child::<2, 2>(0), 1);
/// assert_eq!(index_first_child::<2, 2>(1), 3);
/// assert_eq!(index_first_child::<2, 2>(3), 9);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_child<const F: usize, const P: usize>(u: usize) -> usize {
    debug_assert!(F >= 2);
    debug_assert!(P >= 1);
    debug_assert!(u < usize::MAX);

    if P == 1 {
        if u > (usize::MAX - 1) / F {
            // Child overflow.
            return usize::MAX;
        }
        return u * F + 1;
    }

    if u == 0 {
        // The root's first child is always 1.
        return 1;
    }

    debug_assert!(P <= usize::MAX / F);
    let page_size = page_size::<F, P>();
    let u = u - 1;
    let v = u % page_size + 1;
    if v < page_size / F {
        // Fast path. Children are on the same page as the parent.
        let v = v * (F - 1);
        if u > usize::MAX - 2 - v {
            // Child overflow.
            return usize::MAX;
        }
        return u + v + 2;
    }

    // Slow path. Children start a later page.
    let page_leaves = page_leaves::<F, P>();
    let first_page = (u / page_size + 1)
        .checked_mul(page_leaves)
        .and_then(|w| w.checked_add(v));
    let v = match first_page {
        // Always at least `page_size`, by the fast-path bound on `v`.
        Some(w) => w - page_size,
        None => return usize::MAX,
    };
    if v > (usize::MAX - 1) / page_size {
        // Child overflow.
        return usize::MAX;
    }
    v * page_size + 1
}

/// A fanout that keeps one sibling run of `T`s inside two cache lines.
///
/// A starting point for picking the heap geometry; measure before committing
/// to it.
#[must_use]
pub fn cache_aligned_fanout<T: Sized>() -> usize {
    let s = std::mem::size_of::<T>().max(1);
    std::cmp::max(128 / s, 2)
}
