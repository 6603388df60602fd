// N-way merge of sorted ranges through a heap of range cursors.
//
// Each input range is a slice cursor that advances toward its end as its
// items are emitted. The cursors live in a max-heap keyed by their current
// head under the reversed order, so the root always holds the range whose
// head comes next in the output.

use crate::heap::make_heap_by;
use crate::heap::restore_heap_after_item_decrease_by;

/// Merges ascending input ranges into `out`, keeping ascending order under
/// `less`.
///
/// Every range must be non-empty on entry. As a side effect the ranges
/// slice is permuted and every cursor is advanced to its end. Emitting one
/// item costs `O(log_F k)` comparisons for `k` input ranges.
///
/// Among ranges with equal heads the winner is fixed by the max-child tie
/// rule of the underlying heap, so the emission order is deterministic for
/// a given input order.
pub fn nway_merge_by<const F: usize, const P: usize, T, L>(
    ranges: &mut [&[T]],
    out: &mut Vec<T>,
    mut less: L,
) where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    debug_assert!(!ranges.is_empty(), "nothing to merge");
    debug_assert!(ranges.iter().all(|r| !r.is_empty()));

    // Ranges compare by their current head, reversed, so the max-heap root
    // is the range holding the smallest head.
    let mut rless = |ra: &&[T], rb: &&[T]| less(&rb[0], &ra[0]);

    let mut live = ranges.len();
    make_heap_by::<F, P, _, _>(ranges, &mut rless);
    loop {
        // Emit the head of the winning range and advance its cursor.
        let r = ranges[0];
        out.push(r[0].clone());
        let r = &r[1..];
        ranges[0] = r;
        if r.is_empty() {
            live -= 1;
            if live == 0 {
                break;
            }
            ranges.swap(0, live);
        }
        // The head at the root grew (or a fresh range was swapped in), so
        // its rank under the reversed order went down.
        restore_heap_after_item_decrease_by::<F, P, _, _>(&mut ranges[..live], 0, &mut rless);
    }
}

/// `nway_merge_by` under the natural ordering.
pub fn nway_merge<const F: usize, const P: usize, T>(ranges: &mut [&[T]], out: &mut Vec<T>)
where
    T: Clone + Ord,
{
    nway_merge_by::<F, P, T, _>(ranges, out, |x, y| x < y);
}
