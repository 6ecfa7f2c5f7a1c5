/// Moves the operands in `args[bottom..middle]` behind the options in
/// `args[middle..top]`.
///
/// This is a block swap: the shorter of the two segments is swapped with an
/// equally long slice at the far end of the longer one, after which that
/// slice is in its final place and drops out of consideration.  Relative
/// order inside both segments is preserved.
pub fn exchange(args: &mut [String], bottom: usize, middle: usize, top: usize) {
    debug_assert!(bottom <= middle && middle <= top && top <= args.len());
    let (mut bottom, mut top) = (bottom, top);

    while top > middle && middle > bottom {
        if top - middle > middle - bottom {
            // bottom segment is the short one
            let len = middle - bottom;
            let (low, high) = args.split_at_mut(top - len);
            low[bottom..bottom + len].swap_with_slice(&mut high[..len]);
            top -= len;
        } else {
            // top segment is the short one
            let len = top - middle;
            let (low, high) = args.split_at_mut(middle);
            low[bottom..bottom + len].swap_with_slice(&mut high[..len]);
            bottom += len;
        }
    }
}
