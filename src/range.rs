//! Greedy range decomposition
//!
//! Expresses an arbitrary inclusive address range as the fewest possible
//! CIDR blocks covering it exactly.

use log::debug;

use crate::addr::Address;
use crate::error::Error;
use crate::network::Network;

///Creates the minimal list of networks covering the inclusive range
///`[start, end]`, ascending by address
///
///A range that happens to align with a block boundary yields a single
///network; any other range yields the fewest blocks whose union is exactly
///the range. Fails with [Error::StartAfterEnd] when `start > end`.
///
///Each step takes the largest block that is both aligned to the cursor's
///trailing zero bits and does not overshoot the remaining address count,
///which is optimal in the number of blocks.
pub fn range_from<A: Address>(start: A, end: A) -> Result<Vec<Network<A>>, Error> {
    if start > end {
        return Err(Error::StartAfterEnd);
    }
    if start == end {
        return Ok(vec![Network::new(start, A::BITS)?]);
    }

    let one = A::single_bit(0);
    //wraps to zero only when end is the family maximum, where the modular
    //remaining-count arithmetic below stays exact
    let end_exclusive = end.wrapping_add(one);

    let mut blocks = Vec::new();
    let mut cursor = start;
    loop {
        //remaining = end_exclusive - cursor, via two's complement negation
        let remaining = end_exclusive.wrapping_add(cursor.invert().wrapping_add(one));

        //the zero address is aligned to the full width
        let mut block_bits = cursor.lowest_set_bit().unwrap_or(A::BITS);
        if let Some(count_bits) = remaining.highest_set_bit() {
            if block_bits > count_bits {
                block_bits = count_bits;
            }
        }

        blocks.push(Network::new(cursor, A::BITS - block_bits)?);

        if block_bits == A::BITS {
            //the block covers the whole address space
            break;
        }
        let next = cursor.wrapping_add(A::single_bit(block_bits));
        if next <= cursor {
            //no successor: the block ended at the top of the address space
            break;
        }
        if next > end {
            break;
        }
        cursor = next;
    }

    debug!("range {start}..{end} covered by {} blocks", blocks.len());
    Ok(blocks)
}
