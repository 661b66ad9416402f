//! Block merging
//!
//! Two complementary reductions over collections of networks: dropping
//! blocks contained in larger ones, and coalescing sibling blocks into their
//! parent the way a buddy allocator does.

use std::collections::HashSet;

use log::{debug, trace};

use crate::addr::Address;
use crate::network::Network;

///Removes every network that is contained in another network of the input
///
///Duplicate ranges collapse. The result is an unordered set.
pub fn merge_containing<A: Address>(
    networks: impl IntoIterator<Item = Network<A>>,
) -> HashSet<Network<A>> {
    let mut sorted: Vec<Network<A>> = networks.into_iter().collect();
    let input_len = sorted.len();
    //largest blocks first, so every block only needs to check what is
    //already kept
    sorted.sort_by_key(Network::prefix);

    let mut kept: Vec<Network<A>> = Vec::new();
    for network in sorted {
        if !kept.iter().any(|outer| outer.contains(&network)) {
            kept.push(network);
        }
    }

    debug!("containment merge kept {} of {input_len} networks", kept.len());
    kept.into_iter().collect()
}

///Coalesces equal-size sibling networks into their parent, recursively,
///returning the result in ascending order
///
///Two blocks merge only when they are true address-aligned siblings of one
///parent block, not merely adjacent. Merges cascade upward: four adjacent
///`/26` blocks collapse into one `/24`.
pub fn merge_neighbors<A: Address>(
    networks: impl IntoIterator<Item = Network<A>>,
) -> Vec<Network<A>> {
    let mut sorted: Vec<Network<A>> = networks.into_iter().collect();
    sorted.sort();

    //result stack: after every push, the top pair is merged while it forms a
    //sibling pair, so each merge strictly shrinks the stack and cascades
    //handle themselves
    let mut merged: Vec<Network<A>> = Vec::new();
    for network in sorted {
        merged.push(network);
        while merged.len() >= 2 {
            let right = merged[merged.len() - 1];
            let left = merged[merged.len() - 2];
            if left.prefix() != right.prefix() || left.prefix() == 0 {
                break;
            }
            let parent = match Network::new(left.start(), left.prefix() - 1) {
                Ok(parent) => parent,
                Err(_) => break,
            };
            if !parent.contains(&left) || !parent.contains(&right) {
                break;
            }
            trace!("coalescing {left} and {right} into {parent}");
            merged.pop();
            merged.pop();
            merged.push(parent);
        }
    }

    merged
}
