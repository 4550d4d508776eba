//! Merkle root over transaction ids
//!
//! Bitcoin layout: pairs are hashed with SHA-256d and an odd level repeats
//! its last node.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// Empty list gives the zero hash. A single hash is its own root.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = match hashes {
        [] => return Hash::zero(),
        [only] => return *only,
        _ => hashes.to_vec(),
    };

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        current_level = current_level
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    current_level[0]
}
