//! Reference-token allocation.
//!
//! New tokens must be unused anywhere in the graph, across every entity
//! kind. Each token is three fixed-width uppercase-hex segments:
//!
//! ```text
//! [8 hex digits: kind discriminator (BLAKE3 of the kind's domain string)]
//! [8 hex digits: random seed, drawn once per allocation]
//! [8 hex digits: attempt counter, starting at 1]
//! ```
//!
//! The discriminator is deterministic per kind, so allocated tokens are
//! reproducible in their leading segment across platforms and runs. The
//! attempt counter increments while a candidate collides with the store;
//! the loop is bounded and exhaustion surfaces as an error.

use rand::Rng;
use tracing::debug;

use pbx_types::ObjectRef;

use crate::error::{StoreError, StoreResult};
use crate::objects::ObjectKind;
use crate::store::Objects;

/// Attempt ceiling for one allocation.
///
/// Collisions require another entity to share the discriminator and seed
/// segments, so in practice the first attempt succeeds; the bound exists so
/// a pathological store fails loudly instead of looping forever.
pub const MAX_ALLOC_ATTEMPTS: u32 = 65_536;

/// Deterministic kind discriminator: the first four bytes of a BLAKE3 hash
/// over the kind's versioned domain string.
fn kind_discriminator(kind: ObjectKind) -> u32 {
    let hash = blake3::hash(kind.domain().as_bytes());
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

impl Objects {
    /// Allocate a reference token for a new entity of the given kind.
    ///
    /// The returned token is guaranteed unused anywhere in the store at the
    /// moment of return. Allocation does not insert anything: insertion is
    /// the caller's responsibility, and two allocations without an
    /// intervening insert are not guaranteed distinct.
    pub fn allocate_ref(&self, kind: ObjectKind) -> StoreResult<ObjectRef> {
        let discriminator = kind_discriminator(kind);
        let seed: u32 = rand::thread_rng().gen();

        for counter in 1..=MAX_ALLOC_ATTEMPTS {
            let candidate =
                ObjectRef::new(format!("{discriminator:08X}{seed:08X}{counter:08X}"));
            if !self.contains(&candidate) {
                if counter > 1 {
                    debug!(%candidate, attempts = counter, "reference allocated after collisions");
                }
                return Ok(candidate);
            }
        }

        Err(StoreError::AllocationExhausted {
            kind,
            attempts: MAX_ALLOC_ATTEMPTS,
        })
    }
}
