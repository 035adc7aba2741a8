//! Identifier generator.

use rand::Rng;
use uuid::Builder;

/// Random v4 UUID string with its bytes drawn from `rng`, so that pool
/// allocation is reproducible under a fixed seed.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}
