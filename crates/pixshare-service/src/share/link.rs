//! Link identifier generation.

use rand::RngExt;

use pixshare_core::types::LinkId;

/// Generates opaque link identifiers.
///
/// 16 lowercase hex characters (64 bits of entropy). Narrow enough that
/// collisions are conceivable at scale, so the store's conditional insert
/// is the uniqueness authority; the lifecycle service regenerates on
/// conflict with a bounded retry count.
#[derive(Debug, Clone, Default)]
pub struct LinkIdGenerator;

impl LinkIdGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a fresh random link identifier.
    ///
    /// Infallible: an unavailable randomness source aborts the process at
    /// startup, it is never a per-call error.
    pub fn generate(&self) -> LinkId {
        let mut rng = rand::rng();
        let bytes: [u8; LinkId::LEN / 2] = rng.random();
        LinkId::new(hex::encode(&bytes))
    }
}

/// Simple hex encoding without an external dependency.
mod hex {
    /// Encode bytes to a lowercase hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_fixed_length_hex() {
        let generator = LinkIdGenerator::new();
        for _ in 0..32 {
            let id = generator.generate();
            assert_eq!(id.as_str().len(), LinkId::LEN);
            assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        let generator = LinkIdGenerator::new();
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
    }
}
