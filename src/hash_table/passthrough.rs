use std::hash::{BuildHasherDefault, Hasher};

/// Builds `PassthroughHasher`s on demand.
pub type BuildPassthroughHasher = BuildHasherDefault<PassthroughHasher>;

/// A hasher that reassembles the bytes it is given into the value they came from, so integral
/// keys map to bucket `key mod capacity`. Collision scenarios in tests and benchmarks rely on
/// this to be deterministic.
#[derive(Default)]
pub struct PassthroughHasher(u64);

impl Hasher for PassthroughHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.0 = (self.0 << 8) | u64::from(*byte);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::PassthroughHasher;
    use std::hash::Hasher;

    #[test]
    fn test_passthrough() {
        let mut hasher = PassthroughHasher::default();
        hasher.write_u32(42);
        assert_eq!(hasher.finish(), 42);

        let mut hasher = PassthroughHasher::default();
        hasher.write_u64(0xc8c8_c8c8_c8c8_c8c8);
        assert_eq!(hasher.finish(), 0xc8c8_c8c8_c8c8_c8c8);
    }
}
