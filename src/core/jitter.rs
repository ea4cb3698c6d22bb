use rand::Rng;

/// Source of the random variance added to every grant score
///
/// Production uses [`RandomJitter`]; tests pin the value with [`FixedJitter`].
pub trait JitterSource: Send + Sync + std::fmt::Debug {
    /// Integer in `0..=max`
    fn jitter(&self, max: u8) -> u8;
}

/// Uniformly distributed jitter from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    #[inline]
    fn jitter(&self, max: u8) -> u8 {
        rand::thread_rng().gen_range(0..=max)
    }
}

/// Always returns the same value, clamped to `max`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub u8);

impl JitterSource for FixedJitter {
    #[inline]
    fn jitter(&self, max: u8) -> u8 {
        self.0.min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_in_range() {
        let source = RandomJitter;
        for _ in 0..500 {
            assert!(source.jitter(10) <= 10);
        }
        assert_eq!(source.jitter(0), 0);
    }

    #[test]
    fn test_fixed_jitter_clamped() {
        assert_eq!(FixedJitter(0).jitter(10), 0);
        assert_eq!(FixedJitter(7).jitter(10), 7);
        assert_eq!(FixedJitter(42).jitter(10), 10);
    }
}
