//! Randomness for choosing where the wheel stops.

use croupier_abi::POSITION_COUNT;

/// A blocking source of uniformly distributed values.
///
/// Implementations retry transient hardware errors internally; callers only
/// ever see a value.
pub trait EntropySource {
    fn next_u32(&mut self) -> u32;
}

/// Wheel index the next spin should stop on.
pub fn spin_target<E: EntropySource + ?Sized>(source: &mut E) -> u8 {
    (source.next_u32() % POSITION_COUNT as u32) as u8
}

const DEFAULT_SEED: u64 = 0xACE1;

/// xorshift64 generator, used where no hardware generator is available.
#[derive(Clone, Copy, Debug)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl EntropySource for Xorshift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl EntropySource for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn target_is_reduced_modulo_the_wheel() {
        assert_eq!(spin_target(&mut Fixed(9)), 9);
        assert_eq!(spin_target(&mut Fixed(38 + 9)), 9);
        assert_eq!(spin_target(&mut Fixed(u32::MAX)), (u32::MAX % 38) as u8);
    }

    #[test]
    fn xorshift_covers_the_wheel() {
        let mut rng = Xorshift64::with_seed(0);
        let mut seen = [false; POSITION_COUNT];
        for _ in 0..10_000 {
            seen[spin_target(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
