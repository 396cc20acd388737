//! Wheel entropy: RDRAND when the CPU has it, xorshift seeded from the TSC
//! otherwise.

use croupier_core::{EntropySource, Xorshift64};
use croupier_lib::klog_warn;
use x86_64::instructions::random::RdRand;

/// RDRAND may transiently report "no data"; retry this often before falling
/// back for a single draw.
const RDRAND_RETRIES: u32 = 10;

pub struct HardwareEntropy {
    rdrand: Option<RdRand>,
    fallback: Xorshift64,
}

fn read_tsc() -> u64 {
    // SAFETY: RDTSC has no side effects and is available on every x86_64 CPU.
    unsafe { core::arch::x86_64::_rdtsc() }
}

impl HardwareEntropy {
    pub fn new() -> Self {
        let rdrand = RdRand::new();
        if rdrand.is_none() {
            klog_warn!("entropy: RDRAND unavailable, using TSC-seeded xorshift");
        }
        Self {
            rdrand,
            fallback: Xorshift64::with_seed(read_tsc() | 1),
        }
    }
}

impl Default for HardwareEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for HardwareEntropy {
    fn next_u32(&mut self) -> u32 {
        if let Some(rdrand) = self.rdrand {
            for _ in 0..RDRAND_RETRIES {
                if let Some(value) = rdrand.get_u32() {
                    return value;
                }
            }
        }
        self.fallback.next_u32()
    }
}
