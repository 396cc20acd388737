//! Pacing for the game loop on hardware: sleep until the next interrupt.

use croupier_core::Pacer;
use croupier_lib::cpu;

use crate::{irq, pit};

#[derive(Clone, Copy, Debug, Default)]
pub struct HaltPacer;

impl Pacer for HaltPacer {
    fn relax(&mut self) {
        cpu::hlt();
    }

    fn pause_ms(&mut self, ms: u32) {
        let deadline = irq::ticks() + pit::ms_to_ticks(ms, pit::frequency());
        while irq::ticks() < deadline {
            cpu::hlt();
        }
    }
}
