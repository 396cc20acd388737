//! Boot sequence. Each step depends on the ones before it:
//! serial before logging, logging before the command line is reported,
//! the IDT before any IRQ line is unmasked.

use croupier_abi::ports::{COM1_IRQ_LINE, PIT_IRQ_LINE};
use croupier_core::{GameConfig, GameController};
use croupier_drivers::random::HardwareEntropy;
use croupier_drivers::serial::{self, TerminalWriter};
use croupier_drivers::{irq, pic, pit, HaltPacer};
use croupier_lib::{cpu, klog_attach_sink, klog_info, klog_set_level, InitFlag};
use croupier_video::AnsiTerminal;

use crate::{idt, limine_protocol};

static PLATFORM_READY: InitFlag = InitFlag::new();

pub fn is_platform_initialized() -> bool {
    PLATFORM_READY.is_set()
}

fn platform_init(config: &GameConfig) {
    if !PLATFORM_READY.init_once() {
        return;
    }
    idt::init();
    pic::remap();
    pit::init(config.tick_hz);
    pic::enable_line(PIT_IRQ_LINE);
    pic::enable_line(COM1_IRQ_LINE);
    cpu::enable_interrupts();
    klog_info!("BOOT: timer and terminal interrupts live");
}

#[cfg(feature = "builtin-tests")]
fn run_builtin_tests(config: &GameConfig) {
    use croupier_lib::klog_error;
    use croupier_lib::testing::SUITE_ALL;

    if !config.run_tests {
        return;
    }
    let summary = croupier_tests::run_builtin_suites(SUITE_ALL);
    if !summary.all_passed() {
        klog_error!("BOOT: {} builtin test(s) failed", summary.failed);
    }
}

#[cfg(not(feature = "builtin-tests"))]
fn run_builtin_tests(_config: &GameConfig) {}

/// Bring the machine up and run the game. Never returns.
pub fn boot_main() -> ! {
    cpu::disable_interrupts();
    limine_protocol::ensure_base_revision();

    serial::init();
    klog_attach_sink(serial::log_sink);

    let config = GameConfig::from_cmdline(limine_protocol::kernel_cmdline());
    klog_set_level(config.log_level);
    klog_info!(
        "BOOT: tick {} Hz, {} revolutions minimum",
        config.tick_hz,
        config.min_revolutions
    );

    run_builtin_tests(&config);
    platform_init(&config);

    let mut game = GameController::new(
        config,
        &irq::LINE_INPUT,
        &irq::WHEEL_ANIMATOR,
        AnsiTerminal::new(TerminalWriter),
        HardwareEntropy::new(),
        HaltPacer,
    );
    game.run()
}
