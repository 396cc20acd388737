//! Terminal build: stdin and a ticker thread play the two interrupts.
//!
//! Options use the boot command line syntax, one token per argument:
//! `kernel roulette.revolutions=7 log=debug`.

use std::fmt;
use std::io::{self, Read, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use croupier_core::{GameConfig, GameController, InputChannel, Pacer, SpinAnimator, Xorshift64};
use croupier_lib::{klog_attach_sink, klog_info, klog_set_level, klog_warn};
use croupier_video::AnsiTerminal;

static LINE_INPUT: InputChannel = InputChannel::new();
static WHEEL_ANIMATOR: SpinAnimator = SpinAnimator::new();

/// How often the game loop re-checks its wait condition.
const RELAX_INTERVAL: Duration = Duration::from_millis(2);

fn stderr_sink(bytes: &[u8]) {
    let _ = io::stderr().write_all(bytes);
}

struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|_| fmt::Error)
    }
}

struct SleepPacer;

impl Pacer for SleepPacer {
    fn relax(&mut self) {
        thread::sleep(RELAX_INTERVAL);
    }

    fn pause_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

fn spawn_reader() {
    thread::spawn(|| {
        for byte in io::stdin().lock().bytes() {
            match byte {
                Ok(b) => {
                    LINE_INPUT.push_byte(b);
                }
                Err(e) => {
                    klog_warn!("HOST: stdin error: {}", e);
                    break;
                }
            }
        }
        klog_info!("HOST: stdin closed, leaving the table");
        std::process::exit(0);
    });
}

fn spawn_ticker(tick_hz: u32) {
    let period = Duration::from_micros(1_000_000 / u64::from(tick_hz.max(1)));
    thread::spawn(move || {
        loop {
            thread::sleep(period);
            WHEEL_ANIMATOR.tick();
        }
    });
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(feature = "builtin-tests")]
fn run_builtin_tests(config: &GameConfig) {
    if config.run_tests {
        let summary = croupier_tests::run_builtin_suites(croupier_lib::testing::SUITE_ALL);
        if !summary.all_passed() {
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "builtin-tests"))]
fn run_builtin_tests(_config: &GameConfig) {}

pub fn run() -> ! {
    let cmdline = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let config = GameConfig::from_cmdline(Some(&cmdline));
    klog_set_level(config.log_level);
    klog_attach_sink(stderr_sink);

    run_builtin_tests(&config);

    spawn_reader();
    spawn_ticker(config.tick_hz);

    let mut game = GameController::new(
        config,
        &LINE_INPUT,
        &WHEEL_ANIMATOR,
        AnsiTerminal::new(Stdout),
        Xorshift64::with_seed(clock_seed()),
        SleepPacer,
    );
    game.run()
}
