//! Whole rounds driven through the controller with scripted input.
//!
//! The pacer plays both interrupt producers: it ticks the animator while the
//! wheel runs and otherwise types the next scripted line.

use core::fmt::{self, Write};

use croupier_abi::GameState;
use croupier_core::{
    BoardSnapshot, ChipPanel, EntropySource, GameConfig, GameController, GameDisplay, InputChannel,
    Pacer, SpinAnimator, WheelWindow,
};
use croupier_lib::testing::TestResult;
use croupier_lib::{define_test_suite, fail, pass, testing::SUITE_CONTROLLER};

const MESSAGE_CAPACITY: usize = 96;

/// Keeps the most recent message and a few counters.
struct LastMessage {
    buf: [u8; MESSAGE_CAPACITY],
    len: usize,
    wheel_draws: u32,
    balance: u64,
}

impl LastMessage {
    const fn new() -> Self {
        Self {
            buf: [0; MESSAGE_CAPACITY],
            len: 0,
            wheel_draws: 0,
            balance: 0,
        }
    }

    fn text(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Write for LastMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MESSAGE_CAPACITY - self.len;
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl GameDisplay for LastMessage {
    fn start_screen(&mut self) {}

    fn board(&mut self, _board: &BoardSnapshot) {}

    fn wheel(&mut self, _window: &WheelWindow) {
        self.wheel_draws += 1;
    }

    fn chips(&mut self, panel: &ChipPanel) {
        self.balance = panel.balance;
    }

    fn message(&mut self, text: fmt::Arguments<'_>) {
        self.len = 0;
        let _ = self.write_fmt(text);
    }
}

struct Fixed(u32);

impl EntropySource for Fixed {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

struct Script<'a> {
    input: &'a InputChannel,
    animator: &'a SpinAnimator,
    lines: &'static [&'static str],
    next: usize,
}

impl Pacer for Script<'_> {
    fn relax(&mut self) {
        if self.animator.is_running() {
            self.animator.tick();
            return;
        }
        if self.input.is_ready() {
            return;
        }
        let Some(line) = self.lines.get(self.next) else {
            panic!("controller script exhausted after {} lines", self.next);
        };
        self.next += 1;
        for b in line.bytes() {
            self.input.push_byte(b);
        }
        self.input.push_byte(b'\r');
    }

    fn pause_ms(&mut self, _ms: u32) {}
}

type ScriptedGame<'a> = GameController<'a, LastMessage, Fixed, Script<'a>>;

fn game<'a>(
    input: &'a InputChannel,
    animator: &'a SpinAnimator,
    config: GameConfig,
    landing: u32,
    lines: &'static [&'static str],
) -> ScriptedGame<'a> {
    let script = Script {
        input,
        animator,
        lines,
        next: 0,
    };
    GameController::new(config, input, animator, LastMessage::new(), Fixed(landing), script)
}

fn run_until(game: &mut ScriptedGame<'_>, state: GameState) -> bool {
    (0..64).any(|_| game.step() == state)
}

pub fn test_straight_win_pays_thirty_five_to_one() -> TestResult {
    let input = InputChannel::new();
    let animator = SpinAnimator::new();
    let mut g = game(
        &input,
        &animator,
        GameConfig::default(),
        9,
        &["", "no", "Straight", "17", "25", "2", "done", ""],
    );
    if !run_until(&mut g, GameState::RoundEnd) {
        return fail!("round never ended");
    }
    let balance = g.session().ledger.total_value();
    if balance != 6011 {
        return fail!("balance {} after the win", balance);
    }
    if g.display().text() != "Congratulations! You won $1750!" {
        return fail!("result message {}", g.display().text());
    }
    TestResult::from(g.display().wheel_draws > 190 && g.display().balance == 6011)
}

pub fn test_miss_forfeits_stake() -> TestResult {
    let input = InputChannel::new();
    let animator = SpinAnimator::new();
    let mut g = game(
        &input,
        &animator,
        GameConfig::default(),
        0,
        &["", "no", "Black", "10", "3", "done", ""],
    );
    if !run_until(&mut g, GameState::RoundEnd) {
        return fail!("round never ended");
    }
    if g.display().text() != "Better luck next time! You lost $30." {
        return fail!("result message {}", g.display().text());
    }
    TestResult::from(g.session().ledger.total_value() == 4231)
}

pub fn test_broke_player_resets() -> TestResult {
    let input = InputChannel::new();
    let animator = SpinAnimator::new();
    let config = GameConfig {
        starting_chips: [0, 0, 0, 0, 0, 0, 0, 1],
        ..GameConfig::default()
    };
    let mut g = game(
        &input,
        &animator,
        config,
        0,
        &["", "no", "Red", "1", "1", "done", "", "reset"],
    );
    if !run_until(&mut g, GameState::RoundEnd) {
        return fail!("round never ended");
    }
    if !g.session().ledger.is_broke() {
        return fail!("player still has chips");
    }
    if g.step() != GameState::Init {
        return fail!("reset did not restart the game");
    }
    if g.session().ledger.total_value() != 1 {
        return fail!("reset restored {}", g.session().ledger.total_value());
    }
    pass!()
}

define_test_suite!(
    controller,
    SUITE_CONTROLLER,
    [
        test_straight_win_pays_thirty_five_to_one,
        test_miss_forfeits_stake,
        test_broke_player_resets,
    ]
);
