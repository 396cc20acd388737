//! The game loop.
//!
//! [`GameController`] owns the session and runs one phase per
//! [`step`](GameController::step). A phase prompts through the display,
//! busy-waits on the input channel or the spin animator, validates what it
//! got and reports a [`PhaseOutcome`]; [`transition`] picks the next phase.
//! Resolve and RoundEnd have no wait between them, so RoundEnd always runs
//! right after Resolve.

use core::fmt;

use croupier_abi::{
    BetCategory, BetError, Denomination, GameError, GameState, LedgerError, Position,
};
use croupier_lib::{klog_debug, klog_info, klog_warn};

use crate::animator::SpinAnimator;
use crate::catalog::BetSelection;
use crate::config::GameConfig;
use crate::display::{BoardSnapshot, ChipPanel, GameDisplay, WheelWindow};
use crate::entropy::{spin_target, EntropySource};
use crate::input::{InputChannel, Line};
use crate::ledger::ChipLedger;
use crate::machine::{transition, PhaseOutcome};
use crate::parse::{parse_amount, parse_quantity};
use crate::platform::Pacer;
use crate::session::{GameSession, SpinOutcome};

const INVALID_CHIP: &str = "Invalid chip value! Please enter a valid chip value.";

/// Writes a name in lower case without allocating.
struct Lowercase(&'static str);

impl fmt::Display for Lowercase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.0
            .chars()
            .try_for_each(|c| f.write_char(c.to_ascii_lowercase()))
    }
}

pub struct GameController<'a, D, E, P> {
    session: GameSession,
    config: GameConfig,
    input: &'a InputChannel,
    animator: &'a SpinAnimator,
    display: D,
    entropy: E,
    pacer: P,
    dropped_seen: u32,
}

impl<'a, D, E, P> GameController<'a, D, E, P>
where
    D: GameDisplay,
    E: EntropySource,
    P: Pacer,
{
    pub fn new(
        config: GameConfig,
        input: &'a InputChannel,
        animator: &'a SpinAnimator,
        display: D,
        entropy: E,
        pacer: P,
    ) -> Self {
        Self {
            session: GameSession::new(config.starting_chips),
            config,
            input,
            animator,
            display,
            entropy,
            pacer,
            dropped_seen: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        &mut self.pacer
    }

    /// Run the current phase and move to the next one.
    pub fn step(&mut self) -> GameState {
        let state = self.session.state;
        let outcome = match state {
            GameState::Init => self.init(),
            GameState::TradeIn => self.trade_in(),
            GameState::SelectBetType => self.select_bet_type(),
            GameState::UpdateBoard => self.update_board(),
            GameState::PlaceBets => self.place_bets(),
            GameState::Spin => self.spin(),
            GameState::Resolve => self.resolve(),
            GameState::RoundEnd => self.round_end(),
        };
        let next = transition(state, outcome);
        if next != state {
            klog_debug!("GAME: {} -> {} ({:?})", state, next, outcome);
        }
        self.session.state = next;
        next
    }

    pub fn run(&mut self) -> ! {
        klog_info!(
            "GAME: starting with ${} in chips",
            self.session.ledger.total_value()
        );
        loop {
            self.step();
        }
    }

    fn wait_line(&mut self) -> Line {
        loop {
            if let Some(line) = self.input.take_line() {
                let dropped = self.input.dropped_lines();
                if dropped != self.dropped_seen {
                    klog_warn!("INPUT: {} line(s) dropped while busy", dropped - self.dropped_seen);
                    self.dropped_seen = dropped;
                }
                return line;
            }
            self.pacer.relax();
        }
    }

    fn ask(&mut self, prompt: fmt::Arguments<'_>) -> Line {
        self.display.message(prompt);
        self.wait_line()
    }

    fn notice(&mut self, text: fmt::Arguments<'_>) {
        self.display.message(text);
        self.pacer.pause_ms(self.config.notice_ms);
    }

    fn reject(&mut self, why: &str) -> PhaseOutcome {
        klog_debug!("GAME: rejected input in {}: {}", self.session.state, why);
        self.notice(format_args!("{}", why));
        PhaseOutcome::Retry
    }

    fn reject_error<T: GameError>(&mut self, err: T) -> PhaseOutcome {
        klog_debug!(
            "GAME: rejected input in {}: {} (code {})",
            self.session.state,
            err,
            err.code()
        );
        self.notice(format_args!("{}", err));
        PhaseOutcome::Retry
    }

    fn refresh_chips(&mut self) {
        let panel = ChipPanel::new(&self.session.ledger, self.session.bet_on_table());
        self.display.chips(&panel);
    }

    fn draw_wheel_at(&mut self, index: u8) {
        self.display.wheel(&WheelWindow::centered(index as usize));
    }

    fn init(&mut self) -> PhaseOutcome {
        self.display.start_screen();
        self.draw_wheel_at(self.animator.position());
        self.display.board(&BoardSnapshot::plain());
        self.refresh_chips();
        self.ask(format_args!("Welcome to Roulette! Press Enter to begin."));
        self.notice(format_args!("Starting game..."));
        PhaseOutcome::Advance
    }

    fn trade_in(&mut self) -> PhaseOutcome {
        let answer = self.ask(format_args!("Trade in chips? (yes/no) --> "));
        if !answer.is_word("yes") {
            return PhaseOutcome::Advance;
        }
        if !self.session.ledger.has_tradable_chips() {
            self.notice(format_args!(
                "You have no chips above ${} to trade in!",
                Denomination::LOWEST.face()
            ));
            return PhaseOutcome::Advance;
        }
        self.trade_dialog();
        PhaseOutcome::Retry
    }

    /// Ask which chip to break down. A blank line or "no" backs out.
    fn ask_trade_in_chip(&mut self) -> Option<Denomination> {
        loop {
            let line = self.ask(format_args!("Enter chip value to trade in --> "));
            if line.is_blank() || line.is_word("no") {
                return None;
            }
            let Ok(face) = parse_amount(line.text()) else {
                self.notice(format_args!("{}", INVALID_CHIP));
                continue;
            };
            if face == Denomination::LOWEST.face() {
                self.notice(format_args!(
                    "Cannot trade in ${} chips! Please enter a higher chip value.",
                    face
                ));
                continue;
            }
            let Ok(denomination) = ChipLedger::lookup(face) else {
                self.notice(format_args!("{}", INVALID_CHIP));
                continue;
            };
            if self.session.ledger.count(denomination) == 0 {
                self.notice(format_args!(
                    "You are out of ${} chips! Please enter a different chip value.",
                    face
                ));
                continue;
            }
            return Some(denomination);
        }
    }

    fn ask_trade_in_count(&mut self, from: Denomination) -> u32 {
        loop {
            let line = self.ask(format_args!(
                "Enter quantity of ${} chips to trade in --> ",
                from.face()
            ));
            match parse_quantity(line.text()) {
                Err(err) => self.notice(format_args!("{}", err)),
                Ok(count) if count > self.session.ledger.count(from) => self.notice(format_args!(
                    "Not enough chips to trade in! Please enter a lower quantity."
                )),
                Ok(count) => return count,
            }
        }
    }

    /// Walk the player through one exchange of chips for smaller ones.
    fn trade_dialog(&mut self) {
        let Some(from) = self.ask_trade_in_chip() else {
            return;
        };
        let count = self.ask_trade_in_count(from);
        let (to_face, received) = loop {
            let line = self.ask(format_args!("Enter chip value you want in return --> "));
            let Ok(face) = parse_amount(line.text()) else {
                self.notice(format_args!("{}", INVALID_CHIP));
                continue;
            };
            if face >= from.face() {
                self.notice(format_args!(
                    "Chip value must be lower than trade-in chip value! Try again."
                ));
                continue;
            }
            match self.session.ledger.trade(from.face(), count, face) {
                Ok(received) => break (face, received),
                Err(LedgerError::UnknownDenomination) => {
                    self.notice(format_args!("{}", INVALID_CHIP));
                }
                Err(LedgerError::InvalidExchange) => self.notice(format_args!(
                    "Trade-in value must be divisible by the desired value! Try again."
                )),
                Err(LedgerError::InsufficientChips) => {
                    self.notice(format_args!("{}", LedgerError::InsufficientChips));
                    return;
                }
            }
        };

        klog_info!(
            "LEDGER: traded {} x ${} for {} x ${}",
            count,
            from.face(),
            received,
            to_face
        );
        self.refresh_chips();
        self.display.message(format_args!(
            "Trade in complete! You traded {} ${} chips for {} ${} chips.",
            count,
            from.face(),
            received,
            to_face
        ));
        self.pacer.pause_ms(self.config.notice_ms.saturating_mul(2));
    }

    fn select_bet_type(&mut self) -> PhaseOutcome {
        let line = self.ask(format_args!("Choose your bet type (from above) --> "));
        let Some(category) = BetCategory::from_name(line.text()) else {
            return self.reject_error(BetError::UnknownCategory);
        };

        let selection = if category == BetCategory::Straight {
            let line = self.ask(format_args!("Enter number (00-36) --> "));
            match Position::parse(line.text()) {
                Some(position) => BetSelection::straight(position),
                None => return self.reject_error(BetError::InvalidNumber),
            }
        } else if category.is_indexed() {
            let line = self.ask(format_args!(
                "Enter {} number (refer to user manual or table) --> ",
                Lowercase(category.name())
            ));
            let parsed = parse_amount(line.text())
                .map_err(|_| BetError::InvalidRowIndex)
                .and_then(|n| BetSelection::from_table_number(category, n));
            match parsed {
                Ok(selection) => selection,
                Err(err) => return self.reject_error(err),
            }
        } else {
            BetSelection::single(category)
        };

        match self.session.select(selection) {
            Ok(()) => {
                klog_debug!(
                    "BET: {} row {:?} covers {} pocket(s)",
                    category,
                    selection.row,
                    self.session.winning.len()
                );
                PhaseOutcome::Advance
            }
            Err(err) => self.reject_error(err),
        }
    }

    fn update_board(&mut self) -> PhaseOutcome {
        let board = BoardSnapshot::new(&self.session.winning);
        self.display.board(&board);
        PhaseOutcome::Advance
    }

    fn place_bets(&mut self) -> PhaseOutcome {
        self.refresh_chips();
        let line = self.ask(format_args!("Enter chip value to bet or 'done' --> "));
        if line.is_word("done") {
            if self.session.pending.is_empty() {
                self.notice(format_args!("You must bet before spinning the wheel!"));
                return PhaseOutcome::Retry;
            }
            let stake = self.session.commit_stake();
            klog_info!("BET: ${} on {:?}", stake, self.session.selection);
            return PhaseOutcome::Advance;
        }

        let Ok(face) = parse_amount(line.text()) else {
            return self.reject(INVALID_CHIP);
        };
        if ChipLedger::lookup(face).is_err() {
            return self.reject(INVALID_CHIP);
        }

        let line = self.ask(format_args!("Enter quantity of chips --> "));
        let count = match parse_quantity(line.text()) {
            Ok(count) => count,
            Err(err) => return self.reject_error(err),
        };
        match self.session.place(face, count) {
            Ok(_) => {}
            Err(LedgerError::InsufficientChips) => {
                return self.reject(
                    "Not enough chips! Please enter a lower quantity or different value.",
                );
            }
            Err(err) => return self.reject_error(err),
        }
        PhaseOutcome::Retry
    }

    fn spin(&mut self) -> PhaseOutcome {
        self.ask(format_args!("Press Enter to spin the wheel..."));
        self.display.message(format_args!("Spinning..."));

        let target = spin_target(&mut self.entropy);
        klog_debug!("SPIN: target wheel index {}", target);
        self.animator.arm(target, self.config.min_revolutions);
        self.wait_spin();

        self.session.outcome = Some(SpinOutcome::new(self.animator.position()));
        PhaseOutcome::Advance
    }

    /// Redraw the wheel whenever the pointer moves until the animator stops.
    fn wait_spin(&mut self) {
        let mut drawn = None;
        loop {
            let position = self.animator.position();
            if drawn != Some(position) {
                self.draw_wheel_at(position);
                drawn = Some(position);
            }
            if self.animator.is_complete() {
                break;
            }
            self.pacer.relax();
        }
        let position = self.animator.position();
        if drawn != Some(position) {
            self.draw_wheel_at(position);
        }
    }

    fn resolve(&mut self) -> PhaseOutcome {
        // The wheel's resting pocket decides the round if no spin recorded one.
        let outcome = self.session.outcome.unwrap_or_else(|| {
            klog_warn!("GAME: resolve without a spin outcome, using resting pocket");
            SpinOutcome::new(self.animator.position())
        });
        let result = self.session.settle(outcome);
        klog_info!(
            "ROUND: landed {} stake ${} payout ${} balance ${}",
            result.landed,
            result.stake,
            result.payout,
            self.session.ledger.total_value()
        );

        self.display.board(&BoardSnapshot::plain());
        self.refresh_chips();
        if result.won() {
            self.display.message(format_args!(
                "Congratulations! You won ${}!",
                result.net_gain()
            ));
        } else {
            self.display.message(format_args!(
                "Better luck next time! You lost ${}.",
                result.stake
            ));
        }
        self.pacer.pause_ms(self.config.result_ms);
        PhaseOutcome::Advance
    }

    fn round_end(&mut self) -> PhaseOutcome {
        self.session.clear_round();
        if !self.session.ledger.is_broke() {
            return PhaseOutcome::Advance;
        }

        let line = self.ask(format_args!(
            "You are out of chips! Type 'reset' to start over --> "
        ));
        if !line.is_word("reset") {
            self.notice(format_args!("Invalid input! Type 'reset' to start over."));
            return PhaseOutcome::Retry;
        }
        self.session.reset(self.config.starting_chips);
        klog_info!(
            "LEDGER: reset to ${}",
            self.session.ledger.total_value()
        );
        self.refresh_chips();
        PhaseOutcome::Reset
    }
}
