//! Game configuration from the kernel command line.
//!
//! Tokens are whitespace separated `key=value` pairs. Unknown keys are
//! ignored and a malformed value leaves the default in place.

use croupier_abi::DENOMINATION_COUNT;
use croupier_lib::KlogLevel;

use crate::animator::MIN_REVOLUTIONS;
use crate::ledger::STARTING_CHIPS;

pub const DEFAULT_TICK_HZ: u32 = 38;
pub const DEFAULT_NOTICE_MS: u32 = 2000;
pub const DEFAULT_RESULT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Allocation at power-on and after a reset.
    pub starting_chips: [u32; DENOMINATION_COUNT],
    pub min_revolutions: u32,
    pub tick_hz: u32,
    /// Pause after an error or status message.
    pub notice_ms: u32,
    /// Pause after the round result.
    pub result_ms: u32,
    pub log_level: KlogLevel,
    pub run_tests: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_revolutions: MIN_REVOLUTIONS,
            tick_hz: DEFAULT_TICK_HZ,
            notice_ms: DEFAULT_NOTICE_MS,
            result_ms: DEFAULT_RESULT_MS,
            log_level: KlogLevel::Info,
            run_tests: false,
        }
    }
}

fn parse_on_off_flag(value: &str, current: bool) -> bool {
    const ON: [&str; 4] = ["on", "true", "yes", "1"];
    const OFF: [&str; 4] = ["off", "false", "no", "0"];
    if ON.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        true
    } else if OFF.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        false
    } else {
        current
    }
}

fn parse_u32(value: &str, current: u32) -> u32 {
    value.parse::<u32>().unwrap_or(current)
}

fn parse_chips(value: &str) -> Option<[u32; DENOMINATION_COUNT]> {
    let mut chips = [0u32; DENOMINATION_COUNT];
    let mut fields = value.split(',');
    for slot in chips.iter_mut() {
        *slot = fields.next()?.trim().parse().ok()?;
    }
    if fields.next().is_some() {
        return None;
    }
    Some(chips)
}

impl GameConfig {
    pub fn from_cmdline(cmdline: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(cmdline) = cmdline else {
            return config;
        };
        for token in cmdline.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            match key {
                "roulette.chips" => {
                    if let Some(chips) = parse_chips(value) {
                        config.starting_chips = chips;
                    }
                }
                "roulette.revolutions" => {
                    config.min_revolutions =
                        parse_u32(value, config.min_revolutions).max(MIN_REVOLUTIONS);
                }
                "roulette.tick_hz" => {
                    let hz = parse_u32(value, config.tick_hz);
                    if hz > 0 {
                        config.tick_hz = hz;
                    }
                }
                "roulette.notice_ms" => config.notice_ms = parse_u32(value, config.notice_ms),
                "roulette.result_ms" => config.result_ms = parse_u32(value, config.result_ms),
                "log" => {
                    if let Some(level) = KlogLevel::from_name(value) {
                        config.log_level = level;
                    }
                }
                "itests" => config.run_tests = parse_on_off_flag(value, config.run_tests),
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cmdline_gives_defaults() {
        assert_eq!(GameConfig::from_cmdline(None), GameConfig::default());
        assert_eq!(GameConfig::from_cmdline(Some("")), GameConfig::default());
    }

    #[test]
    fn tokens_override_defaults() {
        let config = GameConfig::from_cmdline(Some(
            "quiet roulette.revolutions=7 roulette.tick_hz=76 log=debug itests=on \
             roulette.chips=1,0,0,0,0,0,0,5 roulette.result_ms=0",
        ));
        assert_eq!(config.min_revolutions, 7);
        assert_eq!(config.tick_hz, 76);
        assert_eq!(config.log_level, KlogLevel::Debug);
        assert!(config.run_tests);
        assert_eq!(config.starting_chips, [1, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(config.result_ms, 0);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = GameConfig::from_cmdline(Some(
            "roulette.revolutions=0 roulette.tick_hz=fast roulette.chips=1,2,3 log=loud itests=maybe",
        ));
        assert_eq!(config.min_revolutions, MIN_REVOLUTIONS);
        assert_eq!(config.tick_hz, DEFAULT_TICK_HZ);
        assert_eq!(config.starting_chips, STARTING_CHIPS);
        assert_eq!(config.log_level, KlogLevel::Info);
        assert!(!config.run_tests);
    }

    #[test]
    fn short_spin_request_is_raised_to_minimum() {
        let config = GameConfig::from_cmdline(Some("roulette.revolutions=1"));
        assert_eq!(config.min_revolutions, MIN_REVOLUTIONS);

        let animator = crate::animator::SpinAnimator::new();
        animator.arm(0, config.min_revolutions);
        while !animator.is_complete() {
            assert!(animator.tick());
        }
        assert!(animator.revolutions() >= MIN_REVOLUTIONS);
    }
}
