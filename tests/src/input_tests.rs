use croupier_core::input::MAX_LINE_LEN;
use croupier_core::{InputChannel, LineEvent};
use croupier_lib::testing::TestResult;
use croupier_lib::{define_test_suite, fail, pass, testing::SUITE_INPUT};

fn type_line(channel: &InputChannel, text: &[u8]) -> LineEvent {
    let mut last = LineEvent::Ignored;
    for &b in text {
        last = channel.push_byte(b);
    }
    last
}

pub fn test_line_published_on_enter() -> TestResult {
    let channel = InputChannel::new();
    type_line(&channel, b"yes");
    if channel.is_ready() {
        return fail!("line published before Enter");
    }
    if type_line(&channel, b"\r") != LineEvent::Completed {
        return fail!("Enter did not complete the line");
    }
    match channel.take_line() {
        Some(line) if line.text() == "yes" => TestResult::from(!channel.is_ready()),
        other => fail!("took {:?}", other),
    }
}

pub fn test_backspace_edits() -> TestResult {
    let channel = InputChannel::new();
    type_line(&channel, b"nx\x08o\r");
    TestResult::from(channel.take_line().map(|l| l.is_word("no")) == Some(true))
}

pub fn test_long_line_truncates() -> TestResult {
    let channel = InputChannel::new();
    for _ in 0..MAX_LINE_LEN + 6 {
        channel.push_byte(b'7');
    }
    channel.push_byte(b'\r');
    match channel.take_line() {
        Some(line) => TestResult::from(line.as_bytes().len() == MAX_LINE_LEN),
        None => fail!("no line"),
    }
}

pub fn test_unread_line_drops_next() -> TestResult {
    let channel = InputChannel::new();
    type_line(&channel, b"first\r");
    if type_line(&channel, b"second\r") != LineEvent::Dropped {
        return fail!("second line overwrote the first");
    }
    if channel.dropped_lines() != 1 {
        return fail!("dropped {}", channel.dropped_lines());
    }
    match channel.take_line() {
        Some(line) if line.text() == "first" => pass!(),
        other => fail!("took {:?}", other),
    }
}

define_test_suite!(
    input,
    SUITE_INPUT,
    [
        test_line_published_on_enter,
        test_backspace_edits,
        test_long_line_truncates,
        test_unread_line_drops_next,
    ]
);
