//! Line-buffered input handed from an interrupt producer to the game loop.
//!
//! The producer (serial receive interrupt, or a reader thread on a hosted
//! build) feeds bytes through [`InputChannel::push_byte`]. It edits a private
//! line and, on a terminator, publishes it into the completed-line slot and
//! raises the ready flag. The game loop polls [`InputChannel::take_line`],
//! which copies the line out and clears the flag.
//!
//! The slot has exactly one writer at a time: the producer writes it only
//! while the flag is clear, the consumer reads it only while the flag is set.
//! A line completed while the previous one is still unread is dropped.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use spin::Mutex;

/// Size of the line buffer, terminator included.
pub const LINE_CAPACITY: usize = 20;
/// Longest line the player can type.
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// What the producer should echo after feeding a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// Byte was appended; echo it.
    Echo(u8),
    /// Last byte was removed; erase it on screen.
    Erase,
    /// Line was published to the game loop.
    Completed,
    /// Line was discarded because the previous one is still unread.
    Dropped,
    /// Nothing changed.
    Ignored,
}

/// A completed line, copied out of the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    bytes: [u8; MAX_LINE_LEN],
    len: usize,
}

impl Line {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Text with surrounding blanks removed.
    pub fn text(&self) -> &str {
        core::str::from_utf8(self.as_bytes())
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }

    /// Case-insensitive comparison against a keyword such as "yes" or "done".
    pub fn is_word(&self, word: &str) -> bool {
        self.text().eq_ignore_ascii_case(word)
    }
}

struct EditLine {
    bytes: [u8; MAX_LINE_LEN],
    len: usize,
    after_cr: bool,
}

impl EditLine {
    const fn new() -> Self {
        Self {
            bytes: [0; MAX_LINE_LEN],
            len: 0,
            after_cr: false,
        }
    }
}

#[inline]
fn is_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

pub struct InputChannel {
    // Locked only by the producer; never contended with the game loop.
    edit: Mutex<EditLine>,
    slot: UnsafeCell<[u8; MAX_LINE_LEN]>,
    slot_len: AtomicUsize,
    ready: AtomicBool,
    dropped: AtomicU32,
}

// SAFETY: `slot` is written only by the producer while `ready` is clear and
// read only by the consumer while `ready` is set. The Release store of
// `ready` orders the slot writes before the consumer's Acquire load, and the
// consumer's Release clear orders its reads before the next producer write.
unsafe impl Sync for InputChannel {}

impl InputChannel {
    pub const fn new() -> Self {
        Self {
            edit: Mutex::new(EditLine::new()),
            slot: UnsafeCell::new([0; MAX_LINE_LEN]),
            slot_len: AtomicUsize::new(0),
            ready: AtomicBool::new(false),
            dropped: AtomicU32::new(0),
        }
    }

    /// Producer side: feed one received byte.
    pub fn push_byte(&self, byte: u8) -> LineEvent {
        let mut edit = self.edit.lock();
        let after_cr = core::mem::replace(&mut edit.after_cr, byte == b'\r');
        match byte {
            b'\n' if after_cr => LineEvent::Ignored,
            b'\r' | b'\n' => {
                let event = self.publish(&edit.bytes[..edit.len]);
                edit.len = 0;
                event
            }
            BACKSPACE | DELETE => {
                if edit.len == 0 {
                    return LineEvent::Ignored;
                }
                edit.len -= 1;
                LineEvent::Erase
            }
            b if is_printable(b) => {
                if edit.len >= MAX_LINE_LEN {
                    return LineEvent::Ignored;
                }
                let at = edit.len;
                edit.bytes[at] = b;
                edit.len += 1;
                LineEvent::Echo(b)
            }
            _ => LineEvent::Ignored,
        }
    }

    fn publish(&self, line: &[u8]) -> LineEvent {
        if self.ready.load(Ordering::Acquire) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return LineEvent::Dropped;
        }
        // SAFETY: `ready` is clear, so the consumer is not reading the slot.
        let slot = unsafe { &mut *self.slot.get() };
        slot[..line.len()].copy_from_slice(line);
        self.slot_len.store(line.len(), Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
        LineEvent::Completed
    }

    /// Consumer side: take the completed line if there is one.
    pub fn take_line(&self) -> Option<Line> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }
        let len = self.slot_len.load(Ordering::Relaxed).min(MAX_LINE_LEN);
        let mut line = Line {
            bytes: [0; MAX_LINE_LEN],
            len,
        };
        // SAFETY: `ready` is set, so the producer is not writing the slot.
        let slot = unsafe { &*self.slot.get() };
        line.bytes[..len].copy_from_slice(&slot[..len]);
        self.ready.store(false, Ordering::Release);
        Some(line)
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Lines lost because the game loop had not read the previous one.
    pub fn dropped_lines(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for InputChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(channel: &InputChannel, text: &str) {
        for b in text.bytes() {
            channel.push_byte(b);
        }
    }

    #[test]
    fn line_is_published_on_terminator() {
        let channel = InputChannel::new();
        feed(&channel, "yes");
        assert!(channel.take_line().is_none());
        assert_eq!(channel.push_byte(b'\r'), LineEvent::Completed);
        let line = channel.take_line().expect("line ready");
        assert_eq!(line.text(), "yes");
        assert!(channel.take_line().is_none());
    }

    #[test]
    fn backspace_edits_the_line() {
        let channel = InputChannel::new();
        assert_eq!(channel.push_byte(BACKSPACE), LineEvent::Ignored);
        feed(&channel, "dome");
        assert_eq!(channel.push_byte(DELETE), LineEvent::Erase);
        assert_eq!(channel.push_byte(BACKSPACE), LineEvent::Erase);
        feed(&channel, "ne\n");
        assert_eq!(channel.take_line().map(|l| l.is_word("done")), Some(true));
    }

    #[test]
    fn overflow_is_truncated() {
        let channel = InputChannel::new();
        feed(&channel, "abcdefghijklmnopqrstuvwxyz\r");
        let line = channel.take_line().expect("line ready");
        assert_eq!(line.as_bytes().len(), MAX_LINE_LEN);
        assert_eq!(line.text(), "abcdefghijklmnopqrs");
    }

    #[test]
    fn crlf_counts_as_one_line() {
        let channel = InputChannel::new();
        feed(&channel, "\r\n");
        assert!(channel.take_line().map(|l| l.is_blank()).unwrap_or(false));
        assert_eq!(channel.push_byte(b'\n'), LineEvent::Completed);
        assert!(channel.take_line().is_some());
    }

    #[test]
    fn unread_line_is_not_overwritten() {
        let channel = InputChannel::new();
        feed(&channel, "first\r");
        assert_eq!(channel.push_byte(b'x'), LineEvent::Echo(b'x'));
        assert_eq!(channel.push_byte(b'\r'), LineEvent::Dropped);
        assert_eq!(channel.dropped_lines(), 1);
        assert_eq!(channel.take_line().map(|l| l.text() == "first"), Some(true));
    }

    #[test]
    fn control_bytes_are_ignored() {
        let channel = InputChannel::new();
        assert_eq!(channel.push_byte(0x1B), LineEvent::Ignored);
        assert_eq!(channel.push_byte(b'\t'), LineEvent::Ignored);
        feed(&channel, "7\r");
        assert_eq!(channel.take_line().map(|l| l.text() == "7"), Some(true));
    }
}
