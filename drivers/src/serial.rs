//! COM1 game terminal and COM2 kernel log.
//!
//! Both ports sit behind an [`IrqMutex`] so the receive interrupt's echo
//! cannot interleave with a half-drawn screen update.

use core::fmt::{self, Write};

use croupier_abi::ports::{Port as PortAddr, UART_LSR_DATA_READY, UART_REG_LSR};
use croupier_lib::IrqMutex;
use uart_16550::SerialPort;
use x86_64::instructions::port::Port;

use crate::irq;

const REG_IER: u16 = 1;
const IER_RX_AVAILABLE: u8 = 0x01;

static TERMINAL: IrqMutex<Option<SerialPort>> = IrqMutex::new(None);
static LOG: IrqMutex<Option<SerialPort>> = IrqMutex::new(None);

fn open(base: PortAddr) -> SerialPort {
    // SAFETY: `base` is a standard COM port owned by this module.
    let mut port = unsafe { SerialPort::new(base.number()) };
    port.init();
    port
}

/// Bring up both ports and enable the terminal's receive interrupt.
pub fn init() {
    *TERMINAL.lock() = Some(open(PortAddr::COM1));
    *LOG.lock() = Some(open(PortAddr::COM2));

    let mut ier: Port<u8> = Port::new(PortAddr::COM1.offset(REG_IER).number());
    // SAFETY: enabling the data-available interrupt on the port opened above.
    unsafe { ier.write(IER_RX_AVAILABLE) };
}

pub fn print_args(args: fmt::Arguments<'_>) {
    if let Some(port) = TERMINAL.lock().as_mut() {
        let _ = port.write_fmt(args);
    }
}

pub fn write_str(s: &str) {
    if let Some(port) = TERMINAL.lock().as_mut() {
        let _ = port.write_str(s);
    }
}

fn send_bytes(port: &IrqMutex<Option<SerialPort>>, bytes: &[u8]) {
    if let Some(port) = port.lock().as_mut() {
        for &b in bytes {
            port.send(b);
        }
    }
}

/// klog sink writing to COM2.
pub fn log_sink(bytes: &[u8]) {
    send_bytes(&LOG, bytes);
}

/// `fmt::Write` handle on the game terminal, for the screen renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalWriter;

impl Write for TerminalWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_str(s);
        Ok(())
    }
}

/// COM1 receive interrupt body: drain the receive FIFO into the line input.
pub fn service_rx() {
    let mut lsr: Port<u8> = Port::new(PortAddr::COM1.offset(UART_REG_LSR).number());
    let mut terminal = TERMINAL.lock();
    let Some(port) = terminal.as_mut() else {
        return;
    };
    // SAFETY: reading the line status register has no side effects.
    while unsafe { lsr.read() } & UART_LSR_DATA_READY != 0 {
        let byte = port.receive();
        // Echo bytes are complete terminal sequences; `send` would expand
        // the backspace in them a second time.
        irq::receive_byte(&irq::LINE_INPUT, byte, |echo| {
            for &b in echo {
                port.send_raw(b);
            }
        });
    }
}

#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {{
        $crate::serial::print_args(core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! serial_println {
    () => {
        $crate::serial::write_str("\r\n");
    };
    ($fmt:expr) => {
        $crate::serial::write_str(concat!($fmt, "\r\n"));
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::serial::print_args(core::format_args!(concat!($fmt, "\r\n"), $($arg)*));
    };
}
