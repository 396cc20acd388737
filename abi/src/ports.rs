//! x86 I/O port addresses used by the game machine.

/// x86 I/O port address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Port(pub u16);

impl Port {
    /// Game terminal.
    pub const COM1: Self = Self(0x3F8);
    /// Kernel log.
    pub const COM2: Self = Self(0x2F8);

    /// PIT channel 0 data port.
    pub const PIT_CHANNEL0: Self = Self(0x40);
    /// PIT command/mode register.
    pub const PIT_COMMAND: Self = Self(0x43);

    pub const PIC1_COMMAND: Self = Self(0x20);
    pub const PIC1_DATA: Self = Self(0x21);
    pub const PIC2_COMMAND: Self = Self(0xA0);
    pub const PIC2_DATA: Self = Self(0xA1);

    /// Unused port written to for short I/O delays.
    pub const IO_WAIT: Self = Self(0x80);

    #[inline]
    pub const fn number(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn offset(self, off: u16) -> Self {
        Self(self.0 + off)
    }
}

/// Line Status Register offset.
pub const UART_REG_LSR: u16 = 5;
/// Data ready to read (LSR).
pub const UART_LSR_DATA_READY: u8 = 0x01;

/// PIT base oscillator frequency (Hz).
pub const PIT_BASE_FREQUENCY_HZ: u32 = 1_193_182;
pub const PIT_COMMAND_CHANNEL0: u8 = 0x00;
pub const PIT_COMMAND_ACCESS_LOHI: u8 = 0x30;
pub const PIT_COMMAND_MODE_RATE: u8 = 0x04;
pub const PIT_COMMAND_BINARY: u8 = 0x00;

/// Legacy IRQ lines.
pub const PIT_IRQ_LINE: u8 = 0;
pub const COM1_IRQ_LINE: u8 = 4;

/// Vector the master PIC is remapped to.
pub const PIC1_VECTOR_BASE: u8 = 32;
pub const PIC2_VECTOR_BASE: u8 = 40;

pub const PIC_ICW1_INIT: u8 = 0x11;
pub const PIC_ICW4_8086: u8 = 0x01;
/// End of Interrupt command.
pub const PIC_EOI: u8 = 0x20;
