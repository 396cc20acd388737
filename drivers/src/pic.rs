//! Legacy 8259 PIC pair, remapped above the CPU exception vectors.

use croupier_abi::ports::{
    PIC_EOI, PIC_ICW1_INIT, PIC_ICW4_8086, PIC1_VECTOR_BASE, PIC2_VECTOR_BASE, Port as PortAddr,
};
use x86_64::instructions::port::Port;

const CASCADE_LINE: u8 = 2;

#[inline]
fn io_wait() {
    let mut port: Port<u8> = Port::new(PortAddr::IO_WAIT.number());
    // SAFETY: port 0x80 is the POST diagnostic port; writes only delay.
    unsafe { port.write(0) };
}

#[inline]
fn write(addr: PortAddr, value: u8) {
    let mut port: Port<u8> = Port::new(addr.number());
    // SAFETY: PIC ports are owned by this module.
    unsafe { port.write(value) };
    io_wait();
}

/// Remap both PICs to `PIC1_VECTOR_BASE`/`PIC2_VECTOR_BASE` with every
/// line masked.
pub fn remap() {
    write(PortAddr::PIC1_COMMAND, PIC_ICW1_INIT);
    write(PortAddr::PIC2_COMMAND, PIC_ICW1_INIT);
    write(PortAddr::PIC1_DATA, PIC1_VECTOR_BASE);
    write(PortAddr::PIC2_DATA, PIC2_VECTOR_BASE);
    write(PortAddr::PIC1_DATA, 1 << CASCADE_LINE);
    write(PortAddr::PIC2_DATA, CASCADE_LINE);
    write(PortAddr::PIC1_DATA, PIC_ICW4_8086);
    write(PortAddr::PIC2_DATA, PIC_ICW4_8086);
    mask_all();
}

pub fn mask_all() {
    write(PortAddr::PIC1_DATA, 0xFF);
    write(PortAddr::PIC2_DATA, 0xFF);
}

/// Unmask a master-PIC line (0..8).
pub fn enable_line(line: u8) {
    let mut data: Port<u8> = Port::new(PortAddr::PIC1_DATA.number());
    // SAFETY: read-modify-write of the master mask register.
    unsafe {
        let mask = data.read();
        data.write(mask & !(1 << (line & 7)));
    }
}

/// Acknowledge `line`; lines 8 and up also need the slave acknowledged.
pub fn end_of_interrupt(line: u8) {
    if line >= 8 {
        write(PortAddr::PIC2_COMMAND, PIC_EOI);
    }
    write(PortAddr::PIC1_COMMAND, PIC_EOI);
}
