//! Interrupt descriptor table: CPU faults plus the two legacy IRQs the game
//! uses (PIT on line 0, COM1 on line 4).

use croupier_abi::ports::{COM1_IRQ_LINE, PIC1_VECTOR_BASE, PIT_IRQ_LINE};
use croupier_drivers::{irq, pic, serial};
use spin::Once;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame};

pub const TIMER_VECTOR: u8 = PIC1_VECTOR_BASE + PIT_IRQ_LINE;
pub const COM1_VECTOR: u8 = PIC1_VECTOR_BASE + COM1_IRQ_LINE;

static IDT: Once<InterruptDescriptorTable> = Once::new();

extern "x86-interrupt" fn timer_interrupt(_frame: InterruptStackFrame) {
    irq::timer_tick();
    pic::end_of_interrupt(PIT_IRQ_LINE);
}

extern "x86-interrupt" fn com1_interrupt(_frame: InterruptStackFrame) {
    serial::service_rx();
    pic::end_of_interrupt(COM1_IRQ_LINE);
}

extern "x86-interrupt" fn double_fault(frame: InterruptStackFrame, _code: u64) -> ! {
    panic!("double fault at {:#x}", frame.instruction_pointer.as_u64());
}

extern "x86-interrupt" fn general_protection(frame: InterruptStackFrame, code: u64) {
    panic!(
        "general protection fault (code {:#x}) at {:#x}",
        code,
        frame.instruction_pointer.as_u64()
    );
}

extern "x86-interrupt" fn invalid_opcode(frame: InterruptStackFrame) {
    panic!("invalid opcode at {:#x}", frame.instruction_pointer.as_u64());
}

/// Build and load the table. Interrupts stay disabled.
pub fn init() {
    let idt = IDT.call_once(|| {
        let mut idt = InterruptDescriptorTable::new();
        idt.double_fault.set_handler_fn(double_fault);
        idt.general_protection_fault.set_handler_fn(general_protection);
        idt.invalid_opcode.set_handler_fn(invalid_opcode);
        idt[TIMER_VECTOR].set_handler_fn(timer_interrupt);
        idt[COM1_VECTOR].set_handler_fn(com1_interrupt);
        idt
    });
    idt.load();
}
