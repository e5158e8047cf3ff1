/*
 * Copyright (C) 2022-2025 by Christian Fischer
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

mod common;

use dmg_core::cpu::cpu::{CpuFlag, RegisterR8};
use dmg_core::cpu::interrupts::Interrupt;
use dmg_core::mmu::locations::{MEMORY_LOCATION_IE, MEMORY_LOCATION_IF};

use common::{create_device_with_program, PROGRAM_START};


#[test]
fn conditional_relative_jumps_cost_depends_on_the_branch() {
    // JR NZ, +2 with the zero flag set: not taken
    let mut emulator = create_device_with_program(&[0x20, 0x02]);
    emulator.cpu.set_flag(CpuFlag::Zero, true);

    let cycles = emulator.step();

    assert_eq!(8, cycles);
    assert_eq!(PROGRAM_START + 2, emulator.cpu.get_instruction_pointer());

    // JR NZ, +2 with the zero flag cleared: taken
    let mut emulator = create_device_with_program(&[0x20, 0x02]);
    emulator.cpu.set_flag(CpuFlag::Zero, false);

    let cycles = emulator.step();

    assert_eq!(12, cycles);
    assert_eq!(PROGRAM_START + 4, emulator.cpu.get_instruction_pointer());
}


#[test]
fn relative_jumps_accept_negative_offsets() {
    let mut emulator = create_device_with_program(&[0x18, 0xfe]);    // JR -2
    let cycles = emulator.step();

    assert_eq!(12, cycles);
    assert_eq!(PROGRAM_START, emulator.cpu.get_instruction_pointer());
}


#[test]
fn absolute_jumps() {
    let mut emulator = create_device_with_program(&[0xc3, 0x00, 0x20]);  // JP 0x2000
    let cycles = emulator.step();

    assert_eq!(16,     cycles);
    assert_eq!(0x2000, emulator.cpu.get_instruction_pointer());

    // JP Z with the zero flag cleared: not taken
    let mut emulator = create_device_with_program(&[0xca, 0x00, 0x20]);  // JP Z, 0x2000
    emulator.cpu.set_flag(CpuFlag::Zero, false);

    let cycles = emulator.step();

    assert_eq!(12, cycles);
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
}


#[test]
fn jump_to_the_address_in_hl() {
    let mut emulator = create_device_with_program(&[0xe9]);          // JP HL
    emulator.cpu.set_r16(dmg_core::cpu::cpu::RegisterR16::HL, 0x4321);

    let cycles = emulator.step();

    assert_eq!(4,      cycles);
    assert_eq!(0x4321, emulator.cpu.get_instruction_pointer());
}


#[test]
fn call_pushes_the_return_address() {
    let mut emulator = create_device_with_program(&[0xcd, 0x00, 0x30]);  // CALL 0x3000
    let sp_before = emulator.cpu.get_stack_pointer();

    let cycles = emulator.step();

    assert_eq!(24,     cycles);
    assert_eq!(0x3000, emulator.cpu.get_instruction_pointer());
    assert_eq!(sp_before - 2, emulator.cpu.get_stack_pointer());

    // the pushed return address points behind the CALL instruction
    let return_address = emulator.get_mmu().read_u16(emulator.cpu.get_stack_pointer());
    assert_eq!(PROGRAM_START + 3, return_address);

    // an untaken conditional call advances without touching the stack
    let mut emulator = create_device_with_program(&[0xc4, 0x00, 0x30]);  // CALL NZ, 0x3000
    emulator.cpu.set_flag(CpuFlag::Zero, true);
    let sp_before = emulator.cpu.get_stack_pointer();

    let cycles = emulator.step();

    assert_eq!(12, cycles);
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
    assert_eq!(sp_before, emulator.cpu.get_stack_pointer());
}


#[test]
fn ret_returns_to_the_pushed_address() {
    // CALL 0x3000, then a RET placed at the call target
    let mut emulator = create_device_with_program(&[0xcd, 0x00, 0x30]);
    emulator.get_mmu_mut().write_u8(0x3000, 0xc9);                   // RET

    emulator.step();
    let cycles = emulator.step();

    assert_eq!(16, cycles);
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
}


#[test]
fn conditional_returns_cost_depends_on_the_branch() {
    let mut emulator = create_device_with_program(&[0xcd, 0x00, 0x30]);  // CALL 0x3000
    emulator.get_mmu_mut().write_u8(0x3000, 0xd8);                   // RET C
    emulator.get_mmu_mut().write_u8(0x3001, 0xd8);                   // RET C

    emulator.step();

    // not taken with the carry flag cleared
    emulator.cpu.set_flag(CpuFlag::Carry, false);
    let cycles = emulator.step();
    assert_eq!(8, cycles);
    assert_eq!(0x3001, emulator.cpu.get_instruction_pointer());

    // taken with the carry flag set
    emulator.cpu.set_flag(CpuFlag::Carry, true);
    let cycles = emulator.step();
    assert_eq!(20, cycles);
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
}


#[test]
fn rst_jumps_to_its_fixed_vector() {
    let mut emulator = create_device_with_program(&[0xdf]);          // RST 18h
    let cycles = emulator.step();

    assert_eq!(16,     cycles);
    assert_eq!(0x0018, emulator.cpu.get_instruction_pointer());

    let return_address = emulator.get_mmu().read_u16(emulator.cpu.get_stack_pointer());
    assert_eq!(PROGRAM_START + 1, return_address);
}


#[test]
fn interrupt_dispatch_jumps_to_the_vector() {
    let mut emulator = create_device_with_program(&[0xfb, 0x00, 0x00]);  // EI; NOP; NOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);       // enable the timer interrupt

    emulator.step();                                                 // EI
    emulator.step();                                                 // NOP, IME becomes active afterwards

    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);

    let cycles = emulator.step();                                    // dispatch

    assert_eq!(20,     cycles);
    assert_eq!(0x0050, emulator.cpu.get_instruction_pointer());
    assert!(!emulator.cpu.is_ime_enabled());

    // the interrupt bit within IF was cleared, the unused upper bits read as set
    assert_eq!(0xe0, emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));

    // the interrupted instruction pointer was pushed onto the stack
    let pushed = emulator.get_mmu().read_u16(emulator.cpu.get_stack_pointer());
    assert_eq!(PROGRAM_START + 2, pushed);
}


#[test]
fn interrupts_are_dispatched_by_priority() {
    let mut emulator = create_device_with_program(&[0xfb, 0x00, 0x00]);  // EI; NOP; NOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x1f);

    emulator.step();
    emulator.step();

    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);
    emulator.get_mmu_mut().request_interrupt(Interrupt::VBlank);

    emulator.step();

    // VBlank wins, the timer interrupt stays pending
    assert_eq!(0x0040, emulator.cpu.get_instruction_pointer());
    assert_eq!(0xe4,   emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));
}


#[test]
fn ei_takes_effect_after_the_following_instruction() {
    // EI; NOP: an interrupt pending all the time must not be dispatched
    // before the instruction following EI was executed
    let mut emulator = create_device_with_program(&[0xfb, 0x00, 0x00]);  // EI; NOP; NOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);
    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);

    emulator.step();                                                 // EI
    assert!(!emulator.cpu.is_ime_enabled());
    assert_eq!(PROGRAM_START + 1, emulator.cpu.get_instruction_pointer());

    emulator.step();                                                 // NOP, still masked
    assert!( emulator.cpu.is_ime_enabled());
    assert_eq!(PROGRAM_START + 2, emulator.cpu.get_instruction_pointer());

    let cycles = emulator.step();                                    // now the dispatch happens
    assert_eq!(20,     cycles);
    assert_eq!(0x0050, emulator.cpu.get_instruction_pointer());
}


#[test]
fn di_cancels_a_pending_interrupt_enable() {
    let mut emulator = create_device_with_program(&[0xfb, 0xf3, 0x00]);  // EI; DI; NOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);
    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);

    emulator.step();                                                 // EI
    emulator.step();                                                 // DI
    emulator.step();                                                 // NOP, no dispatch

    assert!(!emulator.cpu.is_ime_enabled());
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
}


#[test]
fn reti_enables_interrupts_immediately() {
    let mut emulator = create_device_with_program(&[0xcd, 0x00, 0x30]);  // CALL 0x3000
    emulator.get_mmu_mut().write_u8(0x3000, 0xd9);                   // RETI

    emulator.step();
    let cycles = emulator.step();

    assert_eq!(16, cycles);
    assert_eq!(PROGRAM_START + 3, emulator.cpu.get_instruction_pointer());
    assert!( emulator.cpu.is_ime_enabled());
}


#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    let mut emulator = create_device_with_program(&[0x76, 0x00]);    // HALT; NOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);

    emulator.step();                                                 // HALT
    assert!( emulator.cpu.is_halted());

    // without a pending interrupt the CPU idles, consuming 4 cycles each step
    let cycles = emulator.step();
    assert_eq!(4, cycles);
    assert!( emulator.cpu.is_halted());
    assert_eq!(PROGRAM_START + 1, emulator.cpu.get_instruction_pointer());

    // with IME cleared a pending interrupt wakes the CPU up
    // without being dispatched
    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);
    emulator.step();

    assert!(!emulator.cpu.is_halted());
    assert_eq!(PROGRAM_START + 2, emulator.cpu.get_instruction_pointer());

    // the interrupt stays pending
    assert_eq!(0xe4, emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));
}


#[test]
fn halt_with_ime_dispatches_the_waking_interrupt() {
    let mut emulator = create_device_with_program(&[0xfb, 0x00, 0x76]);  // EI; NOP; HALT
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);

    emulator.step();                                                 // EI
    emulator.step();                                                 // NOP
    emulator.step();                                                 // HALT
    assert!( emulator.cpu.is_halted());

    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);

    let cycles = emulator.step();                                    // wake up and dispatch

    assert_eq!(20,     cycles);
    assert_eq!(0x0050, emulator.cpu.get_instruction_pointer());
    assert!(!emulator.cpu.is_halted());
}


#[test]
fn stop_suspends_the_cpu_until_reset() {
    let mut emulator = create_device_with_program(&[0x10]);          // STOP
    emulator.step();

    assert!( emulator.cpu.is_stopped());

    // a pending interrupt does not wake the CPU up from STOP
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IE, 0x04);
    emulator.get_mmu_mut().request_interrupt(Interrupt::Timer);

    let cycles = emulator.step();
    assert_eq!(4, cycles);
    assert!( emulator.cpu.is_stopped());

    emulator.reset();
    assert!(!emulator.cpu.is_stopped());
}


#[test]
fn invalid_opcodes_lock_the_cpu_up() {
    let mut emulator = create_device_with_program(&[0xd3]);
    let cycles = emulator.step();

    assert_eq!(4, cycles);
    assert!( emulator.cpu.is_locked_up());

    // the locked up CPU idles without executing further instructions
    let instruction_pointer = emulator.cpu.get_instruction_pointer();
    let cycles = emulator.step();

    assert_eq!(4, cycles);
    assert_eq!(instruction_pointer, emulator.cpu.get_instruction_pointer());
}


#[test]
fn stopping_the_emulation_stops_consuming_cycles() {
    let mut emulator = create_device_with_program(&[0x00, 0x00]);    // NOP; NOP
    emulator.step();

    emulator.stop();
    assert_eq!(0, emulator.step());

    emulator.start();
    assert_eq!(4, emulator.step());
}


#[test]
fn debug_info_contains_the_instruction_pointer() {
    let mut emulator = create_device_with_program(&[0x00]);
    emulator.step();

    let debug_info = emulator.cpu.get_debug_info();
    assert!(debug_info.contains("pc=0x0101"), "unexpected debug info: {}", debug_info);
}


#[test]
fn registers_keep_their_post_boot_values() {
    let emulator = create_device_with_program(&[]);

    assert_eq!(0x01,   emulator.cpu.get_r8(RegisterR8::A));
    assert_eq!(0xb0,   emulator.cpu.get_r8(RegisterR8::F));
    assert_eq!(0x13,   emulator.cpu.get_r8(RegisterR8::C));
    assert_eq!(0xd8,   emulator.cpu.get_r8(RegisterR8::E));
    assert_eq!(0x4d,   emulator.cpu.get_r8(RegisterR8::L));
    assert_eq!(0xfffe, emulator.cpu.get_stack_pointer());
    assert_eq!(0x0100, emulator.cpu.get_instruction_pointer());
}
