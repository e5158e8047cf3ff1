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

use dmg_core::cpu::cpu::{CpuFlag, RegisterR16, RegisterR8};

use common::create_device_with_program;


#[test]
fn add_sets_half_carry_on_bit_3() {
    let mut emulator = create_device_with_program(&[0xc6, 0x01]);    // ADD A, 0x01
    emulator.cpu.set_r8(RegisterR8::A, 0x0f);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    let cycles = emulator.step();

    assert_eq!(8,    cycles);
    assert_eq!(0x10, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn add_sets_zero_and_carry_on_overflow() {
    let mut emulator = create_device_with_program(&[0xc6, 0x01]);    // ADD A, 0x01
    emulator.cpu.set_r8(RegisterR8::A, 0xff);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn adc_includes_the_carry_flag() {
    let mut emulator = create_device_with_program(&[0xce, 0x00]);    // ADC A, 0x00
    emulator.cpu.set_r8(RegisterR8::A, 0x0f);
    emulator.cpu.set_flag(CpuFlag::Carry, true);

    emulator.step();

    assert_eq!(0x10, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn sub_computes_borrow_flags() {
    let mut emulator = create_device_with_program(&[0xd6, 0x01]);    // SUB A, 0x01
    emulator.cpu.set_r8(RegisterR8::A, 0x10);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x0f, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn sbc_half_carry_includes_the_carry_flag() {
    // SBC A, 0x01 with A=0x10 and the carry flag cleared:
    // the half-carry flag has to be set, the carry flag cleared
    let mut emulator = create_device_with_program(&[0xde, 0x01]);    // SBC A, 0x01
    emulator.cpu.set_r8(RegisterR8::A, 0x10);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x0f, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn sbc_wraps_around_with_borrow() {
    let mut emulator = create_device_with_program(&[0xde, 0xff]);    // SBC A, 0xff
    emulator.cpu.set_r8(RegisterR8::A, 0x00);
    emulator.cpu.set_flag(CpuFlag::Carry, true);

    emulator.step();

    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn cp_keeps_the_accumulator() {
    let mut emulator = create_device_with_program(&[0xfe, 0x42]);    // CP A, 0x42
    emulator.cpu.set_r8(RegisterR8::A, 0x42);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x42, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
}


#[test]
fn logical_operations_set_their_fixed_flags() {
    // AND sets the half-carry flag
    let mut emulator = create_device_with_program(&[0xe6, 0x0f]);    // AND A, 0x0f
    emulator.cpu.set_r8(RegisterR8::A, 0xf0);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);
    emulator.step();
    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));

    // XOR clears half-carry and carry
    let mut emulator = create_device_with_program(&[0xee, 0xff]);    // XOR A, 0xff
    emulator.cpu.set_r8(RegisterR8::A, 0x0f);
    emulator.cpu.set_r8(RegisterR8::F, 0xf0);
    emulator.step();
    assert_eq!(0xf0, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));

    // OR clears half-carry and carry
    let mut emulator = create_device_with_program(&[0xf6, 0x00]);    // OR A, 0x00
    emulator.cpu.set_r8(RegisterR8::A, 0x00);
    emulator.cpu.set_r8(RegisterR8::F, 0xf0);
    emulator.step();
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn inc_and_dec_keep_the_carry_flag() {
    let mut emulator = create_device_with_program(&[0x3c, 0x3d]);    // INC A; DEC A
    emulator.cpu.set_r8(RegisterR8::A, 0x0f);
    emulator.cpu.set_flag(CpuFlag::Carry, true);

    emulator.step();
    assert_eq!(0x10, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));

    emulator.step();
    assert_eq!(0x0f, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn add_hl_hl_carries_out_of_bit_11() {
    // ADD HL, HL with HL=0x0800: carry out of bit 11, but not bit 15
    let mut emulator = create_device_with_program(&[0x29]);          // ADD HL, HL
    emulator.cpu.set_r16(RegisterR16::HL, 0x0800);
    emulator.cpu.set_r8(RegisterR8::F, 0x80);

    let cycles = emulator.step();

    assert_eq!(8,      cycles);
    assert_eq!(0x1000, emulator.cpu.get_r16(RegisterR16::HL));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));      // unchanged
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn add_hl_rr_carries_out_of_bit_15() {
    let mut emulator = create_device_with_program(&[0x09]);          // ADD HL, BC
    emulator.cpu.set_r16(RegisterR16::HL, 0x8000);
    emulator.cpu.set_r16(RegisterR16::BC, 0x8000);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x0000, emulator.cpu.get_r16(RegisterR16::HL));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));      // unchanged
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn add_sp_flags_are_computed_on_the_low_byte() {
    // positive offset
    let mut emulator = create_device_with_program(&[0xe8, 0x01]);    // ADD SP, 0x01
    emulator.cpu.set_stack_pointer(0x000f);
    emulator.cpu.set_r8(RegisterR8::F, 0xf0);

    let cycles = emulator.step();

    assert_eq!(16,     cycles);
    assert_eq!(0x0010, emulator.cpu.get_stack_pointer());
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));

    // negative offset still computes flags as an unsigned addition
    let mut emulator = create_device_with_program(&[0xe8, 0xff]);    // ADD SP, -1
    emulator.cpu.set_stack_pointer(0x0001);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0x0000, emulator.cpu.get_stack_pointer());
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn ld_hl_sp_offset_uses_the_add_sp_flag_rule() {
    let mut emulator = create_device_with_program(&[0xf8, 0x01]);    // LD HL, SP+0x01
    emulator.cpu.set_stack_pointer(0xffff);
    emulator.cpu.set_r8(RegisterR8::F, 0x80);

    let cycles = emulator.step();

    assert_eq!(12,     cycles);
    assert_eq!(0x0000, emulator.cpu.get_r16(RegisterR16::HL));
    assert_eq!(0xffff, emulator.cpu.get_stack_pointer());
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn daa_adjusts_after_addition() {
    // 0x45 + 0x38 = 0x7d, adjusted to 0x83
    let mut emulator = create_device_with_program(&[0xc6, 0x38, 0x27]);  // ADD A, 0x38; DAA
    emulator.cpu.set_r8(RegisterR8::A, 0x45);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();
    emulator.step();

    assert_eq!(0x83, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));

    // 0x99 + 0x01 = 0x9a, adjusted to 0x00 with carry
    let mut emulator = create_device_with_program(&[0xc6, 0x01, 0x27]);  // ADD A, 0x01; DAA
    emulator.cpu.set_r8(RegisterR8::A, 0x99);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();
    emulator.step();

    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn daa_adjusts_after_subtraction() {
    // 0x20 - 0x13 = 0x0d with a half-borrow, adjusted to 0x07
    let mut emulator = create_device_with_program(&[0xd6, 0x13, 0x27]);  // SUB A, 0x13; DAA
    emulator.cpu.set_r8(RegisterR8::A, 0x20);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();
    emulator.step();

    assert_eq!(0x07, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn cpl_scf_and_ccf() {
    let mut emulator = create_device_with_program(&[0x2f, 0x37, 0x3f]);  // CPL; SCF; CCF
    emulator.cpu.set_r8(RegisterR8::A, 0x35);
    emulator.cpu.set_r8(RegisterR8::F, 0x90);

    emulator.step();
    assert_eq!(0xca, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));      // unchanged
    assert!( emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));     // unchanged

    emulator.step();
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));

    emulator.step();
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));      // untouched by SCF/CCF
}


#[test]
fn accumulator_rotates_always_clear_the_zero_flag() {
    let mut emulator = create_device_with_program(&[0x07]);          // RLCA
    emulator.cpu.set_r8(RegisterR8::A, 0x80);
    emulator.cpu.set_r8(RegisterR8::F, 0x80);

    let cycles = emulator.step();

    assert_eq!(4,    cycles);
    assert_eq!(0x01, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));

    let mut emulator = create_device_with_program(&[0x1f]);          // RRA
    emulator.cpu.set_r8(RegisterR8::A, 0x01);
    emulator.cpu.set_flag(CpuFlag::Carry, false);

    emulator.step();

    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));      // forced to zero
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn extended_rotates_compute_the_zero_flag() {
    let mut emulator = create_device_with_program(&[0xcb, 0x3f]);    // SRL A
    emulator.cpu.set_r8(RegisterR8::A, 0x01);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    let cycles = emulator.step();

    assert_eq!(8,    cycles);
    assert_eq!(0x00, emulator.cpu.get_r8(RegisterR8::A));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn sra_keeps_the_sign_bit() {
    let mut emulator = create_device_with_program(&[0xcb, 0x28]);    // SRA B
    emulator.cpu.set_r8(RegisterR8::B, 0x81);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    emulator.step();

    assert_eq!(0xc0, emulator.cpu.get_r8(RegisterR8::B));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn swap_clears_all_other_flags() {
    let mut emulator = create_device_with_program(&[0xcb, 0x37]);    // SWAP A
    emulator.cpu.set_r8(RegisterR8::A, 0xf0);
    emulator.cpu.set_r8(RegisterR8::F, 0xf0);

    emulator.step();

    assert_eq!(0x0f, emulator.cpu.get_r8(RegisterR8::A));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn bit_test_keeps_the_carry_flag() {
    let mut emulator = create_device_with_program(&[0xcb, 0x7f, 0xcb, 0x47]);  // BIT 7, A; BIT 0, A
    emulator.cpu.set_r8(RegisterR8::A, 0x80);
    emulator.cpu.set_flag(CpuFlag::Carry, true);

    emulator.step();
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Negative));
    assert!( emulator.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));

    emulator.step();
    assert!( emulator.cpu.is_flag_set(CpuFlag::Zero));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn res_and_set_modify_single_bits_without_flags() {
    let mut emulator = create_device_with_program(&[0xcb, 0x87, 0xcb, 0xc7]);  // RES 0, A; SET 0, A
    emulator.cpu.set_r8(RegisterR8::A, 0xff);
    emulator.cpu.set_r8(RegisterR8::F, 0xf0);

    emulator.step();
    assert_eq!(0xfe, emulator.cpu.get_r8(RegisterR8::A));
    assert_eq!(0xf0, emulator.cpu.get_r8(RegisterR8::F));

    emulator.step();
    assert_eq!(0xff, emulator.cpu.get_r8(RegisterR8::A));
    assert_eq!(0xf0, emulator.cpu.get_r8(RegisterR8::F));
}


#[test]
fn bit_operations_on_memory_operands() {
    // SET 3, (HL); BIT 3, (HL); RLC (HL)
    let mut emulator = create_device_with_program(&[0xcb, 0xde, 0xcb, 0x5e, 0xcb, 0x06]);
    emulator.cpu.set_r16(RegisterR16::HL, 0xc123);
    emulator.get_mmu_mut().write_u8(0xc123, 0x80);
    emulator.cpu.set_r8(RegisterR8::F, 0x00);

    let cycles = emulator.step();
    assert_eq!(16,   cycles);
    assert_eq!(0x88, emulator.get_mmu().read_u8(0xc123));

    let cycles = emulator.step();
    assert_eq!(12, cycles);
    assert!(!emulator.cpu.is_flag_set(CpuFlag::Zero));

    let cycles = emulator.step();
    assert_eq!(16,   cycles);
    assert_eq!(0x11, emulator.get_mmu().read_u8(0xc123));
    assert!( emulator.cpu.is_flag_set(CpuFlag::Carry));
}
