/*
 * Copyright (C) 2022 by Christian Fischer
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

//! Implementations of all arithmetic and logical opcodes.

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR16, RegisterR8};
use crate::cpu::opcode::OpCodeContext;
use crate::utils::{carrying_add_u16, carrying_add_u8, carrying_sub_u8};


/// Get the value at the memory address stored in HL.
fn get_hlptr(cpu: &Cpu) -> u8 {
    let address = cpu.get_r16(RegisterR16::HL);
    cpu.get_mmu().read_u8(address)
}

/// Adds a value to the accumulator, optionally with the carry flag.
fn add_value_to_a(cpu: &mut Cpu, value: u8, with_carry: bool) {
    let a     = cpu.get_r8(RegisterR8::A);
    let carry = with_carry && cpu.is_flag_set(CpuFlag::Carry);

    let (result, half_carry, carry) = carrying_add_u8(a, value, carry);

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, half_carry, carry);
}

/// Subtracts a value from the accumulator, optionally with the carry flag.
fn sub_value_from_a(cpu: &mut Cpu, value: u8, with_carry: bool) {
    let a     = cpu.get_r8(RegisterR8::A);
    let carry = with_carry && cpu.is_flag_set(CpuFlag::Carry);

    let (result, half_carry, borrow) = carrying_sub_u8(a, value, carry);

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, true, half_carry, borrow);
}

/// Compares a value with the accumulator.
/// The flags are computed like a subtraction, the result is discarded.
fn compare_value_with_a(cpu: &mut Cpu, value: u8) {
    let a = cpu.get_r8(RegisterR8::A);

    let (result, half_carry, borrow) = carrying_sub_u8(a, value, false);

    cpu.set_flags(result == 0, true, half_carry, borrow);
}

/// Combines the accumulator with a value using a bitwise AND.
fn and_value_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) & value;

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, true, false);
}

/// Combines the accumulator with a value using a bitwise XOR.
fn xor_value_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) ^ value;

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, false, false);
}

/// Combines the accumulator with a value using a bitwise OR.
fn or_value_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) | value;

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, false, false);
}

/// Increments an 8 bit register by one. The carry flag is not affected.
fn increment_r8(cpu: &mut Cpu, register: RegisterR8) {
    let value  = cpu.get_r8(register);
    let result = value.wrapping_add(1);

    cpu.set_r8(register, result);
    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, (value & 0x0f) == 0x0f);
}

/// Decrements an 8 bit register by one. The carry flag is not affected.
fn decrement_r8(cpu: &mut Cpu, register: RegisterR8) {
    let value  = cpu.get_r8(register);
    let result = value.wrapping_sub(1);

    cpu.set_r8(register, result);
    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  true);
    cpu.set_flag(CpuFlag::HalfCarry, (value & 0x0f) == 0x00);
}

/// Increments a 16 bit register pair by one. No flags are affected.
fn increment_r16(cpu: &mut Cpu, register: RegisterR16) {
    let value = cpu.get_r16(register);
    cpu.set_r16(register, value.wrapping_add(1));
}

/// Decrements a 16 bit register pair by one. No flags are affected.
fn decrement_r16(cpu: &mut Cpu, register: RegisterR16) {
    let value = cpu.get_r16(register);
    cpu.set_r16(register, value.wrapping_sub(1));
}

/// Adds a 16 bit value to HL. The half-carry flag is computed on bit 11,
/// the carry flag on bit 15; the zero flag is not affected.
fn add_value_to_hl(cpu: &mut Cpu, value: u16) {
    let hl = cpu.get_r16(RegisterR16::HL);

    let (result, half_carry, carry) = carrying_add_u16(hl, value);

    cpu.set_r16(RegisterR16::HL, result);
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, half_carry);
    cpu.set_flag(CpuFlag::Carry,     carry);
}


pub fn add_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); add_value_to_a(cpu, value, false); }
pub fn add_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); add_value_to_a(cpu, value, false); }
pub fn add_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); add_value_to_a(cpu, value, false); }
pub fn add_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); add_value_to_a(cpu, value, false); }
pub fn add_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); add_value_to_a(cpu, value, false); }
pub fn add_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); add_value_to_a(cpu, value, false); }
pub fn add_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); add_value_to_a(cpu, value, false); }
pub fn add_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); add_value_to_a(cpu, value, false); }
pub fn add_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); add_value_to_a(cpu, value, false); }

pub fn adc_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); add_value_to_a(cpu, value, true); }
pub fn adc_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); add_value_to_a(cpu, value, true); }
pub fn adc_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); add_value_to_a(cpu, value, true); }
pub fn adc_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); add_value_to_a(cpu, value, true); }
pub fn adc_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); add_value_to_a(cpu, value, true); }
pub fn adc_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); add_value_to_a(cpu, value, true); }
pub fn adc_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); add_value_to_a(cpu, value, true); }
pub fn adc_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); add_value_to_a(cpu, value, true); }
pub fn adc_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); add_value_to_a(cpu, value, true); }

pub fn sub_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); sub_value_from_a(cpu, value, false); }
pub fn sub_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); sub_value_from_a(cpu, value, false); }
pub fn sub_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); sub_value_from_a(cpu, value, false); }
pub fn sub_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); sub_value_from_a(cpu, value, false); }
pub fn sub_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); sub_value_from_a(cpu, value, false); }
pub fn sub_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); sub_value_from_a(cpu, value, false); }
pub fn sub_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); sub_value_from_a(cpu, value, false); }
pub fn sub_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); sub_value_from_a(cpu, value, false); }
pub fn sub_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); sub_value_from_a(cpu, value, false); }

pub fn sbc_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); sub_value_from_a(cpu, value, true); }
pub fn sbc_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); sub_value_from_a(cpu, value, true); }

pub fn and_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); and_value_with_a(cpu, value); }
pub fn and_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); and_value_with_a(cpu, value); }
pub fn and_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); and_value_with_a(cpu, value); }
pub fn and_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); and_value_with_a(cpu, value); }
pub fn and_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); and_value_with_a(cpu, value); }
pub fn and_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); and_value_with_a(cpu, value); }
pub fn and_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); and_value_with_a(cpu, value); }
pub fn and_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); and_value_with_a(cpu, value); }
pub fn and_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); and_value_with_a(cpu, value); }

pub fn xor_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); xor_value_with_a(cpu, value); }
pub fn xor_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); xor_value_with_a(cpu, value); }
pub fn xor_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); xor_value_with_a(cpu, value); }
pub fn xor_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); xor_value_with_a(cpu, value); }
pub fn xor_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); xor_value_with_a(cpu, value); }
pub fn xor_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); xor_value_with_a(cpu, value); }
pub fn xor_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); xor_value_with_a(cpu, value); }
pub fn xor_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); xor_value_with_a(cpu, value); }
pub fn xor_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); xor_value_with_a(cpu, value); }

pub fn or_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); or_value_with_a(cpu, value); }
pub fn or_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); or_value_with_a(cpu, value); }
pub fn or_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); or_value_with_a(cpu, value); }
pub fn or_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); or_value_with_a(cpu, value); }
pub fn or_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); or_value_with_a(cpu, value); }
pub fn or_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); or_value_with_a(cpu, value); }
pub fn or_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); or_value_with_a(cpu, value); }
pub fn or_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); or_value_with_a(cpu, value); }
pub fn or_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); or_value_with_a(cpu, value); }

pub fn cp_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); compare_value_with_a(cpu, value); }
pub fn cp_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); compare_value_with_a(cpu, value); }
pub fn cp_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); compare_value_with_a(cpu, value); }
pub fn cp_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); compare_value_with_a(cpu, value); }
pub fn cp_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); compare_value_with_a(cpu, value); }
pub fn cp_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); compare_value_with_a(cpu, value); }
pub fn cp_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); compare_value_with_a(cpu, value); }
pub fn cp_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = get_hlptr(cpu); compare_value_with_a(cpu, value); }
pub fn cp_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.fetch_u8(); compare_value_with_a(cpu, value); }

pub fn inc_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::B); }
pub fn inc_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::C); }
pub fn inc_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::D); }
pub fn inc_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::E); }
pub fn inc_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::H); }
pub fn inc_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::L); }
pub fn inc_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r8(cpu, RegisterR8::A); }

pub fn dec_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::B); }
pub fn dec_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::C); }
pub fn dec_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::D); }
pub fn dec_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::E); }
pub fn dec_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::H); }
pub fn dec_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::L); }
pub fn dec_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r8(cpu, RegisterR8::A); }

/// Increments the value at the address stored in HL.
pub fn inc_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    let result  = value.wrapping_add(1);

    cpu.get_mmu_mut().write_u8(address, result);
    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, (value & 0x0f) == 0x0f);
}

/// Decrements the value at the address stored in HL.
pub fn dec_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    let result  = value.wrapping_sub(1);

    cpu.get_mmu_mut().write_u8(address, result);
    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  true);
    cpu.set_flag(CpuFlag::HalfCarry, (value & 0x0f) == 0x00);
}

pub fn inc_bc(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r16(cpu, RegisterR16::BC); }
pub fn inc_de(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r16(cpu, RegisterR16::DE); }
pub fn inc_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { increment_r16(cpu, RegisterR16::HL); }

pub fn dec_bc(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r16(cpu, RegisterR16::BC); }
pub fn dec_de(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r16(cpu, RegisterR16::DE); }
pub fn dec_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { decrement_r16(cpu, RegisterR16::HL); }

/// Increments the stack pointer by one. No flags are affected.
pub fn inc_sp(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value = cpu.get_stack_pointer();
    cpu.set_stack_pointer(value.wrapping_add(1));
}

/// Decrements the stack pointer by one. No flags are affected.
pub fn dec_sp(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value = cpu.get_stack_pointer();
    cpu.set_stack_pointer(value.wrapping_sub(1));
}

pub fn add_hl_bc(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::BC); add_value_to_hl(cpu, value); }
pub fn add_hl_de(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::DE); add_value_to_hl(cpu, value); }
pub fn add_hl_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::HL); add_value_to_hl(cpu, value); }
pub fn add_hl_sp(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { let value = cpu.get_stack_pointer();     add_value_to_hl(cpu, value); }

/// Adds a signed immediate offset to the stack pointer.
/// The half-carry and carry flags are computed on the lower byte of
/// the stack pointer, independent of the sign of the offset.
pub fn add_sp_i8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset = cpu.fetch_i8() as i16 as u16;
    let sp     = cpu.get_stack_pointer();

    let half_carry = ((sp & 0x000f) + (offset & 0x000f)) > 0x000f;
    let carry      = ((sp & 0x00ff) + (offset & 0x00ff)) > 0x00ff;

    cpu.set_stack_pointer(sp.wrapping_add(offset));
    cpu.set_flags(false, false, half_carry, carry);
}

/// Adjusts the accumulator after a BCD arithmetic operation.
/// The negative, half-carry and carry flags of the previous operation
/// decide which correction value is added or subtracted.
pub fn daa(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let mut a     = cpu.get_r8(RegisterR8::A);
    let mut carry = cpu.is_flag_set(CpuFlag::Carry);

    if !cpu.is_flag_set(CpuFlag::Negative) {
        let mut adjust = 0x00u8;

        if cpu.is_flag_set(CpuFlag::HalfCarry) || (a & 0x0f) > 0x09 {
            adjust |= 0x06;
        }

        if carry || a > 0x99 {
            adjust |= 0x60;
            carry   = true;
        }

        a = a.wrapping_add(adjust);
    }
    else {
        let mut adjust = 0x00u8;

        if cpu.is_flag_set(CpuFlag::HalfCarry) {
            adjust |= 0x06;
        }

        if carry {
            adjust |= 0x60;
        }

        a = a.wrapping_sub(adjust);
    }

    cpu.set_r8(RegisterR8::A, a);
    cpu.set_flag(CpuFlag::Zero,      a == 0);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     carry);
}

/// Complements the accumulator.
pub fn cpl_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value = cpu.get_r8(RegisterR8::A);

    cpu.set_r8(RegisterR8::A, !value);
    cpu.set_flag(CpuFlag::Negative,  true);
    cpu.set_flag(CpuFlag::HalfCarry, true);
}

/// Sets the carry flag.
pub fn scf(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     true);
}

/// Complements the carry flag.
pub fn ccf(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let carry = cpu.is_flag_set(CpuFlag::Carry);

    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     !carry);
}
