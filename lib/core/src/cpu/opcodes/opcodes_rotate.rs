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

//! Implementations of all rotate, shift and swap opcodes.

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR16, RegisterR8};
use crate::cpu::opcode::OpCodeContext;


/// The signature of a single bit operation: takes the current value and
/// the current carry flag, returns the new value and the new carry flag.
type BitOp = fn(u8, bool) -> (u8, bool);


/// Rotates a value left; bit 7 moves into bit 0 and into the carry flag.
fn rotate_left(value: u8, _carry: bool) -> (u8, bool) {
    (value.rotate_left(1), (value & 0x80) != 0)
}

/// Rotates a value left through the carry flag; the carry flag moves
/// into bit 0, bit 7 moves into the carry flag.
fn rotate_left_through_carry(value: u8, carry: bool) -> (u8, bool) {
    ((value << 1) | (carry as u8), (value & 0x80) != 0)
}

/// Rotates a value right; bit 0 moves into bit 7 and into the carry flag.
fn rotate_right(value: u8, _carry: bool) -> (u8, bool) {
    (value.rotate_right(1), (value & 0x01) != 0)
}

/// Rotates a value right through the carry flag; the carry flag moves
/// into bit 7, bit 0 moves into the carry flag.
fn rotate_right_through_carry(value: u8, carry: bool) -> (u8, bool) {
    ((value >> 1) | ((carry as u8) << 7), (value & 0x01) != 0)
}

/// Shifts a value left; bit 7 moves into the carry flag,
/// bit 0 becomes zero.
fn shift_left_arithmetic(value: u8, _carry: bool) -> (u8, bool) {
    (value << 1, (value & 0x80) != 0)
}

/// Shifts a value right keeping its sign bit;
/// bit 0 moves into the carry flag.
fn shift_right_arithmetic(value: u8, _carry: bool) -> (u8, bool) {
    ((value >> 1) | (value & 0x80), (value & 0x01) != 0)
}

/// Shifts a value right; bit 0 moves into the carry flag,
/// bit 7 becomes zero.
fn shift_right_logical(value: u8, _carry: bool) -> (u8, bool) {
    (value >> 1, (value & 0x01) != 0)
}

/// Swaps the high and low nibble of a value. The carry flag is cleared.
fn swap_nibbles(value: u8, _carry: bool) -> (u8, bool) {
    ((value >> 4) | (value << 4), false)
}


/// Applies a bit operation to an 8 bit register,
/// computing the zero flag from the result.
fn modify_r8(cpu: &mut Cpu, register: RegisterR8, op: BitOp) {
    let value = cpu.get_r8(register);
    let carry = cpu.is_flag_set(CpuFlag::Carry);

    let (result, carry) = op(value, carry);

    cpu.set_r8(register, result);
    cpu.set_flags(result == 0, false, false, carry);
}

/// Applies a bit operation to the value at the address stored in HL,
/// computing the zero flag from the result.
fn modify_hlptr(cpu: &mut Cpu, op: BitOp) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    let carry   = cpu.is_flag_set(CpuFlag::Carry);

    let (result, carry) = op(value, carry);

    cpu.get_mmu_mut().write_u8(address, result);
    cpu.set_flags(result == 0, false, false, carry);
}

/// Applies a bit operation to the accumulator, clearing the zero flag.
/// Used by the short rotate opcodes outside the extended opcode table.
fn modify_a_fast(cpu: &mut Cpu, op: BitOp) {
    let value = cpu.get_r8(RegisterR8::A);
    let carry = cpu.is_flag_set(CpuFlag::Carry);

    let (result, carry) = op(value, carry);

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(false, false, false, carry);
}


pub fn rlca(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_a_fast(cpu, rotate_left); }
pub fn rla(cpu: &mut Cpu, _ctx: &mut OpCodeContext)  { modify_a_fast(cpu, rotate_left_through_carry); }
pub fn rrca(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_a_fast(cpu, rotate_right); }
pub fn rra(cpu: &mut Cpu, _ctx: &mut OpCodeContext)  { modify_a_fast(cpu, rotate_right_through_carry); }

pub fn rlc_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, rotate_left); }
pub fn rlc_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, rotate_left); }
pub fn rlc_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, rotate_left); }
pub fn rlc_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, rotate_left); }
pub fn rlc_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, rotate_left); }
pub fn rlc_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, rotate_left); }
pub fn rlc_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, rotate_left); }
pub fn rlc_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, rotate_left); }

pub fn rrc_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, rotate_right); }
pub fn rrc_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, rotate_right); }
pub fn rrc_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, rotate_right); }
pub fn rrc_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, rotate_right); }
pub fn rrc_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, rotate_right); }
pub fn rrc_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, rotate_right); }
pub fn rrc_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, rotate_right); }
pub fn rrc_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, rotate_right); }

pub fn rl_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, rotate_left_through_carry); }
pub fn rl_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, rotate_left_through_carry); }
pub fn rl_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, rotate_left_through_carry); }
pub fn rl_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, rotate_left_through_carry); }
pub fn rl_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, rotate_left_through_carry); }
pub fn rl_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, rotate_left_through_carry); }
pub fn rl_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, rotate_left_through_carry); }
pub fn rl_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, rotate_left_through_carry); }

pub fn rr_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, rotate_right_through_carry); }
pub fn rr_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, rotate_right_through_carry); }
pub fn rr_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, rotate_right_through_carry); }
pub fn rr_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, rotate_right_through_carry); }
pub fn rr_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, rotate_right_through_carry); }
pub fn rr_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, rotate_right_through_carry); }
pub fn rr_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, rotate_right_through_carry); }
pub fn rr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, rotate_right_through_carry); }

pub fn sla_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, shift_left_arithmetic); }
pub fn sla_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, shift_left_arithmetic); }
pub fn sla_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, shift_left_arithmetic); }
pub fn sla_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, shift_left_arithmetic); }
pub fn sla_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, shift_left_arithmetic); }
pub fn sla_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, shift_left_arithmetic); }
pub fn sla_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, shift_left_arithmetic); }
pub fn sla_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, shift_left_arithmetic); }

pub fn sra_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, shift_right_arithmetic); }
pub fn sra_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, shift_right_arithmetic); }
pub fn sra_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, shift_right_arithmetic); }
pub fn sra_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, shift_right_arithmetic); }
pub fn sra_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, shift_right_arithmetic); }
pub fn sra_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, shift_right_arithmetic); }
pub fn sra_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, shift_right_arithmetic); }
pub fn sra_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, shift_right_arithmetic); }

pub fn swap_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, swap_nibbles); }
pub fn swap_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, swap_nibbles); }
pub fn swap_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, swap_nibbles); }
pub fn swap_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, swap_nibbles); }
pub fn swap_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, swap_nibbles); }
pub fn swap_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, swap_nibbles); }
pub fn swap_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, swap_nibbles); }
pub fn swap_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, swap_nibbles); }

pub fn srl_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::B, shift_right_logical); }
pub fn srl_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::C, shift_right_logical); }
pub fn srl_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::D, shift_right_logical); }
pub fn srl_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::E, shift_right_logical); }
pub fn srl_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::H, shift_right_logical); }
pub fn srl_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::L, shift_right_logical); }
pub fn srl_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_hlptr(cpu, shift_right_logical); }
pub fn srl_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { modify_r8(cpu, RegisterR8::A, shift_right_logical); }
