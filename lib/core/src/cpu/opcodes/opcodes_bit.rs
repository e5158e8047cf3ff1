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

//! Implementations of the single bit test, clear and set opcodes.

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR16, RegisterR8};
use crate::cpu::opcode::OpCodeContext;
use crate::utils::get_bit;


/// Tests a single bit of a value, storing the inverted bit within the
/// zero flag. The carry flag is not affected.
fn test_bit_value(cpu: &mut Cpu, bit: u8, value: u8) {
    cpu.set_flag(CpuFlag::Zero,      !get_bit(value, bit));
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, true);
}

/// Tests a single bit of an 8 bit register.
fn test_bit_r8(cpu: &mut Cpu, bit: u8, register: RegisterR8) {
    let value = cpu.get_r8(register);
    test_bit_value(cpu, bit, value);
}

/// Tests a single bit of the value at the address stored in HL.
fn test_bit_hlptr(cpu: &mut Cpu, bit: u8) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    test_bit_value(cpu, bit, value);
}

/// Clears a single bit of an 8 bit register. No flags are affected.
fn clear_bit_r8(cpu: &mut Cpu, bit: u8, register: RegisterR8) {
    let value = cpu.get_r8(register);
    cpu.set_r8(register, value & !(1u8 << bit));
}

/// Clears a single bit of the value at the address stored in HL.
/// No flags are affected.
fn clear_bit_hlptr(cpu: &mut Cpu, bit: u8) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.get_mmu_mut().write_u8(address, value & !(1u8 << bit));
}

/// Sets a single bit of an 8 bit register. No flags are affected.
fn set_bit_r8(cpu: &mut Cpu, bit: u8, register: RegisterR8) {
    let value = cpu.get_r8(register);
    cpu.set_r8(register, value | (1u8 << bit));
}

/// Sets a single bit of the value at the address stored in HL.
/// No flags are affected.
fn set_bit_hlptr(cpu: &mut Cpu, bit: u8) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.get_mmu_mut().write_u8(address, value | (1u8 << bit));
}


pub fn bit_0_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::B); }
pub fn bit_0_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::C); }
pub fn bit_0_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::D); }
pub fn bit_0_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::E); }
pub fn bit_0_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::H); }
pub fn bit_0_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::L); }
pub fn bit_0_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 0); }
pub fn bit_0_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 0, RegisterR8::A); }

pub fn bit_1_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::B); }
pub fn bit_1_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::C); }
pub fn bit_1_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::D); }
pub fn bit_1_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::E); }
pub fn bit_1_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::H); }
pub fn bit_1_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::L); }
pub fn bit_1_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 1); }
pub fn bit_1_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 1, RegisterR8::A); }

pub fn bit_2_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::B); }
pub fn bit_2_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::C); }
pub fn bit_2_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::D); }
pub fn bit_2_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::E); }
pub fn bit_2_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::H); }
pub fn bit_2_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::L); }
pub fn bit_2_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 2); }
pub fn bit_2_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 2, RegisterR8::A); }

pub fn bit_3_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::B); }
pub fn bit_3_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::C); }
pub fn bit_3_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::D); }
pub fn bit_3_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::E); }
pub fn bit_3_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::H); }
pub fn bit_3_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::L); }
pub fn bit_3_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 3); }
pub fn bit_3_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 3, RegisterR8::A); }

pub fn bit_4_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::B); }
pub fn bit_4_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::C); }
pub fn bit_4_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::D); }
pub fn bit_4_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::E); }
pub fn bit_4_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::H); }
pub fn bit_4_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::L); }
pub fn bit_4_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 4); }
pub fn bit_4_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 4, RegisterR8::A); }

pub fn bit_5_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::B); }
pub fn bit_5_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::C); }
pub fn bit_5_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::D); }
pub fn bit_5_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::E); }
pub fn bit_5_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::H); }
pub fn bit_5_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::L); }
pub fn bit_5_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 5); }
pub fn bit_5_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 5, RegisterR8::A); }

pub fn bit_6_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::B); }
pub fn bit_6_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::C); }
pub fn bit_6_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::D); }
pub fn bit_6_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::E); }
pub fn bit_6_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::H); }
pub fn bit_6_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::L); }
pub fn bit_6_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 6); }
pub fn bit_6_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 6, RegisterR8::A); }

pub fn bit_7_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::B); }
pub fn bit_7_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::C); }
pub fn bit_7_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::D); }
pub fn bit_7_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::E); }
pub fn bit_7_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::H); }
pub fn bit_7_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::L); }
pub fn bit_7_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_hlptr(cpu, 7); }
pub fn bit_7_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { test_bit_r8(cpu, 7, RegisterR8::A); }


pub fn res_0_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::B); }
pub fn res_0_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::C); }
pub fn res_0_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::D); }
pub fn res_0_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::E); }
pub fn res_0_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::H); }
pub fn res_0_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::L); }
pub fn res_0_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 0); }
pub fn res_0_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 0, RegisterR8::A); }

pub fn res_1_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::B); }
pub fn res_1_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::C); }
pub fn res_1_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::D); }
pub fn res_1_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::E); }
pub fn res_1_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::H); }
pub fn res_1_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::L); }
pub fn res_1_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 1); }
pub fn res_1_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 1, RegisterR8::A); }

pub fn res_2_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::B); }
pub fn res_2_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::C); }
pub fn res_2_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::D); }
pub fn res_2_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::E); }
pub fn res_2_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::H); }
pub fn res_2_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::L); }
pub fn res_2_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 2); }
pub fn res_2_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 2, RegisterR8::A); }

pub fn res_3_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::B); }
pub fn res_3_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::C); }
pub fn res_3_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::D); }
pub fn res_3_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::E); }
pub fn res_3_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::H); }
pub fn res_3_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::L); }
pub fn res_3_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 3); }
pub fn res_3_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 3, RegisterR8::A); }

pub fn res_4_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::B); }
pub fn res_4_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::C); }
pub fn res_4_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::D); }
pub fn res_4_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::E); }
pub fn res_4_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::H); }
pub fn res_4_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::L); }
pub fn res_4_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 4); }
pub fn res_4_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 4, RegisterR8::A); }

pub fn res_5_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::B); }
pub fn res_5_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::C); }
pub fn res_5_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::D); }
pub fn res_5_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::E); }
pub fn res_5_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::H); }
pub fn res_5_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::L); }
pub fn res_5_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 5); }
pub fn res_5_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 5, RegisterR8::A); }

pub fn res_6_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::B); }
pub fn res_6_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::C); }
pub fn res_6_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::D); }
pub fn res_6_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::E); }
pub fn res_6_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::H); }
pub fn res_6_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::L); }
pub fn res_6_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 6); }
pub fn res_6_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 6, RegisterR8::A); }

pub fn res_7_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::B); }
pub fn res_7_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::C); }
pub fn res_7_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::D); }
pub fn res_7_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::E); }
pub fn res_7_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::H); }
pub fn res_7_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::L); }
pub fn res_7_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_hlptr(cpu, 7); }
pub fn res_7_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { clear_bit_r8(cpu, 7, RegisterR8::A); }


pub fn set_0_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::B); }
pub fn set_0_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::C); }
pub fn set_0_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::D); }
pub fn set_0_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::E); }
pub fn set_0_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::H); }
pub fn set_0_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::L); }
pub fn set_0_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 0); }
pub fn set_0_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 0, RegisterR8::A); }

pub fn set_1_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::B); }
pub fn set_1_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::C); }
pub fn set_1_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::D); }
pub fn set_1_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::E); }
pub fn set_1_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::H); }
pub fn set_1_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::L); }
pub fn set_1_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 1); }
pub fn set_1_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 1, RegisterR8::A); }

pub fn set_2_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::B); }
pub fn set_2_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::C); }
pub fn set_2_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::D); }
pub fn set_2_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::E); }
pub fn set_2_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::H); }
pub fn set_2_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::L); }
pub fn set_2_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 2); }
pub fn set_2_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 2, RegisterR8::A); }

pub fn set_3_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::B); }
pub fn set_3_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::C); }
pub fn set_3_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::D); }
pub fn set_3_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::E); }
pub fn set_3_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::H); }
pub fn set_3_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::L); }
pub fn set_3_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 3); }
pub fn set_3_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 3, RegisterR8::A); }

pub fn set_4_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::B); }
pub fn set_4_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::C); }
pub fn set_4_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::D); }
pub fn set_4_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::E); }
pub fn set_4_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::H); }
pub fn set_4_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::L); }
pub fn set_4_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 4); }
pub fn set_4_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 4, RegisterR8::A); }

pub fn set_5_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::B); }
pub fn set_5_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::C); }
pub fn set_5_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::D); }
pub fn set_5_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::E); }
pub fn set_5_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::H); }
pub fn set_5_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::L); }
pub fn set_5_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 5); }
pub fn set_5_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 5, RegisterR8::A); }

pub fn set_6_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::B); }
pub fn set_6_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::C); }
pub fn set_6_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::D); }
pub fn set_6_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::E); }
pub fn set_6_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::H); }
pub fn set_6_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::L); }
pub fn set_6_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 6); }
pub fn set_6_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 6, RegisterR8::A); }

pub fn set_7_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::B); }
pub fn set_7_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::C); }
pub fn set_7_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::D); }
pub fn set_7_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::E); }
pub fn set_7_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::H); }
pub fn set_7_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::L); }
pub fn set_7_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_hlptr(cpu, 7); }
pub fn set_7_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { set_bit_r8(cpu, 7, RegisterR8::A); }
