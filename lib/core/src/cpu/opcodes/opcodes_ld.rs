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

//! Implementations of all load, store and stack opcodes.

use crate::cpu::cpu::{Cpu, RegisterR16, RegisterR8};
use crate::cpu::opcode::OpCodeContext;
use crate::utils::{get_high, get_low, to_u16};


/// Copies the value of one 8 bit register into another one.
fn ld_r8_r8(cpu: &mut Cpu, dst: RegisterR8, src: RegisterR8) {
    let value = cpu.get_r8(src);
    cpu.set_r8(dst, value);
}

/// Loads an immediate 8 bit value into a register.
fn ld_r8_u8(cpu: &mut Cpu, dst: RegisterR8) {
    let value = cpu.fetch_u8();
    cpu.set_r8(dst, value);
}

/// Loads the value at the address stored in HL into a register.
fn ld_r8_hlptr(cpu: &mut Cpu, dst: RegisterR8) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(dst, value);
}

/// Stores the value of a register at the address stored in HL.
fn ld_hlptr_r8(cpu: &mut Cpu, src: RegisterR8) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_r8(src);
    cpu.get_mmu_mut().write_u8(address, value);
}

/// Loads an immediate 16 bit value into a register pair.
fn ld_r16_u16(cpu: &mut Cpu, dst: RegisterR16) {
    let value = cpu.fetch_u16();
    cpu.set_r16(dst, value);
}

/// Stores the value of the A register at the address stored
/// in a register pair.
fn ld_r16ptr_a(cpu: &mut Cpu, dst_ptr: RegisterR16) {
    let address = cpu.get_r16(dst_ptr);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}

/// Loads the value at the address stored in a register pair
/// into the A register.
fn ld_a_r16ptr(cpu: &mut Cpu, src_ptr: RegisterR16) {
    let address = cpu.get_r16(src_ptr);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}

/// Pushes the value of a register pair onto the stack.
fn push_r16(cpu: &mut Cpu, src: RegisterR16) {
    let value = cpu.get_r16(src);
    cpu.push_u16(value);
}

/// Pops a value from the stack into a register pair.
fn pop_r16(cpu: &mut Cpu, dst: RegisterR16) {
    let value = cpu.pop_u16();
    cpu.set_r16(dst, value);
}


pub fn ld_b_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::B); }
pub fn ld_b_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::C); }
pub fn ld_b_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::D); }
pub fn ld_b_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::E); }
pub fn ld_b_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::H); }
pub fn ld_b_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::L); }
pub fn ld_b_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::A); }

pub fn ld_c_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::B); }
pub fn ld_c_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::C); }
pub fn ld_c_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::D); }
pub fn ld_c_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::E); }
pub fn ld_c_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::H); }
pub fn ld_c_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::L); }
pub fn ld_c_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::A); }

pub fn ld_d_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::B); }
pub fn ld_d_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::C); }
pub fn ld_d_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::D); }
pub fn ld_d_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::E); }
pub fn ld_d_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::H); }
pub fn ld_d_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::L); }
pub fn ld_d_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::A); }

pub fn ld_e_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::B); }
pub fn ld_e_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::C); }
pub fn ld_e_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::D); }
pub fn ld_e_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::E); }
pub fn ld_e_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::H); }
pub fn ld_e_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::L); }
pub fn ld_e_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::A); }

pub fn ld_h_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::B); }
pub fn ld_h_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::C); }
pub fn ld_h_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::D); }
pub fn ld_h_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::E); }
pub fn ld_h_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::H); }
pub fn ld_h_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::L); }
pub fn ld_h_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::A); }

pub fn ld_l_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::B); }
pub fn ld_l_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::C); }
pub fn ld_l_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::D); }
pub fn ld_l_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::E); }
pub fn ld_l_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::H); }
pub fn ld_l_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::L); }
pub fn ld_l_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::A); }

pub fn ld_a_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::B); }
pub fn ld_a_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::C); }
pub fn ld_a_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::D); }
pub fn ld_a_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::E); }
pub fn ld_a_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::H); }
pub fn ld_a_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::L); }
pub fn ld_a_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::A); }

pub fn ld_b_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::B); }
pub fn ld_c_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::C); }
pub fn ld_d_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::D); }
pub fn ld_e_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::E); }
pub fn ld_h_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::H); }
pub fn ld_l_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::L); }
pub fn ld_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::A); }

pub fn ld_b_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::B); }
pub fn ld_c_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::C); }
pub fn ld_d_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::D); }
pub fn ld_e_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::E); }
pub fn ld_h_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::H); }
pub fn ld_l_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::L); }
pub fn ld_a_hlptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r8_hlptr(cpu, RegisterR8::A); }

pub fn ld_hlptr_b(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::B); }
pub fn ld_hlptr_c(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::C); }
pub fn ld_hlptr_d(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::D); }
pub fn ld_hlptr_e(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::E); }
pub fn ld_hlptr_h(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::H); }
pub fn ld_hlptr_l(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::L); }
pub fn ld_hlptr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_hlptr_r8(cpu, RegisterR8::A); }

/// Stores an immediate 8 bit value at the address stored in HL.
pub fn ld_hlptr_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value   = cpu.fetch_u8();
    let address = cpu.get_r16(RegisterR16::HL);
    cpu.get_mmu_mut().write_u8(address, value);
}

pub fn ld_bc_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::BC); }
pub fn ld_de_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::DE); }
pub fn ld_hl_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::HL); }

/// Loads an immediate 16 bit value into the stack pointer.
pub fn ld_sp_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value = cpu.fetch_u16();
    cpu.set_stack_pointer(value);
}

/// Stores the stack pointer at an immediate 16 bit address.
pub fn ld_u16ptr_sp(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_stack_pointer();

    cpu.get_mmu_mut().write_u8(address,                 get_low(value));
    cpu.get_mmu_mut().write_u8(address.wrapping_add(1), get_high(value));
}

pub fn ld_bcptr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r16ptr_a(cpu, RegisterR16::BC); }
pub fn ld_deptr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_r16ptr_a(cpu, RegisterR16::DE); }
pub fn ld_a_bcptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_a_r16ptr(cpu, RegisterR16::BC); }
pub fn ld_a_deptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { ld_a_r16ptr(cpu, RegisterR16::DE); }

/// Stores the A register at the address in HL, incrementing HL afterwards.
pub fn ld_hlptri_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
    cpu.set_r16(RegisterR16::HL, address.wrapping_add(1));
}

/// Stores the A register at the address in HL, decrementing HL afterwards.
pub fn ld_hlptrd_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
    cpu.set_r16(RegisterR16::HL, address.wrapping_sub(1));
}

/// Loads the value at the address in HL into A, incrementing HL afterwards.
pub fn ld_a_hlptri(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
    cpu.set_r16(RegisterR16::HL, address.wrapping_add(1));
}

/// Loads the value at the address in HL into A, decrementing HL afterwards.
pub fn ld_a_hlptrd(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.get_r16(RegisterR16::HL);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
    cpu.set_r16(RegisterR16::HL, address.wrapping_sub(1));
}

/// Stores the A register at an immediate 16 bit address.
pub fn ld_u16ptr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}

/// Loads the value at an immediate 16 bit address into the A register.
pub fn ld_a_u16ptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}

/// Stores the A register into the IO register page at an immediate offset.
pub fn ldh_u8_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset  = cpu.fetch_u8();
    let address = to_u16(0xff, offset);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}

/// Loads a value from the IO register page at an immediate offset into A.
pub fn ldh_a_u8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset  = cpu.fetch_u8();
    let address = to_u16(0xff, offset);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}

/// Stores the A register into the IO register page at the offset in C.
pub fn ldh_cptr_a(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset  = cpu.get_r8(RegisterR8::C);
    let address = to_u16(0xff, offset);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}

/// Loads a value from the IO register page at the offset in C into A.
pub fn ldh_a_cptr(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset  = cpu.get_r8(RegisterR8::C);
    let address = to_u16(0xff, offset);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}

/// Copies the value of HL into the stack pointer.
pub fn ld_sp_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let value = cpu.get_r16(RegisterR16::HL);
    cpu.set_stack_pointer(value);
}

/// Loads the sum of the stack pointer and a signed immediate offset
/// into HL. The half-carry and carry flags are computed on the lower
/// byte of the stack pointer, independent of the sign of the offset.
pub fn ld_hl_sp_i8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset = cpu.fetch_i8() as i16 as u16;
    let sp     = cpu.get_stack_pointer();

    let half_carry = ((sp & 0x000f) + (offset & 0x000f)) > 0x000f;
    let carry      = ((sp & 0x00ff) + (offset & 0x00ff)) > 0x00ff;

    cpu.set_r16(RegisterR16::HL, sp.wrapping_add(offset));
    cpu.set_flags(false, false, half_carry, carry);
}

pub fn push_bc(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { push_r16(cpu, RegisterR16::BC); }
pub fn push_de(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { push_r16(cpu, RegisterR16::DE); }
pub fn push_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { push_r16(cpu, RegisterR16::HL); }
pub fn push_af(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { push_r16(cpu, RegisterR16::AF); }

pub fn pop_bc(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::BC); }
pub fn pop_de(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::DE); }
pub fn pop_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::HL); }
pub fn pop_af(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::AF); }
