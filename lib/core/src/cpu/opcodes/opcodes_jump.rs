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

//! Implementations of all jump, call and return opcodes.

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR16};
use crate::cpu::opcode::OpCodeContext;


/// The additional cycles consumed by a conditional jump being taken.
const CYCLES_JUMP_TAKEN : u64 = 4;

/// The additional cycles consumed by a conditional call or return
/// being taken.
const CYCLES_CALL_TAKEN : u64 = 12;


/// Performs a relative jump when the condition is met.
/// The jump offset is fetched before the condition is evaluated,
/// so the instruction pointer advances beyond the whole instruction
/// in either case.
fn jump_relative_if(cpu: &mut Cpu, ctx: &mut OpCodeContext, condition: bool) {
    let offset = cpu.fetch_i8();

    if condition {
        cpu.jump_relative(offset);
        ctx.add_cycles(CYCLES_JUMP_TAKEN);
    }
}

/// Performs an absolute jump when the condition is met.
fn jump_if(cpu: &mut Cpu, ctx: &mut OpCodeContext, condition: bool) {
    let target = cpu.fetch_u16();

    if condition {
        cpu.set_instruction_pointer(target);
        ctx.add_cycles(CYCLES_JUMP_TAKEN);
    }
}

/// Calls a subroutine when the condition is met, pushing the address
/// of the next instruction onto the stack.
fn call_if(cpu: &mut Cpu, ctx: &mut OpCodeContext, condition: bool) {
    let target = cpu.fetch_u16();

    if condition {
        let return_address = cpu.get_instruction_pointer();
        cpu.push_u16(return_address);
        cpu.set_instruction_pointer(target);
        ctx.add_cycles(CYCLES_CALL_TAKEN);
    }
}

/// Returns from a subroutine when the condition is met.
fn return_if(cpu: &mut Cpu, ctx: &mut OpCodeContext, condition: bool) {
    if condition {
        let return_address = cpu.pop_u16();
        cpu.set_instruction_pointer(return_address);
        ctx.add_cycles(CYCLES_CALL_TAKEN);
    }
}

/// Calls the restart handler at a fixed address.
fn restart(cpu: &mut Cpu, target: u16) {
    let return_address = cpu.get_instruction_pointer();
    cpu.push_u16(return_address);
    cpu.set_instruction_pointer(target);
}


/// Performs an unconditional relative jump.
pub fn jr_i8(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let offset = cpu.fetch_i8();
    cpu.jump_relative(offset);
}

pub fn jr_nz_i8(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Zero);  jump_relative_if(cpu, ctx, condition); }
pub fn jr_z_i8(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Zero);  jump_relative_if(cpu, ctx, condition); }
pub fn jr_nc_i8(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Carry); jump_relative_if(cpu, ctx, condition); }
pub fn jr_c_i8(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Carry); jump_relative_if(cpu, ctx, condition); }

/// Performs an unconditional absolute jump.
pub fn jp_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let target = cpu.fetch_u16();
    cpu.set_instruction_pointer(target);
}

pub fn jp_nz_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Zero);  jump_if(cpu, ctx, condition); }
pub fn jp_z_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Zero);  jump_if(cpu, ctx, condition); }
pub fn jp_nc_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Carry); jump_if(cpu, ctx, condition); }
pub fn jp_c_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Carry); jump_if(cpu, ctx, condition); }

/// Jumps to the address stored in HL.
pub fn jp_hl(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let target = cpu.get_r16(RegisterR16::HL);
    cpu.set_instruction_pointer(target);
}

/// Performs an unconditional call, pushing the address of the
/// next instruction onto the stack.
pub fn call_u16(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let target         = cpu.fetch_u16();
    let return_address = cpu.get_instruction_pointer();

    cpu.push_u16(return_address);
    cpu.set_instruction_pointer(target);
}

pub fn call_nz_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Zero);  call_if(cpu, ctx, condition); }
pub fn call_z_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Zero);  call_if(cpu, ctx, condition); }
pub fn call_nc_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Carry); call_if(cpu, ctx, condition); }
pub fn call_c_u16(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Carry); call_if(cpu, ctx, condition); }

/// Performs an unconditional return from a subroutine.
pub fn ret(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let return_address = cpu.pop_u16();
    cpu.set_instruction_pointer(return_address);
}

pub fn ret_nz(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Zero);  return_if(cpu, ctx, condition); }
pub fn ret_z(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Zero);  return_if(cpu, ctx, condition); }
pub fn ret_nc(cpu: &mut Cpu, ctx: &mut OpCodeContext) { let condition = !cpu.is_flag_set(CpuFlag::Carry); return_if(cpu, ctx, condition); }
pub fn ret_c(cpu: &mut Cpu, ctx: &mut OpCodeContext)  { let condition =  cpu.is_flag_set(CpuFlag::Carry); return_if(cpu, ctx, condition); }

/// Returns from an interrupt service routine,
/// enabling interrupts with immediate effect.
pub fn reti(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    let return_address = cpu.pop_u16();
    cpu.set_instruction_pointer(return_address);
    cpu.enable_interrupts_immediately();
}

pub fn rst_00(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0000); }
pub fn rst_08(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0008); }
pub fn rst_10(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0010); }
pub fn rst_18(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0018); }
pub fn rst_20(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0020); }
pub fn rst_28(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0028); }
pub fn rst_30(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0030); }
pub fn rst_38(cpu: &mut Cpu, _ctx: &mut OpCodeContext) { restart(cpu, 0x0038); }
