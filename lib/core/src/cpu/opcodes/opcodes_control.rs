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

//! Implementations of the CPU control opcodes.

use crate::cpu::cpu::Cpu;
use crate::cpu::opcode::OpCodeContext;


pub fn nop(_cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
}


/// Suspends the CPU until an interrupt becomes pending.
/// When the interrupt master enable flag is cleared, the CPU wakes
/// up without dispatching the interrupt.
pub fn halt(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    cpu.enter_halt();
}


/// Suspends the CPU in a deep sleep state.
/// Without emulated input hardware there is no event to wake the CPU
/// up again, so it stays suspended until the device is being reset.
pub fn stop(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    cpu.enter_stop();
}


/// Disables interrupts with immediate effect.
pub fn disable_interrupts(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    cpu.disable_interrupts();
}


/// Enables interrupts after the next instruction has been executed.
pub fn enable_interrupts(cpu: &mut Cpu, _ctx: &mut OpCodeContext) {
    cpu.enable_interrupts_deferred();
}


/// Handler for the unused opcode values.
/// Fetching one of those on real hardware freezes the CPU, so the
/// emulated CPU locks up as well instead of guessing any behavior.
pub fn invalid_opcode(cpu: &mut Cpu, ctx: &mut OpCodeContext) {
    #[cfg(feature = "std")]
    eprintln!(
        "invalid opcode 0x{:02x} at 0x{:04x}; cpu locked up",
        ctx.get_opcode_id(),
        ctx.get_opcode_address()
    );

    #[cfg(not(feature = "std"))]
    let _ = &ctx;

    cpu.lock_up();
}
