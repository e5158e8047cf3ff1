/*
 * Copyright (C) 2022-2024 by Christian Fischer
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

use alloc::format;
use alloc::string::String;

use crate::cpu::cpu::Cpu;
use crate::emulator_core::Clock;
use crate::mmu::mmu::Mmu;


/// The opcode byte introducing a two byte extended opcode.
pub const OPCODE_BYTE_EXTENSION : u8 = 0xcb;


/// The function signature of an opcode's implementation.
pub type OpCodeProc = fn(&mut Cpu, &mut OpCodeContext);


/// Stores the information of a single CPU operation.
pub struct OpCode {
    /// The mnemonic of the opcode. Parameter placeholders like `{x8}`
    /// or `{x16}` are replaced by the actual values when formatting
    /// a fetched instruction.
    pub name: &'static str,

    /// The length of the whole instruction in bytes,
    /// including the opcode itself and its parameters.
    pub bytes: u16,

    /// The number of T-cycles consumed by this opcode.
    /// For conditional jumps, calls and returns this is the cost of the
    /// untaken branch; the implementation adds the additional cycles
    /// of the taken branch via [OpCodeContext::add_cycles].
    pub cycles: Clock,

    /// The function implementing the opcode's behavior.
    pub proc: OpCodeProc,
}


/// An instruction fetched from memory, ready to be executed.
pub struct Instruction {
    /// The opcode to be executed.
    pub opcode: &'static OpCode,

    /// The numerical value of the opcode; extended opcodes
    /// carry the 0xCB prefix in their high byte.
    pub opcode_id: u16,

    /// The address the opcode was fetched from.
    pub opcode_address: u16,

    /// The address of the opcode's first parameter byte, if any.
    pub param_address: u16,
}


/// The context of an opcode being executed.
/// Tracks the number of cycles consumed by the current instruction.
pub struct OpCodeContext {
    opcode: &'static OpCode,
    opcode_id: u16,
    opcode_address: u16,
    cycles: Clock,
}


impl OpCodeContext {
    /// Creates the context for a fetched instruction.
    pub fn for_instruction(instruction: &Instruction) -> OpCodeContext {
        OpCodeContext {
            opcode:         instruction.opcode,
            opcode_id:      instruction.opcode_id,
            opcode_address: instruction.opcode_address,
            cycles:         instruction.opcode.cycles,
        }
    }


    /// Get the opcode being executed.
    pub fn get_opcode(&self) -> &'static OpCode {
        self.opcode
    }


    /// Get the numerical value of the opcode being executed.
    pub fn get_opcode_id(&self) -> u16 {
        self.opcode_id
    }


    /// Get the address the opcode was fetched from.
    pub fn get_opcode_address(&self) -> u16 {
        self.opcode_address
    }


    /// Adds additional cycles consumed by the current instruction,
    /// like the surcharge of a conditional branch being taken.
    pub fn add_cycles(&mut self, cycles: Clock) {
        self.cycles += cycles;
    }


    /// Get the total number of cycles consumed by the current instruction.
    pub fn get_cycles_consumed(&self) -> Clock {
        self.cycles
    }
}


impl Instruction {
    /// Formats the instruction, replacing parameter placeholders within
    /// the opcode's mnemonic by the actual parameter values read from memory.
    pub fn to_string(&self, mmu: &Mmu) -> String {
        let mut text = String::from(self.opcode.name);

        if text.contains("{x16}") {
            let value = mmu.read_u16(self.param_address);
            text = text.replace("{x16}", &format!("{:04x}", value));
        }

        if text.contains("{x8}") {
            let value = mmu.read_u8(self.param_address);
            text = text.replace("{x8}", &format!("{:02x}", value));
        }

        if text.contains("{i8}") {
            let value = mmu.read_u8(self.param_address) as i8;
            text = text.replace("{i8}", &format!("{}", value));
        }

        if text.contains("{u8}") {
            let value = mmu.read_u8(self.param_address);
            text = text.replace("{u8}", &format!("{}", value));
        }

        text
    }
}
