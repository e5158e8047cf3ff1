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

use alloc::format;
use alloc::string::String;

use core::fmt::{Display, Formatter};

use crate::cpu::interrupts::Interrupt;
use crate::cpu::opcode::{Instruction, OPCODE_BYTE_EXTENSION};
use crate::cpu::opcodes::{OPCODE_TABLE, OPCODE_TABLE_EXTENDED};
use crate::emulator_core::Clock;
use crate::mmu::mmu::Mmu;
use crate::utils::{get_high, get_low, to_u16};


/// The clock speed of the CPU, measured in T-cycles per second.
pub const CPU_CLOCK_SPEED : Clock = 4_194_304;

/// The number of cycles consumed by dispatching an interrupt.
pub const INTERRUPT_DISPATCH_CYCLES : Clock = 20;


/// An enum of the 8 bit registers of the CPU.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RegisterR8 {
    A = 0,
    F = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    H = 6,
    L = 7,
}


/// An enum of the 16 bit register pairs of the CPU.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RegisterR16 {
    AF,
    BC,
    DE,
    HL,
}


/// The flags stored within the high nibble of the F register.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CpuFlag {
    Zero,
    Negative,
    HalfCarry,
    Carry,
}


/// The state machine controlling the interrupt master enable flag.
/// An enable via the EI opcode is deferred: it becomes effective
/// after the instruction following EI has been executed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ImeState {
    Disabled,
    EnablePending,
    Enabled,
}


/// The CPU of the emulated device.
/// It owns the MMU, through which all memory accesses are performed.
pub struct Cpu {
    /// The 8 bit registers A, F, B, C, D, E, H and L.
    registers: [u8; 8],

    /// The address of the next instruction to be fetched.
    instruction_pointer: u16,

    /// The current stack pointer.
    stack_pointer: u16,

    /// The state of the interrupt master enable flag.
    ime: ImeState,

    /// Flag whether the CPU is suspended by the HALT opcode.
    halted: bool,

    /// Flag whether the CPU is suspended by the STOP opcode.
    stopped: bool,

    /// Flag whether the CPU is locked up after fetching an
    /// invalid opcode.
    locked_up: bool,

    /// The device MMU, owned by the CPU.
    mmu: Mmu,
}


impl RegisterR16 {
    /// Get the pair of 8 bit registers forming this 16 bit register,
    /// the high byte register first.
    pub const fn to_r8(self) -> (RegisterR8, RegisterR8) {
        match self {
            RegisterR16::AF => (RegisterR8::A, RegisterR8::F),
            RegisterR16::BC => (RegisterR8::B, RegisterR8::C),
            RegisterR16::DE => (RegisterR8::D, RegisterR8::E),
            RegisterR16::HL => (RegisterR8::H, RegisterR8::L),
        }
    }
}


impl CpuFlag {
    /// Get the bit of this flag within the F register.
    pub const fn bit(self) -> u8 {
        match self {
            CpuFlag::Zero      => 7,
            CpuFlag::Negative  => 6,
            CpuFlag::HalfCarry => 5,
            CpuFlag::Carry     => 4,
        }
    }
}


impl Cpu {
    /// Creates a new CPU object, taking the ownership of the given MMU.
    pub fn new(mmu: Mmu) -> Cpu {
        Cpu {
            registers:           [0x00; 8],
            instruction_pointer: 0x0000,
            stack_pointer:       0x0000,
            ime:                 ImeState::Disabled,
            halted:              false,
            stopped:             false,
            locked_up:           false,
            mmu,
        }
    }


    /// Get the device MMU.
    pub fn get_mmu(&self) -> &Mmu {
        &self.mmu
    }


    /// Get the device MMU.
    pub fn get_mmu_mut(&mut self) -> &mut Mmu {
        &mut self.mmu
    }


    /// Get the value of an 8 bit register.
    pub fn get_r8(&self, register: RegisterR8) -> u8 {
        self.registers[register as usize]
    }


    /// Set the value of an 8 bit register.
    /// The lower nibble of the F register is fixed to zero,
    /// any value written into it is discarded.
    pub fn set_r8(&mut self, register: RegisterR8, value: u8) {
        let value = match register {
            RegisterR8::F => value & 0xf0,
            _             => value,
        };

        self.registers[register as usize] = value;
    }


    /// Get the value of a 16 bit register pair.
    pub fn get_r16(&self, register: RegisterR16) -> u16 {
        let (high, low) = register.to_r8();
        to_u16(self.get_r8(high), self.get_r8(low))
    }


    /// Set the value of a 16 bit register pair.
    pub fn set_r16(&mut self, register: RegisterR16, value: u16) {
        let (high, low) = register.to_r8();
        self.set_r8(high, get_high(value));
        self.set_r8(low,  get_low(value));
    }


    /// Get the current instruction pointer.
    pub fn get_instruction_pointer(&self) -> u16 {
        self.instruction_pointer
    }


    /// Moves the instruction pointer to a new location.
    pub fn set_instruction_pointer(&mut self, address: u16) {
        self.instruction_pointer = address;
    }


    /// Moves the instruction pointer relative to its current location.
    pub fn jump_relative(&mut self, offset: i8) {
        self.instruction_pointer = self.instruction_pointer.wrapping_add(offset as i16 as u16);
    }


    /// Get the current stack pointer.
    pub fn get_stack_pointer(&self) -> u16 {
        self.stack_pointer
    }


    /// Set the current stack pointer.
    pub fn set_stack_pointer(&mut self, address: u16) {
        self.stack_pointer = address;
    }


    /// Checks whether a single CPU flag is set.
    pub fn is_flag_set(&self, flag: CpuFlag) -> bool {
        (self.get_r8(RegisterR8::F) & (1u8 << flag.bit())) != 0
    }


    /// Set or clear a single CPU flag.
    pub fn set_flag(&mut self, flag: CpuFlag, value: bool) {
        let f = self.get_r8(RegisterR8::F);

        let f = if value {
            f | (1u8 << flag.bit())
        }
        else {
            f & !(1u8 << flag.bit())
        };

        self.set_r8(RegisterR8::F, f);
    }


    /// Set all four CPU flags at once.
    pub fn set_flags(&mut self, zero: bool, negative: bool, half_carry: bool, carry: bool) {
        let f = 0
            |   (if zero       { 1u8 << CpuFlag::Zero.bit() }      else { 0 })
            |   (if negative   { 1u8 << CpuFlag::Negative.bit() }  else { 0 })
            |   (if half_carry { 1u8 << CpuFlag::HalfCarry.bit() } else { 0 })
            |   (if carry      { 1u8 << CpuFlag::Carry.bit() }     else { 0 })
        ;

        self.set_r8(RegisterR8::F, f);
    }


    /// Fetches the next byte at the instruction pointer
    /// and advances the instruction pointer.
    pub fn fetch_u8(&mut self) -> u8 {
        let value = self.mmu.read_u8(self.instruction_pointer);
        self.instruction_pointer = self.instruction_pointer.wrapping_add(1);

        value
    }


    /// Fetches the next byte at the instruction pointer as a signed value
    /// and advances the instruction pointer.
    pub fn fetch_i8(&mut self) -> i8 {
        self.fetch_u8() as i8
    }


    /// Fetches the next 16 bit word at the instruction pointer
    /// and advances the instruction pointer.
    pub fn fetch_u16(&mut self) -> u16 {
        let low  = self.fetch_u8();
        let high = self.fetch_u8();

        to_u16(high, low)
    }


    /// Pushes a 16 bit value onto the stack, high byte first.
    pub fn push_u16(&mut self, value: u16) {
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        self.mmu.write_u8(self.stack_pointer, get_high(value));

        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        self.mmu.write_u8(self.stack_pointer, get_low(value));
    }


    /// Pops a 16 bit value from the stack.
    pub fn pop_u16(&mut self) -> u16 {
        let low = self.mmu.read_u8(self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_add(1);

        let high = self.mmu.read_u8(self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_add(1);

        to_u16(high, low)
    }


    /// Fetches the next instruction at the instruction pointer,
    /// advancing the instruction pointer beyond the opcode value.
    pub fn fetch_next_instruction(&mut self) -> Instruction {
        let opcode_address = self.instruction_pointer;
        let opcode_byte    = self.fetch_u8();

        let (opcode_id, opcode) = if opcode_byte == OPCODE_BYTE_EXTENSION {
            let extended_byte = self.fetch_u8();
            (
                0x0100u16 | (extended_byte as u16),
                &OPCODE_TABLE_EXTENDED[extended_byte as usize]
            )
        }
        else {
            (
                opcode_byte as u16,
                &OPCODE_TABLE[opcode_byte as usize]
            )
        };

        Instruction {
            opcode,
            opcode_id,
            opcode_address,
            param_address: self.instruction_pointer,
        }
    }


    /// Checks for a pending interrupt to be dispatched. If there is one,
    /// the interrupt master enable flag is cleared, the interrupt's bit
    /// within IF is cleared, the current instruction pointer is pushed
    /// onto the stack and execution continues at the interrupt's service
    /// routine address.
    /// Returns the number of cycles consumed by the dispatching, if any.
    pub fn handle_interrupts(&mut self) -> Option<Clock> {
        if self.ime != ImeState::Enabled {
            return None;
        }

        let pending = self.mmu.get_peripherals().interrupts.get_pending_interrupts();
        if pending.is_empty() {
            return None;
        }

        for interrupt in Interrupt::in_priority_order() {
            if pending.contains(interrupt) {
                self.ime = ImeState::Disabled;
                self.mmu.get_peripherals_mut().interrupts.clear_interrupt(interrupt);

                let instruction_pointer = self.instruction_pointer;
                self.push_u16(instruction_pointer);
                self.instruction_pointer = interrupt.address();

                return Some(INTERRUPT_DISPATCH_CYCLES);
            }
        }

        None
    }


    /// Checks whether interrupts are enabled via the
    /// interrupt master enable flag.
    pub fn is_ime_enabled(&self) -> bool {
        self.ime == ImeState::Enabled
    }


    /// Checks whether an interrupt enable is pending,
    /// waiting for the next instruction to complete.
    pub fn is_ime_pending(&self) -> bool {
        self.ime == ImeState::EnablePending
    }


    /// Requests interrupts to be enabled after the next instruction,
    /// implementing the deferred semantics of the EI opcode.
    pub fn enable_interrupts_deferred(&mut self) {
        if self.ime == ImeState::Disabled {
            self.ime = ImeState::EnablePending;
        }
    }


    /// Enables interrupts with immediate effect,
    /// implementing the semantics of the RETI opcode.
    pub fn enable_interrupts_immediately(&mut self) {
        self.ime = ImeState::Enabled;
    }


    /// Disables interrupts with immediate effect.
    /// Any pending deferred enable is cancelled.
    pub fn disable_interrupts(&mut self) {
        self.ime = ImeState::Disabled;
    }


    /// Turns a pending deferred interrupt enable into an actual one.
    /// To be invoked after the instruction following EI has completed.
    pub fn commit_pending_ime(&mut self) {
        if self.ime == ImeState::EnablePending {
            self.ime = ImeState::Enabled;
        }
    }


    /// Suspends the CPU until an interrupt becomes pending.
    pub fn enter_halt(&mut self) {
        self.halted = true;
    }


    /// Wakes the CPU up from the HALT state.
    pub fn exit_halt(&mut self) {
        self.halted = false;
    }


    /// Checks whether the CPU is suspended by the HALT opcode.
    pub fn is_halted(&self) -> bool {
        self.halted
    }


    /// Suspends the CPU in the deep sleep state of the STOP opcode.
    /// The CPU stays suspended until the device is being reset.
    pub fn enter_stop(&mut self) {
        self.stopped = true;
    }


    /// Checks whether the CPU is suspended by the STOP opcode.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }


    /// Locks the CPU up after fetching an invalid opcode.
    /// The CPU stays locked up until the device is being reset.
    pub fn lock_up(&mut self) {
        self.locked_up = true;
    }


    /// Checks whether the CPU is locked up after an invalid opcode.
    pub fn is_locked_up(&self) -> bool {
        self.locked_up
    }


    /// Checks whether the CPU is currently executing instructions,
    /// which is the case unless it is suspended or locked up.
    pub fn is_running(&self) -> bool {
        !self.halted && !self.stopped && !self.locked_up
    }


    /// Restores the power-on state of the CPU registers and flags.
    pub fn reset(&mut self) {
        self.registers           = [0x00; 8];
        self.instruction_pointer = 0x0000;
        self.stack_pointer       = 0x0000;
        self.ime                 = ImeState::Disabled;
        self.halted              = false;
        self.stopped             = false;
        self.locked_up           = false;
    }


    /// Get a string describing the current CPU state,
    /// to be used by debuggers and test drivers.
    pub fn get_debug_info(&self) -> String {
        format!("{}", self)
    }
}


impl Display for Cpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "af={:02x}{:02x} bc={:02x}{:02x} de={:02x}{:02x} hl={:02x}{:02x} sp=0x{:04x} pc=0x{:04x} ime={}",
            self.get_r8(RegisterR8::A), self.get_r8(RegisterR8::F),
            self.get_r8(RegisterR8::B), self.get_r8(RegisterR8::C),
            self.get_r8(RegisterR8::D), self.get_r8(RegisterR8::E),
            self.get_r8(RegisterR8::H), self.get_r8(RegisterR8::L),
            self.stack_pointer,
            self.instruction_pointer,
            match self.ime {
                ImeState::Disabled      => "0",
                ImeState::EnablePending => "p",
                ImeState::Enabled       => "1",
            }
        )
    }
}
