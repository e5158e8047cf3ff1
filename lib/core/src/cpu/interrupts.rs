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

use flagset::{flags, FlagSet};

use crate::mmu::locations::*;
use crate::mmu::memory_bus::MemoryBusConnection;


flags! {
    /// The interrupts supported by the hardware.
    /// The numerical value of each entry is its bit within the
    /// IF and IE registers; a lower bit means a higher priority.
    pub enum Interrupt: u8 {
        VBlank  = 0b_0000_0001,
        LcdStat = 0b_0000_0010,
        Timer   = 0b_0000_0100,
        Serial  = 0b_0000_1000,
        Joypad  = 0b_0001_0000,
    }
}


/// A set of [Interrupt] values.
pub type InterruptFlags = FlagSet<Interrupt>;


impl Interrupt {
    /// Get the address of the interrupt service routine
    /// to be invoked when this interrupt gets dispatched.
    pub fn address(self) -> u16 {
        match self {
            Interrupt::VBlank  => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer   => 0x0050,
            Interrupt::Serial  => 0x0058,
            Interrupt::Joypad  => 0x0060,
        }
    }


    /// All interrupts, ordered by their priority, highest priority first.
    pub const fn in_priority_order() -> [Interrupt; 5] {
        [
            Interrupt::VBlank,
            Interrupt::LcdStat,
            Interrupt::Timer,
            Interrupt::Serial,
            Interrupt::Joypad,
        ]
    }
}


/// The registers holding the pending interrupts (IF) and the
/// interrupts enabled for dispatching (IE).
pub struct InterruptRegisters {
    /// The pending interrupts within the IF register.
    interrupt_flags: InterruptFlags,

    /// The raw value written into the IE register.
    /// Only the lower 5 bits take part in dispatching decisions,
    /// but the whole byte is stored and readable.
    interrupt_enable: u8,
}


impl InterruptRegisters {
    /// Constructs a new instance of the InterruptRegisters.
    pub fn new() -> InterruptRegisters {
        InterruptRegisters {
            interrupt_flags:  InterruptFlags::default(),
            interrupt_enable: 0x00,
        }
    }


    /// Requests a single interrupt by setting its bit within IF.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupt_flags |= interrupt;
    }


    /// Requests a set of interrupts by setting their bits within IF.
    pub fn request_interrupts(&mut self, interrupts: InterruptFlags) {
        self.interrupt_flags |= interrupts;
    }


    /// Removes a single interrupt from the IF register,
    /// usually when the interrupt gets dispatched.
    pub fn clear_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupt_flags -= interrupt;
    }


    /// Get the set of interrupts which are pending and enabled.
    pub fn get_pending_interrupts(&self) -> InterruptFlags {
        self.interrupt_flags & InterruptFlags::new_truncated(self.interrupt_enable)
    }


    /// Checks whether any enabled interrupt is pending.
    pub fn has_pending_interrupts(&self) -> bool {
        !self.get_pending_interrupts().is_empty()
    }


    /// Restores the power-on state of the interrupt registers.
    pub fn reset(&mut self) {
        self.interrupt_flags  = InterruptFlags::default();
        self.interrupt_enable = 0x00;
    }
}


impl MemoryBusConnection for InterruptRegisters {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            // the unused upper 3 bits of IF are always set
            MEMORY_LOCATION_IF => 0b_1110_0000 | self.interrupt_flags.bits(),
            MEMORY_LOCATION_IE => self.interrupt_enable,

            _ => 0xff,
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_IF => {
                self.interrupt_flags = InterruptFlags::new_truncated(value);
            }

            MEMORY_LOCATION_IE => {
                self.interrupt_enable = value;
            }

            _ => { }
        }
    }
}
