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

use crate::cpu::interrupts::Interrupt;
use crate::emulator_core::Peripherals;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::MemoryBusConnection;
use crate::utils::{get_high, get_low, to_u16};


/// A snapshot of the current banking state, to be used by debuggers
/// and test drivers to observe the effects of MBC register writes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BankingSnapshot {
    /// Flag whether the boot ROM currently overlays the ROM address space.
    pub boot_rom_enabled: bool,

    /// The index of the ROM bank visible at 0x4000-0x7FFF.
    pub rom_bank: u8,

    /// The index of the cartridge RAM bank visible at 0xA000-0xBFFF.
    pub ram_bank: u8,

    /// Flag whether the cartridge RAM is enabled for access.
    pub ram_enabled: bool,
}


/// The memory management unit, the bus connecting the CPU with all
/// other components. It owns the peripheral components and routes each
/// memory access either into a memory mapped register of a component
/// or into the memory component's storage.
pub struct Mmu {
    peripherals: Peripherals,
}


impl Mmu {
    /// Creates a new MMU object, taking the ownership of the
    /// peripheral components.
    pub fn new(peripherals: Peripherals) -> Mmu {
        Mmu {
            peripherals
        }
    }


    /// Get the peripheral components attached to the memory bus.
    pub fn get_peripherals(&self) -> &Peripherals {
        &self.peripherals
    }


    /// Get the peripheral components attached to the memory bus.
    pub fn get_peripherals_mut(&mut self) -> &mut Peripherals {
        &mut self.peripherals
    }


    /// Reads a single byte from the given address.
    pub fn read_u8(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_SB ..= MEMORY_LOCATION_SC => {
                self.peripherals.serial.on_read(address)
            }

            MEMORY_LOCATION_DIV ..= MEMORY_LOCATION_TAC => {
                self.peripherals.timer.on_read(address)
            }

            MEMORY_LOCATION_IF | MEMORY_LOCATION_IE => {
                self.peripherals.interrupts.on_read(address)
            }

            _ => {
                self.peripherals.mem.on_read(address)
            }
        }
    }


    /// Writes a single byte to the given address.
    pub fn write_u8(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_SB ..= MEMORY_LOCATION_SC => {
                self.peripherals.serial.on_write(address, value);
            }

            MEMORY_LOCATION_DIV ..= MEMORY_LOCATION_TAC => {
                self.peripherals.timer.on_write(address, value);
            }

            MEMORY_LOCATION_IF | MEMORY_LOCATION_IE => {
                self.peripherals.interrupts.on_write(address, value);
            }

            _ => {
                self.peripherals.mem.on_write(address, value);
            }
        }
    }


    /// Reads a 16 bit word from the given address, the low byte first.
    /// The address wraps around at the end of the address space.
    pub fn read_u16(&self, address: u16) -> u16 {
        let low  = self.read_u8(address);
        let high = self.read_u8(address.wrapping_add(1));

        to_u16(high, low)
    }


    /// Writes a 16 bit word to the given address, the low byte first.
    /// The address wraps around at the end of the address space.
    pub fn write_u16(&mut self, address: u16, value: u16) {
        self.write_u8(address,                 get_low(value));
        self.write_u8(address.wrapping_add(1), get_high(value));
    }


    /// Requests an interrupt by setting its bit within the IF register.
    /// This is the entry point for components outside the core, like
    /// a picture processing unit, to raise their interrupts.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.peripherals.interrupts.request_interrupt(interrupt);
    }


    /// Get a snapshot of the current banking state.
    pub fn get_banking_snapshot(&self) -> BankingSnapshot {
        let boot_rom_enabled = self.peripherals.mem.is_boot_rom_enabled();

        match self.peripherals.mem.get_cartridge() {
            Some(cartridge) => BankingSnapshot {
                boot_rom_enabled,
                rom_bank:    cartridge.get_selected_rom_bank(),
                ram_bank:    cartridge.get_selected_ram_bank(),
                ram_enabled: cartridge.is_ram_enabled(),
            },

            None => BankingSnapshot {
                boot_rom_enabled,
                rom_bank:    1,
                ram_bank:    0,
                ram_enabled: false,
            },
        }
    }
}
