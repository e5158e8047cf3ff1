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

use dmg_core::emulator_core::{DeviceConfig, EmulatorCore};
use dmg_core::mmu::locations::MEMORY_LOCATION_IF;


/// The address where test programs are placed, which is the
/// entry point of a regular cartridge program.
pub const PROGRAM_START : u16 = 0x0100;


/// Creates an emulator instance without any cartridge inserted.
/// The ROM address space behaves like plain RAM in this setup, so tests
/// can write small programs into it. The pending interrupt left by the
/// power-on defaults is cleared to give each test a clean slate.
pub fn create_device() -> EmulatorCore {
    let mut emulator = EmulatorCore::new(DeviceConfig::default());
    emulator.initialize();

    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IF, 0x00);

    emulator
}


/// Creates an emulator instance with a test program placed at the
/// cartridge entry point, where the instruction pointer starts.
pub fn create_device_with_program(program: &[u8]) -> EmulatorCore {
    let mut emulator = create_device();

    for (index, byte) in program.iter().enumerate() {
        emulator.get_mmu_mut().write_u8(PROGRAM_START + (index as u16), *byte);
    }

    emulator
}
