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

mod common;

use dmg_core::boot_rom::BootRom;
use dmg_core::emulator_core::EmulatorCore;
use dmg_core::mmu::locations::{MEMORY_LOCATION_BOOT_ROM_DISABLE, MEMORY_LOCATION_IF};

use common::{create_device, create_device_with_program};


#[test]
fn echo_ram_mirrors_work_ram() {
    let mut emulator = create_device();

    for offset in 0x0000u16 .. 0x1e00 {
        let wram_address = 0xc000 + offset;
        let echo_address = 0xe000 + offset;

        // writes into work RAM are visible through echo RAM
        emulator.get_mmu_mut().write_u8(wram_address, (offset & 0xff) as u8);
        assert_eq!(
            emulator.get_mmu().read_u8(wram_address),
            emulator.get_mmu().read_u8(echo_address)
        );

        // writes into echo RAM land in work RAM
        emulator.get_mmu_mut().write_u8(echo_address, ((offset ^ 0xff) & 0xff) as u8);
        assert_eq!(
            ((offset ^ 0xff) & 0xff) as u8,
            emulator.get_mmu().read_u8(wram_address)
        );
    }
}


#[test]
fn the_prohibited_area_reads_as_open_bus() {
    let mut emulator = create_device();

    for address in 0xfea0u16 ..= 0xfeff {
        emulator.get_mmu_mut().write_u8(address, 0x12);
        assert_eq!(0xff, emulator.get_mmu().read_u8(address));
    }
}


#[test]
fn word_accesses_are_little_endian() {
    let mut emulator = create_device();

    emulator.get_mmu_mut().write_u16(0xc100, 0xbeef);

    assert_eq!(0xef,   emulator.get_mmu().read_u8(0xc100));
    assert_eq!(0xbe,   emulator.get_mmu().read_u8(0xc101));
    assert_eq!(0xbeef, emulator.get_mmu().read_u16(0xc100));
}


#[test]
fn word_accesses_wrap_around_the_address_space() {
    let mut emulator = create_device();

    // the high byte of a word written to 0xFFFF wraps around to 0x0000,
    // which behaves like plain RAM while no cartridge is inserted
    emulator.get_mmu_mut().write_u16(0xffff, 0xbeef);

    assert_eq!(0xef, emulator.get_mmu().read_u8(0xffff));
    assert_eq!(0xbe, emulator.get_mmu().read_u8(0x0000));
    assert_eq!(0xbeef, emulator.get_mmu().read_u16(0xffff));
}


#[test]
fn vram_and_oam_behave_as_storage() {
    let mut emulator = create_device();

    emulator.get_mmu_mut().write_u8(0x8000, 0x11);
    emulator.get_mmu_mut().write_u8(0x9fff, 0x22);
    emulator.get_mmu_mut().write_u8(0xfe00, 0x33);
    emulator.get_mmu_mut().write_u8(0xfe9f, 0x44);

    assert_eq!(0x11, emulator.get_mmu().read_u8(0x8000));
    assert_eq!(0x22, emulator.get_mmu().read_u8(0x9fff));
    assert_eq!(0x33, emulator.get_mmu().read_u8(0xfe00));
    assert_eq!(0x44, emulator.get_mmu().read_u8(0xfe9f));
}


#[test]
fn the_flags_register_low_nibble_is_fixed_to_zero() {
    // POP AF has to discard the lower nibble popped from the stack
    let mut emulator = create_device_with_program(&[
        0x31, 0xf0, 0xc0,   // LD SP, 0xc0f0
        0xf1,               // POP AF
    ]);

    emulator.get_mmu_mut().write_u8(0xc0f0, 0xff);
    emulator.get_mmu_mut().write_u8(0xc0f1, 0x12);

    emulator.step();
    let cycles = emulator.step();

    assert_eq!(12,   cycles);
    assert_eq!(0x12, emulator.cpu.get_r8(dmg_core::cpu::cpu::RegisterR8::A));
    assert_eq!(0xf0, emulator.cpu.get_r8(dmg_core::cpu::cpu::RegisterR8::F));
}


#[test]
fn the_boot_rom_overlays_the_rom_area_until_disabled() {
    let mut boot_rom_data = [0u8; 256];
    for i in 0..256 {
        boot_rom_data[i] = (i as u8) ^ 0xa5;
    }

    let mut builder = EmulatorCore::build();
    builder.set_boot_rom(BootRom::new(boot_rom_data));
    let mut emulator = builder.finish();

    // with a boot ROM installed, execution starts at 0x0000
    assert_eq!(0x0000, emulator.cpu.get_instruction_pointer());

    // reads within the overlay return boot ROM data
    assert_eq!(0x00 ^ 0xa5, emulator.get_mmu().read_u8(0x0000));
    assert_eq!(0x50 ^ 0xa5, emulator.get_mmu().read_u8(0x0050));
    assert_eq!(0xff ^ 0xa5, emulator.get_mmu().read_u8(0x00ff));
    assert!( emulator.get_mmu().get_banking_snapshot().boot_rom_enabled);

    // any non-zero write disables the overlay
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_BOOT_ROM_DISABLE, 0x01);
    assert_eq!(0x00, emulator.get_mmu().read_u8(0x0050));
    assert!(!emulator.get_mmu().get_banking_snapshot().boot_rom_enabled);

    // writing zero afterwards does not enable it again
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_BOOT_ROM_DISABLE, 0x00);
    assert_eq!(0x00, emulator.get_mmu().read_u8(0x0050));
    assert!(!emulator.get_mmu().get_banking_snapshot().boot_rom_enabled);

    // a reset restores the overlay
    emulator.reset();
    assert_eq!(0x50 ^ 0xa5, emulator.get_mmu().read_u8(0x0050));
    assert!( emulator.get_mmu().get_banking_snapshot().boot_rom_enabled);
}


#[test]
fn the_interrupt_flags_upper_bits_read_as_set() {
    let mut emulator = create_device();

    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IF, 0x00);
    assert_eq!(0xe0, emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));

    // the upper bits of a written value are discarded
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IF, 0xff);
    assert_eq!(0xff, emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));
    emulator.get_mmu_mut().write_u8(MEMORY_LOCATION_IF, 0x1f);
    assert_eq!(0xff, emulator.get_mmu().read_u8(MEMORY_LOCATION_IF));
}


#[test]
fn sound_registers_store_written_values() {
    let mut emulator = create_device();

    emulator.get_mmu_mut().write_u8(0xff10, 0x3c);
    emulator.get_mmu_mut().write_u8(0xff3f, 0x99);

    assert_eq!(0x3c, emulator.get_mmu().read_u8(0xff10));
    assert_eq!(0x99, emulator.get_mmu().read_u8(0xff3f));
}


#[test]
fn unhandled_io_registers_read_as_open_bus() {
    let mut emulator = create_device();

    // the joypad and LCD registers are not part of this core
    emulator.get_mmu_mut().write_u8(0xff00, 0x20);
    emulator.get_mmu_mut().write_u8(0xff40, 0x91);
    emulator.get_mmu_mut().write_u8(0xff45, 0x42);

    assert_eq!(0xff, emulator.get_mmu().read_u8(0xff00));
    assert_eq!(0xff, emulator.get_mmu().read_u8(0xff40));
    assert_eq!(0xff, emulator.get_mmu().read_u8(0xff45));
}


#[test]
fn banking_snapshot_defaults_without_a_cartridge() {
    let emulator = create_device();
    let snapshot = emulator.get_mmu().get_banking_snapshot();

    assert_eq!(false, snapshot.boot_rom_enabled);
    assert_eq!(1,     snapshot.rom_bank);
    assert_eq!(0,     snapshot.ram_bank);
    assert_eq!(false, snapshot.ram_enabled);
}


#[test]
fn hram_is_read_write() {
    let mut emulator = create_device();

    emulator.get_mmu_mut().write_u8(0xff80, 0x5a);
    emulator.get_mmu_mut().write_u8(0xfffe, 0xa5);

    assert_eq!(0x5a, emulator.get_mmu().read_u8(0xff80));
    assert_eq!(0xa5, emulator.get_mmu().read_u8(0xfffe));
}
