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

use dmg_core::cartridge::{Cartridge, CartridgeHeader, MemoryBankController, ROM_BANK_SIZE};
use dmg_core::utils::ioerr::ErrorCode;


/// Builds a synthetic ROM image. Each bank carries its own index in its
/// first byte, so tests can verify which bank is currently mapped.
fn build_rom(bank_count: usize, cartridge_type: u8, ram_size_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; bank_count * ROM_BANK_SIZE];

    for bank in 0..bank_count {
        rom[bank * ROM_BANK_SIZE] = bank as u8;
    }

    // header: title, cartridge type, ROM size, RAM size
    for (i, b) in b"BANKTEST".iter().enumerate() {
        rom[0x0134 + i] = *b;
    }

    rom[0x0147] = cartridge_type;
    rom[0x0148] = (bank_count / 2).trailing_zeros() as u8;
    rom[0x0149] = ram_size_code;

    let checksum = CartridgeHeader::compute_checksum(&rom);
    rom[0x014d] = checksum;

    rom
}


#[test]
fn the_header_gets_parsed() {
    let cartridge = Cartridge::from_bytes(build_rom(4, 0x01, 0x00)).unwrap();
    let header    = cartridge.get_header();

    assert_eq!("BANKTEST", header.title);
    assert_eq!(MemoryBankController::Mbc1, header.mbc);
    assert_eq!(4 * ROM_BANK_SIZE, header.rom_size);
    assert_eq!(0, header.ram_size);
    assert!(!header.has_ram);
    assert!( header.checksum_valid);
}


#[test]
fn a_corrupted_header_checksum_is_detected() {
    let mut rom = build_rom(2, 0x00, 0x00);
    rom[0x0134] ^= 0xff;

    let cartridge = Cartridge::from_bytes(rom).unwrap();
    assert!(!cartridge.get_header().checksum_valid);
}


#[test]
fn undersized_and_odd_sized_images_are_rejected() {
    match Cartridge::from_bytes(vec![0u8; 0x4000]) {
        Err(ErrorCode::InvalidImage(_)) => { }
        _ => panic!("expected an undersized image to be rejected"),
    }

    match Cartridge::from_bytes(vec![0u8; 0x8000 + 1]) {
        Err(ErrorCode::InvalidImage(_)) => { }
        _ => panic!("expected an odd sized image to be rejected"),
    }
}


#[test]
fn unsupported_bank_controllers_are_rejected() {
    let mut rom = build_rom(2, 0x00, 0x00);
    rom[0x0147] = 0x13;     // MBC3 with RAM and battery

    match Cartridge::from_bytes(rom) {
        Err(ErrorCode::NotSupported) => { }
        _ => panic!("expected an unsupported bank controller to be rejected"),
    }
}


#[test]
fn the_first_bank_is_always_fixed() {
    let mut cartridge = Cartridge::from_bytes(build_rom(4, 0x01, 0x00)).unwrap();

    assert_eq!(0, cartridge.read_rom(0x0000));

    // switching the bank does not affect the fixed area
    cartridge.write_mbc_register(0x2000, 0x03);
    assert_eq!(0, cartridge.read_rom(0x0000));
    assert_eq!(3, cartridge.read_rom(0x4000));
}


#[test]
fn bank_zero_selects_bank_one() {
    let mut cartridge = Cartridge::from_bytes(build_rom(4, 0x01, 0x00)).unwrap();

    assert_eq!(1, cartridge.read_rom(0x4000));

    cartridge.write_mbc_register(0x2000, 0x00);
    assert_eq!(1, cartridge.read_rom(0x4000));
    assert_eq!(1, cartridge.get_selected_rom_bank());
}


#[test]
fn the_secondary_register_extends_the_rom_bank() {
    // 128 banks (2 MiB) to make use of the upper bank bits
    let mut cartridge = Cartridge::from_bytes(build_rom(128, 0x01, 0x00)).unwrap();

    // bank 0x20 is translated into bank 0x21, since the lower
    // 5 bank bits are zero
    cartridge.write_mbc_register(0x2000, 0x00);
    cartridge.write_mbc_register(0x4000, 0x01);
    assert_eq!(0x21, cartridge.get_selected_rom_bank());
    assert_eq!(0x21, cartridge.read_rom(0x4000));

    cartridge.write_mbc_register(0x2000, 0x12);
    cartridge.write_mbc_register(0x4000, 0x02);
    assert_eq!(0x52, cartridge.get_selected_rom_bank());
    assert_eq!(0x52, cartridge.read_rom(0x4000));
}


#[test]
fn ram_is_gated_by_the_enable_register() {
    let mut cartridge = Cartridge::from_bytes(build_rom(4, 0x03, 0x03)).unwrap();

    // disabled RAM reads as open bus and discards writes
    cartridge.write_ram(0xa000, 0x42);
    assert_eq!(0xff, cartridge.read_ram(0xa000));

    // a value with 0x0A in the lower nibble enables the RAM
    cartridge.write_mbc_register(0x0000, 0x0a);
    assert!( cartridge.is_ram_enabled());

    cartridge.write_ram(0xa000, 0x42);
    assert_eq!(0x42, cartridge.read_ram(0xa000));

    // any other value disables it again
    cartridge.write_mbc_register(0x0000, 0x00);
    assert!(!cartridge.is_ram_enabled());
    assert_eq!(0xff, cartridge.read_ram(0xa000));
}


#[test]
fn ram_banking_needs_the_ram_banking_mode() {
    let mut cartridge = Cartridge::from_bytes(build_rom(4, 0x03, 0x03)).unwrap();
    cartridge.write_mbc_register(0x0000, 0x0a);

    cartridge.write_ram(0xa000, 0x11);

    // in ROM banking mode the secondary register does not switch RAM banks
    cartridge.write_mbc_register(0x4000, 0x02);
    assert_eq!(0,    cartridge.get_selected_ram_bank());
    assert_eq!(0x11, cartridge.read_ram(0xa000));

    // in RAM banking mode it does
    cartridge.write_mbc_register(0x6000, 0x01);
    assert_eq!(2,    cartridge.get_selected_ram_bank());
    assert_ne!(0x11, cartridge.read_ram(0xa000));

    cartridge.write_ram(0xa000, 0x22);
    assert_eq!(0x22, cartridge.read_ram(0xa000));

    // switching back shows the first bank's data again
    cartridge.write_mbc_register(0x6000, 0x00);
    assert_eq!(0x11, cartridge.read_ram(0xa000));
}


#[test]
fn reset_restores_the_power_on_banking_state() {
    let mut cartridge = Cartridge::from_bytes(build_rom(4, 0x03, 0x03)).unwrap();

    cartridge.write_mbc_register(0x0000, 0x0a);
    cartridge.write_mbc_register(0x2000, 0x03);
    cartridge.write_mbc_register(0x6000, 0x01);
    cartridge.write_ram(0xa000, 0x77);

    cartridge.reset();

    assert!(!cartridge.is_ram_enabled());
    assert_eq!(1, cartridge.get_selected_rom_bank());
    assert_eq!(0, cartridge.get_selected_ram_bank());

    // battery buffered RAM keeps its content across a reset
    cartridge.write_mbc_register(0x0000, 0x0a);
    assert_eq!(0x77, cartridge.read_ram(0xa000));
}


#[test]
fn a_plain_rom_ignores_mbc_register_writes() {
    let mut cartridge = Cartridge::from_bytes(build_rom(2, 0x00, 0x00)).unwrap();

    cartridge.write_mbc_register(0x2000, 0x05);
    assert_eq!(1, cartridge.get_selected_rom_bank());
    assert_eq!(1, cartridge.read_rom(0x4000));
}
