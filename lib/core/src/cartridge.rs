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

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "file_io")]
use std::{
    fs::File,
    io,
    io::Read,
    path::Path,
};

use crate::mmu::locations::*;
use crate::mmu::memory_data::{MemoryData, MemoryDataDynamic};
use crate::utils::ioerr;


/// The size of a single ROM bank.
pub const ROM_BANK_SIZE : usize = 0x4000;

/// The size of a single cartridge RAM bank.
pub const RAM_BANK_SIZE : usize = 0x2000;

/// The minimum size of a ROM image, which is two ROM banks.
pub const MIN_ROM_SIZE : usize = 2 * ROM_BANK_SIZE;


/// The type of the memory bank controller located on a cartridge,
/// as declared by the cartridge header.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MemoryBankController {
    /// A plain 32 KiB ROM without any banking hardware.
    None,

    /// The MBC1 chip supporting up to 2 MiB ROM and 32 KiB RAM.
    Mbc1,
}


/// The two banking modes of the MBC1 chip.
/// The mode decides whether the 2 bit secondary banking register
/// extends the ROM bank number or selects the current RAM bank.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum BankingMode {
    Rom,
    Ram,
}


/// The parsed fields of a cartridge header.
pub struct CartridgeHeader {
    /// The game title, read from the header's title field.
    pub title: String,

    /// The raw value of the cartridge type byte.
    pub cartridge_type: u8,

    /// The memory bank controller declared by the cartridge type byte.
    pub mbc: MemoryBankController,

    /// Flag whether the cartridge contains RAM.
    pub has_ram: bool,

    /// Flag whether the cartridge RAM is battery buffered.
    pub has_battery: bool,

    /// The ROM size in bytes as declared by the header.
    pub rom_size: usize,

    /// The RAM size in bytes as declared by the header.
    pub ram_size: usize,

    /// The header checksum byte stored in the ROM image.
    pub checksum: u8,

    /// Flag whether the stored checksum matches the computed one.
    pub checksum_valid: bool,
}


/// A cartridge inserted into the device.
/// The cartridge owns the ROM image and the optional battery buffered RAM
/// and implements the banking behavior of its memory bank controller.
/// The first ROM bank is always visible at 0x0000-0x3FFF, independent of
/// the current banking state.
pub struct Cartridge {
    rom: MemoryDataDynamic,
    ram: MemoryDataDynamic,

    header: CartridgeHeader,

    rom_bank_count: usize,

    /// Flag whether the cartridge RAM is enabled for access.
    ram_enabled: bool,

    /// The lower 5 bits of the selected ROM bank.
    /// A value of zero is translated into bank 1 when written.
    rom_bank_low: u8,

    /// The 2 bit secondary banking register.
    bank_high: u8,

    /// The current MBC1 banking mode.
    banking_mode: BankingMode,
}


impl CartridgeHeader {
    /// Parse the header fields from a ROM image.
    /// Expects the image to be validated for its minimum size already.
    fn from_rom(rom: &[u8]) -> Result<CartridgeHeader, ioerr::ErrorCode> {
        let cartridge_type = rom[CARTRIDGE_HEADER_MBC_TYPE];

        let (mbc, has_ram, has_battery) = match cartridge_type {
            0x00 => (MemoryBankController::None, false, false),
            0x01 => (MemoryBankController::Mbc1, false, false),
            0x02 => (MemoryBankController::Mbc1, true,  false),
            0x03 => (MemoryBankController::Mbc1, true,  true),
            0x08 => (MemoryBankController::None, true,  false),
            0x09 => (MemoryBankController::None, true,  true),

            _ => return Err(ioerr::ErrorCode::NotSupported),
        };

        let title = rom[CARTRIDGE_HEADER_TITLE_BEGIN ..= CARTRIDGE_HEADER_TITLE_END]
            .iter()
            .take_while(|b| **b != 0x00)
            .map(|b| *b as char)
            .collect()
        ;

        let rom_size = MIN_ROM_SIZE << rom[CARTRIDGE_HEADER_ROM_SIZE];

        let ram_size = match rom[CARTRIDGE_HEADER_RAM_SIZE] {
            0x00 => 0,
            0x01 => 0x0800,
            0x02 => 0x2000,
            0x03 => 0x8000,

            _ => return Err(ioerr::ErrorCode::NotSupported),
        };

        let checksum       = rom[CARTRIDGE_HEADER_CHECKSUM];
        let checksum_valid = Self::compute_checksum(rom) == checksum;

        Ok(CartridgeHeader {
            title,
            cartridge_type,
            mbc,
            has_ram,
            has_battery,
            rom_size,
            ram_size,
            checksum,
            checksum_valid,
        })
    }


    /// Computes the header checksum over the header bytes 0x0134-0x014C.
    pub fn compute_checksum(rom: &[u8]) -> u8 {
        let mut checksum : u8 = 0;

        for address in CARTRIDGE_HEADER_TITLE_BEGIN .. CARTRIDGE_HEADER_CHECKSUM {
            checksum = checksum.wrapping_sub(rom[address]).wrapping_sub(1);
        }

        checksum
    }
}


impl Cartridge {
    /// Load a cartridge from a ROM image file.
    #[cfg(feature = "file_io")]
    pub fn load_file(filepath: &Path) -> Result<Cartridge, io::Error> {
        let mut file   = File::open(filepath)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        Cartridge::from_bytes(buffer).map_err(|error_code| {
            let error = ioerr::Error {
                source: ioerr::Source::RomImage,
                source_file: Some(filepath.to_path_buf()),
                error_code,
            };

            error.into()
        })
    }


    /// Creates a cartridge from a ROM image.
    /// Fails when the image is smaller than 32 KiB, not a power of two
    /// or declares an unsupported memory bank controller.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Cartridge, ioerr::ErrorCode> {
        if bytes.len() < MIN_ROM_SIZE {
            return Err(ioerr::ErrorCode::InvalidImage("ROM image smaller than 32 KiB"));
        }

        if !bytes.len().is_power_of_two() {
            return Err(ioerr::ErrorCode::InvalidImage("ROM image size is not a power of two"));
        }

        let header         = CartridgeHeader::from_rom(&bytes)?;
        let rom_bank_count = bytes.len() / ROM_BANK_SIZE;
        let ram            = MemoryDataDynamic::alloc(header.ram_size);
        let rom            = MemoryDataDynamic::try_from(bytes)?;

        Ok(Cartridge {
            rom,
            ram,
            header,
            rom_bank_count,

            ram_enabled:  false,
            rom_bank_low: 1,
            bank_high:    0,
            banking_mode: BankingMode::Rom,
        })
    }


    /// Get the parsed cartridge header.
    pub fn get_header(&self) -> &CartridgeHeader {
        &self.header
    }


    /// Get the number of ROM banks contained in the ROM image.
    pub fn get_rom_bank_count(&self) -> usize {
        self.rom_bank_count
    }


    /// Get the index of the ROM bank currently visible at 0x4000-0x7FFF.
    pub fn get_selected_rom_bank(&self) -> u8 {
        let bank = match self.banking_mode {
            BankingMode::Rom => self.rom_bank_low | (self.bank_high << 5),
            BankingMode::Ram => self.rom_bank_low,
        };

        // banks beyond the size of the ROM image wrap around
        ((bank as usize) & (self.rom_bank_count - 1)) as u8
    }


    /// Get the index of the RAM bank currently visible at 0xA000-0xBFFF.
    pub fn get_selected_ram_bank(&self) -> u8 {
        match self.banking_mode {
            BankingMode::Rom => 0,
            BankingMode::Ram => self.bank_high,
        }
    }


    /// Checks whether the cartridge RAM is enabled for access.
    pub fn is_ram_enabled(&self) -> bool {
        self.ram_enabled
    }


    /// Reads a byte from the ROM address space 0x0000-0x7FFF.
    /// The first bank is fixed, the second one is subject to bank switching.
    pub fn read_rom(&self, address: u16) -> u8 {
        match address {
            0x0000 ..= 0x3fff => {
                self.rom[address as usize]
            }

            0x4000 ..= 0x7fff => {
                let bank   = self.get_selected_rom_bank() as usize;
                let offset = (address as usize) - (MEMORY_LOCATION_ROM_BANK_N_BEGIN as usize);

                self.rom[bank * ROM_BANK_SIZE + offset]
            }

            _ => 0xff,
        }
    }


    /// Reads a byte from the cartridge RAM address space 0xA000-0xBFFF.
    /// Returns 0xFF when the RAM is disabled or not present.
    pub fn read_ram(&self, address: u16) -> u8 {
        if !self.ram_enabled {
            return 0xff;
        }

        let bank   = self.get_selected_ram_bank() as usize;
        let offset = (address as usize) - (MEMORY_LOCATION_CARTRIDGE_RAM_BEGIN as usize);
        let index  = bank * RAM_BANK_SIZE + offset;

        if index < self.ram.size() {
            self.ram[index]
        }
        else {
            0xff
        }
    }


    /// Writes a byte into the cartridge RAM address space 0xA000-0xBFFF.
    /// The write is discarded when the RAM is disabled or not present.
    pub fn write_ram(&mut self, address: u16, value: u8) {
        if !self.ram_enabled {
            return;
        }

        let bank   = self.get_selected_ram_bank() as usize;
        let offset = (address as usize) - (MEMORY_LOCATION_CARTRIDGE_RAM_BEGIN as usize);
        let index  = bank * RAM_BANK_SIZE + offset;

        if index < self.ram.size() {
            self.ram[index] = value;
        }
    }


    /// Writes into the control register address space 0x0000-0x7FFF
    /// of the memory bank controller.
    pub fn write_mbc_register(&mut self, address: u16, value: u8) {
        match self.header.mbc {
            MemoryBankController::None => { }

            MemoryBankController::Mbc1 => {
                match address {
                    // RAM enable; a value of 0x0A in the lower nibble
                    // enables the RAM, any other value disables it
                    0x0000 ..= 0x1fff => {
                        self.ram_enabled = (value & 0x0f) == 0x0a;
                    }

                    // the lower 5 bits of the ROM bank number;
                    // bank 0 is translated into bank 1
                    0x2000 ..= 0x3fff => {
                        let bank = value & 0x1f;
                        self.rom_bank_low = if bank == 0 { 1 } else { bank };
                    }

                    // the 2 bit secondary banking register
                    0x4000 ..= 0x5fff => {
                        self.bank_high = value & 0x03;
                    }

                    // banking mode select
                    0x6000 ..= 0x7fff => {
                        self.banking_mode = if (value & 0x01) == 0 {
                            BankingMode::Rom
                        }
                        else {
                            BankingMode::Ram
                        };
                    }

                    _ => { }
                }
            }
        }
    }


    /// Save the battery buffered cartridge RAM into a file.
    #[cfg(feature = "file_io")]
    pub fn save_ram_to_file(&self, filepath: &Path) -> io::Result<()> {
        self.ram.save_to_file(filepath)
    }


    /// Load the battery buffered cartridge RAM from a file.
    #[cfg(feature = "file_io")]
    pub fn load_ram_from_file(&mut self, filepath: &Path) -> io::Result<()> {
        self.ram.read_from_file(filepath)
    }


    /// Restores the power-on state of the memory bank controller.
    /// The content of the battery buffered RAM is kept.
    pub fn reset(&mut self) {
        self.ram_enabled  = false;
        self.rom_bank_low = 1;
        self.bank_high    = 0;
        self.banking_mode = BankingMode::Rom;
    }
}
