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

use crate::mmu::memory_data::{MemoryData, MemoryDataFixedSize};

#[cfg(feature = "file_io")]
use std::{
    fs::File,
    io,
    io::Read,
    path::Path,
};


/// The fixed size of a boot ROM image.
pub const BOOT_ROM_SIZE : usize = 256;


/// A data object containing a 256 byte boot ROM.
/// While enabled, the boot ROM shadows the first 256 bytes of the
/// cartridge ROM until the running program disables it by writing
/// a non-zero value into the boot ROM disable register.
pub struct BootRom {
    rom: MemoryDataFixedSize<BOOT_ROM_SIZE>,
}


impl BootRom {
    /// Load a boot rom from a file.
    #[cfg(feature = "file_io")]
    pub fn load_file(filepath: &Path) -> Result<BootRom, io::Error> {
        use crate::utils::ioerr;

        let mut file  = File::open(filepath)?;
        let metadata  = file.metadata()?;
        let file_size = metadata.len();

        // fail when the boot rom image has an unexpected size
        if file_size != (BOOT_ROM_SIZE as u64) {
            let error = ioerr::Error {
                source: ioerr::Source::BootRomImage,
                source_file: Some(filepath.to_path_buf()),
                error_code: ioerr::ErrorCode::InvalidFileSize(ioerr::InvalidFileSizeError {
                    expected: BOOT_ROM_SIZE,
                    actual: file_size as usize,
                })
            };

            return Err(error.into());
        }

        let mut buffer = [0u8; BOOT_ROM_SIZE];
        file.read_exact(&mut buffer)?;

        Ok(BootRom::new(buffer))
    }


    /// Creates a new `BootRom` object from existing data.
    pub fn new(data: [u8; BOOT_ROM_SIZE]) -> BootRom {
        BootRom {
            rom: data.into()
        }
    }


    /// Get data from the boot ROM.
    pub fn read(&self, address: u16) -> u8 {
        self.rom[address as usize]
    }


    /// Get the size of the boot ROM image.
    pub fn size(&self) -> usize {
        self.rom.size()
    }
}
