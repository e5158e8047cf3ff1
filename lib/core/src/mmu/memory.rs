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

use crate::boot_rom::BootRom;
use crate::cartridge::Cartridge;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::MemoryBusConnection;
use crate::mmu::memory_data::MemoryDataFixedSize;


type WRamData     = MemoryDataFixedSize<0x2000>;
type VRamData     = MemoryDataFixedSize<0x2000>;
type HRamData     = MemoryDataFixedSize<0x7f>;
type OamData      = MemoryDataFixedSize<0xa0>;
type SoundRegData = MemoryDataFixedSize<0x30>;
type OpenRomData  = MemoryDataFixedSize<0x8000>;


/// The memory component of the device.
///
/// It owns the plain memory regions (work RAM with its echo, high RAM,
/// video RAM and object attribute memory, both of which are bare storage
/// at this level), the boot ROM overlay and the cartridge slot.
/// Memory mapped registers of other components are not handled here;
/// the MMU forwards those accesses to the owning component instead.
pub struct Memory {
    wram: WRamData,
    vram: VRamData,
    hram: HRamData,
    oam:  OamData,

    /// Pass-through storage for the sound register page 0xFF10-0xFF3F.
    /// The audio hardware itself is not emulated, but test programs
    /// write these registers and read the values back.
    sound_regs: SoundRegData,

    /// Storage backing the ROM address space while no cartridge
    /// was ever inserted, behaving like plain RAM. Convenient for
    /// running small programs without building a ROM image.
    open_rom: OpenRomData,

    boot_rom: Option<BootRom>,

    /// Flag whether the boot ROM overlays the first 256 bytes
    /// of the ROM address space.
    boot_rom_enabled: bool,

    /// The value last written into the boot ROM disable register.
    boot_rom_disable_value: u8,

    cartridge: Option<Cartridge>,

    /// Flag whether inserting a cartridge was attempted at least once.
    /// When set, the ROM address space belongs to the cartridge (or
    /// reads as open bus when the slot is empty) instead of behaving
    /// like plain RAM.
    cartridge_load_attempted: bool,
}


impl Memory {
    /// Constructs a new instance of the Memory component.
    pub fn new() -> Memory {
        Memory {
            wram:       WRamData::new(),
            vram:       VRamData::new(),
            hram:       HRamData::new(),
            oam:        OamData::new(),
            sound_regs: SoundRegData::new(),
            open_rom:   OpenRomData::new(),

            boot_rom:               None,
            boot_rom_enabled:       false,
            boot_rom_disable_value: 0x00,

            cartridge:                None,
            cartridge_load_attempted: false,
        }
    }


    /// Set the boot ROM to be executed before the cartridge program.
    pub fn set_boot_rom(&mut self, boot_rom: BootRom) {
        self.boot_rom         = Some(boot_rom);
        self.boot_rom_enabled = true;
    }


    /// Checks whether a boot ROM is installed.
    pub fn has_boot_rom(&self) -> bool {
        self.boot_rom.is_some()
    }


    /// Checks whether the boot ROM overlay is currently enabled.
    pub fn is_boot_rom_enabled(&self) -> bool {
        self.boot_rom_enabled && self.boot_rom.is_some()
    }


    /// Set or clear the cartridge inserted into the cartridge slot.
    pub fn set_cartridge(&mut self, cartridge: Option<Cartridge>) {
        self.cartridge                = cartridge;
        self.cartridge_load_attempted = true;
    }


    /// Get the cartridge currently inserted into the cartridge slot.
    pub fn get_cartridge(&self) -> &Option<Cartridge> {
        &self.cartridge
    }


    /// Get the cartridge currently inserted into the cartridge slot.
    pub fn get_cartridge_mut(&mut self) -> &mut Option<Cartridge> {
        &mut self.cartridge
    }


    /// Restores the power-on state of all memory regions.
    /// Boot ROM and cartridge stay installed; the boot ROM overlay is
    /// enabled again and the cartridge banking state is reset.
    pub fn reset(&mut self) {
        self.wram       = WRamData::new();
        self.vram       = VRamData::new();
        self.hram       = HRamData::new();
        self.oam        = OamData::new();
        self.sound_regs = SoundRegData::new();
        self.open_rom   = OpenRomData::new();

        self.boot_rom_enabled       = self.boot_rom.is_some();
        self.boot_rom_disable_value = 0x00;

        if let Some(cartridge) = &mut self.cartridge {
            cartridge.reset();
        }
    }
}


impl MemoryBusConnection for Memory {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            // the boot ROM overlays the beginning of the ROM address
            // space until it gets disabled
            0x0000 ..= 0x00ff if self.is_boot_rom_enabled() => {
                match &self.boot_rom {
                    Some(boot_rom) => boot_rom.read(address),
                    None           => 0xff,
                }
            }

            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_END => {
                match &self.cartridge {
                    Some(cartridge) => cartridge.read_rom(address),

                    None => {
                        if self.cartridge_load_attempted {
                            0xff
                        }
                        else {
                            self.open_rom[address as usize]
                        }
                    }
                }
            }

            MEMORY_LOCATION_VRAM_BEGIN ..= MEMORY_LOCATION_VRAM_END => {
                self.vram[(address - MEMORY_LOCATION_VRAM_BEGIN) as usize]
            }

            MEMORY_LOCATION_CARTRIDGE_RAM_BEGIN ..= MEMORY_LOCATION_CARTRIDGE_RAM_END => {
                match &self.cartridge {
                    Some(cartridge) => cartridge.read_ram(address),
                    None            => 0xff,
                }
            }

            MEMORY_LOCATION_WRAM_BEGIN ..= MEMORY_LOCATION_WRAM_END => {
                self.wram[(address - MEMORY_LOCATION_WRAM_BEGIN) as usize]
            }

            // echo RAM mirrors the work RAM
            MEMORY_LOCATION_ECHO_RAM_BEGIN ..= MEMORY_LOCATION_ECHO_RAM_END => {
                self.wram[(address - MEMORY_LOCATION_ECHO_RAM_BEGIN) as usize]
            }

            MEMORY_LOCATION_OAM_BEGIN ..= MEMORY_LOCATION_OAM_END => {
                self.oam[(address - MEMORY_LOCATION_OAM_BEGIN) as usize]
            }

            // the prohibited area always reads as open bus
            MEMORY_LOCATION_UNUSABLE_BEGIN ..= MEMORY_LOCATION_UNUSABLE_END => {
                0xff
            }

            MEMORY_LOCATION_APU_BEGIN ..= MEMORY_LOCATION_APU_END => {
                self.sound_regs[(address - MEMORY_LOCATION_APU_BEGIN) as usize]
            }

            MEMORY_LOCATION_BOOT_ROM_DISABLE => {
                self.boot_rom_disable_value
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.hram[(address - MEMORY_LOCATION_HRAM_BEGIN) as usize]
            }

            // any unhandled IO register reads as open bus
            _ => 0xff,
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_END => {
                match &mut self.cartridge {
                    Some(cartridge) => cartridge.write_mbc_register(address, value),

                    None => {
                        if !self.cartridge_load_attempted {
                            self.open_rom[address as usize] = value;
                        }
                    }
                }
            }

            MEMORY_LOCATION_VRAM_BEGIN ..= MEMORY_LOCATION_VRAM_END => {
                self.vram[(address - MEMORY_LOCATION_VRAM_BEGIN) as usize] = value;
            }

            MEMORY_LOCATION_CARTRIDGE_RAM_BEGIN ..= MEMORY_LOCATION_CARTRIDGE_RAM_END => {
                if let Some(cartridge) = &mut self.cartridge {
                    cartridge.write_ram(address, value);
                }
            }

            MEMORY_LOCATION_WRAM_BEGIN ..= MEMORY_LOCATION_WRAM_END => {
                self.wram[(address - MEMORY_LOCATION_WRAM_BEGIN) as usize] = value;
            }

            // echo RAM mirrors the work RAM
            MEMORY_LOCATION_ECHO_RAM_BEGIN ..= MEMORY_LOCATION_ECHO_RAM_END => {
                self.wram[(address - MEMORY_LOCATION_ECHO_RAM_BEGIN) as usize] = value;
            }

            MEMORY_LOCATION_OAM_BEGIN ..= MEMORY_LOCATION_OAM_END => {
                self.oam[(address - MEMORY_LOCATION_OAM_BEGIN) as usize] = value;
            }

            // writes into the prohibited area are discarded
            MEMORY_LOCATION_UNUSABLE_BEGIN ..= MEMORY_LOCATION_UNUSABLE_END => {
            }

            MEMORY_LOCATION_APU_BEGIN ..= MEMORY_LOCATION_APU_END => {
                self.sound_regs[(address - MEMORY_LOCATION_APU_BEGIN) as usize] = value;
            }

            // any non-zero value disables the boot ROM overlay; once
            // disabled it stays disabled until the device is reset
            MEMORY_LOCATION_BOOT_ROM_DISABLE => {
                if value != 0 {
                    self.boot_rom_enabled = false;
                }

                self.boot_rom_disable_value = value;
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.hram[(address - MEMORY_LOCATION_HRAM_BEGIN) as usize] = value;
            }

            // writes into any unhandled IO register are discarded
            _ => { }
        }
    }
}
