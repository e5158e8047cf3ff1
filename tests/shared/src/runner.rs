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

//! The driver running test ROMs which report their results through
//! the serial port.

use dmg_core::cartridge::Cartridge;
use dmg_core::emulator_core::{Clock, EmulatorCore};


/// The default budget of CPU cycles granted to a single test ROM.
pub const DEFAULT_CYCLE_BUDGET : Clock = 150_000_000;

/// How often the serial output is polled for a completion banner.
const POLL_INTERVAL_STEPS : u32 = 4096;


/// The result of running a single serial test ROM.
pub struct SerialTestResult {
    /// All serial output collected while the ROM was running.
    pub output: String,

    /// The number of cycles consumed until completion or timeout.
    pub cycles: Clock,
}


impl SerialTestResult {
    /// Checks whether the ROM reported success.
    pub fn is_passed(&self) -> bool {
        self.output.contains("Passed")
    }
}


/// Runs a test ROM until its serial output contains one of the known
/// completion banners or the cycle budget is exceeded.
///
/// Test ROMs report their progress as text through the serial port;
/// the driver polls that output while the emulation is running.
pub fn run_serial_test_rom(rom: Vec<u8>, cycle_budget: Clock) -> SerialTestResult {
    let cartridge = Cartridge::from_bytes(rom)
        .map_err(|_| "test ROM was rejected by the cartridge loader")
        .unwrap();

    let mut builder = EmulatorCore::build();
    builder.set_cartridge(cartridge);
    let mut emulator = builder.finish();

    loop {
        for _ in 0 .. POLL_INTERVAL_STEPS {
            emulator.step();
        }

        let output = emulator.get_peripherals().serial.get_output();

        if output.contains("Passed") || output.contains("Failed") {
            break;
        }

        if emulator.get_total_cycles_processed() >= cycle_budget {
            break;
        }
    }

    // grant the ROM a little more time to flush the rest of its banner
    for _ in 0 .. POLL_INTERVAL_STEPS {
        emulator.step();
    }

    SerialTestResult {
        output: emulator.get_peripherals().serial.get_output().to_string(),
        cycles: emulator.get_total_cycles_processed(),
    }
}
