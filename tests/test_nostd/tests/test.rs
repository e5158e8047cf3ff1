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


#[test]
fn test_reduced_features() {
    // create the emulator instance with the reduced feature set
    let mut emulator = EmulatorCore::new(DeviceConfig::default());
    emulator.initialize();

    // run a bunch of steps; without a cartridge the ROM area
    // behaves like plain RAM filled with NOP instructions
    for _ in 0..256 {
        let cycles = emulator.step();
        assert!(cycles >= 4);
    }

    assert!(emulator.get_total_cycles_processed() >= 1024);
}
