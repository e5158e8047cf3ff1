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

//! Runs Blargg's cpu_instrs test ROMs. Each ROM reports its result
//! through the serial port, ending in a "Passed" or "Failed" banner.
//! When a ROM cannot be obtained, for example in offline environments,
//! the test is skipped instead of failing.

use tests_shared::runner::{run_serial_test_rom, DEFAULT_CYCLE_BUDGET};
use tests_shared::test_rom;


/// Runs a single ROM of the cpu_instrs suite and expects it to print
/// a "Passed" banner including its own name.
fn run_cpu_instrs_rom(name: &str) {
    let rom_path = format!("cpu_instrs/individual/{}.gb", name);

    let Some(rom) = test_rom::obtain(&rom_path) else {
        eprintln!("skipped: test ROM '{}' is not available", rom_path);
        return;
    };

    let result = run_serial_test_rom(rom, DEFAULT_CYCLE_BUDGET);

    assert!(
        result.is_passed(),
        "test ROM '{}' did not pass; serial output:\n{}",
        name,
        result.output
    );

    assert!(
        result.output.contains(name),
        "test ROM '{}' did not report its name; serial output:\n{}",
        name,
        result.output
    );
}


#[test]
fn cpu_instrs_01_special() {
    run_cpu_instrs_rom("01-special");
}


#[test]
fn cpu_instrs_02_interrupts() {
    run_cpu_instrs_rom("02-interrupts");
}


#[test]
fn cpu_instrs_03_op_sp_hl() {
    run_cpu_instrs_rom("03-op sp,hl");
}


#[test]
fn cpu_instrs_04_op_r_imm() {
    run_cpu_instrs_rom("04-op r,imm");
}


#[test]
fn cpu_instrs_05_op_rp() {
    run_cpu_instrs_rom("05-op rp");
}


#[test]
fn cpu_instrs_06_ld_r_r() {
    run_cpu_instrs_rom("06-ld r,r");
}


#[test]
fn cpu_instrs_07_jr_jp_call_ret_rst() {
    run_cpu_instrs_rom("07-jr,jp,call,ret,rst");
}


#[test]
fn cpu_instrs_08_misc_instrs() {
    run_cpu_instrs_rom("08-misc instrs");
}


#[test]
fn cpu_instrs_09_op_r_r() {
    run_cpu_instrs_rom("09-op r,r");
}


#[test]
fn cpu_instrs_10_bit_ops() {
    run_cpu_instrs_rom("10-bit ops");
}


#[test]
fn cpu_instrs_11_op_a_hl() {
    run_cpu_instrs_rom("11-op a,(hl)");
}


/// The aggregate ROM runs all eleven sub-tests in sequence and needs
/// a much larger cycle budget, so it is not part of the default run.
#[test]
#[ignore = "long-running; covered by the individual ROMs above"]
fn cpu_instrs_aggregate() {
    let Some(rom) = test_rom::obtain("cpu_instrs/cpu_instrs.gb") else {
        eprintln!("skipped: test ROM 'cpu_instrs/cpu_instrs.gb' is not available");
        return;
    };

    let result = run_serial_test_rom(rom, DEFAULT_CYCLE_BUDGET * 8);

    for part in 1 ..= 11 {
        assert!(
            result.output.contains(&format!("{:02}:ok", part)),
            "sub-test {:02} did not report ok; serial output:\n{}",
            part,
            result.output
        );
    }
}
