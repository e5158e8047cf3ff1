/*
 * Copyright (C) 2022 by Christian Fischer
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

use crate::cpu::interrupts::Interrupt;
use crate::debug::DebugEvent;
use crate::emulator_core::Clock;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::utils::get_bit;


/// The number of cycles needed to transfer a single byte
/// when the internal clock is selected.
const SERIAL_TRANSFER_TIME : Clock = 4096;


/// An implementation of the GameBoy's serial port.
/// This is a simplified implementation with the main purpose of
/// receiving data from test ROMs like Blargg's. The link cable is
/// modelled as disconnected: each completed transfer shifts in 0xFF
/// from the absent peer, and a transfer driven by the external clock
/// stays pending forever.
///
/// All transferred bytes are collected in an output string, which a
/// test driver may poll while the emulator is running.
pub struct SerialPort {
    /// The serial transfer data register SB.
    sb: u8,

    /// The serial transfer control register SC.
    sc: u8,

    /// The SerialPort's clock to measure the time needed
    /// for the transfer of a single byte.
    clock: Clock,

    /// Flag whether a transfer is currently in progress.
    transfer_active: bool,

    /// All bytes sent by the running program so far.
    output: String,

    /// Signals to be sent back to the emulator.
    signals: MemoryBusSignals,
}


impl SerialPort {
    /// Constructs a new instance of the SerialPort.
    pub fn new() -> SerialPort {
        SerialPort {
            sb:              0,
            sc:              0,
            clock:           0,
            transfer_active: false,
            output:          String::new(),
            signals:         MemoryBusSignals::default(),
        }
    }


    /// Updates the SerialPort, performing the pending transfer once
    /// enough time has passed. A transfer driven by the external clock
    /// never completes, as there is no peer to provide that clock.
    pub fn update(&mut self, cycles: Clock) {
        let internal_clock = get_bit(self.sc, 0);

        if self.transfer_active && internal_clock {
            self.clock += cycles;

            if self.clock >= SERIAL_TRANSFER_TIME {
                self.complete_transfer();
            }
        }
    }


    /// Completes the active transfer: the sent byte is recorded in the
    /// output string, the disconnected peer shifts in 0xFF, the transfer
    /// status bit is cleared and the serial interrupt is raised.
    fn complete_transfer(&mut self) {
        self.output.push(self.sb as char);

        self.sb              = 0xff;
        self.sc             &= 0b_0111_1111;
        self.transfer_active = false;
        self.clock           = 0;

        self.signals.events     |= DebugEvent::SerialByteTransferred;
        self.signals.interrupts |= Interrupt::Serial;
    }


    /// Checks whether a transfer is currently in progress.
    pub fn is_transfer_active(&self) -> bool {
        self.transfer_active
    }


    /// Get the output sent by the running program so far.
    /// The returned string keeps growing with each transferred byte
    /// until the output is taken or cleared.
    pub fn get_output(&self) -> &str {
        &self.output
    }


    /// Takes the output sent by the running program so far.
    /// The data will then be removed from the current output.
    pub fn take_output_as_text(&mut self) -> String {
        core::mem::take(&mut self.output)
    }


    /// Clears the collected output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }


    /// Takes the signals raised during the recent updates.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Restores the power-on state of the serial port,
    /// including clearing the collected output.
    pub fn reset(&mut self) {
        self.sb              = 0;
        self.sc              = 0;
        self.clock           = 0;
        self.transfer_active = false;
        self.signals         = MemoryBusSignals::default();

        self.output.clear();
    }
}


impl MemoryBusConnection for SerialPort {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_SB => self.sb,

            // the unused bits 1-6 are always set
            MEMORY_LOCATION_SC => 0b_0111_1110 | (self.sc & 0b_1000_0001),

            _ => 0xff,
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_SB => {
                self.sb = value;
            }

            MEMORY_LOCATION_SC => {
                self.sc = value;

                // setting the transfer status bit starts a new transfer
                if get_bit(value, 7) {
                    self.transfer_active = true;
                    self.clock           = 0;
                }
                else {
                    self.transfer_active = false;
                }
            }

            _ => { }
        }
    }
}
