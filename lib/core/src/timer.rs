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

use crate::cpu::interrupts::Interrupt;
use crate::debug::DebugEvent;
use crate::emulator_core::Clock;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::utils::get_high;


/// An implementation of the GameBoy's built-in timer.
///
/// The timer advances a 16 bit counter with each CPU clock cycle.
/// The visible DIV register is the high byte of that counter.
/// TIMA is incremented on each falling edge of a single counter bit,
/// selected by the lower two bits of TAC, AND'ed with the TAC enable
/// bit. Because writes to DIV and TAC change that signal as well, they
/// can generate an additional falling edge and thereby an additional
/// TIMA increment.
pub struct Timer {
    /// The internal 16 bit counter. DIV is its high byte.
    counter: u16,

    /// The timer counter register, incremented on each falling edge.
    tima: u8,

    /// The timer modulo register, reloaded into TIMA on overflow.
    tma: u8,

    /// The timer control register; only the lower 3 bits are in use.
    tac: u8,

    /// Signals to be sent back to the emulator.
    signals: MemoryBusSignals,
}


impl Timer {
    /// Constructs a new instance of the Timer.
    pub fn new() -> Timer {
        Timer {
            counter: 0,
            tima:    0,
            tma:     0,
            tac:     0,

            signals: MemoryBusSignals::default(),
        }
    }


    /// Get the counter bit selected by the frequency bits of a TAC value.
    fn selected_counter_bit(tac: u8) -> u16 {
        match tac & 0b_0000_0011 {
            0b00 => 1 << 9,
            0b01 => 1 << 3,
            0b10 => 1 << 5,
            _    => 1 << 7,
        }
    }


    /// Computes the input signal feeding TIMA for a given counter value:
    /// the selected counter bit AND'ed with the TAC enable bit.
    fn input_signal(&self, counter: u16) -> bool {
        let enabled = (self.tac & 0b_0000_0100) != 0;
        enabled && ((counter & Self::selected_counter_bit(self.tac)) != 0)
    }


    /// Updates the timer, advancing the internal counter by the number
    /// of cycles passed. Every falling edge of the input signal within
    /// this period increments TIMA.
    pub fn update(&mut self, cycles: Clock) {
        for _ in 0 .. cycles {
            let signal_before = self.input_signal(self.counter);

            self.counter = self.counter.wrapping_add(1);

            if signal_before && !self.input_signal(self.counter) {
                self.increment_tima();
            }
        }
    }


    /// Increments TIMA by one. On overflow, TIMA is reloaded with the
    /// value of TMA and the timer interrupt is raised.
    fn increment_tima(&mut self) {
        self.tima = self.tima.wrapping_add(1);

        if self.tima == 0 {
            self.tima            = self.tma;
            self.signals.events |= DebugEvent::TimerOverflow;
            self.signals.interrupts |= Interrupt::Timer;
        }
    }


    /// Initializes the internal counter and the TAC register with the
    /// values expected after the boot ROM was executed.
    pub fn initialize_counter(&mut self, counter: u16, tac: u8) {
        self.counter = counter;
        self.tac     = tac & 0b_0000_0111;
    }


    /// Get the current value of the internal 16 bit counter.
    pub fn get_counter(&self) -> u16 {
        self.counter
    }


    /// Takes the signals raised during the recent updates.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Restores the power-on state of the timer.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.tima    = 0;
        self.tma     = 0;
        self.tac     = 0;
        self.signals = MemoryBusSignals::default();
    }
}


impl MemoryBusConnection for Timer {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_DIV  => get_high(self.counter),
            MEMORY_LOCATION_TIMA => self.tima,
            MEMORY_LOCATION_TMA  => self.tma,
            MEMORY_LOCATION_TAC  => 0b_1111_1000 | self.tac,

            _ => 0xff,
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            // any write resets the internal counter; when the input
            // signal was high before, the reset is a falling edge and
            // increments TIMA once more
            MEMORY_LOCATION_DIV => {
                let signal_before = self.input_signal(self.counter);

                self.counter = 0;

                if signal_before && !self.input_signal(self.counter) {
                    self.increment_tima();
                }
            }

            MEMORY_LOCATION_TIMA => {
                self.tima = value;
            }

            MEMORY_LOCATION_TMA => {
                self.tma = value;
            }

            // changing the enable bit or the selected counter bit may
            // produce a falling edge against the unchanged counter
            MEMORY_LOCATION_TAC => {
                let signal_before = self.input_signal(self.counter);

                self.tac = value & 0b_0000_0111;

                if signal_before && !self.input_signal(self.counter) {
                    self.increment_tima();
                }
            }

            _ => { }
        }
    }
}
