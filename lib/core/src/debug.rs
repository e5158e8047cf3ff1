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

use flagset::{flags, FlagSet};


flags! {
    /// Events which occurred while updating the emulator components.
    /// Each step of the emulator reports the events raised during that
    /// step, so a frontend or test driver can react on them without
    /// polling each component.
    pub enum DebugEvent: u8 {
        /// The serial port completed the transfer of a single byte.
        SerialByteTransferred = 0b_0000_0001,

        /// The timer counter overflowed and was reloaded from TMA.
        TimerOverflow         = 0b_0000_0010,
    }
}


/// A set of [DebugEvent] values.
pub type DebugEvents = FlagSet<DebugEvent>;
