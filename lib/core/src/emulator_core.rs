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
use crate::cpu::cpu::{Cpu, RegisterR8, CPU_CLOCK_SPEED};
use crate::cpu::interrupts::InterruptRegisters;
use crate::cpu::opcode::OpCodeContext;
use crate::debug::DebugEvents;
use crate::mmu::memory::Memory;
use crate::mmu::memory_bus::MemoryBusSignals;
use crate::mmu::mmu::Mmu;
use crate::serial::SerialPort;
use crate::timer::Timer;


/// Type to measure clock ticks of the device.
/// Alias for unsigned 64bit integer.
pub type Clock = u64;

/// The number of cycles the CPU idles per step while being suspended.
const IDLE_CYCLES_PER_STEP : Clock = 4;


/// A struct containing the setup information of the running device.
#[derive(Copy, Clone, Default)]
pub struct DeviceConfig {
    /// Flag if opcodes should be printed
    pub print_opcodes: bool,
}


/// A factory class to construct an emulator instance.
/// Usually created via EmulatorCore::build()
pub struct Builder {
    boot_rom:      Option<BootRom>,
    cartridge:     Option<Cartridge>,
    print_opcodes: bool,
}


/// The emulated device providing access to all its components.
/// The CPU owns the MMU, which in turn owns all peripheral components,
/// so the whole device state is reachable from this single object.
pub struct EmulatorCore {
    device_config: DeviceConfig,

    pub cpu: Cpu,

    /// Flag whether the emulation is running.
    /// While stopped, steps are not processed and consume no cycles.
    running: bool,

    total_cycles: Clock,
}


/// A set of components connected together via memory bus.
pub struct Peripherals {
    pub mem:        Memory,
    pub timer:      Timer,
    pub serial:     SerialPort,
    pub interrupts: InterruptRegisters,
}


/// An object containing feedback from running the emulator.
#[derive(Default)]
pub struct EmulatorUpdateResults {
    /// The number of cycles being processed.
    pub cycles: Clock,

    /// Any debug events occurred during updating the emulator.
    pub events: DebugEvents,
}


impl Builder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            boot_rom:      None,
            cartridge:     None,
            print_opcodes: false,
        }
    }


    /// Set the boot ROM, which will be executed before the actual ROM.
    pub fn set_boot_rom(&mut self, boot_rom: BootRom) {
        self.boot_rom = Some(boot_rom);
    }


    /// Set the cartridge, which ROM will be executed.
    pub fn set_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }


    /// Configures whether the emulator should print all opcodes being executed or not.
    pub fn set_print_opcodes(&mut self, print: bool) {
        self.print_opcodes = print;
    }


    /// Build the emulator instance based on the properties specified with this builder.
    pub fn finish(mut self) -> EmulatorCore {
        let device_config = DeviceConfig {
            print_opcodes: self.print_opcodes
        };

        let mut emulator = EmulatorCore::new(device_config);

        // set boot ROM, if any
        if let Some(boot_rom) = self.boot_rom.take() {
            emulator.get_peripherals_mut().mem.set_boot_rom(boot_rom);
        }

        // insert cartridge, if any
        if let Some(cartridge) = self.cartridge.take() {
            emulator.get_peripherals_mut().mem.set_cartridge(Some(cartridge));
        }

        emulator.initialize();

        emulator
    }
}


impl EmulatorCore {
    /// Creates a builder to build up the device.
    pub fn build() -> Builder {
        Builder::new()
    }


    /// Create a new emulator instance.
    pub fn new(device_config: DeviceConfig) -> Self {
        Self {
            device_config,

            cpu: Cpu::new(
                Mmu::new(
                    Peripherals {
                        mem:        Memory::new(),
                        timer:      Timer::new(),
                        serial:     SerialPort::new(),
                        interrupts: InterruptRegisters::new(),
                    }
                )
            ),

            running: true,

            total_cycles: 0,
        }
    }


    /// Get the configuration of the current device.
    pub fn get_config(&self) -> &DeviceConfig {
        &self.device_config
    }


    /// Boot the device, initializing the Boot ROM program.
    pub fn initialize(&mut self) {
        if self.get_peripherals().mem.has_boot_rom() {
            self.cpu.set_instruction_pointer(0x0000);
        }
        else {
            self.setup_initial_values();
        }
    }


    /// Skips the boot ROM program: disables the boot ROM overlay and
    /// applies the register and IO values expected after its execution.
    pub fn set_post_boot_state(&mut self) {
        self.setup_initial_values();
    }


    /// setup values like expected after the boot rom was executed on the original device.
    fn setup_initial_values(&mut self) {
        // register values at the entry point of the cartridge program
        self.cpu.set_r8(RegisterR8::A, 0x01);
        self.cpu.set_r8(RegisterR8::F, 0xb0);
        self.cpu.set_r8(RegisterR8::B, 0x00);
        self.cpu.set_r8(RegisterR8::C, 0x13);
        self.cpu.set_r8(RegisterR8::D, 0x00);
        self.cpu.set_r8(RegisterR8::E, 0xd8);
        self.cpu.set_r8(RegisterR8::H, 0x01);
        self.cpu.set_r8(RegisterR8::L, 0x4d);
        self.cpu.set_instruction_pointer(0x0100);
        self.cpu.set_stack_pointer(0xfffe);

        // initialize IO registers
        {
            // placeholder for unknown/unused entries
            const X : u8 = 0xff;

            // timer counter and TAC depend on how long the boot rom
            // took for execution
            let (timer_counter, tac) = (0xabf0u16, 0xf8u8);

            // div is the high byte of the timer counter
            let div = crate::utils::get_high(timer_counter);

            let io_reg_data : [u8; 256] = [
                /*          0     1     2     3     4     5     6     7     8     9     a     b     c     d     e     f */
                /* 00 */ 0xcf, 0x00, 0x7e,    X,  div, 0x00, 0x00,  tac,    X,    X,    X,    X,    X,    X,    X, 0xe1,
                /* 10 */ 0x80, 0xbf, 0xf3, 0xff, 0xbf,    X, 0x3f, 0x00, 0xff, 0xbf, 0x7f, 0xff, 0x9f, 0xff, 0xbf,    X,
                /* 20 */ 0xff, 0x00, 0x00, 0xbf, 0x77, 0xf3, 0xf1,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 30 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 40 */ 0x91, 0x81, 0x00, 0x00, 0x00, 0x00, 0xff, 0xfc, 0xff, 0xff, 0x00, 0x00,    X, 0xff,    X,    X,
                /* 50 */ 0x01, 0xff, 0xff, 0xff, 0xff, 0xff,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 60 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 70 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 80 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* 90 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* a0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* b0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* c0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* d0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* e0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,
                /* f0 */    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X,    X, 0x00,
            ];

            // apply selected values
            for i in 0..=255u16 {
                self.get_mmu_mut().write_u8(0xff00 + i, io_reg_data[i as usize]);
            }

            self.get_peripherals_mut().timer.initialize_counter(timer_counter, tac);
        }
    }


    /// Get the number of cycles processed by the emulator since it started.
    pub fn get_total_cycles_processed(&self) -> Clock {
        self.total_cycles
    }


    /// Get the time in seconds the emulator did run.
    pub fn get_total_seconds_processed(&self) -> f32 {
        (self.total_cycles as f32) / (CPU_CLOCK_SPEED as f32)
    }


    /// Get the device MMU.
    pub fn get_mmu(&self) -> &Mmu {
        self.cpu.get_mmu()
    }


    /// Get the device MMU.
    pub fn get_mmu_mut(&mut self) -> &mut Mmu {
        self.cpu.get_mmu_mut()
    }


    /// Get the device peripheral components.
    pub fn get_peripherals(&self) -> &Peripherals {
        self.get_mmu().get_peripherals()
    }


    /// Get the device peripheral components.
    pub fn get_peripherals_mut(&mut self) -> &mut Peripherals {
        self.get_mmu_mut().get_peripherals_mut()
    }


    /// Continues running the emulation after it was stopped.
    pub fn start(&mut self) {
        self.running = true;
    }


    /// Stops the emulation. Further steps consume no cycles
    /// until the emulation is started again.
    pub fn stop(&mut self) {
        self.running = false;
    }


    /// Checks whether the emulation is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }


    /// Restores the power-on state of the whole device and boots it
    /// again. Boot ROM and cartridge stay installed.
    pub fn reset(&mut self) {
        self.cpu.reset();

        {
            let peripherals = self.get_peripherals_mut();
            peripherals.mem.reset();
            peripherals.timer.reset();
            peripherals.serial.reset();
            peripherals.interrupts.reset();
        }

        self.running      = true;
        self.total_cycles = 0;

        self.initialize();
    }


    /// Runs the emulator for a single step, either an instruction,
    /// an interrupt dispatch or a single cycle of idling in HALT state.
    /// Returns the number of cycles consumed by this step, which is
    /// zero while the emulation is stopped.
    pub fn step(&mut self) -> Clock {
        self.run_single_step().cycles
    }


    /// Runs the emulator for a single step, returning the detailed
    /// update results including any debug events raised.
    pub fn run_single_step(&mut self) -> EmulatorUpdateResults {
        if !self.running {
            return EmulatorUpdateResults::default();
        }

        self.process_next()
    }


    /// Continues processing the next pending operation.
    fn process_next(&mut self) -> EmulatorUpdateResults {
        // a pending interrupt wakes the CPU up from HALT,
        // even when the interrupt master enable flag is cleared
        if self.cpu.is_halted() && self.get_peripherals().interrupts.has_pending_interrupts() {
            self.cpu.exit_halt();
        }

        if self.cpu.is_running() {
            if let Some(cycles) = self.cpu.handle_interrupts() {
                let signals = self.update_components(cycles);

                EmulatorUpdateResults {
                    cycles,
                    events: signals.events,
                }
            }
            else {
                self.process_next_opcode()
            }
        }
        else {
            // while suspended the CPU just idles,
            // but time still passes on the other components
            let signals = self.update_components(IDLE_CYCLES_PER_STEP);

            EmulatorUpdateResults {
                cycles: IDLE_CYCLES_PER_STEP,
                events: signals.events,
            }
        }
    }


    /// Process the next opcode.
    fn process_next_opcode(&mut self) -> EmulatorUpdateResults {
        let instruction = self.cpu.fetch_next_instruction();
        let mut context = OpCodeContext::for_instruction(&instruction);

        // an interrupt enable requested via EI comes into effect after
        // the instruction following EI, so remember whether it was
        // requested before the current instruction
        let ime_pending_before = self.cpu.is_ime_pending();

        // invoke opcode execution
        (instruction.opcode.proc)(&mut self.cpu, &mut context);

        if ime_pending_before {
            self.cpu.commit_pending_ime();
        }

        // print opcode and CPU state if enabled
        #[cfg(feature = "std")]
        if self.device_config.print_opcodes {
            println!(
                "/* {:04x} [{:02x}]{} */ {:<16}    ; {}",
                instruction.opcode_address,
                instruction.opcode_id,
                if instruction.opcode_id <= 0xff { "  " } else { "" },
                instruction.to_string(self.cpu.get_mmu()),
                self.cpu
            );
        }

        let cycles  = context.get_cycles_consumed();
        let signals = self.update_components(cycles);

        EmulatorUpdateResults {
            cycles,
            events: signals.events,
        }
    }


    /// Applies the time passed during CPU execution to other components as well.
    #[must_use]
    fn update_components(&mut self, cycles: Clock) -> MemoryBusSignals {
        let peripherals = self.get_peripherals_mut();

        peripherals.timer.update(cycles);
        peripherals.serial.update(cycles);

        // collects all signals received from components
        let signals =
                peripherals.timer.take_signals()
            |   peripherals.serial.take_signals()
        ;

        // forward all requested interrupts into the Interrupts component.
        peripherals.interrupts.request_interrupts(signals.interrupts);

        // increment clock counters
        self.total_cycles += cycles;

        signals
    }
}
