//! Simulator: owns the CPU and drives it to completion.
//!
//! The run loop steps the CPU while its program counter is inside the
//! instruction store. Halts and traps end the run; the simulator never
//! terminates the process itself, leaving exit codes to the caller.

use std::io::{self, Write};

use tracing::info;

use crate::common::{SimError, Trap};
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::soc::System;
use crate::soc::console::{Console, StdConsole};
use crate::soc::memory::Image;

/// How a run that did not trap came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program counter left the instruction store.
    Finished,
    /// The program wrote to the halt port.
    Halted,
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Finished => 0,
            Self::Halted => 1,
        }
    }
}

/// Process exit status after a fatal trap.
pub const TRAP_EXIT_CODE: i32 = 1;

/// Top-level simulator owning one CPU and its system.
#[derive(Debug)]
pub struct Simulator<C: Console = StdConsole> {
    /// The CPU and, through it, the whole machine.
    pub cpu: Cpu<C>,
    print_stats: bool,
}

impl<C: Console> Simulator<C> {
    /// Builds a simulator around a loaded image.
    ///
    /// # Arguments
    ///
    /// * `image` - Program image, executed from address 0.
    /// * `console` - Streams for the console ports.
    /// * `config` - Run configuration.
    pub fn new(image: Image, console: C, config: &Config) -> Self {
        let system = System::new(image, console);
        Self {
            cpu: Cpu::new(system, config),
            print_stats: config.general.print_stats,
        }
    }

    /// Runs until the program finishes, halts, or traps.
    ///
    /// Console output is flushed before returning, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the trap or console failure that stopped the machine. State
    /// is left exactly as it was when the failing instruction started, so
    /// [`Self::report_trap`] can dump it.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        info!("starting execution");
        let result = self.run_loop();
        self.cpu.bus.console.output().flush()?;
        match &result {
            Ok(outcome) => info!(?outcome, cycles = self.cpu.stats.cycles, "execution stopped"),
            Err(SimError::Trap(trap)) => {
                info!(%trap, raw = trap.raw(), pc = self.cpu.pc, "execution trapped");
            }
            Err(e) => info!(error = %e, pc = self.cpu.pc, "execution aborted"),
        }
        if self.print_stats {
            self.cpu.stats.print();
        }
        result
    }

    fn run_loop(&mut self) -> Result<RunOutcome, SimError> {
        while self.cpu.running() {
            if self.cpu.step()? == StepOutcome::Halted {
                return Ok(RunOutcome::Halted);
            }
        }
        Ok(RunOutcome::Finished)
    }

    /// Prints the trap line followed by the program counter and register dump.
    ///
    /// # Errors
    ///
    /// Propagates write failures on the console output.
    pub fn report_trap(&mut self, trap: &Trap) -> io::Result<()> {
        writeln!(self.cpu.bus.console.output(), "{trap}")?;
        self.cpu.dump_state()?;
        self.cpu.bus.console.output().flush()
    }

    /// Returns the console, for inspecting captured output.
    pub const fn console(&self) -> &C {
        &self.cpu.bus.console
    }
}
