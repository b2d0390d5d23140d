use riskxvii_core::common::{SimError, Trap};
use riskxvii_core::config::Config;
use riskxvii_core::core::{Cpu, StepOutcome};
use riskxvii_core::sim::RunOutcome;
use riskxvii_core::soc::BufferConsole;
use riskxvii_core::soc::memory::Image;
use riskxvii_core::Simulator;

/// A simulator over an in-memory console, built up fluently.
pub struct TestContext {
    pub sim: Simulator<BufferConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("warn")
            .try_init();

        let sim = Simulator::new(Image::from_words(&[]), BufferConsole::new(), config);
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu<BufferConsole> {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu<BufferConsole> {
        &mut self.sim.cpu
    }

    /// Replaces the image with `instructions` placed from address 0.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        self.sim.cpu.bus.image = Image::from_words(instructions);
        self.sim.cpu.pc = 0;
        self
    }

    /// Replaces the console with one whose input yields `input`.
    pub fn with_input(mut self, input: &str) -> Self {
        self.sim.cpu.bus.console = BufferConsole::with_input(input);
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u32 {
        self.sim.cpu.pc
    }

    /// Executes exactly one instruction.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        self.sim.cpu.step()
    }

    /// Executes `count` instructions, stopping early on a halt.
    pub fn step_n(&mut self, count: usize) -> Result<StepOutcome, SimError> {
        for _ in 0..count {
            if self.step()? == StepOutcome::Halted {
                return Ok(StepOutcome::Halted);
            }
        }
        Ok(StepOutcome::Continue)
    }

    /// Runs to completion.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        self.sim.run()
    }

    /// Console output captured so far.
    pub fn output(&self) -> String {
        self.sim.console().captured_str()
    }
}

/// Extracts the trap from a failed step or run, panicking on anything else.
pub fn expect_trap<T: std::fmt::Debug>(result: Result<T, SimError>) -> Trap {
    match result {
        Err(SimError::Trap(trap)) => trap,
        other => panic!("expected a trap, got {other:?}"),
    }
}
