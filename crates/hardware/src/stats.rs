//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics for the virtual machine. It provides:
//! 1. **Throughput:** Executed instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, upper).
//! 3. **Control flow:** Branches taken versus not taken.
//! 4. **Ports and heap:** Control port accesses, allocations, and releases.

use std::io::{self, Write};
use std::time::Instant;

/// Simulation statistics structure tracking run metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed (one per cycle).
    pub cycles: u64,

    /// Count of register-register and register-immediate ALU instructions.
    pub inst_alu: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of conditional branch instructions.
    pub inst_branch: u64,
    /// Count of `jal`/`jalr` instructions.
    pub inst_jump: u64,
    /// Count of `lui` instructions.
    pub inst_upper: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,

    /// Loads and stores that hit a control port.
    pub port_accesses: u64,
    /// Successful allocator requests.
    pub allocations: u64,
    /// Allocator requests that found no room.
    pub allocation_failures: u64,
    /// Release requests that freed at least one bank.
    pub frees: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_upper: 0,
            branches_taken: 0,
            port_accesses: 0,
            allocations: 0,
            allocation_failures: 0,
            frees: 0,
        }
    }
}

impl SimStats {
    /// Writes the statistics report to `out`.
    ///
    /// Percentages are computed against `max(cycles, 1)`, so an empty run
    /// reports zeros rather than dividing by zero.
    ///
    /// # Errors
    ///
    /// Propagates write failures on `out`.
    pub fn write_report(&self, out: &mut dyn Write) -> io::Result<()> {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.cycles.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(out, "\n==========================================================")?;
        writeln!(out, "RISK-XVII SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.4} s")?;
        writeln!(out, "sim_insts                {}", self.cycles)?;
        writeln!(out, "sim_mips                 {mips:.2}")?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.upper", self.inst_upper),
        ] {
            writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "CONTROL FLOW")?;
        writeln!(out, "  branch.taken           {}", self.branches_taken)?;
        writeln!(
            out,
            "  branch.not_taken       {}",
            self.inst_branch.saturating_sub(self.branches_taken)
        )?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "PORTS AND HEAP")?;
        writeln!(out, "  port.accesses          {}", self.port_accesses)?;
        writeln!(out, "  heap.allocations       {}", self.allocations)?;
        writeln!(out, "  heap.alloc_failures    {}", self.allocation_failures)?;
        writeln!(out, "  heap.frees             {}", self.frees)?;
        writeln!(out, "==========================================================")
    }

    /// Prints the statistics report to stderr.
    ///
    /// Program output owns stdout, so the report never interleaves with it.
    pub fn print(&self) {
        let stderr = io::stderr();
        let mut lock = stderr.lock();
        if let Err(e) = self.write_report(&mut lock) {
            tracing::warn!(error = %e, "failed to write statistics");
        }
    }
}
