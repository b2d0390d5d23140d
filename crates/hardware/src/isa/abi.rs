//! Register name constants.
//!
//! Names the few registers the machine itself gives a fixed role.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x28 (t3): receives the address returned by the allocation port.
pub const REG_ALLOC_RESULT: usize = 28;
