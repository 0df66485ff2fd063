//! Core parameters: register file shape, field widths, instruction costs.

/// Register count for a [`crate::core::Core`]'s register file.
pub const CORE_REGISTER_COUNT: usize = 16;

/// Width, in bytes, of a decoded instruction word.
pub const WORD_SIZE: usize = 4;

/// Width in bits of the `bool` typed configuration-memory field.
pub const WIDTH_BOOL: u32 = 8;

/// Width in bits of the `byte` typed configuration-memory field.
pub const WIDTH_BYTE: u32 = 8;

/// Width in bits of the `int` typed configuration-memory field.
pub const WIDTH_INT: u32 = 32;

/// Width in bits of the `state` typed configuration-memory field.
pub const WIDTH_STATE: u32 = 16;

/// Cycles charged for the per-core reset routine at the start of `process_instructions`.
pub const CYCLES_RESET: u64 = 2;

/// Cycles charged for fetch+decode of one instruction, before dispatch.
pub const CYCLES_FETCH_DECODE: u64 = 4;

/// Cycles charged after executing any binary ALU op (`ADD`..`EQ`).
pub const CYCLES_BINARY: u64 = 3;

/// Cycles charged after `NOT`.
pub const CYCLES_NOT: u64 = 1;

/// Cycles charged after `JMP`.
pub const CYCLES_JMP: u64 = 2;

/// Cycles charged after `STORE`.
pub const CYCLES_STORE: u64 = 2;

/// Cycles charged after `LOAD` with `cfg=ADR`.
pub const CYCLES_LOAD_ADR: u64 = 2;

/// Cycles charged after `LOAD` with `cfg=RAA`.
pub const CYCLES_LOAD_RAA: u64 = 3;

/// Cycles charged after `LOAD` with `cfg=REG` or `cfg=IMM`.
pub const CYCLES_LOAD_REG_IMM: u64 = 1;

/// Cycles charged after `ENDGA`.
pub const CYCLES_ENDGA: u64 = 1;

/// Cycles charged after `NOP`.
pub const CYCLES_NOP: u64 = 1;
