//! `corevm` is an execution-based, explicit-state model checker for a small 32-bit register
//! machine. A program is run to completion against a starting configuration of bit-addressable
//! memory; each `ENDGA` it executes publishes a successor configuration, and the checker
//! explores the reachable state space until no core reports anything new.

#![deny(unsafe_code)]

pub mod assembler;
pub mod checker;
pub mod consts;
pub mod coordinator;
pub mod core;
pub mod decoder;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod memory;
pub mod simulator;
