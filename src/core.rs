//! A single register machine: fetch/decode/execute loop over one program image.
//!
//! A [`Core`] is deliberately ignorant of the other cores the [`crate::coordinator::Coordinator`]
//! runs alongside it; it only ever sees the starting [`Configuration`] it's handed and the
//! program bound to it at construction. Each `ENDGA` it executes publishes a snapshot of its
//! current working memory as a successor configuration and rewinds memory back to the pristine
//! value it started from, so a single pass over the program can surface several successors.

mod alu;

use tracing::trace;

use crate::consts::*;
use crate::decoder::Decoder;
use crate::error::RuntimeError;
use crate::instruction::{BinaryCfg, Instruction, LoadCfg, Op, StoreCfg};
use crate::memory::Configuration;

/// Selects `DIV`'s rounding behaviour. The source language this bytecode was distilled from uses
/// real-number division; this crate defaults to integer-truncating division instead (§9 Open
/// Question #3) but keeps the real-division reading available as an explicit, documented choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionMode {
    /// `registers[rd] = b / c`, truncated towards zero (ordinary `u32` division).
    #[default]
    Truncating,
    /// `registers[rd] = (b as f64 / c as f64).round() as u32`, mirroring the source's real
    /// division rounded back into a register-sized integer.
    Real,
}

/// One register machine bound to a fixed program image.
pub struct Core {
    core_index: usize,
    decoder: Decoder,
    registers: [u32; CORE_REGISTER_COUNT],
    /// The memory this core is currently mutating.
    memory: Configuration,
    /// The configuration this core started this call from; `ENDGA` rewinds `memory` to a
    /// clone of this rather than to an empty configuration.
    snapshot: Configuration,
    idle: bool,
    executed_cycles: u64,
    new_configs: Vec<Configuration>,
    division_mode: DivisionMode,
}

impl Core {
    /// Builds a core bound to `program` (a decoded word stream, sentinel included), identified
    /// by `core_index` in diagnostics. Uses truncating `DIV` (see [`DivisionMode`]); switch with
    /// [`Core::with_division_mode`].
    pub fn new(core_index: usize, program: Vec<u32>) -> Self {
        Self {
            core_index,
            decoder: Decoder::new(program),
            registers: [0; CORE_REGISTER_COUNT],
            memory: Configuration::zeroed(0),
            snapshot: Configuration::zeroed(0),
            idle: false,
            executed_cycles: 0,
            new_configs: Vec::new(),
            division_mode: DivisionMode::default(),
        }
    }

    /// Rebinds this core's `DIV` rounding behaviour to `mode`.
    pub fn with_division_mode(mut self, mode: DivisionMode) -> Self {
        self.division_mode = mode;
        self
    }

    /// Rewinds this core to `initial`: registers zeroed, program counter reset to the first
    /// instruction, cycle counter and pending successor list cleared.
    pub fn setup_cfg_memory(&mut self, initial: &Configuration) {
        self.memory = initial.clone();
        self.snapshot = initial.clone();
        self.registers = [0; CORE_REGISTER_COUNT];
        self.decoder.set_program_counter(0);
        self.idle = false;
        self.executed_cycles = 0;
        self.new_configs.clear();
    }

    /// Restarts the *memory* a running core is working from, without touching its program
    /// counter or registers. Called by `ENDGA` after publishing a successor.
    fn reset_cfg_memory(&mut self) {
        self.memory = self.snapshot.clone();
    }

    pub const fn executed_cycles(&self) -> u64 {
        self.executed_cycles
    }

    pub const fn is_idle(&self) -> bool {
        self.idle
    }

    /// Runs this core to the end of its program (or a [`RuntimeError`] division/modulo fault),
    /// returning every configuration published via `ENDGA` along the way.
    pub fn process_instructions(&mut self) -> Result<Vec<Configuration>, RuntimeError> {
        self.executed_cycles += CYCLES_RESET;

        loop {
            let Some(instr) = self.decoder.decode_next() else {
                self.idle = true;
                break;
            };
            self.executed_cycles += CYCLES_FETCH_DECODE;
            trace!(core = self.core_index, pc = self.decoder.program_counter() - 1, %instr, "executing");
            self.instruction(instr)?;
            if self.idle {
                break;
            }
        }

        Ok(std::mem::take(&mut self.new_configs))
    }

    fn operand(&self, reg: u8, imm: u32, register: bool) -> u32 {
        if register {
            self.registers[reg as usize]
        } else {
            imm
        }
    }

    fn instruction(&mut self, instr: Instruction) -> Result<(), RuntimeError> {
        if instr.op.is_binary() {
            match instr.op {
                Op::Div | Op::Mod => self.binary_checked(instr)?,
                _ => self.binary(instr),
            }
            self.executed_cycles += CYCLES_BINARY;
            return Ok(());
        }

        match instr.op {
            Op::Not => {
                self.registers[instr.rd as usize] = (self.registers[instr.ra as usize] == 0) as u32;
                self.executed_cycles += CYCLES_NOT;
            }

            Op::Jmp => {
                if self.registers[instr.rd as usize] == 0 {
                    self.decoder.set_program_counter(instr.addr as usize);
                }
                self.executed_cycles += CYCLES_JMP;
            }

            Op::Load => {
                self.load(instr);
                self.executed_cycles += match instr.load_cfg() {
                    LoadCfg::Reg | LoadCfg::Imm => CYCLES_LOAD_REG_IMM,
                    LoadCfg::Adr => CYCLES_LOAD_ADR,
                    LoadCfg::Raa => CYCLES_LOAD_RAA,
                };
            }

            Op::Store => {
                self.store(instr);
                self.executed_cycles += CYCLES_STORE;
            }

            Op::Endga => {
                self.new_configs.push(self.memory.clone());
                self.reset_cfg_memory();
                self.executed_cycles += CYCLES_ENDGA;
            }

            Op::Nop => {
                self.idle = true;
                self.executed_cycles += CYCLES_NOP;
            }

            // Unreachable: `instr.op.is_binary()` above covers every other opcode.
            _ => unreachable!("non-binary, non-control opcode {:?} fell through", instr.op),
        }

        Ok(())
    }

    fn binary_operands(&self, instr: Instruction) -> (u32, u32) {
        match instr.binary_cfg() {
            BinaryCfg::Rr => (self.operand(instr.ra, 0, true), self.operand(instr.rb, 0, true)),
            BinaryCfg::Ri => (self.operand(instr.ra, 0, true), self.operand(0, instr.immb, false)),
            BinaryCfg::Ir => (self.operand(0, instr.imma, false), self.operand(instr.rb, 0, true)),
            BinaryCfg::Ii => (self.operand(0, instr.imma, false), self.operand(0, instr.immb, false)),
        }
    }

    fn binary(&mut self, instr: Instruction) {
        let (b, c) = self.binary_operands(instr);

        match instr.op {
            Op::Add => self.alu_wrapping(instr.rd, |x, y| x.wrapping_add(y), b, c),
            Op::Sub => self.alu_wrapping(instr.rd, |x, y| x.wrapping_sub(y), b, c),
            Op::Mul => self.alu_wrapping(instr.rd, |x, y| x.wrapping_mul(y), b, c),
            Op::And => self.alu_bool(instr.rd, b != 0 && c != 0),
            Op::Or => self.alu_bool(instr.rd, b != 0 || c != 0),
            Op::Lt => self.alu_bool(instr.rd, b < c),
            Op::Gt => self.alu_bool(instr.rd, b > c),
            Op::Eq => self.alu_bool(instr.rd, b == c),
            _ => unreachable!("DIV/MOD and non-binary opcodes never reach Core::binary"),
        }
    }

    /// `DIV`/`MOD`: integer-truncating by default (or real division, rounded, under
    /// [`DivisionMode::Real`]), recoverable as a [`RuntimeError`] on a zero divisor rather than
    /// panicking the host.
    fn binary_checked(&mut self, instr: Instruction) -> Result<(), RuntimeError> {
        let (b, c) = self.binary_operands(instr);

        match instr.op {
            Op::Div => match self.division_mode {
                DivisionMode::Truncating => self.alu_checked(instr.rd, |x, y| x.checked_div(y), b, c, RuntimeError::DivisionByZero),
                DivisionMode::Real => self.alu_checked(
                    instr.rd,
                    |x, y| if y == 0 { None } else { Some((x as f64 / y as f64).round() as u32) },
                    b,
                    c,
                    RuntimeError::DivisionByZero,
                ),
            },
            Op::Mod => self.alu_checked(instr.rd, |x, y| x.checked_rem(y), b, c, RuntimeError::ModuloByZero),
            _ => unreachable!("only DIV/MOD are dispatched through Core::binary_checked"),
        }
    }

    fn load(&mut self, instr: Instruction) {
        let value = match instr.load_cfg() {
            LoadCfg::Reg => self.registers[instr.ra as usize],
            LoadCfg::Imm => instr.imma,
            LoadCfg::Adr => self.memory.view().get(instr.r#type, instr.addr),
            LoadCfg::Raa => {
                let address = self.registers[instr.ra as usize];
                self.memory.view().get(instr.r#type, address)
            }
        };
        self.registers[instr.rd as usize] = value;
    }

    fn store(&mut self, instr: Instruction) {
        let value = self.registers[instr.rd as usize];
        match instr.store_cfg() {
            StoreCfg::Adr => self.memory.view().set(instr.r#type, value, instr.addr),
            StoreCfg::Raa => {
                let address = self.registers[instr.ra as usize];
                self.memory.view().set(instr.r#type, value, address);
            }
        }
    }
}
