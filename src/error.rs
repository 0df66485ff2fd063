//! Error hierarchy surfaced by the loaders, the assembler and the core's arithmetic.

use thiserror::Error;

/// Errors raised while loading a program binary or a configuration literal from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The binary's byte length isn't a multiple of the 4-byte word size.
    #[error("truncated binary: {byte_len} bytes is not a multiple of 4")]
    TruncatedBinary {
        /// Length in bytes of the file that failed to parse.
        byte_len: usize,
    },

    /// The configuration literal was empty or contained a non-hex character.
    #[error("bad configuration literal: {literal:?} is not a non-empty hex string")]
    BadConfigurationLiteral {
        /// The offending literal, as read from the first line of the file.
        literal: String,
    },

    /// Wraps an underlying I/O failure (missing file, permission denied, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised translating a textual assembler line into a 32-bit word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// The mnemonic isn't one this assembler knows how to translate.
    #[error("unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic {
        /// The offending mnemonic token.
        mnemonic: String,
    },

    /// The mnemonic was given the wrong number of operands.
    #[error("{mnemonic:?} expects {expected} operand(s), got {found}")]
    WrongArity {
        /// The offending mnemonic.
        mnemonic: String,
        /// The number of operands this mnemonic requires.
        expected: usize,
        /// The number of operands actually supplied.
        found: usize,
    },

    /// An operand that must be a register (`rN`) was instead an immediate, or vice versa.
    #[error("{mnemonic:?} operand {index}: expected {expected}, found {found:?}")]
    OperandKindMismatch {
        /// The offending mnemonic.
        mnemonic: String,
        /// Zero-based operand position.
        index: usize,
        /// What the mnemonic's grammar requires at this position (`"register"` or `"immediate"`).
        expected: &'static str,
        /// The raw operand token the caller supplied.
        found: String,
    },

    /// An operand token couldn't be parsed as either a register or an integer immediate.
    #[error("{mnemonic:?} operand {index}: {token:?} is neither a register nor an integer")]
    MalformedOperand {
        /// The offending mnemonic.
        mnemonic: String,
        /// Zero-based operand position.
        index: usize,
        /// The raw operand token the caller supplied.
        token: String,
    },
}

/// Errors raised by the core's arithmetic that the spec leaves as "host-defined" but Rust
/// cannot silently paper over (division/modulo by zero would otherwise panic).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
}
