// src/error.rs
use crate::types::NumericKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitconvError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Byte length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: NumericKind, found: NumericKind },

    #[error("Trailing bytes: {len} bytes is not a multiple of the {width}-byte value width")]
    TrailingBytes { width: usize, len: usize },

    #[error("Index {index} out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Scratch buffer too small: need {required} elements, found {found}")]
    ScratchTooSmall { required: usize, found: usize },

    #[error("Output buffer too short: need {required} elements, found {found}")]
    OutputTooShort { required: usize, found: usize },

    #[error("Empty input sequence")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, BitconvError>;
