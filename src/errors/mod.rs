/**********************************************
  > File Name		: errors.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Tue 02 Mar 2021 11:05:17 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Define some erros enum for global usage.
 * One enum per component: the record store and the data file codec.
 */

use std::io;
use thiserror::Error;

pub type RecordResult<T> = std::result::Result<T, RecordError>;
pub type CodecResult<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("book with serial {0} already exists")]
    DuplicateKey(u32),

    #[error("book with serial {0} doesn't exist")]
    KeyNotFound(u32),

    //returns when a sale asks for more copies than in stock.
    #[error("book {serial} has {in_stock} in stock, {requested} requested")]
    InsufficientStock {
        serial: u32,
        in_stock: u32,
        requested: u32,
    },

    //index and book list disagree about a serial. Always a bug.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    //not an error for the caller, just means start with a fresh list.
    #[error("data file not found")]
    NotFound,

    #[error("data file corrupt at line {line}: {reason}")]
    CorruptFormat { line: usize, reason: String },

    #[error("data file version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    pub fn corrupt<S: Into<String>>(line: usize, reason: S) -> Self {
        CodecError::CorruptFormat {
            line,
            reason: reason.into(),
        }
    }
}

//returned by the shell when an input line is not a valid command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} arguments, got {found}")]
    WrongArity {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("bad {what}: {value:?}")]
    BadValue { what: &'static str, value: String },
}
