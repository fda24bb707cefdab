//! Application errors
use log::SetLoggerError;
use std::io;
use teeny_compiler::CompileError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} error: {0}", .0.kind())]
    Compile(#[from] CompileError),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] SetLoggerError),
}
