//! Compiler from Teeny Tiny to C.
//!
//! Single pass: the parser pulls tokens from the lexer on demand, and
//! reports every production it recognises to a sink. With [`CodeGen`] as
//! the sink, C source is generated during parsing. With a `Vec<Event>` as
//! the sink, the recognised program is recorded for a later stage.
//!
//! [`CodeGen`]: compile::CodeGen
pub mod compile;
pub mod constants;
mod cursor;
pub mod emit;
mod error;
pub mod lex;
pub mod parsing;
pub mod token_stream;
pub mod tokens;

pub use self::error::{CompileError, CompileResult, ErrorKind};

use self::{
    compile::CodeGen,
    emit::{Emitter, Section},
    lex::Lexer,
    parsing::{Event, Parser},
};
use log::debug;
use std::path::PathBuf;

/// Compiler configuration parameters.
#[derive(Debug, Clone)]
pub struct CompileConf {
    /// Where the emitter writes the generated C source.
    pub output: PathBuf,
}

impl Default for CompileConf {
    fn default() -> Self {
        Self {
            output: PathBuf::from(constants::DEFAULT_OUTPUT),
        }
    }
}

/// Compile source code to C, returning the generated text.
pub fn compile_str(source_code: impl AsRef<str>) -> CompileResult<String> {
    compile_with(source_code, CompileConf::default()).map(|emitter| emitter.source())
}

/// Compile source code to C.
///
/// The returned emitter holds the generated source, ready to be flushed
/// to the configured output. Nothing is written on failure.
pub fn compile_with(source_code: impl AsRef<str>, conf: CompileConf) -> CompileResult<Emitter> {
    let lexer = Lexer::new(source_code.as_ref());
    let emitter = Emitter::new(conf.output);
    let mut parser = Parser::new(lexer, CodeGen::new(emitter))?;

    parser.program()?;

    let emitter = parser.into_sink().into_emitter();
    debug!(
        "generated {} header lines and {} body lines",
        emitter.lines(Section::Header).len(),
        emitter.lines(Section::Body).len()
    );
    Ok(emitter)
}

/// Parse source code into its event stream, without generating code.
pub fn parse_events(source_code: impl AsRef<str>) -> CompileResult<Vec<Event>> {
    let lexer = Lexer::new(source_code.as_ref());
    let mut parser = Parser::new(lexer, Vec::<Event>::new())?;
    parser.program()?;
    Ok(parser.into_sink())
}

pub mod prelude {
    pub use super::{
        compile::CodeGen,
        compile_str, compile_with,
        emit::{Emitter, Section},
        parse_events,
        parsing::{replay, Event, EventSink, Parser},
        CompileConf, CompileError, CompileResult, ErrorKind,
    };
}
