//! Constant values of the Teeny Tiny language and its C target.

/// Starts a comment that runs to the end of the line.
pub const COMMENT_CHAR: char = '#';

/// Destination of the generated C source when none is configured.
pub const DEFAULT_OUTPUT: &str = "out.c";

/// C type that every variable is declared as.
pub const NUMBER_TYPE: &str = "float";
