//! Output buffering.
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Named region of the output.
///
/// Sections are written out in declaration order,
/// regardless of the order they were filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(usize)]
pub enum Section {
    /// Declarations that precede all executable statements.
    Header,
    Body,
}

impl Section {
    pub const COUNT: usize = 2;
    pub const ALL: [Section; Self::COUNT] = [Section::Header, Section::Body];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Accumulates generated source text, and writes it out once at the end.
///
/// The emitter doesn't check or deduplicate what it's given.
#[derive(Debug)]
pub struct Emitter {
    sections: [Vec<String>; Section::COUNT],
    /// Whether the last line of the body is still open
    /// for more text.
    open_line: bool,
    output: PathBuf,
}

impl Emitter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            sections: Default::default(),
            open_line: false,
            output: output.into(),
        }
    }

    /// Destination file of the generated source.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Append text to the current body line, without terminating it.
    pub fn emit(&mut self, text: &str) {
        let body = &mut self.sections[Section::Body.index()];
        match body.last_mut() {
            Some(line) if self.open_line => line.push_str(text),
            _ => body.push(text.to_owned()),
        }
        self.open_line = true;
    }

    /// Append text to the current body line, and terminate it.
    pub fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.open_line = false;
    }

    /// Add a complete line to the header.
    pub fn header_line(&mut self, text: &str) {
        self.sections[Section::Header.index()].push(text.to_owned());
    }

    pub fn lines(&self, section: Section) -> &[String] {
        &self.sections[section.index()]
    }

    /// Render all sections in order.
    ///
    /// Every terminated line ends with a newline. A body line that
    /// was never terminated is rendered as is.
    pub fn source(&self) -> String {
        let mut out = String::new();

        for section in Section::ALL {
            let lines = self.lines(section);
            for (i, line) in lines.iter().enumerate() {
                out.push_str(line);

                let is_open = section == Section::Body && self.open_line && i + 1 == lines.len();
                if !is_open {
                    out.push('\n');
                }
            }
        }

        out
    }

    /// Write the rendered source to the output file.
    pub fn flush(self) -> io::Result<()> {
        debug!("writing {}", self.output.display());
        fs::write(&self.output, self.source())
    }
}
