// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Indentation-tracking output for generated Isar scripts

use std::io::Write;

use crate::error::Result;

/// Destination for generated script lines
pub trait ScriptSink {
    /// Write one line at the current indentation
    fn line(&mut self, text: &str) -> Result<()>;

    /// Increase indentation by `columns`
    fn indent(&mut self, columns: usize);

    /// Decrease indentation by `columns`, never below zero
    fn dedent(&mut self, columns: usize);

    /// Write an Isabelle comment line
    fn comment(&mut self, text: &str) -> Result<()> {
        self.line(&format!("(* {} *)", text.replace("*)", "* )")))
    }
}

/// `ScriptSink` over any writer
pub struct ScriptWriter<W: Write> {
    out: W,
    indent: usize,
    lines: usize,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        ScriptWriter {
            out,
            indent: 0,
            lines: 0,
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScriptSink for ScriptWriter<W> {
    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{:width$}{}", "", text, width = self.indent)?;
        self.lines += 1;
        Ok(())
    }

    fn indent(&mut self, columns: usize) {
        self.indent += columns;
    }

    fn dedent(&mut self, columns: usize) {
        self.indent = self.indent.saturating_sub(columns);
    }
}
