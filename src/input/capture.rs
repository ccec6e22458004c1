//! Scoped terminal input registration
//!
//! Mouse reporting and bracketed paste are switched on for as long as an
//! [`InputCapture`] lives and switched off when it drops.

use std::io::{self, Write};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

pub struct InputCapture<W: Write> {
    writer: W,
}

impl<W: Write> InputCapture<W> {
    /// Enable mouse and paste events on `writer`
    ///
    /// On failure anything already enabled is switched off again.
    pub fn acquire(mut writer: W) -> io::Result<Self> {
        if let Err(e) = execute!(writer, EnableMouseCapture, EnableBracketedPaste) {
            let _ = execute!(writer, DisableBracketedPaste, DisableMouseCapture);
            return Err(e);
        }
        log::debug!("Input capture acquired");
        Ok(Self { writer })
    }
}

impl<W: Write> Drop for InputCapture<W> {
    fn drop(&mut self) {
        match execute!(self.writer, DisableBracketedPaste, DisableMouseCapture) {
            Ok(()) => log::debug!("Input capture released"),
            Err(e) => log::warn!("Failed to release input capture: {}", e),
        }
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod capture_tests;
