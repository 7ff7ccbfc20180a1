// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! properties, such as background colors, using OSC (Operating System Command)
//! escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences.

use std::io::{self, Write};

const OSC_SET_BG: &str = "\x1b]11;";
const OSC_RESET_BG: &str = "\x1b]111";
const BEL: &str = "\x07";

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// Failures are ignored, a terminal that cannot take the sequence simply
/// keeps its own background.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    let _ = write_set_bg(&mut io::stdout(), hex_color);
}

/// Resets the terminal background to its default color (OSC 111).
///
/// This is called during application cleanup to ensure the user's terminal
/// state is restored.
pub(crate) fn reset_terminal_bg() {
    let _ = write_reset_bg(&mut io::stdout());
}

fn write_set_bg<W: Write>(out: &mut W, hex_color: &str) -> io::Result<()> {
    write!(out, "{OSC_SET_BG}{hex_color}{BEL}")?;
    out.flush()
}

fn write_reset_bg<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{OSC_RESET_BG}{BEL}")?;
    out.flush()
}
