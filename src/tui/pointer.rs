//! Mouse pointer shape feedback.
//!
//! Terminals that understand OSC 22 (xterm's pointer-shape extension) swap
//! the mouse cursor glyph; everything else ignores the sequence. crossterm
//! has no built-in command for it, so this module supplies one through the
//! public `Command` extension point. Issued once per frame after drawing,
//! driven by whether a hit-tested region claimed the mouse.

use std::fmt;

use crossterm::Command;

/// Pointer glyph requested from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseShape {
    #[default]
    Default,
    Pointer,
}

impl MouseShape {
    fn name(self) -> &'static str {
        match self {
            MouseShape::Default => "default",
            MouseShape::Pointer => "pointer",
        }
    }
}

/// `execute!`-able command selecting the terminal's mouse pointer shape.
#[derive(Debug, Clone, Copy)]
pub struct SetMouseShape(pub MouseShape);

impl Command for SetMouseShape {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]22;{}\x1b\\", self.0.name())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        // No legacy-console equivalent; the ANSI path covers Windows
        // Terminal.
        Ok(())
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi_of(shape: MouseShape) -> String {
        let mut out = String::new();
        SetMouseShape(shape).write_ansi(&mut out).unwrap();
        out
    }

    #[test]
    fn test_pointer_shape_sequence() {
        assert_eq!(ansi_of(MouseShape::Pointer), "\x1b]22;pointer\x1b\\");
    }

    #[test]
    fn test_default_shape_sequence() {
        assert_eq!(ansi_of(MouseShape::Default), "\x1b]22;default\x1b\\");
    }
}
