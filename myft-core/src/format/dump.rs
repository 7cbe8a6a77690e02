//! Compact hex/ASCII rendering of raw bytes for diagnostics

use core::fmt;

/// Number of bytes rendered before eliding the rest
pub const PREVIEW_LEN: usize = 16;

/// Display adapter showing up to [`PREVIEW_LEN`] bytes as hex and ASCII
///
/// `HexPreview(b"MYFT\x00\x01")` renders as `4D 59 46 54 00 01 |MYFT..|`.
/// Longer inputs are cut off and marked with `...`.
#[derive(Debug, Clone, Copy)]
pub struct HexPreview<'a>(pub &'a [u8]);

impl fmt::Display for HexPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = &self.0[..self.0.len().min(PREVIEW_LEN)];
        let elided = self.0.len() > PREVIEW_LEN;

        for (i, byte) in shown.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        if elided {
            f.write_str(" ...")?;
        }

        f.write_str(" |")?;
        for &byte in shown {
            let c = if (32..=126).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
        if elided {
            f.write_str("...")?;
        }
        f.write_str("|")
    }
}
