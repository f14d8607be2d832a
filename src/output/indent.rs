// Sat Oct 17 2026 - Alex

use std::fmt;

/// One indentation level of generated code: a tab for width 0, otherwise
/// that many spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: u8,
}

impl Indent {
    pub const MAX_WIDTH: u8 = 9;

    pub fn new(width: u8) -> Option<Self> {
        (width <= Self::MAX_WIDTH).then_some(Self { width })
    }

    pub fn tab() -> Self {
        Self { width: 0 }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn unit(&self) -> String {
        if self.width == 0 {
            "\t".to_string()
        } else {
            " ".repeat(usize::from(self.width))
        }
    }

    pub fn level(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self { width: 4 }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unit())
    }
}
