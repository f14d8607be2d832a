// Sat Oct 17 2026 - Alex

use crate::node::NodeError;
use std::fmt;

/// A power-of-two alignment requirement a node's value type may impose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub fn new(value: usize) -> Result<Self, NodeError> {
        if value == 0 || !value.is_power_of_two() {
            return Err(NodeError::InvalidAlignment(value));
        }
        Ok(Self { value })
    }

    /// Alignment of `T` on the host.
    pub fn of<T>() -> Self {
        Self {
            value: std::mem::align_of::<T>(),
        }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    /// Rounds `offset` up to the next multiple of this alignment.
    pub fn align(&self, offset: usize) -> Option<usize> {
        offset
            .checked_add(self.value - 1)
            .map(|end| end & !(self.value - 1))
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // forward so width/fill flags apply to the number
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_power_of_two() {
        assert_eq!(Alignment::new(0), Err(NodeError::InvalidAlignment(0)));
        assert_eq!(Alignment::new(12), Err(NodeError::InvalidAlignment(12)));
        assert!(Alignment::new(16).is_ok());
    }

    #[test]
    fn test_align_rounds_up() {
        let eight = Alignment::new(8).unwrap();
        assert_eq!(eight.align(0), Some(0));
        assert_eq!(eight.align(1), Some(8));
        assert_eq!(eight.align(8), Some(8));
        assert_eq!(eight.align(9), Some(16));
        assert_eq!(eight.align(usize::MAX), None);
    }

    #[test]
    fn test_display_honours_width() {
        let four = Alignment::new(4).unwrap();
        assert_eq!(format!("{:>2}", four), " 4");
        assert_eq!(four.to_string(), "4");
    }
}
