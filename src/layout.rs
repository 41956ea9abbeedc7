//! Column layout: viewport width to column count

use crate::constants::CELL_MIN_WIDTH;

/// Current layout width and the column count derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub width: u32,
    pub column_count: usize,
}

impl ViewportGeometry {
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            column_count: columns_for(width),
        }
    }
}

/// Map a viewport width to a column count: as many `CELL_MIN_WIDTH` cells as
/// fit, never fewer than one. Monotonically non-decreasing in width.
pub fn columns_for(width: u32) -> usize {
    ((width / CELL_MIN_WIDTH) as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn narrow_viewport_gets_one_column() {
        assert_eq!(columns_for(0), 1);
        assert_eq!(columns_for(100), 1);
        assert_eq!(columns_for(CELL_MIN_WIDTH - 1), 1);
    }

    #[test]
    fn columns_step_at_cell_width_multiples() {
        assert_eq!(columns_for(CELL_MIN_WIDTH), 1);
        assert_eq!(columns_for(CELL_MIN_WIDTH * 2), 2);
        assert_eq!(columns_for(CELL_MIN_WIDTH * 2 - 1), 1);
        assert_eq!(columns_for(CELL_MIN_WIDTH * 6 + 10), 6);
    }

    proptest! {
        #[test]
        fn at_least_one_column(width in 0u32..100_000) {
            prop_assert!(columns_for(width) >= 1);
        }

        #[test]
        fn non_decreasing_in_width(width in 0u32..100_000, delta in 0u32..10_000) {
            prop_assert!(columns_for(width + delta) >= columns_for(width));
        }
    }
}
