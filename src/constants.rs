//! Application constants and configuration

pub const API_BASE_URL: &str = "https://dummyjson.com";

/// Minimum rendered width of one product cell, in layout units.
pub const CELL_MIN_WIDTH: u32 = 250;

/// Records requested per gap-fill page.
pub const DEFAULT_PAGE_SIZE: usize = 12;
