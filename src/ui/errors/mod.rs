// Sat Oct 17 2026 - Alex

pub mod display;

pub use display::ErrorDisplay;
