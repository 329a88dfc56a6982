//! Shared primitive types used across the entire simulation.

/// Zero-based sequential counter identifying each simulated quarter.
pub type QuarterIndex = u32;

/// The canonical session identifier.
pub type SessionId = String;

/// Calendar year that quarter index 0 falls in.
pub const BASE_YEAR: i32 = 2025;

/// Quarters in a full game, seed quarter included (10 in-game years).
pub const GAME_HORIZON: QuarterIndex = 40;

/// Calendar year a quarter index falls in.
pub fn year_of(index: QuarterIndex) -> i32 {
    BASE_YEAR + (index / 4) as i32
}

/// Display label for a quarter index, e.g. "Q3 2026".
pub fn quarter_label(index: QuarterIndex) -> String {
    format!("Q{} {}", index % 4 + 1, year_of(index))
}
