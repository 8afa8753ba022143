// File: crates/axis-core/src/density.rs
// Summary: Pick a major tick count from the room available on the axis.

/// Smallest count every solver accepts.
pub const MIN_MAJOR_TICKS: usize = 2;

/// Number of intervals that fit `axis_width` when each label needs
/// `label_width`, keeping as much blank space between labels as the labels
/// themselves take. Both widths are in the same unit (pixels, points, ...).
pub fn major_tick_count(axis_width: f64, label_width: f64) -> usize {
    let usable = axis_width.is_finite() && label_width.is_finite() && axis_width > 0.0 && label_width > 0.0;
    if !usable { return MIN_MAJOR_TICKS; }
    let count = (axis_width / label_width / 2.0).floor();
    (count as usize).max(MIN_MAJOR_TICKS)
}

/// Width of an average endpoint label, from the shortest round-trip text of
/// `min` and `max` and a fixed advance per character.
pub fn average_label_width(min: f64, max: f64, char_width: f64) -> f64 {
    let chars = format!("{min}").chars().count() + format!("{max}").chars().count();
    chars as f64 / 2.0 * char_width
}
