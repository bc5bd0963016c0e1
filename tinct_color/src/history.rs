use crate::{utils::FxIndexSet, HexColor};

pub const DEFAULT_HISTORY_CAPACITY: usize = 12;

/// Saved colors, most recent first, without duplicates.
///
/// Saving a color that is already present leaves the order untouched.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    colors: FxIndexSet<HexColor>,
    capacity: usize,
}
impl ColorHistory {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> ColorHistory {
        let capacity = capacity.max(1);

        ColorHistory {
            colors: FxIndexSet::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    pub fn contains(&self, color: &HexColor) -> bool {
        self.colors.contains(color)
    }
    pub fn get(&self, idx: usize) -> Option<HexColor> {
        self.colors.get_index(idx).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &'_ HexColor> {
        self.colors.iter()
    }
    /// Returns `false` if the color was already saved.
    pub fn save(&mut self, color: HexColor) -> bool {
        if self.colors.contains(&color) {
            return false;
        }

        self.colors.shift_insert(0, color);
        self.colors.truncate(self.capacity);
        true
    }
}
impl Default for ColorHistory {
    fn default() -> ColorHistory {
        ColorHistory::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hsl;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn saved(history: &ColorHistory) -> Vec<String> {
        history.iter().map(HexColor::to_string).collect()
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = ColorHistory::default();
        assert!(history.save(hex("#111111")));
        assert!(history.save(hex("#222222")));
        assert_eq!(saved(&history), ["#222222", "#111111"]);
        assert_eq!(history.get(0), Some(hex("#222222")));
    }

    #[test]
    fn test_duplicate_is_ignored_and_not_moved() {
        let mut history = ColorHistory::default();
        history.save(hex("#111111"));
        history.save(hex("#222222"));

        assert!(!history.save(hex("#111111")));
        assert_eq!(saved(&history), ["#222222", "#111111"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = ColorHistory::default();
        for hue in 0..15 {
            history.save(Hsl::new(hue * 20, 100, 50).to_hex());
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.get(0), Some(Hsl::new(280, 100, 50).to_hex()));
        assert!(!history.contains(&Hsl::new(0, 100, 50).to_hex()));
        assert!(history.contains(&Hsl::new(60, 100, 50).to_hex()));
    }

    #[test]
    fn test_dropped_color_can_be_saved_again() {
        let mut history = ColorHistory::new(2);
        history.save(hex("#111111"));
        history.save(hex("#222222"));
        history.save(hex("#333333"));

        assert!(history.save(hex("#111111")));
        assert_eq!(saved(&history), ["#111111", "#333333"]);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut history = ColorHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.save(hex("#111111"));
        history.save(hex("#222222"));
        assert_eq!(saved(&history), ["#222222"]);
        assert!(!history.is_empty());
    }
}
