//! Hand-written list accessors.

use super::List;

impl List {
    /// Whether the list is ordered.
    ///
    /// Decided by the first item's bullet: a bullet starting with an ASCII
    /// digit (`1.`, `2)`) makes the list ordered, anything else (`-`, `+`)
    /// keeps it plain. An empty list is unordered.
    pub fn ordered(&self) -> bool {
        self.items()
            .next()
            .and_then(|item| item.bullet())
            .map_or(false, |bullet| {
                bullet
                    .text()
                    .trim_start()
                    .starts_with(|c: char| c.is_ascii_digit())
            })
    }
}
