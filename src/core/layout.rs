//! Screen placement of listing entries.
//!
//! Entries never scroll. When a column runs into the bottom margin the layout
//! wraps into a new band to the right, as wide as the widest entry of the
//! band before it. Folders and files share one [LayoutAccumulator], so files
//! continue in the band where the folders stopped.
//!
//! Row budget, for a terminal of `rows` lines:
//! - rows `0` and `1` hold the title and the current path,
//! - the first band fills rows `2..rows - 2`,
//! - every later band starts [BAND_TOP_OFFSET] rows lower and holds
//!   `rows - 5` entries,
//! - the last two rows are kept for the edit buffer.

use unicode_width::UnicodeWidthStr;

use crate::core::fm::Entry;

/// Rows reserved above the entries for title and path.
pub const HEADER_ROWS: usize = 2;
/// Rows reserved under the entries for the edit buffer line.
pub const FOOTER_ROWS: usize = 2;
/// Extra top offset of every band after the first.
pub const BAND_TOP_OFFSET: usize = 3;
/// Blank columns after an entry name, counted in its band width.
pub const ENTRY_PADDING: usize = 1;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport { rows, cols }
    }

    /// Row count of the wrap-around space, never zero.
    #[inline]
    pub fn fold_height(&self) -> usize {
        self.rows.saturating_sub(FOOTER_ROWS).max(1)
    }

    /// Entries held by every band after the first, never zero.
    ///
    /// This is also the distance a Left/Right keypress moves the selection.
    #[inline]
    pub fn band_height(&self) -> usize {
        self.rows
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS + 1)
            .max(1)
    }

    /// Entries held by the first band, never zero.
    #[inline]
    pub fn first_band_height(&self) -> usize {
        self.fold_height().saturating_sub(HEADER_ROWS).max(1)
    }
}

/// Where an entry is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub band: usize,
}

impl Placement {
    /// Whether the top-left cell of the entry lies inside the viewport.
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        self.row < viewport.rows && self.column < viewport.cols
    }
}

/// Running band bookkeeping shared between the folders pass and the files pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutAccumulator {
    column_left: usize,
    band: usize,
    band_width: usize,
}

impl LayoutAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn column_left(&self) -> usize {
        self.column_left
    }

    #[inline]
    pub fn band(&self) -> usize {
        self.band
    }

    #[inline]
    pub fn band_width(&self) -> usize {
        self.band_width
    }

    /// Closes bands until `band` is the current one.
    fn advance_to(&mut self, band: usize) {
        while self.band < band {
            self.column_left += self.band_width + 1;
            self.band_width = 0;
            self.band += 1;
        }
    }

    /// Places one entry occupying `slot` of the shared row space.
    pub fn place(&mut self, slot: usize, width: usize, viewport: Viewport) -> Placement {
        let (band, row) = band_and_row(slot, viewport);
        self.advance_to(band);
        self.band_width = self.band_width.max(width);

        Placement {
            row,
            column: 1 + self.column_left,
            band,
        }
    }

    /// Places a whole group whose first entry sits at `start_row` of the shared row space.
    pub fn place_group(
        &mut self,
        entries: &[Entry],
        start_row: usize,
        prefix_width: usize,
        viewport: Viewport,
    ) -> Vec<Placement> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let width = entry_width(entry, prefix_width);
                self.place(start_row + i, width, viewport)
            })
            .collect()
    }
}

/// Display width of an entry including its glyph prefix and padding.
pub fn entry_width(entry: &Entry, prefix_width: usize) -> usize {
    entry.name_str().width() + prefix_width + ENTRY_PADDING
}

/// Resolves a slot of the shared row space into `(band, row)`.
fn band_and_row(slot: usize, viewport: Viewport) -> (usize, usize) {
    let first = viewport.first_band_height();
    if slot < first {
        return (0, slot + HEADER_ROWS);
    }

    let height = viewport.band_height();
    let rest = slot - first;
    let band = 1 + rest / height;
    let row = BAND_TOP_OFFSET + rest % height;
    (band, row)
}

/// Computes placements for folders then files, in combined index order.
pub fn layout_entries(
    folders: &[Entry],
    files: &[Entry],
    viewport: Viewport,
    folders_start_row: usize,
    files_start_row: usize,
    prefix_width: usize,
) -> Vec<Placement> {
    let mut acc = LayoutAccumulator::new();
    let mut placements = acc.place_group(folders, folders_start_row, prefix_width, viewport);
    placements.extend(acc.place_group(files, files_start_row, prefix_width, viewport));
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fm::EntryKind;

    fn files(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry::new(format!("file{i}"), EntryKind::File))
            .collect()
    }

    #[test]
    fn first_band_starts_under_header() {
        let vp = Viewport::new(24, 80);
        let placed = layout_entries(&[], &files(3), vp, 0, 0, 0);
        let rows: Vec<usize> = placed.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![2, 3, 4]);
        assert!(placed.iter().all(|p| p.column == 1 && p.band == 0));
    }

    #[test]
    fn wraps_into_second_band() {
        // 10 rows: first band rows 2..=7, later bands rows 3..=7.
        let vp = Viewport::new(10, 80);
        let placed = layout_entries(&[], &files(8), vp, 0, 0, 0);

        assert_eq!(placed[5].row, 7);
        assert_eq!(placed[5].band, 0);
        assert_eq!(placed[6].row, 3);
        assert_eq!(placed[6].band, 1);
        // "file0" is 5 wide plus padding, plus the one column separator.
        assert_eq!(placed[6].column, 1 + 6 + 1);
    }

    #[test]
    fn files_continue_after_folders() {
        let vp = Viewport::new(10, 80);
        let folders = vec![
            Entry::new("a", EntryKind::Directory),
            Entry::new("b", EntryKind::Directory),
        ];
        let placed = layout_entries(&folders, &files(2), vp, 0, folders.len(), 0);
        let rows: Vec<usize> = placed.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);
    }

    #[test]
    fn band_width_tracks_widest_entry() {
        let vp = Viewport::new(7, 80);
        // first band holds 3 entries, later bands 2.
        let entries = vec![
            Entry::new("a", EntryKind::File),
            Entry::new("a_much_longer_name", EntryKind::File),
            Entry::new("b", EntryKind::File),
            Entry::new("c", EntryKind::File),
        ];
        let placed = layout_entries(&[], &entries, vp, 0, 0, 3);
        assert_eq!(placed[3].band, 1);
        assert_eq!(placed[3].column, 1 + (18 + 3 + ENTRY_PADDING) + 1);
    }

    #[test]
    fn rows_stay_above_footer_for_any_count() {
        for rows in 6..30 {
            let vp = Viewport::new(rows, 200);
            let placed = layout_entries(&[], &files(120), vp, 0, 0, 3);
            let mut last_band = 0;
            let mut last_col = 0;
            for p in &placed {
                assert!(p.row < rows - 1, "row {} with {} rows", p.row, rows);
                assert!(p.band >= last_band);
                if p.band > last_band {
                    assert!(p.column > last_col);
                } else {
                    assert!(p.column >= last_col);
                }
                last_band = p.band;
                last_col = p.column;
            }
        }
    }

    #[test]
    fn degenerate_terminal_does_not_hang() {
        for rows in 0..6 {
            let vp = Viewport::new(rows, 0);
            let placed = layout_entries(&[], &files(10), vp, 0, 0, 0);
            assert_eq!(placed.len(), 10);
            assert!(placed.iter().all(|p| !p.is_visible(vp)));
        }
    }

    #[test]
    fn short_terminal_never_stacks_entries() {
        for rows in 0..8 {
            let vp = Viewport::new(rows, 80);
            let placed = layout_entries(&[], &files(6), vp, 0, 0, 0);
            assert_eq!(placed[0].band, 0, "first entry left band 0 with {} rows", rows);
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    assert!(
                        (a.row, a.column) != (b.row, b.column),
                        "overlap at {:?} with {} rows",
                        a,
                        rows
                    );
                }
            }
        }
    }

    #[test]
    fn accumulator_is_shared_between_groups() {
        let vp = Viewport::new(8, 80);
        let mut acc = LayoutAccumulator::new();
        let folders = files(5);
        acc.place_group(&folders, 0, 0, vp);
        assert_eq!(acc.band(), 1);
        let before = acc.column_left();
        let placed = acc.place_group(&files(1), folders.len(), 0, vp);
        assert_eq!(placed[0].band, 1);
        assert_eq!(placed[0].column, 1 + before);
    }
}
