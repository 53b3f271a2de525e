//! Booklet page planning
//!
//! Maps a linear run of source pages onto folded sheets. Sheet `k` pairs the
//! forward position `2k` with the backward position `P - 1 - 2k`, where `P` is
//! the padded page count, so that the stacked and folded sheets read in order.
//!
//! ```text
//! 4 pages, P = 4:
//!
//! Sheet 0 (reverse):     Sheet 1 (averse):
//! ┌────────┬────────┐    ┌────────┬────────┐
//! │   4    │   1    │    │   2    │   3    │
//! └────────┴────────┘    └────────┴────────┘
//! ```

use crate::constants::PAGES_PER_FOLD;

/// Physical side of the printed sheet a planned sheet belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetSide {
    /// Front side; forward index not a multiple of four
    Averse,
    /// Back side; forward index a multiple of four, outermost sheet first
    Reverse,
}

impl SheetSide {
    /// Order of the split parts: `_part1` carries the reverse sheets and is
    /// printed first, `_part2` carries the averse sheets.
    pub const SPLIT_ORDER: [SheetSide; 2] = [SheetSide::Reverse, SheetSide::Averse];
}

/// Which half of a landscape sheet a page lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    Left,
    Right,
}

/// One output sheet: up to two source pages and the side it prints on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRecord {
    /// Position in the stacking order (0-based)
    pub index: usize,
    /// 1-based source page for the left half
    pub left_page: Option<usize>,
    /// 1-based source page for the right half
    pub right_page: Option<usize>,
    pub side: SheetSide,
}

impl SheetRecord {
    pub fn is_averse(&self) -> bool {
        self.side == SheetSide::Averse
    }

    /// Present pages with the half they go to, left first
    pub fn placements(&self) -> impl Iterator<Item = (usize, Half)> + '_ {
        self.left_page
            .map(|page| (page, Half::Left))
            .into_iter()
            .chain(self.right_page.map(|page| (page, Half::Right)))
    }

    pub fn is_blank(&self) -> bool {
        self.left_page.is_none() && self.right_page.is_none()
    }
}

/// Ordered sheet plan for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    source_pages: usize,
    padded_pages: usize,
    sheets: Vec<SheetRecord>,
}

impl SheetPlan {
    /// Number of pages in the source document
    pub fn source_pages(&self) -> usize {
        self.source_pages
    }

    /// Page count the pairing runs over
    pub fn padded_pages(&self) -> usize {
        self.padded_pages
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheets(&self) -> &[SheetRecord] {
        &self.sheets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SheetRecord> {
        self.sheets.iter()
    }

    /// Sheets of one side, in stacking order
    pub fn side(&self, side: SheetSide) -> impl Iterator<Item = &SheetRecord> + '_ {
        self.sheets.iter().filter(move |sheet| sheet.side == side)
    }

    pub fn averse(&self) -> impl Iterator<Item = &SheetRecord> + '_ {
        self.side(SheetSide::Averse)
    }

    pub fn reverse(&self) -> impl Iterator<Item = &SheetRecord> + '_ {
        self.side(SheetSide::Reverse)
    }
}

impl<'a> IntoIterator for &'a SheetPlan {
    type Item = &'a SheetRecord;
    type IntoIter = std::slice::Iter<'a, SheetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

/// Padded page count used for pairing: `n + n % 4`.
///
/// This is not a round-up to the next multiple of four (5 pads to 6,
/// 6 to 8, 7 to 10). The side classification in [`plan`] is tied to it.
pub fn padded_page_count(source_pages: usize) -> usize {
    source_pages + source_pages % PAGES_PER_FOLD
}

/// Plan the sheets for a document of `source_pages` pages.
pub fn plan(source_pages: usize) -> SheetPlan {
    let padded = padded_page_count(source_pages);
    let mut sheets = Vec::with_capacity(padded / 2);

    // Backward index may step below zero before the forward one reaches the end
    let mut idx: usize = 0;
    let mut idx_rev: isize = padded as isize - 1;

    while idx < padded || idx_rev >= 0 {
        let side = if idx % PAGES_PER_FOLD == 0 {
            SheetSide::Reverse
        } else {
            SheetSide::Averse
        };

        let right_page = (idx < source_pages && idx_rev > 0).then_some(idx + 1);
        let left_page =
            (idx_rev > 0 && (idx_rev as usize) < source_pages).then(|| idx_rev as usize + 1);

        sheets.push(SheetRecord {
            index: idx / 2,
            left_page,
            right_page,
            side,
        });

        idx += 2;
        idx_rev -= 2;
    }

    log::debug!(
        "Planned {} sheets for {} pages (padded to {})",
        sheets.len(),
        source_pages,
        padded
    );

    SheetPlan {
        source_pages,
        padded_pages: padded,
        sheets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_formula() {
        assert_eq!(padded_page_count(0), 0);
        assert_eq!(padded_page_count(1), 2);
        assert_eq!(padded_page_count(4), 4);
        assert_eq!(padded_page_count(5), 6);
        assert_eq!(padded_page_count(6), 8);
        assert_eq!(padded_page_count(7), 10);
    }

    #[test]
    fn test_first_part_holds_outer_sheet() {
        let first = SheetSide::SPLIT_ORDER[0];
        let outer = plan(4).sheets()[0];
        assert_eq!(outer.side, first);
        assert_eq!((outer.left_page, outer.right_page), (Some(4), Some(1)));
    }

    #[test]
    fn test_placements_left_first() {
        let record = SheetRecord {
            index: 0,
            left_page: Some(4),
            right_page: Some(1),
            side: SheetSide::Reverse,
        };
        let placements: Vec<_> = record.placements().collect();
        assert_eq!(placements, vec![(4, Half::Left), (1, Half::Right)]);
        assert!(!record.is_blank());
        assert!(!record.is_averse());
    }
}
