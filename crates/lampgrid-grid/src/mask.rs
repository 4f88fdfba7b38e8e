use crate::{Cell, Grid};

/// Dense bit-set over the integer points `[0, max_x] x [0, max_y]`.
/// Points outside the domain are never members and are dropped on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointMask {
    sx: usize,
    sy: usize,
    words: Vec<u64>,
}

impl PointMask {
    pub fn new(max_x: usize, max_y: usize) -> Self {
        let sx = max_x + 1;
        let sy = max_y + 1;
        Self {
            sx,
            sy,
            words: vec![0; (sx * sy).div_ceil(64)],
        }
    }

    /// Empty mask spanning the whole grid extent, edges included.
    pub fn for_grid(grid: &Grid) -> Self {
        let (mx, my) = grid.extent().max.lattice();
        Self::new(mx.max(0) as usize, my.max(0) as usize)
    }

    #[inline]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.sx || y >= self.sy {
            return None;
        }
        Some(y * self.sx + x)
    }

    #[inline]
    pub fn insert(&mut self, x: i64, y: i64) {
        if let Some(i) = self.idx(x, y) {
            self.words[i >> 6] |= 1u64 << (i & 63);
        }
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        match self.idx(x, y) {
            Some(i) => (self.words[i >> 6] >> (i & 63)) & 1 == 1,
            None => false,
        }
    }

    /// Every integer point of the cell square, both edges inclusive.
    pub fn insert_cell(&mut self, cell: &Cell) {
        let r = cell.rect();
        let (x0, y0) = r.min.lattice();
        let (x1, y1) = r.max.lattice();
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.insert(x, y);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }
}
