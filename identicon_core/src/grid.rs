pub const GRID_WIDTH: usize = 5;

const CHUNK_SIZE: usize = 3;

/// Grid of digest bytes, 5 cells per row.
/// Each row is a palindrome built from three consecutive digest bytes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid(Vec<u8>);

impl Grid {
    pub fn cells(&self) -> &[u8] {
        &self.0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks_exact(GRID_WIDTH)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Grid cell retained after filtering.
/// `index` is the position in the original grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub value: u8,
    pub index: usize,
}

/// Expands digest into mirrored rows: `[a, b, c]` becomes `[a, b, c, b, a]`.
///
/// A chunk is used only if at least one digest byte follows it.
/// For a 16-byte digest that gives chunks at 0, 3, 6, 9 and 12 (5 rows),
/// while a 15-byte input would lose its last full chunk.
pub fn build_grid(digest: &[u8]) -> Grid {
    let mut cells = Vec::with_capacity(digest.len() / CHUNK_SIZE * GRID_WIDTH);
    let mut start = 0;
    while start + CHUNK_SIZE < digest.len() {
        let (first, second, third) =
            (digest[start], digest[start + 1], digest[start + 2]);
        cells.extend_from_slice(&[first, second, third, second, first]);
        start += CHUNK_SIZE;
    };
    Grid(cells)
}

/// Returns cells with even values, in grid order
pub fn filter_even(grid: &Grid) -> Vec<GridCell> {
    grid.cells().iter()
        .enumerate()
        .filter(|(_, value)| *value % 2 == 0)
        .map(|(index, value)| GridCell { value: *value, index })
        .collect()
}
