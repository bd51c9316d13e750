use crate::grid::{GridCell, GRID_WIDTH};

/// Width and height of a single grid cell
pub const CELL_SIZE: u32 = 50;

pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_WIDTH as u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    pub fn from_grid_index(index: usize) -> Self {
        let column = (index % GRID_WIDTH) as u32;
        let row = u32::try_from(index / GRID_WIDTH).unwrap_or(u32::MAX);
        let top_left = Point {
            x: column * CELL_SIZE,
            y: row.saturating_mul(CELL_SIZE),
        };
        let bottom_right = Point {
            x: top_left.x + CELL_SIZE,
            y: top_left.y.saturating_add(CELL_SIZE),
        };
        Self { top_left, bottom_right }
    }

    /// Top-left corner is inclusive, bottom-right is exclusive
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.top_left.x && x < self.bottom_right.x &&
            y >= self.top_left.y && y < self.bottom_right.y
    }
}

pub fn map_to_pixels(cells: &[GridCell]) -> Vec<Rectangle> {
    cells.iter()
        .map(|cell| Rectangle::from_grid_index(cell.index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_grid_index() {
        let rectangle = Rectangle::from_grid_index(0);
        assert_eq!(rectangle.top_left, Point { x: 0, y: 0 });
        assert_eq!(rectangle.bottom_right, Point { x: 50, y: 50 });

        let rectangle = Rectangle::from_grid_index(7);
        assert_eq!(rectangle.top_left, Point { x: 100, y: 50 });
        assert_eq!(rectangle.bottom_right, Point { x: 150, y: 100 });

        let rectangle = Rectangle::from_grid_index(19);
        assert_eq!(rectangle.top_left, Point { x: 200, y: 150 });
        assert_eq!(rectangle.bottom_right, Point { x: 250, y: 200 });
    }

    #[test]
    fn test_rectangle_outside_canvas() {
        let rectangle = Rectangle::from_grid_index(27);
        assert_eq!(rectangle.top_left, Point { x: 100, y: 250 });
        assert!(rectangle.top_left.y >= CANVAS_SIZE);
    }

    #[test]
    fn test_rectangle_contains() {
        let rectangle = Rectangle::from_grid_index(6);
        assert!(rectangle.contains(50, 50));
        assert!(rectangle.contains(99, 99));
        assert!(!rectangle.contains(100, 50));
        assert!(!rectangle.contains(50, 100));
        assert!(!rectangle.contains(49, 50));
    }

    #[test]
    fn test_map_to_pixels() {
        let cells = [
            GridCell { value: 4, index: 2 },
            GridCell { value: 0, index: 5 },
            GridCell { value: 8, index: 13 },
        ];
        let rectangles = map_to_pixels(&cells);
        let corners: Vec<_> = rectangles.iter()
            .map(|rectangle| (rectangle.top_left.x, rectangle.top_left.y))
            .collect();
        assert_eq!(corners, vec![(100, 0), (0, 50), (150, 100)]);
        for rectangle in rectangles {
            assert!(rectangle.top_left.x < CANVAS_SIZE);
            assert_eq!(rectangle.bottom_right.x - rectangle.top_left.x, CELL_SIZE);
            assert_eq!(rectangle.bottom_right.y - rectangle.top_left.y, CELL_SIZE);
        };
    }

    #[test]
    fn test_map_to_pixels_empty() {
        assert!(map_to_pixels(&[]).is_empty());
    }
}
