/// Single coordinate axis, used both for positions and for the board edge length.
pub type Coord = u8;

/// Count type for mines and cells. Fits `Coord::MAX²`.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, indexing the grid as `grid[[x, y]]`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with the given edge.
pub const fn area(dimensions: Coord) -> CellCount {
    let d = dimensions as CellCount;
    d.saturating_mul(d)
}

pub const fn in_bounds((x, y): Coord2, dimensions: Coord) -> bool {
    x < dimensions && y < dimensions
}

/// Whether `other` is `center` itself or one of its eight neighbours.
pub fn is_within_one(center: Coord2, other: Coord2) -> bool {
    center.0.abs_diff(other.0) <= 1 && center.1.abs_diff(other.1) <= 1
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shifts `coords` by `offset`, or `None` when that leaves the board.
fn offset_within((x, y): Coord2, (dx, dy): (i8, i8), dimensions: Coord) -> Option<Coord2> {
    let next = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
    in_bounds(next, dimensions).then_some(next)
}

/// In-bounds neighbours of a cell, clipped at the board edges.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    dimensions: Coord,
    offset: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, dimensions: Coord) -> Self {
        Self {
            center,
            dimensions,
            offset: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = NEIGHBOR_OFFSETS.get(self.offset) {
            self.offset += 1;
            if let Some(next) = offset_within(self.center, delta, self.dimensions) {
                return Some(next);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = Neighbors::new((0, 0), 5).collect();

        assert_eq!(found, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors_in_template_order() {
        let found: Vec<_> = Neighbors::new((2, 2), 5).collect();

        assert_eq!(
            found,
            [
                (1, 1),
                (2, 1),
                (3, 1),
                (1, 2),
                (3, 2),
                (1, 3),
                (2, 3),
                (3, 3)
            ]
        );
    }

    #[test]
    fn far_edge_is_clipped() {
        assert_eq!(Neighbors::new((4, 2), 5).count(), 5);
        assert_eq!(Neighbors::new((4, 4), 5).count(), 3);
        assert_eq!(Neighbors::new((0, 0), 1).count(), 0);
    }

    #[test]
    fn within_one_covers_center_and_ring() {
        assert!(is_within_one((3, 3), (3, 3)));
        assert!(is_within_one((3, 3), (2, 4)));
        assert!(!is_within_one((3, 3), (5, 3)));
        assert!(!is_within_one((0, 0), (0, 2)));
    }

    #[test]
    fn area_saturates_at_max_edge() {
        assert_eq!(area(5), 25);
        assert_eq!(area(Coord::MAX), 65025);
    }
}
