/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// In-bounds Chebyshev (king-move) neighborhood of `center`, excluding the
/// center itself. Corner cells yield 3 neighbors, edge cells 5, interior
/// cells all 8.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (cx, cy) = center;
    let x_hi = cx.saturating_add(1).min(bounds.0.saturating_sub(1));
    let y_hi = cy.saturating_add(1).min(bounds.1.saturating_sub(1));

    (cx.saturating_sub(1)..=x_hi)
        .flat_map(move |x| (cy.saturating_sub(1)..=y_hi).map(move |y| (x, y)))
        .filter(move |&pos| pos != center)
}
