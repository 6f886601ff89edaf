//! The shared rotation geometry for last-layer patterns.
//!
//! Both pattern kinds live on fixed square grids: the OLL top bitmap on a
//! 3x3 block and the 12-slot ring on the border of a 5x5 layout (three
//! cells across the top, three down each side, three across the bottom).
//! A quarter turn of the cube about its vertical axis is then one matrix
//! rotation, shared by every pattern kind, so the top block and the ring
//! always rotate together.

/// Grid cells of the 12 ring slots on the 5x5 layout, in slot order.
const RING_CELLS: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 0),
    (2, 0),
    (3, 0),
    (1, 4),
    (2, 4),
    (3, 4),
    (4, 1),
    (4, 2),
    (4, 3),
];

/// Rotate a square grid one quarter turn clockwise.
pub fn rotate_cw<T: Copy, const N: usize>(grid: [[T; N]; N]) -> [[T; N]; N] {
    std::array::from_fn(|r| std::array::from_fn(|c| grid[N - 1 - c][r]))
}

/// Rotate the 12-slot ring the given number of quarter turns clockwise by
/// placing it on the 5x5 grid, rotating, and reading the slots back off.
pub fn rotate_ring<T: Copy>(ring: [T; 12], turns: u8) -> [T; 12] {
    let mut grid: [[Option<T>; 5]; 5] = [[None; 5]; 5];
    for (slot, &(r, c)) in RING_CELLS.iter().enumerate() {
        grid[r][c] = Some(ring[slot]);
    }
    for _ in 0..turns % 4 {
        grid = rotate_cw(grid);
    }
    RING_CELLS.map(|(r, c)| grid[r][c].expect("ring cells map onto ring cells"))
}

/// Rotate the 8-bit OLL top bitmap (center omitted, always lit) on its own
/// 3x3 block.
pub fn rotate_top(top: [bool; 8], turns: u8) -> [bool; 8] {
    let mut grid = [
        [top[0], top[1], top[2]],
        [top[3], true, top[4]],
        [top[5], top[6], top[7]],
    ];
    for _ in 0..turns % 4 {
        grid = rotate_cw(grid);
    }
    [
        grid[0][0], grid[0][1], grid[0][2], grid[1][0], grid[1][2], grid[2][0], grid[2][1],
        grid[2][2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_quarter_turns_are_identity() {
        let grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let once = rotate_cw(grid);
        assert_eq!(once, [[7, 4, 1], [8, 5, 2], [9, 6, 3]]);
        let back = rotate_cw(rotate_cw(rotate_cw(once)));
        assert_eq!(back, grid);
    }

    #[test]
    fn ring_slots_travel_a_quarter_of_the_border() {
        let mut ring = [0u8; 12];
        ring[0] = 1;
        let rotated = rotate_ring(ring, 1);
        let mut expected = [0u8; 12];
        expected[6] = 1;
        assert_eq!(rotated, expected);
        assert_eq!(rotate_ring(ring, 4), ring);
    }

    #[test]
    fn top_corner_travels_around_the_block() {
        let mut top = [false; 8];
        top[0] = true;
        let rotated = rotate_top(top, 1);
        let mut expected = [false; 8];
        expected[2] = true;
        assert_eq!(rotated, expected);
        assert_eq!(rotate_top(top, 4), top);
    }
}
