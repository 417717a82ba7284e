use crate::Coord;

/// One row, column or diagonal of the board, as a list of cell positions.
pub type WinningCombo = Vec<Coord>;

/// Returns every line that wins the game when filled with a single label.
///
/// The order is fixed: all rows from top to bottom, then all columns from
/// left to right, then the diagonal starting at `(0, 0)`, then the one
/// starting at `(0, size - 1)`. There are always `2 * size + 2` of them.
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let mut combos = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        combos.push((0..size).map(|col| Coord { row, col }).collect());
    }
    for col in 0..size {
        combos.push((0..size).map(|row| Coord { row, col }).collect());
    }
    combos.push((0..size).map(|i| Coord { row: i, col: i }).collect());
    combos.push(
        (0..size)
            .map(|i| Coord {
                row: i,
                col: size - 1 - i,
            })
            .collect(),
    );
    combos
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn coords(pairs: &[(usize, usize)]) -> WinningCombo {
        pairs.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn three_by_three_table() {
        let combos = winning_combos(3);
        assert_eq!(
            combos,
            vec![
                coords(&[(0, 0), (0, 1), (0, 2)]),
                coords(&[(1, 0), (1, 1), (1, 2)]),
                coords(&[(2, 0), (2, 1), (2, 2)]),
                coords(&[(0, 0), (1, 0), (2, 0)]),
                coords(&[(0, 1), (1, 1), (2, 1)]),
                coords(&[(0, 2), (1, 2), (2, 2)]),
                coords(&[(0, 0), (1, 1), (2, 2)]),
                coords(&[(0, 2), (1, 1), (2, 0)]),
            ]
        );
    }

    #[test]
    fn single_cell_board() {
        let combos = winning_combos(1);
        assert_eq!(combos.len(), 4);
        assert!(combos.iter().all(|c| c == &coords(&[(0, 0)])));
    }

    quickcheck! {
        fn combo_count_and_length(size: u8) -> bool {
            let size = (size % 12) as usize + 1;
            let combos = winning_combos(size);
            combos.len() == 2 * size + 2
                && combos.iter().all(|combo| combo.len() == size)
                && combos.iter().flatten().all(|c| c.row < size && c.col < size)
        }
    }
}
