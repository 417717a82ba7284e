use quickcheck::{Arbitrary, Gen};

/// A board size together with a sequence of positions to try to play.
///
/// Positions may lie just outside the board, so that rejected moves are
/// exercised as well.
#[derive(Clone, Debug)]
pub struct Playout {
    pub board_size: usize,
    pub moves: Vec<(i64, i64)>,
}

impl Arbitrary for Playout {
    fn arbitrary(g: &mut Gen) -> Self {
        let board_size = (u8::arbitrary(g) % 5) as usize + 1;
        // From -1 to board_size, inclusive
        let span = board_size as u8 + 2;
        let num_moves = usize::arbitrary(g) % (board_size * board_size * 2 + 1);
        let moves = (0..num_moves)
            .map(|_| {
                let row = (u8::arbitrary(g) % span) as i64 - 1;
                let col = (u8::arbitrary(g) % span) as i64 - 1;
                (row, col)
            })
            .collect();
        Playout { board_size, moves }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let board_size = self.board_size;
        Box::new(
            self.moves
                .shrink()
                .map(move |moves| Playout { board_size, moves }),
        )
    }
}
