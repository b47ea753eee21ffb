//! ASCII layout parsing.
//!
//! | Tile | Meaning |
//! |---|---|
//! | `%` | wall |
//! | `.` | floor with a pellet |
//! | `P` | player start (exactly one) |
//! | `G` | ghost start |
//! | ` ` | empty floor |
//!
//! Rows must all have the same width. Leading and trailing blank lines are
//! ignored.

use im::OrdSet;
use smallvec::SmallVec;

use super::game::{GridGame, GridState, Pos};

/// Layout parsing failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows at all.
    #[error("layout is empty")]
    Empty,

    /// A row's width differs from the first row's.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the tile set.
    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, tile: char },

    /// No `P` tile.
    #[error("layout has no player start")]
    MissingPlayer,

    /// More than one `P` tile.
    #[error("layout has more than one player start (second at row {row}, column {col})")]
    DuplicatePlayer { row: usize, col: usize },
}

impl GridGame {
    /// Parse a layout into the static maze and its initial state.
    pub fn parse(layout: &str) -> Result<(GridGame, GridState), LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .trim_matches('\n')
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();

        let width = rows.first().map(Vec::len).filter(|&w| w > 0).ok_or(LayoutError::Empty)?;

        let mut walls = Vec::with_capacity(width * rows.len());
        let mut player = None;
        let mut ghosts = SmallVec::new();
        let mut pellets = OrdSet::new();

        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            for (col, &tile) in tiles.iter().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                walls.push(tile == '%');
                match tile {
                    '%' | ' ' => {}
                    '.' => {
                        pellets.insert(pos);
                    }
                    'G' => ghosts.push(pos),
                    'P' => {
                        if player.replace(pos).is_some() {
                            return Err(LayoutError::DuplicatePlayer { row, col });
                        }
                    }
                    _ => return Err(LayoutError::UnknownTile { row, col, tile }),
                }
            }
        }

        let player = player.ok_or(LayoutError::MissingPlayer)?;
        let game = GridGame::from_walls(width as i32, rows.len() as i32, walls);
        let state = GridState {
            player,
            ghosts,
            pellets,
            score: 0,
            turn: 0,
            caught: false,
        };

        Ok((game, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let (game, state) = GridGame::parse("\n%%%%%\n%P.G%\n%. .%\n%%%%%\n").unwrap();

        assert_eq!(game.width(), 5);
        assert_eq!(game.height(), 4);
        assert!(game.is_wall(Pos::new(0, 0)));
        assert!(!game.is_wall(Pos::new(2, 2)));
        assert!(game.is_wall(Pos::new(-1, 2)));
        assert!(game.is_wall(Pos::new(1, 5)));

        assert_eq!(state.player, Pos::new(1, 1));
        assert_eq!(state.ghosts.as_slice(), &[Pos::new(1, 3)]);
        assert_eq!(state.pellets_left(), 3);
        assert!(state.pellets.contains(&Pos::new(2, 3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(GridGame::parse("").unwrap_err(), LayoutError::Empty);
        assert_eq!(GridGame::parse("%%%\n%.%\n%%%").unwrap_err(), LayoutError::MissingPlayer);
        assert_eq!(
            GridGame::parse("%%%\n%P%%\n%%%").unwrap_err(),
            LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 4
            }
        );
        assert_eq!(
            GridGame::parse("%x%").unwrap_err(),
            LayoutError::UnknownTile {
                row: 0,
                col: 1,
                tile: 'x'
            }
        );
        assert_eq!(
            GridGame::parse("PP").unwrap_err(),
            LayoutError::DuplicatePlayer { row: 0, col: 1 }
        );
    }

    #[test]
    fn test_error_display() {
        let err = LayoutError::UnknownTile {
            row: 2,
            col: 4,
            tile: '#',
        };
        assert_eq!(err.to_string(), "unknown tile '#' at row 2, column 4");
    }
}
