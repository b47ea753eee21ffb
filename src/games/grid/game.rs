//! Pellet maze implementation.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Direction;
use crate::rules::Rules;

/// Points for eating a pellet.
pub const PELLET_SCORE: i64 = 10;
/// Points for clearing the maze.
pub const WIN_SCORE: i64 = 500;
/// Points for being caught.
pub const LOSE_SCORE: i64 = -500;
/// Points for every move made.
pub const TIME_PENALTY: i64 = 1;

/// Grid cell position. Row 0 is the top line of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `dir` (self for `Stop`).
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Manhattan distance.
    #[must_use]
    pub const fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Dynamic part of the maze.
///
/// Cloning is cheap: pellets live in a persistent set and there are only a
/// handful of ghosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// Controlled actor's cell.
    pub player: Pos,

    /// Ghost cells, in layout reading order.
    pub ghosts: SmallVec<[Pos; 4]>,

    /// Cells still holding a pellet.
    pub pellets: OrdSet<Pos>,

    /// Running score.
    pub score: i64,

    /// Moves made so far.
    pub turn: u32,

    /// Whether a ghost caught the player.
    pub caught: bool,
}

impl GridState {
    /// Pellets left to eat.
    #[must_use]
    pub fn pellets_left(&self) -> usize {
        self.pellets.len()
    }

    /// Distance from the player to the closest pellet.
    #[must_use]
    pub fn nearest_pellet_distance(&self) -> Option<u32> {
        self.pellets.iter().map(|&p| self.player.manhattan(p)).min()
    }

    /// Distance from the player to the closest ghost.
    #[must_use]
    pub fn nearest_ghost_distance(&self) -> Option<u32> {
        self.ghosts.iter().map(|&g| self.player.manhattan(g)).min()
    }

    fn collides(&self) -> bool {
        self.ghosts.contains(&self.player)
    }
}

/// Static part of the maze: dimensions and walls.
///
/// One turn is the player's move followed by every ghost's move. Ghosts
/// chase greedily: each steps to the open neighbour closest (Manhattan) to
/// the player, ties broken in `Direction` order, and never stands still
/// while it has an open neighbour.
#[derive(Clone, Debug)]
pub struct GridGame {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl GridGame {
    pub(crate) fn from_walls(width: i32, height: i32, walls: Vec<bool>) -> Self {
        debug_assert_eq!(walls.len(), (width * height) as usize);
        Self {
            width,
            height,
            walls,
        }
    }

    /// Maze width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Maze height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a cell is blocked. Cells outside the maze count as walls.
    #[must_use]
    pub fn is_wall(&self, pos: Pos) -> bool {
        if pos.row < 0 || pos.col < 0 || pos.row >= self.height || pos.col >= self.width {
            return true;
        }
        self.walls[(pos.row * self.width + pos.col) as usize]
    }

    /// Open cardinal neighbours of `pos`, in `Direction` order.
    pub fn open_moves(&self, pos: Pos) -> impl Iterator<Item = Direction> + '_ {
        Direction::CARDINAL
            .into_iter()
            .filter(move |&dir| !self.is_wall(pos.step(dir)))
    }

    fn chase(&self, ghost: Pos, target: Pos) -> Pos {
        self.open_moves(ghost)
            .map(|dir| ghost.step(dir))
            .min_by_key(|next| next.manhattan(target))
            .unwrap_or(ghost)
    }
}

impl Rules for GridGame {
    type State = GridState;
    type Action = Direction;

    /// Open moves followed by `Stop`; empty once the game is over.
    fn legal_actions(&self, state: &GridState) -> Vec<Direction> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        let mut actions: Vec<Direction> = self.open_moves(state.player).collect();
        actions.push(Direction::Stop);
        actions
    }

    fn apply(&self, state: &GridState, action: &Direction) -> GridState {
        let mut next = state.clone();
        if self.is_terminal(state) {
            return next;
        }

        next.turn += 1;
        next.score -= TIME_PENALTY;

        let target = state.player.step(*action);
        if !self.is_wall(target) {
            next.player = target;
        }

        if next.collides() {
            next.caught = true;
            next.score += LOSE_SCORE;
            return next;
        }

        if next.pellets.remove(&next.player).is_some() {
            next.score += PELLET_SCORE;
            if next.pellets.is_empty() {
                next.score += WIN_SCORE;
                return next;
            }
        }

        let player = next.player;
        for ghost in next.ghosts.iter_mut() {
            *ghost = self.chase(*ghost, player);
        }

        if next.collides() {
            next.caught = true;
            next.score += LOSE_SCORE;
        }

        next
    }

    fn is_win(&self, state: &GridState) -> bool {
        !state.caught && state.pellets.is_empty()
    }

    fn is_lose(&self, state: &GridState) -> bool {
        state.caught
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(layout: &str) -> (GridGame, GridState) {
        GridGame::parse(layout).unwrap()
    }

    #[test]
    fn test_pos_helpers() {
        let p = Pos::new(2, 3);
        assert_eq!(p.step(Direction::North), Pos::new(1, 3));
        assert_eq!(p.step(Direction::Stop), p);
        assert_eq!(p.manhattan(Pos::new(0, 0)), 5);
    }

    #[test]
    fn test_legal_actions_skip_walls() {
        let (game, state) = parse("%%%%\n%P.%\n%%%%");
        assert_eq!(game.legal_actions(&state), vec![Direction::East, Direction::Stop]);
    }

    #[test]
    fn test_eating_last_pellet_wins() {
        let (game, state) = parse("%%%%\n%P.%\n%%%%");
        let next = game.apply(&state, &Direction::East);

        assert!(game.is_win(&next));
        assert!(!game.is_lose(&next));
        assert_eq!(next.score, -TIME_PENALTY + PELLET_SCORE + WIN_SCORE);
        assert!(game.legal_actions(&next).is_empty());
    }

    #[test]
    fn test_walking_into_ghost_loses() {
        let (game, state) = parse("%%%%%\n%PG.%\n%%%%%");
        let next = game.apply(&state, &Direction::East);

        assert!(game.is_lose(&next));
        assert!(!game.is_win(&next));
        // Ghost did not get to move
        assert_eq!(next.ghosts[0], Pos::new(1, 2));
    }

    #[test]
    fn test_ghost_chases_player() {
        let (game, state) = parse("%%%%%%%\n%P...G%\n%%%%%%%");
        let next = game.apply(&state, &Direction::Stop);

        assert_eq!(next.ghosts[0], Pos::new(1, 4));
        assert!(!game.is_terminal(&next));

        let next = game.apply(&next, &Direction::Stop);
        let next = game.apply(&next, &Direction::Stop);
        assert_eq!(next.ghosts[0], Pos::new(1, 2));
        assert!(!game.is_lose(&next));

        let next = game.apply(&next, &Direction::Stop);
        assert!(game.is_lose(&next));
    }

    #[test]
    fn test_terminal_state_is_fixed_point() {
        let (game, state) = parse("%%%%\n%P.%\n%%%%");
        let won = game.apply(&state, &Direction::East);
        let again = game.apply(&won, &Direction::West);
        assert_eq!(won, again);
    }

    #[test]
    fn test_state_clone_is_independent() {
        let (game, state) = parse("%%%%%\n%P..%\n%%%%%");
        let next = game.apply(&state, &Direction::East);

        assert_eq!(state.pellets_left(), 2);
        assert_eq!(next.pellets_left(), 1);
        assert_eq!(next.nearest_pellet_distance(), Some(1));
        assert_eq!(state.nearest_ghost_distance(), None);
    }
}
