//! Arena rules: movement, turning, collisions, restarts and drawing.
//!
//! Everything here is deterministic. Tangle replays inputs on every peer
//! and expects each one to reach the same arena, so no clocks, no
//! randomness and no host reads happen in this module.

use crate::canvas::HostImports;
use crate::geometry::{Vec2, segments_intersect};

pub const ARENA_SIZE: f32 = 256.0;
pub const PLAYER_COUNT: usize = 4;

/// Fixed steps to wait after the round is decided before resetting.
pub const RESTART_DELAY: u32 = 130;

const HEAD_RADIUS: f32 = 2.0;
const THIRD: f32 = (256 / 3) as f32;

const STARTING_POSITIONS: [Vec2; PLAYER_COUNT] = [
    Vec2::new(THIRD, THIRD * 2.0),
    Vec2::new(THIRD * 2.0, THIRD * 2.0),
    Vec2::new(THIRD - 30.0, THIRD),
    Vec2::new(THIRD * 2.0 + 30.0, THIRD),
];

const STARTING_DIRECTIONS: [Direction; PLAYER_COUNT] =
    [Direction::Up, Direction::Up, Direction::Down, Direction::Down];

const PLAYER_COLORS: [[f32; 4]; PLAYER_COUNT] = [
    [255.0, 0.0, 0.0, 255.0],
    [0.0, 255.0, 0.0, 255.0],
    [0.0, 0.0, 255.0, 255.0],
    [255.0, 0.0, 255.0, 255.0],
];

/// Heading of a trail. Ordered clockwise in screen space (y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    fn step(self, pos: Vec2) -> Vec2 {
        match self {
            Direction::Right => Vec2::new(pos.x + 1.0, pos.y),
            Direction::Down => Vec2::new(pos.x, pos.y + 1.0),
            Direction::Left => Vec2::new(pos.x - 1.0, pos.y),
            Direction::Up => Vec2::new(pos.x, pos.y - 1.0),
        }
    }
}

/// One light cycle. `waypoints` holds the fixed corners followed by the
/// moving head, so a fresh player has two identical points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub waypoints: Vec<Vec2>,
    pub dir: Direction,
    pub dead: bool,
}

impl Player {
    fn spawn(index: usize) -> Self {
        let start = STARTING_POSITIONS[index];
        Self {
            waypoints: vec![start, start],
            dir: STARTING_DIRECTIONS[index],
            dead: false,
        }
    }

    pub fn head(&self) -> Vec2 {
        self.waypoints.last().copied().unwrap_or_default()
    }

    /// Trail segments in order, the last one ending at the head.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.waypoints.windows(2).map(|w| (w[0], w[1]))
    }

    fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
}

/// Complete simulation state shared by every peer.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub players: [Player; PLAYER_COUNT],
    pub restart_timer: u32,
    /// Joins seen so far. Survives resets so indices stay unique per session.
    pub connected_players: u32,
}

impl Default for Arena {
    fn default() -> Self {
        let mut arena = Self {
            players: Default::default(),
            restart_timer: 0,
            connected_players: 0,
        };
        arena.reset();
        arena
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every player back on its starting spot.
    pub fn reset(&mut self) {
        self.restart_timer = 0;
        for (i, player) in self.players.iter_mut().enumerate() {
            *player = Player::spawn(i);
        }
    }

    /// Hand the joining peer the next free player index.
    pub fn player_joined(&mut self, host: &mut impl HostImports) {
        host.set_player_index(self.connected_players);
        self.connected_players += 1;
    }

    /// Advance one fixed step.
    pub fn fixed_update(&mut self) {
        let mut alive = 0;

        for i in 0..PLAYER_COUNT {
            if self.players[i].dead {
                continue;
            }
            alive += 1;

            let player = &mut self.players[i];
            let next = player.dir.step(player.head());
            if let Some(head) = player.waypoints.last_mut() {
                *head = next;
            }

            if self.collides(i) {
                self.players[i].dead = true;
            }
        }

        if alive <= 1 {
            self.restart_timer += 1;
            if self.restart_timer > RESTART_DELAY {
                self.reset();
            }
        }
    }

    /// Freeze the current head as a corner and rotate the heading.
    /// Unknown player indices are ignored.
    pub fn turn(&mut self, turn_right: bool, player_index: u32) {
        let Some(player) = self.players.get_mut(player_index as usize) else {
            return;
        };
        let head = player.head();
        player.waypoints.push(head);
        player.dir = if turn_right {
            player.dir.clockwise()
        } else {
            player.dir.counter_clockwise()
        };
    }

    /// Draw every living player. Reads the arena only.
    pub fn draw(&self, host: &mut impl HostImports) {
        for (i, player) in self.players.iter().enumerate() {
            if player.dead {
                continue;
            }
            let [r, g, b, a] = PLAYER_COLORS[i];
            host.set_color(r, g, b, a);

            let head = player.head();
            host.draw_circle(head.x, head.y, HEAD_RADIUS);
            for (from, to) in player.segments() {
                host.draw_line(from.x, from.y, to.x, to.y);
            }
        }
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| !p.dead).count()
    }

    /// Whether player `index`'s head segment hits a wall or any living trail.
    fn collides(&self, index: usize) -> bool {
        let player = &self.players[index];
        let (Some(&a2), Some(&a1)) = (
            player.waypoints.last(),
            player.waypoints.iter().rev().nth(1),
        ) else {
            return false;
        };

        if a2.x < 0.0 || a2.x > ARENA_SIZE || a2.y < 0.0 || a2.y > ARENA_SIZE {
            return true;
        }

        self.players.iter().enumerate().any(|(other_index, other)| {
            if other.dead {
                return false;
            }
            // Our own head segment and the corner touching it always meet us.
            let checked = if other_index == index {
                other.segment_count().saturating_sub(2)
            } else {
                other.segment_count()
            };
            other
                .segments()
                .take(checked)
                .any(|(b1, b2)| segments_intersect(a1, a2, b1, b2))
        })
    }
}
