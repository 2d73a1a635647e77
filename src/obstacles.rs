//! The registry of live space garbage.
//!
//! Every obstacle is created by its fall task, which keeps the returned
//! `ObstacleId` and is the only code allowed to remove it again.  Shots
//! only flip the `destroyed` flag; the fall task notices on its next
//! resumption and removes the entry.

use log::debug;

use crate::collision::{has_collision, Rect};

/// Cells trimmed from every side of a garbage frame to get its hitbox.
/// Small frames end up with a negative extent and never collide.
pub const HITBOX_MARGIN: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Hitbox top-left corner.
    pub row: f64,
    pub column: f64,
    /// Hitbox extent; may be zero or negative.
    pub height: i32,
    pub width: i32,
    pub destroyed: bool,
}

impl Obstacle {
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.row,
            self.column,
            f64::from(self.height),
            f64::from(self.width),
        )
    }

    pub fn has_collision(&self, other: &Rect) -> bool {
        has_collision(&self.hitbox(), other)
    }
}

#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    next_id: u64,
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle whose hitbox is exactly the given box.
    pub fn add(&mut self, row: f64, column: f64, height: i32, width: i32) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            row,
            column,
            height,
            width,
            destroyed: false,
        });
        id
    }

    /// Register a garbage frame drawn at `(row, column)`, shrinking its
    /// hitbox by `HITBOX_MARGIN` on every side.
    pub fn add_frame(
        &mut self,
        row: f64,
        column: f64,
        frame_height: usize,
        frame_width: usize,
    ) -> ObstacleId {
        let margin = f64::from(HITBOX_MARGIN);
        self.add(
            row + margin,
            column + margin,
            frame_height as i32 - 2 * HITBOX_MARGIN,
            frame_width as i32 - 2 * HITBOX_MARGIN,
        )
    }

    /// Follow a garbage frame that moved to `(row, column)`.
    pub fn move_frame(&mut self, id: ObstacleId, row: f64, column: f64) {
        let margin = f64::from(HITBOX_MARGIN);
        if let Some(obstacle) = self.get_mut(id) {
            obstacle.row = row + margin;
            obstacle.column = column + margin;
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    /// Remove an obstacle.  Only the first call for an id returns it.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let index = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.remove(index))
    }

    /// First live obstacle, in registry order, overlapping `rect`.
    pub fn first_collision(&self, rect: &Rect) -> Option<&Obstacle> {
        self.live().find(|o| o.has_collision(rect))
    }

    /// Mark the first live obstacle overlapping `rect` as destroyed and
    /// return a copy of it.  An already destroyed obstacle is skipped.
    pub fn destroy_first_hit(&mut self, rect: &Rect) -> Option<Obstacle> {
        let hit = self
            .obstacles
            .iter_mut()
            .find(|o| !o.destroyed && o.has_collision(rect))?;
        hit.destroyed = true;
        debug!("obstacle {:?} destroyed at ({:.1}, {:.1})", hit.id, hit.row, hit.column);
        Some(hit.clone())
    }

    /// Obstacles not yet destroyed, in registry order.
    pub fn live(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|o| !o.destroyed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
