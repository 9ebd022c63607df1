//! Scene configuration
//!
//! Declarative layout and tuning parameters consumed once at scene build.
//! Defaults carry the shipped arcade values; everything round-trips
//! through JSON for external tooling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Block grid placement parameters. Block `(i, j)` is centered at
/// `(x_spacing * j + offset_x, y_spacing * i + offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub x_spacing: f32,
    pub y_spacing: f32,
    pub block_width: f32,
    pub block_height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            offset_x: 40.0,
            offset_y: 40.0,
            x_spacing: 80.0,
            y_spacing: 40.0,
            block_width: 60.0,
            block_height: 20.0,
        }
    }
}

impl GridLayout {
    /// Center of the block at grid cell `(row, col)`.
    pub fn block_center(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            self.x_spacing * col as f32 + self.offset_x,
            self.y_spacing * row as f32 + self.offset_y,
        )
    }

    /// Total number of blocks in the grid.
    pub fn block_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }
}

/// Fill colors handed to whatever renders the scene. The core never draws;
/// it only attaches these to the bodies it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub wall: String,
    pub block: String,
    pub paddle: String,
    pub ball: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#444".to_string(),
            wall: "#89b".to_string(),
            block: "#ff0".to_string(),
            paddle: "#0ff".to_string(),
            ball: "hotpink".to_string(),
        }
    }
}

/// Full scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Field ===
    /// Play field size in field units
    pub field_width: f32,
    pub field_height: f32,
    /// Wall slab thickness (top, left, right; there is no bottom wall)
    pub wall_thickness: f32,
    /// Gravity acceleration, Y-down
    pub gravity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Initial paddle center; `y` stays fixed for the whole session
    pub paddle_spawn: Vec2,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_spawn: Vec2,
    /// Target speed the governor holds the ball to, in units per tick
    pub ball_speed: f32,

    // === Blocks ===
    pub grid: GridLayout,

    // === Rendering hints ===
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            gravity: Vec2::new(0.0, GRAVITY_Y),

            paddle_width: 120.0,
            paddle_height: 20.0,
            paddle_spawn: Vec2::new(400.0, 550.0),

            ball_radius: 10.0,
            ball_spawn: Vec2::new(400.0, 300.0),
            ball_speed: BALL_SPEED,

            grid: GridLayout::default(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_reference_layout() {
        let grid = GridLayout::default();
        assert_eq!(grid.block_count(), 50);
        assert_eq!(grid.block_center(0, 0), Vec2::new(40.0, 40.0));
        assert_eq!(grid.block_center(4, 9), Vec2::new(760.0, 200.0));
    }

    #[test]
    fn json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Settings::from_json("{not json").is_err());
    }
}
