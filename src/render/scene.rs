//! Draw-list building from game state
//!
//! Pure read of the simulation: [`build_frame`] turns the current state into
//! colored point spans (rasterized outlines) and triangle fans (fills) for a
//! renderer to push to whatever surface it owns. Menu and game-over screens
//! are text-only and handled by the shell, so they produce an empty frame.

use glam::{IVec2, Vec2};

use super::raster;
use crate::consts::{MAX_LEVEL, PLAYFIELD_HEIGHT};
use crate::sim::{Enemy, EnemyKind, GameMode, GameState, Player, PowerUp};

pub type Color = [f32; 3];

const SHIP_BODY: Color = [0.0, 0.8, 1.0];
const SHIP_BODY_CRITICAL: Color = [1.0, 0.0, 0.0];
const SHIP_COCKPIT: Color = [0.3, 0.9, 1.0];
const SHIP_WING: Color = [0.0, 0.6, 0.8];
const BULLET_STANDARD: Color = [1.0, 1.0, 0.0];
const BULLET_FINAL_LEVEL: Color = [1.0, 0.0, 0.0];
const ENEMY_CIRCLE_FILL: Color = [1.0, 0.0, 0.0];
const ENEMY_CIRCLE_RIM: Color = [0.5, 0.0, 0.0];
const ENEMY_TRIANGLE: Color = [1.0, 0.3, 0.0];
const ENEMY_SQUARE: Color = [0.8, 0.0, 0.8];
const ENEMY_DIAMOND: Color = [0.0, 1.0, 1.0];
const POWER_UP_BODY: Color = [0.0, 1.0, 0.0];
const POWER_UP_CROSS: Color = [1.0, 1.0, 1.0];
const LIFE_ICON: Color = [1.0, 0.0, 0.0];

/// A run of rasterized points sharing one color
#[derive(Debug, Clone)]
pub struct PointSpan {
    pub color: Color,
    pub points: Vec<IVec2>,
}

/// A filled triangle fan sharing one color
#[derive(Debug, Clone)]
pub struct TriangleFan {
    pub color: Color,
    pub vertices: Vec<Vec2>,
}

/// One frame's worth of draw lists
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub spans: Vec<PointSpan>,
    pub fans: Vec<TriangleFan>,
}

impl Frame {
    fn span(&mut self, color: Color, points: Vec<IVec2>) {
        self.spans.push(PointSpan { color, points });
    }

    fn fan(&mut self, color: Color, vertices: Vec<Vec2>) {
        self.fans.push(TriangleFan { color, vertices });
    }

    /// Rasterize the edges of a closed polygon into one span
    fn outline(&mut self, color: Color, corners: &[IVec2]) {
        let mut points = Vec::new();
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            points.extend(raster::line(corners[i], next));
        }
        self.span(color, points);
    }
}

/// Build the draw lists for the current state; never mutates the simulation
pub fn build_frame(state: &GameState) -> Frame {
    let mut frame = Frame::default();
    if state.mode != GameMode::Playing {
        return frame;
    }

    draw_player(&mut frame, &state.player);
    for bullet in state.bullets.iter().filter(|b| b.active) {
        draw_bullet(&mut frame, bullet.pos, state.level);
    }
    for enemy in state.enemies.iter().filter(|e| e.active) {
        draw_enemy(&mut frame, enemy);
    }
    for power_up in state.power_ups.iter().filter(|p| p.active) {
        draw_power_up(&mut frame, power_up);
    }
    draw_life_icons(&mut frame, &state.player);

    frame
}

fn grid(pos: Vec2) -> IVec2 {
    pos.round().as_ivec2()
}

fn draw_player(frame: &mut Frame, player: &Player) {
    let p = player.pos;
    let s = player.size;
    let body = if player.lives == 1 {
        SHIP_BODY_CRITICAL
    } else {
        SHIP_BODY
    };

    // Hull triangle: nose up, flat stern
    frame.fan(
        body,
        vec![
            p + Vec2::new(0.0, s),
            p + Vec2::new(-s / 2.0, -s / 2.0),
            p + Vec2::new(s / 2.0, -s / 2.0),
        ],
    );

    // Cockpit bubble
    frame.span(
        SHIP_COCKPIT,
        raster::circle_outline(grid(p + Vec2::new(0.0, s / 3.0)), (s / 4.0) as i32),
    );

    // Wing struts
    for side in [-1.0, 1.0] {
        frame.span(
            SHIP_WING,
            raster::line(
                grid(p + Vec2::new(side * s / 2.0, -s / 2.0)),
                grid(p + Vec2::new(side * s, -s)),
            ),
        );
    }
}

fn draw_bullet(frame: &mut Frame, pos: Vec2, level: u32) {
    let (color, half_w, half_h) = if level < MAX_LEVEL {
        (BULLET_STANDARD, 2.0, 5.0)
    } else {
        (BULLET_FINAL_LEVEL, 3.0, 7.0)
    };
    frame.fan(
        color,
        vec![
            pos + Vec2::new(-half_w, -half_h),
            pos + Vec2::new(half_w, -half_h),
            pos + Vec2::new(half_w, half_h),
            pos + Vec2::new(-half_w, half_h),
        ],
    );
}

fn draw_enemy(frame: &mut Frame, enemy: &Enemy) {
    let p = enemy.pos;
    match enemy.kind {
        EnemyKind::Circle => {
            frame.fan(ENEMY_CIRCLE_FILL, raster::filled_circle(p, 15.0));
            frame.span(ENEMY_CIRCLE_RIM, raster::circle_outline(grid(p), 15));
        }
        EnemyKind::Triangle => {
            frame.fan(
                ENEMY_TRIANGLE,
                vec![
                    p + Vec2::new(0.0, -20.0),
                    p + Vec2::new(-15.0, 15.0),
                    p + Vec2::new(15.0, 15.0),
                ],
            );
        }
        EnemyKind::Square => {
            frame.fan(
                ENEMY_SQUARE,
                vec![
                    p + Vec2::new(-15.0, -15.0),
                    p + Vec2::new(15.0, -15.0),
                    p + Vec2::new(15.0, 15.0),
                    p + Vec2::new(-15.0, 15.0),
                ],
            );
        }
        EnemyKind::Diamond => {
            frame.outline(
                ENEMY_DIAMOND,
                &[
                    grid(p + Vec2::new(0.0, 20.0)),
                    grid(p + Vec2::new(20.0, 0.0)),
                    grid(p + Vec2::new(0.0, -20.0)),
                    grid(p + Vec2::new(-20.0, 0.0)),
                ],
            );
        }
    }
}

fn draw_power_up(frame: &mut Frame, power_up: &PowerUp) {
    let p = power_up.pos;
    frame.fan(POWER_UP_BODY, raster::filled_circle(p, 10.0));
    frame.span(
        POWER_UP_CROSS,
        raster::line(grid(p + Vec2::new(-5.0, 0.0)), grid(p + Vec2::new(5.0, 0.0))),
    );
    frame.span(
        POWER_UP_CROSS,
        raster::line(grid(p + Vec2::new(0.0, -5.0)), grid(p + Vec2::new(0.0, 5.0))),
    );
}

fn draw_life_icons(frame: &mut Frame, player: &Player) {
    for i in 0..player.lives {
        let center = Vec2::new(20.0 + i as f32 * 25.0, PLAYFIELD_HEIGHT - 60.0);
        frame.fan(LIFE_ICON, raster::filled_circle(center, 8.0));
    }
}
