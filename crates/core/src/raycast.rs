//! DDA wall casting for the first-person view.

use crate::mapgen::Grid;
use crate::types::{Point, Pos};

/// Which family of grid lines the ray crossed when it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitSide {
    /// Crossed a vertical grid line (x-step).
    X,
    /// Crossed a horizontal grid line (y-step).
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the camera plane to the hit, measured along `facing`.
    pub distance: f64,
    /// Euclidean length of the ray from the origin to the hit.
    pub ray_length: f64,
    pub side: HitSide,
    pub cell: Pos,
}

/// Steps from `origin` along `angle` cell by cell until a wall or the grid edge.
///
/// The ray direction is a unit vector, so the DDA entry-side formula yields the ray's length;
/// projecting it onto `facing` gives the perpendicular distance used for wall heights.
pub fn cast_ray(angle: f64, grid: &Grid, origin: Point, facing: f64) -> RayHit {
    let dir_x = angle.cos();
    let dir_y = angle.sin();

    let mut map_x = origin.x.floor() as i32;
    let mut map_y = origin.y.floor() as i32;

    let delta_x = (1.0 / dir_x).abs();
    let delta_y = (1.0 / dir_y).abs();
    let step_x: i32 = if dir_x < 0.0 { -1 } else { 1 };
    let step_y: i32 = if dir_y < 0.0 { -1 } else { 1 };

    let mut side_x = initial_side_distance(dir_x, origin.x, map_x, delta_x);
    let mut side_y = initial_side_distance(dir_y, origin.y, map_y, delta_y);

    let mut side;
    loop {
        if side_x < side_y {
            side_x += delta_x;
            map_x += step_x;
            side = HitSide::X;
        } else {
            side_y += delta_y;
            map_y += step_y;
            side = HitSide::Y;
        }

        let cell = Pos { y: map_y, x: map_x };
        if !grid.in_bounds(cell) || !grid.is_floor(cell) {
            break;
        }
    }

    let ray_length = match side {
        HitSide::X => (f64::from(map_x) - origin.x + f64::from(1 - step_x) / 2.0) / dir_x,
        HitSide::Y => (f64::from(map_y) - origin.y + f64::from(1 - step_y) / 2.0) / dir_y,
    };

    RayHit {
        distance: ray_length * (angle - facing).cos(),
        ray_length,
        side,
        cell: Pos { y: map_y, x: map_x },
    }
}

fn initial_side_distance(dir: f64, origin: f64, cell: i32, delta: f64) -> f64 {
    if dir == 0.0 {
        return f64::INFINITY;
    }
    if dir < 0.0 {
        (origin - f64::from(cell)) * delta
    } else {
        (f64::from(cell) + 1.0 - origin) * delta
    }
}

/// Number of columns to cast for a viewport, capped at `max_rays`.
pub fn ray_count(viewport_width: u32, max_rays: u32) -> u32 {
    viewport_width.min(max_rays)
}

/// Ray angle for `column` of `columns`, spread over `fov` via `atan(camera_x * tan(fov / 2))`.
pub fn column_angle(facing: f64, column: u32, columns: u32, fov: f64) -> f64 {
    let camera_x = 2.0 * f64::from(column) / f64::from(columns) - 1.0;
    facing + (camera_x * (fov / 2.0).tan()).atan()
}

/// One hit per column, left to right.
pub fn cast_view(grid: &Grid, origin: Point, facing: f64, columns: u32, fov: f64) -> Vec<RayHit> {
    (0..columns)
        .map(|column| cast_ray(column_angle(facing, column, columns, fov), grid, origin, facing))
        .collect()
}
