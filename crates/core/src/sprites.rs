//! Billboard projection of world entities into screen space.

use std::f64::consts::{PI, TAU};

use crate::config::{MIN_SPRITE_DISTANCE, SPRITE_FOV_MARGIN};
use crate::types::{EnemyId, EnemyKind, Point, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteKind {
    Enemy { id: EnemyId, kind: EnemyKind, health_fraction: f64 },
    Coin { amount: u32 },
    Shop,
    Portal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSprite {
    pub position: Point,
    pub kind: SpriteKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub kind: SpriteKind,
    pub distance: f64,
    /// Signed angle from the view direction, in `(-PI, PI]`.
    pub angle_offset: f64,
    /// Horizontal screen center in pixels, on the same perspective mapping as the wall columns.
    pub screen_x: f64,
    /// Square side length in pixels.
    pub size: f64,
}

/// Wraps an angle into `(-PI, PI]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Projects every sprite inside the widened field of view, ordered far to near so that painting
/// in sequence lets nearer sprites cover farther ones.
pub fn project_sprites<I>(
    viewer: Point,
    facing: f64,
    fov: f64,
    viewport: Viewport,
    sprites: I,
) -> Vec<Billboard>
where
    I: IntoIterator<Item = WorldSprite>,
{
    let half_fov = fov / 2.0;
    let half_tan = half_fov.tan();
    let half_width = f64::from(viewport.width) / 2.0;
    let height = f64::from(viewport.height);

    let mut billboards: Vec<Billboard> = sprites
        .into_iter()
        .filter_map(|sprite| {
            let distance = viewer.distance_to(sprite.position);
            let angle_offset = normalize_angle(viewer.angle_to(sprite.position) - facing);
            if angle_offset.abs() > half_fov + SPRITE_FOV_MARGIN {
                return None;
            }
            Some(Billboard {
                kind: sprite.kind,
                distance,
                angle_offset,
                screen_x: angle_offset.tan() / half_tan * half_width + half_width,
                size: height / distance.max(MIN_SPRITE_DISTANCE),
            })
        })
        .collect();

    billboards.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    billboards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELD_OF_VIEW;
    use crate::raycast::column_angle;

    const VIEW: Viewport = Viewport { width: 800, height: 600 };

    fn coin(x: f64, y: f64, amount: u32) -> WorldSprite {
        WorldSprite { position: Point::new(x, y), kind: SpriteKind::Coin { amount } }
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((normalize_angle(-0.25) + 0.25).abs() < 1e-12);
    }

    #[test]
    fn sprites_sort_far_to_near() {
        let origin = Point::new(0.0, 0.0);
        let billboards = project_sprites(
            origin,
            0.0,
            FIELD_OF_VIEW,
            VIEW,
            [coin(2.0, 0.0, 1), coin(6.0, 0.0, 2), coin(4.0, 0.1, 3)],
        );
        let amounts: Vec<u32> = billboards
            .iter()
            .map(|billboard| match billboard.kind {
                SpriteKind::Coin { amount } => amount,
                _ => 0,
            })
            .collect();
        assert_eq!(amounts, vec![2, 3, 1]);
    }

    #[test]
    fn sprites_behind_the_viewer_are_culled() {
        let billboards = project_sprites(
            Point::new(5.0, 5.0),
            0.0,
            FIELD_OF_VIEW,
            VIEW,
            [coin(2.0, 5.0, 1), coin(5.0, 9.0, 2)],
        );
        assert!(billboards.is_empty());
    }

    #[test]
    fn sprite_just_outside_fov_is_kept_within_margin() {
        let angle = FIELD_OF_VIEW / 2.0 + 0.4;
        let target = Point::new(0.0, 0.0).offset(angle, 3.0);
        let billboards =
            project_sprites(Point::new(0.0, 0.0), 0.0, FIELD_OF_VIEW, VIEW, [coin(target.x, target.y, 1)]);
        assert_eq!(billboards.len(), 1);
        assert!(billboards[0].screen_x > f64::from(VIEW.width));
    }

    #[test]
    fn centered_sprite_projects_to_screen_center_with_inverse_size() {
        let near = project_sprites(Point::new(0.0, 0.0), 0.0, FIELD_OF_VIEW, VIEW, [coin(2.0, 0.0, 1)]);
        let far = project_sprites(Point::new(0.0, 0.0), 0.0, FIELD_OF_VIEW, VIEW, [coin(4.0, 0.0, 1)]);
        assert!((near[0].screen_x - 400.0).abs() < 1e-9);
        assert!((near[0].size - 300.0).abs() < 1e-9);
        assert!((far[0].size - 150.0).abs() < 1e-9);
    }

    #[test]
    fn sprite_lines_up_with_the_wall_column_it_shares_a_ray_with() {
        let viewer = Point::new(0.0, 0.0);
        let facing = 0.3;
        for column in [40, 200, 400, 650, 780] {
            let angle = column_angle(facing, column, VIEW.width, FIELD_OF_VIEW);
            let target = viewer.offset(angle, 3.0);
            let billboards =
                project_sprites(viewer, facing, FIELD_OF_VIEW, VIEW, [coin(target.x, target.y, 1)]);
            assert!(
                (billboards[0].screen_x - f64::from(column)).abs() < 1e-6,
                "column {column} drew at {}",
                billboards[0].screen_x
            );
        }
    }

    #[test]
    fn zero_distance_sprite_has_finite_size() {
        let billboards =
            project_sprites(Point::new(1.0, 1.0), 0.0, FIELD_OF_VIEW, VIEW, [coin(1.0, 1.0, 1)]);
        assert_eq!(billboards.len(), 1);
        assert!(billboards[0].size.is_finite());
        assert_eq!(billboards[0].size, 600.0 / MIN_SPRITE_DISTANCE);
    }
}
