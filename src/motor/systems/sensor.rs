//! Motor domain: ground sensing via a downward box sweep.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motor::{GameLayer, MotorState, MotorTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MotorTuning>,
    mut query: Query<(&Transform, &mut MotorState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (never the player itself)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::rectangle(tuning.ground_check_width, tuning.ground_check_height);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let origin = transform.translation.truncate();
        let hit = spatial_query.cast_shape(
            &probe,
            origin,
            0.0,
            Dir2::NEG_Y,
            &ShapeCastConfig::from_max_distance(tuning.ground_check_distance),
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed: on_ground={}", state.on_ground);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: on_ground={}", state.on_ground);
        }
    }
}

/// Debug outline of the ground probe box. Cosmetic, no behavioral effect.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ground_probe(
    tuning: Res<MotorTuning>,
    query: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    if !tuning.draw_ground_probe {
        return;
    }

    let size = Vec2::new(tuning.ground_check_width, tuning.ground_check_height);

    for transform in &query {
        let center =
            transform.translation.truncate() - Vec2::new(0.0, tuning.ground_check_distance);
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            size,
            Color::srgb(0.3, 0.9, 0.5),
        );
    }
}
