//! Movement domain: ground and wall detection via shape casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactProbe, EnvironmentProbe, Facing};

/// Casts the character's own collider a short distance against the
/// ground or wall layers.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    entity: Entity,
    collider: &'a Collider,
    origin: Vec2,
    rotation: f32,
    settings: &'a ContactProbe,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        collider: &'a Collider,
        position: &Position,
        rotation: &Rotation,
        settings: &'a ContactProbe,
    ) -> Self {
        Self {
            spatial_query,
            entity,
            collider,
            origin: position.0,
            rotation: rotation.as_radians(),
            settings,
        }
    }

    fn cast(&self, direction: Dir2, mask: LayerMask) -> bool {
        // Never hit our own collider, whatever layers it sits on
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.entity]);
        let config = ShapeCastConfig::from_max_distance(self.settings.distance);

        self.spatial_query
            .cast_shape(
                self.collider,
                self.origin,
                self.rotation,
                direction,
                &config,
                &filter,
            )
            .is_some()
    }
}

impl EnvironmentProbe for SpatialProbe<'_, '_, '_> {
    fn probe_ground(&self) -> bool {
        self.cast(Dir2::NEG_Y, self.settings.ground_mask)
    }

    fn probe_wall(&self, facing: Facing) -> bool {
        self.cast(facing.direction(), self.settings.wall_mask)
    }
}
