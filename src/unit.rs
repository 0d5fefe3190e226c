// The single interactive unit: a selectable, repositionable circle
use bevy::prelude::*;

use crate::constants::*;

/// Unit state. `position` anchors the circle's bounding corner; the circle
/// itself is centered at `position + (radius, radius)`, for rendering and
/// hit-testing alike, so the drawn shape and the clickable shape coincide.
#[derive(Component, Debug)]
pub struct Unit {
    pub position: Vec2,
    pub radius: f32,
    pub selected: bool,
}

impl Unit {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            radius,
            selected: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius)
    }

    /// World-space containment test against the rendered circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center().distance_squared(point) <= self.radius * self.radius
    }

    /// Unconditional reposition.
    pub fn move_to(&mut self, destination: Vec2) {
        self.position = destination;
    }
}

/// Pre-built fill materials, swapped when the selection state flips.
#[derive(Resource)]
pub struct UnitMaterials {
    pub idle: Handle<ColorMaterial>,
    pub selected: Handle<ColorMaterial>,
}

/// System: keep the unit entity's transform and fill color in sync with its
/// logical state.
pub fn sync_unit_visual_system(
    materials: Res<UnitMaterials>,
    mut unit_query: Query<
        (&Unit, &mut Transform, &mut MeshMaterial2d<ColorMaterial>),
        Changed<Unit>,
    >,
) {
    for (unit, mut transform, mut material) in unit_query.iter_mut() {
        transform.translation = unit.center().extend(UNIT_Z);
        material.0 = if unit.selected {
            materials.selected.clone()
        } else {
            materials.idle.clone()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_its_offset_center() {
        let unit = Unit::new(Vec2::new(100.0, 100.0), 30.0);
        assert!(unit.contains(Vec2::new(130.0, 130.0)));
    }

    #[test]
    fn does_not_contain_its_anchor_position() {
        let unit = Unit::new(Vec2::new(100.0, 100.0), 30.0);
        // The anchor corner is radius * sqrt(2) away from the center.
        assert!(!unit.contains(unit.position));
    }

    #[test]
    fn contains_points_on_the_rim() {
        let unit = Unit::new(Vec2::ZERO, 30.0);
        assert!(unit.contains(unit.center() + Vec2::new(30.0, 0.0)));
        assert!(!unit.contains(unit.center() + Vec2::new(30.1, 0.0)));
    }

    #[test]
    fn move_to_overwrites_position() {
        let mut unit = Unit::new(Vec2::new(100.0, 100.0), 30.0);
        unit.move_to(Vec2::new(500.0, 500.0));
        assert_eq!(unit.position, Vec2::new(500.0, 500.0));
        assert_eq!(unit.center(), Vec2::new(530.0, 530.0));
    }
}
