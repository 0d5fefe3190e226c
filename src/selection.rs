// Pointer commands: left-click selection, right-click move orders
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::GameCamera;
use crate::unit::Unit;

/// System: dispatch pointer presses to the unit. The cursor is converted to
/// world space first, so hit-testing stays correct under pan and zoom.
pub fn unit_command_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<&GameCamera>,
    mut unit_query: Query<&mut Unit>,
) {
    let left = mouse_button.just_pressed(MouseButton::Left);
    let right = mouse_button.just_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok(camera) = camera_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let world_pos = camera.cursor_to_world(cursor, Vec2::new(window.width(), window.height()));

    for mut unit in unit_query.iter_mut() {
        if left {
            left_click(&mut unit, world_pos);
        }
        if right {
            right_click(&mut unit, world_pos);
        }
    }
}

/// Left press: toggle selection on a hit, clear it on a miss.
pub(crate) fn left_click(unit: &mut Unit, world_pos: Vec2) {
    if unit.contains(world_pos) {
        unit.selected = !unit.selected;
        info!(
            "Unit {}",
            if unit.selected { "selected" } else { "deselected" }
        );
    } else if unit.selected {
        unit.selected = false;
        info!("Selection cleared");
    }
}

/// Right press: move order, honored only while selected.
pub(crate) fn right_click(unit: &mut Unit, world_pos: Vec2) {
    if unit.selected {
        unit.move_to(world_pos);
        info!("Unit moved to ({:.1}, {:.1})", world_pos.x, world_pos.y);
    }
}
