// Camera state plus the edge-scroll, zoom and projection systems
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;

/// Logical camera state carried by the `Camera2d` entity. The entity's real
/// `Transform` is derived from this once per frame by [`apply_camera_system`],
/// which is the single place the frame's world-to-screen mapping is set.
#[derive(Component, Debug)]
pub struct GameCamera {
    pub position: Vec2,
    pub zoom: f32,
    pub scroll_speed: f32,
}

impl GameCamera {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            zoom: INITIAL_ZOOM,
            scroll_speed: CAMERA_SCROLL_SPEED,
        }
    }

    /// Pan when the cursor sits within the edge margin; corners pan both axes
    /// in the same frame. Cursor coordinates are window pixels (top-left
    /// origin, y-down) while the world is y-up, so the top edge pans
    /// toward +y.
    pub fn edge_scroll(&mut self, window_size: Vec2, cursor: Vec2) {
        if cursor.x < EDGE_SCROLL_MARGIN {
            self.position.x -= self.scroll_speed;
        } else if cursor.x > window_size.x - EDGE_SCROLL_MARGIN {
            self.position.x += self.scroll_speed;
        }

        if cursor.y < EDGE_SCROLL_MARGIN {
            self.position.y += self.scroll_speed;
        } else if cursor.y > window_size.y - EDGE_SCROLL_MARGIN {
            self.position.y -= self.scroll_speed;
        }
    }

    /// Adjust zoom by a wheel delta. Clamped to the floor, no ceiling.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta * ZOOM_STEP).max(MIN_ZOOM);
    }

    /// World coordinates to view-center-relative coordinates.
    #[allow(dead_code)]
    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom
    }

    /// Inverse of [`GameCamera::world_to_view`].
    pub fn view_to_world(&self, view: Vec2) -> Vec2 {
        view / self.zoom + self.position
    }

    /// Window-pixel cursor position to world coordinates, consistent with the
    /// projection applied by [`apply_camera_system`]. This is the hit-testing
    /// path, so clicks stay correct while the camera is panned or zoomed.
    pub fn cursor_to_world(&self, cursor: Vec2, window_size: Vec2) -> Vec2 {
        let centered = (cursor - window_size / 2.0) * Vec2::new(1.0, -1.0);
        self.view_to_world(centered * VIEW_OVERSCAN)
    }
}

/// System: apply edge scrolling whenever the cursor is inside the window.
pub fn edge_scroll_system(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut GameCamera>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    camera.edge_scroll(Vec2::new(window.width(), window.height()), cursor);
}

/// System: mouse-wheel zoom.
pub fn camera_zoom_system(
    mut scroll_events: EventReader<MouseWheel>,
    mut camera_query: Query<&mut GameCamera>,
) {
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        let delta = match scroll.unit {
            MouseScrollUnit::Line => scroll.y,
            MouseScrollUnit::Pixel => scroll.y * PIXEL_SCROLL_FACTOR,
        };
        camera.zoom_by(delta);
    }
}

/// System: write the camera entity's transform from the logical state.
/// Visible world size ends up at window size / zoom * overscan.
pub fn apply_camera_system(
    mut camera_query: Query<(&GameCamera, &mut Transform), With<Camera2d>>,
) {
    let Ok((camera, mut transform)) = camera_query.single_mut() else {
        return;
    };

    let scale = VIEW_OVERSCAN / camera.zoom;
    transform.translation = camera.position.extend(transform.translation.z);
    transform.scale = Vec3::new(scale, scale, 1.0);
}
