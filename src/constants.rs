use bevy::prelude::Color;

// Camera settings
pub const CAMERA_SCROLL_SPEED: f32 = 5.0; // world units per frame while edge scrolling
pub const EDGE_SCROLL_MARGIN: f32 = 70.0; // pixel distance from a window edge that triggers panning
pub const ZOOM_STEP: f32 = 0.05;
pub const MIN_ZOOM: f32 = 0.1;
pub const INITIAL_ZOOM: f32 = 1.0;
pub const VIEW_OVERSCAN: f32 = 1.5; // extra visible margin baked into the projection
pub const PIXEL_SCROLL_FACTOR: f32 = 0.1; // normalize pixel-unit wheel deltas to line units

// Quadtree settings
pub const QUADTREE_DEPTH: u32 = 3;
pub const QUADTREE_LEAF_COLOR: Color = Color::srgb(0.9, 0.2, 0.2); // depth 0
pub const QUADTREE_EVEN_COLOR: Color = Color::srgb(0.2, 0.8, 0.3); // remaining even depths
pub const QUADTREE_ODD_COLOR: Color = Color::srgb(0.25, 0.45, 0.95); // odd depths

// Unit settings
pub const UNIT_RADIUS: f32 = 30.0;
pub const UNIT_COLOR_IDLE: Color = Color::srgb(0.2, 0.35, 0.9);
pub const UNIT_COLOR_SELECTED: Color = Color::srgb(0.2, 0.85, 0.3);
pub const UNIT_Z: f32 = 1.0; // keep the unit above the outline plane

// HUD settings
pub const HUD_FONT_SIZE: f32 = 20.0;
