use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, PrimaryWindow, WindowMode};

mod camera;
mod constants;
mod quadtree;
mod selection;
mod unit;

use camera::{apply_camera_system, camera_zoom_system, edge_scroll_system, GameCamera};
use constants::*;
use quadtree::{draw_quadtree_system, Quadtree, WorldPartition};
use selection::unit_command_system;
use unit::{sync_unit_visual_system, Unit, UnitMaterials};

#[derive(Component)]
struct HudText;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Quadtree Visualization".into(),
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Current),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_systems(Startup, setup_scene)
        // Chained to preserve the per-frame order: input commands first, then
        // edge scrolling, then the camera/visual state the render pass reads.
        .add_systems(
            Update,
            (
                camera_zoom_system,
                unit_command_system,
                edge_scroll_system,
                apply_camera_system,
                sync_unit_visual_system,
                draw_quadtree_system,
                update_hud_system,
            )
                .chain(),
        )
        .run();
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let window_size = Vec2::new(window.width(), window.height());
    let window_center = window_size / 2.0;

    commands.spawn((Camera2d, GameCamera::new(window_center)));

    // The region tree covers the window rect and is fully materialized here,
    // once; it is never mutated afterward.
    let mut root = Quadtree::new(Rect::from_corners(Vec2::ZERO, window_size), QUADTREE_DEPTH);
    root.subdivide();
    info!(
        "Built quadtree over {}x{} with {} nodes",
        window_size.x,
        window_size.y,
        root.node_count()
    );
    commands.insert_resource(WorldPartition { root });

    let unit = Unit::new(window_center, UNIT_RADIUS);
    let unit_materials = UnitMaterials {
        idle: materials.add(UNIT_COLOR_IDLE),
        selected: materials.add(UNIT_COLOR_SELECTED),
    };
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(UNIT_RADIUS))),
        MeshMaterial2d(unit_materials.idle.clone()),
        Transform::from_translation(unit.center().extend(UNIT_Z)),
        unit,
    ));
    commands.insert_resource(unit_materials);

    commands.spawn((
        Text::new(hud_text(0.0)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

fn hud_text(fps: f64) -> String {
    format!(
        "Quadtree depth {QUADTREE_DEPTH} | FPS: {fps:.1}\n\
         Edges: Pan | Scroll: Zoom | LMB: Select | RMB: Move"
    )
}

fn update_hud_system(
    diagnostics: Res<DiagnosticsStore>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud_query.single_mut() else {
        return;
    };
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    text.0 = hud_text(fps);
}
