use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::log::LogPlugin;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::simulation::params::Parameters;
use crate::simulation::step::{tick, TickReport};

/// Component tagging each circle with the id of its craft
#[derive(Component)]
struct CraftSprite(pub u64);

/// Marker for the readout panel in the top-left corner
#[derive(Component)]
struct InfoPanel;

/// Marker for the pause banner in the bottom-right corner
#[derive(Component)]
struct PauseBanner;

/// Anchor of an in-progress launch gesture, display space
#[derive(Resource, Default)]
struct PendingLaunch(Option<NVec2>);

/// Readouts from the most recent physics tick, kept for the UI systems
#[derive(Resource, Default)]
struct LastReport(TickReport);

/// Visual exaggeration of the planet disc over its collision radius
const PLANET_DRAW_FACTOR: f32 = 2.5;

/// On-screen radius of a craft marker, pixels
const CRAFT_DRAW_RADIUS: f32 = 8.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting viewer with {} pre-launched craft",
        scenario.world.crafts.len()
    );

    let width = scenario.parameters.width as f32;
    let height = scenario.parameters.height as f32;
    let t_rate = scenario.parameters.t_rate;

    App::new()
        .insert_resource(scenario)
        .insert_resource(PendingLaunch::default())
        .insert_resource(LastReport::default())
        // Physics runs on the fixed schedule at the configured tick rate,
        // independent of the render frame rate
        .insert_resource(Time::<Fixed>::from_hz(t_rate))
        // env_logger owns the global logger (set up in main), so Bevy's own
        // LogPlugin stays out of the way
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Gravitational Slingshot".into(),
                        resolution: (width, height).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_scene_system)
        .add_systems(FixedUpdate, physics_tick_system)
        .add_systems(
            Update,
            (
                launch_input_system,
                pause_input_system,
                sync_crafts_system,
                readout_text_system,
                aim_gizmo_system,
            ),
        )
        .run();
}

/// Display space (origin top-left, y down) -> Bevy world space (origin
/// centre, y up)
fn to_world(x: f64, y: f64, params: &Parameters) -> Vec2 {
    Vec2::new(
        x as f32 - params.width as f32 / 2.0,
        params.height as f32 / 2.0 - y as f32,
    )
}

fn spawn_craft_sprite(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    id: u64,
    x: NVec2,
    params: &Parameters,
) {
    let p = to_world(x.x, x.y, params);

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(CRAFT_DRAW_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.0, 0.0))),
            transform: Transform::from_xyz(p.x, p.y, 0.5),
            ..Default::default()
        },
        CraftSprite(id),
    ));
}

fn setup_scene_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    scenario: Res<Scenario>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let params = &scenario.parameters;
    let planet = &scenario.world.planet;

    // Planet disc, drawn above the craft. The collision radius maps to a
    // small on-screen circle, so the disc is exaggerated for visibility
    let radius_screen = params.to_display(planet.radius) as f32 * PLANET_DRAW_FACTOR;
    let p = to_world(planet.x.x, planet.x.y, params);
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
        material: materials.add(ColorMaterial::from(Color::srgb(0.9, 0.6, 0.3))),
        transform: Transform::from_xyz(p.x, p.y, 1.0),
        ..Default::default()
    });

    // Sprites for craft pre-seeded by the scenario file
    for craft in &scenario.world.crafts {
        spawn_craft_sprite(
            &mut commands,
            &mut meshes,
            &mut materials,
            craft.id,
            craft.x,
            params,
        );
    }

    // Readout panel, top-left
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 16.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..Default::default()
        }),
        InfoPanel,
    ));

    // Pause banner, bottom-right, hidden until TAB
    let mut banner = TextBundle::from_section(
        "PAUSED (Press TAB to resume)",
        TextStyle {
            font_size: 16.0,
            color: Color::WHITE,
            ..Default::default()
        },
    )
    .with_style(Style {
        position_type: PositionType::Absolute,
        left: Val::Px(params.width as f32 - 260.0),
        top: Val::Px(params.height as f32 - 30.0),
        ..Default::default()
    });
    banner.visibility = Visibility::Hidden;
    commands.spawn((banner, PauseBanner));
}

/// Two-click launch gesture: first click anchors, second click launches.
/// Gesture input is ignored while paused
fn launch_input_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pending: ResMut<PendingLaunch>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if scenario.world.paused {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    // Cursor position is already display space: top-left origin, y down
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let point = NVec2::new(cursor.x as f64, cursor.y as f64);

    match pending.0.take() {
        None => pending.0 = Some(point),
        Some(anchor) => {
            let Scenario {
                parameters, world, ..
            } = &mut *scenario;

            let id = world.launch(anchor, point, parameters);
            spawn_craft_sprite(&mut commands, &mut meshes, &mut materials, id, anchor, parameters);
        }
    }
}

/// TAB flips the global pause flag and the banner follows it
fn pause_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut banner: Query<&mut Visibility, With<PauseBanner>>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }

    let paused = scenario.world.toggle_pause();
    for mut vis in &mut banner {
        *vis = if paused {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// One simulation tick per fixed-schedule run; retired craft lose their
/// sprites in the same tick
fn physics_tick_system(
    mut commands: Commands,
    mut scenario: ResMut<Scenario>,
    mut report: ResMut<LastReport>,
    sprites: Query<(Entity, &CraftSprite)>,
) {
    let Scenario {
        parameters,
        gravity,
        world,
    } = &mut *scenario;

    report.0 = tick(world, gravity, parameters);

    for (entity, CraftSprite(id)) in &sprites {
        if report.0.removed.iter().any(|(rid, _)| rid == id) {
            commands.entity(entity).despawn();
        }
    }
}

fn sync_crafts_system(
    scenario: Res<Scenario>,
    mut query: Query<(&CraftSprite, &mut Transform)>,
) {
    let params = &scenario.parameters;
    for (CraftSprite(id), mut transform) in &mut query {
        if let Some(craft) = scenario.world.crafts.iter().find(|c| c.id == *id) {
            let p = to_world(craft.x.x, craft.x.y, params);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

/// Rebuild the readout panel from the latest tick report
fn readout_text_system(report: Res<LastReport>, mut panel: Query<&mut Text, With<InfoPanel>>) {
    let mut value = String::new();
    for (idx, r) in report.0.readouts.iter().enumerate() {
        value.push_str(&format!(
            "Spacecraft {}\nSpeed: {:.2} m/s\nDistance: {:.2} km\nForce: {:.2e} N\n\n",
            idx + 1,
            r.speed,
            r.distance_m / 1000.0,
            r.force,
        ));
    }

    for mut text in &mut panel {
        text.sections[0].value.clone_from(&value);
    }
}

/// Aim line and anchor marker for an in-progress gesture
fn aim_gizmo_system(
    mut gizmos: Gizmos,
    pending: Res<PendingLaunch>,
    windows: Query<&Window, With<PrimaryWindow>>,
    scenario: Res<Scenario>,
) {
    let Some(anchor) = pending.0 else {
        return;
    };
    let params = &scenario.parameters;
    let a = to_world(anchor.x, anchor.y, params);

    if let Ok(window) = windows.get_single() {
        if let Some(cursor) = window.cursor_position() {
            let c = to_world(cursor.x as f64, cursor.y as f64, params);
            gizmos.line_2d(a, c, Color::WHITE);
        }
    }

    gizmos.circle_2d(a, CRAFT_DRAW_RADIUS, Color::srgb(1.0, 0.0, 0.0));
}
