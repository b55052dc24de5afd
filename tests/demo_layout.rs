//! Runs the built-in demo layout and a file-based layout end to end.

use std::fs;

use bevy::prelude::*;
use rstest::rstest;
use stumble::{
    Health, Layout, LayoutError, Player, SlipSchedule, StumblePlugin, DEFAULT_PLAYER_HEALTH,
    SLIP_DAMAGE,
};

fn app_with(layout: &Layout) -> (App, Vec<Entity>) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(StumblePlugin);
    let players = layout
        .install(app.world_mut())
        .expect("layout installs");
    (app, players)
}

fn named(app: &mut App, name: &str) -> (Vec3, u16) {
    let world = app.world_mut();
    let mut query = world.query::<(&Player, &Transform, &Health)>();
    query
        .iter(world)
        .find(|(player, _, _)| player.name == name)
        .map(|(_, transform, health)| (transform.translation, health.current))
        .unwrap_or_else(|| panic!("no player named {name}"))
}

#[rstest]
fn runner_descends_the_demo_staircase_and_stops_on_the_landing() {
    let (mut app, players) = app_with(&Layout::demo_staircase());
    assert_eq!(players.len(), 2);

    for _ in 0..20 {
        app.update();
    }

    let (runner_feet, runner_health) = named(&mut app, "runner");
    assert_eq!(runner_feet, Vec3::new(0.5, 7.0, 4.5));
    assert_eq!(runner_health, DEFAULT_PLAYER_HEALTH - 4 * SLIP_DAMAGE);

    let (walker_feet, walker_health) = named(&mut app, "walker");
    assert_eq!(walker_feet, Vec3::new(3.5, 7.0, 6.5));
    assert_eq!(walker_health, DEFAULT_PLAYER_HEALTH);
}

#[rstest]
fn layout_file_round_trips_through_the_loader() {
    let path = std::env::temp_dir().join(format!("stumble-layout-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{
            "blocks": [
                { "x": 0, "y": 0, "z": 0, "kind": "stairs", "half": "bottom", "facing": "west" }
            ],
            "players": [
                { "name": "eve", "x": 0.5, "y": 1.0, "z": 0.5, "sprinting": true, "health": 5 }
            ]
        }"#,
    )
    .expect("write layout file");
    let layout = Layout::from_path(&path);
    fs::remove_file(&path).expect("remove layout file");

    let (mut app, _) = app_with(&layout.expect("layout file parses"));
    app.update();
    app.update();

    let (feet, health) = named(&mut app, "eve");
    assert_eq!(feet, Vec3::new(1.5, 0.0, 0.5));
    assert_eq!(health, 5 - SLIP_DAMAGE);
    assert_eq!(app.world().resource::<SlipSchedule>().len(), 1);
}

#[rstest]
fn invalid_layouts_leave_the_world_untouched() {
    let mut layout = Layout::demo_staircase();
    layout.blocks.push(layout.blocks[0]);
    let mut world = World::new();
    let err = layout.install(&mut world).expect_err("duplicate block");
    assert!(matches!(err, LayoutError::DuplicateBlock(_)));
    assert!(world.get_resource::<stumble::Terrain>().is_none());
}
