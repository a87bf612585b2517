//! Turret demo main entry point.
//!
//! A minimal top-down shooter written in Rust using:
//! - **raylib** for windowing, input, and 2D drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! One player sprite moves inside a bounded world while a stationary turret
//! tracks it and fires short-lived bullets. Everything renders as 16x16
//! tiles from one shared tileset, scaled up by a fixed camera zoom.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world, and resources
//! 2. Load the tileset, build the sprite atlas, spawn player and turret
//! 3. Each tick: poll input, aim and fire the turret, advance bullets,
//!    move the player, then redraw the scene
//! 4. Exit cleanly on Escape, the gamepad back button, or window close
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::systems::bullet::bullet_update;
use crate::systems::input::update_input_state;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_pass;
use crate::systems::turret::{turret_aim, turret_fire};

/// Background clear color (azure).
const BACKGROUND: Color = Color {
    r: 240,
    g: 255,
    b: 255,
    a: 255,
};

/// Turret demo
#[derive(Parser)]
#[command(version, about = "A tiny top-down turret shooter")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Turret Demo")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape goes through InputState so the gamepad back button can share
    // the same exit path.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(InputState::default());
    world.insert_resource(config);

    game::setup(&mut world, &mut rl, &thread);

    // One tick: the turret aims at the player's pre-move position, bullets
    // advance and expire, fire control runs, then the player moves. Bullets
    // spawned by turret_fire join the world at the end of the run.
    let mut update = Schedule::default();
    update.add_systems(turret_aim);
    update.add_systems(bullet_update.after(turret_aim));
    update.add_systems(turret_fire.after(bullet_update));
    update.add_systems(player_controller.after(turret_fire));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    log::info!("Entering main loop");
    while !rl.window_should_close() && !world.resource::<InputState>().quit_requested() {
        update_input_state(&mut world, &rl);
        update.run(&mut world);

        let camera = world.resource::<Camera2DRes>().0;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        let mut d2 = d.begin_mode2D(camera);
        render_pass(&mut world, &mut d2);
    }
    log::info!("Goodbye");
}
