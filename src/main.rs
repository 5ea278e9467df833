//! Slot reel demo entry point.
//!
//! A single slot-machine reel written in Rust using:
//! - **raylib** for windowing, textures and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (window and `[reel]` settings) and apply CLI overrides
//! 2. Open the raylib window and load the symbol textures listed in the manifest
//! 3. Spawn the reel centered on screen and register its observers
//! 4. Each frame: advance time, read input, run the reel schedule, draw
//!
//! Space spins the reel, as does clicking inside the reel mask.
//!
//! A config file that is missing or cannot be read means built-in defaults;
//! one that fails to parse or validate stops the program with the error.
//!
//! # Assets
//!
//! The symbol manifest (`./assets/symbols.json` by default, `[symbols]
//! manifest` in the config) lists one texture per symbol. Every listed file
//! must exist; the shipped manifest points at the placeholder PNGs under
//! `./assets/textures/`. Run from the crate root or adjust the paths.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --winning cherry
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use raylib::ffi;
use raylib::prelude::*;
use std::path::PathBuf;

use slotreel::error::ReelError;
use slotreel::game;
use slotreel::resources::gameconfig::GameConfig;
use slotreel::resources::screensize::ScreenSize;
use slotreel::resources::symbolcatalog::SymbolManifest;
use slotreel::resources::texturestore::{TextureLoader, TextureStore};
use slotreel::resources::worldtime::WorldTime;
use slotreel::systems::input::reel_input_system;
use slotreel::systems::render::{render_reel_frame, render_reels};
use slotreel::systems::time::update_world_time;

/// Slot reel demo
#[derive(Parser)]
#[command(version, about = "A single pseudo-3D slot machine reel.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the wheel sequence; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Key of the symbol every spin lands on.
    #[arg(long, value_name = "KEY")]
    winning: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ReelError> {
    let mut config = GameConfig::with_path(&cli.config);
    match std::fs::read_to_string(&config.config_path) {
        Ok(text) => config.load_from_str(&text)?,
        Err(e) => info!("{}: {}; using defaults", config.config_path.display(), e),
    }
    config.reel.validate()?;

    let (mut rl, thread) = raylib::init()
        .size(config.window.width as i32, config.window.height as i32)
        .resizable()
        .title("Slot Reel")
        .build();
    unsafe {
        if config.window.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.window.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });

    let manifest = SymbolManifest::load_from_file(&config.manifest_path)?;
    let mut textures = TextureStore::new();
    {
        let mut loader = TextureLoader {
            rl: &mut rl,
            thread: &thread,
            store: &mut textures,
        };
        game::load_symbols(&mut world, &manifest, &mut loader)?;
    }
    info!("Loaded {} symbol textures", textures.len());
    world.insert_resource(textures);

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let reel = game::spawn_reel(&mut world, config.reel.clone(), &mut rng)?;
    if let Some(key) = cli.winning.as_deref() {
        game::set_winning_symbol(&mut world, reel, key)?;
    }
    let screen = *world.resource::<ScreenSize>();
    game::center_reel(&mut world, reel, screen);

    world.insert_resource(config);
    game::register_reel_observers(&mut world);

    let mut input = Schedule::default();
    input.add_systems(reel_input_system);
    let mut update = game::build_update_schedule();

    world.insert_non_send_resource(rl);

    // --------------- Main loop ---------------
    loop {
        let (dt, should_close, width, height) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (
                rl.get_frame_time(),
                rl.window_should_close(),
                rl.get_screen_width(),
                rl.get_screen_height(),
            )
        };
        if should_close {
            break;
        }

        // keep the reel centered when the window is resized
        let screen = ScreenSize {
            w: width,
            h: height,
        };
        if *world.resource::<ScreenSize>() != screen {
            world.insert_resource(screen);
            game::center_reel(&mut world, reel, screen);
        }

        update_world_time(&mut world, dt);
        input.run(&mut world);
        update.run(&mut world);
        world.clear_trackers();

        let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
            break;
        };
        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::DARKGRAY);
            render_reels(&mut world, &mut d);
            render_reel_frame(&mut world, &mut d);
        }
        world.insert_non_send_resource(rl);
    }

    info!("Bye");
    Ok(())
}
