mod host;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;

use dungeon_caster::core::maze::{GridMap, load_maze};
use dungeon_caster::{Game, Tuning};
use host::audio_manager::AudioManager;
use host::process_events::process_events;
use host::surface::RaylibSurface;

#[derive(Parser, Debug)]
#[command(version, about = "First-person tile dungeon ray caster")]
struct Args {
    /// Map file: `#` or `1` for walls, space, `.` or `0` for floor.
    #[arg(long)]
    map: Option<PathBuf>,

    /// TOML file overriding tuning values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in the top-down debug view (toggle with D).
    #[arg(long)]
    debug: bool,

    /// Show the FPS counter.
    #[arg(long)]
    fps: bool,

    #[arg(long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.config {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let maze = match &args.map {
        Some(path) => load_maze(path, tuning.tile_size)?,
        None => GridMap::reference(tuning.tile_size)?,
    };
    let mut game = Game::new(maze, tuning).context("invalid dungeon setup")?;
    game.debug = args.debug;

    let (mut window, raylib_thread) = raylib::init()
        .size(game.tuning.viewport_width as i32, game.tuning.viewport_height as i32)
        .title("Dungeon")
        .build();
    window.set_target_fps(60);

    let mut audio = if args.mute { None } else { AudioManager::new() };
    match audio.as_mut() {
        Some(a) => a.load_sfx_auto(),
        None if !args.mute => log::warn!("no audio output device, running silent"),
        None => {}
    }

    while !window.window_should_close() {
        let dt = window.get_frame_time();
        let input = process_events(&window);
        let event = game.update(dt, &input);
        if let (Some(a), Some(ev)) = (audio.as_mut(), event) {
            a.on_motion(ev);
        }

        let fps_now = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        game.draw(&mut RaylibSurface::new(&mut d));
        if args.fps {
            d.draw_text(&format!("FPS: {}", fps_now), 10, 10, 20, Color::WHITE);
        }
    }
    Ok(())
}
