//! Seven-segment display simulator for Windows/Desktop.
//!
//! Hosts two displays in a minesweeper-style header: a mines counter on the
//! left, an elapsed-seconds timer on the right and a "new game" button between
//! them.
//!
//! | Input          | Action                         |
//! |----------------|--------------------------------|
//! | Up / Down      | Unflag / flag a mine           |
//! | N, Space, click| New game                       |
//! | Z              | Toggle leading zeros           |
//! | Escape         | Quit                           |
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow widget notifications.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod button;
mod cli;
mod game;
mod host;
mod layout;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::LevelFilter;

use crate::cli::{Cli, format_color};
use crate::game::Game;
use crate::host::Host;
use crate::timing::FRAME_TIME;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let cli = Cli::parse();
    log::info!(
        "{} digits, foreground {}, background {}, {} mines",
        cli.digits,
        format_color(cli.foreground),
        format_color(cli.background),
        cli.mines
    );

    let mut host = Host::new(cli.display_style())?;
    let mut game = Game::new(cli.mines);
    host.show(&game)?;

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(host.window_size());
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new("Seven Segment Display", &output_settings);

    host.paint(&mut display)?;
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::Escape => break 'running,
                    Keycode::Up => game.unflag(),
                    Keycode::Down => game.flag(),
                    Keycode::N | Keycode::Space if !repeat => {
                        game.new_game();
                        log::info!("new game");
                    }
                    Keycode::Z if !repeat => {
                        host.toggle_leading_zeros()?;
                    }
                    _ => {}
                },
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => host.set_button_pressed(host.button().contains(point)),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    let clicked = host.button().is_pressed() && host.button().contains(point);
                    host.set_button_pressed(false);
                    if clicked {
                        game.new_game();
                        log::info!("new game");
                    }
                }
                _ => {}
            }
        }

        game.tick(frame_start);
        host.show(&game)?;

        if host.needs_paint() {
            let painted = host.paint(&mut display)?;
            log::trace!("repainted {painted} displays");
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    host.shutdown()?;
    log::info!("window closed");
    Ok(())
}
