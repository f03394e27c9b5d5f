// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Weather dashboard simulator.
//!
//! Opens a simulator window and runs the weather view from `weather-common`:
//! a loading overlay while the device capability is probed, then the current
//! conditions, four metric cards and a scrollable forecast strip, all tinted
//! by a temperature-driven theme.
//!
//! # Frame Loop
//!
//! Single-threaded and cooperative, one iteration per frame:
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐   ┌────────────┐
//! │ view.tick  │──►│ RenderState  │──►│ draw_view      │──►│ window     │
//! │ (callbacks)│   │ skip / clear │   │ (if not skip)  │   │ update +   │
//! └────────────┘   └──────────────┘   └────────────────┘   │ events     │
//!       ▲                                                  └─────┬──────┘
//!       └──────────────── clock.wait_for_frame() ◄───────────────┘
//! ```
//!
//! The capability probe and the atmosphere effect both ride on frame
//! callbacks fired by `view.tick`, so the loop itself never blocks on them.
//!
//! # Controls (Simulator Mode)
//!
//! See [`controls`]. Closing the window tears the view down and exits.
//!
//! # Logging
//!
//! `RUST_LOG` sets the verbosity (default `info`). `RUST_LOG=debug` shows the
//! probe's frame count and measured FPS.

mod cli;
mod clock;
mod controls;
mod error;
mod loader;

use std::process::ExitCode;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};
use weather_common::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use weather_common::render::{FrameAction, RenderState};
use weather_common::style::{StyleProvider, ThemeStyles};
use weather_common::widgets::draw_view;
use weather_common::{FrameClock, WeatherView};

use crate::cli::Args;
use crate::clock::InstantClock;
use crate::controls::{apply, control_for_key, control_for_wheel};
use crate::error::Result;
use crate::loader::load_snapshot;

fn main() -> ExitCode {
    // Initialize logging (RUST_LOG overrides the default level)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    args.validate()?;
    let snapshot = args.snapshot.as_deref().map(load_snapshot).transpose()?;
    if snapshot.is_none() {
        info!("no snapshot given, showing fallback data");
    }

    let mut view = WeatherView::new(snapshot, args.device_memory);
    view.mount();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Weather", &output_settings);
    let screen = Rectangle::new(Point::zero(), display.size());

    let styles = ThemeStyles::default();
    let mut render_state = RenderState::new();
    let mut clock = InstantClock::new(FRAME_TIME);

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    'frames: loop {
        let outcome = view.tick(clock.now_ms());
        let style = styles.style(&view);

        let action = render_state.begin_frame(&view, &outcome);
        if action == FrameAction::FullClear {
            display.clear(style.background).ok();
        }
        if action.draws() {
            draw_view(&mut display, &view, &style);
        }
        render_state.end_frame();
        window.update(&display);

        for ev in window.events() {
            let control = match ev {
                SimulatorEvent::Quit => break 'frames,
                SimulatorEvent::MouseMove { point } => {
                    view.pointer_moved(point, screen);
                    None
                }
                SimulatorEvent::MouseWheel { scroll_delta, .. } => control_for_wheel(scroll_delta.y),
                SimulatorEvent::KeyDown { keycode, .. } => control_for_key(keycode),
                _ => None,
            };
            if let Some(control) = control {
                apply(&mut view, control);
            }
        }

        clock.wait_for_frame();
    }

    view.teardown();
    info!("window closed");
    Ok(())
}
