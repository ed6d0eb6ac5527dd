mod controls;
mod surface;

use arboard::Clipboard;
use controls::{ControlPanel, UiEvent, PANEL_HEIGHT};
use lifegrid::config::Config;
use lifegrid::{FrameTimer, Grid, IntentLog, RunConfig, RunController};
use macroquad::prelude::*;
use surface::{MacroquadSurface, Palette};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

type Controller = RunController<FrameTimer, MacroquadSurface>;

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.surface.width as i32,
        window_height: (config.surface.height + PANEL_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn build_controller(config: &Config) -> lifegrid::Result<Controller> {
    let run = RunConfig::new(config.simulation.cell_size, config.simulation.tick_interval_ms)?;
    let surface = MacroquadSurface::new(
        config.surface.width,
        config.surface.height,
        Palette::from_config(&config.visual),
    );

    let mut controller = RunController::new(
        config.surface.width,
        config.surface.height,
        run,
        FrameTimer::new(),
        surface,
    )?
    .with_alive_probability(config.simulation.alive_probability)?;

    if let Some(seed) = config.simulation.seed {
        controller = controller.with_seed(seed);
    }
    if config.logging.enable_intent_log {
        controller = controller.with_intent_log(IntentLog::new());
    }
    Ok(controller)
}

/// Copy the grid as '#'/'.' text to the system clipboard
fn copy_to_clipboard(grid: &Grid) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(grid.to_text()) {
                warn!(error = %e, "failed to copy grid to clipboard");
            } else {
                info!(rows = grid.rows, cols = grid.cols, "grid copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            warn!(error = %e, "failed to access clipboard");
        }
    }
}

fn save_intent_log(controller: &Controller, config: &Config) {
    let Some(log) = controller.intent_log() else {
        return;
    };
    info!("{}", log.summary());
    match log.save_to_file(&config.logging.intent_log_path) {
        Ok(()) => info!(path = %config.logging.intent_log_path, "intent log saved"),
        Err(e) => warn!(error = %e, "failed to save intent log"),
    }
}

async fn run(config: Config) {
    let mut controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(e) => {
            error!(error = %e, "cannot start simulation");
            return;
        }
    };

    let mut panel = ControlPanel::new(
        config.surface.width,
        config.surface.height,
        &config.controls,
        controller.tick_interval_ms(),
        controller.cell_size(),
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        for event in panel.poll() {
            match event {
                UiEvent::Intent(intent) => controller.dispatch(intent),
                UiEvent::CopyGrid => copy_to_clipboard(controller.grid()),
            }
        }
        panel.sync(controller.tick_interval_ms(), controller.cell_size());

        let due = controller.timer_mut().poll(get_time() * 1000.0);
        for id in due {
            controller.on_tick(id);
        }

        clear_background(Color::from_rgba(20, 20, 20, 255));
        controller.renderer().present();
        panel.draw(
            controller.toggle_label(),
            controller.step_count(),
            controller.grid().live_count(),
        );

        next_frame().await
    }

    save_intent_log(&controller, &config);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = Config::load();
    macroquad::Window::from_config(window_conf(&config), run(config));
}
