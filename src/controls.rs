use lifegrid::config::ControlsConfig;
use lifegrid::{Intent, Preset};
use macroquad::prelude::*;

const BUTTON_WIDTH: f32 = 96.0;
const BUTTON_HEIGHT: f32 = 28.0;
const SLIDER_WIDTH: f32 = 220.0;
const SLIDER_HEIGHT: f32 = 16.0;
const MARGIN: f32 = 8.0;

/// Height of the control panel below the surface
pub const PANEL_HEIGHT: u32 = 110;

/// What the control panel asks the main loop to do
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Intent(Intent),
    CopyGrid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ButtonKind {
    StartStop,
    Step,
    Reset,
    Random,
    Pattern,
    NextPreset,
    Copy,
}

struct Button {
    rect: Rect,
    kind: ButtonKind,
}

/// Horizontal slider over an integer range
struct Slider {
    label: &'static str,
    rect: Rect,
    min: u32,
    max: u32,
    value: u32,
}

impl Slider {
    fn value_at(&self, x: f32) -> u32 {
        let t = ((x - self.rect.x) / self.rect.w).clamp(0.0, 1.0);
        self.min + ((self.max - self.min) as f32 * t).round() as u32
    }

    /// New value if the pointer is dragging inside the track
    fn drag(&mut self, mouse: Vec2) -> Option<u32> {
        if !is_mouse_button_down(MouseButton::Left) || !self.rect.contains(mouse) {
            return None;
        }
        self.set(self.value_at(mouse.x))
    }

    fn set(&mut self, value: u32) -> Option<u32> {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    fn step_by(&mut self, delta: i64) -> Option<u32> {
        let next = (self.value as i64 + delta).clamp(self.min as i64, self.max as i64);
        self.set(next as u32)
    }

    fn draw(&self, unit: &str) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(60, 60, 60, 255));
        let span = (self.max - self.min).max(1) as f32;
        let knob_x = r.x + r.w * (self.value - self.min) as f32 / span;
        draw_rectangle(knob_x - 3.0, r.y - 2.0, 6.0, r.h + 4.0, WHITE);
        draw_text(
            &format!("{}: {}{}", self.label, self.value, unit),
            r.x + r.w + MARGIN,
            r.y + r.h - 2.0,
            20.0,
            WHITE,
        );
    }
}

/// Buttons, sliders and keyboard shortcuts below the surface
pub struct ControlPanel {
    surface_width: f32,
    surface_height: f32,
    buttons: Vec<Button>,
    speed: Slider,
    zoom: Slider,
    preset: Preset,
}

impl ControlPanel {
    pub fn new(
        surface_width: u32,
        surface_height: u32,
        controls: &ControlsConfig,
        tick_interval_ms: u32,
        cell_size: u32,
    ) -> Self {
        let top = surface_height as f32 + MARGIN;
        let kinds = [
            ButtonKind::StartStop,
            ButtonKind::Step,
            ButtonKind::Reset,
            ButtonKind::Random,
            ButtonKind::Pattern,
            ButtonKind::NextPreset,
            ButtonKind::Copy,
        ];
        let buttons = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| Button {
                rect: Rect::new(
                    MARGIN + i as f32 * (BUTTON_WIDTH + MARGIN),
                    top,
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                ),
                kind,
            })
            .collect();

        let slider_top = top + BUTTON_HEIGHT + MARGIN * 2.0;
        ControlPanel {
            surface_width: surface_width as f32,
            surface_height: surface_height as f32,
            buttons,
            speed: Slider {
                label: "Interval",
                rect: Rect::new(MARGIN, slider_top, SLIDER_WIDTH, SLIDER_HEIGHT),
                min: controls.min_interval_ms,
                max: controls.max_interval_ms,
                value: tick_interval_ms.clamp(controls.min_interval_ms, controls.max_interval_ms),
            },
            zoom: Slider {
                label: "Cell",
                rect: Rect::new(
                    MARGIN * 3.0 + SLIDER_WIDTH + 140.0,
                    slider_top,
                    SLIDER_WIDTH,
                    SLIDER_HEIGHT,
                ),
                min: controls.min_cell_size,
                max: controls.max_cell_size,
                value: cell_size.clamp(controls.min_cell_size, controls.max_cell_size),
            },
            preset: Preset::NameGlyph,
        }
    }

    /// Bring slider knobs back in line with the controller after a rejected change
    pub fn sync(&mut self, tick_interval_ms: u32, cell_size: u32) {
        self.speed.value = tick_interval_ms.clamp(self.speed.min, self.speed.max);
        self.zoom.value = cell_size.clamp(self.zoom.min, self.zoom.max);
    }

    /// Translate this frame's mouse and keyboard input into events
    pub fn poll(&mut self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let (mx, my) = mouse_position();
        let mouse = vec2(mx, my);

        if is_mouse_button_pressed(MouseButton::Left) {
            if my < self.surface_height && mx < self.surface_width {
                events.push(UiEvent::Intent(Intent::Click { x: mx, y: my }));
            } else if let Some(kind) = self.buttons.iter().find(|b| b.rect.contains(mouse)).map(|b| b.kind) {
                self.press(kind, &mut events);
            }
        }

        if let Some(interval_ms) = self.speed.drag(mouse) {
            events.push(UiEvent::Intent(Intent::ChangeSpeed { interval_ms }));
        }
        if let Some(cell_size) = self.zoom.drag(mouse) {
            events.push(UiEvent::Intent(Intent::ChangeZoom { cell_size }));
        }

        let shortcuts = [
            (KeyCode::Space, ButtonKind::StartStop),
            (KeyCode::N, ButtonKind::Step),
            (KeyCode::R, ButtonKind::Reset),
            (KeyCode::G, ButtonKind::Random),
            (KeyCode::P, ButtonKind::Pattern),
            (KeyCode::Tab, ButtonKind::NextPreset),
            (KeyCode::C, ButtonKind::Copy),
        ];
        for (key, kind) in shortcuts {
            if is_key_pressed(key) {
                self.press(kind, &mut events);
            }
        }

        // Up is faster: shorter interval
        if is_key_pressed(KeyCode::Up) {
            if let Some(interval_ms) = self.speed.step_by(-10) {
                events.push(UiEvent::Intent(Intent::ChangeSpeed { interval_ms }));
            }
        }
        if is_key_pressed(KeyCode::Down) {
            if let Some(interval_ms) = self.speed.step_by(10) {
                events.push(UiEvent::Intent(Intent::ChangeSpeed { interval_ms }));
            }
        }
        if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            if let Some(cell_size) = self.zoom.step_by(1) {
                events.push(UiEvent::Intent(Intent::ChangeZoom { cell_size }));
            }
        }
        if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            if let Some(cell_size) = self.zoom.step_by(-1) {
                events.push(UiEvent::Intent(Intent::ChangeZoom { cell_size }));
            }
        }

        events
    }

    fn press(&mut self, kind: ButtonKind, events: &mut Vec<UiEvent>) {
        let event = match kind {
            ButtonKind::StartStop => UiEvent::Intent(Intent::StartStop),
            ButtonKind::Step => UiEvent::Intent(Intent::Step),
            ButtonKind::Reset => UiEvent::Intent(Intent::Reset),
            ButtonKind::Random => UiEvent::Intent(Intent::Randomize),
            ButtonKind::Pattern => UiEvent::Intent(Intent::SeedPattern { preset: self.preset }),
            ButtonKind::NextPreset => {
                self.preset = self.preset.next();
                return;
            }
            ButtonKind::Copy => UiEvent::CopyGrid,
        };
        events.push(event);
    }

    /// Draw buttons, sliders and the status line
    pub fn draw(&self, toggle_label: &str, step_count: u64, live_cells: usize) {
        for button in &self.buttons {
            let label = match button.kind {
                ButtonKind::StartStop => toggle_label.to_string(),
                ButtonKind::Step => "Step".to_string(),
                ButtonKind::Reset => "Reset".to_string(),
                ButtonKind::Random => "Random".to_string(),
                ButtonKind::Pattern => self.preset.name().to_string(),
                ButtonKind::NextPreset => "Next".to_string(),
                ButtonKind::Copy => "Copy".to_string(),
            };
            let r = button.rect;
            draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(70, 70, 90, 255));
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, LIGHTGRAY);
            draw_text(&label, r.x + 8.0, r.y + r.h - 9.0, 20.0, WHITE);
        }

        self.speed.draw(" ms");
        self.zoom.draw(" px");

        let status = format!(
            "Steps: {}   Live: {}   [Space] start/stop  [N] step  [R] reset  [G] random  [P] pattern  [Tab] next  [C] copy  [Esc] quit",
            step_count, live_cells
        );
        draw_text(&status, MARGIN, self.surface_height + PANEL_HEIGHT as f32 - MARGIN, 16.0, WHITE);
    }
}
