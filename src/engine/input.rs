use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

/// Edge event captured during one frame's pump. Press/release edges drive
/// jump start/stop; held keys are polled separately for the move axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    KeyPressed(Scancode),
    KeyReleased(Scancode),
    /// A finger touched the screen. Mapped to jump for touch play.
    TouchStarted,
    /// A finger left the screen.
    TouchStopped,
}

pub struct InputState {
    pub keys: HashSet<Scancode>,
    /// Edges seen this frame, in arrival order. Cleared on every update.
    pub events: Vec<InputEvent>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => self.key_down(sc),
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => self.key_up(sc),
                Event::FingerDown { .. } => self.events.push(InputEvent::TouchStarted),
                Event::FingerUp { .. } => self.events.push(InputEvent::TouchStopped),
                _ => {}
            }
        }
    }

    /// Register a key press. The held set filters OS key repeat: only the
    /// first press emits an edge.
    pub fn key_down(&mut self, sc: Scancode) {
        if self.keys.insert(sc) {
            self.events.push(InputEvent::KeyPressed(sc));
        }
    }

    pub fn key_up(&mut self, sc: Scancode) {
        if self.keys.remove(&sc) {
            self.events.push(InputEvent::KeyReleased(sc));
        }
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    /// Horizontal move axis from the held keys: A/Left = -1, D/Right = +1.
    /// Opposite keys held together cancel out.
    pub fn move_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.is_key_held(Scancode::A) || self.is_key_held(Scancode::Left) {
            axis -= 1.0;
        }
        if self.is_key_held(Scancode::D) || self.is_key_held(Scancode::Right) {
            axis += 1.0;
        }
        axis
    }
}
