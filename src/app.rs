use glam::Vec2;
use hecs::{Entity, World};
use sdl2::keyboard::Scancode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::Sdl;

use crate::camera::Camera;
use crate::components::{AnimationFsm, ClipStore, Facing, Flipbook, Position};
use crate::engine::input::{InputEvent, InputState};
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::systems::{
    animation_system, apply_move_input, dispatch_move_events, facing_system, flipbook_system,
    jump_requested, movement_system, request_stop_jump, GROUND_Y, MOVE_DT,
};

// Placeholder sprite proportions, sized like the character's capsule:
// 40 cm half-width, 192 cm tall, anchored at the feet.
const SPRITE_HALF_W: f32 = 40.0;
const SPRITE_H: f32 = 192.0;
const NOSE_SIZE: f32 = 16.0;

pub struct GameApp {
    world: World,
    clips: ClipStore,
    player_entity: Entity,
    camera: Camera,
    move_accum: f32,
}

impl GameApp {
    pub fn new(world: World, clips: ClipStore, player_entity: Entity) -> Self {
        Self {
            world,
            clips,
            player_entity,
            camera: Camera::new(),
            move_accum: 0.0,
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) {
        let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.quit {
                break;
            }

            self.route_input(&input);
            self.update_systems(timer.dt);
            self.render(window);
            window.present();
        }
    }

    /// Drive the simulation without a window for `seconds`, on a scripted
    /// input pattern: run back and forth and hop every two seconds. Covers
    /// the whole frame loop except drawing on machines with no display.
    pub fn run_headless(&mut self, seconds: f32) {
        let frames = (seconds / MOVE_DT).ceil() as u64;
        for frame in 0..frames {
            let t = frame as f32 * MOVE_DT;
            let axis = if t % 6.0 < 3.0 { 1.0 } else { -1.0 };
            apply_move_input(&mut self.world, self.player_entity, axis);
            if frame % 120 == 30 {
                jump_requested(&mut self.world, self.player_entity);
            }
            if frame % 120 == 50 {
                request_stop_jump(&mut self.world, self.player_entity);
            }
            self.update_systems(MOVE_DT);
        }

        if let Ok(fsm) = self.world.get::<&AnimationFsm>(self.player_entity) {
            log::info!("headless run finished in {:?}", fsm.current);
        }
    }

    /// Jump on Space press or a touch; releasing either cuts the jump short.
    /// The move axis is re-read from the held keys every frame.
    fn route_input(&mut self, input: &InputState) {
        for event in &input.events {
            match event {
                InputEvent::KeyPressed(Scancode::Space) | InputEvent::TouchStarted => {
                    jump_requested(&mut self.world, self.player_entity);
                }
                InputEvent::KeyReleased(Scancode::Space) | InputEvent::TouchStopped => {
                    request_stop_jump(&mut self.world, self.player_entity);
                }
                _ => {}
            }
        }
        apply_move_input(&mut self.world, self.player_entity, input.move_axis());
    }

    /// Frame order: fixed movement steps first, their edges dispatched to
    /// the animation machines, then flipbook advance, state re-derivation,
    /// facing, camera.
    fn update_systems(&mut self, dt: f32) {
        let events = movement_system(&mut self.world, &mut self.move_accum, dt);
        dispatch_move_events(&mut self.world, &events);

        flipbook_system(&mut self.world, &self.clips, dt);
        animation_system(&mut self.world);
        facing_system(&mut self.world);

        let target = self
            .world
            .get::<&Position>(self.player_entity)
            .map(|p| p.0)
            .unwrap_or(Vec2::ZERO);
        self.camera.follow(target);
    }

    fn render(&mut self, window: &mut GameWindow) {
        let (w, h) = window.size();
        window.clear(Color::RGB(24, 26, 34));
        let upp = self.camera.units_per_pixel(w);

        // Ground: one strip from the ground line down to the bottom edge.
        let (_, ground_y) = self
            .camera
            .world_to_screen(Vec2::new(self.camera.center.x, GROUND_Y), w, h);
        if ground_y < h as i32 {
            let canvas = window.canvas();
            canvas.set_draw_color(Color::RGB(46, 64, 42));
            let _ = canvas.fill_rect(Rect::new(
                0,
                ground_y.max(0),
                w,
                (h as i32 - ground_y.max(0)) as u32,
            ));
        }

        // Characters: one quad per flipbook, tinted by the bound clip and
        // shaded by frame position so playback is visible without sprite
        // sheets, plus a head-high nose square marking the facing.
        for (_e, (pos, flipbook, facing)) in self
            .world
            .query::<(&Position, &Flipbook, &Facing)>()
            .iter()
        {
            let clip = self.clips.get(flipbook.clip());
            let ramp = if clip.frame_count > 1 {
                flipbook.frame() as f32 / (clip.frame_count - 1) as f32
            } else {
                0.0
            };
            let shade = 0.55 + 0.45 * ramp;
            let color = Color::RGB(
                (clip.tint.x * shade * 255.0) as u8,
                (clip.tint.y * shade * 255.0) as u8,
                (clip.tint.z * shade * 255.0) as u8,
            );

            let top_left = Vec2::new(pos.0.x - SPRITE_HALF_W, pos.0.y + SPRITE_H);
            let (sx, sy) = self.camera.world_to_screen(top_left, w, h);
            let sprite_w = ((2.0 * SPRITE_HALF_W) / upp).round().max(1.0) as u32;
            let sprite_h = (SPRITE_H / upp).round().max(1.0) as u32;

            let canvas = window.canvas();
            canvas.set_draw_color(color);
            let _ = canvas.fill_rect(Rect::new(sx, sy, sprite_w, sprite_h));

            let nose_x = match facing {
                Facing::Right => pos.0.x + SPRITE_HALF_W,
                Facing::Left => pos.0.x - SPRITE_HALF_W - NOSE_SIZE,
            };
            let nose_top_left = Vec2::new(nose_x, pos.0.y + SPRITE_H * 0.75);
            let (nx, ny) = self.camera.world_to_screen(nose_top_left, w, h);
            let nose_px = (NOSE_SIZE / upp).round().max(1.0) as u32;
            canvas.set_draw_color(Color::RGB(235, 235, 235));
            let _ = canvas.fill_rect(Rect::new(nx, ny, nose_px, nose_px));
        }
    }
}
