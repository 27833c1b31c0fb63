//! SDL2 display adapter.
//!
//! Owns the window and a streaming texture, turns SDL events into
//! [`WindowEvent`]s, and blits packed ARGB8888 frames to the screen. None of the
//! rendering core depends on this module.

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use thiserror::Error;

/// A failure reported by SDL.
#[derive(Debug, Error)]
#[error("display error: {0}")]
pub struct DisplayError(String);

fn display_err(e: impl ToString) -> DisplayError {
    DisplayError(e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    /// New drawable size as reported by SDL, not yet validated.
    Resize(i32, i32),
}

/// Map one SDL event to the viewer's events. Escape, Q and closing the
/// window all quit.
fn translate_event(event: &Event) -> WindowEvent {
    match event {
        Event::Quit { .. }
        | Event::KeyDown {
            keycode: Some(Keycode::Escape | Keycode::Q),
            ..
        } => WindowEvent::Quit,
        Event::Window {
            win_event: sdl2::event::WindowEvent::Resized(w, h),
            ..
        } => WindowEvent::Resize(*w, *h),
        _ => WindowEvent::None,
    }
}

/// Caps the redisplay rate of the static frame.
pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, target_fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_ms: 1000 / u64::from(target_fps.max(1)),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < self.frame_target_ms {
            let time_to_wait = self.frame_target_ms - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` must drop before `texture_creator`.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, DisplayError> {
        let sdl_context = sdl2::init().map_err(display_err)?;
        let video_subsystem = sdl_context.video().map_err(display_err)?;
        let timer_subsystem = sdl_context.timer().map_err(display_err)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(display_err)?;

        let canvas = window.into_canvas().build().map_err(display_err)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(display_err)?;

        let texture = Self::create_texture(&texture_creator, width, height)?;
        info!("opened {width}x{height} window {title:?}");

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, DisplayError> {
        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(display_err)
    }

    /// Drain pending events, returning the first one the viewer cares about.
    /// Anything after it stays queued for the next call.
    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match translate_event(&event) {
                WindowEvent::None => {}
                other => return other,
            }
        }
        WindowEvent::None
    }

    /// Upload a top-down ARGB8888 frame of the current size and present it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(display_err)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(display_err)?;
        self.canvas.present();
        Ok(())
    }

    /// Recreate the streaming texture for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), DisplayError> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Scancode::from_keycode(keycode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn quit_keys_and_close_quit() {
        assert_eq!(translate_event(&key_down(Keycode::Escape)), WindowEvent::Quit);
        assert_eq!(translate_event(&key_down(Keycode::Q)), WindowEvent::Quit);
        assert_eq!(
            translate_event(&Event::Quit { timestamp: 0 }),
            WindowEvent::Quit
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(translate_event(&key_down(Keycode::W)), WindowEvent::None);
    }

    #[test]
    fn resize_passes_raw_dimensions() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: sdl2::event::WindowEvent::Resized(640, -3),
        };
        assert_eq!(translate_event(&event), WindowEvent::Resize(640, -3));
    }
}
