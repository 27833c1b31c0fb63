use anyhow::Context;
use log::{info, warn};
use sphere_viewer::logging;
use sphere_viewer::window::{FrameLimiter, Window, WindowEvent};
use sphere_viewer::{Engine, ViewerConfig, ViewportEvent};

fn main() -> anyhow::Result<()> {
    let (config, ignored) = ViewerConfig::from_env();
    logging::init(config.log_level).context("failed to install logger")?;
    for message in &ignored {
        warn!("ignoring override {message}");
    }

    let mut engine = Engine::new(&config).context("failed to set up renderer")?;
    let mut window = Window::new(&config.title, config.width, config.height)
        .context("failed to open window")?;
    let mut limiter = FrameLimiter::new(&window, config.target_fps);

    let mut pixels = Vec::new();
    engine.write_argb8888(&mut pixels);

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                match engine.handle_event(ViewportEvent::Resized { width, height }) {
                    Ok(_) => {
                        if let Some(viewport) = engine.viewport() {
                            window.resize(viewport.width(), viewport.height())?;
                        }
                        engine.write_argb8888(&mut pixels);
                    }
                    Err(e) => warn!("ignoring resize: {e}"),
                }
            }
            WindowEvent::None => {}
        }

        window.present(&pixels)?;
        limiter.wait_and_get_delta(&window);
    }

    info!("exiting");
    Ok(())
}
