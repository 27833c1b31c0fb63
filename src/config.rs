//! Viewer configuration.
//!
//! Defaults reproduce the fixed scene: a 32x16 sphere of radius 2, seven units
//! down -Z, viewed through a 90° frustum in a 512x512 window. A few values can
//! be overridden from the environment; there is no configuration file.

use log::LevelFilter;

use crate::camera::LookAtCamera;
use crate::colors::{self, Color};
use crate::error::RenderError;
use crate::mesh::SphereResolution;
use crate::pipeline::TransformPipeline;
use crate::projection::Projection;
use crate::transform::Transform;
use crate::viewport::Viewport;

pub const DEFAULT_TITLE: &str = "Sphere Viewer";
pub const DEFAULT_WIDTH: u32 = 512;
pub const DEFAULT_HEIGHT: u32 = 512;
pub const DEFAULT_FPS: u32 = 60;

/// Log level name, e.g. `debug`.
pub const ENV_LOG: &str = "SPHERE_VIEWER_LOG";
/// Initial window size as `WIDTHxHEIGHT`.
pub const ENV_SIZE: &str = "SPHERE_VIEWER_SIZE";
/// Sphere resolution as `LONGITUDExLATITUDE`.
pub const ENV_SEGMENTS: &str = "SPHERE_VIEWER_SEGMENTS";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub sphere: SphereResolution,
    pub model: Transform,
    pub camera: LookAtCamera,
    pub projection: Projection,
    pub background: Color,
    pub fill: Color,
    pub log_level: LevelFilter,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let mut model = Transform::new();
        model.set_position_xyz(0.0, 0.0, -7.0).set_scale_uniform(2.0);

        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_FPS,
            sphere: SphereResolution::default(),
            model,
            camera: LookAtCamera::default(),
            projection: Projection::default(),
            background: colors::BACKGROUND,
            fill: colors::FILL,
            log_level: LevelFilter::Info,
        }
    }
}

impl ViewerConfig {
    /// Defaults with overrides from the process environment.
    ///
    /// Returns the config plus one message per ignored override. Logging is not
    /// installed yet when this runs, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::with_overrides(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup.
    pub fn with_overrides(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(value) = lookup(ENV_LOG) {
            match value.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => ignored.push(format!("{ENV_LOG}: unknown log level {value:?}")),
            }
        }

        if let Some(value) = lookup(ENV_SIZE) {
            match parse_pair(&value).map(|(w, h)| Viewport::new(w, h)) {
                Some(Ok(viewport)) => {
                    config.width = viewport.width();
                    config.height = viewport.height();
                }
                Some(Err(e)) => ignored.push(format!("{ENV_SIZE}: {e}")),
                None => ignored.push(format!("{ENV_SIZE}: expected WIDTHxHEIGHT, got {value:?}")),
            }
        }

        if let Some(value) = lookup(ENV_SEGMENTS) {
            match parse_pair(&value).map(|(w, h)| SphereResolution::new(w, h)) {
                Some(Ok(sphere)) => config.sphere = sphere,
                Some(Err(e)) => ignored.push(format!("{ENV_SEGMENTS}: {e}")),
                None => ignored.push(format!(
                    "{ENV_SEGMENTS}: expected LONGITUDExLATITUDE, got {value:?}"
                )),
            }
        }

        (config, ignored)
    }

    pub fn viewport(&self) -> Result<Viewport, RenderError> {
        Viewport::new(self.width, self.height)
    }

    pub fn pipeline(&self) -> TransformPipeline {
        TransformPipeline::from_scene(&self.model, &self.camera, &self.projection)
    }
}

/// Parse `"AxB"` (case-insensitive separator, surrounding whitespace allowed).
fn parse_pair(value: &str) -> Option<(u32, u32)> {
    let (a, b) = value.trim().split_once(['x', 'X'])?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
