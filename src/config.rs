use anyhow::Result;
use glam::Vec3;
use scribe3d_core::{DropdownPolicy, SessionOptions};
use scribe3d_ui3d::SceneContext;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/editor.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Text the editor is mounted with; Cancel returns to it.
    pub initial_text: String,
    /// Cursor blink period in milliseconds.
    pub blink_interval_ms: u64,
    /// Maximum buffer length in characters. Unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    pub dropdown_policy: DropdownPolicy,
    pub viewport: ViewportConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position; the camera looks at the origin.
    pub eye: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: "Hello World!".to_string(),
            blink_interval_ms: 500,
            max_chars: None,
            dropdown_policy: DropdownPolicy::Independent,
            viewport: ViewportConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            fov_degrees: 75.0,
        }
    }
}

impl EditorConfig {
    /// Load editor configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<EditorConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    EditorConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Editor config not found at {}. Using defaults",
                        path.display()
                    );
                }
                EditorConfig::default()
            }
        }
    }

    /// Save editor configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            max_chars: self.max_chars,
            blink_interval: Duration::from_millis(self.blink_interval_ms),
            dropdown_policy: self.dropdown_policy,
        }
    }

    pub fn scene_context(&self) -> SceneContext {
        SceneContext::looking_at_origin(
            Vec3::from_array(self.camera.eye),
            self.camera.fov_degrees,
            (self.viewport.width, self.viewport.height),
        )
    }
}
