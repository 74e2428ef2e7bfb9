//! Persistent player settings.

use crawl_core::FrameOptions;
use crawl_core::config::MAX_RAYS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFile {
    pub format_version: u32,
    /// `None` lets the display DPI decide.
    pub ui_scale: Option<f32>,
    pub show_minimap: bool,
    pub max_rays: u32,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            ui_scale: None,
            show_minimap: true,
            max_rays: MAX_RAYS,
        }
    }
}

impl SettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if settings.format_version != SETTINGS_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported settings format {}", settings.format_version),
            ));
        }
        Ok(settings)
    }

    /// Loads `path`, or returns defaults when it is missing or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                log::warn!("ignoring settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn frame_options(&self) -> FrameOptions {
        FrameOptions { show_minimap: self.show_minimap, max_rays: self.max_rays.clamp(1, MAX_RAYS) }
    }
}
