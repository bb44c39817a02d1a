//! Scene file loading and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use glint_core::{presets, SceneDescription};
use glint_renderer::RenderConfig;
use serde::{Deserialize, Serialize};

use crate::cli::{Args, Preset};

/// A scene plus the settings to render it with.
///
/// On disk the scene fields sit at the top level next to a `render` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(flatten)]
    pub scene: SceneDescription,
    #[serde(default)]
    pub render: RenderConfig,
}

impl ProjectFile {
    /// Built-in scene with its matching render settings.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Classic => Self {
                scene: presets::classic(),
                render: RenderConfig::classic(),
            },
            Preset::Supersampled => Self {
                scene: presets::supersampled(),
                render: RenderConfig::supersampled(),
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse project file")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let project = Self::from_json_str(&text)
            .with_context(|| format!("Invalid scene file {}", path.display()))?;
        log::info!(
            "Loaded {} spheres from {}",
            project.scene.spheres.len(),
            path.display()
        );
        Ok(project)
    }

    /// Resolve the project selected by the arguments, with overrides applied.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut project = match &args.scene {
            Some(path) => Self::load(path)?,
            None => {
                log::info!("Using {:?} preset", args.preset);
                Self::preset(args.preset)
            }
        };
        project.apply_overrides(args);
        Ok(project)
    }

    /// Apply command-line overrides on top of the file or preset settings.
    pub fn apply_overrides(&mut self, args: &Args) {
        let render = &mut self.render;

        if let Some(width) = args.width {
            render.width = width;
        }
        if let Some(height) = args.height {
            render.height = height;
        }
        if let Some(samples) = args.samples {
            render.samples_per_pixel = samples;
        }
        if args.jitter {
            render.jitter = true;
        }
        if args.no_jitter {
            render.jitter = false;
        }
        if let Some(gamma) = args.gamma {
            render.gamma = Some(gamma);
        }
        if args.no_gamma {
            render.gamma = None;
        }
        if args.ambient_always {
            render.ambient_always_added = true;
        }
        if args.shadow_ambient_only {
            render.ambient_always_added = false;
        }
        if let Some(max_depth) = args.max_depth {
            render.max_depth = max_depth;
        }
        if let Some(seed) = args.seed {
            render.seed = seed;
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project")
    }
}
