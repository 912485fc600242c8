use crate::domain::ports::MapSurface;
use crate::domain::render::{DisplayTier, SurfaceUpdate, ZoneStyle};
use crate::utils::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Holds at most one surface for the session and releases it when dropped.
pub struct SurfaceSlot<S: MapSurface> {
    surface: Option<S>,
}

impl<S: MapSurface> SurfaceSlot<S> {
    pub fn new() -> Self {
        Self { surface: None }
    }

    /// Creates and mounts the surface. A second call is a no-op and returns `Ok(false)`.
    pub fn acquire<F>(&mut self, create: F, zones: &[ZoneStyle]) -> Result<bool>
    where
        F: FnOnce() -> Result<S>,
    {
        if self.surface.is_some() {
            tracing::debug!("Map surface already acquired");
            return Ok(false);
        }

        let mut surface = create()?;
        if let Err(e) = surface.mount(zones) {
            surface.release();
            return Err(e);
        }

        tracing::info!("Map surface mounted with {} zones", zones.len());
        self.surface = Some(surface);
        Ok(true)
    }

    pub fn is_acquired(&self) -> bool {
        self.surface.is_some()
    }

    pub fn get_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn release(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
            tracing::debug!("Map surface released");
        }
    }
}

impl<S: MapSurface> Default for SurfaceSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSurface> Drop for SurfaceSlot<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints every frame instead of drawing it. Used by the CLI.
pub struct ConsoleSurface<W: Write> {
    out: Option<W>,
    format: OutputFormat,
    frames: usize,
}

impl ConsoleSurface<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out: Some(out),
            format,
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    fn writer(&mut self) -> Result<&mut W> {
        self.out.as_mut().ok_or_else(|| AtlasError::SurfaceError {
            message: "console surface already released".to_string(),
        })
    }

    fn write_text(&mut self, update: &SurfaceUpdate) -> Result<()> {
        let frame = self.frames;
        let highlighted = update.ids_in(DisplayTier::Highlighted).join(", ");
        let base = update.ids_in(DisplayTier::Base).join(", ");
        let filtered = update.ids_in(DisplayTier::FilteredOut).join(", ");
        let labels = update
            .markers
            .iter()
            .filter_map(|marker| {
                marker
                    .label
                    .as_ref()
                    .map(|label| format!("{} ({})", marker.id, label))
            })
            .collect::<Vec<_>>()
            .join(", ");

        let out = self.writer()?;
        writeln!(out, "frame {}", frame)?;
        writeln!(out, "  highlighted:  {}", highlighted)?;
        writeln!(out, "  base:         {}", base)?;
        writeln!(out, "  filtered-out: {}", filtered)?;
        writeln!(out, "  labels:       {}", labels)?;
        Ok(())
    }
}

impl<W: Write> MapSurface for ConsoleSurface<W> {
    fn mount(&mut self, zones: &[ZoneStyle]) -> Result<()> {
        let format = self.format;
        let out = self.writer()?;
        match format {
            OutputFormat::Text => {
                for zone in zones {
                    writeln!(
                        out,
                        "zone {} [{}] {}",
                        zone.name.as_deref().unwrap_or("-"),
                        zone.color,
                        zone.id.as_deref().unwrap_or("")
                    )?;
                }
            }
            OutputFormat::Json => {
                let line = serde_json::json!({ "zones": zones });
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, update: &SurfaceUpdate) -> Result<()> {
        self.frames += 1;
        match self.format {
            OutputFormat::Text => self.write_text(update)?,
            OutputFormat::Json => {
                let frame = self.frames;
                let out = self.writer()?;
                let line = serde_json::json!({ "frame": frame, "markers": update.markers });
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        if let Some(mut out) = self.out.take() {
            if let Err(e) = out.flush() {
                tracing::warn!("Failed to flush console surface: {}", e);
            }
        }
    }
}
