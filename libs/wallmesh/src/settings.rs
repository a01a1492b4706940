//! # Pipeline Settings
//!
//! Serializable knobs for one pipeline run. Missing fields fall back to the
//! workspace defaults in `config::constants`, so a settings file only has to
//! name what it changes:
//!
//! ```toml
//! height = 2.5
//!
//! [export]
//! axes = ["+x", "-z", "+y"]
//! one_based = false
//! ```

use crate::error::{WallMeshError, WallMeshResult};
use crate::export::AxisRemap;
use crate::extrude::{ExtrudeParams, FaceStyle};
use crate::grid::ScanOrder;
use config::constants::{DEFAULT_CELL_SIZE, DEFAULT_EXTRUSION_HEIGHT, DEFAULT_ONE_BASED_INDICES};
use serde::{Deserialize, Serialize};

/// Output formatting settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Internal → output axis mapping
    pub axes: AxisRemap,
    /// Write 1-based face indices
    pub one_based: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            axes: AxisRemap::default(),
            one_based: DEFAULT_ONE_BASED_INDICES,
        }
    }
}

/// Settings for [`build_wall_mesh`](crate::build_wall_mesh).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Wall height
    pub height: f64,
    /// Output units per grid cell
    pub cell_size: f64,
    /// Wall face style
    pub face_style: FaceStyle,
    /// Emit the top cap
    pub caps: bool,
    /// Lattice scan order used by the tracer
    pub scan_order: ScanOrder,
    /// Output formatting
    pub export: ExportSettings,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            height: DEFAULT_EXTRUSION_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            face_style: FaceStyle::default(),
            caps: true,
            scan_order: ScanOrder::default(),
            export: ExportSettings::default(),
        }
    }
}

impl PipelineSettings {
    /// Checks numeric fields before any geometry is built.
    pub fn validate(&self) -> WallMeshResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(WallMeshError::InvalidHeight(self.height));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(WallMeshError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Extrusion parameters derived from these settings.
    pub fn extrude_params(&self) -> ExtrudeParams {
        ExtrudeParams {
            height: self.height,
            cell_size: self.cell_size,
            style: self.face_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_config() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.height, DEFAULT_EXTRUSION_HEIGHT);
        assert_eq!(settings.cell_size, DEFAULT_CELL_SIZE);
        assert!(settings.caps);
        assert!(settings.export.one_based);
        assert_eq!(settings.export.axes, AxisRemap::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let settings = PipelineSettings {
            height: 0.0,
            ..PipelineSettings::default()
        };
        assert!(matches!(settings.validate(), Err(WallMeshError::InvalidHeight(_))));

        let settings = PipelineSettings {
            cell_size: -2.0,
            ..PipelineSettings::default()
        };
        assert!(matches!(settings.validate(), Err(WallMeshError::InvalidCellSize(_))));
    }

    #[test]
    fn test_partial_toml() {
        let settings: PipelineSettings = toml::from_str(
            r#"
            height = 2.5
            face_style = "triangles"

            [export]
            axes = ["+x", "-z", "+y"]
            one_based = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.height, 2.5);
        assert_eq!(settings.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(settings.face_style, FaceStyle::Triangles);
        assert_eq!(settings.export.axes.to_string(), "+x,-z,+y");
        assert!(!settings.export.one_based);
    }

    #[test]
    fn test_toml_rejects_reused_axis() {
        let result: Result<PipelineSettings, _> = toml::from_str("[export]\naxes = [\"+x\", \"+x\", \"+y\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = PipelineSettings {
            scan_order: ScanOrder::ColumnMajor,
            ..PipelineSettings::default()
        };
        let text = toml::to_string(&settings).unwrap();
        assert!(text.contains("scan_order = \"column_major\""));
        let back: PipelineSettings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
