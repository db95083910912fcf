//! `flatkit.yaml` loading and resolution of templates, layout and output folder.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use flatkit_io_xlsx::SpecTemplateLayout;
use flatkit_shape::EnumProductKind;
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const C_CONFIG_FILE_NAME: &str = "flatkit.yaml";

/// Template workbook per product family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    pub decals: Option<PathBuf>,
    pub wallpapers: Option<PathBuf>,
}

/// Root of `flatkit.yaml`. Every field is optional; relative paths are taken
/// from the config file's folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub templates: TemplatesConfig,
    /// Folder receiving generated workbooks.
    pub dir_out: Option<PathBuf>,
    /// Template header row (1-based).
    pub row_header: Option<u32>,
    /// First template data row (1-based).
    pub row_data_start: Option<u32>,

    #[serde(skip)]
    dir_base: Option<PathBuf>,
}

impl AppConfig {
    /// `path_explicit` must exist; otherwise `./flatkit.yaml` is used when
    /// present, else built-in defaults.
    pub fn load(path_explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = path_explicit {
            return Self::load_from_path(path);
        }
        let path_local = Path::new(C_CONFIG_FILE_NAME);
        if path_local.is_file() {
            return Self::load_from_path(path_local);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.dir_base = path.parent().map(Path::to_path_buf);
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.row_header == Some(0) || self.row_data_start == Some(0) {
            bail!("row_header and row_data_start are 1-based");
        }
        if let (Some(row_header), Some(row_data_start)) = (self.row_header, self.row_data_start)
            && row_data_start <= row_header
        {
            bail!("row_data_start ({row_data_start}) must be below row_header ({row_header})");
        }
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.dir_base {
            Some(dir_base) if path.is_relative() => dir_base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Configured template for `kind`, else `c_default` as given.
    pub fn template_for(&self, kind: EnumProductKind, c_default: &str) -> PathBuf {
        let path_configured = match kind {
            EnumProductKind::Decals => self.templates.decals.as_deref(),
            EnumProductKind::Wallpapers => self.templates.wallpapers.as_deref(),
        };
        path_configured
            .map(|path| self.resolve(path))
            .unwrap_or_else(|| PathBuf::from(c_default))
    }

    /// `layout` with the configured header and data rows applied.
    pub fn layout_for(&self, layout: SpecTemplateLayout) -> Result<SpecTemplateLayout> {
        let layout = SpecTemplateLayout {
            row_header: self.row_header.unwrap_or(layout.row_header),
            row_data_start: self.row_data_start.unwrap_or(layout.row_data_start),
            ..layout
        };
        if layout.row_data_start <= layout.row_header {
            bail!(
                "row_data_start ({}) must be below row_header ({})",
                layout.row_data_start,
                layout.row_header
            );
        }
        Ok(layout)
    }

    /// Configured output folder, else the working directory.
    pub fn dir_out(&self) -> PathBuf {
        self.dir_out
            .as_deref()
            .map(|path| self.resolve(path))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(C_CONFIG_FILE_NAME);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn relative_paths_resolve_against_config_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "templates:\n  decals: tpl/decals.xlsx\ndir_out: /srv/listings\n",
        );
        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(
            config.template_for(EnumProductKind::Decals, "assets/decal_template.xlsx"),
            dir.path().join("tpl/decals.xlsx")
        );
        assert_eq!(
            config.template_for(EnumProductKind::Wallpapers, "assets/wallpaper_template.xlsx"),
            PathBuf::from("assets/wallpaper_template.xlsx")
        );
        assert_eq!(config.dir_out(), PathBuf::from("/srv/listings"));
    }

    #[test]
    fn layout_rows_are_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "row_header: 1\nrow_data_start: 2\n");
        let config = AppConfig::load(Some(&path)).unwrap();

        let layout = config.layout_for(SpecTemplateLayout::new("Sheet1")).unwrap();
        assert_eq!((layout.row_header, layout.row_data_start), (1, 2));
        assert_eq!(layout.sheet_name, "Sheet1");
    }

    #[test]
    fn data_row_above_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "row_header: 4\nrow_data_start: 4\n");
        assert!(AppConfig::load(Some(&path)).is_err());

        let config = AppConfig {
            row_data_start: Some(2),
            ..Default::default()
        };
        assert!(config.layout_for(SpecTemplateLayout::new("Sheet1")).is_err());
    }

    #[test]
    fn unknown_keys_and_missing_explicit_file_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "templatez: {}\n");
        assert!(AppConfig::load(Some(&path)).is_err());
        assert!(AppConfig::load(Some(&dir.path().join("absent.yaml"))).is_err());
    }

    #[test]
    fn defaults_without_config() {
        let config = AppConfig::default();
        assert_eq!(config.dir_out(), PathBuf::from("."));
        let layout = config.layout_for(SpecTemplateLayout::new("Sheet1")).unwrap();
        assert_eq!((layout.row_header, layout.row_data_start), (3, 6));
    }
}
