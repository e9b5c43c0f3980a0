use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trovus_catalog::CatalogConfig;
use trovus_core::domain::Genre;

/// Frontend-facing view of the `[catalog]` section. Paths travel as
/// plain strings across the IPC boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogConfigDto {
  pub data_dir: Option<String>,
  pub default_genre: Genre,
}

impl From<CatalogConfig> for CatalogConfigDto {
  fn from(cfg: CatalogConfig) -> Self {
    CatalogConfigDto {
      data_dir: cfg.data_dir.map(|p| p.to_string_lossy().to_string()),
      default_genre: cfg.default_genre,
    }
  }
}

impl From<CatalogConfigDto> for CatalogConfig {
  fn from(dto: CatalogConfigDto) -> Self {
    CatalogConfig {
      data_dir: dto.data_dir.map(PathBuf::from),
      default_genre: dto.default_genre,
    }
  }
}
