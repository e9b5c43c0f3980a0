use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trovus_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use trovus_core::domain::Genre;

/// Sección `[catalog]` de trovus.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
  /// Directorio con particiones externas (pop.toml, hip_hop.toml,
  /// indie.toml, rb.toml, rock.toml). Sin valor se usan las embebidas.
  pub data_dir: Option<PathBuf>,

  /// Género mostrado al abrir la pantalla de exploración.
  #[serde(default = "default_genre")]
  pub default_genre: Genre,
}

fn default_genre() -> Genre {
  Genre::Pop
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig { data_dir: None, default_genre: default_genre() }
  }
}

impl CatalogConfig {
  /// Carga la sección y la reescribe para materializar los defaults
  /// en el archivo.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("catalog")?;
    CONFIG_BACKEND.save_section("catalog", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("catalog", self)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section("catalog")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use trovus_config::{TomlConfigBackend, TrovusPaths, atomic_write_str};

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    let paths = TrovusPaths {
      base_dir: dir.to_path_buf(),
      config_dir: dir.to_path_buf(),
      data_dir: dir.join("data"),
      cache_dir: dir.join("cache"),
    };
    TomlConfigBackend::new(paths)
  }

  #[test]
  fn test_load_from_lee_la_seccion() {
    let tmp = tempfile::tempdir().unwrap();
    let content = "[catalog]\ndata_dir = \"/tmp/partitions\"\ndefault_genre = \"Hip Hop\"\n";
    atomic_write_str(&tmp.path().join("trovus.toml"), content).unwrap();

    let cfg = CatalogConfig::load_from(&backend_in(tmp.path())).unwrap();
    assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/partitions")));
    assert_eq!(cfg.default_genre, Genre::HipHop);
  }

  #[test]
  fn test_default_genre_cuando_falta_la_clave() {
    let tmp = tempfile::tempdir().unwrap();
    let content = "[catalog]\ndata_dir = \"/tmp/partitions\"\n";
    atomic_write_str(&tmp.path().join("trovus.toml"), content).unwrap();

    let cfg = CatalogConfig::load_from(&backend_in(tmp.path())).unwrap();
    assert_eq!(cfg.default_genre, Genre::Pop);
  }

  #[test]
  fn test_roundtrip_por_el_backend() {
    let tmp = tempfile::tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let cfg = CatalogConfig { data_dir: None, default_genre: Genre::Rock };
    backend.save_section("catalog", &cfg).unwrap();

    let back = CatalogConfig::load_from(&backend).unwrap();
    assert_eq!(back, cfg);
  }
}
