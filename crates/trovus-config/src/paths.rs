use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas base de Trovus (config, datos, caché).
///
/// Con `TROVUS_BASE_DIR` definido, todo cuelga de ese directorio (modo
/// portable). Si no, se usan los directorios estándar de la plataforma.
#[derive(Debug, Clone)]
pub struct TrovusPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl TrovusPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, cache_dir, base_dir);

    if let Ok(env_base) = std::env::var("TROVUS_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
      cache_dir = base.join("cache");
    } else {
      let proj_dirs = ProjectDirs::from("com", "trovus", "trovus").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
      cache_dir = proj_dirs.cache_dir().to_path_buf();
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&cache_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, cache_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Archivo único de configuración de la aplicación.
  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("trovus.toml")
  }
}
