//! Carga del roster desde las particiones TOML por género.
//!
//! Las cinco particiones viajan embebidas en el binario; un
//! `data_dir` en la sección `[catalog]` permite sustituirlas por
//! archivos externos con los mismos nombres. El roster resultante
//! concatena las particiones en el orden canónico de [`Genre::ALL`],
//! preservando el orden interno de cada archivo.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use trovus_core::domain::{ArtistProfile, Genre};
use trovus_core::roster::{Roster, RosterEntry};

use crate::config::CatalogConfig;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("parse error in partition {0}: {1}")]
  Parse(String, #[source] toml::de::Error),
  #[error("missing partition file: {0}")]
  MissingPartition(PathBuf),
  #[error("duplicate artist in catalog: {0}")]
  DuplicateArtist(String),
}

#[derive(Debug, Deserialize)]
struct PartitionFile {
  #[serde(default)]
  artists: Vec<ArtistProfile>,
}

const EMBEDDED: [(Genre, &str); 5] = [
  (Genre::Pop, include_str!("../data/pop.toml")),
  (Genre::HipHop, include_str!("../data/hip_hop.toml")),
  (Genre::Indie, include_str!("../data/indie.toml")),
  (Genre::Rnb, include_str!("../data/rb.toml")),
  (Genre::Rock, include_str!("../data/rock.toml")),
];

fn file_stem(genre: Genre) -> &'static str {
  match genre {
    Genre::Pop => "pop",
    Genre::HipHop => "hip_hop",
    Genre::Indie => "indie",
    Genre::Rnb => "rb",
    Genre::Rock => "rock",
  }
}

fn parse_partition(genre: Genre, raw: &str) -> Result<Vec<RosterEntry>, CatalogError> {
  let file: PartitionFile =
    toml::from_str(raw).map_err(|e| CatalogError::Parse(file_stem(genre).to_string(), e))?;

  Ok(file.artists.into_iter().map(|profile| RosterEntry { profile, genre }).collect())
}

/// Rechaza nombres repetidos (ignorando mayúsculas) antes de construir
/// el roster: un duplicado haría ambiguo el envío de intentos.
fn build_roster(entries: Vec<RosterEntry>) -> Result<Roster, CatalogError> {
  let mut seen = HashSet::with_capacity(entries.len());
  for entry in &entries {
    if !seen.insert(entry.profile.name.to_lowercase()) {
      return Err(CatalogError::DuplicateArtist(entry.profile.name.clone()));
    }
  }
  Ok(Roster::new(entries))
}

/// Roster desde las particiones embebidas.
pub fn load_embedded() -> Result<Roster, CatalogError> {
  let mut entries = Vec::new();
  for (genre, raw) in EMBEDDED {
    entries.extend(parse_partition(genre, raw)?);
  }
  build_roster(entries)
}

/// Roster desde un directorio externo con las cinco particiones.
pub fn load_from_dir(dir: &Path) -> Result<Roster, CatalogError> {
  use std::io::ErrorKind;

  let mut entries = Vec::new();
  for genre in Genre::ALL {
    let path = dir.join(format!("{}.toml", file_stem(genre)));
    let raw = match fs::read_to_string(&path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Err(CatalogError::MissingPartition(path));
      }
      Err(e) => return Err(e.into()),
    };
    entries.extend(parse_partition(genre, &raw)?);
  }
  build_roster(entries)
}

/// Roster según la configuración: directorio externo si hay
/// `data_dir`, embebidas en caso contrario.
pub fn load(config: &CatalogConfig) -> Result<Roster, CatalogError> {
  match &config.data_dir {
    Some(dir) => load_from_dir(dir),
    None => load_embedded(),
  }
}
