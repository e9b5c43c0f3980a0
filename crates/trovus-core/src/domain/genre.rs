use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error al interpretar un género que no pertenece al catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown genre: {0}")]
pub struct GenreParseError(pub String);

/// Género musical del catálogo.
///
/// El conjunto es cerrado: cada partición del catálogo corresponde a
/// exactamente una variante, y el orden de [`Genre::ALL`] es el orden
/// en que las particiones se concatenan para formar el roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
  Pop,
  #[serde(rename = "Hip Hop")]
  HipHop,
  Indie,
  #[serde(rename = "R&B")]
  Rnb,
  Rock,
}

impl Genre {
  /// Todas las variantes, en el orden canónico del catálogo.
  pub const ALL: [Genre; 5] = [Genre::Pop, Genre::HipHop, Genre::Indie, Genre::Rnb, Genre::Rock];
}

impl FromStr for Genre {
  type Err = GenreParseError;

  /// Normaliza antes de comparar: ignora mayúsculas, espacios, guiones
  /// y los separadores habituales ("Hip-Hop", "hip hop", "R&B", "rnb").
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', '_', ' ', '&', '/'], "");

    match normalized.as_str() {
      "pop" => Ok(Genre::Pop),
      "hiphop" => Ok(Genre::HipHop),
      "indie" => Ok(Genre::Indie),
      "rb" | "rnb" | "randb" => Ok(Genre::Rnb),
      "rock" => Ok(Genre::Rock),
      _ => Err(GenreParseError(s.trim().to_string())),
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Genre::Pop => "Pop",
      Genre::HipHop => "Hip Hop",
      Genre::Indie => "Indie",
      Genre::Rnb => "R&B",
      Genre::Rock => "Rock",
    };
    write!(f, "{label}")
  }
}
