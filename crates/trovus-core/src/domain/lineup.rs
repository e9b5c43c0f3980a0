use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Formación de un artista: solista, dúo o grupo.
///
/// `Custom` conserva tal cual cualquier etiqueta que no reconozcamos,
/// para que el catálogo pueda describir formaciones fuera de las tres
/// habituales sin perder información.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lineup {
  Solo,
  Duo,
  Group,
  Custom(String),
}

impl Lineup {
  fn from_text(s: &str) -> Self {
    let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");

    match normalized.as_str() {
      "solo" => Lineup::Solo,
      "duo" => Lineup::Duo,
      "group" | "band" => Lineup::Group,
      _ => Lineup::Custom(s.trim().to_string()),
    }
  }
}

impl FromStr for Lineup {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Lineup::from_text(s))
  }
}

impl fmt::Display for Lineup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Lineup::Solo => write!(f, "Solo"),
      Lineup::Duo => write!(f, "Duo"),
      Lineup::Group => write!(f, "Group"),
      Lineup::Custom(label) => write!(f, "{label}"),
    }
  }
}

// En el formato de intercambio la formación viaja como texto plano
// ("Solo", "Group"), no como enum etiquetado.
impl Serialize for Lineup {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Lineup {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(Lineup::from_text(&raw))
  }
}
