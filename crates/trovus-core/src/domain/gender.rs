use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Género (en el sentido demográfico) declarado para un artista.
///
/// `Mixed` cubre grupos con integrantes de más de un género; `Custom`
/// conserva cualquier otra etiqueta del catálogo sin alterarla.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
  Female,
  Male,
  Mixed,
  Custom(String),
}

impl Gender {
  fn from_text(s: &str) -> Self {
    let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");

    match normalized.as_str() {
      "female" | "f" => Gender::Female,
      "male" | "m" => Gender::Male,
      "mixed" => Gender::Mixed,
      _ => Gender::Custom(s.trim().to_string()),
    }
  }
}

impl FromStr for Gender {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Gender::from_text(s))
  }
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Gender::Female => write!(f, "Female"),
      Gender::Male => write!(f, "Male"),
      Gender::Mixed => write!(f, "Mixed"),
      Gender::Custom(label) => write!(f, "{label}"),
    }
  }
}

impl Serialize for Gender {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Gender {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(Gender::from_text(&raw))
  }
}
