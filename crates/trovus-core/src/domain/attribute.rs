use serde::{Deserialize, Serialize};
use std::fmt;

/// Los seis atributos comparables de un artista.
///
/// Reemplaza el despacho por nombre de campo: cualquier operación que
/// toque "un atributo" recibe una variante de este enum y el compilador
/// garantiza que los seis casos quedan cubiertos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
  Genre,
  Debut,
  Popularity,
  Members,
  Country,
  Gender,
}

impl Attribute {
  pub const ALL: [Attribute; 6] = [
    Attribute::Genre,
    Attribute::Debut,
    Attribute::Popularity,
    Attribute::Members,
    Attribute::Country,
    Attribute::Gender,
  ];

  /// Indica si el atributo admite la pista parcial (amarillo).
  ///
  /// Solo los atributos con noción de cercanía la admiten: año de
  /// debut, popularidad y país (vía continente). El resto alterna
  /// únicamente entre gris y verde.
  pub fn supports_partial(&self) -> bool {
    matches!(self, Attribute::Debut | Attribute::Popularity | Attribute::Country)
  }

  /// Indica si el atributo es ordenado y exige dirección (↑/↓)
  /// cuando no está en verde.
  pub fn is_ordered(&self) -> bool {
    matches!(self, Attribute::Debut | Attribute::Popularity)
  }
}

impl fmt::Display for Attribute {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Attribute::Genre => "genre",
      Attribute::Debut => "debut",
      Attribute::Popularity => "popularity",
      Attribute::Members => "members",
      Attribute::Country => "country",
      Attribute::Gender => "gender",
    };
    write!(f, "{label}")
  }
}
