use serde::{Deserialize, Serialize};

use super::{Gender, Lineup};

/// Ficha de un artista del catálogo.
///
/// Los valores se comparan tal cual durante el juego, así que el
/// catálogo es responsable de la consistencia: `country` en ISO-2
/// mayúsculas y `popularity` como posición en el ranking (1 es el
/// artista más popular).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
  /// Nombre canónico, con su capitalización original.
  pub name: String,
  /// Año del primer lanzamiento.
  pub debut: i32,
  /// Posición en el ranking de popularidad; menor es más popular.
  pub popularity: u32,
  /// Formación. En el formato de intercambio viaja bajo la clave
  /// histórica `type`.
  #[serde(rename = "type")]
  pub members: Lineup,
  /// País de origen, código ISO-2 en mayúsculas.
  pub country: String,
  pub gender: Gender,
}
