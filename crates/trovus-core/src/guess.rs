use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, Gender, Genre, Lineup};
use crate::feedback::{AttributeFeedback, Direction};
use crate::roster::RosterEntry;

/// Un intento del jugador: los seis valores del artista adivinado,
/// cada uno con la pista que el jugador marcó a mano.
///
/// El intento NO sabe quién es el artista objetivo. Toda la información
/// del juego vive en las pistas que el jugador va anotando.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
  pub name: String,
  pub genre: AttributeFeedback<Genre>,
  pub debut: AttributeFeedback<i32>,
  pub popularity: AttributeFeedback<u32>,
  /// En el formato de intercambio conserva la clave histórica `type`,
  /// igual que en la ficha.
  #[serde(rename = "type")]
  pub members: AttributeFeedback<Lineup>,
  pub country: AttributeFeedback<String>,
  pub gender: AttributeFeedback<Gender>,
}

impl Guess {
  /// Crea un intento copiando los valores de `entry`, con todas las
  /// pistas en gris.
  pub fn for_entry(entry: &RosterEntry) -> Self {
    Guess {
      name: entry.profile.name.clone(),
      genre: AttributeFeedback::new(entry.genre),
      debut: AttributeFeedback::new(entry.profile.debut),
      popularity: AttributeFeedback::new(entry.profile.popularity),
      members: AttributeFeedback::new(entry.profile.members.clone()),
      country: AttributeFeedback::new(entry.profile.country.clone()),
      gender: AttributeFeedback::new(entry.profile.gender.clone()),
    }
  }

  /// Rota el estado de la pista del atributo indicado.
  pub fn cycle_status(&mut self, attribute: Attribute) {
    let partial = attribute.supports_partial();
    match attribute {
      Attribute::Genre => self.genre.cycle_status(partial),
      Attribute::Debut => self.debut.cycle_status(partial),
      Attribute::Popularity => self.popularity.cycle_status(partial),
      Attribute::Members => self.members.cycle_status(partial),
      Attribute::Country => self.country.cycle_status(partial),
      Attribute::Gender => self.gender.cycle_status(partial),
    }
  }

  /// Fija o retira la dirección de un atributo ordenado. Sobre
  /// atributos sin orden no hace nada.
  pub fn toggle_direction(&mut self, attribute: Attribute, direction: Direction) {
    match attribute {
      Attribute::Debut => self.debut.toggle_direction(direction),
      Attribute::Popularity => self.popularity.toggle_direction(direction),
      _ => {}
    }
  }
}
