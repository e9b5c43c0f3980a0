use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{ArtistProfile, Genre};

/// Un artista del roster junto con el género de la partición de la que
/// proviene.
///
/// El género no forma parte de la ficha: se deriva de la partición del
/// catálogo, así que viaja al lado de la ficha en lugar de dentro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
  #[serde(flatten)]
  pub profile: ArtistProfile,
  pub genre: Genre,
}

/// Roster completo del juego: las particiones por género concatenadas
/// en el orden canónico, más un índice por nombre en minúsculas.
///
/// El orden de `entries` es significativo: los empates del recomendador
/// se resuelven a favor del primer candidato en este orden.
#[derive(Debug, Clone)]
pub struct Roster {
  entries: Vec<RosterEntry>,
  index: HashMap<String, usize>,
}

impl Roster {
  /// Construye el roster preservando el orden recibido.
  ///
  /// Ante nombres repetidos (ignorando mayúsculas) el índice conserva
  /// la primera aparición; el catálogo valida duplicados antes de
  /// llegar aquí.
  pub fn new(entries: Vec<RosterEntry>) -> Self {
    let mut index = HashMap::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
      index.entry(entry.profile.name.to_lowercase()).or_insert(i);
    }
    Roster { entries, index }
  }

  /// Busca un artista por nombre, ignorando mayúsculas.
  pub fn resolve(&self, name: &str) -> Option<&RosterEntry> {
    self.index.get(&name.to_lowercase()).map(|&i| &self.entries[i])
  }

  pub fn entries(&self) -> &[RosterEntry] {
    &self.entries
  }

  pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
    self.entries.iter()
  }

  /// Itera solo la partición de un género, en orden de catálogo.
  pub fn partition(&self, genre: Genre) -> impl Iterator<Item = &RosterEntry> {
    self.entries.iter().filter(move |e| e.genre == genre)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
