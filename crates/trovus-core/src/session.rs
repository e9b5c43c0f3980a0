use std::sync::Arc;

use crate::domain::Attribute;
use crate::feedback::Direction;
use crate::filter::{self, MissingDirection};
use crate::guess::Guess;
use crate::recommend;
use crate::roster::{Roster, RosterEntry};

/// Resultado de una consulta de coincidencias: los candidatos vivos en
/// orden de roster y, si hay al menos dos, una sugerencia de siguiente
/// intento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport<'a> {
  pub candidates: Vec<&'a RosterEntry>,
  pub recommendation: Option<&'a RosterEntry>,
}

/// Estado de una partida: el roster compartido y el historial de
/// intentos con sus pistas.
///
/// El historial guarda el intento más reciente primero, que es el
/// orden en que se muestra. Las operaciones de edición reciben el
/// índice dentro de ese orden; un índice fuera de rango se ignora.
#[derive(Debug, Clone)]
pub struct GameSession {
  roster: Arc<Roster>,
  guesses: Vec<Guess>,
}

impl GameSession {
  pub fn new(roster: Arc<Roster>) -> Self {
    GameSession { roster, guesses: Vec::new() }
  }

  pub fn roster(&self) -> &Roster {
    &self.roster
  }

  /// Historial de intentos, el más reciente primero.
  pub fn guesses(&self) -> &[Guess] {
    &self.guesses
  }

  /// Registra un intento por nombre de artista.
  ///
  /// El nombre se recorta y se resuelve ignorando mayúsculas. Si no
  /// corresponde a ningún artista del roster no pasa nada y devuelve
  /// `false`: equivocarse tecleando no rompe la partida.
  pub fn submit(&mut self, name: &str) -> bool {
    let Some(entry) = self.roster.resolve(name.trim()) else {
      return false;
    };
    let guess = Guess::for_entry(entry);
    self.guesses.insert(0, guess);
    true
  }

  /// Rota la pista de un atributo del intento `index`.
  pub fn cycle_status(&mut self, index: usize, attribute: Attribute) {
    if let Some(guess) = self.guesses.get_mut(index) {
      guess.cycle_status(attribute);
    }
  }

  /// Fija o retira la dirección de un atributo ordenado del intento
  /// `index`.
  pub fn toggle_direction(&mut self, index: usize, attribute: Attribute, direction: Direction) {
    if let Some(guess) = self.guesses.get_mut(index) {
      guess.toggle_direction(attribute, direction);
    }
  }

  /// Vacía el historial. El roster no se toca.
  pub fn clear(&mut self) {
    self.guesses.clear();
  }

  /// Aplica el filtro con el historial actual y calcula la
  /// recomendación sobre los supervivientes.
  pub fn find_matches(&self) -> Result<MatchReport<'_>, MissingDirection> {
    let candidates = filter::candidates(&self.roster, &self.guesses)?;
    let recommendation = recommend::recommend(&candidates);
    Ok(MatchReport { candidates, recommendation })
  }
}
