//! Exploración del catálogo al margen de la partida: búsqueda por
//! campos dentro de la partición de un género.

use serde::{Deserialize, Serialize};

use crate::domain::{ArtistProfile, Gender, Genre, Lineup};
use crate::filter::{DEBUT_TOLERANCE, POPULARITY_TOLERANCE};
use crate::roster::{Roster, RosterEntry};

/// Criterios opcionales de búsqueda. Un campo en `None` no filtra.
///
/// Los campos numéricos usan los mismos márgenes que las pistas
/// amarillas del juego: ±5 años de debut, ±50 posiciones de ranking.
/// `country` se compara tal cual, así que debe venir en ISO-2
/// mayúsculas como el catálogo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseQuery {
  pub gender: Option<Gender>,
  pub members: Option<Lineup>,
  pub country: Option<String>,
  pub debut: Option<i32>,
  pub popularity: Option<u32>,
}

impl BrowseQuery {
  fn admits(&self, profile: &ArtistProfile) -> bool {
    if let Some(gender) = &self.gender {
      if &profile.gender != gender {
        return false;
      }
    }
    if let Some(members) = &self.members {
      if &profile.members != members {
        return false;
      }
    }
    if let Some(country) = &self.country {
      if &profile.country != country {
        return false;
      }
    }
    if let Some(debut) = self.debut {
      if profile.debut.abs_diff(debut) > DEBUT_TOLERANCE {
        return false;
      }
    }
    if let Some(popularity) = self.popularity {
      if profile.popularity.abs_diff(popularity) > POPULARITY_TOLERANCE {
        return false;
      }
    }
    true
  }
}

/// Artistas de la partición de `genre` que cumplen todos los criterios,
/// en orden de catálogo.
pub fn browse<'a>(roster: &'a Roster, genre: Genre, query: &BrowseQuery) -> Vec<&'a RosterEntry> {
  roster.partition(genre).filter(|e| query.admits(&e.profile)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(name: &str, genre: Genre, debut: i32, popularity: u32, members: Lineup, country: &str, gender: Gender) -> RosterEntry {
    RosterEntry {
      profile: ArtistProfile {
        name: name.to_string(),
        debut,
        popularity,
        members,
        country: country.to_string(),
        gender,
      },
      genre,
    }
  }

  fn roster() -> Roster {
    Roster::new(vec![
      entry("Lumen", Genre::Pop, 2010, 10, Lineup::Solo, "US", Gender::Female),
      entry("Vanta", Genre::Pop, 2013, 45, Lineup::Group, "CA", Gender::Mixed),
      entry("Nodo", Genre::Pop, 2002, 70, Lineup::Solo, "GB", Gender::Male),
      entry("Kiln", Genre::Rock, 2005, 80, Lineup::Group, "GB", Gender::Male),
    ])
  }

  #[test]
  fn test_consulta_vacia_devuelve_la_particion() {
    let r = roster();
    let found = browse(&r, Genre::Pop, &BrowseQuery::default());
    assert_eq!(found.len(), 3);
    // Nunca cruza de partición.
    assert!(found.iter().all(|e| e.genre == Genre::Pop));
  }

  #[test]
  fn test_filtra_por_pais_exacto() {
    let r = roster();
    let query = BrowseQuery { country: Some("GB".to_string()), ..Default::default() };
    let found = browse(&r, Genre::Pop, &query);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].profile.name, "Nodo");
  }

  #[test]
  fn test_debut_usa_margen_de_cinco() {
    let r = roster();
    let query = BrowseQuery { debut: Some(2008), ..Default::default() };
    let names: Vec<&str> = browse(&r, Genre::Pop, &query).iter().map(|e| e.profile.name.as_str()).collect();
    // 2010 y 2013 caen dentro de ±5 de 2008; 2002 queda fuera.
    assert_eq!(names, ["Lumen", "Vanta"]);
  }

  #[test]
  fn test_criterios_en_conjuncion() {
    let r = roster();
    let query = BrowseQuery {
      members: Some(Lineup::Solo),
      popularity: Some(40),
      ..Default::default()
    };
    let names: Vec<&str> = browse(&r, Genre::Pop, &query).iter().map(|e| e.profile.name.as_str()).collect();
    // Solo con ranking a ±50 de 40: Lumen (10) y Nodo (70); Vanta es
    // grupo.
    assert_eq!(names, ["Lumen", "Nodo"]);
  }

  #[test]
  fn test_sin_resultados() {
    let r = roster();
    let query = BrowseQuery { gender: Some(Gender::Female), ..Default::default() };
    assert!(browse(&r, Genre::Rock, &query).is_empty());
  }
}
