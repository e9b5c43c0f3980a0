//! Recomendador de siguiente intento.
//!
//! Entre los candidatos vivos propone el más "central": el que minimiza
//! la distancia combinada a la mediana de debut y a la mediana de
//! popularidad. Un intento central parte el espacio restante de forma
//! pareja, venga la pista que venga.

use crate::roster::RosterEntry;

/// Mediana superior: con longitud par toma el elemento en `len / 2`,
/// el mayor de los dos centrales. `values` debe venir ordenado.
fn upper_median<T: Copy>(values: &[T]) -> T {
  values[values.len() / 2]
}

/// Propone el candidato más central, o `None` con uno o cero
/// candidatos (sin alternativa no hay nada que recomendar).
///
/// Los empates de puntuación se resuelven a favor del primero en el
/// orden recibido, que es el orden del roster.
pub fn recommend<'a>(candidates: &[&'a RosterEntry]) -> Option<&'a RosterEntry> {
  if candidates.len() <= 1 {
    return None;
  }

  let mut debuts: Vec<i32> = candidates.iter().map(|e| e.profile.debut).collect();
  let mut popularities: Vec<u32> = candidates.iter().map(|e| e.profile.popularity).collect();
  debuts.sort_unstable();
  popularities.sort_unstable();

  let median_debut = upper_median(&debuts);
  let median_popularity = upper_median(&popularities);

  let mut best: Option<&'a RosterEntry> = None;
  let mut best_score = u64::MAX;
  for &entry in candidates {
    let score = u64::from(entry.profile.debut.abs_diff(median_debut))
      + u64::from(entry.profile.popularity.abs_diff(median_popularity));
    if score < best_score {
      best_score = score;
      best = Some(entry);
    }
  }
  best
}
