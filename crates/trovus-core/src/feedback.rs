use serde::{Deserialize, Serialize};

/// Estado de la pista sobre un atributo.
///
/// `Gray` es "descartado", `Green` es "acertado" y `Yellow` es la pista
/// parcial ("cerca"), solo válida en atributos que la admiten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Gray,
  Green,
  Yellow,
}

impl Default for Status {
  fn default() -> Self {
    Status::Gray
  }
}

/// Dirección declarada para un atributo ordenado.
///
/// Para popularidad, `Higher` significa "más popular", es decir, una
/// posición numérica MENOR en el ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Higher,
  Lower,
}

/// Valor copiado de un artista junto con la pista que el jugador le
/// asignó.
///
/// Las transiciones son deliberadamente pequeñas:
///
/// - [`cycle_status`](Self::cycle_status) rota gris → verde → amarillo
///   → gris (saltando amarillo si el atributo no lo admite) y NO toca
///   la dirección.
/// - [`toggle_direction`](Self::toggle_direction) fija una dirección
///   dejando el estado en amarillo, o la retira (y vuelve a gris) si ya
///   estaba activa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFeedback<T> {
  pub value: T,
  pub status: Status,
  pub direction: Option<Direction>,
}

impl<T> AttributeFeedback<T> {
  /// Pista inicial: gris, sin dirección.
  pub fn new(value: T) -> Self {
    AttributeFeedback { value, status: Status::Gray, direction: None }
  }

  pub fn cycle_status(&mut self, supports_partial: bool) {
    self.status = match self.status {
      Status::Gray => Status::Green,
      Status::Green if supports_partial => Status::Yellow,
      Status::Green => Status::Gray,
      Status::Yellow => Status::Gray,
    };
  }

  pub fn toggle_direction(&mut self, direction: Direction) {
    if self.direction == Some(direction) {
      self.direction = None;
      self.status = Status::Gray;
    } else {
      self.direction = Some(direction);
      self.status = Status::Yellow;
    }
  }
}
