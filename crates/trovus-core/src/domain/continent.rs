use std::fmt;

/// Continentes usados para la pista de "misma región" sobre el país.
///
/// La partición es fija y deliberadamente incompleta: solo contiene los
/// países que aparecen en el catálogo. Un código ISO-2 fuera de estas
/// tablas no pertenece a ningún continente, ni siquiera comparado
/// consigo mismo, y por tanto nunca produce la pista parcial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
  NorthAmerica,
  Europe,
  Oceania,
  Asia,
  SouthAmerica,
  Africa,
}

const NORTH_AMERICA: &[&str] = &["US", "CA", "MX"];
const EUROPE: &[&str] = &["GB", "FR", "DE", "IE", "ES", "IT", "NL", "SE", "NO", "DK", "FI", "PT"];
const OCEANIA: &[&str] = &["AU", "NZ"];
const ASIA: &[&str] = &["JP", "KR", "CN", "TW", "TH", "ID", "MY", "SG"];
const SOUTH_AMERICA: &[&str] = &["BR", "AR", "CO", "CL", "PE", "VE"];
const AFRICA: &[&str] = &["ZA", "NG", "KE", "GH", "EG"];

impl Continent {
  pub const ALL: [Continent; 6] = [
    Continent::NorthAmerica,
    Continent::Europe,
    Continent::Oceania,
    Continent::Asia,
    Continent::SouthAmerica,
    Continent::Africa,
  ];

  /// Códigos ISO-2 (mayúsculas) asignados a este continente.
  pub fn countries(&self) -> &'static [&'static str] {
    match self {
      Continent::NorthAmerica => NORTH_AMERICA,
      Continent::Europe => EUROPE,
      Continent::Oceania => OCEANIA,
      Continent::Asia => ASIA,
      Continent::SouthAmerica => SOUTH_AMERICA,
      Continent::Africa => AFRICA,
    }
  }

  /// Continente al que pertenece `code`, si figura en alguna tabla.
  pub fn of(code: &str) -> Option<Continent> {
    Continent::ALL.iter().copied().find(|c| c.countries().contains(&code))
  }
}

impl fmt::Display for Continent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Continent::NorthAmerica => "North America",
      Continent::Europe => "Europe",
      Continent::Oceania => "Oceania",
      Continent::Asia => "Asia",
      Continent::SouthAmerica => "South America",
      Continent::Africa => "Africa",
    };
    write!(f, "{label}")
  }
}

/// `true` si algún continente contiene ambos códigos.
///
/// Con códigos ausentes de las tablas devuelve siempre `false`, incluso
/// para `same_continent(x, x)`.
pub fn same_continent(a: &str, b: &str) -> bool {
  Continent::ALL.iter().any(|c| {
    let countries = c.countries();
    countries.contains(&a) && countries.contains(&b)
  })
}
