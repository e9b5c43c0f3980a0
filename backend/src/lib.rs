mod config;
mod infrastructure;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tauri::{Manager, State};

use trovus_catalog::CatalogConfig;
use trovus_core::GameSession;
use trovus_core::browse::{self, BrowseQuery};
use trovus_core::domain::{Attribute, Genre};
use trovus_core::feedback::Direction;
use trovus_core::guess::Guess;
use trovus_core::roster::{Roster, RosterEntry};
use trovus_core::session::MatchReport;

use crate::config::CatalogConfigDto;
use infrastructure::system::gpu_tweak;

/// Global application state managed by Tauri.
///
/// The roster is immutable for the lifetime of the process; the session
/// is the only mutable piece and is guarded for concurrent command access.
struct AppState {
  roster: Arc<Roster>,
  session: Mutex<GameSession>,
}

/// Shown when an ordered attribute is left without a direction arrow.
/// The filter refuses to run on an incomplete query, which is not the
/// same thing as a query with zero results.
const MISSING_DIRECTION_MSG: &str = "Please specify if the correct values for debut year and \
   popularity rank are higher (↑) or lower (↓) than your guesses.";

/// Owned snapshot of a match query result, ready for serialization.
#[derive(Debug, Serialize)]
struct MatchReportDto {
  candidates: Vec<RosterEntry>,
  recommendation: Option<RosterEntry>,
}

impl MatchReportDto {
  fn from_report(report: &MatchReport<'_>) -> Self {
    MatchReportDto {
      candidates: report.candidates.iter().map(|&e| e.clone()).collect(),
      recommendation: report.recommendation.cloned(),
    }
  }
}

/// Command: Registers a guess by artist name.
///
/// Returns `false` when the name does not resolve to a roster artist;
/// the session is left untouched in that case so a typo never costs
/// the player anything.
#[tauri::command]
fn submit_guess(name: String, state: State<'_, AppState>) -> Result<bool, String> {
  let mut session = state.session.lock().map_err(|e| e.to_string())?;
  let accepted = session.submit(&name);
  if !accepted {
    log::warn!("ignoring unknown artist name: {name:?}");
  }
  Ok(accepted)
}

/// Command: Cycles the feedback status of one attribute of one guess.
/// Out-of-range indices are ignored.
#[tauri::command]
fn cycle_status(index: usize, attribute: Attribute, state: State<'_, AppState>) -> Result<(), String> {
  let mut session = state.session.lock().map_err(|e| e.to_string())?;
  session.cycle_status(index, attribute);
  Ok(())
}

/// Command: Sets or clears the direction arrow on an ordered attribute.
#[tauri::command]
fn toggle_direction(
  index: usize,
  attribute: Attribute,
  direction: Direction,
  state: State<'_, AppState>,
) -> Result<(), String> {
  let mut session = state.session.lock().map_err(|e| e.to_string())?;
  session.toggle_direction(index, attribute, direction);
  Ok(())
}

/// Command: Forgets every guess. The roster is untouched.
#[tauri::command]
fn clear_guesses(state: State<'_, AppState>) -> Result<(), String> {
  let mut session = state.session.lock().map_err(|e| e.to_string())?;
  session.clear();
  log::debug!("guess history cleared");
  Ok(())
}

/// Command: Returns the guess history, most recent first.
#[tauri::command]
fn list_guesses(state: State<'_, AppState>) -> Result<Vec<Guess>, String> {
  let session = state.session.lock().map_err(|e| e.to_string())?;
  Ok(session.guesses().to_vec())
}

/// Command: Runs the candidate filter over the accumulated feedback and
/// attaches a next-guess recommendation when more than one candidate
/// survives.
#[tauri::command]
fn find_matches(state: State<'_, AppState>) -> Result<MatchReportDto, String> {
  let session = state.session.lock().map_err(|e| e.to_string())?;
  let report = session.find_matches().map_err(|e| {
    log::debug!("match query refused: {e}");
    MISSING_DIRECTION_MSG.to_string()
  })?;
  Ok(MatchReportDto::from_report(&report))
}

/// Command: Field-by-field catalog search within one genre partition.
///
/// The country criterion is normalized to uppercase here so the
/// frontend can pass raw input.
#[tauri::command]
fn browse_roster(genre: Genre, mut query: BrowseQuery, state: State<'_, AppState>) -> Result<Vec<RosterEntry>, String> {
  if let Some(country) = query.country.as_mut() {
    *country = country.trim().to_uppercase();
  }
  Ok(browse::browse(&state.roster, genre, &query).into_iter().cloned().collect())
}

/// Command: The genre partitions in canonical catalog order.
#[tauri::command]
fn list_genres() -> Vec<Genre> {
  Genre::ALL.to_vec()
}

/// Command: Retrieves the catalog configuration for the settings view.
#[tauri::command]
fn catalog_get_config() -> Result<CatalogConfigDto, String> {
  let cfg = CatalogConfig::load().map_err(|e| e.to_string())?;
  Ok(CatalogConfigDto::from(cfg))
}

/// Command: Persists updated catalog configuration from the frontend.
/// Takes effect on the next launch; the running roster is not reloaded.
#[tauri::command]
fn catalog_save_config(input: CatalogConfigDto) -> Result<(), String> {
  let cfg = CatalogConfig::from(input);
  cfg.save().map_err(|e| e.to_string())?;
  log::info!("catalog config saved");
  Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Linux-specific workarounds for WebKitGTK rendering glitches/crashes on specific GPUs.
  gpu_tweak::apply_linux_patches();

  let mut clog = colog::default_builder();
  clog.filter(None, log::LevelFilter::Info);
  clog.init();

  tauri::Builder::default()
    .setup(|app| {
      // --- Wiring Phase ---

      // 1. Catalog configuration
      // Reads [catalog] from trovus.toml, materializing defaults on first run.
      let catalog_cfg = CatalogConfig::load()?;

      // 2. Roster
      // Embedded partitions unless the config points at an external directory.
      let roster = Arc::new(trovus_catalog::load(&catalog_cfg)?);
      log::info!("roster loaded: {} artists across {} genres", roster.len(), Genre::ALL.len());

      // 3. Session
      // One game per app instance; cleared via the clear_guesses command.
      let session = Mutex::new(GameSession::new(roster.clone()));

      // 4. State Registration
      // Moves roster and session into Tauri's managed state container.
      app.manage(AppState { roster, session });

      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      submit_guess,
      cycle_status,
      toggle_direction,
      clear_guesses,
      list_guesses,
      find_matches,
      browse_roster,
      list_genres,
      catalog_get_config,
      catalog_save_config,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
