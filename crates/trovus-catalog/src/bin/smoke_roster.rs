use trovus_core::domain::Genre;

fn main() {
  let roster = trovus_catalog::load_embedded().expect("failed to load embedded catalog");

  println!("roster: {} artistas", roster.len());
  for genre in Genre::ALL {
    println!("  {genre}: {}", roster.partition(genre).count());
  }

  // resolución por nombre, ignorando mayúsculas
  let found = roster.resolve("the weeknd").expect("artist not found");
  println!(
    "resolved: {} ({}, debut {}, #{})",
    found.profile.name, found.genre, found.profile.debut, found.profile.popularity
  );
}
