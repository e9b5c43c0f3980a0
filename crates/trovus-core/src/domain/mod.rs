pub mod artist;
pub mod attribute;
pub mod continent;
pub mod gender;
pub mod genre;
pub mod lineup;

pub use artist::ArtistProfile;
pub use attribute::Attribute;
pub use continent::Continent;
pub use gender::Gender;
pub use genre::{Genre, GenreParseError};
pub use lineup::Lineup;
