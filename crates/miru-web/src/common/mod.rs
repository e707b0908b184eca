mod route;
pub use route::{GuardOutcome, Route, guard};

mod navbar;
pub use navbar::Navbar;

mod anime_card;
pub use anime_card::AnimeCard;

mod character_card;
pub use character_card::CharacterCard;

mod episode_list;
pub use episode_list::EpisodeList;

mod spinner;
pub use spinner::Spinner;

pub mod events;

pub mod snackbar;
