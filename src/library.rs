//! User collections kept on the local machine: favorites, libraries and
//! playlists, plus the key/value stores that persist them.

mod collections;
mod favorites;
mod store;
mod user_data;

pub use collections::{Collection, CollectionError, CollectionId, Collections};
pub use favorites::Favorites;
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};
pub use user_data::{CollectionStore, FavoriteStore, UserData};

/// Storage key for the favorite track ids.
pub const FAVORITES_KEY: &str = "favoriteSongs";
/// Storage key for user libraries.
pub const LIBRARIES_KEY: &str = "musicLibraries";
/// Storage key for user playlists.
pub const PLAYLISTS_KEY: &str = "musicPlaylists";
