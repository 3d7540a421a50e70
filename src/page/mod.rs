pub mod loader;
pub mod slug;
pub mod state;

pub use loader::{ProfileLoader, ProfileSource, load_unresolved};
pub use slug::{PageContext, Slug, SlugResolver, SlugSource};
pub use state::{ProfilePage, ViewState};
