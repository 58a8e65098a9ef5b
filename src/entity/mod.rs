pub mod body;
pub mod friends;
pub mod mind;
pub mod person;
pub mod population;
pub mod standing;

pub use body::Body;
pub use friends::Friends;
pub use mind::{Mind, PoliticalCategory, PoliticalView};
pub use person::{Name, Person};
pub use population::Population;
pub use standing::Standing;
