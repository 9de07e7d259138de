pub mod category;
pub mod discriminant;
pub mod entity;
pub mod forecast;
pub mod observation;
pub mod raw;
pub mod time_token;
pub mod wire_number;

pub use category::Category;
pub use discriminant::{Discriminant, DiscriminantKey};
pub use entity::WeatherEntity;
pub use forecast::{ForecastKind, ForecastRange};
pub use observation::{Observation, ObservationKind};
pub use raw::{parse_collection, RawRecord};
pub use time_token::TimeToken;
pub use wire_number::WireNumber;
