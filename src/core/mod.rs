pub mod scale;
pub mod series;
pub mod types;
pub mod value_scale;
pub mod year;
pub mod year_scale;

pub use scale::LinearScale;
pub use series::project_polyline;
pub use types::{PlotArea, PlotMargins, Viewport};
pub use value_scale::ValueScale;
pub use year::{format_year, parse_year, year_from_unix_seconds, year_to_unix_seconds};
pub use year_scale::YearScale;
