//! TCGdex operations, grouped by resource.
//!
//! Each group is a thin borrow of the client obtained from an accessor:
//!
//! - [`CardActions`] via [`TcgdexClient::cards()`](crate::TcgdexClient::cards)
//! - [`SetActions`] via [`TcgdexClient::sets()`](crate::TcgdexClient::sets)
//! - [`SerieActions`] via [`TcgdexClient::series()`](crate::TcgdexClient::series)
//! - [`ListActions`] via [`TcgdexClient::lists()`](crate::TcgdexClient::lists)

mod cards;
mod lists;
mod series;
mod sets;

pub use cards::CardActions;
pub use lists::ListActions;
pub use series::SerieActions;
pub use sets::SetActions;
