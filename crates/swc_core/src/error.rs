use thiserror::Error;

use crate::ShipId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Catalog weight or volume text that is not a plain number, `<n> kg` or `<n> t`.
    #[error("invalid unit value '{value}': expected a number, '<n> kg' or '<n> t'")]
    InvalidUnit { value: String },
    #[error("ship '{0}' is not in the ship catalog")]
    UnknownShip(ShipId),
    #[error("system '{0}' is not in the galaxy catalog")]
    UnknownSystem(String),
}
