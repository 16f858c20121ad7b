/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::exponent::MAX_EXPONENT;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("exponent {0} is outside the supported range [-{max}, {max}]", max = MAX_EXPONENT)]
    InvalidExponent(i32),
    #[error("incompatible dimensions: {0} <-> {1}")]
    IncompatibleDimension(String, String),
    #[error("incompatible systems: {0} <-> {1}")]
    IncompatibleSystem(String, String),
    #[error("invalid affine combination: {0}")]
    InvalidAffineCombination(String),
    #[error("invalid quantity spec: {0}")]
    SpecValidation(String),
    #[error("dimension symbol given more than once: {0}")]
    DuplicateDimension(String),
    #[error("unknown dimension symbol: {0}")]
    UnknownDimension(String),
    #[error("invalid base dimensions: {0}")]
    InvalidBaseDimensions(String),
    #[error("dimension formula parse error: {0}")]
    ParseError(String),
    #[error("JSON error: {0}")]
    Json(String),
}
