/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Largest supported exponent magnitude. Exponents live in
/// `[-MAX_EXPONENT, MAX_EXPONENT]`.
pub const MAX_EXPONENT: i8 = 6;

/// A bounded dimension exponent.
///
/// Arithmetic is checked: a result outside the supported range is
/// reported as `None` and never wraps or saturates.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Default,
    Debug,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Exponent(i8);

impl Exponent {
    pub const ZERO: Self = Exponent(0);
    pub const ONE: Self = Exponent(1);
    pub const MIN: Self = Exponent(-MAX_EXPONENT);
    pub const MAX: Self = Exponent(MAX_EXPONENT);

    pub const fn new(n: i32) -> Option<Self> {
        if n >= -(MAX_EXPONENT as i32) && n <= MAX_EXPONENT as i32 {
            Some(Exponent(n as i8))
        } else {
            None
        }
    }

    pub const fn get(self) -> i8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::new(self.0 as i32 + rhs.0 as i32)
    }

    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs.negate())
    }

    /// The range is symmetric, so negation is total.
    pub const fn negate(self) -> Self {
        Exponent(-self.0)
    }
}

impl Neg for Exponent {
    type Output = Exponent;
    fn neg(self) -> Exponent {
        self.negate()
    }
}

impl TryFrom<i32> for Exponent {
    type Error = UnitError;
    fn try_from(n: i32) -> Result<Self, UnitError> {
        Exponent::new(n).ok_or(UnitError::InvalidExponent(n))
    }
}

impl From<Exponent> for i32 {
    fn from(e: Exponent) -> i32 {
        e.0 as i32
    }
}

impl Display for Exponent {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Exponent {
    fn schema_name() -> String {
        "Exponent".to_string()
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        let mut schema = <i32 as schemars::JsonSchema>::json_schema(gen)
            .into_object();
        schema.number().minimum = Some(-(MAX_EXPONENT as f64));
        schema.number().maximum = Some(MAX_EXPONENT as f64);
        schema.into()
    }
}

#[cfg(test)]
mod test {
    use super::{Exponent, MAX_EXPONENT};
    use crate::UnitError;
    use std::convert::TryFrom;

    fn exp(n: i32) -> Exponent {
        Exponent::new(n).unwrap()
    }

    #[test]
    fn bounds() {
        assert_eq!(Exponent::new(6), Some(Exponent::MAX));
        assert_eq!(Exponent::new(-6), Some(Exponent::MIN));
        assert_eq!(Exponent::new(7), None);
        assert_eq!(Exponent::new(-7), None);
        assert_eq!(Exponent::MAX.get(), MAX_EXPONENT);
        assert_eq!(Exponent::try_from(9), Err(UnitError::InvalidExponent(9)));
    }

    #[test]
    fn addition_is_checked() {
        assert_eq!(exp(2).checked_add(exp(3)), Some(exp(5)));
        assert_eq!(exp(-6).checked_add(exp(6)), Some(Exponent::ZERO));
        assert_eq!(exp(4).checked_add(exp(3)), None);
        assert_eq!(exp(-4).checked_add(exp(-3)), None);
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        for a in -6..=6 {
            for b in -6..=6 {
                assert_eq!(
                    exp(a).checked_add(exp(b)),
                    exp(b).checked_add(exp(a))
                );
                for c in -6..=6 {
                    let left = exp(a)
                        .checked_add(exp(b))
                        .and_then(|ab| ab.checked_add(exp(c)));
                    let right = exp(b)
                        .checked_add(exp(c))
                        .and_then(|bc| exp(a).checked_add(bc));
                    if (-6..=6).contains(&(a + b))
                        && (-6..=6).contains(&(b + c))
                    {
                        assert_eq!(left, right);
                    }
                }
            }
        }
    }

    #[test]
    fn subtraction_and_negation() {
        assert_eq!(exp(1).checked_sub(exp(3)), Some(exp(-2)));
        assert_eq!(exp(-3).checked_sub(exp(4)), None);
        for a in -6..=6 {
            assert_eq!(-(-exp(a)), exp(a));
        }
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Exponent>("-2").unwrap(), exp(-2));
        assert!(serde_json::from_str::<Exponent>("12").is_err());
        assert_eq!(serde_json::to_string(&exp(3)).unwrap(), "3");
    }
}
