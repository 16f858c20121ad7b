/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Human-readable dimension formulas such as `L·T⁻¹`.

use std::collections::BTreeMap;
use std::iter::once;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of, space0},
    combinator::{map, opt, value},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

use super::dimension::PartialDims;
use super::error::UnitError;
use super::exponent::Exponent;

/// Rendering of the all-zero dimension.
pub const DIMENSIONLESS: &str = "dimensionless";

const SEPARATOR: &str = "\u{b7}";

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

const SUPERSCRIPT_MINUS: char = '\u{207b}';

/// Render exponent terms in the order given. Zero exponents are
/// skipped, an exponent of one is left implicit.
pub fn format<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = (&'a str, Exponent)>,
{
    let parts = terms
        .into_iter()
        .filter(|(_, e)| !e.is_zero())
        .map(|(s, e)| match e.get() {
            1 => s.to_string(),
            n => format!("{}{}", s, superscript(n as i32)),
        })
        .collect::<Vec<String>>();
    match parts.is_empty() {
        true => DIMENSIONLESS.to_string(),
        false => parts.join(SEPARATOR),
    }
}

pub fn superscript(val: i32) -> String {
    val.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(n) => SS[n as usize],
            None if c == '-' => SUPERSCRIPT_MINUS,
            None => c,
        })
        .collect()
}

/// Parse a formula into a partial dimension. Accepts the rendered
/// form (`L·T⁻¹`) as well as ASCII input (`L*T^-1`, `L/T`).
pub fn parse(input: &str) -> Result<PartialDims, UnitError> {
    let input = input.trim();
    if input.is_empty() || input == DIMENSIONLESS {
        return Ok(PartialDims::new());
    }

    match formula(input) {
        Ok(("", terms)) => PartialDims::from_pairs(terms),
        Ok((r, _)) => {
            Err(UnitError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::ParseError(format!("{}", err))),
    }
}

fn formula(input: &str) -> IResult<&str, Vec<(&str, i32)>> {
    let (input, first) = term(input)?;
    let (input, rest) = many0(pair(operator, term))(input)?;
    let terms = once(first)
        .chain(rest.into_iter().map(|(divide, (s, n))| match divide {
            true => (s, -n),
            false => (s, n),
        }))
        .collect();
    Ok((input, terms))
}

/// Returns true for division.
fn operator(input: &str) -> IResult<&str, bool> {
    delimited(
        space0,
        alt((value(false, one_of("\u{b7}\u{22c5}*")), value(true, char('/')))),
        space0,
    )(input)
}

fn term(input: &str) -> IResult<&str, (&str, i32)> {
    pair(
        take_while1(char::is_alphabetic),
        map(opt(power), |n| n.unwrap_or(1)),
    )(input)
}

fn power(input: &str) -> IResult<&str, i32> {
    alt((hat_power, superscript_power))(input)
}

fn hat_power(input: &str) -> IResult<&str, i32> {
    let (input, (minus, digits)) =
        preceded(char('^'), pair(opt(char('-')), digit1))(input)?;
    let n = number(digits.chars().filter_map(|c| c.to_digit(10)));
    Ok((input, signed(minus.is_some(), n)))
}

fn superscript_power(input: &str) -> IResult<&str, i32> {
    let (input, (minus, digits)) = pair(
        opt(char(SUPERSCRIPT_MINUS)),
        take_while1(|c| superscript_digit(c).is_some()),
    )(input)?;
    let n = number(digits.chars().filter_map(superscript_digit));
    Ok((input, signed(minus.is_some(), n)))
}

/// Oversized exponents saturate so that they fail the range check.
fn number<I: Iterator<Item = u32>>(digits: I) -> i32 {
    digits.fold(0i32, |n, d| n.saturating_mul(10).saturating_add(d as i32))
}

fn signed(minus: bool, n: i32) -> i32 {
    match minus {
        true => -n,
        false => n,
    }
}

fn superscript_digit(c: char) -> Option<u32> {
    SS.iter().position(|s| *s == c).map(|n| n as u32)
}

/// Sum exponents per symbol before range-checking, so that
/// intermediate terms may exceed the bound.
pub(crate) fn sum_terms<I, S>(terms: I) -> BTreeMap<String, i32>
where
    I: IntoIterator<Item = (S, i32)>,
    S: Into<String>,
{
    terms.into_iter().fold(BTreeMap::new(), |mut m, (s, n)| {
        let e: &mut i32 = m.entry(s.into()).or_insert(0);
        *e = e.saturating_add(n);
        m
    })
}

#[cfg(test)]
mod test {
    use super::{format, parse, superscript};
    use crate::{Exponent, PartialDims, UnitError};

    fn exp(n: i32) -> Exponent {
        Exponent::new(n).unwrap()
    }

    #[test]
    fn superscripts() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(-1), "⁻¹");
        assert_eq!(superscript(-6), "⁻⁶");
    }

    #[test]
    fn format_terms() {
        assert_eq!(format(vec![("L", exp(1)), ("T", exp(-1))]), "L·T⁻¹");
        assert_eq!(format(vec![("M", exp(0)), ("L", exp(2))]), "L²");
        assert_eq!(format(vec![("L", exp(0))]), "dimensionless");
        assert_eq!(format(Vec::new()), "dimensionless");
    }

    #[test]
    fn parse_rendered() {
        let dims = parse("M·L²·T⁻³·I⁻¹").unwrap();
        assert_eq!(dims.get("M"), Some(exp(1)));
        assert_eq!(dims.get("L"), Some(exp(2)));
        assert_eq!(dims.get("T"), Some(exp(-3)));
        assert_eq!(dims.get("I"), Some(exp(-1)));
        assert_eq!(dims.len(), 4);
    }

    #[test]
    fn parse_ascii() {
        assert_eq!(parse("L*T^-1").unwrap(), parse("L·T⁻¹").unwrap());
        assert_eq!(parse("L / T / T").unwrap(), parse("L·T⁻²").unwrap());
        assert_eq!(parse("Θ^2").unwrap().get("Θ"), Some(exp(2)));
    }

    #[test]
    fn parse_accumulates() {
        assert_eq!(parse("L·L·L").unwrap(), parse("L³").unwrap());
        assert_eq!(parse("L⁴·L⁴/L³").unwrap(), parse("L⁵").unwrap());
    }

    #[test]
    fn parse_dimensionless() {
        assert_eq!(parse("dimensionless").unwrap(), PartialDims::new());
        assert_eq!(parse("").unwrap(), PartialDims::new());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse("L⁷"), Err(UnitError::InvalidExponent(7)));
        assert_eq!(parse("L^4*L^3"), Err(UnitError::InvalidExponent(7)));
        assert!(matches!(parse("L·"), Err(UnitError::ParseError(_))));
        assert!(matches!(parse("2L"), Err(UnitError::ParseError(_))));
        assert!(matches!(parse("L^x"), Err(UnitError::ParseError(_))));
    }
}
