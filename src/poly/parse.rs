//! Reading polynomials from the expression syntax used for driving-point
//! functions, e.g. `6*s**4 + 42*s**2 + 48` or `s^5 - 3/2 s + (1/2)`.
//!
//! A term is an optional coefficient (integer, decimal or `a/b`, optionally
//! parenthesized) followed by an optional `*` and a power of the
//! indeterminate written with `**` or `^`. Terms with the same degree are
//! summed.

use super::{checked_accumulate, Polynomial};
use crate::error::{Error, Result};
use crate::symbols::Indeterminate;
use crate::traits::CoeffBase;
use core::str::FromStr;
use num_rational::Ratio;
use num_traits::{CheckedDiv, One, Zero};
use std::collections::BTreeMap;

impl<T: CoeffBase> Polynomial<T> {
    /// Parse `text` as a polynomial in `var`
    pub fn parse(text: &str, var: &Indeterminate) -> Result<Self> {
        Parser::new(text, var).polynomial()
    }
}

impl<T: CoeffBase> FromStr for Polynomial<T> {
    type Err = Error;

    /// Parse a polynomial in the Laplace variable `s`
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &Indeterminate::laplace())
    }
}

struct Parser<'a> {
    input: &'a str,
    var: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, var: &'a Indeterminate) -> Self {
        Parser {
            input,
            var: var.name(),
            pos: 0,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::invalid_input(self.input, self.pos, reason)
    }

    fn at_variable(&self) -> bool {
        let rest = self.rest();
        if self.var.is_empty() || !rest.starts_with(self.var) {
            return false;
        }
        // reject identifiers that merely start with the variable name
        !matches!(rest[self.var.len()..].chars().next(), Some(c) if c.is_alphanumeric() || c == '_')
    }

    fn digits(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn integer<T: CoeffBase>(&self, digits: &str) -> Result<T> {
        T::from_str_radix(digits, 10).map_err(|_| self.error("coefficient out of range"))
    }

    /// `digits ('.' digits)?`, decimals are kept exact
    fn number<T: CoeffBase>(&mut self) -> Result<Ratio<T>> {
        let whole = self.digits();
        if !self.eat(".") {
            if whole.is_empty() {
                return Err(self.error("expected a number"));
            }
            return Ok(Ratio::from_integer(self.integer(whole)?));
        }

        let frac = self.digits();
        if whole.is_empty() && frac.is_empty() {
            return Err(self.error("expected digits around `.`"));
        }
        let numer: T = self.integer(&format!("{}{}", whole, frac))?;
        let denom: T = self.integer(&format!("1{}", "0".repeat(frac.len())))?;
        Ok(Ratio::new(numer, denom))
    }

    /// `number ('/' number)?`
    fn fraction<T: CoeffBase>(&mut self) -> Result<Ratio<T>> {
        let numer = self.number()?;
        self.skip_ws();
        if !self.eat("/") {
            return Ok(numer);
        }
        self.skip_ws();
        let denom = self.number::<T>()?;
        if denom.is_zero() {
            return Err(self.error("division by zero"));
        }
        numer
            .checked_div(&denom)
            .ok_or_else(|| self.error("coefficient out of range"))
    }

    fn coefficient<T: CoeffBase>(&mut self) -> Result<Ratio<T>> {
        if !self.eat("(") {
            return self.fraction();
        }
        self.skip_ws();
        let negative = self.eat("-");
        self.skip_ws();
        let value = self.fraction::<T>()?;
        self.skip_ws();
        if !self.eat(")") {
            return Err(self.error("expected `)`"));
        }
        Ok(if negative { -value } else { value })
    }

    fn exponent(&mut self) -> Result<u32> {
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.error("expected a nonnegative integer exponent"));
        }
        digits
            .parse()
            .map_err(|_| self.error("exponent out of range"))
    }

    fn term<T: CoeffBase>(&mut self) -> Result<(u32, Ratio<T>)> {
        let coeff = match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' || c == '(' => Some(self.coefficient()?),
            _ => None,
        };
        self.skip_ws();

        let mut explicit_mul = false;
        if coeff.is_some() {
            if self.rest().starts_with("**") || self.rest().starts_with('^') {
                return Err(self.error("powers of constants are not supported"));
            }
            explicit_mul = self.eat("*");
            self.skip_ws();
        }

        if !self.at_variable() {
            return match coeff {
                Some(c) if !explicit_mul => Ok((0, c)),
                _ => Err(self.error(format!("expected `{}`", self.var))),
            };
        }
        self.pos += self.var.len();
        self.skip_ws();

        let degree = if self.eat("**") || self.eat("^") {
            self.skip_ws();
            self.exponent()?
        } else {
            1
        };
        Ok((degree, coeff.unwrap_or_else(Ratio::one)))
    }

    fn polynomial<T: CoeffBase>(mut self) -> Result<Polynomial<T>> {
        let mut coeffs = BTreeMap::new();

        self.skip_ws();
        if self.peek().is_none() {
            return Err(self.error("empty expression"));
        }
        let mut negative = if self.eat("-") {
            true
        } else {
            self.eat("+");
            false
        };

        loop {
            self.skip_ws();
            let (degree, coeff) = self.term::<T>()?;
            let coeff = if negative { -coeff } else { coeff };
            checked_accumulate(&mut coeffs, degree, coeff)
                .ok_or_else(|| self.error("coefficient out of range"))?;

            self.skip_ws();
            negative = match self.peek() {
                None => break,
                Some('+') => false,
                Some('-') => true,
                Some(c) => return Err(self.error(format!("unexpected `{}`", c))),
            };
            self.pos += 1;
        }

        Ok(Polynomial { coeffs })
    }
}
