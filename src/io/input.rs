//! Reading the three coefficients a, b, c from a text stream.

use std::io::{self, BufRead};

use thiserror::Error;

const NAMES: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("reading coefficients: {0}")]
    Io(#[from] io::Error),
    #[error("missing coefficient `{name}` (expected three numbers: a b c)")]
    Missing { name: &'static str },
    #[error("coefficient `{name}` is not a number: {token:?}")]
    Invalid { name: &'static str, token: String },
    #[error("coefficient `{name}` must be finite, got {token:?}")]
    NotFinite { name: &'static str, token: String },
}

/// Raw coefficients as typed by the user; `a` may still be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Read whitespace-separated tokens line by line until three are available
/// (or EOF), then parse them. Anything after the third token is ignored.
pub fn read_coefficients<R: BufRead>(mut reader: R) -> Result<Coefficients, InputError> {
    let mut tokens: Vec<String> = Vec::with_capacity(3);
    let mut line = String::new();
    while tokens.len() < 3 {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }
    parse_tokens(tokens.iter().map(String::as_str))
}

/// Parse the first three whitespace-separated numbers in `text`.
pub fn parse_coefficients(text: &str) -> Result<Coefficients, InputError> {
    parse_tokens(text.split_whitespace())
}

fn parse_tokens<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Coefficients, InputError> {
    let mut values = [0.0f64; 3];
    for (slot, name) in values.iter_mut().zip(NAMES) {
        let token = tokens.next().ok_or(InputError::Missing { name })?;
        *slot = parse_one(name, token)?;
    }
    let [a, b, c] = values;
    Ok(Coefficients { a, b, c })
}

fn parse_one(name: &'static str, token: &str) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::Invalid {
        name,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite { name, token: token.to_string() });
    }
    Ok(value)
}
