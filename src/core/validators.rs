//! Name and attendance validators.
//!
//! Both come in two forms: a `check_*` function that reports which rule
//! rejected the input, and a boolean form for use in `if` guards. The
//! boolean form is always `check_*(..).is_ok()`.

use crate::core::coercion::{is_integer, js_trim, to_number};
use crate::domain::model::{InputValue, ValueKind};
use std::fmt;
use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 3;

/// Which argument of `hours_attended` a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Attended,
    Length,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Attended => f.write_str("attended"),
            Position::Length => f.write_str("length"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("name must be text")]
    NotText,

    #[error("name is empty after trimming")]
    BlankText,

    #[error("name is {len} UTF-16 unit(s) long, at least {min} required")]
    TooShort { len: usize, min: usize },

    #[error("{position} is neither text nor a number")]
    NotCoercible { position: Position },

    #[error("{position} is empty text")]
    BlankNumber { position: Position },

    #[error("{position} is not a number")]
    NotANumber { position: Position },

    #[error("attended and length are both negative")]
    BothNegative,

    #[error("{position} is not a whole number")]
    NotInteger { position: Position },

    #[error("attended ({attended}) exceeds length ({length})")]
    OutOfOrder { attended: f64, length: f64 },
}

pub fn check_name(value: &InputValue) -> Result<(), Rejection> {
    let text = value.as_text().ok_or(Rejection::NotText)?;
    let trimmed = js_trim(text);
    if trimmed.is_empty() {
        return Err(Rejection::BlankText);
    }

    // UTF-16 code units, as `String.length` counts them
    let len = trimmed.encode_utf16().count();
    if len < MIN_NAME_LENGTH {
        return Err(Rejection::TooShort {
            len,
            min: MIN_NAME_LENGTH,
        });
    }
    Ok(())
}

pub fn is_valid_name(value: &InputValue) -> bool {
    check_name(value).is_ok()
}

fn check_shape(value: &InputValue, position: Position) -> Result<(), Rejection> {
    match value.kind() {
        ValueKind::Textual => match value.as_text() {
            Some(s) if !js_trim(s).is_empty() => Ok(()),
            _ => Err(Rejection::BlankNumber { position }),
        },
        ValueKind::Numeric => Ok(()),
        ValueKind::Other => Err(Rejection::NotCoercible { position }),
    }
}

pub fn check_hours(attended: &InputValue, length: &InputValue) -> Result<(), Rejection> {
    check_shape(attended, Position::Attended)?;
    check_shape(length, Position::Length)?;

    let a = to_number(attended);
    let l = to_number(length);

    if a.is_nan() {
        return Err(Rejection::NotANumber {
            position: Position::Attended,
        });
    }
    if l.is_nan() {
        return Err(Rejection::NotANumber {
            position: Position::Length,
        });
    }

    // Only the pair is rejected here; a single negative value falls through.
    if a < 0.0 && l < 0.0 {
        return Err(Rejection::BothNegative);
    }

    if !is_integer(a) {
        return Err(Rejection::NotInteger {
            position: Position::Attended,
        });
    }
    if !is_integer(l) {
        return Err(Rejection::NotInteger {
            position: Position::Length,
        });
    }

    if a > l {
        return Err(Rejection::OutOfOrder {
            attended: a,
            length: l,
        });
    }
    Ok(())
}

pub fn hours_attended(attended: &InputValue, length: &InputValue) -> bool {
    check_hours(attended, length).is_ok()
}
