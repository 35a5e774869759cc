//! Text grammar for coordinates: decimal degrees or sexagesimal
//! degrees/minutes/seconds, with an optional hemisphere letter.
//!
//! Accepted shapes include `48.8534`, `48.8534º`, `48º51'`, `48°51'7.3"N`
//! and `122.4194 W`. Whitespace between tokens is ignored.

use anyhow::{Result, anyhow, bail, ensure};
use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[regex("º|°")]
    Degrees,

    #[token("'")]
    Minutes,

    #[token("\"")]
    Seconds,

    #[regex("[NnSsEeWw]")]
    Hemisphere,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Value,
}

/// Coordinate text reduced to signed decimal degrees plus the hemisphere
/// letter it carried, if any. The caller decides which letters apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ParsedCoordinate {
    degrees: f64,
    hemisphere: Option<char>,
}

impl ParsedCoordinate {
    pub(crate) fn latitude_degrees(self) -> Result<f64> {
        match self.hemisphere {
            None | Some('N') => Ok(self.degrees),
            Some('S') => Ok(-self.degrees),
            Some(other) => bail!("hemisphere `{other}` does not apply to a latitude"),
        }
    }

    pub(crate) fn longitude_degrees(self) -> Result<f64> {
        match self.hemisphere {
            None | Some('E') => Ok(self.degrees),
            Some('W') => Ok(-self.degrees),
            Some(other) => bail!("hemisphere `{other}` does not apply to a longitude"),
        }
    }
}

pub(crate) fn parse_coordinate(input: &str) -> Result<ParsedCoordinate> {
    let mut lex = Lexer::new(input);

    let mut degrees: Option<f64> = None;
    let mut minutes: Option<f64> = None;
    let mut seconds: Option<f64> = None;
    let mut hemisphere: Option<char> = None;
    let mut pending: Option<f64> = None;

    while let Some(next) = lex.next() {
        let token = next.map_err(|()| anyhow!("cannot tokenize coordinate `{input}`"))?;
        match token {
            Token::Value => {
                ensure!(
                    pending.is_none(),
                    "two consecutive numbers without a unit mark in `{input}`"
                );
                pending = Some(lex.slice().parse()?);
            }
            Token::Degrees => {
                ensure!(degrees.is_none(), "duplicate degree mark in `{input}`");
                let Some(value) = pending.take() else {
                    bail!("degree mark without a number in `{input}`");
                };
                degrees = Some(value);
            }
            Token::Minutes => {
                ensure!(degrees.is_some(), "minutes before degrees in `{input}`");
                ensure!(minutes.is_none(), "duplicate minute mark in `{input}`");
                let Some(value) = pending.take() else {
                    bail!("minute mark without a number in `{input}`");
                };
                minutes = Some(value);
            }
            Token::Seconds => {
                ensure!(minutes.is_some(), "seconds before minutes in `{input}`");
                ensure!(seconds.is_none(), "duplicate second mark in `{input}`");
                let Some(value) = pending.take() else {
                    bail!("second mark without a number in `{input}`");
                };
                seconds = Some(value);
            }
            Token::Hemisphere => {
                ensure!(
                    hemisphere.is_none(),
                    "duplicate hemisphere letter in `{input}`"
                );
                let Some(letter) = lex.slice().chars().next() else {
                    bail!("empty hemisphere letter in `{input}`");
                };
                hemisphere = Some(letter.to_ascii_uppercase());
            }
        }
    }

    // a bare trailing number is plain decimal degrees
    if let Some(value) = pending.take() {
        ensure!(
            degrees.is_none() && minutes.is_none() && seconds.is_none(),
            "dangling number without a unit mark in `{input}`"
        );
        degrees = Some(value);
    }

    let Some(degrees) = degrees else {
        bail!("cannot parse a coordinate from `{input}`");
    };

    if minutes.is_some() || seconds.is_some() {
        ensure!(
            degrees.fract() == 0.0,
            "fractional degrees cannot carry minutes or seconds in `{input}`"
        );
    }
    let minutes = minutes.unwrap_or(0.0);
    let seconds = seconds.unwrap_or(0.0);
    if seconds != 0.0 {
        ensure!(
            minutes.fract() == 0.0,
            "fractional minutes cannot carry seconds in `{input}`"
        );
    }
    ensure!(
        (0.0..60.0).contains(&minutes),
        "minutes out of range [0, 60) in `{input}`"
    );
    ensure!(
        (0.0..60.0).contains(&seconds),
        "seconds out of range [0, 60) in `{input}`"
    );

    let negative = degrees.is_sign_negative();
    ensure!(
        hemisphere.is_none() || !negative,
        "hemisphere letter combined with a signed value in `{input}`"
    );

    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    let degrees = if negative { -magnitude } else { magnitude };

    Ok(ParsedCoordinate {
        degrees,
        hemisphere,
    })
}
