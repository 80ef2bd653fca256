//! Tokenize path data into raw commands

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::{Marker, RawCommand};
use crate::errors::PathDataError;
use crate::log::trace;
use crate::types::Rounding;
use crate::{PathDataParser, Rule};

/// Split a `d` attribute into one [`RawCommand`] per marker letter.
///
/// Each command owns the numbers between its marker and the next one. Text
/// before the first marker, and anything that is neither a marker nor a
/// number, is skipped.
pub fn tokenize(data: &str, rounding: Rounding) -> Result<Vec<RawCommand>, PathDataError> {
    let pairs = PathDataParser::parse(Rule::path_data, data).map_err(|e| {
        let span = match &e.location {
            InputLocation::Pos(pos) => (*pos, 0),
            InputLocation::Span((start, end)) => (*start, end - start),
        };
        PathDataError::Syntax {
            message: e.variant.message().to_string(),
            src: path_source(data),
            span: span.into(),
        }
    })?;

    let mut commands = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::path_data {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::segment {
                    commands.push(parse_segment(inner, data, rounding)?);
                }
            }
        }
    }

    Ok(commands)
}

fn parse_segment(
    pair: Pair<Rule>,
    data: &str,
    rounding: Rounding,
) -> Result<RawCommand, PathDataError> {
    let start = pair.as_span().start();
    let end = start + pair.as_str().trim_end().len();

    let mut marker = None;
    let mut values = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::marker => marker = inner.as_str().chars().next().and_then(Marker::from_char),
            Rule::number => values.push(parse_number(&inner, data, rounding)?),
            _ => {}
        }
    }

    let marker = marker.ok_or_else(|| PathDataError::Syntax {
        message: "segment without a marker".to_string(),
        src: path_source(data),
        span: (start, end - start).into(),
    })?;

    trace!(marker = %marker, ?values, "raw command");

    Ok(RawCommand {
        marker,
        values,
        span: start..end,
    })
}

fn parse_number(pair: &Pair<Rule>, data: &str, rounding: Rounding) -> Result<i64, PathDataError> {
    let text = pair.as_str();
    let value: f64 = text.parse().map_err(|_| PathDataError::Syntax {
        message: format!("invalid number `{text}`"),
        src: path_source(data),
        span: (pair.as_span().start(), text.len()).into(),
    })?;
    Ok(rounding.apply(value))
}

pub(crate) fn path_source(data: &str) -> miette::NamedSource<String> {
    miette::NamedSource::new("d", data.to_string())
}
