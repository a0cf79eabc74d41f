use crate::config::{Command, Settings};
use crate::core::{array, equality, format, math, types};
use crate::domain::value::Value;
use crate::utils::error::{Result, WunderError};
use serde_json::json;

fn parse_value(raw: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(raw)?;
    Ok(Value::from(json))
}

/// Runs one command against the library and returns its result as JSON.
pub fn execute(command: &Command, settings: &Settings) -> Result<serde_json::Value> {
    tracing::debug!(?command, "executing command");

    let output = match command {
        Command::Equal { left, right } => {
            json!(equality::is_equal(&parse_value(left)?, &parse_value(right)?))
        }
        Command::Flatten { array: raw } => {
            let value = parse_value(raw)?;
            let items = value
                .as_array()
                .ok_or(WunderError::NotASequence { kind: value.kind() })?;
            Value::Array(array::flatten(items)).to_json()
        }
        Command::Subtract { base, remove } => {
            let remaining = array::array_subtract(&parse_value(base)?, &parse_value(remove)?)?;
            Value::Array(remaining).to_json()
        }
        Command::Range { start, end, step } => {
            let values = match end {
                Some(end) => math::range(*start, *end, *step)?,
                None => math::range(0, *start, *step)?,
            };
            json!(values)
        }
        Command::Clamp { value, low, high } => json!(math::clamp(*value, *low, *high)?),
        Command::Normalize { value, low, high } => json!(math::normalize(*value, *low, *high)?),
        Command::Rand { low, high, float } => {
            let round = settings.random.round && !*float;
            json!(math::rand(*low, *high, round)?)
        }
        Command::Lpad { value, width, fill } => {
            let width = width.unwrap_or(settings.format.pad_width);
            let fill = match fill {
                Some(fill) => *fill,
                None => settings.pad_fill()?,
            };
            json!(format::lpad(value, width, fill))
        }
        Command::Duration { seconds } => {
            let parts = format::seconds_to_object(*seconds);
            json!({
                "parts": serde_json::to_value(parts)?,
                "text": parts.to_string(),
            })
        }
        Command::Email { address } => json!(types::is_email(address)),
    };

    Ok(output)
}
