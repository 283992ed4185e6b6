use serde_json::Value;

use crate::error::NarrativeError;
use crate::model::minister::HappinessChange;
use crate::model::pmq::PmqEvaluation;
use crate::model::political_event::{event_image_url, Consequences, EventOption, PoliticalEvent};
use crate::model::stats::StatDelta;

/// Models love wrapping JSON in markdown fences. Peel them off.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // info string ("json") may run straight into the body
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Decode a dilemma, defaulting missing numbers to 0 and missing arrays to
/// empty. A dilemma without a title, description or at least one labelled
/// option is rejected.
pub fn decode_dilemma(raw: &str, event_id: &str) -> Result<PoliticalEvent, NarrativeError> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| NarrativeError::Malformed(format!("invalid JSON: {}", e)))?;

    let title = required_str(&value, "title")?;
    let description = required_str(&value, "description")?;

    let Some(raw_options) = value.get("options").and_then(Value::as_array) else {
        return Err(NarrativeError::Malformed("options must be an array".to_string()));
    };

    let options: Vec<EventOption> = raw_options.iter().filter_map(decode_option).collect();
    if options.is_empty() {
        return Err(NarrativeError::Malformed("dilemma has no usable options".to_string()));
    }
    if options.len() < raw_options.len() {
        log::warn!(
            "dropped {} unlabelled option(s) from dilemma '{}'",
            raw_options.len() - options.len(),
            title
        );
    }

    Ok(PoliticalEvent {
        id: event_id.to_string(),
        title,
        description,
        image: event_image_url(event_id),
        options,
    })
}

fn decode_option(value: &Value) -> Option<EventOption> {
    let label = value.get("label").and_then(Value::as_str)?.trim();
    if label.is_empty() {
        return None;
    }

    Some(EventOption {
        label: label.to_string(),
        description: text_or_empty(value, "description"),
        flavour_text: text_or_empty(value, "flavourText"),
        consequences: value
            .get("consequences")
            .map(decode_consequences)
            .unwrap_or_default(),
    })
}

fn decode_consequences(value: &Value) -> Consequences {
    let stat = |key: &str| value.get(key).map(lenient_int).map(|n| n.unwrap_or(0));

    let minister_happiness = value
        .get("ministerHappiness")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let name = item.get("ministerName").and_then(Value::as_str)?;
                    let delta = item.get("happinessDelta").and_then(lenient_int).unwrap_or(0);
                    Some(HappinessChange {
                        minister_name: name.to_string(),
                        happiness_delta: delta,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Consequences {
        stats: StatDelta {
            approval: stat("approval"),
            party_unity: stat("partyUnity"),
            budget: stat("budget"),
            influence: stat("influence"),
            media_perception: stat("mediaPerception"),
            national_security: stat("nationalSecurity"),
        },
        minister_happiness,
    }
}

/// Decode a PMQ verdict. Anything unreadable becomes the neutral verdict.
pub fn decode_evaluation(raw: &str) -> PmqEvaluation {
    let value: Value = match serde_json::from_str(strip_code_fences(raw)) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("unreadable PMQ verdict, using neutral fallback: {}", e);
            return PmqEvaluation::neutral();
        }
    };

    let Some(score) = value.get("score").and_then(lenient_int) else {
        log::warn!("PMQ verdict without a score, using neutral fallback");
        return PmqEvaluation::neutral();
    };

    let commentary = value
        .get("commentary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| PmqEvaluation::neutral().commentary);

    PmqEvaluation {
        score: score.clamp(1, 10),
        commentary,
    }
}

/// Numbers arrive as ints, floats or occasionally strings.
fn lenient_int(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_start_matches('+').parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() {
        return None;
    }
    Some(n.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
}

fn required_str(value: &Value, key: &str) -> Result<String, NarrativeError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| NarrativeError::Malformed(format!("missing '{}'", key)))
}

fn text_or_empty(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
