use serde_json::{Map, Value};
use udmorph_protocol::{
    AdpType, Animacy, Aspect, Case, Clusivity, Definite, Degree, Evident, Feature, Gender,
    Markers, Mood, NodeId, NounClass, NumType, Number, PartType, Person, Polarity, Polite,
    PronType, Properties, Style, Tense, Upos, VerbForm, Voice,
};

use crate::error::DecodeError;
use crate::{DecodeOptions, UnknownFeaturePolicy};

/// Key under which the annotator writes the possessor's number.
pub const NUMBER_PSOR: &str = "Number[psor]";

/// Turns one node's property bag into typed [`Properties`].
///
/// `upos` is mandatory. Every other known key is optional, but when present
/// its value must be a member of the key's vocabulary.
pub(crate) fn resolve_properties(
    node_id: NodeId,
    bag: &Map<String, Value>,
    options: &DecodeOptions,
) -> Result<Properties, DecodeError> {
    let upos = match bag.get(Upos::KEY) {
        Some(value) => feature::<Upos>(node_id, Upos::KEY, value)?,
        None => {
            return Err(DecodeError::MissingField {
                node_id,
                field: Upos::KEY,
            })
        }
    };

    let mut props = Properties::new(upos);

    for (key, value) in bag {
        match key.as_str() {
            "upos" => {}
            "lemma" => props.lemma = Some(text(node_id, key, value)?.to_string()),
            "xpos" => props.xpos = Some(text(node_id, key, value)?.to_string()),

            PronType::KEY => props.pron_type = Some(feature(node_id, key, value)?),
            NumType::KEY => props.num_type = Some(feature(node_id, key, value)?),

            Gender::KEY => props.gender = Some(feature(node_id, key, value)?),
            Animacy::KEY => props.animacy = Some(feature(node_id, key, value)?),
            NounClass::KEY => props.noun_class = Some(feature(node_id, key, value)?),
            Number::KEY => props.number = Some(feature(node_id, key, value)?),
            NUMBER_PSOR => props.number_psor = Some(feature::<Number>(node_id, key, value)?),
            Case::KEY => props.case = Some(feature(node_id, key, value)?),
            Definite::KEY => props.definite = Some(feature(node_id, key, value)?),
            Degree::KEY => props.degree = Some(feature(node_id, key, value)?),

            VerbForm::KEY => props.verb_form = Some(feature(node_id, key, value)?),
            Mood::KEY => props.mood = Some(feature(node_id, key, value)?),
            Tense::KEY => props.tense = Some(feature(node_id, key, value)?),
            Aspect::KEY => props.aspect = Some(feature(node_id, key, value)?),
            Voice::KEY => props.voice = Some(feature(node_id, key, value)?),
            Evident::KEY => props.evident = Some(feature(node_id, key, value)?),
            Polarity::KEY => props.polarity = Some(feature(node_id, key, value)?),
            Person::KEY => props.person = Some(feature(node_id, key, value)?),
            Polite::KEY => props.polite = Some(feature(node_id, key, value)?),
            Clusivity::KEY => props.clusivity = Some(feature(node_id, key, value)?),

            AdpType::KEY => props.adp_type = Some(feature(node_id, key, value)?),
            PartType::KEY => props.part_type = Some(feature(node_id, key, value)?),
            Style::KEY => props.style = Some(feature(node_id, key, value)?),

            other => match Markers::from_key(other) {
                Some(marker) => {
                    let raw = text(node_id, key, value)?;
                    if !raw.eq_ignore_ascii_case(Markers::YES) {
                        return Err(invalid(node_id, key, raw));
                    }
                    props.markers |= marker;
                }
                None => match options.unknown_features {
                    UnknownFeaturePolicy::Reject => {
                        return Err(DecodeError::UnknownFeature {
                            node_id,
                            field: key.clone(),
                            value: render(value),
                        })
                    }
                    UnknownFeaturePolicy::Ignore => {
                        tracing::debug!(node = %node_id, feature = %key, "skipping unknown feature");
                    }
                },
            },
        }
    }

    Ok(props)
}

fn feature<F: Feature>(node_id: NodeId, field: &str, value: &Value) -> Result<F, DecodeError> {
    let raw = text(node_id, field, value)?;
    F::parse(raw).ok_or_else(|| invalid(node_id, field, raw))
}

fn text<'a>(node_id: NodeId, field: &str, value: &'a Value) -> Result<&'a str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| invalid(node_id, field, &render(value)))
}

fn invalid(node_id: NodeId, field: &str, raw: &str) -> DecodeError {
    DecodeError::InvalidValue {
        node_id,
        field: field.to_string(),
        value: raw.to_string(),
    }
}

/// Strings without their JSON quotes, anything else as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
