pub mod error;
pub mod morphology;
mod record;

use std::collections::HashSet;

use serde_json::Deserializer;
use udmorph_protocol::{Edge, Node, NodeId, Sentence, SentenceId, Span};

pub use error::DecodeError;
use morphology::resolve_properties;
use record::{RawNode, RawSentence};

/// What to do with property keys outside the known feature catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFeaturePolicy {
    /// Fail the record with [`DecodeError::UnknownFeature`].
    #[default]
    Reject,
    /// Drop the key and keep decoding.
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub unknown_features: UnknownFeaturePolicy,
}

/// Decodes one EPE sentence record at a time.
#[derive(Debug, Clone, Default)]
pub struct EpeDecoder {
    options: DecodeOptions,
}

impl EpeDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Primary entry point: raw EPE text -> typed Sentence.
    ///
    /// The input must hold exactly one record. Anything that does not fit the
    /// vocabularies fails the whole record; there is no partial result.
    pub fn decode(&self, raw: &str) -> Result<Sentence, DecodeError> {
        let mut records = Deserializer::from_str(raw).into_iter::<RawSentence>();

        let record = match records.next() {
            Some(record) => record?,
            None => return Err(DecodeError::EmptyRecord),
        };

        match records.next() {
            None => {}
            Some(Ok(_)) => {
                return Err(DecodeError::TrailingRecord {
                    sentence_id: SentenceId::new(record.id),
                })
            }
            Some(Err(e)) => return Err(e.into()),
        }

        let sentence = self.build_sentence(record)?;
        tracing::debug!(
            sentence = %sentence.id,
            nodes = sentence.nodes.len(),
            "decoded EPE record"
        );
        Ok(sentence)
    }

    fn build_sentence(&self, record: RawSentence) -> Result<Sentence, DecodeError> {
        let mut seen = HashSet::with_capacity(record.nodes.len());
        let mut nodes = Vec::with_capacity(record.nodes.len());

        for raw in record.nodes {
            let node = self.build_node(raw)?;
            if !seen.insert(node.id) {
                return Err(DecodeError::DuplicateNode { node_id: node.id });
            }
            nodes.push(node);
        }

        // Edges may point forward, so targets are checked once all ids are known.
        for node in &nodes {
            if let Some(edge) = node.edges.iter().find(|edge| !seen.contains(&edge.target)) {
                return Err(DecodeError::DanglingEdge {
                    node_id: node.id,
                    target: edge.target,
                });
            }
        }

        Ok(Sentence {
            id: SentenceId::new(record.id),
            nodes,
        })
    }

    fn build_node(&self, raw: RawNode) -> Result<Node, DecodeError> {
        let node_id = NodeId::new(raw.id);

        let form = raw.form.ok_or(DecodeError::MissingField {
            node_id,
            field: "form",
        })?;

        let bag = raw.properties.ok_or(DecodeError::MissingField {
            node_id,
            field: "properties",
        })?;
        let properties = resolve_properties(node_id, &bag, &self.options)?;

        let span = match (raw.start, raw.end) {
            (Some(start), Some(end)) => Some(Span::new(start, end)),
            (None, None) => None,
            (Some(_), None) => return Err(DecodeError::MissingField { node_id, field: "end" }),
            (None, Some(_)) => return Err(DecodeError::MissingField { node_id, field: "start" }),
        };

        let edges = raw
            .edges
            .into_iter()
            .map(|edge| Edge {
                label: edge.label,
                target: NodeId::new(edge.target),
            })
            .collect();

        Ok(Node {
            id: node_id,
            form,
            top: raw.top,
            span,
            properties,
            edges,
        })
    }
}
