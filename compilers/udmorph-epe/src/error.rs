use thiserror::Error;
use udmorph_protocol::{NodeId, SentenceId};

/// Why an EPE record could not be turned into a [`udmorph_protocol::Sentence`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed EPE record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("annotator output contains no EPE record")]
    EmptyRecord,

    #[error("expected a single EPE record, found another after sentence {sentence_id}")]
    TrailingRecord { sentence_id: SentenceId },

    #[error("node {node_id}: missing mandatory field `{field}`")]
    MissingField { node_id: NodeId, field: &'static str },

    #[error("node {node_id}: `{value}` is not a valid {field} value")]
    InvalidValue {
        node_id: NodeId,
        field: String,
        value: String,
    },

    #[error("node {node_id}: unknown feature `{field}` = `{value}`")]
    UnknownFeature {
        node_id: NodeId,
        field: String,
        value: String,
    },

    #[error("node id {node_id} occurs more than once")]
    DuplicateNode { node_id: NodeId },

    #[error("node {node_id}: edge points at missing node {target}")]
    DanglingEdge { node_id: NodeId, target: NodeId },
}

impl DecodeError {
    /// The node the failure was detected on, if it is node-specific.
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            DecodeError::MissingField { node_id, .. }
            | DecodeError::InvalidValue { node_id, .. }
            | DecodeError::UnknownFeature { node_id, .. }
            | DecodeError::DuplicateNode { node_id }
            | DecodeError::DanglingEdge { node_id, .. } => Some(*node_id),
            DecodeError::Malformed(_)
            | DecodeError::EmptyRecord
            | DecodeError::TrailingRecord { .. } => None,
        }
    }

    /// The property or record field that failed, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField { field, .. } => Some(field),
            DecodeError::InvalidValue { field, .. } | DecodeError::UnknownFeature { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}
