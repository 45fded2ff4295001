use alloc::string::String;
use alloc::vec::Vec;

use crate::ids::{NodeId, SentenceId};
use crate::morphology::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One annotated input text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sentence {
    pub id: SentenceId,
    /// Surface order.
    pub nodes: Vec<Node>,
}

impl Sentence {
    /// A sentence with no tokens, produced for blank input text.
    pub fn empty(id: SentenceId) -> Self {
        Self { id, nodes: Vec::new() }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Nodes flagged as graph roots.
    pub fn tops(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_top())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Character anchors of a token in the submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outgoing dependency edge, passed through as the annotator wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub label: String,
    pub target: NodeId,
}

/// One token and its annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub form: String,
    pub top: Option<bool>,
    pub span: Option<Span>,
    pub properties: Properties,
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn is_top(&self) -> bool {
        self.top == Some(true)
    }
}

/// Lexical and morphological feature bundle of a node.
///
/// Every optional slot is `None` when the annotator did not emit it. Nothing
/// here is ever filled in with a fallback member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Properties {
    pub lemma: Option<String>,
    pub xpos: Option<String>,
    pub upos: Upos,

    pub pron_type: Option<PronType>,
    pub num_type: Option<NumType>,
    pub markers: Markers,

    pub gender: Option<Gender>,
    pub animacy: Option<Animacy>,
    pub noun_class: Option<NounClass>,
    pub number: Option<Number>,
    pub number_psor: Option<Number>,
    pub case: Option<Case>,
    pub definite: Option<Definite>,
    pub degree: Option<Degree>,

    pub verb_form: Option<VerbForm>,
    pub mood: Option<Mood>,
    pub tense: Option<Tense>,
    pub aspect: Option<Aspect>,
    pub voice: Option<Voice>,
    pub evident: Option<Evident>,
    pub polarity: Option<Polarity>,
    pub person: Option<Person>,
    pub polite: Option<Polite>,
    pub clusivity: Option<Clusivity>,

    pub adp_type: Option<AdpType>,
    pub part_type: Option<PartType>,
    /// `None` means no style is marked on the token.
    pub style: Option<Style>,
}

impl Properties {
    /// A bundle carrying only the mandatory part of speech.
    pub fn new(upos: Upos) -> Self {
        Self {
            lemma: None,
            xpos: None,
            upos,
            pron_type: None,
            num_type: None,
            markers: Markers::empty(),
            gender: None,
            animacy: None,
            noun_class: None,
            number: None,
            number_psor: None,
            case: None,
            definite: None,
            degree: None,
            verb_form: None,
            mood: None,
            tense: None,
            aspect: None,
            voice: None,
            evident: None,
            polarity: None,
            person: None,
            polite: None,
            clusivity: None,
            adp_type: None,
            part_type: None,
            style: None,
        }
    }

    pub fn is_possessive(&self) -> bool {
        self.markers.contains(Markers::POSS)
    }

    pub fn is_reflexive(&self) -> bool {
        self.markers.contains(Markers::REFLEX)
    }

    pub fn is_foreign(&self) -> bool {
        self.markers.contains(Markers::FOREIGN)
    }

    pub fn is_abbreviation(&self) -> bool {
        self.markers.contains(Markers::ABBR)
    }

    pub fn is_typo(&self) -> bool {
        self.markers.contains(Markers::TYPO)
    }

    /// True when no optional feature or marker is present.
    pub fn has_no_features(&self) -> bool {
        *self == Self {
            lemma: self.lemma.clone(),
            xpos: self.xpos.clone(),
            ..Self::new(self.upos)
        }
    }
}
