//! Closed Universal Dependencies vocabularies.
//!
//! Every feature is a fieldless enum with an exhaustive member list and no
//! `Default` impl. A feature missing from the annotator output stays `None`
//! in [`crate::Properties`].

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bitflags::bitflags;

/// A closed vocabulary keyed by its UD feature name.
pub trait Feature: Copy + Sized + 'static {
    /// The UD feature name as it appears in annotator output.
    const KEY: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Canonical UD spelling of this member.
    fn as_str(self) -> &'static str;

    /// Exact lookup, ignoring ASCII case. Never picks a "nearest" member.
    ///
    /// Vocabularies with alternative spellings also accept those here.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str().eq_ignore_ascii_case(raw))
    }
}

/// A raw value that is not a member of the feature's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub feature: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {} value", self.value, self.feature)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownValue {}

macro_rules! define_feature {
    (
        $(#[$meta:meta])*
        $name:ident = $key:literal {
            $($variant:ident => $raw:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $raw $(, alias = $alias)*))]
                $variant,
            )+
        }

        impl Feature for $name {
            const KEY: &'static str = $key;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }

            fn parse(raw: &str) -> Option<Self> {
                $(
                    if [$raw $(, $alias)*].iter().any(|s| s.eq_ignore_ascii_case(raw)) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as Feature>::parse(raw).ok_or_else(|| UnknownValue {
                    feature: $key,
                    value: raw.to_string(),
                })
            }
        }
    };
}

define_feature! {
    /// Universal part-of-speech tag. The one mandatory classification per token.
    Upos = "upos" {
        Adj => "ADJ",
        Adp => "ADP",
        Adv => "ADV",
        Aux => "AUX",
        Cconj => "CCONJ",
        Det => "DET",
        Intj => "INTJ",
        Noun => "NOUN",
        Num => "NUM",
        Part => "PART",
        Pron => "PRON",
        Propn => "PROPN",
        Punct => "PUNCT",
        Sconj => "SCONJ",
        Sym => "SYM",
        Verb => "VERB",
        X => "X",
    }
}

// Lexical features

define_feature! {
    /// `Int,Rel` is the multi-valued form UDPipe emits; `IntRel` is accepted too.
    PronType = "PronType" {
        Art => "Art",
        Dem => "Dem",
        Emp => "Emp",
        Exc => "Exc",
        Ind => "Ind",
        Int => "Int",
        IntRel => "Int,Rel" | "IntRel",
        Neg => "Neg",
        Prs => "Prs",
        Rcp => "Rcp",
        Rel => "Rel",
        Tot => "Tot",
    }
}

define_feature! {
    NumType = "NumType" {
        Card => "Card",
        Dist => "Dist",
        Frac => "Frac",
        Mult => "Mult",
        Ord => "Ord",
        Range => "Range",
        Sets => "Sets",
    }
}

bitflags! {
    /// Presence-only lexical features. Their only UD value is `Yes`,
    /// so a set bit means "Yes" and a clear bit means the feature is absent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Markers: u8 {
        const POSS = 1;
        const REFLEX = 2;
        const FOREIGN = 4;
        const ABBR = 8;
        const TYPO = 16;
    }
}

impl Markers {
    /// UD feature name for each marker bit.
    pub const KEYS: [(&'static str, Markers); 5] = [
        ("Poss", Markers::POSS),
        ("Reflex", Markers::REFLEX),
        ("Foreign", Markers::FOREIGN),
        ("Abbr", Markers::ABBR),
        ("Typo", Markers::TYPO),
    ];

    /// The only value a presence-only feature may carry.
    pub const YES: &'static str = "Yes";

    pub fn from_key(key: &str) -> Option<Markers> {
        Self::KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, marker)| *marker)
    }
}

// Nominal inflection

define_feature! {
    Gender = "Gender" {
        Masc => "Masc",
        Fem => "Fem",
        Com => "Com",
        Neut => "Neut",
    }
}

define_feature! {
    Animacy = "Animacy" {
        Anim => "Anim",
        Hum => "Hum",
        Inan => "Inan",
        Nhum => "Nhum",
    }
}

define_feature! {
    NounClass = "NounClass" {
        Bantu1 => "Bantu1",
        Bantu2 => "Bantu2",
        Bantu3 => "Bantu3",
        Bantu4 => "Bantu4",
        Bantu5 => "Bantu5",
        Bantu6 => "Bantu6",
        Bantu7 => "Bantu7",
        Bantu8 => "Bantu8",
        Bantu9 => "Bantu9",
        Bantu10 => "Bantu10",
        Bantu11 => "Bantu11",
        Bantu12 => "Bantu12",
        Bantu13 => "Bantu13",
        Bantu14 => "Bantu14",
        Bantu15 => "Bantu15",
        Bantu16 => "Bantu16",
        Bantu17 => "Bantu17",
        Bantu18 => "Bantu18",
        Bantu19 => "Bantu19",
        Bantu20 => "Bantu20",
    }
}

define_feature! {
    /// Also the vocabulary of `Number[psor]`.
    Number = "Number" {
        Coll => "Coll",
        Count => "Count",
        Dual => "Dual",
        Grpa => "Grpa",
        Grpl => "Grpl",
        Inv => "Inv",
        Pauc => "Pauc",
        Plur => "Plur",
        Ptan => "Ptan",
        Sing => "Sing",
        Tri => "Tri",
    }
}

define_feature! {
    Case = "Case" {
        Abs => "Abs",
        Acc => "Acc",
        Erg => "Erg",
        Nom => "Nom",
        Abe => "Abe",
        Ben => "Ben",
        Cau => "Cau",
        Cmp => "Cmp",
        Cns => "Cns",
        Com => "Com",
        Dat => "Dat",
        Dis => "Dis",
        Equ => "Equ",
        Gen => "Gen",
        Ins => "Ins",
        Par => "Par",
        Tem => "Tem",
        Tra => "Tra",
        Voc => "Voc",
        Abl => "Abl",
        Add => "Add",
        Ade => "Ade",
        All => "All",
        Del => "Del",
        Ela => "Ela",
        Ess => "Ess",
        Ill => "Ill",
        Ine => "Ine",
        Lat => "Lat",
        Loc => "Loc",
        Per => "Per",
        Sub => "Sub",
        Sup => "Sup",
        Ter => "Ter",
    }
}

define_feature! {
    Definite = "Definite" {
        Com => "Com",
        Cons => "Cons",
        Def => "Def",
        Ind => "Ind",
        Spec => "Spec",
    }
}

define_feature! {
    Degree = "Degree" {
        Abs => "Abs",
        Cmp => "Cmp",
        Equ => "Equ",
        Pos => "Pos",
        Sup => "Sup",
    }
}

// Verbal inflection

define_feature! {
    VerbForm = "VerbForm" {
        Conv => "Conv",
        Fin => "Fin",
        Gdv => "Gdv",
        Ger => "Ger",
        Inf => "Inf",
        Part => "Part",
        Sup => "Sup",
        Vnoun => "Vnoun",
    }
}

define_feature! {
    Mood = "Mood" {
        Adm => "Adm",
        Cnd => "Cnd",
        Des => "Des",
        Imp => "Imp",
        Ind => "Ind",
        Jus => "Jus",
        Nec => "Nec",
        Opt => "Opt",
        Pot => "Pot",
        Prp => "Prp",
        Qot => "Qot",
        Sub => "Sub",
    }
}

define_feature! {
    Tense = "Tense" {
        Past => "Past",
        Pres => "Pres",
        Fut => "Fut",
        Imp => "Imp",
        Pqp => "Pqp",
    }
}

define_feature! {
    Aspect = "Aspect" {
        Hab => "Hab",
        Imp => "Imp",
        Iter => "Iter",
        Perf => "Perf",
        Prog => "Prog",
        Prosp => "Prosp",
    }
}

define_feature! {
    Voice = "Voice" {
        Act => "Act",
        Antip => "Antip",
        Cau => "Cau",
        Dir => "Dir",
        Inv => "Inv",
        Mid => "Mid",
        Pass => "Pass",
        Rcp => "Rcp",
    }
}

define_feature! {
    Evident = "Evident" {
        Fh => "Fh",
        Nfh => "Nfh",
    }
}

define_feature! {
    Polarity = "Polarity" {
        Neg => "Neg",
        Pos => "Pos",
    }
}

define_feature! {
    /// UD writes person as a digit.
    Person = "Person" {
        Zero => "0",
        First => "1",
        Second => "2",
        Third => "3",
        Fourth => "4",
    }
}

define_feature! {
    Polite = "Polite" {
        Elev => "Elev",
        Form => "Form",
        Humb => "Humb",
        Infm => "Infm",
    }
}

define_feature! {
    Clusivity = "Clusivity" {
        Ex => "Ex",
        In => "In",
    }
}

// Other

define_feature! {
    AdpType = "AdpType" {
        Prep => "Prep",
        Post => "Post",
        Circ => "Circ",
        Voc => "Voc",
    }
}

define_feature! {
    PartType = "PartType" {
        Mod => "Mod",
        Emp => "Emp",
        Res => "Res",
        Inf => "Inf",
        Vbp => "Vbp",
    }
}

define_feature! {
    Style = "Style" {
        Arch => "Arch",
        Rare => "Rare",
        Form => "Form",
        Poet => "Poet",
        Norm => "Norm",
        Coll => "Coll",
        Vrnc => "Vrnc",
        Slng => "Slng",
        Expr => "Expr",
        Derg => "Derg",
        Vulg => "Vulg",
    }
}
