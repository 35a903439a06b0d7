//! Structured morphological readings
//!
//! Tags arrive in the colon-separated notation of the German tagger
//! (`VER:MOD:3:SIN:PRÄ`, `SUB:NOM:SIN:NEU`, `PA1:NOM:SIN:NEU:GRU:DEF:VER`)
//! and are parsed once into a [`PosTag`] record. All detector predicates
//! operate on the parsed fields.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Part-of-speech category, the first field of a tag
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `VER`
    Verb,
    /// `SUB`
    Noun,
    /// `EIG`
    ProperNoun,
    /// `ADJ`
    Adjective,
    /// `PA1`, present participle used as adjective
    Participle1,
    /// `PA2`, past participle used as adjective
    Participle2,
    /// `ART`
    Article,
    /// `PRO`
    Pronoun,
    /// `PRP`
    Preposition,
    /// `KON`
    Conjunction,
    /// `ADV`
    Adverb,
    /// `NEG`
    Negation,
    /// `ZAL`
    Numeral,
    /// `SENT_START`
    SentenceStart,
    /// Any category the detector does not distinguish
    Other,
}

impl PartOfSpeech {
    fn from_code(code: &str) -> Self {
        match code {
            "VER" => Self::Verb,
            "SUB" => Self::Noun,
            "EIG" => Self::ProperNoun,
            "ADJ" => Self::Adjective,
            "PA1" => Self::Participle1,
            "PA2" => Self::Participle2,
            "ART" => Self::Article,
            "PRO" => Self::Pronoun,
            "PRP" => Self::Preposition,
            "KON" => Self::Conjunction,
            "ADV" => Self::Adverb,
            "NEG" => Self::Negation,
            "ZAL" => Self::Numeral,
            "SENT_START" => Self::SentenceStart,
            _ => Self::Other,
        }
    }
}

/// Sub-kind named by the second tag field
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SubCategory {
    /// `AUX`
    Auxiliary,
    /// `MOD`
    Modal,
    /// `UNT`
    Subordinating,
    /// `NEB`
    Coordinating,
    /// `POS`
    Possessive,
    /// `DEM`
    Demonstrative,
    /// `IND`
    Indefinite,
    /// `DEF`
    Definite,
    /// `PER`
    Personal,
    /// `REL`
    Relative,
    /// `INR`
    Interrogative,
    /// `REF`
    Reflexive,
    /// `PRD`
    Predicative,
}

impl SubCategory {
    fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "AUX" => Self::Auxiliary,
            "MOD" => Self::Modal,
            "UNT" => Self::Subordinating,
            "NEB" => Self::Coordinating,
            "POS" => Self::Possessive,
            "DEM" => Self::Demonstrative,
            "IND" => Self::Indefinite,
            "DEF" => Self::Definite,
            "PER" => Self::Personal,
            "REL" => Self::Relative,
            "INR" => Self::Interrogative,
            "REF" => Self::Reflexive,
            "PRD" => Self::Predicative,
            _ => return None,
        })
    }
}

/// Non-finite verb forms
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VerbForm {
    /// `INF`
    Infinitive,
    /// `EIZ`, infinitive with incorporated "zu"
    ZuInfinitive,
    /// `PA1`
    PresentParticiple,
    /// `PA2`
    PastParticiple,
    /// `IMP`
    Imperative,
}

/// Grammatical person
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

/// Grammatical gender
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Grammatical case
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

/// One morphological reading of a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PosTag {
    pub pos: PartOfSpeech,
    pub sub: Option<SubCategory>,
    pub form: Option<VerbForm>,
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub gender: Option<Gender>,
    pub case: Option<Case>,
    raw: String,
}

impl PosTag {
    /// Reading of the synthetic sentence-start token
    pub fn sentence_start() -> Self {
        Self {
            pos: PartOfSpeech::SentenceStart,
            sub: None,
            form: None,
            person: None,
            number: None,
            gender: None,
            case: None,
            raw: "SENT_START".to_string(),
        }
    }

    /// The tag as it was written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }

    /// Person-marked verb form (`VER:3:...`, `VER:MOD:1:...`)
    #[inline]
    pub fn is_finite_verb(&self) -> bool {
        self.is_verb() && self.person.is_some()
    }

    /// Form of a plain verb reading; modal and auxiliary readings have none
    #[inline]
    fn main_verb_form(&self) -> Option<VerbForm> {
        if self.is_verb() && self.sub.is_none() {
            self.form
        } else {
            None
        }
    }

    /// `VER:INF:...`
    #[inline]
    pub fn is_main_infinitive(&self) -> bool {
        self.main_verb_form() == Some(VerbForm::Infinitive)
    }

    /// `VER:PA2:...`
    #[inline]
    pub fn is_main_past_participle(&self) -> bool {
        self.main_verb_form() == Some(VerbForm::PastParticiple)
    }

    /// `VER:INF:...` or `VER:PA2:...`
    #[inline]
    pub fn is_main_infinitive_or_participle(&self) -> bool {
        matches!(
            self.main_verb_form(),
            Some(VerbForm::Infinitive | VerbForm::PastParticiple)
        )
    }

    #[inline]
    pub fn is_auxiliary(&self) -> bool {
        self.is_verb() && self.sub == Some(SubCategory::Auxiliary)
    }

    #[inline]
    pub fn is_modal(&self) -> bool {
        self.is_verb() && self.sub == Some(SubCategory::Modal)
    }

    #[inline]
    pub fn is_modal_or_auxiliary(&self) -> bool {
        self.is_modal() || self.is_auxiliary()
    }

    /// Adjectival participle (`PA1`, `PA2`)
    #[inline]
    pub fn is_participle(&self) -> bool {
        matches!(
            self.pos,
            PartOfSpeech::Participle1 | PartOfSpeech::Participle2
        )
    }

    /// Noun or proper noun
    #[inline]
    pub fn is_nominal(&self) -> bool {
        matches!(self.pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }

    /// Adjective or adjectival participle
    #[inline]
    pub fn is_attributive(&self) -> bool {
        self.pos == PartOfSpeech::Adjective || self.is_participle()
    }

    #[inline]
    pub fn is_adjective_or_possessive(&self) -> bool {
        self.pos == PartOfSpeech::Adjective
            || (self.pos == PartOfSpeech::Pronoun && self.sub == Some(SubCategory::Possessive))
    }

    /// Possessive, demonstrative or indefinite pronoun
    #[inline]
    pub fn is_determiner_pronoun(&self) -> bool {
        self.pos == PartOfSpeech::Pronoun
            && matches!(
                self.sub,
                Some(
                    SubCategory::Possessive
                        | SubCategory::Demonstrative
                        | SubCategory::Indefinite
                )
            )
    }

    /// `ADJ:PRD:...`
    #[inline]
    pub fn is_predicative_adjective(&self) -> bool {
        self.pos == PartOfSpeech::Adjective && self.sub == Some(SubCategory::Predicative)
    }

    /// `KON:UNT`
    #[inline]
    pub fn is_subordinating_conjunction(&self) -> bool {
        self.pos == PartOfSpeech::Conjunction && self.sub == Some(SubCategory::Subordinating)
    }

    #[inline]
    pub fn is_preposition(&self) -> bool {
        self.pos == PartOfSpeech::Preposition
    }

    #[inline]
    pub fn is_article(&self) -> bool {
        self.pos == PartOfSpeech::Article
    }

    #[inline]
    pub fn is_negation(&self) -> bool {
        self.pos == PartOfSpeech::Negation
    }

    /// Readings that disqualify a token from counting as a finite verb
    #[inline]
    pub fn excludes_finite_verb(&self) -> bool {
        matches!(
            self.pos,
            PartOfSpeech::Numeral
                | PartOfSpeech::Adverb
                | PartOfSpeech::Article
                | PartOfSpeech::Noun
        )
    }

    /// Readings that may sit inside a noun phrase without ending it,
    /// regardless of gender
    #[inline]
    pub fn is_phrase_filler(&self) -> bool {
        matches!(
            self.pos,
            PartOfSpeech::Numeral
                | PartOfSpeech::Preposition
                | PartOfSpeech::Conjunction
                | PartOfSpeech::Adverb
        ) || self.is_predicative_adjective()
    }
}

impl FromStr for PosTag {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidTag {
            tag: tag.to_string(),
            reason: reason.to_string(),
        };

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(invalid("empty tag"));
        }

        let mut fields = tag.split(':');
        let code = fields.next().unwrap_or_default();
        if code.is_empty() {
            return Err(invalid("missing part of speech"));
        }

        let mut parsed = Self {
            pos: PartOfSpeech::from_code(code),
            sub: None,
            form: None,
            person: None,
            number: None,
            gender: None,
            case: None,
            raw: tag.to_string(),
        };

        for (index, field) in fields.enumerate() {
            if index == 0 {
                if let Some(sub) = SubCategory::from_code(field) {
                    parsed.sub = Some(sub);
                    continue;
                }
            }
            match field {
                "1" => parsed.person = Some(Person::First),
                "2" => parsed.person = Some(Person::Second),
                "3" => parsed.person = Some(Person::Third),
                "SIN" => parsed.number = Some(Number::Singular),
                "PLU" => parsed.number = Some(Number::Plural),
                "MAS" => parsed.gender = Some(Gender::Masculine),
                "FEM" => parsed.gender = Some(Gender::Feminine),
                "NEU" => parsed.gender = Some(Gender::Neuter),
                "NOM" => parsed.case = Some(Case::Nominative),
                "GEN" => parsed.case = Some(Case::Genitive),
                "DAT" => parsed.case = Some(Case::Dative),
                "AKK" => parsed.case = Some(Case::Accusative),
                "INF" => parsed.form = Some(VerbForm::Infinitive),
                "EIZ" => parsed.form = Some(VerbForm::ZuInfinitive),
                "PA1" => parsed.form = Some(VerbForm::PresentParticiple),
                "PA2" => parsed.form = Some(VerbForm::PastParticiple),
                "IMP" => parsed.form = Some(VerbForm::Imperative),
                _ => {}
            }
        }

        Ok(parsed)
    }
}

impl TryFrom<String> for PosTag {
    type Error = CoreError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.raw
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
