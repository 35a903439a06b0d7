//! Gender/number feature sets

use super::tag::{Gender, Number, PosTag};
use super::token::Token;
use std::fmt;

/// Combinable gender/number features of a nominal or pronominal token
///
/// A token may carry several features at once ("die" is both singular
/// feminine and plural). An empty set admits every reading.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct GenderSet {
    pub singular_feminine: bool,
    pub singular_masculine: bool,
    pub singular_neuter: bool,
    pub plural: bool,
}

impl GenderSet {
    pub const EMPTY: Self = Self {
        singular_feminine: false,
        singular_masculine: false,
        singular_neuter: false,
        plural: false,
    };
    pub const SINGULAR_FEMININE: Self = Self {
        singular_feminine: true,
        ..Self::EMPTY
    };
    pub const SINGULAR_MASCULINE: Self = Self {
        singular_masculine: true,
        ..Self::EMPTY
    };
    pub const SINGULAR_NEUTER: Self = Self {
        singular_neuter: true,
        ..Self::EMPTY
    };
    pub const PLURAL: Self = Self {
        plural: true,
        ..Self::EMPTY
    };

    /// Features of a single reading
    pub fn of_tag(tag: &PosTag) -> Self {
        match (tag.number, tag.gender) {
            (Some(Number::Plural), _) => Self::PLURAL,
            (Some(Number::Singular), Some(Gender::Feminine)) => Self::SINGULAR_FEMININE,
            (Some(Number::Singular), Some(Gender::Masculine)) => Self::SINGULAR_MASCULINE,
            (Some(Number::Singular), Some(Gender::Neuter)) => Self::SINGULAR_NEUTER,
            _ => Self::EMPTY,
        }
    }

    /// Features collected over all readings of a token
    pub fn of_token(token: &Token) -> Self {
        token
            .readings()
            .iter()
            .fold(Self::EMPTY, |acc, tag| acc.union(Self::of_tag(tag)))
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            singular_feminine: self.singular_feminine || other.singular_feminine,
            singular_masculine: self.singular_masculine || other.singular_masculine,
            singular_neuter: self.singular_neuter || other.singular_neuter,
            plural: self.plural || other.plural,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Does the reading agree with any feature of this set?
    pub fn admits(&self, tag: &PosTag) -> bool {
        if self.is_empty() {
            return true;
        }
        let features = Self::of_tag(tag);
        (self.singular_feminine && features.singular_feminine)
            || (self.singular_masculine && features.singular_masculine)
            || (self.singular_neuter && features.singular_neuter)
            || (self.plural && features.plural)
    }
}

impl fmt::Display for GenderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            (self.singular_feminine, "SIN:FEM"),
            (self.singular_masculine, "SIN:MAS"),
            (self.singular_neuter, "SIN:NEU"),
            (self.plural, "PLU"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();

        match parts.len() {
            0 => f.write_str("*"),
            1 => f.write_str(parts[0]),
            _ => write!(f, "({})", parts.join("|")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(tags: &[&str]) -> Token {
        Token::new(
            "x",
            0,
            1,
            tags.iter().map(|t| t.parse::<PosTag>().unwrap()),
        )
    }

    #[test]
    fn test_ambiguous_article_collects_all_features() {
        let die = token(&[
            "ART:DEF:NOM:SIN:FEM",
            "ART:DEF:AKK:PLU:FEM",
            "PRO:DEM:NOM:SIN:FEM:B/S",
        ]);
        let gender = GenderSet::of_token(&die);
        assert!(gender.singular_feminine);
        assert!(gender.plural);
        assert!(!gender.singular_neuter);
        assert_eq!(gender.to_string(), "(SIN:FEM|PLU)");
    }

    #[test]
    fn test_verb_number_counts_as_plural() {
        let gender = GenderSet::of_token(&token(&["VER:1:PLU:PRÄ:SFT"]));
        assert_eq!(gender, GenderSet::PLURAL);
    }

    #[test]
    fn test_admits_matching_reading() {
        let neuter = GenderSet::SINGULAR_NEUTER;
        assert!(neuter.admits(&"SUB:NOM:SIN:NEU".parse().unwrap()));
        assert!(!neuter.admits(&"SUB:NOM:SIN:MAS".parse().unwrap()));
        assert!(!neuter.admits(&"SUB:NOM:PLU:NEU".parse().unwrap()));
    }

    #[test]
    fn test_empty_set_is_wildcard() {
        let empty = GenderSet::of_token(&token(&["KON:UNT"]));
        assert!(empty.is_empty());
        assert!(empty.admits(&"SUB:DAT:SIN:FEM".parse().unwrap()));
        assert!(empty.admits(&"ADJ:PRD:GRU".parse().unwrap()));
        assert_eq!(empty.to_string(), "*");
    }
}
