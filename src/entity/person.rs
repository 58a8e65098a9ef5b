//! A generated person: identity plus optional attribute groups
//!
//! Attribute groups start empty and are filled by the generation stages.

use serde::{Deserialize, Serialize};

use crate::core::types::{ClusterLabel, PersonId};
use crate::generation::pattern::PatternKey;

use super::body::Body;
use super::friends::Friends;
use super::mind::Mind;
use super::standing::Standing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    /// Pattern this person was generated from
    pub pattern: PatternKey,
    pub name: Option<Name>,
    pub body: Option<Body>,
    pub mind: Option<Mind>,
    /// Standing of the household the person grew up in
    pub family: Option<Standing>,
    /// The person's own standing
    pub social: Option<Standing>,
    pub friends: Friends,
    pub faction: ClusterLabel,
    pub friend_group: ClusterLabel,
}

impl Person {
    pub fn new(id: PersonId, pattern: PatternKey) -> Self {
        Self {
            id,
            pattern,
            name: None,
            body: None,
            mind: None,
            family: None,
            social: None,
            friends: Friends::new(),
            faction: ClusterLabel::Unclassified,
            friend_group: ClusterLabel::Unclassified,
        }
    }

    /// Full name, or the id when no identity was generated
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => self.id.to_string(),
        }
    }

    pub fn friend_mult(&self) -> f64 {
        self.mind.as_ref().map_or(0.0, |m| m.friend_mult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_person_displays_as_id() {
        let mut person = Person::new(PersonId(12), PatternKey(0));
        assert_eq!(person.display_name(), "#12");

        person.name = Some(Name {
            first: "Ada".into(),
            last: "Lovelace".into(),
        });
        assert_eq!(person.display_name(), "Ada Lovelace");
    }
}
