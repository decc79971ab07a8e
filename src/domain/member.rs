//! Member records and governance flags

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// Ordered sequence of member records read from one source file.
pub type Roster = Vec<Member>;

/// Governance flag a member can hold.
///
/// Declaration order is the order flags are emitted in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    TscMember,
    BoardMember,
    BoardChair,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::TscMember, Flag::BoardMember, Flag::BoardChair];

    /// Key used for this flag in roster files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::TscMember => "isTscMember",
            Flag::BoardMember => "isBoardMember",
            Flag::BoardChair => "isBoardChair",
        }
    }
}

/// A single roster entry: the GitHub handle plus the flags it holds.
///
/// `github` is optional because source files are not validated; records
/// without a handle all share the same identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMember")]
pub struct Member {
    pub github: Option<String>,
    pub flags: BTreeSet<Flag>,
}

impl Member {
    pub fn new(github: impl Into<String>) -> Self {
        Self { github: Some(github.into()), flags: BTreeSet::new() }
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Union `other`'s flags into this record. Flags are never removed.
    pub fn absorb_flags(&mut self, other: &Member) {
        self.flags.extend(other.flags.iter().copied());
    }
}

/// On-disk shape of a member. Unknown fields are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMember {
    #[serde(default)]
    github: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    is_tsc_member: bool,
    #[serde(default, deserialize_with = "truthy")]
    is_board_member: bool,
    #[serde(default, deserialize_with = "truthy")]
    is_board_chair: bool,
}

impl From<RawMember> for Member {
    fn from(raw: RawMember) -> Self {
        let held = [
            (Flag::TscMember, raw.is_tsc_member),
            (Flag::BoardMember, raw.is_board_member),
            (Flag::BoardChair, raw.is_board_chair),
        ];
        Self {
            github: raw.github,
            flags: held.into_iter().filter(|(_, on)| *on).map(|(flag, _)| flag).collect(),
        }
    }
}

/// Accept any scalar or container for a flag field and reduce it to whether it is held.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = usize::from(self.github.is_some()) + self.flags.len();
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(github) = &self.github {
            map.serialize_entry("github", github)?;
        }
        for flag in &self.flags {
            map.serialize_entry(flag.as_str(), &true)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_only_held_flags() {
        let member: Member = serde_json::from_str(
            r#"{"github":"alice","isTscMember":true,"isBoardMember":false,"name":"Alice"}"#,
        )
        .expect("parse");
        assert_eq!(member, Member::new("alice").with_flag(Flag::TscMember));
    }

    #[test]
    fn test_truthy_values_count_as_held() {
        let member: Member = serde_yaml::from_str(
            "github: bob\nisTscMember: 1\nisBoardMember: \"yes\"\nisBoardChair: 0\n",
        )
        .expect("parse");
        assert!(member.has_flag(Flag::TscMember));
        assert!(member.has_flag(Flag::BoardMember));
        assert!(!member.has_flag(Flag::BoardChair));
    }

    #[test]
    fn test_null_and_empty_string_are_not_held() {
        let member: Member =
            serde_json::from_str(r#"{"github":"eve","isTscMember":null,"isBoardChair":""}"#)
                .expect("parse");
        assert!(member.flags.is_empty());
    }

    #[test]
    fn test_missing_github_is_none() {
        let member: Member = serde_json::from_str(r#"{"isBoardChair":true}"#).expect("parse");
        assert!(member.github.is_none());
        assert!(member.has_flag(Flag::BoardChair));
    }

    #[test]
    fn test_serialize_omits_absent_flags() {
        let member = Member::new("bob").with_flag(Flag::BoardChair).with_flag(Flag::BoardMember);
        let json = serde_json::to_string(&member).expect("serialize");
        assert_eq!(json, r#"{"github":"bob","isBoardMember":true,"isBoardChair":true}"#);
    }

    #[test]
    fn test_absorb_flags_is_a_union() {
        let mut bob = Member::new("bob").with_flag(Flag::BoardChair);
        bob.absorb_flags(&Member::new("bob").with_flag(Flag::BoardMember));
        bob.absorb_flags(&Member::new("bob"));
        assert!(bob.has_flag(Flag::BoardChair));
        assert!(bob.has_flag(Flag::BoardMember));
        assert_eq!(bob.flags.len(), 2);
    }
}
