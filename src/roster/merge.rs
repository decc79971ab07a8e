//! Flag filtering and identity-keyed merging

use crate::domain::{Flag, Member, Roster};
use std::collections::HashMap;

/// Whether the member holds at least one governance flag.
pub fn has_relevant_flag(member: &Member) -> bool {
    Flag::ALL.iter().any(|flag| member.has_flag(*flag))
}

/// Merge two rosters into one list unique by GitHub handle.
///
/// Members without any flag are dropped. Entries keep first-seen order:
/// qualifying members of `list_a`, then new qualifying members of `list_b`.
/// A handle seen again has its flags unioned into the existing entry.
pub fn merge_unique_members(list_a: &[Member], list_b: &[Member]) -> Roster {
    let mut merged = Roster::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();

    for member in list_a.iter().chain(list_b).filter(|m| has_relevant_flag(m)) {
        let key = member.github.as_deref();
        match index.get(&key) {
            Some(&pos) => {
                if let Some(existing) = merged.get_mut(pos) {
                    existing.absorb_flags(member);
                }
            }
            None => {
                index.insert(key, merged.len());
                merged.push(member.clone());
            }
        }
    }

    tracing::debug!(
        "Merged {} + {} members into {} flagged members",
        list_a.len(),
        list_b.len(),
        merged.len()
    );
    merged
}
