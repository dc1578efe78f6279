use std::collections::HashSet;

use crate::model::battle::BattleParticipant;

/// Names of the roster's members of `guild_name`.
///
/// Guild names are compared exactly, including case. Each name appears once, in the
/// order it was first seen.
pub fn filter_guild_members(roster: &[BattleParticipant], guild_name: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for participant in roster.iter().filter(|p| p.guild_name == guild_name) {
        if seen.insert(participant.name.as_str()) {
            names.push(participant.name.clone());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<BattleParticipant> {
        vec![
            BattleParticipant::new("A", "G"),
            BattleParticipant::new("B", "G"),
            BattleParticipant::new("C", "H"),
            BattleParticipant::new("A", "G"),
            BattleParticipant::new("D", "g"),
        ]
    }

    #[test]
    fn keeps_unique_members_in_first_seen_order() {
        assert_eq!(filter_guild_members(&roster(), "G"), vec!["A", "B"]);
    }

    #[test]
    fn matches_guild_name_case_sensitively() {
        assert_eq!(filter_guild_members(&roster(), "g"), vec!["D"]);
    }

    #[test]
    fn returns_empty_for_empty_roster() {
        assert!(filter_guild_members(&[], "G").is_empty());
    }

    #[test]
    fn refiltering_is_idempotent() {
        let first = filter_guild_members(&roster(), "G");
        let refiltered_roster: Vec<BattleParticipant> = first
            .iter()
            .map(|name| BattleParticipant::new(name.clone(), "G"))
            .collect();

        assert_eq!(filter_guild_members(&refiltered_roster, "G"), first);
    }

    #[test]
    fn ignores_participants_without_guild() {
        let roster = vec![BattleParticipant::new("Solo", "")];
        assert!(filter_guild_members(&roster, "G").is_empty());
    }
}
