//! Statically embedded candidate tables used when the backend is
//! unreachable or returns nothing.

use crate::error::Result;
use csv::ReaderBuilder;

/// Embedded CSV of all selectable states.
pub static STATES_CSV: &str = include_str!("../fixtures/states.csv");

/// Embedded CSV of fallback rivers keyed by state.
pub static RIVERS_CSV: &str = include_str!("../fixtures/rivers.csv");

/// Get the fallback state list from the embedded CSV. Never empty.
pub fn states() -> Vec<String> {
    if let Ok(list) = parse_states_csv(STATES_CSV) {
        list
    } else {
        panic!("failed to parse embedded states csv")
    }
}

/// Get the fallback river list for a state (case-insensitive match).
///
/// A state with no fallback entry yields an empty list; that is a valid
/// terminal state for the river selector, not a failure.
pub fn rivers_for(state: &str) -> Vec<String> {
    let table = if let Ok(t) = parse_rivers_csv(RIVERS_CSV) {
        t
    } else {
        panic!("failed to parse embedded rivers csv")
    };
    let wanted = state.trim().to_lowercase();
    table
        .into_iter()
        .filter(|(entry_state, _)| entry_state.to_lowercase() == wanted)
        .map(|(_, river)| river)
        .collect()
}

/// Parse a CSV string with a single `state` column into a list of states.
pub fn parse_states_csv(csv_object: &str) -> Result<Vec<String>> {
    let mut states: Vec<String> = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let record = row?;
        if let Some(state) = record.get(0) {
            let state = state.trim();
            if !state.is_empty() {
                states.push(state.to_string());
            }
        }
    }
    Ok(states)
}

/// Parse a CSV string of `state,river` rows into (state, river) pairs.
pub fn parse_rivers_csv(csv_object: &str) -> Result<Vec<(String, String)>> {
    let mut rivers: Vec<(String, String)> = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let record = row?;
        let state = record.get(0).unwrap_or("").trim();
        let river = record.get(1).unwrap_or("").trim();
        if !state.is_empty() && !river.is_empty() {
            rivers.push((state.to_string(), river.to_string()));
        }
    }
    Ok(rivers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_never_empty() {
        let states = states();
        assert_eq!(states.len(), 28);
        assert!(states.contains(&"Kerala".to_string()));
        assert!(states.contains(&"West Bengal".to_string()));
    }

    #[test]
    fn test_rivers_for_known_state() {
        let rivers = rivers_for("Kerala");
        assert_eq!(
            rivers,
            vec!["Periyar", "Bharathapuzha", "Pamba", "Chaliyar"]
        );
    }

    #[test]
    fn test_rivers_lookup_is_case_insensitive() {
        assert_eq!(rivers_for("kerala"), rivers_for("Kerala"));
        assert_eq!(rivers_for(" KERALA "), rivers_for("Kerala"));
    }

    #[test]
    fn test_rivers_for_state_without_entry_is_empty() {
        assert!(rivers_for("Sikkim").is_empty());
        assert!(rivers_for("Atlantis").is_empty());
    }

    #[test]
    fn test_parse_rivers_csv() {
        let csv_data = "state,river\nKerala,Periyar\nBihar,Kosi\n";
        let table = parse_rivers_csv(csv_data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], ("Kerala".to_string(), "Periyar".to_string()));
    }

    #[test]
    fn test_parse_empty_csv() {
        let table = parse_rivers_csv("state,river\n").unwrap();
        assert!(table.is_empty());
    }
}
