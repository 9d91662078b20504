//! JSON loading for decks, problem trees, and session configs.
//!
//! Deck files hold a bare list of card records or `{"deck": [...]}`.
//! Problem files hold a bare node or `{"problems": [{"root": node}, ...]}`,
//! of which the first problem is used. Missing record fields mean unset;
//! a record that ends up with neither color nor number is rejected with
//! its location.

use std::path::Path;

use serde::Deserialize;

use crate::cards::{CardFace, CardRecord};
use crate::core::config::SessionConfig;
use crate::error::LoadError;
use crate::problem::{ProblemRecord, ProblemTree};

#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    List(Vec<CardRecord>),
    Wrapped { deck: Vec<CardRecord> },
}

#[derive(Deserialize)]
struct ProblemEntry {
    root: ProblemRecord,
}

// `Collection` goes first: every object parses as a `ProblemRecord`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProblemFile {
    Collection { problems: Vec<ProblemEntry> },
    Node(ProblemRecord),
}

/// Parse a deck document into card faces, in file order.
pub fn parse_deck(json: &str) -> Result<Vec<CardFace>, LoadError> {
    let records = match serde_json::from_str::<DeckFile>(json)? {
        DeckFile::List(records) | DeckFile::Wrapped { deck: records } => records,
    };
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            CardFace::try_from(record).map_err(|source| LoadError::Card {
                path: format!("deck[{i}]"),
                source,
            })
        })
        .collect()
}

/// Parse a problem document into a tree.
pub fn parse_problem_tree(json: &str) -> Result<ProblemTree, LoadError> {
    let root = match serde_json::from_str::<ProblemFile>(json)? {
        ProblemFile::Node(root) => root,
        ProblemFile::Collection { problems } => {
            problems.into_iter().next().ok_or(LoadError::NoProblems)?.root
        }
    };
    ProblemTree::from_record(root)
}

/// Parse a session config. Missing fields take their defaults.
pub fn parse_config(json: &str) -> Result<SessionConfig, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a deck file.
pub fn load_deck(path: impl AsRef<Path>) -> Result<Vec<CardFace>, LoadError> {
    parse_deck(&read(path.as_ref())?)
}

/// Read and parse a problem file.
pub fn load_problem_tree(path: impl AsRef<Path>) -> Result<ProblemTree, LoadError> {
    parse_problem_tree(&read(path.as_ref())?)
}

/// Read and parse a config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<SessionConfig, LoadError> {
    parse_config(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::core::ColorlessRule;
    use crate::error::CardError;

    #[test]
    fn test_bare_deck_list() {
        let deck = parse_deck(r#"[{"number": 3}, {"color": "red"}, {"color": "b", "number": 2}]"#).unwrap();
        assert_eq!(
            deck,
            vec![
                CardFace::number_card(3),
                CardFace::color_card(Color::Red),
                CardFace::colored(Color::Blue, 2),
            ]
        );
    }

    #[test]
    fn test_wrapped_deck() {
        let deck = parse_deck(r#"{"deck": [{"number": 1, "edition": "first"}]}"#).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].edition(), Some("first"));
    }

    #[test]
    fn test_blank_card_reports_position() {
        let err = parse_deck(r#"[{"number": 1}, {"stamp": "x"}]"#).unwrap_err();
        match err {
            LoadError::Card { path, source } => {
                assert_eq!(path, "deck[1]");
                assert_eq!(source, CardError::Blank);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_problem_collection_uses_first() {
        let tree = parse_problem_tree(
            r#"{"problems": [
                {"root": {"id": "a", "color": "red", "number": 3, "children": [{"color": "blue", "number": 1}]}},
                {"root": {"color": "green", "number": 9}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find_label("a"), tree.root());
    }

    #[test]
    fn test_empty_problem_collection() {
        assert!(matches!(
            parse_problem_tree(r#"{"problems": []}"#),
            Err(LoadError::NoProblems)
        ));
    }

    #[test]
    fn test_bare_problem_node() {
        let tree = parse_problem_tree(r#"{"card": {"color": "yellow", "number": 2}}"#).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root).unwrap().face, CardFace::colored(Color::Yellow, 2));
    }

    #[test]
    fn test_nested_blank_card_path() {
        let err = parse_problem_tree(r#"{"number": 1, "children": [{"number": 2}, {"loot": 3}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Card { ref path, .. } if path == "root.children[1].card"));
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(r#"{"seed": 7, "colorless": {"fallback": "red"}}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.colorless, ColorlessRule::Fallback(Color::Red));
        assert_eq!(config.hand_size, SessionConfig::default().hand_size);
    }

    #[test]
    fn test_missing_file() {
        let err = load_deck("/nonexistent/deck.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
