use anyhow::{Context, Result};
use crewlog_game::SuspicionWeights;
use std::path::Path;

pub mod scenario;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|t| {
            t.parse::<u64>()
                .with_context(|| format!("invalid seed '{t}' (expected an unsigned integer)"))
        })
        .collect()
}

/// Read heuristic weights from a JSON file. Missing fields keep their defaults.
pub fn load_weights(path: &Path) -> Result<SuspicionWeights> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read weights from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse weights in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,vouch-chain,  all ");
        assert_eq!(parts, vec!["smoke", "vouch-chain", "all"]);
    }

    #[test]
    fn seeds_must_be_numeric() {
        let ok = parse_seeds(&[String::from("1"), String::from("1337")]).unwrap();
        assert_eq!(ok, vec![1, 1337]);
        let err = parse_seeds(&[String::from("CL-ORANGE42")]).unwrap_err();
        assert!(err.to_string().contains("CL-ORANGE42"));
    }

    #[test]
    fn partial_weights_file_keeps_defaults() {
        let path = std::env::temp_dir().join(format!(
            "crewlog-weights-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "scan": 40 }"#).unwrap();
        let weights = load_weights(&path).unwrap();
        assert_eq!(weights.scan, 40);
        assert_eq!(weights.accusation, SuspicionWeights::default().accusation);
        let _ = std::fs::remove_file(path);
        assert!(load_weights(Path::new("/definitely/missing.json")).is_err());
    }
}
