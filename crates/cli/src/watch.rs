//! Interactive mode: every stdin line is one input-change event.
//!
//! Lines look like `q=ham`, `nat=british`, `team=red bull`, `clear` or
//! `quit`. Each accepted line updates the criteria and re-renders the table.

use crate::table::TableView;
use anyhow::{Context, Result};
use filter_engine::{refresh, FilterCriteria};
use roster_data::RosterIndex;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchCommand {
    Query(String),
    Nationality(String),
    Team(String),
    Clear,
    Quit,
}

impl WatchCommand {
    /// Parse a line; `None` for anything unrecognised
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "clear" => return Some(WatchCommand::Clear),
            "quit" | "exit" => return Some(WatchCommand::Quit),
            _ => {}
        }

        // Values are kept raw; the engine does its own trimming
        let (key, value) = line.split_once('=')?;
        let value = value.to_string();
        match key.trim() {
            "q" | "query" => Some(WatchCommand::Query(value)),
            "nat" | "nationality" => Some(WatchCommand::Nationality(value)),
            "team" => Some(WatchCommand::Team(value)),
            _ => None,
        }
    }

    /// Apply to the criteria; false for `Quit`
    pub fn apply(self, criteria: &mut FilterCriteria) -> bool {
        match self {
            WatchCommand::Query(value) => criteria.query = value,
            WatchCommand::Nationality(value) => criteria.nationality = value,
            WatchCommand::Team(value) => criteria.team = value,
            WatchCommand::Clear => *criteria = FilterCriteria::default(),
            WatchCommand::Quit => return false,
        }
        true
    }
}

/// Read stdin until EOF or `quit`, refreshing the table after each command.
pub async fn run(index: &RosterIndex, initial: FilterCriteria) -> Result<()> {
    let mut table = TableView::new(index);
    table.set_criteria(initial);
    refresh(&mut table);
    table.print();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let Some(command) = WatchCommand::parse(&line) else {
            tracing::warn!("Ignoring unrecognised input: {:?}", line);
            continue;
        };
        if !command.apply(table.criteria_mut()) {
            break;
        }
        let result = refresh(&mut table);
        tracing::debug!("Re-rendered table ({} visible)", result.visible_count);
        table.print();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            WatchCommand::parse("q=ham"),
            Some(WatchCommand::Query("ham".to_string()))
        );
        assert_eq!(
            WatchCommand::parse("team=red bull"),
            Some(WatchCommand::Team("red bull".to_string()))
        );
        assert_eq!(
            WatchCommand::parse("nationality= British "),
            Some(WatchCommand::Nationality(" British ".to_string()))
        );
        assert_eq!(WatchCommand::parse("q="), Some(WatchCommand::Query(String::new())));
        assert_eq!(WatchCommand::parse(" clear "), Some(WatchCommand::Clear));
        assert_eq!(WatchCommand::parse("exit"), Some(WatchCommand::Quit));
        assert_eq!(WatchCommand::parse("colour=red"), None);
        assert_eq!(WatchCommand::parse("hello"), None);
    }

    #[test]
    fn test_apply_updates_criteria() {
        let mut criteria = FilterCriteria::default();
        assert!(WatchCommand::Query("ham".to_string()).apply(&mut criteria));
        assert!(WatchCommand::Team("mercedes".to_string()).apply(&mut criteria));
        assert_eq!(criteria, FilterCriteria::new("ham", "", "mercedes"));

        assert!(WatchCommand::Clear.apply(&mut criteria));
        assert_eq!(criteria, FilterCriteria::default());

        assert!(!WatchCommand::Quit.apply(&mut criteria));
    }
}
