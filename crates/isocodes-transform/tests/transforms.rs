//! Property and scenario tests for normalization, indexing, and ordering.

use std::collections::HashMap;

use isocodes_model::{ExclusionRules, Record, SortKey};
use isocodes_transform::{CodeTable, normalize_name};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = Record> {
    ("[A-Za-z ,()'-]{0,32}", "[A-Z]{2}").prop_map(|(name, code)| Record::new(name, code))
}

proptest! {
    #[test]
    fn names_without_comma_pass_through(name in "[^,]{0,40}") {
        prop_assert_eq!(normalize_name(&name), name.as_str());
    }

    #[test]
    fn comma_names_are_reversed(last in "[A-Za-z ]{0,16}", first in "[A-Za-z ]{0,16}") {
        let raw = format!("{last},{first}");
        let expected = format!("{first} {last}");
        prop_assert_eq!(normalize_name(&raw), expected.trim());
    }

    #[test]
    fn emission_is_strictly_ordered(records in prop::collection::vec(record_strategy(), 0..64)) {
        let (table, _) = CodeTable::from_records(records);
        let emission = table.ordered_entries(&ExclusionRules::none());

        for pair in emission.entries.windows(2) {
            let (a, b) = (pair[0].key, pair[1].key);
            prop_assert!(
                a.length < b.length || (a.length == b.length && a.code < b.code),
                "{} emitted before {}", a, b
            );
        }
        prop_assert_eq!(emission.entries.len(), table.len());
    }

    #[test]
    fn last_record_wins_per_key(records in prop::collection::vec(record_strategy(), 0..64)) {
        let mut expected: HashMap<SortKey, String> = HashMap::new();
        for record in &records {
            let name = normalize_name(&record.name).into_owned();
            expected.insert(SortKey::for_name(&name, record.code.clone()), name);
        }

        let (table, stats) = CodeTable::from_records(records.clone());

        prop_assert_eq!(table.len(), expected.len());
        prop_assert_eq!(stats.rows, records.len());
        prop_assert_eq!(stats.overwritten, records.len() - expected.len());
        for (key, name) in &expected {
            prop_assert_eq!(table.get(key), Some(name.as_str()));
        }
    }

    #[test]
    fn holy_see_duplicate_is_never_emitted(
        records in prop::collection::vec(record_strategy(), 0..32),
        include_duplicate in any::<bool>(),
    ) {
        let mut records = records;
        if include_duplicate {
            records.push(Record::new("Holy See (Vatican City State)", "VA"));
        }
        let (table, _) = CodeTable::from_records(records);
        let emission = table.ordered_entries(&ExclusionRules::default());

        let excluded = SortKey::new(29, "VA");
        prop_assert!(emission.entries.iter().all(|entry| *entry.key != excluded));
        prop_assert_eq!(
            emission.skipped.contains(&excluded),
            table.contains_key(&excluded)
        );
    }
}

#[test]
fn italy_and_korea_scenario() {
    let (table, _) = CodeTable::from_records(vec![
        Record::new("Italy", "IT"),
        Record::new("Korea, Republic Of", "KR"),
    ]);

    let entries: Vec<(usize, &str, &str)> = table
        .iter()
        .map(|entry| (entry.length(), entry.code(), entry.name))
        .collect();
    assert_eq!(
        entries,
        vec![(5, "IT", "Italy"), (17, "KR", "Republic Of Korea")]
    );
}

#[test]
fn both_holy_see_spellings_collapse_and_are_skipped() {
    // Two punctuations of the same official name, both 29 characters long.
    let (table, stats) = CodeTable::from_records(vec![
        Record::new("Holy See (Vatican City State)", "VA"),
        Record::new("Holy See, (Vatican City State)", "VA"),
        Record::new("Italy", "IT"),
    ]);

    assert_eq!(stats.overwritten, 1);
    assert_eq!(
        table.get(&SortKey::new(29, "VA")),
        Some("(Vatican City State) Holy See")
    );

    let emission = table.ordered_entries(&ExclusionRules::default());
    assert!(emission.entries.iter().all(|entry| entry.code() != "VA"));
    assert_eq!(emission.skipped, vec![SortKey::new(29, "VA")]);
}
