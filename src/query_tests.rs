//! Unit tests for the query engine, run against in-memory fixtures.

use super::*;

fn record(title: &str, box_label: &str, cover: bool) -> ManualRecord {
    ManualRecord::new(title, box_label, cover).unwrap()
}

fn fixture() -> Vec<ManualRecord> {
    vec![
        record("HP 71 Owner Manual", "BOX 3", false),
        record("Canon EOS R6 Mark II", "BOX 2", true),
        record("HP 71 Reference Manual", "BOX 3", false),
        record("Nikon D50", "", true),
        record("Free42", "", false),
        record("hp 12c solutions handbook", "box 1", false),
        record("Bernina 790 Plus", "BOX 2", false),
    ]
}

fn titles(records: &[&ManualRecord]) -> Vec<String> {
    records.iter().map(|r| r.title().to_string()).collect()
}

mod search_tests {
    use super::*;

    #[test]
    fn ranks_substring_match_first() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let results = engine.search("hp 71");
        assert!(!results.is_empty());
        assert_eq!(results[0].record.title(), "HP 71 Owner Manual");
        assert!(results.iter().all(|r| r.record.title() != "Canon EOS R6 Mark II"));
    }

    #[test]
    fn results_are_sorted_with_stable_ties() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let results = engine.search("hp 71");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Both HP 71 titles contain the query and tie; store order decides
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[1].record.title(), "HP 71 Reference Manual");
    }

    #[test]
    fn every_substring_query_finds_its_record() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        for record in &records {
            let title = record.title();
            let query = &title[..title.len().min(6)];
            let results = engine.search(query);
            assert!(
                results.iter().any(|r| r.record == record),
                "'{query}' did not find '{title}'"
            );
        }
    }

    #[test]
    fn exact_title_scores_one() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let results = engine.search("canon eos r6 mark ii");
        assert_eq!(results[0].record.title(), "Canon EOS R6 Mark II");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn limit_truncates_results() {
        let records = fixture();
        let settings = Settings {
            limit: Some(1),
            ..Settings::default()
        };
        let engine = QueryEngine::new(&records, settings);

        assert_eq!(engine.search("hp 71").len(), 1);
        assert!(engine.rank("hp 71").len() >= 2);
    }

    #[test]
    fn nothing_clears_threshold() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());
        assert!(engine.search("zzzzqqqq").is_empty());
    }

    #[test]
    fn empty_catalog_returns_empty() {
        let engine = QueryEngine::new(&[], Settings::default());
        assert!(engine.search("anything").is_empty());
    }
}

mod exact_tests {
    use super::*;

    #[test]
    fn finds_own_title_in_any_case() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        for record in &records {
            let upper = engine.exact(&record.title().to_uppercase());
            let lower = engine.exact(&record.title().to_lowercase());
            assert_eq!(upper, vec![record]);
            assert_eq!(lower, vec![record]);
        }
    }

    #[test]
    fn collapses_whitespace() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let found = engine.exact("  hp   71 owner\tmanual ");
        assert_eq!(titles(&found), vec!["HP 71 Owner Manual"]);
    }

    #[test]
    fn returns_all_duplicates_in_store_order() {
        let records = vec![
            record("HP 67", "BOX 2", false),
            record("Free42", "", false),
            record("hp  67", "", true),
        ];
        let engine = QueryEngine::new(&records, Settings::default());

        let found = engine.exact("HP 67");
        assert_eq!(titles(&found), vec!["HP 67", "hp  67"]);
    }

    #[test]
    fn partial_title_is_not_exact() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());
        assert!(engine.exact("HP 71").is_empty());
        assert!(engine.exact("   ").is_empty());
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn groups_in_fixed_order() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let labels: Vec<&str> = engine.list().iter().map(|(g, _)| g.label()).collect();
        assert_eq!(labels, vec!["BOX 1", "BOX 2", "BOX 3", "COVER", "UNKNOWN"]);
    }

    #[test]
    fn cover_group_overlaps_box_groups() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());
        let groups = engine.list();

        assert_eq!(
            titles(&groups[1].1),
            vec!["Bernina 790 Plus", "Canon EOS R6 Mark II"]
        );
        assert_eq!(
            titles(&groups[2].1),
            vec!["HP 71 Owner Manual", "HP 71 Reference Manual"]
        );
        assert_eq!(titles(&groups[3].1), vec!["Canon EOS R6 Mark II", "Nikon D50"]);
        assert_eq!(titles(&groups[4].1), vec!["Free42"]);
    }

    #[test]
    fn loose_box_spelling_lands_in_its_group() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());
        let groups = engine.list();

        assert_eq!(titles(&groups[0].1), vec!["hp 12c solutions handbook"]);
    }

    #[test]
    fn list_box_returns_exact_subset() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let box2 = engine.list_box("BOX 2");
        let expected: Vec<&ManualRecord> = records
            .iter()
            .filter(|r| r.location() == Some(BoxLabel::Box2))
            .collect();
        assert_eq!(box2.len(), expected.len());
        assert!(expected.iter().all(|r| box2.contains(r)));
        assert_eq!(engine.list_box("2"), box2);
    }

    #[test]
    fn unknown_box_is_empty() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());
        assert!(engine.list_box("BOX 4").is_empty());
        assert!(engine.list_box("attic").is_empty());
    }

    #[test]
    fn list_cover_returns_exact_subset() {
        let records = fixture();
        let engine = QueryEngine::new(&records, Settings::default());

        let covered = engine.list_cover();
        assert_eq!(covered.len(), records.iter().filter(|r| r.cover()).count());
        assert!(covered.iter().all(|r| r.cover()));
    }

    #[test]
    fn group_labels_display() {
        assert_eq!(Group::Box(BoxLabel::Box1).to_string(), "BOX 1");
        assert_eq!(Group::Cover.to_string(), "COVER");
        assert_eq!(Group::Unknown.to_string(), "UNKNOWN");
    }
}
