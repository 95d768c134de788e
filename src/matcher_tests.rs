//! Unit tests for relevance scoring.

use super::*;

mod normalize_tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize("HP-71B  Forth/Assembler"), "hp 71b forth assembler");
    }

    #[test]
    fn keeps_digits_in_model_numbers() {
        assert_eq!(tokens("Nikon D50"), vec!["nikon", "d50"]);
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert!(tokens(" -- / ").is_empty());
        assert_eq!(normalize(""), "");
    }
}

mod score_tests {
    use super::*;

    #[test]
    fn identical_titles_score_one() {
        assert_eq!(score("canon eos r6 mark ii", "Canon EOS R6 Mark II"), 1.0);
        assert_eq!(score("HP-71 owner manual", "HP 71 Owner Manual"), 1.0);
    }

    #[test]
    fn substring_scores_just_below_exact() {
        let s = score("hp 71", "HP 71 Owner Manual");
        assert!(s < 1.0);
        assert!(s > 0.95);
    }

    #[test]
    fn compacted_query_matches_spaced_title() {
        let s = score("hp71", "HP 71 Owner Manual");
        assert!(s >= 0.95 - f64::EPSILON);
        assert!(s > DEFAULT_MIN_SCORE);
    }

    #[test]
    fn reordered_tokens_clear_threshold() {
        let s = score("manual owner", "HP 71 Owner Manual");
        assert!(s >= 0.85 - 1e-9, "got {s}");
    }

    #[test]
    fn unrelated_title_stays_below_threshold() {
        assert!(score("canon", "HP 71 Owner Manual") < DEFAULT_MIN_SCORE);
    }

    #[test]
    fn distinguishing_digits_matter() {
        let exact_model = score("d50", "Nikon D50");
        let other_model = score("d50", "Nikon D5");
        assert!(exact_model > other_model);
    }

    #[test]
    fn typo_still_scores_reasonably() {
        assert!(score("bernina 790 plas", "Bernina 790 Plus") > DEFAULT_MIN_SCORE);
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert_eq!(score("", "HP 71 Owner Manual"), 0.0);
        assert_eq!(score("  -/- ", "HP 71 Owner Manual"), 0.0);
    }

    #[test]
    fn scores_are_bounded_and_deterministic() {
        let titles = ["Free42", "HP 75 I/O Rom", "An easy course in using the HP-42S"];
        for title in titles {
            let first = score("hp 42s course", title);
            assert!((0.0..=1.0).contains(&first));
            assert_eq!(first, score("hp 42s course", title));
        }
    }
}
