//! Unit tests for the record model.

use super::*;

mod box_label_tests {
    use super::*;

    #[test]
    fn parses_canonical_labels() {
        assert_eq!(BoxLabel::parse("BOX 1"), Some(BoxLabel::Box1));
        assert_eq!(BoxLabel::parse("BOX 2"), Some(BoxLabel::Box2));
        assert_eq!(BoxLabel::parse("BOX 3"), Some(BoxLabel::Box3));
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!(BoxLabel::parse("box2"), Some(BoxLabel::Box2));
        assert_eq!(BoxLabel::parse("  Box   3 "), Some(BoxLabel::Box3));
        assert_eq!(BoxLabel::parse("1"), Some(BoxLabel::Box1));
    }

    #[test]
    fn rejects_unknown_boxes() {
        assert_eq!(BoxLabel::parse("BOX 4"), None);
        assert_eq!(BoxLabel::parse("BOX"), None);
        assert_eq!(BoxLabel::parse("shelf 1"), None);
        assert_eq!(BoxLabel::parse(""), None);
    }

    #[test]
    fn displays_upper_case_label() {
        assert_eq!(BoxLabel::Box2.to_string(), "BOX 2");
        assert_eq!(BoxLabel::all().len(), 3);
    }
}

mod parse_cover_tests {
    use super::*;

    #[test]
    fn accepts_truthy_spellings() {
        for value in ["1", "yes", "YES", "y", "true", "True", " 1 "] {
            assert!(parse_cover(value).unwrap(), "expected '{value}' to be true");
        }
    }

    #[test]
    fn accepts_falsy_spellings() {
        for value in ["0", "no", "No", "n", "false", "FALSE", ""] {
            assert!(!parse_cover(value).unwrap(), "expected '{value}' to be false");
        }
    }

    #[test]
    fn rejects_unknown_spelling() {
        let err = parse_cover("maybe").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCover(ref v) if v == "maybe"));
    }

    #[test]
    fn formats_canonically() {
        assert_eq!(format_cover(true), "1");
        assert_eq!(format_cover(false), "0");
    }
}

mod manual_record_tests {
    use super::*;

    #[test]
    fn trims_and_keeps_box_as_given() {
        let record = ManualRecord::new("  Nikon D50 ", "box 3", true).unwrap();
        assert_eq!(record.title(), "Nikon D50");
        assert_eq!(record.box_label(), "box 3");
        assert_eq!(record.location(), Some(BoxLabel::Box3));
        assert_eq!(record.display_location(), "BOX 3");
    }

    #[test]
    fn rejects_empty_title() {
        assert!(matches!(
            ManualRecord::new("   ", "BOX 1", false),
            Err(CatalogError::EmptyTitle)
        ));
    }

    #[test]
    fn rejects_unknown_box() {
        assert!(matches!(
            ManualRecord::new("HP 45", "BOX 9", false),
            Err(CatalogError::InvalidBox(_))
        ));
    }

    #[test]
    fn display_location_falls_back_to_cover_then_unknown() {
        let covered = ManualRecord::new("Pentax 645D", "", true).unwrap();
        let loose = ManualRecord::new("Free42", "", false).unwrap();
        assert_eq!(covered.location(), None);
        assert_eq!(covered.display_location(), "COVER");
        assert_eq!(loose.display_location(), "UNKNOWN");
    }
}
