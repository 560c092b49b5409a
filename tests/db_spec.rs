use portfolio_gallery::db::{Database, THEME_KEY};
use portfolio_gallery::models::Theme;
use speculate2::speculate;

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "theme" {
        describe "get_theme" {
            it "defaults to dark before anything is stored" {
                let preference = db.get_theme().expect("Query failed");
                assert_eq!(preference.theme, Theme::Dark);
                assert!(preference.updated_at.is_none());
            }

            it "falls back to the default for an unrecognised stored value" {
                db.set_preference(THEME_KEY, "sepia").expect("Failed to store");
                assert_eq!(db.get_theme().expect("Query failed").theme, Theme::Dark);
            }
        }

        describe "set_theme" {
            it "stores the theme with a timestamp" {
                let stored = db.set_theme(Theme::Light).expect("Failed to set");
                assert_eq!(stored.theme, Theme::Light);
                assert!(stored.updated_at.is_some());

                let read = db.get_theme().expect("Query failed");
                assert_eq!(read.theme, Theme::Light);
            }

            it "overwrites the previous value" {
                db.set_theme(Theme::Light).expect("Failed to set");
                db.set_theme(Theme::Dark).expect("Failed to set");
                assert_eq!(db.get_theme().expect("Query failed").theme, Theme::Dark);
            }
        }

        describe "toggle_theme" {
            it "flips between dark and light" {
                assert_eq!(db.toggle_theme().expect("Toggle failed").theme, Theme::Light);
                assert_eq!(db.toggle_theme().expect("Toggle failed").theme, Theme::Dark);
            }
        }
    }

    describe "preferences" {
        it "returns None for a missing key" {
            assert!(db.get_preference("missing").expect("Query failed").is_none());
        }

        it "keeps stored values when migrated again" {
            db.set_theme(Theme::Light).expect("Failed to set");
            db.migrate().expect("Failed to migrate twice");
            assert_eq!(db.get_theme().expect("Query failed").theme, Theme::Light);
        }

        it "round-trips a value" {
            db.set_preference("k", "v").expect("Failed to store");
            let (value, _) = db.get_preference("k").expect("Query failed").expect("stored");
            assert_eq!(value, "v");
        }
    }

    describe "on disk" {
        it "persists the theme across reopen" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("nested").join("portfolio.db");

            let first = Database::open(path.clone()).expect("Failed to open");
            first.migrate().expect("Failed to migrate");
            first.set_theme(Theme::Light).expect("Failed to set");
            drop(first);

            let second = Database::open(path).expect("Failed to reopen");
            second.migrate().expect("Failed to migrate");
            assert_eq!(second.get_theme().expect("Query failed").theme, Theme::Light);
        }
    }
}
