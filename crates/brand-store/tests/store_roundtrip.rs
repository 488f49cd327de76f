//! Export and read-back tests against a real file in a temp directory.

use brand_core::entities::{StrategyRecord, StrategyRequest};
use brand_core::{ReferenceTables, StrategyGenerator};
use brand_store::{StoreError, StrategyStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn request(name: &str, tags: &[&str]) -> StrategyRequest {
    StrategyRequest {
        name: name.to_string(),
        category: "personal_care".to_string(),
        price_point: "premium".to_string(),
        budget_level: "high".to_string(),
        target_market: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn store_in(dir: &TempDir) -> StrategyStore {
    StrategyStore::new(dir.path().join("brand_strategies").join("brand_strategy_data.csv"))
}

#[test]
fn first_export_creates_directory_and_header() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let tables = ReferenceTables::builtin();
    let strategy = StrategyGenerator::new(&tables).generate_strategy(&request("Glow", &["18-24"]));

    let receipt = store
        .export_strategy(
            &strategy.name,
            &strategy.framework,
            &strategy.personality,
            &strategy.campaign,
        )
        .expect("export succeeds");

    assert!(receipt.header_written);
    assert!(store.path().exists());

    let text = std::fs::read_to_string(store.path()).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "Business Name,Category,Target Audience,Positioning,Keywords,\
         Recommended Personalities,Suggested Traits,Marketing Channels,\
         Content Themes,Key Messages,Campaign Duration"
    );
}

#[test]
fn exported_row_reads_back_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let tables = ReferenceTables::builtin();
    let generator = StrategyGenerator::new(&tables);

    let strategy = generator.generate_strategy(&request(
        "Silk & Stone",
        &["25-34", "45-54", "busy professionals"],
    ));
    store.append(StrategyRecord::from(&strategy)).unwrap();

    let rows = store.load_all().unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row, &StrategyRecord::from(&strategy));
    assert_eq!(row.target_audience, "25-34, 45-54");
    assert_eq!(row.positioning, "Luxury self-care and wellness");
    assert_eq!(row.recommended_personalities, "competent, sophisticated");
    assert_eq!(row.campaign_duration, "12 months");
}

#[test]
fn each_export_adds_exactly_one_row() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let tables = ReferenceTables::builtin();
    let generator = StrategyGenerator::new(&tables);

    for (i, name) in ["One", "Two", "Three", "Four"].into_iter().enumerate() {
        let before = store.load_all().unwrap().len();
        assert_eq!(before, i);

        let strategy = generator.generate_strategy(&request(name, &["families"]));
        let receipt = store.append(StrategyRecord::from(&strategy)).unwrap();
        assert_eq!(receipt.header_written, i == 0);
        assert_eq!(store.load_all().unwrap().len(), before + 1);
    }

    let text = std::fs::read_to_string(store.path()).unwrap();
    let header_lines = text
        .lines()
        .filter(|line| line.starts_with("Business Name,"))
        .count();
    assert_eq!(header_lines, 1);

    let names: Vec<String> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.business_name)
        .collect();
    assert_eq!(names, vec!["One", "Two", "Three", "Four"]);
}

#[test]
fn recent_returns_last_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let tables = ReferenceTables::builtin();
    let generator = StrategyGenerator::new(&tables);

    for name in ["A", "B", "C"] {
        let strategy = generator.generate_strategy(&request(name, &["55+"]));
        store.append(StrategyRecord::from(&strategy)).unwrap();
    }

    let (total_rows, recent) = store.recent(2).unwrap();
    let last_two: Vec<String> = recent.into_iter().map(|r| r.business_name).collect();
    assert_eq!(total_rows, 3);
    assert_eq!(last_two, vec!["B", "C"]);

    let (total_rows, all) = store.recent(10).unwrap();
    assert_eq!((total_rows, all.len()), (3, 3));
}

#[test]
fn empty_existing_file_gets_a_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let store = StrategyStore::new(&path);
    let tables = ReferenceTables::builtin();
    let strategy = StrategyGenerator::new(&tables).generate_strategy(&request("Fresh", &["18-24"]));
    let receipt = store.append(StrategyRecord::from(&strategy)).unwrap();

    assert!(receipt.header_written);
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn unwritable_location_is_an_export_error() {
    let dir = TempDir::new().unwrap();
    // A regular file where the store directory should be.
    let blocker = dir.path().join("brand_strategies");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = store_in(&dir);
    let tables = ReferenceTables::builtin();
    let strategy = StrategyGenerator::new(&tables).generate_strategy(&request("Nope", &["18-24"]));

    let err = store.append(StrategyRecord::from(&strategy)).unwrap_err();
    assert!(matches!(err, StoreError::Export(_)));
    assert!(
        err.to_string()
            .starts_with("Error exporting strategy to CSV: ")
    );
    assert!(!store.path().exists());
}

#[test]
fn malformed_store_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "Business Name,Category\nAcme,household\n").unwrap();

    let err = StrategyStore::new(&path).load_all().unwrap_err();
    assert!(matches!(err, StoreError::Read(_)));
}
