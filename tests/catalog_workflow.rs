use stockpad::api::StockApi;
use stockpad::model::{NewProduct, ProductUpdate};
use stockpad::store::fs::FileStore;
use stockpad::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    (dir, path)
}

#[test]
fn add_add_delete_survives_a_restart() {
    let (_dir, path) = setup();

    let mut api = StockApi::open(FileStore::new(&path));
    let first = api
        .add_product(NewProduct::new("Laptop X", "BrandY", 15_000_000, 3))
        .unwrap();
    let second = api
        .add_product(NewProduct::new("Laptop Z", "BrandY", 9_000_000, 1))
        .unwrap();
    assert_eq!(first.affected_products[0].id, "LT01");
    assert_eq!(second.affected_products[0].id, "LT02");

    api.delete_product("lt01", |_| true).unwrap();
    assert!(!api.save().has_errors());

    let reopened = StockApi::open(FileStore::new(&path));
    let ids: Vec<_> = reopened.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["LT02"]);
}

#[test]
fn unsaved_changes_never_reach_disk() {
    let (_dir, path) = setup();
    let mut api = StockApi::open(FileStore::new(&path));
    api.add_product(NewProduct::new("Pen", "Bic", 5_000, 100)).unwrap();
    drop(api);

    assert!(!path.exists());
}

#[test]
fn round_trip_preserves_order_fields_and_unicode() {
    let (_dir, path) = setup();
    let mut api = StockApi::open(FileStore::new(&path));
    for (name, brand) in [("Bàn phím cơ", "Akko"), ("Zebra", "Z"), ("Apple", "A")] {
        api.add_product(NewProduct::new(name, brand, 1_234_567, 7)).unwrap();
    }
    api.update_product("LT02", ProductUpdate::default().with_quantity(0))
        .unwrap();
    api.save();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("\"name\": \"Bàn phím cơ\""));

    let loaded = FileStore::new(&path).load();
    assert_eq!(loaded, api.products());
}

#[test]
fn reads_files_written_by_other_tools() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[
  {"id": "LT07", "name": "Màn hình", "brand": "Dell", "price": 4500000, "quantity": 2},
  {"id": "OLD-1", "name": "Legacy", "brand": "", "price": 0, "quantity": 0}
]"#,
    )
    .unwrap();

    let mut api = StockApi::open(FileStore::new(&path));
    assert_eq!(api.products().len(), 2);
    let added = api
        .add_product(NewProduct::new("Cáp", "Ugreen", 90_000, 5))
        .unwrap();
    assert_eq!(added.affected_products[0].id, "LT08");
}

#[test]
fn corrupt_file_opens_empty_and_is_backed_up_on_save() {
    let (_dir, path) = setup();
    fs::write(&path, "[{\"id\": \"LT01\", \"name\": ").unwrap();

    let mut api = StockApi::open(FileStore::new(&path));
    assert!(api.products().is_empty());
    let backup = path.with_file_name("products.json.corrupt");
    let warning = api.load_warning().unwrap();
    assert!(warning.contains(&backup.display().to_string()));

    api.add_product(NewProduct::new("Fresh", "New", 1, 1)).unwrap();
    api.save();

    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "[{\"id\": \"LT01\", \"name\": "
    );
    assert_eq!(FileStore::new(&path).load().len(), 1);
}

#[test]
fn second_corruption_gets_its_own_backup() {
    let (dir, path) = setup();
    for content in ["FIRST-CORRUPT", "SECOND-CORRUPT"] {
        fs::write(&path, content).unwrap();
        let mut api = StockApi::open(FileStore::new(&path));
        api.add_product(NewProduct::new("A", "B", 1, 1)).unwrap();
        assert!(!api.save().has_errors());
    }

    let first = fs::read_to_string(dir.path().join("products.json.corrupt")).unwrap();
    let second = fs::read_to_string(dir.path().join("products.json.corrupt.1")).unwrap();
    assert_eq!(first, "FIRST-CORRUPT");
    assert_eq!(second, "SECOND-CORRUPT");
}

#[test]
fn search_and_update_semantics() {
    let (_dir, path) = setup();
    let mut api = StockApi::open(FileStore::new(&path));
    api.add_product(NewProduct::new("Laptop A", "X", 1, 1)).unwrap();
    api.add_product(NewProduct::new("Desktop", "Y", 2, 2)).unwrap();

    assert_eq!(api.search_products("top").unwrap().listed_products.len(), 2);
    assert_eq!(api.search_products("LAPTOP").unwrap().listed_products.len(), 1);

    let before = api.products()[1].clone();
    let miss = api
        .update_product("lt02", ProductUpdate::default().with_name("Changed"))
        .unwrap();
    assert!(miss.has_errors());
    assert_eq!(api.products()[1], before);
}
