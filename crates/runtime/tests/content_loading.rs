use std::fs;
use std::io::Write;
use std::path::Path;

use coinage_content::ContentFactory;
use coinage_core::{CurrencyRegistry, ExchangeConfig};
use runtime::{ExchangeRuntime, ItemDirectory, MemoryInventory};

fn write_file(path: &Path, content: &str) {
    let mut file = fs::File::create(path).unwrap();
    write!(file, "{content}").unwrap();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn a_loaded_data_directory_drives_a_full_pass() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("config.toml"), "reward_chance = 1.0");

    let mint = dir.path().join("mint");
    fs::create_dir(&mint).unwrap();
    write_file(
        &mint.join("units.json"),
        r#"{
            "copper": { "item": "game:copper_coin", "value": 1, "drops": true },
            "silver": { "item": "game:silver_coin", "value": 10 }
        }"#,
    );
    write_file(
        &mint.join("rewards.json"),
        r#"{ "ruby": { "item": "game:ruby", "weight": 2 } }"#,
    );
    write_file(
        &mint.join("skeletons.json"),
        r#"{ "crown": { "item": "game:crown", "cost": ["ruby", "ruby"] } }"#,
    );

    let mut items = ItemDirectory::new();
    let copper = items.register("game:copper_coin".parse().unwrap());
    let silver = items.register("game:silver_coin".parse().unwrap());
    let ruby = items.register("game:ruby".parse().unwrap());
    let crown = items.register("game:crown".parse().unwrap());

    let mut runtime = ExchangeRuntime::new(CurrencyRegistry::new(), ExchangeConfig::default(), 3);
    let report = runtime
        .load_content(&ContentFactory::new(dir.path()), &items)
        .unwrap();

    assert_eq!(report.units, 2);
    assert_eq!(report.rewards, 1);
    assert_eq!(report.skeletons, 1);

    let mut inventory = MemoryInventory::new();
    inventory.add(copper, 20);
    runtime.run(&mut inventory);

    // Both bundles convert and drop a ruby each; the rubies craft a crown.
    assert_eq!(inventory.count_of(copper), 0);
    assert_eq!(inventory.count_of(silver), 2);
    assert_eq!(inventory.count_of(ruby), 0);
    assert_eq!(inventory.count_of(crown), 1);
}

#[test]
fn unreadable_content_surfaces_as_a_load_error() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let mint = dir.path().join("mint");
    fs::create_dir(&mint).unwrap();
    write_file(&mint.join("units.json"), "not json");

    let items = ItemDirectory::new();
    let mut runtime = ExchangeRuntime::new(CurrencyRegistry::new(), ExchangeConfig::default(), 3);

    let result = runtime.load_content(&ContentFactory::new(dir.path()), &items);
    assert!(result.is_err());
}
