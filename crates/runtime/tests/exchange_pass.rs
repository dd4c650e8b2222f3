use coinage_core::{
    CurrencyRegistry, ExchangeConfig, ItemHandle, ResourceId, Reward, Skeleton, Unit,
};
use runtime::{ExchangeRuntime, MemoryInventory};

const COPPER: ItemHandle = ItemHandle(1);
const SILVER: ItemHandle = ItemHandle(2);
const RUBY: ItemHandle = ItemHandle(3);
const CROWN: ItemHandle = ItemHandle(4);

fn key(raw: &str) -> ResourceId {
    raw.parse().unwrap()
}

fn coin_registry() -> CurrencyRegistry {
    let mut registry = CurrencyRegistry::new();
    registry.load_units(vec![
        (key("mint:copper"), Unit::new(COPPER, 1).unwrap()),
        (key("mint:silver"), Unit::new(SILVER, 10).unwrap()),
    ]);
    registry
}

#[test]
fn whole_bundles_convert_and_the_remainder_stays() {
    let mut inventory = MemoryInventory::new();
    inventory.add(COPPER, 25);

    let mut runtime = ExchangeRuntime::new(coin_registry(), ExchangeConfig::default(), 7);
    let summary = runtime.run(&mut inventory);

    assert!(!summary.exchanged.is_empty());
    assert!(summary.crafted.is_empty());
    assert_eq!(inventory.count_of(COPPER), 5);
    assert_eq!(inventory.count_of(SILVER), 2);
}

#[test]
fn rewards_drop_and_craft_within_one_invocation() {
    let mut registry = CurrencyRegistry::new();
    registry.load_units(vec![
        (
            key("mint:copper"),
            Unit::new(COPPER, 1).unwrap().with_drops(true),
        ),
        (key("mint:silver"), Unit::new(SILVER, 10).unwrap()),
    ]);
    registry.load_rewards(vec![(key("mint:ruby"), Reward::new(RUBY, 1).unwrap())]);
    registry.load_skeletons(vec![(
        key("mint:crown"),
        Skeleton::new(CROWN, vec![key("mint:ruby"), key("mint:ruby")]).unwrap(),
    )]);

    let mut inventory = MemoryInventory::new();
    inventory.add(COPPER, 20);

    let mut runtime = ExchangeRuntime::new(registry, ExchangeConfig::default(), 7);
    let summary = runtime.run(&mut inventory);

    // Two bundles convert, both rubies drop, and the crafting phase sees
    // them on the re-snapshot.
    assert!(!summary.exchanged.is_empty());
    assert!(!summary.crafted.is_empty());
    assert_eq!(inventory.count_of(COPPER), 0);
    assert_eq!(inventory.count_of(SILVER), 2);
    assert_eq!(inventory.count_of(RUBY), 0);
    assert_eq!(inventory.count_of(CROWN), 1);
}

#[test]
fn pinned_stacks_survive_a_pass_untouched() {
    let mut inventory = MemoryInventory::new();
    inventory.add_pinned(COPPER, 30);
    inventory.add(COPPER, 12);

    let mut runtime = ExchangeRuntime::new(coin_registry(), ExchangeConfig::default(), 7);
    runtime.run(&mut inventory);

    // Only the exchangeable 12 fed the conversion.
    assert_eq!(inventory.count_of(COPPER), 30 + 2);
    assert_eq!(inventory.count_of(SILVER), 1);
}

#[test]
fn a_settled_inventory_is_a_no_op() {
    let mut inventory = MemoryInventory::new();
    inventory.add(COPPER, 25);

    let mut runtime = ExchangeRuntime::new(coin_registry(), ExchangeConfig::default(), 7);
    runtime.run(&mut inventory);

    // The first pass settles everything below one bundle; the second must
    // request no mutations at all.
    let summary = runtime.run(&mut inventory);
    assert!(summary.is_empty());
    assert_eq!(inventory.count_of(COPPER), 5);
    assert_eq!(inventory.count_of(SILVER), 2);
}

#[test]
fn a_zero_reward_chance_never_drops() {
    let mut registry = CurrencyRegistry::new();
    registry.load_units(vec![
        (
            key("mint:copper"),
            Unit::new(COPPER, 1).unwrap().with_drops(true),
        ),
        (key("mint:silver"), Unit::new(SILVER, 10).unwrap()),
    ]);
    registry.load_rewards(vec![(key("mint:ruby"), Reward::new(RUBY, 1).unwrap())]);

    let mut inventory = MemoryInventory::new();
    inventory.add(COPPER, 50);

    let config = ExchangeConfig::with_reward_chance(0.0);
    let mut runtime = ExchangeRuntime::new(registry, config, 7);
    runtime.run(&mut inventory);

    assert_eq!(inventory.count_of(SILVER), 5);
    assert_eq!(inventory.count_of(RUBY), 0);
}
