use std::collections::HashMap;
use std::io::Write;

use weighted_pool::{PoolOptions, RngSource, WeightedEnum, WeightedPool, normalize};

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedEnum)]
enum Rarity {
    #[weight(1/1000)]
    Mythic,
    #[weight(1/100)]
    Legendary,
    #[weight(20/100)]
    Uncommon,
    #[weight(50/100)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
        .init();

    // Rarity rolls put the result back every time.
    let mut rarity = Rarity::pool();
    let mut hist: HashMap<Rarity, u64> = HashMap::default();
    for _ in 0..200_000 {
        *hist.entry(rarity.pick()?).or_default() += 1;
    }

    let mut entries = Rarity::entries();
    normalize(&mut entries, None);
    println!("Rarity (observed vs expected):");
    let mut v: Vec<_> = hist.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    for (k, c) in v {
        let expected = entries
            .iter()
            .find(|e| e.value == k)
            .map_or(0.0, |e| e.weight * 200_000.0);
        println!("{c:>6} {expected:>9.0} {k:?}");
    }

    // A legendary chest hands out each item at most once until refilled.
    let mut chest = PoolOptions::new()
        .values([("Thunderfury", 1.0), ("Sulfuras", 2.0), ("Atiesh", 3.0)])
        .dependent(true)
        .random_source(RngSource::seeded(7))
        .build();
    println!("\nLegendary chest:");
    while let Ok(item) = chest.pick() {
        println!("  {item} ({} left)", chest.len());
    }
    chest.reset();
    println!("refilled with {} items", chest.len());

    let mut names: WeightedPool<String> = WeightedPool::new([(String::from("Ragnaros"), 1.0)]);
    let removed = names.remove("Ragnaros");
    println!("removed boss: {removed}, pool empty: {}", names.is_empty());

    Ok(())
}
