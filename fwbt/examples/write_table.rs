//! Generate a random FWBT table and write it to disk

use fwbt::{generate, GenerateConfig};

fn main() -> fwbt::Result<()> {
    let config = GenerateConfig::default();
    println!(
        "Generating table: key width {}, value width {}, {} entries",
        config.key_width, config.value_width, config.entry_count
    );

    let data = generate(config);

    let expected = config.total_size().expect("dimensions fit in u64");
    println!("expected total length: {expected}");
    println!("actual total length: {}", data.len());

    std::fs::write("example_table.fwbt", &data)?;
    println!("\nRun 'cargo run --example read_table' to read it back!");
    Ok(())
}
