//! Read an FWBT table back and print its header and records

use fwbt::FwbtFile;

fn main() -> fwbt::Result<()> {
    let file = FwbtFile::open("example_table.fwbt")?;

    println!("Header Info:");
    println!(
        "\tSignature: {} ; Version: {}",
        String::from_utf8_lossy(&file.header.magic),
        file.header.version
    );
    println!(
        "\tKey Width: {} ; Value Width: {} ; Entry Count: {}",
        file.header.key_width, file.header.value_width, file.header.entry_count
    );
    println!(
        "\tAs JSON: {}",
        serde_json::to_string(&file.header).expect("header serializes")
    );

    let view = file.map()?;
    println!("\nRecords:");
    for (index, (key, value)) in view.records().enumerate() {
        println!("\t[{index}] {key:02x?} -> {value:02x?}");
    }

    Ok(())
}
