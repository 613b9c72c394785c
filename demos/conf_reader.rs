//! Walks through loading, querying and reloading the fixture INI files.
//!
//! Run from the crate root: `RUST_LOG=debug cargo run --example conf_reader`

use conf_reader::{ConfReader, IniBackend, SECTION_MARKER};

fn main() -> Result<(), conf_reader::Error> {
    env_logger::init();

    let mut config = ConfReader::new(IniBackend::new());
    config.load_file("tests/files/test_file.ini")?;

    println!("{}", config.get("personal_info.name")?);
    println!("{}", config.get_as::<i32>("personal_info.age")?);

    // Second file overrides the parameters it redefines
    config.load_file("tests/files/test_file2.ini")?;
    if config.has("personal_info.age") {
        let age: i32 = config.get_as("personal_info.age")?;
        println!("{age}\n");
    }

    for (name, value) in config.get_all() {
        if value == SECTION_MARKER {
            println!("[{name}]");
        } else {
            println!("  {name} : {value}");
        }
    }

    config.reset();
    config.load_file("tests/files/test_file3.ini")?;
    println!("\nserver.port = {}", config.get_as::<u16>("server.port")?);

    Ok(())
}
