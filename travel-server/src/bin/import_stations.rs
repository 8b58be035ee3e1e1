//! Converts the provider's stations-list dump into the codes file the
//! gateway loads at startup.
//!
//! Usage: import_stations <stations-list.json> [codes.json]

use travel_server::stations::import;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("Usage: import_stations <stations-list.json> [codes.json]");
        std::process::exit(2);
    };
    let output = args.next().unwrap_or_else(|| "codes.json".to_string());

    let dump = match std::fs::read_to_string(&input) {
        Ok(dump) => dump,
        Err(e) => {
            eprintln!("Failed to read {input}: {e}");
            std::process::exit(1);
        }
    };

    let codes = match import::convert(&dump) {
        Ok(codes) => codes,
        Err(e) => {
            eprintln!("Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    };

    let json = serde_json::to_string_pretty(&codes).expect("station codes serialize to JSON");

    if let Err(e) = std::fs::write(&output, json) {
        eprintln!("Failed to write {output}: {e}");
        std::process::exit(1);
    }

    println!("Wrote {} stations to {output}", codes.len());
}
