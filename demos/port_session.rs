//! Port Session
//!
//! A ship configured from TOML is driven through a short port call by the
//! dispatcher, then snapshotted.
//!
//! Key concepts:
//! - Commands arrive by name and unknown names are ignored
//! - Operations the current state does not allow are silent no-ops
//! - A load the hold cannot take is the only error
//!
//! Run with: cargo run --example port_session

use helmsman::config::VesselConfig;
use helmsman::dispatch::PortDispatcher;
use helmsman::snapshot::ShipSnapshot;
use helmsman::systems::Logbook;

const VESSEL: &str = r#"
identifier = "SHIP001"

[engine]
power = 200.0

[cargo]
max_capacity = 250.0
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Port Session Example ===\n");

    let mut ship = VesselConfig::from_toml_str(VESSEL)?.build_ship()?;
    let port = PortDispatcher::new();
    println!("Initial: {}", port.request_report(&ship));

    // "navigate" before "start" is ignored, as is an unknown command
    for command in ["navigate", "anchor", "start", "load", "load"] {
        port.send_command(&mut ship, command)?;
        println!("{command:>10} -> {}", port.request_report(&ship));
    }

    // A third standard load would overfill the 250 t hold
    match port.send_command(&mut ship, "load") {
        Ok(()) => println!("      load -> accepted"),
        Err(e) => println!("      load -> refused: {e}"),
    }

    port.send_command(&mut ship, "navigate")?;
    ship.wait();
    println!("\nFinal: {}", port.request_report(&ship));

    println!("\nOperation log:");
    for entry in ship.log().entries() {
        println!("  {entry}");
    }

    println!("\nTransition path: {:?}", ship.history().path());

    let snapshot = ShipSnapshot::capture(&ship);
    let restored = ShipSnapshot::from_json(&snapshot.to_json()?)?;
    println!("Snapshot {} restored in state {}", restored.id, restored.state);

    println!("\n=== Example Complete ===");
    Ok(())
}
