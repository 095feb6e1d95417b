pub mod export;
pub mod play;

use yk_core::Scenario;

/// Resolve a scenario number given on the command line.
fn scenario(number: u32) -> Result<Scenario, String> {
    Scenario::from_number(number).map_err(|e| e.to_string())
}
