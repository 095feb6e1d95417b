use std::path::Path;

use yk_core::Scenario;

pub fn run(number: u32, output: Option<&Path>) -> Result<(), String> {
    let scenario = super::scenario(number)?;
    let content = export_json(scenario)?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}

fn export_json(scenario: Scenario) -> Result<String, String> {
    let planets: Vec<_> = scenario
        .build_planets()
        .into_iter()
        .map(|(_, planet)| planet)
        .collect();

    let export = serde_json::json!({
        "scenario": {
            "number": scenario.number(),
            "title": scenario.title(),
        },
        "planets": planets,
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}
