use anyhow::{Context, Result};
use serde_json::json;

/// Writes the default startup dataset to `data/startups.json`.
///
/// The records deliberately cover every money-string shape the parsers
/// handle: explicit valuations, B/M/K units, missing units, "N/A", and
/// absent `Money` fields.
fn main() -> Result<()> {
    let dataset = json!({
        "Foundation Models": [
            {
                "Name": "NeuroForge",
                "Loc": "San Francisco, USA",
                "Desc": "Frontier reasoning models for enterprise workloads",
                "Year": 2021,
                "Money": "Raised $1.2B • Valuation: $6B"
            },
            {
                "Name": "Lumen AI",
                "Loc": "London, UK",
                "Desc": "Multilingual foundation models for low-resource languages",
                "Year": 2022,
                "Money": "$500M Series C"
            },
            {
                "Name": "Praxis Labs",
                "Loc": "Toronto, Canada",
                "Desc": "Small efficient models for on-device inference",
                "Year": 2023,
                "Money": "$85M • val=900M"
            }
        ],
        "Agents": [
            {
                "Name": "Errandly",
                "Loc": "Berlin, Germany",
                "Desc": "Autonomous agents for back-office operations",
                "Year": 2023,
                "Money": "$40M Series A"
            },
            {
                "Name": "Taskweaver",
                "Loc": "Austin, USA",
                "Desc": "Multi-agent orchestration platform",
                "Year": 2024,
                "Money": "Funding: N/A"
            },
            {
                "Name": "Clerkwise",
                "Loc": "Paris, France",
                "Desc": "Agentic workflows for legal teams",
                "Year": 2022,
                "Money": "Raised $750K pre-seed"
            }
        ],
        "Robotics": [
            {
                "Name": "Servomind",
                "Loc": "Tokyo, Japan",
                "Desc": "Learned manipulation for warehouse robots",
                "Year": 2019
            },
            {
                "Name": "Gaitwell",
                "Loc": "Zurich, Switzerland",
                "Desc": "Legged robots for industrial inspection",
                "Year": 2020,
                "Money": "$2.5B raised to date • Valuation: $11B"
            }
        ],
        "Healthcare AI": [
            {
                "Name": "Radiant Dx",
                "Loc": "Boston, USA",
                "Desc": "Diagnostic imaging triage",
                "Year": 2018,
                "Money": "$3 total (undisclosed rounds)"
            },
            {
                "Name": "Genomica",
                "Loc": "Cambridge, UK",
                "Desc": "Protein structure search for drug discovery",
                "Year": 2021,
                "Money": "$320M • Valuation: $1.8B"
            }
        ],
        "Developer Tools": [
            {
                "Name": "Forgepoint",
                "Loc": "Seattle, USA",
                "Desc": "AI pair programmer for legacy codebases",
                "Year": 2022,
                "Money": "$95M Series B"
            },
            {
                "Name": "Testament",
                "Loc": "Tel Aviv, Israel",
                "Desc": "Self-healing integration test generation",
                "Year": 2024,
                "Money": "N/A"
            }
        ]
    });

    let output_path = "data/startups.json";
    std::fs::create_dir_all("data").context("creating data directory")?;
    let text = serde_json::to_string_pretty(&dataset).context("serializing dataset")?;
    std::fs::write(output_path, text).context("writing startups.json")?;

    let n: usize = dataset
        .as_object()
        .map(|m| m.values().filter_map(|v| v.as_array()).map(Vec::len).sum())
        .unwrap_or(0);
    println!("Wrote {n} startups to {output_path}");
    Ok(())
}
