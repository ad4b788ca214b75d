//! Scenario input parsing: JSON text in, validated domain scenario out.

use anyhow::Context;
use safezone_domain::Scenario;
use safezone_types::{SCHEMA_SCENARIO_V1, ScenarioV1};

pub fn parse_scenario_json(text: &str) -> anyhow::Result<Scenario> {
    let input: ScenarioV1 = serde_json::from_str(text).context("parse scenario json")?;

    if let Some(schema) = input.schema.as_deref()
        && schema != SCHEMA_SCENARIO_V1
    {
        anyhow::bail!("unknown scenario schema: {schema} (expected {SCHEMA_SCENARIO_V1})");
    }

    Scenario::from_v1(input).context("validate scenario")
}
