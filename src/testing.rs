//! Testing utilities for toolfinder
//!
//! Fixture catalogs and builders shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Tool};

/// Build a tool with default developer and the given tags
#[must_use]
pub fn tool(name: &str, tool_type: &str, price: u64, tags: &[&str]) -> Tool {
    Tool::new(
        name,
        tool_type,
        "Test Dev",
        price,
        tags.iter().map(|t| (*t).to_string()).collect(),
    )
}

/// A small mixed catalog covering every query mode
///
/// Order: Pro-Q 3, Vital, Valhalla Supermassive, Serum, TDR Nova, Decapitator.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_tools(vec![
        Tool::new(
            "Pro-Q 3",
            "EQ",
            "FabFilter",
            179,
            vec!["mastering".into(), "surgical".into()],
        ),
        Tool::new(
            "Vital",
            "Synth",
            "Matt Tytel",
            0,
            vec!["wavetable".into(), "Modern".into()],
        ),
        Tool::new(
            "Valhalla Supermassive",
            "Reverb",
            "Valhalla DSP",
            0,
            vec!["ambient".into(), "space".into()],
        ),
        Tool::new(
            "Serum",
            "Synth",
            "Xfer Records",
            189,
            vec!["wavetable".into(), "bass".into()],
        ),
        Tool::new(
            "TDR Nova",
            "Dynamic EQ",
            "Tokyo Dawn Records",
            0,
            vec!["mastering".into(), "dynamic".into()],
        ),
        Tool::new(
            "Decapitator",
            "Saturation",
            "Soundtoys",
            199,
            vec!["vintage".into(), "analog".into()],
        ),
    ])
}

/// A catalog of `count` free EQ tools named `EQ 1` .. `EQ n`
#[must_use]
pub fn free_eq_catalog(count: usize) -> Catalog {
    Catalog::from_tools(
        (1..=count)
            .map(|i| tool(&format!("EQ {i}"), "EQ", 0, &["eq"]))
            .collect(),
    )
}

/// Names of the given tools, in order
#[must_use]
pub fn names<'a>(tools: &[&'a Tool]) -> Vec<&'a str> {
    tools.iter().map(|t| t.name.as_str()).collect()
}
