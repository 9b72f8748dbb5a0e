//! Collateral token alias table.
//!
//! The Matic-bridged collateral tokens (`amUSDT`, …) and their underlying
//! Aave tokens (`aUSDT`, …) are interchangeable spellings of the same
//! asset. Both rule matching and asset location resolve through this one
//! table so a subject minted with either spelling finds the same art.

const COLLATERAL_ALIASES: &[(&str, &str)] = &[
    ("amUSDT", "aUSDT"),
    ("amAAVE", "aAAVE"),
    ("amDAI", "aDAI"),
    ("amUSDC", "aUSDC"),
];

/// Map a trait value through the collateral alias table.
///
/// Unknown values map to themselves.
pub fn map_collateral_alias(value: &str) -> &str {
    COLLATERAL_ALIASES
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
        .unwrap_or(value)
}
