//! # Seed Reference Data
//!
//! Hard-coded tables and café menu the kiosk runs against when no backend
//! catalog is wired in. Mirrors the floor of a small billiards café: six
//! tables across two rate tiers, one currently occupied, and a short menu.
//!
//! Entries go through the validating constructors so a bad seed row fails
//! at startup rather than surfacing mid-flow.

use parlor_core::validation::ValidationResult;
use parlor_core::{
    MenuCatalog, MenuCategory, MenuItem, Table, TableAvailability, TableCatalog,
};

/// Billiard tables, in floor order.
pub fn tables() -> ValidationResult<TableCatalog> {
    let specs: &[(&str, &str, u32, i64, TableAvailability)] = &[
        ("A1", "Table A1", 4, 50_000, TableAvailability::Available),
        ("A2", "Table A2", 4, 50_000, TableAvailability::Available),
        ("A3", "Table A3", 4, 50_000, TableAvailability::Available),
        ("B1", "Table B1 (VIP)", 6, 75_000, TableAvailability::Available),
        ("B2", "Table B2 (VIP)", 6, 75_000, TableAvailability::Occupied),
        ("B3", "Table B3 (VIP)", 6, 75_000, TableAvailability::Available),
    ];

    let tables = specs
        .iter()
        .map(|(id, name, capacity, rate, availability)| {
            Table::new(*id, *name, *capacity, *rate, *availability)
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(TableCatalog::new(tables))
}

/// The café menu, grouped drinks-first like the menu screen shows it.
pub fn menu() -> ValidationResult<MenuCatalog> {
    let specs: &[(&str, &str, MenuCategory, i64)] = &[
        ("m1", "Iced Lychee Tea", MenuCategory::Drink, 15_000),
        ("m2", "Es Kopi Susu", MenuCategory::Drink, 18_000),
        ("m3", "Mineral Water", MenuCategory::Drink, 8_000),
        ("m4", "Fried Rice", MenuCategory::Food, 25_000),
        ("m5", "Chicken Katsu", MenuCategory::Food, 32_000),
        ("m6", "French Fries", MenuCategory::Snack, 20_000),
        ("m7", "Singkong Goreng", MenuCategory::Snack, 15_000),
    ];

    let items = specs
        .iter()
        .map(|(id, name, category, price)| MenuItem::new(*id, *name, *category, *price, true))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(MenuCatalog::new(items))
}
