pub mod sdk;
pub mod generator;
pub mod infrastructure;
pub mod research;
pub mod economy;
pub mod tick;
pub mod purchase;
pub mod reset_prestige;
pub mod csv_log;
#[cfg(feature="system-grid_search")] pub mod grid_search;
