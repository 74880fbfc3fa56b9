use crate::config::ListingConfig;
use crate::domain::model::Restaurant;
use crate::domain::ports::RestaurantSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// 報表中的一列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub name: String,
    pub category: String,
    pub average_rating: Option<f64>,
    pub active: bool,
}

impl From<&Restaurant> for ListingRow {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.display_name().to_string(),
            category: restaurant.category().to_string(),
            average_rating: restaurant.average_rating(),
            active: restaurant.is_active(),
        }
    }
}

pub fn listing_rows<S: RestaurantSource + ?Sized>(source: &S) -> Vec<ListingRow> {
    source.restaurants().map(ListingRow::from).collect()
}

/// 固定欄寬的表格，超過欄寬的內容直接溢出，不截斷
pub fn render_table<S: RestaurantSource + ?Sized>(source: &S, listing: &ListingConfig) -> String {
    let width = listing.column_width;
    let mut out = format!(
        "{:<width$} | {:<width$} | {:<width$} | {}\n",
        "Name", "Category", "Average Rating", "Active"
    );

    for restaurant in source.restaurants() {
        let average = match restaurant.average_rating() {
            Some(value) => format!("{:.1}", value),
            None => listing.no_data_marker.clone(),
        };
        out.push_str(&format!(
            "{:<width$} | {:<width$} | {:<width$} | {}\n",
            restaurant.display_name(),
            restaurant.category(),
            average,
            restaurant.activation_marker()
        ));
    }

    out
}

pub fn render_json<S: RestaurantSource + ?Sized>(source: &S) -> Result<String> {
    Ok(serde_json::to_string_pretty(&listing_rows(source))?)
}

pub fn write_listing<W: Write, S: RestaurantSource + ?Sized>(
    writer: &mut W,
    source: &S,
    listing: &ListingConfig,
) -> Result<()> {
    match listing.format {
        ReportFormat::Table => writer.write_all(render_table(source, listing).as_bytes())?,
        ReportFormat::Json => writeln!(writer, "{}", render_json(source)?)?,
    }
    writer.flush()?;
    Ok(())
}

/// 把報表輸出到 stdout
pub fn list_restaurants<S: RestaurantSource + ?Sized>(
    source: &S,
    listing: &ListingConfig,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_listing(&mut handle, source, listing)
}
