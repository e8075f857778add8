use crate::cli::MediaArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::prompt;
use crate::remote::bacdive::{BacdiveClient, MediumRecipe, extract_media, extract_temperature};
use tracing::info;

pub async fn run(args: MediaArgs) -> Result<()> {
    let query = match args.query {
        Some(query) if !query.is_empty() => query,
        _ => {
            let query = prompt::read_line("Enter strain (e.g. 'Bacillus subtilis'): ")?;
            if query.is_empty() {
                return Err(CliError::Argument("Empty query.".to_string()));
            }
            query
        }
    };

    let credentials = config::bacdive_credentials(args.config.as_deref())?;
    let client = BacdiveClient::authenticate(&credentials).await?;

    let ids = client.search_ids(&query).await?;
    let Some(first) = ids.first().copied() else {
        println!("No strains found for '{query}'.");
        return Ok(());
    };
    info!(id = first, candidates = ids.len(), "Fetching first matching strain");

    let strain = client.fetch_strain(first).await?;
    let media = extract_media(&strain);
    let temperature = extract_temperature(&strain);

    if media.is_empty() {
        println!("No medium info available for '{query}'.");
        return Ok(());
    }

    print_media_table(&query, &media, temperature);
    Ok(())
}

fn print_media_table(query: &str, media: &[MediumRecipe], temperature: Option<f64>) {
    let temp_display = temperature
        .map(|t| format!("{t}°C"))
        .unwrap_or_else(|| "-".to_string());

    let headers = ["Name", "Growth", "Composition", "Link", "Temp"];
    let rows: Vec<[&str; 5]> = media
        .iter()
        .map(|m| {
            [
                m.name.as_str(),
                m.growth.as_str(),
                m.composition.as_str(),
                m.link.as_str(),
                temp_display.as_str(),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("\nMedia recipes for '{query}'");
    print_row(&headers, &widths);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let separator_row: Vec<&str> = separators.iter().map(String::as_str).collect();
    print_row(&separator_row, &widths);
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_formatting_drops_trailing_zeroes() {
        let display = Some(37.0)
            .map(|t: f64| format!("{t}°C"))
            .unwrap_or_else(|| "-".to_string());
        assert_eq!(display, "37°C");
    }

    #[test]
    fn table_printing_handles_empty_fields() {
        let media = vec![MediumRecipe {
            name: "M1".to_string(),
            growth: "-".to_string(),
            composition: "Peptone 5 g/L".to_string(),
            link: "-".to_string(),
        }];
        // Smoke test: must not panic on width computation.
        print_media_table("Bacillus subtilis", &media, None);
    }
}
