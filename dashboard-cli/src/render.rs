//! Text rendering of the assembled dashboard.

use dashboard_core::{DashboardData, FeedSummary, Fetched};

/// Formats one dashboard into a human-readable block of text.
///
/// Degraded fields render as bracketed "unavailable" markers instead of
/// values, so a partial outage is visible without hiding the rest.
pub fn render(data: &DashboardData) -> String {
    let mut output = String::new();

    output.push_str("NHC Latest\n");
    output.push_str(&format!("🌪️ {}\n\n", summary_line(&data.nhc_summary)));

    output.push_str("SPC Latest\n");
    output.push_str(&format!("⛈️ {}\n\n", summary_line(&data.spc_summary)));

    output.push_str("Current Weather in McDonough, GA:\n");
    output.push_str(&format!("  Temperature: {}\n", value_line(&data.temperature, "°C")));
    output.push_str(&format!(
        "  Weather Symbol: {} {}\n",
        data.symbol.icon, data.symbol.description
    ));
    output.push_str(&format!(
        "  Heavy Rain Warning: {}\n",
        value_line(&data.heavy_rain_warning, "mm")
    ));
    output.push_str(&format!(
        "  Air Quality (PM2.5): {}\n",
        value_line(&data.air_quality, "µg/m³")
    ));

    output
}

fn summary_line(summary: &FeedSummary) -> String {
    match &summary.text {
        Ok(text) => text.clone(),
        Err(err) => format!("[unavailable: {err}]"),
    }
}

fn value_line(value: &Fetched<f64>, unit: &str) -> String {
    match value {
        Ok(v) => format!("{v} {unit}"),
        Err(err) => format!("[unavailable: {err}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{FetchError, WeatherSymbol, dashboard};

    fn sample() -> DashboardData {
        DashboardData {
            nhc_summary: FeedSummary {
                source_url: dashboard::NHC_FEED_URL.to_string(),
                text: Ok("Tropical Storm Alpha forms".into()),
            },
            spc_summary: FeedSummary {
                source_url: dashboard::SPC_FEED_URL.to_string(),
                text: Err(FetchError::Transport("connection timed out".into())),
            },
            temperature: Ok(21.4),
            symbol: dashboard_core::symbol::lookup(3),
            heavy_rain_warning: Ok(0.0),
            air_quality: Err(FetchError::HttpStatus { status: 503, body: "unavailable".into() }),
        }
    }

    #[test]
    fn successful_fields_show_their_values() {
        let text = render(&sample());

        assert!(text.contains("🌪️ Tropical Storm Alpha forms"));
        assert!(text.contains("Temperature: 21.4 °C"));
        assert!(text.contains("Weather Symbol: ⛅ Partly cloudy"));
        assert!(text.contains("Heavy Rain Warning: 0 mm"));
    }

    #[test]
    fn degraded_fields_are_marked_not_hidden() {
        let text = render(&sample());

        assert!(text.contains("⛈️ [unavailable: transport error: connection timed out]"));
        assert!(text.contains("Air Quality (PM2.5): [unavailable: HTTP status 503: unavailable]"));
    }

    #[test]
    fn symbol_renders_even_when_everything_else_degraded() {
        let mut data = sample();
        data.temperature = Err(FetchError::Transport("down".into()));
        data.symbol = WeatherSymbol {
            code: 0,
            description: "A weather symbol could not be determined",
            icon: "❓",
        };

        let text = render(&data);
        assert!(text.contains("❓ A weather symbol could not be determined"));
    }
}
