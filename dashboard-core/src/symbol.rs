//! Catalog of Meteomatics weather-symbol codes.
//!
//! Codes 1..=16 are daytime phenomena; adding 100 selects the nocturnal
//! variant (there is no code 100 — code 0 is the provider's "could not be
//! determined" sentinel and has no night counterpart).

/// A resolved weather-symbol entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSymbol {
    pub code: i64,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Resolve a condition code to its description and icon.
///
/// Total: codes outside the table fall back to the unknown sentinel.
pub fn lookup(code: i64) -> WeatherSymbol {
    let (description, icon) = describe(code);
    WeatherSymbol { code, description, icon }
}

fn describe(code: i64) -> (&'static str, &'static str) {
    match code {
        0 => ("A weather symbol could not be determined", "❓"),
        1 => ("Clear sky", "☀️"),
        101 => ("Clear sky (night)", "🌕"),
        2 => ("Light clouds", "🌤"),
        102 => ("Light clouds (night)", "🌥"),
        3 => ("Partly cloudy", "⛅"),
        103 => ("Partly cloudy (night)", "☁️"),
        4 => ("Cloudy", "☁️"),
        104 => ("Cloudy (night)", "☁️"),
        5 => ("Rain", "🌧"),
        105 => ("Rain (night)", "🌧"),
        6 => ("Rain and snow / sleet", "🌨"),
        106 => ("Rain and snow / sleet (night)", "🌨"),
        7 => ("Snow", "❄️"),
        107 => ("Snow (night)", "❄️"),
        8 => ("Rain shower", "🌦"),
        108 => ("Rain shower (night)", "🌦"),
        9 => ("Snow shower", "🌨"),
        109 => ("Snow shower (night)", "🌨"),
        10 => ("Sleet shower", "🌨"),
        110 => ("Sleet shower (night)", "🌨"),
        11 => ("Light fog", "🌫️"),
        111 => ("Light fog (night)", "🌫️"),
        12 => ("Dense fog", "🌫️"),
        112 => ("Dense fog (night)", "🌫️"),
        13 => ("Freezing rain", "🌧❄️"),
        113 => ("Freezing rain (night)", "🌧❄️"),
        14 => ("Thunderstorms", "⛈"),
        114 => ("Thunderstorms (night)", "⛈"),
        15 => ("Drizzle", "🌧"),
        115 => ("Drizzle (night)", "🌧"),
        16 => ("Sandstorm", "🌪️"),
        116 => ("Sandstorm (night)", "🌪️"),
        _ => ("Unknown symbol", "❓"),
    }
}
