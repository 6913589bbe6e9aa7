use serde::Deserialize;

/// USD to RUB multiplication factor rendered into the report script.
pub const DEFAULT_RUB_RATE: u32 = 76;

/// Milliseconds per second, the divisor used for generation time.
pub const DEFAULT_TIME_DIVISOR: u32 = 1000;

/// Summary table headers, in display order.
pub const DEFAULT_COLUMNS: [&str; 4] = [
    "Модель",
    "Цена, USD",
    "Цена, рубли РФ",
    "Время генерации, сек",
];

/// Literal constants the checks look for.
///
/// Every field is optional in TOML; missing keys fall back to the values the
/// report generator emits today.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Multiplication factor checked as `* {rub_rate}`.
    #[serde(default = "default_rub_rate")]
    pub rub_rate: u32,

    /// Division factor checked as `/ {time_divisor}`.
    #[serde(default = "default_time_divisor")]
    pub time_divisor: u32,

    /// Column labels that must appear verbatim.
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rub_rate: DEFAULT_RUB_RATE,
            time_divisor: DEFAULT_TIME_DIVISOR,
            columns: default_columns(),
        }
    }
}

const fn default_rub_rate() -> u32 {
    DEFAULT_RUB_RATE
}

const fn default_time_divisor() -> u32 {
    DEFAULT_TIME_DIVISOR
}

fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
