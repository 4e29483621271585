//! Application-wide constants and default values
//!
//! Column names, chart styling and layout defaults live here so the data
//! pipeline and the UI agree on a single source of truth.

/// Header names recognized in the observation CSV
pub mod columns {
    /// Plant identifier column
    pub const PLANT_ID: &str = "植物編號";

    /// Plant display name column
    pub const PLANT_NAME: &str = "植物名稱";

    /// Observation date column
    pub const DATE: &str = "日期";

    /// Solar term (seasonal marker) column
    pub const SOLAR_TERM: &str = "節氣";

    /// Leaf score column
    pub const LEAF_SCORE: &str = "葉子分數";

    /// Flower score column
    pub const FLOWER_SCORE: &str = "花的分數";

    /// Fruit score column
    pub const FRUIT_SCORE: &str = "果實分數";
}

/// Dataset loading defaults
pub mod dataset {
    /// File loaded at startup when no config overrides it
    pub const DEFAULT_FILE: &str = "大肚山植調.csv";
}

/// Chart styling shared by every panel
pub mod chart {
    /// Series colors as RGB triples, in leaf/flower/fruit order
    pub const LEAF_RGB: [u8; 3] = [75, 192, 192];
    pub const FLOWER_RGB: [u8; 3] = [255, 99, 132];
    pub const FRUIT_RGB: [u8; 3] = [255, 205, 86];

    /// Axis and label date format
    pub const DATE_FORMAT: &str = "%Y/%m/%d";

    /// Label text for a date that failed to parse
    pub const INVALID_DATE: &str = "NaN/NaN/NaN";

    /// Seconds per day, x axis is measured in days since the Unix epoch
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// UI layout defaults
pub mod layout {
    /// Default height of one chart panel
    pub const CHART_HEIGHT: f32 = 320.0;

    /// Smallest chart height accepted from config
    pub const MIN_CHART_HEIGHT: f32 = 120.0;

    /// Largest chart height accepted from config
    pub const MAX_CHART_HEIGHT: f32 = 1200.0;

    /// Height reserved for the selector row above each chart
    pub const SELECTOR_ROW_HEIGHT: f32 = 28.0;

    /// Width of the plant selector combo box
    pub const PLANT_SELECTOR_WIDTH: f32 = 240.0;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "pheno-plot.json";

    /// Default tracing filter directive
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
