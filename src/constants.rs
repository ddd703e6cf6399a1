use ratatui::style::Color;

pub const GRID: GridSettings = GridSettings {
    width: 52,
    height: 7,
};

/// GitHub contribution palette, one entry per activity level.
pub const LEVEL_COLORS: [Color; 5] = [
    Color::Rgb(22, 27, 34),   // #161b22
    Color::Rgb(14, 68, 41),   // #0e4429
    Color::Rgb(0, 109, 50),   // #006d32
    Color::Rgb(38, 166, 65),  // #26a641
    Color::Rgb(57, 211, 83),  // #39d353
];

pub const TILE: TileSettings = TileSettings {
    glyph: "██",
    width: 2,
};

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    target_fps: 30,
    poll_ms: 10,
};

pub const FILE_PATHS: FilePaths = FilePaths {
    chart: "./commits.csv",
};

pub struct GridSettings {
    pub width: usize,
    pub height: usize,
}

pub struct TileSettings {
    pub glyph: &'static str,
    pub width: usize,
}

pub struct TimeSettings {
    pub target_fps: u64,
    pub poll_ms: u64,
}

pub struct FilePaths {
    pub chart: &'static str,
}
