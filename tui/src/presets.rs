//! Built-in patterns.

/// A pattern with a universe that fits it.
pub(crate) struct Preset {
    pub(crate) name: &'static str,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) cells: &'static [(i32, i32)],
}

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        name: "glider",
        width: 10,
        height: 10,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Preset {
        name: "gosper",
        width: 50,
        height: 50,
        cells: &[
            (1, 8), (1, 9), (2, 8), (2, 9),
            (11, 8), (11, 9), (11, 10), (12, 7), (12, 11), (13, 6), (13, 12),
            (14, 6), (14, 12), (15, 9), (16, 7), (16, 11), (17, 8), (17, 9), (17, 10), (18, 9),
            (21, 6), (21, 7), (21, 8), (22, 6), (22, 7), (22, 8), (23, 5), (23, 9),
            (25, 4), (25, 5), (25, 9), (25, 10),
            (35, 6), (35, 7), (36, 6), (36, 7),
        ],
    },
    Preset {
        name: "blinker",
        width: 5,
        height: 5,
        cells: &[(1, 2), (2, 2), (3, 2)],
    },
    Preset {
        name: "block",
        width: 4,
        height: 4,
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2)],
    },
    Preset {
        name: "r-pentomino",
        width: 80,
        height: 40,
        cells: &[(40, 19), (41, 19), (39, 20), (40, 20), (40, 21)],
    },
];

/// Names of all presets, for the help message.
pub(crate) const PRESET_NAMES: [&str; 5] = ["glider", "gosper", "blinker", "block", "r-pentomino"];

/// The default preset.
pub(crate) const DEFAULT_PRESET: &str = "gosper";

/// Finds a preset by its name.
pub(crate) fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
