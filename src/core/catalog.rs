//! Fixed catalogs: terrain names, treasures and display colors.

use serde::{Deserialize, Serialize};

/// The 24 terrain names of the standard island.
pub const TERRAIN_NAMES: [&str; 24] = [
    "Jardim Sussurrante",
    "Jardim Uivante",
    "Caverna das Sombras",
    "Caverna das Chamas",
    "Palácio de Coral",
    "Palácio das Marés",
    "Templo da Lua",
    "Templo do Sol",
    "Rocha Fantasma",
    "Floresta Carmesim",
    "Clareira do Crepúsculo",
    "Torre de Vigia",
    "Pântano de Pavor",
    "Portal de Prata",
    "Portal de Bronze",
    "Portal de Ferro",
    "Portal de Ouro",
    "Portal de Cobre",
    "Observatório",
    "Heliponto",
    "Caverna do Vórtice",
    "Templo do Vento",
    "Templo do Fogo",
    "Caverna da Onda",
];

/// The default terrain catalog as owned names.
#[must_use]
pub fn default_terrain_catalog() -> Vec<String> {
    TERRAIN_NAMES.iter().map(|name| (*name).to_string()).collect()
}

/// RGB display color, rendered as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Red, green and blue components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// One of the four treasures hidden on the island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Treasure {
    TideChalice,
    FireCrystal,
    StoneStatue,
    EarthOrb,
}

impl Treasure {
    /// All treasures in catalog order.
    pub const ALL: [Treasure; 4] = [
        Treasure::TideChalice,
        Treasure::FireCrystal,
        Treasure::StoneStatue,
        Treasure::EarthOrb,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Treasure::TideChalice => "Cálice da Maré",
            Treasure::FireCrystal => "Cristal de Fogo",
            Treasure::StoneStatue => "Estátua de Pedra",
            Treasure::EarthOrb => "Orbe Terrestre",
        }
    }

    /// Color used when drawing the treasure and its terrains.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Treasure::TideChalice => Color(0x80_00_80),
            Treasure::FireCrystal => Color(0xFF_8C_00),
            Treasure::StoneStatue => Color(0x8B_45_13),
            Treasure::EarthOrb => Color(0x00_64_00),
        }
    }

    /// The two terrains where this treasure can be claimed.
    #[must_use]
    pub const fn terrains(self) -> [&'static str; 2] {
        match self {
            Treasure::TideChalice => ["Jardim Sussurrante", "Jardim Uivante"],
            Treasure::FireCrystal => ["Palácio de Coral", "Palácio das Marés"],
            Treasure::StoneStatue => ["Caverna das Sombras", "Caverna das Chamas"],
            Treasure::EarthOrb => ["Templo da Lua", "Templo do Sol"],
        }
    }

    /// The treasure statically paired with a terrain, if any.
    #[must_use]
    pub fn for_terrain(terrain: &str) -> Option<Treasure> {
        Treasure::ALL
            .into_iter()
            .find(|treasure| treasure.terrains().iter().any(|name| *name == terrain))
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
