// ===== benchdash/src/catalog.rs =====
//
// Static benchmark catalog: CPU programs with their SKUs and display
// colors, the shared build labels, the 34-game suite, and the rolling
// week labels. Nothing here is ever mutated.

pub struct Program {
    pub name: &'static str,
    pub skus: &'static [&'static str],
    /// Display color as a hex string ("#rrggbb").
    pub color: &'static str,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        name: "Arrow Lake",
        skus: &["Arrow Lake S", "Arrow Lake H", "Arrow Lake P"],
        color: "#3b82f6",
    },
    Program {
        name: "Nova Lake",
        skus: &["Nova Lake S", "Nova Lake H"],
        color: "#10b981",
    },
    Program {
        name: "Arrow Lake Refresh",
        skus: &["Arrow Lake Refresh S", "Arrow Lake Refresh H"],
        color: "#8b5cf6",
    },
    Program {
        name: "Panther Lake",
        skus: &["Panther Lake P", "Panther Lake U"],
        color: "#f59e0b",
    },
    Program {
        name: "Battrel Lake",
        skus: &["Battrel Lake S", "Battrel Lake P"],
        color: "#ef4444",
    },
];

/// Bi-weekly build snapshots, newest first. Shared across all SKUs.
pub const BUILDS: &[&str] = &[
    "Build 2025.03 (Aug 18)",
    "Build 2025.02 (Aug 4)",
    "Build 2025.01 (Jul 21)",
    "Build 2024.26 (Jul 7)",
    "Build 2024.25 (Jun 23)",
    "Build 2024.24 (Jun 9)",
];

/// The fixed 34-game benchmark suite.
pub const GAMES: &[&str] = &[
    "Cyberpunk 2077",
    "Call of Duty: MW III",
    "Assassin's Creed Mirage",
    "Baldur's Gate 3",
    "Starfield",
    "Forza Horizon 5",
    "Red Dead Redemption 2",
    "The Witcher 3",
    "Horizon Zero Dawn",
    "Control",
    "Metro Exodus",
    "Shadow of the Tomb Raider",
    "Total War: Warhammer III",
    "F1 23",
    "Far Cry 6",
    "Resident Evil 4",
    "Spider-Man Remastered",
    "God of War",
    "Death Stranding",
    "Hitman 3",
    "Watch Dogs: Legion",
    "Dirt 5",
    "Borderlands 3",
    "The Division 2",
    "Gears 5",
    "Strange Brigade",
    "Serious Sam 4",
    "World War Z",
    "Rainbow Six Siege",
    "Overwatch 2",
    "Valorant",
    "Counter-Strike 2",
    "Dota 2",
    "League of Legends",
];

/// Trend window, newest first. Generators reverse this so charts read
/// oldest-to-newest.
pub const WEEKS: &[&str] = &[
    "Week 33 (Aug 18)",
    "Week 31 (Aug 4)",
    "Week 29 (Jul 21)",
    "Week 27 (Jul 7)",
    "Week 25 (Jun 23)",
    "Week 23 (Jun 9)",
    "Week 21 (May 26)",
    "Week 19 (May 12)",
    "Week 17 (Apr 28)",
    "Week 15 (Apr 14)",
    "Week 13 (Mar 31)",
    "Week 11 (Mar 17)",
];

/// Per-chart SKU colors, cycled by SKU index within a program.
pub const SKU_PALETTE: &[&str] = &[
    "#3b82f6", "#10b981", "#8b5cf6", "#f59e0b", "#ef4444", "#06b6d4",
];

/// All results are (nominally) captured under these fixed run conditions.
pub const RESOLUTION: &str = "1080p";
pub const SETTINGS: &str = "High";

/// Case-sensitive lookup. Unknown names are a caller concern; they get
/// `None` and should render an empty state rather than fault.
pub fn program(name: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.name == name)
}

pub fn is_known_build(label: &str) -> bool {
    BUILDS.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_has_34_games() {
        assert_eq!(GAMES.len(), 34);
    }

    #[test]
    fn twelve_week_window() {
        assert_eq!(WEEKS.len(), 12);
    }

    #[test]
    fn every_sku_belongs_to_one_program() {
        for p in PROGRAMS {
            for sku in p.skus {
                let owners = PROGRAMS
                    .iter()
                    .filter(|q| q.skus.contains(sku))
                    .count();
                assert_eq!(owners, 1, "{} owned by {} programs", sku, owners);
            }
        }
    }
}
