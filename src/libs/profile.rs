//! Static metadata for each LibreOffice application.

use serde::Serialize;

/// Key of the fallback profile, used when the title names no known application.
pub const DEFAULT_APP_KEY: &str = "soffice.bin";

/// Display metadata for one LibreOffice application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppProfile {
    pub key: &'static str,
    pub display_name: &'static str,
    pub icon_key: &'static str,
    pub description: &'static str,
}

pub const WRITER: AppProfile = AppProfile {
    key: "swriter",
    display_name: "Writer",
    icon_key: "writer",
    description: "Text Document",
};

pub const CALC: AppProfile = AppProfile {
    key: "scalc",
    display_name: "Calc",
    icon_key: "calc",
    description: "Spreadsheet",
};

pub const IMPRESS: AppProfile = AppProfile {
    key: "simpress",
    display_name: "Impress",
    icon_key: "impress",
    description: "Presentation",
};

pub const DRAW: AppProfile = AppProfile {
    key: "sdraw",
    display_name: "Draw",
    icon_key: "draw",
    description: "Drawing",
};

pub const BASE: AppProfile = AppProfile {
    key: "sbase",
    display_name: "Base",
    icon_key: "base",
    description: "Database",
};

pub const MATH: AppProfile = AppProfile {
    key: "smath",
    display_name: "Math",
    icon_key: "math",
    description: "Formula",
};

pub const LIBREOFFICE: AppProfile = AppProfile {
    key: DEFAULT_APP_KEY,
    display_name: "LibreOffice",
    icon_key: "libreoffice",
    description: "LibreOffice",
};

static PROFILES: [AppProfile; 7] = [WRITER, CALC, IMPRESS, DRAW, BASE, MATH, LIBREOFFICE];

impl AppProfile {
    /// Looks up a profile by key, falling back to the generic LibreOffice entry.
    pub fn lookup(key: &str) -> &'static AppProfile {
        PROFILES.iter().find(|profile| profile.key == key).unwrap_or(&LIBREOFFICE)
    }

    /// All known profiles, default last.
    pub fn all() -> &'static [AppProfile] {
        &PROFILES
    }

    /// Text for the large image tooltip, e.g. "LibreOffice Writer".
    pub fn full_name(&self) -> String {
        format!("LibreOffice {}", self.display_name)
    }
}
