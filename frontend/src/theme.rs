// Design tokens for the studio chrome. The preview itself is styled only by
// the typography state.

// Spacing
pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_64: u32 = 64;

// Font sizes
pub const FONT_SIZE_10: u32 = 10;
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_30: u32 = 30;

// Corner radii
pub const RADIUS_8: u32 = 8;
pub const RADIUS_12: u32 = 12;
pub const RADIUS_16: u32 = 16;
pub const RADIUS_40: u32 = 40;

// Colors
pub const PRIMARY_COLOR: &str = "#6b8ead";
pub const PAGE_BACKGROUND: &str = "#f8fafc";
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_MUTED: &str = "#f1f5f9";
pub const BORDER_COLOR: &str = "#e2e8f0";
pub const TEXT_STRONG: &str = "#000000";
pub const TEXT_DEFAULT: &str = "#0f172a";
pub const TEXT_SECONDARY: &str = "#64748b";
pub const TEXT_MUTED: &str = "#94a3b8";
pub const TEXT_ON_PRIMARY: &str = "#ffffff";
pub const SUCCESS_ACCENT: &str = "#4ade80";
pub const ERROR_BACKGROUND: &str = "#b91c1c";
pub const OVERLAY_BACKDROP: &str = "rgba(15, 23, 42, 0.5)";

// Monospace stack for value readouts
pub const MONO_FAMILY: [&str; 3] = ["ui-monospace", "SFMono-Regular", "Menlo"];
