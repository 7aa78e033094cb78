//! Capability data carried by extension data types
//!
//! One struct per capability. Concrete meta types embed the structs for the
//! capabilities they implement and expose them through `ItemMeta` accessors.

use std::fmt;
use std::str::FromStr;

use crate::config::{ConfigNode, ConfigSection};
use crate::inventory::Inventory;
use crate::item::{normalize_name, ItemStack, Symbol};

/// An RGB color, written as `"r, g, b"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn from_rgb_int(value: u32) -> Self {
        Color {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ();

    /// Accepts `"r, g, b"`, `"#RRGGBB"` or a packed decimal RGB integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return u32::from_str_radix(hex, 16)
                .map(Color::from_rgb_int)
                .map_err(|_| ());
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [r, g, b] => Ok(Color {
                r: r.parse().map_err(|_| ())?,
                g: g.parse().map_err(|_| ())?,
                b: b.parse().map_err(|_| ())?,
            }),
            [packed] => packed.parse::<u32>().map(Color::from_rgb_int).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

/// The 16 dye colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    const NAMES: [(DyeColor, &'static str); 16] = [
        (DyeColor::White, "WHITE"),
        (DyeColor::Orange, "ORANGE"),
        (DyeColor::Magenta, "MAGENTA"),
        (DyeColor::LightBlue, "LIGHT_BLUE"),
        (DyeColor::Yellow, "YELLOW"),
        (DyeColor::Lime, "LIME"),
        (DyeColor::Pink, "PINK"),
        (DyeColor::Gray, "GRAY"),
        (DyeColor::LightGray, "LIGHT_GRAY"),
        (DyeColor::Cyan, "CYAN"),
        (DyeColor::Purple, "PURPLE"),
        (DyeColor::Blue, "BLUE"),
        (DyeColor::Brown, "BROWN"),
        (DyeColor::Green, "GREEN"),
        (DyeColor::Red, "RED"),
        (DyeColor::Black, "BLACK"),
    ];

    pub fn name(self) -> &'static str {
        // NAMES is in declaration order
        Self::NAMES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = match normalize_name(name).as_str() {
            "SILVER" => "LIGHT_GRAY".to_string(),
            other => other.to_string(),
        };
        Self::NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(color, _)| *color)
    }
}

/// One active potion effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionEffect {
    pub kind: Symbol,
    /// Duration in ticks
    pub duration: i32,
    pub amplifier: u8,
}

impl PotionEffect {
    /// Two minutes, the duration used when a config line leaves it out
    pub const DEFAULT_DURATION: i32 = 2400;

    pub fn new(kind: Symbol, duration: i32, amplifier: u8) -> Self {
        PotionEffect {
            kind,
            duration,
            amplifier,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PotionData {
    pub base_type: Option<Symbol>,
    pub effects: Vec<PotionEffect>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StewData {
    pub effects: Vec<PotionEffect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerPattern {
    pub pattern: Symbol,
    pub color: DyeColor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerData {
    pub patterns: Vec<BannerPattern>,
}

/// Shape of a firework explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FireworkType {
    #[default]
    Ball,
    BallLarge,
    Star,
    Burst,
    Creeper,
}

impl FireworkType {
    pub fn name(self) -> &'static str {
        match self {
            FireworkType::Ball => "BALL",
            FireworkType::BallLarge => "BALL_LARGE",
            FireworkType::Star => "STAR",
            FireworkType::Burst => "BURST",
            FireworkType::Creeper => "CREEPER",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match normalize_name(name).as_str() {
            "BALL" | "SMALL_BALL" => FireworkType::Ball,
            "BALL_LARGE" | "LARGE_BALL" => FireworkType::BallLarge,
            "STAR" => FireworkType::Star,
            "BURST" => FireworkType::Burst,
            "CREEPER" => FireworkType::Creeper,
            _ => return None,
        };
        Some(kind)
    }
}

/// One firework explosion layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireworkEffect {
    pub kind: FireworkType,
    pub flicker: bool,
    pub trail: bool,
    pub colors: Vec<Color>,
    pub fade_colors: Vec<Color>,
}

impl ConfigSection for FireworkEffect {
    fn write_section(&self, node: &mut ConfigNode) {
        node.set("type", self.kind.name());
        node.set("flicker", self.flicker);
        node.set("trail", self.trail);

        let colors = node.section_mut("colors");
        colors.set("base", color_lines(&self.colors));
        colors.set("fade", color_lines(&self.fade_colors));
    }

    /// Unknown types fall back to a small ball; bad colors are dropped
    fn read_section(node: &ConfigNode) -> Option<Self> {
        let kind = node
            .get_str("type")
            .and_then(|t| FireworkType::from_name(&t))
            .unwrap_or_default();

        let (colors, fade_colors) = match node.section("colors") {
            Some(section) => (
                parse_colors(section.get_string_list("base")),
                parse_colors(section.get_string_list("fade")),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Some(FireworkEffect {
            kind,
            flicker: node.get_bool("flicker").unwrap_or(false),
            trail: node.get_bool("trail").unwrap_or(false),
            colors,
            fade_colors,
        })
    }
}

fn color_lines(colors: &[Color]) -> Vec<String> {
    colors.iter().map(Color::to_string).collect()
}

fn parse_colors(lines: Option<Vec<String>>) -> Vec<Color> {
    lines
        .unwrap_or_default()
        .iter()
        .filter_map(|line| line.parse().ok())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireworkData {
    /// Flight duration, 0-127
    pub power: u8,
    pub effects: Vec<FireworkEffect>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeData {
    pub effect: Option<FireworkEffect>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WritableBookData {
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookGeneration {
    Original,
    CopyOfOriginal,
    CopyOfCopy,
    Tattered,
}

impl BookGeneration {
    pub fn name(self) -> &'static str {
        match self {
            BookGeneration::Original => "ORIGINAL",
            BookGeneration::CopyOfOriginal => "COPY_OF_ORIGINAL",
            BookGeneration::CopyOfCopy => "COPY_OF_COPY",
            BookGeneration::Tattered => "TATTERED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let generation = match normalize_name(name).as_str() {
            "ORIGINAL" => BookGeneration::Original,
            "COPY_OF_ORIGINAL" => BookGeneration::CopyOfOriginal,
            "COPY_OF_COPY" => BookGeneration::CopyOfCopy,
            "TATTERED" => BookGeneration::Tattered,
            _ => return None,
        };
        Some(generation)
    }
}

/// Title, author and generation of a signed book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookData {
    pub title: Option<String>,
    pub author: Option<String>,
    pub generation: Option<BookGeneration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorTrim {
    pub material: Symbol,
    pub pattern: Symbol,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArmorData {
    pub trim: Option<ArmorTrim>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeatherArmorData {
    pub color: Option<Color>,
}

/// A world position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub world: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ConfigSection for Location {
    fn write_section(&self, node: &mut ConfigNode) {
        if let Some(world) = &self.world {
            node.set("world", world.as_str());
        }
        node.set("x", self.x);
        node.set("y", self.y);
        node.set("z", self.z);
    }

    fn read_section(node: &ConfigNode) -> Option<Self> {
        Some(Location {
            world: node.get_str("world"),
            x: node.get_float("x")?,
            y: node.get_float("y")?,
            z: node.get_float("z")?,
        })
    }
}

/// Zoom level of a map view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapScale {
    #[default]
    Closest,
    Close,
    Normal,
    Far,
    Farthest,
}

impl MapScale {
    pub fn name(self) -> &'static str {
        match self {
            MapScale::Closest => "CLOSEST",
            MapScale::Close => "CLOSE",
            MapScale::Normal => "NORMAL",
            MapScale::Far => "FAR",
            MapScale::Farthest => "FARTHEST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let scale = match normalize_name(name).as_str() {
            "CLOSEST" => MapScale::Closest,
            "CLOSE" => MapScale::Close,
            "NORMAL" => MapScale::Normal,
            "FAR" => MapScale::Far,
            "FARTHEST" => MapScale::Farthest,
            _ => return None,
        };
        Some(scale)
    }
}

/// The rendered area a filled map is bound to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapView {
    pub id: i32,
    pub scale: MapScale,
    pub world: Option<String>,
    pub center_x: i32,
    pub center_z: i32,
    pub locked: bool,
    pub tracking_position: bool,
    pub unlimited_tracking: bool,
}

impl ConfigSection for MapView {
    fn write_section(&self, node: &mut ConfigNode) {
        node.set("id", self.id);
        node.set("scale", self.scale.name());
        if let Some(world) = &self.world {
            node.set("world", world.as_str());
        }

        let center = node.section_mut("center");
        center.set("x", self.center_x);
        center.set("z", self.center_z);

        node.set("locked", self.locked);
        node.set("tracking-position", self.tracking_position);
        node.set("unlimited-tracking", self.unlimited_tracking);
    }

    fn read_section(node: &ConfigNode) -> Option<Self> {
        let center = node.section("center");
        Some(MapView {
            id: i32::try_from(node.get_int("id")?).ok()?,
            scale: node
                .get_str("scale")
                .and_then(|s| MapScale::from_name(&s))
                .unwrap_or_default(),
            world: node.get_str("world"),
            center_x: center
                .and_then(|c| c.get_int("x"))
                .and_then(|x| i32::try_from(x).ok())
                .unwrap_or(0),
            center_z: center
                .and_then(|c| c.get_int("z"))
                .and_then(|z| i32::try_from(z).ok())
                .unwrap_or(0),
            locked: node.get_bool("locked").unwrap_or(false),
            tracking_position: node.get_bool("tracking-position").unwrap_or(false),
            unlimited_tracking: node.get_bool("unlimited-tracking").unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapData {
    pub scaling: bool,
    pub location_name: Option<String>,
    pub color: Option<Color>,
    pub view: Option<MapView>,
}

/// Lodestone binding of a compass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompassData {
    pub tracked: bool,
    pub lodestone: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnEggData {
    pub creature: Option<Symbol>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkullData {
    pub owner: Option<String>,
}

/// Block state captured inside a block item
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BlockState {
    #[default]
    Empty,
    Spawner {
        spawned_type: Option<Symbol>,
    },
    ShulkerBox(Inventory),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossbowData {
    pub projectiles: Vec<ItemStack>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxolotlData {
    pub variant: Option<Symbol>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentData {
    pub instrument: Option<Symbol>,
}
