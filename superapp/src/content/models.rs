//! # Display Models
//!
//! Immutable, display-only values handed to the presentational widgets.
//!
//! None of these types carry identity or mutate after construction: a render
//! pass builds them from the literal lists in the sibling modules, draws them
//! and drops them. Colors and icons are expressed as renderer-independent
//! tokens ([`Tint`], [`Shade`], [`Symbol`]) and resolved by `ui::theme` and
//! `ui::widgets::icons`.

/// Renderer-independent color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Black,
    Gray,
    White,
}

/// A tint with an opacity, used for card and badge backgrounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub tint: Tint,
    /// 0.0 (transparent) ..= 1.0 (opaque)
    pub opacity: f32,
}

impl Shade {
    /// Fully opaque shade
    pub const fn solid(tint: Tint) -> Self {
        Self { tint, opacity: 1.0 }
    }

    /// Translucent shade
    pub const fn faded(tint: Tint, opacity: f32) -> Self {
        Self { tint, opacity }
    }
}

/// Symbolic icon names. Mapped to glyphs by `ui::widgets::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    House,
    Compass,
    ListBullet,
    DollarCircle,
    MagnifyingGlass,
    Crown,
    ArrowRightCircle,
    ArrowLeft,
    ArrowUpRight,
    ChevronDown,
    Barcode,
    Person,
    Mic,
    Gift,
    Star,
    Car,
    ForkKnife,
    Location,
    Clock,
    PlusCircle,
    GCircle,
}

/// Tile in the Home service grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub icon_url: &'static str,
    pub label: &'static str,
}

/// Wallet / rewards summary card on Home.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCard {
    pub title: &'static str,
    /// Pre-formatted, e.g. `S$ 2.98`
    pub amount: &'static str,
    pub icon: Symbol,
    pub tint: Tint,
}

/// Promotional banner in the "Shop now" carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct AdBanner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_url: &'static str,
}

/// Challenge teaser card.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeCard {
    pub title: &'static str,
    pub deadline: &'static str,
    pub call_to_action: &'static str,
    pub badge: Symbol,
}

/// Tall card in the "Discover things you'd love" carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// May be empty, in which case it is not rendered.
    pub description: &'static str,
    pub image_url: Option<&'static str>,
    pub background: Shade,
    pub text: Tint,
}

/// Single-select chip above the search results.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTab {
    pub title: &'static str,
    pub icon: Option<Symbol>,
    pub selected: bool,
}

/// Saved place row in "Book a ride".
#[derive(Debug, Clone, PartialEq)]
pub struct LocationItem {
    pub icon: Symbol,
    pub tint: Tint,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub recently_used: bool,
}

/// Query chip in "Recent & popular".
#[derive(Debug, Clone, PartialEq)]
pub struct RecentChip {
    pub icon: Symbol,
    pub label: &'static str,
    pub tint: Tint,
}

/// Horizontally scrolling place card in "Recommended".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedPlace {
    pub title: &'static str,
    pub distance: &'static str,
    pub rating: &'static str,
    pub image_url: &'static str,
    pub is_ad: bool,
}

/// Rewards summary at the top of Activity.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsSummary {
    pub headline: &'static str,
    pub body: &'static str,
    pub call_to_action: &'static str,
}

/// Row in the Activity transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionItem {
    pub icon: Symbol,
    pub tint: Tint,
    pub title: &'static str,
    /// `\n` separated lines
    pub subtitle: &'static str,
    /// `\n` separated lines; empty when there is nothing to show
    pub amount: &'static str,
    pub amount_tint: Tint,
    pub cancelled: bool,
}

/// In-progress trip shown by the accessory bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TripStatus {
    pub artwork_url: &'static str,
    pub headline: &'static str,
    pub destination: &'static str,
    pub arrival_time: &'static str,
    pub time_left: &'static str,
}
