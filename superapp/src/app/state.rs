//! # Application State Types
//!
//! View-local state of the shell: selected tab, search text, tab bar
//! minimization, scroll bookkeeping, the remote image cache and settings.
//! Everything else on screen is static content.

use std::collections::HashMap;
use std::sync::Arc;

use crate::content::Symbol;

/// Top-level destinations, in tab bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Service grid, balances, promotions
    Home,
    /// Placeholder destination
    Discover,
    /// Rewards summary and recent transactions
    Activity,
    /// Wired to the Home content
    Finance,
    /// Ride booking, recent queries, recommendations
    Search,
}

impl Tab {
    /// Get all tabs in bar and keyboard navigation order
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Discover, Tab::Activity, Tab::Finance, Tab::Search]
    }

    /// Label under the tab glyph
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Discover => "Discover",
            Tab::Activity => "Activity",
            Tab::Finance => "Finance",
            Tab::Search => "Search",
        }
    }

    pub fn glyph(&self) -> Symbol {
        match self {
            Tab::Home => Symbol::House,
            Tab::Discover => Symbol::Compass,
            Tab::Activity => Symbol::ListBullet,
            Tab::Finance => Symbol::DollarCircle,
            Tab::Search => Symbol::MagnifyingGlass,
        }
    }

    fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// Following tab, wrapping after the last
    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    /// Preceding tab, wrapping before the first
    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// How much room the bottom accessory has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryPlacement {
    /// Full strip above the tab bar, ETA column visible
    Expanded,
    /// Squeezed next to a minimized tab bar or in a narrow window
    Compact,
}

impl AccessoryPlacement {
    /// Windows narrower than this get the compact accessory
    pub const COMPACT_BREAKPOINT: f32 = 420.0;

    /// Resolve the placement for the current frame.
    pub fn resolve(tab_bar_minimized: bool, available_width: f32) -> Self {
        if tab_bar_minimized || available_width < Self::COMPACT_BREAKPOINT {
            AccessoryPlacement::Compact
        } else {
            AccessoryPlacement::Expanded
        }
    }

    /// Whether the arrival time / time-left column is drawn
    pub fn shows_eta(&self) -> bool {
        matches!(self, AccessoryPlacement::Expanded)
    }
}

/// Load state of one remote image URL
#[derive(Debug, Clone)]
pub enum ImageState {
    /// Fetch in flight
    Pending,
    /// Encoded bytes, decoded lazily by the egui image loaders
    Ready(Arc<[u8]>),
    /// Fetch failed; the placeholder stays and the URL is not retried
    Failed(String),
}

impl ImageState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ImageState::Pending)
    }
}

/// Settings state for theme configuration
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Current theme configuration
    pub theme_config: crate::ui::theme::ThemeConfig,
    /// Path the config was loaded from
    pub config_path: String,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme_config: crate::ui::theme::ThemeConfig::default(),
            config_path: crate::app::handlers::settings::get_config_path()
                .to_string_lossy()
                .to_string(),
        }
    }
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Visible destination
    pub current_tab: Tab,
    /// Search text, kept across tab switches
    pub search_query: String,
    /// Tab bar collapsed to the selected glyph after scrolling down
    pub tab_bar_minimized: bool,
    /// Last vertical scroll offset seen per destination
    pub scroll_offsets: HashMap<Tab, f32>,
    /// Remote image cache keyed by URL
    pub images: HashMap<String, ImageState>,
    /// Settings state (theme configuration)
    pub settings: SettingsState,
    /// Set when async results arrived and the UI should redraw now
    pub needs_immediate_repaint: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Home,
            search_query: String::new(),
            tab_bar_minimized: false,
            scroll_offsets: HashMap::new(),
            images: HashMap::new(),
            settings: SettingsState::default(),
            needs_immediate_repaint: false,
        }
    }
}

impl AppState {
    /// Look up an image without cloning the bytes
    pub fn image(&self, url: &str) -> Option<&ImageState> {
        self.images.get(url)
    }

    /// True while any fetch is still in flight
    pub fn has_pending_images(&self) -> bool {
        self.images.values().any(ImageState::is_pending)
    }
}
