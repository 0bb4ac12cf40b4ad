//! # Search Content
//!
//! Literal content for the Search destination.

use super::models::{FilterTab, LocationItem, RecentChip, RecommendedPlace, Symbol, Tint};

/// Columns in the "Recent & popular" chip grid
pub const CHIP_COLUMNS: usize = 3;

/// Filter row. The first tab starts selected and nothing changes it.
pub fn filter_tabs() -> Vec<FilterTab> {
    vec![
        FilterTab { title: "All", icon: None, selected: true },
        FilterTab { title: "Transport", icon: Some(Symbol::Car), selected: false },
        FilterTab { title: "Food", icon: Some(Symbol::ForkKnife), selected: false },
    ]
}

pub fn saved_locations() -> Vec<LocationItem> {
    vec![
        LocationItem {
            icon: Symbol::House,
            tint: Tint::Green,
            title: "Home",
            subtitle: "10km • Basement Lobby, Tower 10 (Units 36-42), 10 Sims Dri...",
            recently_used: true,
        },
        LocationItem {
            icon: Symbol::Location,
            tint: Tint::Green,
            title: "Kick Off! (formerly Kovan Sports Centre)",
            subtitle: "13km • 60 Hougang Street 21, Singapore, 538738",
            recently_used: false,
        },
        LocationItem {
            icon: Symbol::Clock,
            tint: Tint::Black,
            title: "Terminal 3 Departure - Changi Airport",
            subtitle: "23km • 65 Airport Boulevard, Singapore, 819663",
            recently_used: true,
        },
    ]
}

/// Recent searches (clock, gray) interleaved with popular ones (arrow, orange)
pub fn recent_and_popular() -> Vec<RecentChip> {
    let recent = |label| RecentChip { icon: Symbol::Clock, label, tint: Tint::Gray };
    let popular = |label| RecentChip { icon: Symbol::ArrowUpRight, label, tint: Tint::Orange };

    vec![
        recent("terminal 3"),
        popular("mcdonald's"),
        recent("changi"),
        popular("cake"),
        recent("bouna vista"),
        popular("chagee"),
    ]
}

pub fn recommended_places() -> Vec<RecommendedPlace> {
    vec![
        RecommendedPlace {
            title: "Mr. Coconut - Connexis",
            distance: "1.0km",
            rating: "4.7",
            image_url: "https://images.unsplash.com/photo-1546173159-315724a31696?w=300&h=200&fit=crop",
            is_ad: false,
        },
        RecommendedPlace {
            title: "KOI Thé - Anchorpoint Sh...",
            distance: "1.4km",
            rating: "4.8",
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=200&fit=crop",
            is_ad: false,
        },
        RecommendedPlace {
            title: "Straits Club Alexandra - Buki...",
            distance: "1.4km",
            rating: "4.1",
            image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=200&fit=crop",
            is_ad: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_filter_tab_is_selected() {
        let tabs = filter_tabs();
        assert_eq!(tabs.len(), 3);
        assert!(tabs[0].selected);
        assert_eq!(tabs.iter().filter(|t| t.selected).count(), 1);
        assert!(tabs[0].icon.is_none());
    }

    #[test]
    fn test_recent_and_popular_alternate() {
        let chips = recent_and_popular();
        assert_eq!(chips.len(), 6);
        for (i, chip) in chips.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(chip.icon, Symbol::Clock);
                assert_eq!(chip.tint, Tint::Gray);
            } else {
                assert_eq!(chip.icon, Symbol::ArrowUpRight);
                assert_eq!(chip.tint, Tint::Orange);
            }
        }
    }

    #[test]
    fn test_only_last_recommendation_is_an_ad() {
        let places = recommended_places();
        assert_eq!(places.iter().filter(|p| p.is_ad).count(), 1);
        assert!(places[2].is_ad);
    }
}
