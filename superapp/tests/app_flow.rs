//! End-to-end flows through the public `App` API: navigation, search text,
//! image loading through an injected fetcher, and the static catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use superapp::app::{AccessoryPlacement, App, ImageState, Tab};
use superapp::content::{activity, home, search, trip};
use superapp::core::error::ImageFetchError;
use superapp::core::service::ImageFetcher;
use superapp::ui::theme::ThemeConfig;
use superapp::ui::widgets::recommended_card::meta_line;
use superapp::ui::widgets::transaction_row::{TransactionRow, CANCELLED_LABEL};

/// Serves a tiny payload for every URL except those containing "missing"
struct FakeFetcher {
    calls: AtomicUsize,
}

#[async_trait]
impl ImageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains("missing") {
            Err(ImageFetchError::Status(404))
        } else {
            Ok(vec![0x89, b'P', b'N', b'G'])
        }
    }
}

fn app_with_fake() -> (App, Arc<FakeFetcher>) {
    let fetcher = Arc::new(FakeFetcher { calls: AtomicUsize::new(0) });
    (App::with_fetcher(ThemeConfig::default(), fetcher.clone()), fetcher)
}

/// Tick until `url` leaves the pending state or the deadline passes
fn wait_for_image(app: &mut App, url: &str) -> Option<ImageState> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        app.on_tick();
        match app.state.read().image(url) {
            Some(ImageState::Pending) | None => {}
            Some(settled) => return Some(settled.clone()),
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    None
}

#[test]
fn test_search_text_survives_a_round_trip_through_every_tab() {
    let (mut app, _) = app_with_fake();
    app.handle_tab_change(Tab::Search);
    app.handle_search_query_change("chagee".to_string());

    for _ in 0..Tab::all().len() {
        app.next_tab();
    }

    let state = app.state.read();
    assert_eq!(state.current_tab, Tab::Search);
    assert_eq!(state.search_query, "chagee");
}

#[test]
fn test_scrolling_down_minimizes_and_top_restores() {
    let (mut app, _) = app_with_fake();
    app.handle_scroll(200.0, 1_000.0);
    assert!(app.state.read().tab_bar_minimized);

    app.handle_scroll(0.0, 1_000.0);
    assert!(!app.state.read().tab_bar_minimized);
}

/// One 430x700 frame through the real `App`: apply finished work, then draw
fn run_frame(ctx: &egui::Context, app: &mut App, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(430.0, 700.0))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        app.on_tick();
        superapp::ui::render(ctx, &mut *app);
    });
}

fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

#[test]
fn test_scrolling_home_to_the_end_keeps_bar_minimized() {
    let (mut app, _) = app_with_fake();
    let ctx = egui::Context::default();
    for _ in 0..3 {
        run_frame(&ctx, &mut app, Vec::new());
    }

    // Drag the content upward along the left margin, outside every widget
    let x = 4.0;
    for _ in 0..5 {
        let start = egui::pos2(x, 500.0);
        run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(start), primary(start, true)]);
        for step in 1..=9 {
            let pos = egui::pos2(x, 500.0 - 50.0 * step as f32);
            run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(pos)]);
        }
        run_frame(&ctx, &mut app, vec![primary(egui::pos2(x, 50.0), false)]);
    }

    // Let inertia settle and the collapsed bar resize the viewport
    for _ in 0..30 {
        run_frame(&ctx, &mut app, Vec::new());
    }

    let state = app.state.read();
    assert!(state.scroll_offsets.get(&Tab::Home).copied().unwrap_or(0.0) > 0.0);
    assert!(state.tab_bar_minimized);
}

#[test]
fn test_image_loads_once_and_becomes_ready() {
    let (mut app, fetcher) = app_with_fake();
    let url = trip::current_trip().artwork_url;

    app.request_image(url);
    app.request_image(url);

    match wait_for_image(&mut app, url) {
        Some(ImageState::Ready(bytes)) => assert_eq!(bytes.len(), 4),
        other => panic!("expected ready image, got {:?}", other),
    }
    assert!(app.state.read().needs_immediate_repaint);

    app.request_image(url);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_image_is_not_retried() {
    let (mut app, fetcher) = app_with_fake();
    let url = "https://example.invalid/missing.png";

    app.request_image(url);
    match wait_for_image(&mut app, url) {
        Some(ImageState::Failed(reason)) => assert!(reason.contains("404")),
        other => panic!("expected failed image, got {:?}", other),
    }

    app.request_image(url);
    app.on_tick();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert!(!app.state.read().has_pending_images());
}

#[test]
fn test_home_catalog_shape() {
    let categories = home::service_categories();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories.len() % home::CATEGORY_COLUMNS, 0);
    assert_eq!(home::balance_cards().len(), 2);
    assert!(!home::ad_banners().is_empty());
}

#[test]
fn test_recommended_ad_meta_line() {
    let places = search::recommended_places();
    let ad = places.iter().find(|p| p.is_ad).expect("one ad in recommendations");
    assert_eq!(meta_line(ad), "Ad • 1.4km • ★ 4.1");
    assert_eq!(meta_line(&places[0]), "1.0km • ★ 4.7");
}

#[test]
fn test_cancelled_booking_has_status_and_no_amount() {
    let items = activity::transactions();
    let cancelled = items.iter().find(|t| t.cancelled).expect("a cancelled booking");
    let row = TransactionRow::from_item(cancelled);

    assert_eq!(row.status_label, Some(CANCELLED_LABEL));
    assert!(!row.shows_amount());
}

#[test]
fn test_accessory_placement_follows_bar_and_width() {
    assert_eq!(AccessoryPlacement::resolve(false, 430.0), AccessoryPlacement::Expanded);
    assert_eq!(AccessoryPlacement::resolve(true, 430.0), AccessoryPlacement::Compact);
    assert_eq!(AccessoryPlacement::resolve(false, 360.0), AccessoryPlacement::Compact);
    assert!(!AccessoryPlacement::Compact.shows_eta());
}
