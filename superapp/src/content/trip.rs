//! In-progress trip shown by the accessory bar.

use super::models::TripStatus;

pub fn current_trip() -> TripStatus {
    TripStatus {
        artwork_url: "https://photon-s3.grab.com/redbull/beta/Premium.png",
        headline: "You are on the way",
        destination: "Lobby, Grab One North",
        arrival_time: "5:32 PM",
        time_left: "7 mins left",
    }
}
