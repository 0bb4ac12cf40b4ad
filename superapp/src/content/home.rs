//! # Home Content
//!
//! Literal content for the Home (and Finance) destination.

use super::models::{
    AdBanner, BalanceCard, ChallengeCard, DiscoverCard, ServiceCategory, Shade, Symbol, Tint,
};

/// Columns in the service category grid
pub const CATEGORY_COLUMNS: usize = 4;

const EXPRESS_TILE: &str = "https://icons.stg-myteksi.com/tiles/v1/express/img_express_4x.png";

/// Service tiles, in grid order
pub fn service_categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory {
            icon_url: "https://icons.grab.com/tiles/car/img_car_4x.png",
            label: "Transport",
        },
        ServiceCategory {
            icon_url: "https://icons.stg-myteksi.com/services/v1/food/img_food_4x.png",
            label: "Food",
        },
        ServiceCategory {
            icon_url: "https://assets-mobile.grab.com/cx/tiles/food/spn-icon/tile_food@4x.png",
            label: "Dine Out",
        },
        ServiceCategory {
            icon_url: "https://icons.stg-myteksi.com/tiles/groceries/img_mart_100k_4x.png",
            label: "Mart",
        },
        ServiceCategory { icon_url: EXPRESS_TILE, label: "Express" },
        ServiceCategory { icon_url: EXPRESS_TILE, label: "Chope" },
        ServiceCategory { icon_url: EXPRESS_TILE, label: "Shopping" },
        ServiceCategory { icon_url: EXPRESS_TILE, label: "All" },
    ]
}

pub fn balance_cards() -> Vec<BalanceCard> {
    vec![
        BalanceCard {
            title: "Balance",
            amount: "S$ 2.98",
            icon: Symbol::DollarCircle,
            tint: Tint::Green,
        },
        BalanceCard {
            title: "GrabRewards",
            amount: "1,337",
            icon: Symbol::Crown,
            tint: Tint::Yellow,
        },
    ]
}

pub fn ad_banners() -> Vec<AdBanner> {
    vec![
        AdBanner {
            title: "Singtel CIS: Up to 25% OFF 5G+ plans",
            subtitle: "Ad • Singtel CIS",
            image_url: "https://d2ck5hmeaxjxox.cloudfront.net/images/522008597018717514/1IjMzETN0UTO5YzM2cjNzMTM?Expires=1752208525&Signature=kW2n60T4i1~f6ys-QKP1ZbqXAGMo-4y6iFA5LJDWCAGEhz9~SUPosJmQX2hOjudaICxcjf3-4xTsevPghheiq9zM8-sJCe-SJ0UcGegiRhpIX43s2ycXip90UN51--l3JqGo7PX8FkdLw56sTWKzg9u7H-PZNEjqkqA7xjxol7HeRES4KTWEtVG6j1ZIlTZDvGudLtKHVgtKlFnE7DJXXEQ9Z~dplknD1au6uP7TSluaJg~9IOvM01t1E~6IBbTX7zvQnVNAAorCWDwhjAkPxioayt3oQ90MZWU8fNElsimuo6CGAPi-DNkMtPLHuNXRc8bU77VUzD0mh4BayEoOvg__&Key-Pair-Id=K2MGLN1GI3325M",
        },
        AdBanner {
            title: "Priv",
            subtitle: "Ad • ",
            image_url: "https://d2ck5hmeaxjxox.cloudfront.net/images/525808709792701663/wcTOyMDM1UDN5IzN3YDN3QTM?Expires=1760428816&Signature=bwKAS5fMChBO1m0jwY7CPOH1v8yaDonALcy1MXsAUlYEphoK8jbpOEZsy7dfjMXYRvS5nk9KBjs6purRAu3ZPFB7KpWjeyzQLq6AGGBOjsnxuNUJricymvfJ2dLGyu3SaVo~bZ4vpJ0SoyV-iLx7XnxPlEbHESsrD0t8-TNJ3oGL4vVvZceYNrc3SYGYG8l4FRXSBhT3ZXeVpYQP2XeT2wSHMVib9j~kt2X-vWR3fosSrGPghxpLD~9kveRN4FIrPzawK7EVvM1~qRIe-K8I7xCZs1HdjviwJbrygr6Styp4uGgWhQ99l9BE6~zZn4yJPBZ707J9zw3iLGVl0fScmQ__&Key-Pair-Id=K2MGLN1GI3325M",
        },
    ]
}

pub fn challenge() -> ChallengeCard {
    ChallengeCard {
        title: "Win $10 OFF next Thurs transaction!",
        deadline: "Ends on 30 Jun 2025",
        call_to_action: "Accept this challenge",
        badge: Symbol::GCircle,
    }
}

pub fn discover_cards() -> Vec<DiscoverCard> {
    vec![
        DiscoverCard {
            title: "Dyson ad | test",
            subtitle: "[Atlas] Grab",
            description: "[Atlas] Atlas\nDyson ad | test",
            image_url: Some("https://d2ck5hmeaxjxox.cloudfront.net/images/522008597018717514/0ADN5MTO5MjMxAzN0UDO2QTM?Expires=1760063423&Signature=gT4Y6dicQB609v21drRgm2NXbRMVMzDcvJ0giGSj615C9u2Svg6JFy~2Z5ppjJ9oeTpIgONHyidtbA16nq8VGGLVVZkVnSciw5IPwmchkdIs2afxrDKD4rjctzwjjbsmFJfRv69-QequcKQqhXVzTSCSGQnwP-4~icEcRd4b~Krmas7Nj7UkmBwIDx1KgqcaRSIhVVwWUDmYRLfMjXJOY3yJA0zQHgBwJgxvCbiptJTxwOg-NvIRljPDN46DN3o-ams4A~Ft7CmFEFdoSIl1xG-n8L0YL-OD-IPqLe9qwc1ecp80wh5cTSwQUPHjJGMotTqJF3WUaRUbJA6BZHORFA__&Key-Pair-Id=K2MGLN1GI3325M"),
            background: Shade::faded(Tint::Gray, 0.1),
            text: Tint::White,
        },
        DiscoverCard {
            title: "Test mode: GAM\nDiskon tiap pesen",
            subtitle: "Grab ID",
            description: "",
            image_url: Some("https://d3vpva6y8kidud.cloudfront.net/thumbnails/5UjNxcDOxETO3UTO4cDNwMTM/5MTN0kTN3EDO2kjMwgDNwMTM.webp?Expires=1753535700&Signature=gfbI9XksF0xM5YMt-xzDtH9iq-ZTh1zmYuRKOniZ5Sg84DMGXqZuHWsQfdPSNpWaWtj3TX7J6ZXMcejBMqsl3SIvGtXhBCMOBQNQJMkInGO2nYROq1C-cE79632mPHVKS7yl1wr9YNhy2dXFzr8wrevVxEBx4K1s6KdVM3aTLgMXd-CyTQzCzwYDQ76vvEb9699AzeRgMnaKbXh-LbFqIS9axEdHf61PLxv-at8Eb5mN-XEpHbrHWNV6SuObnX4e~~aM6IhZb7i6q-SYLzF7VbMPV-EqqwWarOYx63pFPPaIbrCLVninc3fip5Ierntg7sMONryd2vVp1~UyNwbXoQ__&Key-Pair-Id=KW6EOI5GKLCR7"),
            background: Shade::solid(Tint::Black),
            text: Tint::White,
        },
        DiscoverCard {
            title: "AUTO\neo_Ad",
            subtitle: "ByGrab",
            description: "",
            image_url: Some("https://d2ck5hmeaxjxox.cloudfront.net/thumbnails/0ADM3ETO5gzN4UDO2UDO2QTM/0IzMxAzNxkTN0ATO2UDO2QTM.webp?Expires=1760064737&Signature=c73mIBOkqKjF7ywDeieevNy4OFJcX5YRU-wQF6zcAxVREjpcWyJIGjuXNRZ1~dVHZdA2dctqKxg4pqOWE3ETbMj3ETI8A~jgfrdibaZ2ELi-UtfoRlXc9ITJWFdBskzTMG68oAJS0a11J9gwgdRorKUkUlI~5ubShBwweNHF0yt~5JSHqu27l1Pd4k9k6PvHY901QKTcjXzpMZODK7I8oJYl0FaaicDNfGwBf0FHFPIfpBjUBbMGAR9QITY7D6TGBxVn7OR~BS30wwkoKY30-VbZzbovF2heLsyyWKKGjGqmiQDMkBiOECCvmKBZ0MakGI-fUyqlwvxbS6gIIJ02TQ__&Key-Pair-Id=K2MGLN1GI3325M"),
            background: Shade::faded(Tint::Orange, 0.1),
            text: Tint::White,
        },
    ]
}
