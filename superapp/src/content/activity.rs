//! # Activity Content
//!
//! Rewards summary and recent transactions.

use super::models::{PointsSummary, Symbol, Tint, TransactionItem};

pub fn points_summary() -> PointsSummary {
    PointsSummary {
        headline: "You have 1,349 points now",
        body: "Use them to redeem exclusive items!",
        call_to_action: "Explore GrabRewards",
    }
}

/// Most recent first
pub fn transactions() -> Vec<TransactionItem> {
    vec![
        TransactionItem {
            icon: Symbol::GCircle,
            tint: Tint::Green,
            title: "Sodexo (Online)",
            subtitle: "18 Jun 2025, 17:24",
            amount: "S$6.20",
            amount_tint: Tint::Black,
            cancelled: false,
        },
        TransactionItem {
            icon: Symbol::Car,
            tint: Tint::Green,
            title: "Golden Star Apartment - Pick Up/Drop Off Gate to Crescent Mall...",
            subtitle: "Booked by Hà Bảo Khanh\n17 Jun 2025, 19:23",
            amount: "30.000đ\n+4 points",
            amount_tint: Tint::Black,
            cancelled: false,
        },
        TransactionItem {
            icon: Symbol::GCircle,
            tint: Tint::Green,
            title: "Sodexo (Online)",
            subtitle: "17 Jun 2025, 17:25",
            amount: "S$6.20",
            amount_tint: Tint::Black,
            cancelled: false,
        },
        TransactionItem {
            icon: Symbol::PlusCircle,
            tint: Tint::Green,
            title: "Top-up to GrabPay Wallet",
            subtitle: "17 Jun 2025, 17:24",
            amount: "S$10.00",
            amount_tint: Tint::Green,
            cancelled: false,
        },
        TransactionItem {
            icon: Symbol::Car,
            tint: Tint::Green,
            title: "Pho Thin By Sol - 1 Pho Tieu Nam to Golden Star Apartment - Pick...",
            subtitle: "Booked by Hà Bảo Khanh\n17 Jun 2025, 11:26",
            amount: "31.000đ\n+4 points",
            amount_tint: Tint::Black,
            cancelled: false,
        },
        TransactionItem {
            icon: Symbol::Car,
            tint: Tint::Red,
            title: "Pho Thin By Sol - 1 Pho Tieu Nam to Golden Star Apartment - Pick Up/Drop...",
            subtitle: "Booked by Hà Bảo Khanh",
            amount: "",
            amount_tint: Tint::Black,
            cancelled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cancelled_row_has_empty_amount() {
        let rows = transactions();
        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.cancelled, row.amount.is_empty(), "row {:?}", row.title);
        }
    }

    #[test]
    fn test_ride_rows_carry_points_on_second_amount_line() {
        let rides: Vec<_> = transactions()
            .into_iter()
            .filter(|t| t.icon == Symbol::Car && !t.cancelled)
            .collect();
        assert_eq!(rides.len(), 2);
        for ride in rides {
            assert_eq!(ride.amount.lines().nth(1), Some("+4 points"));
        }
    }
}
