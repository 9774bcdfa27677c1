use crate::api::PrizeInfo;
use crate::shared_wheel_game::{AngularShare, SegmentSpec, WheelError, WheelLayout};

pub const NOTHING_PRIZE_ID: &str = "NOTHING";
pub const NOTHING_PRIZE_NAME: &str = "Better Luck Next Time";

/// Stock value meaning the prize is never depleted.
pub const UNLIMITED_STOCK: i32 = -1;

/// Server-side prize definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrizeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub stock: i32,
    /// Weight for random selection; 0 means only reachable through a lock
    pub probability: u32,
    /// Can only be won when an admin locks it for the next spin
    pub is_triggered: bool,
}

impl PrizeConfig {
    pub fn is_limited(&self) -> bool {
        self.stock > 0
    }

    pub fn info(&self) -> PrizeInfo {
        PrizeInfo {
            id: self.id.to_string(),
            name: self.name.to_string(),
            stock: self.stock,
            probability: self.probability,
            is_triggered: self.is_triggered,
        }
    }
}

// Order is the wheel order, clockwise from 12 o'clock
pub const DEFAULT_PRIZES: [PrizeConfig; 6] = [
    PrizeConfig { id: "MK_DUCK", name: "MK Duck Card", stock: 5, probability: 0, is_triggered: true },
    PrizeConfig { id: "STARBUCKS", name: "Starbucks Gift Card", stock: 1, probability: 0, is_triggered: true },
    PrizeConfig { id: "DISCOUNT_10", name: "10% Discount", stock: UNLIMITED_STOCK, probability: 0, is_triggered: true },
    PrizeConfig { id: "DISCOUNT_05", name: "5% Discount", stock: UNLIMITED_STOCK, probability: 0, is_triggered: true },
    PrizeConfig { id: NOTHING_PRIZE_ID, name: NOTHING_PRIZE_NAME, stock: UNLIMITED_STOCK, probability: 50, is_triggered: false },
    PrizeConfig { id: "GIVE_IG", name: "Give IG", stock: UNLIMITED_STOCK, probability: 50, is_triggered: false },
];

/// How a prize is drawn on the wheel and in the result modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrizeStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

const DEFAULT_STYLE: PrizeStyle = PrizeStyle { label: "Prize", color: "#BDC3C7", emoji: "🎁" };

pub fn prize_style(id: &str) -> PrizeStyle {
    match id {
        "MK_DUCK" => PrizeStyle { label: "MK Card", color: "#FFD700", emoji: "🦆" },
        "STARBUCKS" => PrizeStyle { label: "Starbucks", color: "#00704A", emoji: "☕" },
        "DISCOUNT_10" => PrizeStyle { label: "10% Off", color: "#FF6B6B", emoji: "🎫" },
        "DISCOUNT_05" => PrizeStyle { label: "5% Off", color: "#4ECDC4", emoji: "🏷️" },
        NOTHING_PRIZE_ID => PrizeStyle { label: "Try Again", color: "#95A5A6", emoji: "😢" },
        "GIVE_IG" => PrizeStyle { label: "Give IG", color: "#E1306C", emoji: "📱" },
        _ => DEFAULT_STYLE,
    }
}

pub fn find_prize<'a>(prizes: &'a [PrizeConfig], id: &str) -> Option<&'a PrizeConfig> {
    prizes.iter().find(|prize| prize.id == id)
}

/// Display name for a prize id, or the id itself when it is not configured.
pub fn prize_name(prizes: &[PrizeConfig], id: &str) -> String {
    find_prize(prizes, id)
        .map(|prize| prize.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Equal-share wheel with one segment per prize, in table order.
pub fn wheel_layout_for(prizes: &[PrizeConfig]) -> Result<WheelLayout, WheelError> {
    let specs = prizes
        .iter()
        .map(|prize| {
            let style = prize_style(prize.id);
            SegmentSpec::new(prize.id, AngularShare::Equal)
                .label(style.label)
                .color(style.color)
        })
        .collect();

    let layout = WheelLayout::new(specs)?;
    if layout.position(NOTHING_PRIZE_ID).is_some() {
        layout.with_fallback(NOTHING_PRIZE_ID)
    } else {
        Ok(layout)
    }
}

pub fn default_wheel_layout() -> Result<WheelLayout, WheelError> {
    wheel_layout_for(&DEFAULT_PRIZES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_prize_table() {
        let layout = default_wheel_layout().unwrap();
        let ids: Vec<&str> = layout.segments().iter().map(|s| s.id.as_str()).collect();
        let prize_ids: Vec<&str> = DEFAULT_PRIZES.iter().map(|p| p.id).collect();
        assert_eq!(ids, prize_ids);
        assert_eq!(layout.fallback_segment().id, NOTHING_PRIZE_ID);
        assert!(layout.segments().iter().all(|s| (s.share_deg - 60.0).abs() < 1e-9));
    }

    #[test]
    fn test_every_server_prize_resolves_exactly() {
        let layout = default_wheel_layout().unwrap();
        for prize in &DEFAULT_PRIZES {
            assert!(!layout.resolve(prize.id).kind.is_degraded(), "{}", prize.id);
        }
    }

    #[test]
    fn test_prize_name_falls_back_to_id() {
        assert_eq!(prize_name(&DEFAULT_PRIZES, "STARBUCKS"), "Starbucks Gift Card");
        assert_eq!(prize_name(&DEFAULT_PRIZES, "MYSTERY"), "MYSTERY");
    }

    #[test]
    fn test_limited_prizes() {
        let limited: Vec<&str> = DEFAULT_PRIZES.iter().filter(|p| p.is_limited()).map(|p| p.id).collect();
        assert_eq!(limited, vec!["MK_DUCK", "STARBUCKS"]);
    }
}
