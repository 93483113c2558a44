#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanIcon {
    Star,
    TrendingUp,
}

impl PlanIcon {
    pub fn svg_path(self) -> &'static str {
        match self {
            PlanIcon::Star => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            PlanIcon::TrendingUp => "M16 6l2.29 2.29-4.88 4.88-4-4L2 16.59 3.41 18l6-6 4 4 6.3-6.29L22 12V6z",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanTier {
    pub name: &'static str,
    pub monthly_price_usd: u32,
    pub features: &'static [&'static str],
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub cta_label: &'static str,
    pub badge: Option<&'static str>,
    pub icon: PlanIcon,
}

impl PlanTier {
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_price_usd)
    }

    pub fn is_featured(&self) -> bool {
        self.badge.is_some()
    }
}

/// Training plans offered on the plans page. Every visitor sees all three,
/// whatever they answered on the questionnaire.
pub const PLAN_TIERS: [PlanTier; 3] = [
    PlanTier {
        name: "Starter",
        monthly_price_usd: 99,
        features: &[
            "2 sessions per week",
            "Basic stroke technique",
            "Water safety fundamentals",
            "Breathing exercises",
            "Progress tracking",
            "Email support",
        ],
        accent: "#00bcd4",
        accent_hover: "#00acc1",
        cta_label: "Choose Starter",
        badge: None,
        icon: PlanIcon::Star,
    },
    PlanTier {
        name: "Pro",
        monthly_price_usd: 179,
        features: &[
            "3 sessions per week",
            "Advanced technique analysis",
            "Video feedback sessions",
            "Personalized training plans",
            "Endurance building programs",
            "Nutrition guidance",
            "Priority support",
            "Monthly progress reviews",
        ],
        accent: "#ff7043",
        accent_hover: "#e5633a",
        cta_label: "Choose Pro",
        badge: Some("BEST VALUE"),
        icon: PlanIcon::TrendingUp,
    },
    PlanTier {
        name: "Elite",
        monthly_price_usd: 299,
        features: &[
            "5 sessions per week",
            "Elite performance coaching",
            "Race strategy development",
            "Mental conditioning",
            "1-on-1 dedicated sessions",
            "Competition preparation",
            "Biomechanical analysis",
            "Recovery protocols",
            "24/7 coach access",
        ],
        accent: "#9c27b0",
        accent_hover: "#8e24aa",
        cta_label: "Choose Elite",
        badge: None,
        icon: PlanIcon::Star,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_price() {
        let prices: Vec<u32> = PLAN_TIERS.iter().map(|t| t.monthly_price_usd).collect();
        assert_eq!(prices, vec![99, 179, 299]);
        assert_eq!(PLAN_TIERS[1].price_label(), "$179");
    }

    #[test]
    fn only_pro_is_featured() {
        let featured: Vec<&str> = PLAN_TIERS.iter().filter(|t| t.is_featured()).map(|t| t.name).collect();
        assert_eq!(featured, vec!["Pro"]);
    }

    #[test]
    fn higher_tiers_list_more_features() {
        for pair in PLAN_TIERS.windows(2) {
            assert!(pair[0].features.len() < pair[1].features.len());
        }
        for tier in &PLAN_TIERS {
            assert!(tier.cta_label.ends_with(tier.name));
        }
    }
}
