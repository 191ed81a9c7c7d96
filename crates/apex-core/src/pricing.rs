use crate::constants::PRICE_SLIDE_PX;
use crate::style::{css_num, StyleProp, StylePatch};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingPeriod::Annual
        } else {
            BillingPeriod::Monthly
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "per month, billed monthly",
            BillingPeriod::Annual => "per month, billed annually",
        }
    }
}

/// Price lists from the toggle's `data-monthly` / `data-annual` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanPrices {
    monthly: Vec<String>,
    annual: Vec<String>,
}

impl PlanPrices {
    pub fn parse(monthly: Option<&str>, annual: Option<&str>) -> Self {
        Self {
            monthly: split_prices(monthly),
            annual: split_prices(annual),
        }
    }

    pub fn price(&self, period: BillingPeriod, index: usize) -> Option<&str> {
        let list = match period {
            BillingPeriod::Monthly => &self.monthly,
            BillingPeriod::Annual => &self.annual,
        };
        list.get(index).map(String::as_str)
    }
}

fn split_prices(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(|p| p.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Price slides up and fades before the value is swapped.
pub fn price_fade_out() -> StylePatch {
    StylePatch::new()
        .set(
            StyleProp::Transform,
            format!("translateY({}px)", css_num(PRICE_SLIDE_PX)),
        )
        .set(StyleProp::Opacity, "0")
}

pub fn price_fade_in() -> StylePatch {
    StylePatch::new()
        .set(StyleProp::Transform, "translateY(0)")
        .set(StyleProp::Opacity, "1")
}
