//! Credit page: limit, balance, utilisation, risk band.

#[cfg(test)]
#[path = "credit_test.rs"]
mod credit_test;

use leptos::prelude::*;
use souksync::ApiClient;
use souksync::api::types::CreditProfile;

use crate::components::status::{ErrorNote, LoadingNote, PageHeader};
use crate::util::load::{LoadState, PageScope};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Scores below 30 are low, up to 60 medium, above that high.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Low
        } else if score <= 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Percent of the limit in use, capped to `0..=100`. A zero limit reads as 0.
pub fn utilization_percent(limit: &str, balance: &str) -> f64 {
    let (Ok(limit), Ok(balance)) = (limit.trim().parse::<f64>(), balance.trim().parse::<f64>()) else {
        return 0.0;
    };
    if limit <= 0.0 {
        return 0.0;
    }
    (balance / limit * 100.0).clamp(0.0, 100.0)
}

/// `ETB 12,345.50`; unparsable input is shown verbatim.
pub fn format_etb(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return raw.to_owned();
    };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}ETB {grouped}.{cents}")
}

#[component]
pub fn CreditPage() -> impl IntoView {
    let scope = PageScope::mount();
    let profile = RwSignal::new(LoadState::<CreditProfile>::Loading);

    let reload = Callback::new(move |()| {
        scope.load(profile, "Failed to load credit profile", |api: ApiClient| async move {
            api.credit_profile().await
        });
    });
    reload.run(());

    view! {
        <div class="credit-page">
            <PageHeader title="Credit" subtitle="Your credit line and repayment standing."/>
            {move || match profile.get() {
                LoadState::Loading => view! { <LoadingNote text="Loading credit profile..."/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorNote message=message on_retry=reload/> }.into_any(),
                LoadState::Ready(data) => view! { <CreditCard data=data/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CreditCard(data: CreditProfile) -> impl IntoView {
    let used = utilization_percent(&data.credit_limit, &data.current_balance);
    let risk = data.risk_score.map(|score| (score.round(), RiskBand::from_score(score)));

    view! {
        <section class="credit-card">
            <p class="credit-card__label">"Available Credit"</p>
            <p class="credit-card__value">{format_etb(&data.available_credit)}</p>
            <div class="credit-card__row">
                <span>"Balance: " {format_etb(&data.current_balance)}</span>
                <span>"Limit: " {format_etb(&data.credit_limit)}</span>
            </div>
            <div class="meter">
                <div class="meter__fill" style=format!("width: {used:.1}%")></div>
            </div>
            <p class="credit-card__note">{format!("{used:.1}% utilized")}</p>
            {risk
                .map(|(score, band)| {
                    view! {
                        <p class=format!("badge badge--risk-{}", band.css_modifier())>
                            {format!("{score} · {}", band.label())}
                        </p>
                    }
                })}
            <p class="credit-card__note">
                {if data.is_active { "Credit line active" } else { "Credit line inactive" }}
            </p>
        </section>
    }
}
