//! Landing page: static marketing content with calls to action.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::routes;

/// One marketing card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CTA_LABEL: &str = "Get Started";

/// Every card's call to action points here.
pub const CTA_TARGET: &str = routes::REGISTER;

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Trading with perspective",
        description: "Dive into the stock market and explore the dynamics",
    },
    Feature {
        title: "Streak Mechanism for engagement",
        description: "Enhance your daily financial and psychological awareness with Forcastock`s unique \
                      streak mechanism. Stay engaged with the stock market as the streak feature prompts and \
                      encourages you to place trades regularly, fostering a consistent and informed approach \
                      to your trading journey.",
    },
    Feature {
        title: "Machine Learning Enhanced Stock Prediction",
        description: "Experience a new level of precision in your trading decisions with Forcastock's \
                      machine learning enhanced stock prediction. Our advanced algorithms analyze real-time \
                      market data, providing you with accurate insights into trends. Elevate your trading \
                      strategy with the power of machine learning and stay ahead in the stock market game.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <article class="feature-card">
                    <h3 class="feature-card__title">{feature.title}</h3>
                    <p class="feature-card__body">{feature.description}</p>
                    <a href=CTA_TARGET class="button button--contained">{CTA_LABEL}</a>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="landing-page">
            <h1 class="landing-page__logo">"Forcastock"</h1>
            <div class="landing-page__grid">{cards}</div>
        </div>
    }
}
