use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::use_auth;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 6] = [
    Feature {
        icon: "releases",
        title: "Guided packaging",
        description: "Build Scene-compliant releases step by step, with validation at every stage.",
    },
    Feature {
        icon: "rules",
        title: "Scene compliance",
        description: "Validate against the official rules and import the latest ones from scenerules.org.",
    },
    Feature {
        icon: "docs",
        title: "NFO generation",
        description: "Generate NFO files from templates and preview them before packaging.",
    },
    Feature {
        icon: "user",
        title: "Users and groups",
        description: "Multiple users with roles, permissions and an audit trail.",
    },
    Feature {
        icon: "upload",
        title: "Destinations",
        description: "Ship finished releases to FTP or SSH destinations configured per environment.",
    },
    Feature {
        icon: "dashboard",
        title: "Dashboard",
        description: "Follow releases and packaging jobs as they progress.",
    },
];

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">{icon(feature.icon)}</div>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}

/// Landing page.
#[component]
pub fn AboutPage() -> impl IntoView {
    let auth = use_auth();
    let cta = move || {
        if auth.is_authenticated() {
            view! { <A href="/">"Open the dashboard"</A> }.into_any()
        } else {
            view! { <A href="/login">"Sign in"</A> }.into_any()
        }
    };

    view! {
        <div class="site-page">
            <section class="hero">
                <h1 class="hero__title">"Release packaging for the Scene"</h1>
                <p class="hero__lead">
                    "Package, validate and ship eBook, TV, docs, audiobook and game releases that follow Scene rules."
                </p>
                <div class="hero__actions">
                    <span class="hero__cta">{cta}</span>
                    <A href="/docs">"Read the docs"</A>
                </div>
            </section>

            <section class="features">
                <h2>"Features"</h2>
                <div class="features__grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
