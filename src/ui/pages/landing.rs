//! Landing page component
//!
//! The Nora waitlist page:
//! - SEO meta tags
//! - Starfield background and ambient audio toggle
//! - Hero with rotating headline word and typing effect
//! - Count-up stats, feature cards revealed on scroll
//! - Waitlist signup form

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::LandingContent;
use crate::ui::{
    AudioToggle, CountUpStat, Reveal, RotatingWord, StarfieldCanvas, TypedText, WaitlistForm,
};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let content = use_context::<LandingContent>().unwrap_or_default();
    let LandingContent {
        phrases,
        rotating_words,
        counters,
        form_endpoint,
        audio_src,
        remember_audio,
        ambient_volume,
    } = content;

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::{browser, smooth_scroll};

        let handle_click = smooth_scroll::install(browser::motion_preference());
        on_cleanup(move || handle_click.remove());
    }

    view! {
        <SeoMeta />
        <LandingStyles />

        <StarfieldCanvas />
        <AudioToggle src=audio_src remember=remember_audio volume=ambient_volume />

        <main class="landing">
            <section class="hero" id="top">
                <h1>
                    "Nora helps you " <RotatingWord words=rotating_words /> " every idea."
                </h1>
                <p class="hero-sub">
                    "Your second memory for " <TypedText phrases=phrases />
                </p>
                <a href="#waitlist" class="cta">"Join the waitlist"</a>
            </section>

            <Reveal class="stats">
                {counters
                    .into_iter()
                    .map(|stat| view! { <CountUpStat stat=stat /> })
                    .collect_view()}
            </Reveal>

            <Reveal class="features" id="how-it-works">
                <FeatureCard
                    title="Speak it"
                    description="Record a thought in seconds. Nora transcribes and files it."
                />
                <FeatureCard
                    title="Sketch it"
                    description="Snap a napkin drawing; Nora keeps it next to the words that go with it."
                />
                <FeatureCard
                    title="Find it"
                    description="Ask in plain language and get back the idea you had at 2am."
                />
            </Reveal>

            <Reveal class="eureka">
                <h2>"Eureka moments don't wait for a desk."</h2>
                <p>"Nora is there when the idea arrives, and still there when you need it back."</p>
            </Reveal>

            <Reveal class="signup" id="waitlist">
                <h2>"Be first to meet Nora"</h2>
                <WaitlistForm endpoint=form_endpoint />
            </Reveal>
        </main>

        <footer class="landing-footer">
            <a href="#top">"Back to top"</a>
        </footer>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </article>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Nora - your second memory" />

        <Meta name="description" content="Nora captures voice notes, midnight ideas and sketches, and gives them back when you need them. Join the waitlist." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Nora - your second memory" />
        <Meta property="og:description" content="Capture every idea, wherever it shows up." />

        <Meta name="theme-color" content="#05060f" />
        <Link rel="canonical" href="https://nora.app/" />
    }
}

/// Page styles for the animated pieces
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            body { margin: 0; background: #05060f; color: #e8e8f0; font-family: system-ui, sans-serif; }

            .starfield { position: fixed; inset: 0; z-index: -1; pointer-events: none; }

            .landing { max-width: 960px; margin: 0 auto; padding: 0 1.5rem; }
            .hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
            .cta { display: inline-block; padding: .8rem 1.6rem; border-radius: 999px; background: #8b7cff; color: #fff; text-decoration: none; }

            .rotating-word { color: #b7adff; animation: word-in .4s ease; }
            .typed-caret { animation: caret-blink 1s steps(1) infinite; }

            .reveal { opacity: 0; transform: translateY(24px); transition: opacity .8s ease, transform .8s ease; padding: 4rem 0; }
            .reveal.visible { opacity: 1; transform: none; }

            .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 2rem; text-align: center; }
            .stat-value { display: block; font-size: 2.5rem; font-weight: 700; }
            .features { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }

            .waitlist-form { display: flex; flex-wrap: wrap; gap: .75rem; }
            .waitlist-form button:disabled { opacity: .6; cursor: progress; }
            .form-status.success { color: #7be3a5; }
            .form-status.error { color: #ff8a8a; }

            .audio-toggle { position: fixed; right: 1rem; bottom: 1rem; font-size: 1.4rem; border-radius: 50%; width: 3rem; height: 3rem; }
            .audio-toggle.muted { opacity: .6; }

            @keyframes caret-blink { 50% { opacity: 0; } }
            @keyframes word-in { from { opacity: 0; } to { opacity: 1; } }

            @media (prefers-reduced-motion: reduce) {
                .reveal { transition: none; opacity: 1; transform: none; }
                .rotating-word, .typed-caret { animation: none; }
            }
            "#
        </style>
    }
}
