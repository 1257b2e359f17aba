//! Landing page component
//!
//! The single marketing page for Redshift Web Solutions:
//! - SEO meta tags
//! - Navbar with mobile menu and a scrolled state
//! - Hero section
//! - Services and process sections
//! - Contact section with the validated contact form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::ContactSection;

/// Landing page component with scroll reveal animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <Navbar />

        <main>
            // Hero Section
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1 class="hero-title">
                        <span class="hero-title-main">"Websites that"</span>
                        <span class="hero-title-sub">"move your business forward"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "We design and build fast, modern websites for small businesses and startups."
                    </p>
                    <div class="hero-buttons">
                        <a href="#contact" class="btn btn-primary">"Start a Project"</a>
                        <a href="#services" class="btn btn-secondary">"Our Services"</a>
                    </div>
                </div>

                // Background decoration
                <div class="hero-decoration" aria-hidden="true">
                    <div class="hero-circle hero-circle-1"></div>
                    <div class="hero-circle hero-circle-2"></div>
                    <div class="hero-line hero-line-1"></div>
                    <div class="hero-line hero-line-2"></div>
                </div>
            </section>

            // Services Section
            <section id="services" class="section services">
                <div class="container">
                    <div class="section-header reveal">
                        <span class="section-tag">"Services"</span>
                        <h2 class="section-title">"What we do"</h2>
                    </div>

                    <div class="services-grid">
                        <ServiceCard
                            title="Web Design"
                            description="Clean, conversion-focused layouts that look great on every screen."
                        />
                        <ServiceCard
                            title="Web Development"
                            description="Fast, accessible sites built on modern, maintainable foundations."
                        />
                        <ServiceCard
                            title="E-Commerce"
                            description="Online stores that make it easy for customers to buy from you."
                        />
                        <ServiceCard
                            title="Maintenance"
                            description="Updates, backups and monitoring so your site keeps running smoothly."
                        />
                    </div>
                </div>
            </section>

            // Process Section
            <section id="process" class="section process">
                <div class="container">
                    <div class="section-header reveal">
                        <span class="section-tag">"Process"</span>
                        <h2 class="section-title">"How we work"</h2>
                    </div>

                    <ol class="process-steps">
                        <ProcessStep number="01" title="Discover" description="We learn about your business, audience and goals." />
                        <ProcessStep number="02" title="Design" description="We shape the structure and look of your new site." />
                        <ProcessStep number="03" title="Build" description="We develop, test and optimize every page." />
                        <ProcessStep number="04" title="Launch" description="We go live and keep supporting you afterwards." />
                    </ol>
                </div>
            </section>

            <ContactSection />
        </main>

        <Footer />

        // Intersection Observer for scroll reveal
        <ScrollRevealScript />
    }
}

/// Navbar with mobile menu toggle
#[component]
fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::navigation::navbar_scrolled;

        let sync_scrolled = move || {
            let window = window();
            let scroll_y = window.scroll_y().unwrap_or_default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or_default();
            scrolled.set(navbar_scrolled(scroll_y, width));
        };

        // Page may be restored mid-scroll
        Effect::new(move |_| sync_scrolled());

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| sync_scrolled());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| sync_scrolled());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="container navbar-inner">
                <a href="#home" class="logo">
                    "Redshift"<span class="logo-accent">"."</span>
                </a>

                <button
                    id="navToggle"
                    class="nav-toggle"
                    class:active=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul id="navMenu" class="nav-menu" class:active=move || menu_open.get()>
                    <li><a href="#home" class="nav-link" on:click=close_menu>"Home"</a></li>
                    <li><a href="#services" class="nav-link" on:click=close_menu>"Services"</a></li>
                    <li><a href="#process" class="nav-link" on:click=close_menu>"Process"</a></li>
                    <li><a href="#contact" class="nav-link nav-cta" on:click=close_menu>"Contact"</a></li>
                </ul>
            </div>
        </nav>
    }
}

/// Service card component
#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="service-card reveal">
            <div class="service-icon" aria-hidden="true">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h10" />
                </svg>
            </div>
            <h3 class="service-title">{title}</h3>
            <p class="service-description">{description}</p>
        </div>
    }
}

#[component]
fn ProcessStep(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <li class="process-step reveal">
            <span class="process-number">{number}</span>
            <h3>{title}</h3>
            <p>{description}</p>
        </li>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Redshift Web Solutions - Websites for Small Businesses" />
        <Meta
            name="description"
            content="Redshift Web Solutions designs and builds fast, modern websites for small businesses and startups."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Redshift Web Solutions" />
        <Meta
            property="og:description"
            content="Fast, modern websites for small businesses and startups."
        />
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <a href="#home" class="logo">
                    "Redshift"<span class="logo-accent">"."</span>
                </a>
                <span class="footer-copy">"© 2025 Redshift Web Solutions. All rights reserved."</span>
            </div>
        </footer>
    }
}

/// Script for scroll-triggered reveal using IntersectionObserver
#[component]
fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollReveal() {
                    if (!('IntersectionObserver' in window)) {
                        document.querySelectorAll('.reveal').forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -15% 0px'
                    });

                    document.querySelectorAll('.reveal').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollReveal);
                } else {
                    initScrollReveal();
                }
            })();
            "#
        </script>
    }
}
