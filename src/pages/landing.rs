use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;
use crate::content::{self, FAQ_ITEMS, FEATURE_TABS};

// Navbar swaps to a solid background once the page has moved at all.
const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

fn past_scroll_threshold(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Single-open accordion transition. Toggling the open entry closes it,
/// toggling any other entry moves the highlight there.
fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

/// Smooth-scrolls the section with the given anchor id into view. A missing
/// anchor is a silent no-op.
fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={onclick}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

// Hand-authored preview panel shown next to each feature tab.
fn feature_example(index: usize) -> Html {
    match index {
        0 => html! {
            <div class="example-rows">
                <div class="guest-row">
                    <div class="guest-identity">
                        <div class="guest-avatar"></div>
                        <div>
                            <p class="row-title">{"Sharma Family"}</p>
                            <p class="row-meta">{"4 members"}</p>
                        </div>
                    </div>
                    <span class="status-pill confirmed">{"Confirmed"}</span>
                </div>
                <div class="guest-row">
                    <div class="guest-identity">
                        <div class="guest-avatar"></div>
                        <div>
                            <p class="row-title">{"Gupta Family"}</p>
                            <p class="row-meta">{"6 members"}</p>
                        </div>
                    </div>
                    <span class="status-pill pending">{"Pending"}</span>
                </div>
            </div>
        },
        1 => html! {
            <div class="example-rows">
                <div class="invite-preview">
                    <p class="row-meta">{"Sangeet Invitation"}</p>
                    <p class="invite-text">
                        {"With love and laughter, we invite you to celebrate with us at the Sangeet ceremony of..."}
                    </p>
                    <button class="copy-button">{"Copy template"}</button>
                </div>
            </div>
        },
        2 => html! {
            <div class="example-rows">
                <div class="timeline-row">
                    <div class="timeline-dot done"></div>
                    <div>
                        <p class="row-title">{"Mehendi"}</p>
                        <p class="row-meta">{"Dec 18, 2025"}</p>
                    </div>
                </div>
                <div class="timeline-row">
                    <div class="timeline-dot next"></div>
                    <div>
                        <p class="row-title">{"Sangeet"}</p>
                        <p class="row-meta">{"Dec 19, 2025"}</p>
                    </div>
                </div>
                <div class="timeline-row">
                    <div class="timeline-dot later"></div>
                    <div>
                        <p class="row-title">{"Wedding"}</p>
                        <p class="row-meta">{"Dec 20, 2025"}</p>
                    </div>
                </div>
            </div>
        },
        3 => html! {
            <div class="example-rows">
                <div class="budget-preview">
                    <div class="budget-line">
                        <span>{"Total Budget"}</span>
                        <span class="budget-total">{"₹25,00,000"}</span>
                    </div>
                    <div class="budget-line spent">
                        <span>{"Spent"}</span>
                        <span>{"₹18,50,000"}</span>
                    </div>
                    <div class="budget-track">
                        <div class="budget-fill" style="width: 74%"></div>
                    </div>
                </div>
            </div>
        },
        _ => html! {},
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let active_tab = use_state(|| 0usize);
    let open_faq = use_state(|| None::<usize>);
    let mobile_menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Track the scroll position for the navbar background for the mounted
    // lifetime of the page; the destructor drops the listener.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    scrolled.set(past_scroll_threshold(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Every navigation control closes the mobile menu, whether or not the
    // target section exists.
    let nav_to = {
        let mobile_menu_open = mobile_menu_open.clone();
        move |id: &'static str| -> Callback<MouseEvent> {
            let mobile_menu_open = mobile_menu_open.clone();
            Callback::from(move |_| {
                scroll_to_section(id);
                mobile_menu_open.set(false);
            })
        }
    };

    let open_app = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(config::APP_URL);
        }
    });

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_menu_open.set(!*mobile_menu_open);
        })
    };

    let select_tab = {
        let active_tab = active_tab.clone();
        move |index: usize| -> Callback<MouseEvent> {
            let active_tab = active_tab.clone();
            Callback::from(move |_| active_tab.set(index))
        }
    };

    let on_faq_toggle = {
        let open_faq = open_faq.clone();
        Callback::from(move |index: usize| {
            open_faq.set(toggle_faq(*open_faq, index));
        })
    };

    let tab = &FEATURE_TABS[*active_tab];

    html! {
        <div class="landing-page">
            <nav class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <div class="nav-logo">
                        <span class="logo-mark">{"💍"}</span>
                        <span class="logo-name">{"Swift Shaadi"}</span>
                    </div>

                    <div class="nav-links">
                        <button class="nav-link" onclick={nav_to(content::SECTION_FEATURES)}>
                            {"Features"}
                        </button>
                        <button class="nav-link" onclick={nav_to(content::SECTION_HOW_IT_WORKS)}>
                            {"How it works"}
                        </button>
                        <button class="nav-link" onclick={nav_to(content::SECTION_PRICING)}>
                            {"Pricing"}
                        </button>
                        <button class="nav-link" onclick={nav_to(content::SECTION_FAQ)}>
                            {"FAQ"}
                        </button>
                        <button class="nav-cta" onclick={open_app.clone()}>
                            {"Open app"}
                        </button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        {if *mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
                {
                    if *mobile_menu_open {
                        html! {
                            <div class="mobile-menu">
                                <button class="mobile-link" onclick={nav_to(content::SECTION_FEATURES)}>
                                    {"Features"}
                                </button>
                                <button class="mobile-link" onclick={nav_to(content::SECTION_HOW_IT_WORKS)}>
                                    {"How it works"}
                                </button>
                                <button class="mobile-link" onclick={nav_to(content::SECTION_PRICING)}>
                                    {"Pricing"}
                                </button>
                                <button class="mobile-link" onclick={nav_to(content::SECTION_FAQ)}>
                                    {"FAQ"}
                                </button>
                                <button class="nav-cta full-width" onclick={open_app.clone()}>
                                    {"Open app"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>

            <header class="hero">
                <div class="hero-inner">
                    <div class="hero-copy">
                        <h1>{"All your wedding planning, finally in one app"}</h1>
                        <p class="hero-subtitle">
                            {"Because planning your wedding should feel just as joyful as the day itself."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={open_app.clone()}>
                                {"Start planning now →"}
                            </button>
                            <button class="hero-cta ghost" onclick={nav_to(content::SECTION_HOW_IT_WORKS)}>
                                {"See how it works"}
                            </button>
                        </div>
                    </div>

                    <div class="mockup-panel">
                        <div class="mockup-card tilt-right">
                            <div class="mockup-card-head">
                                <div class="icon-circle small">{"👥"}</div>
                                <div>
                                    <p class="row-title">{"Guest List"}</p>
                                    <p class="row-meta">{"124 guests added"}</p>
                                </div>
                            </div>
                            <div class="mockup-pills">
                                <span class="status-pill confirmed">{"89 confirmed"}</span>
                                <span class="status-pill pending">{"35 pending"}</span>
                            </div>
                        </div>
                        <div class="mockup-card tilt-left">
                            <div class="mockup-card-head">
                                <div class="icon-circle small">{"📅"}</div>
                                <div>
                                    <p class="row-title">{"Sangeet Night"}</p>
                                    <p class="row-meta">{"Dec 20, 2025"}</p>
                                </div>
                            </div>
                        </div>
                        <div class="mockup-card tilt-right-more">
                            <div class="mockup-card-head">
                                <div class="icon-circle small">{"✅"}</div>
                                <div>
                                    <p class="row-title">{"12 tasks completed"}</p>
                                    <p class="row-meta">{"8 remaining"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <section class="strip">
                <p>{"Made for Indian weddings, from roka to reception."}</p>
            </section>

            <section class="problems">
                <h2>{"Planning a wedding should not feel chaotic."}</h2>
                <div class="card-grid three">
                    <div class="pain-card">
                        <div class="icon-circle muted">{"💬"}</div>
                        <p>{"Guest lists scattered across WhatsApp and sheets."}</p>
                    </div>
                    <div class="pain-card">
                        <div class="icon-circle muted">{"📅"}</div>
                        <p>{"No clear view of RSVPs, timeline, and tasks."}</p>
                    </div>
                    <div class="pain-card">
                        <div class="icon-circle muted">{"👥"}</div>
                        <p>{"Hard to align parents, siblings, and planners."}</p>
                    </div>
                </div>
            </section>

            <section class="solutions">
                <h2>{"Meet Swift Shaadi."}</h2>
                <p class="section-subtitle">{"Designed for Indian weddings. Built for families."}</p>
                <div class="card-grid three">
                    <div class="benefit-card">
                        <div class="icon-circle">{"✅"}</div>
                        <h3>{"Plan in one place"}</h3>
                        <p>{"Guests, RSVPs, timeline, tasks, budget - everything organised together."}</p>
                    </div>
                    <div class="benefit-card">
                        <div class="icon-circle">{"💬"}</div>
                        <h3>{"Share invites easily"}</h3>
                        <p>{"Ready templates you copy and send from your own number."}</p>
                    </div>
                    <div class="benefit-card">
                        <div class="icon-circle">{"👥"}</div>
                        <h3>{"Coordinate smoothly"}</h3>
                        <p>{"Roles for parents, siblings, and cousins to work together."}</p>
                    </div>
                </div>
            </section>

            <section id={content::SECTION_FEATURES} class="features">
                <h2>{"Everything you need to plan your wedding"}</h2>
                <div class="tab-row">
                    {
                        for FEATURE_TABS.iter().enumerate().map(|(index, entry)| {
                            let class = if index == *active_tab {
                                "tab-button active"
                            } else {
                                "tab-button"
                            };
                            html! {
                                <button class={class} onclick={select_tab(index)}>
                                    {entry.title}
                                </button>
                            }
                        })
                    }
                </div>
                <div class="feature-detail">
                    <div class="feature-text">
                        <div class="feature-head">
                            <div class="icon-circle">{tab.icon.glyph()}</div>
                            <h3>{tab.title}</h3>
                        </div>
                        <p>{tab.description}</p>
                    </div>
                    <div class="example-card">
                        {feature_example(*active_tab)}
                    </div>
                </div>
            </section>

            <section id={content::SECTION_HOW_IT_WORKS} class="how-it-works">
                <h2>{"Start using Swift Shaadi in three simple steps."}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"Create your wedding"}</h3>
                        <p>{"Add names, date, and city. Set up in under a minute."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Add guests, events, and tasks"}</h3>
                        <p>{"Keep everything in one space. Invite family to help."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Share invite messages"}</h3>
                        <p>{"Copy templates, send from your phone, track RSVPs."}</p>
                    </div>
                </div>
                <div class="section-cta">
                    <button class="hero-cta" onclick={open_app.clone()}>
                        {"Open app"}
                    </button>
                </div>
            </section>

            <section id={content::SECTION_PRICING} class="pricing">
                <h2>{"Simple, transparent pricing"}</h2>
                <div class="pricing-grid">
                    <div class="price-card featured">
                        <div class="price-card-head">
                            <h3>{"Free"}</h3>
                            <span class="availability-badge">{"Available now"}</span>
                        </div>
                        <ul class="plan-list">
                            <li>{"Guests & RSVPs"}</li>
                            <li>{"Invite templates"}</li>
                            <li>{"Timeline & events"}</li>
                            <li>{"Task management"}</li>
                            <li>{"Budget tracker"}</li>
                            <li>{"Team roles"}</li>
                        </ul>
                        <button class="hero-cta full-width" onclick={open_app.clone()}>
                            {"Get started free"}
                        </button>
                    </div>
                    <div class="price-card">
                        <span class="coming-soon-badge">{"🔒 Coming soon"}</span>
                        <h3>{"Premium"}</h3>
                        <ul class="plan-list locked">
                            <li>{"Guest notifications"}</li>
                            <li>{"Shared album"}</li>
                            <li>{"Custom website"}</li>
                            <li>{"Vendor marketplace"}</li>
                            <li>{"Advanced analytics"}</li>
                        </ul>
                        <button class="hero-cta ghost full-width" disabled={true}>
                            {"Coming soon"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <h2>{"Loved by modern Indian families."}</h2>
                <div class="card-grid three">
                    <div class="testimonial-card">
                        <p class="testimonial-quote">
                            {"\"We finally organised everything without five different spreadsheets.\""}
                        </p>
                        <p class="author-name">{"Priya S."}</p>
                        <p class="author-title">{"Bride, Mumbai"}</p>
                    </div>
                    <div class="testimonial-card">
                        <p class="testimonial-quote">
                            {"\"My parents could see tasks clearly and felt in control.\""}
                        </p>
                        <p class="author-name">{"Rahul M."}</p>
                        <p class="author-title">{"Groom, Delhi"}</p>
                    </div>
                    <div class="testimonial-card">
                        <p class="testimonial-quote">
                            {"\"The RSVP tracker saved us so much time with relatives.\""}
                        </p>
                        <p class="author-name">{"Anjali K."}</p>
                        <p class="author-title">{"Bride, Bangalore"}</p>
                    </div>
                </div>
            </section>

            <section id={content::SECTION_FAQ} class="faq-section">
                <h2>{"Frequently asked questions"}</h2>
                <div class="faq-list">
                    {
                        for FAQ_ITEMS.iter().enumerate().map(|(index, entry)| {
                            html! {
                                <FaqItem
                                    index={index}
                                    question={entry.question}
                                    answer={entry.answer}
                                    open={*open_faq == Some(index)}
                                    on_toggle={on_faq_toggle.clone()}
                                />
                            }
                        })
                    }
                </div>
            </section>

            <section class="final-cta">
                <h2>{"Ready to make wedding planning calmer?"}</h2>
                <p>{"Open Swift Shaadi, create your wedding, and invite your family to plan together today."}</p>
                <button class="hero-cta" onclick={open_app}>
                    {"Open Swift Shaadi →"}
                </button>
            </section>

            <footer class="footer">
                <p class="footer-note">{"2025 Swift Shaadi. Made with love for Indian families."}</p>
                <div class="footer-links">
                    <button class="footer-link" onclick={nav_to(content::SECTION_FEATURES)}>
                        {"Features"}
                    </button>
                    <button class="footer-link" onclick={nav_to(content::SECTION_HOW_IT_WORKS)}>
                        {"How it works"}
                    </button>
                    <button class="footer-link" onclick={nav_to(content::SECTION_PRICING)}>
                        {"Pricing"}
                    </button>
                    <button class="footer-link" onclick={nav_to(content::SECTION_FAQ)}>
                        {"FAQ"}
                    </button>
                    <a class="footer-link" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {"Contact"}
                    </a>
                    <span class="footer-link static">{"Privacy"}</span>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #FFF9F5;
                    color: #2B1B24;
                    font-family: system-ui, -apple-system, sans-serif;
                    overflow-x: hidden;
                }

                .landing-page h1,
                .landing-page h2,
                .landing-page h3 {
                    margin: 0;
                }

                .landing-page p {
                    margin: 0;
                }

                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .navbar.scrolled {
                    background: rgba(255, 249, 245, 0.95);
                    backdrop-filter: blur(6px);
                    box-shadow: 0 1px 8px rgba(43, 27, 36, 0.08);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .logo-mark {
                    font-size: 1.4rem;
                }

                .logo-name {
                    font-size: 1.2rem;
                    font-weight: 600;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font-size: 0.9rem;
                    font-family: inherit;
                    color: #7A6470;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #2B1B24;
                }

                .nav-cta {
                    background: #C2185B;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.55rem 1.1rem;
                    font-size: 0.9rem;
                    font-family: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .nav-cta:hover {
                    background: #A3134C;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.3rem;
                    color: #2B1B24;
                    cursor: pointer;
                    padding: 0.25rem 0.5rem;
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 1rem 1.5rem;
                    background: #FFF9F5;
                    border-top: 1px solid #F0E2DA;
                }

                .mobile-link {
                    background: none;
                    border: none;
                    text-align: left;
                    padding: 0.6rem 0;
                    font-size: 0.95rem;
                    font-family: inherit;
                    color: #7A6470;
                    cursor: pointer;
                }

                .mobile-link:hover {
                    color: #2B1B24;
                }

                .full-width {
                    width: 100%;
                }

                .hero {
                    padding: 7rem 1.5rem 4rem;
                }

                .hero-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.15rem;
                    color: #7A6470;
                    margin-bottom: 1.75rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    background: #C2185B;
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.85rem 1.6rem;
                    font-size: 1rem;
                    font-family: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .hero-cta:hover {
                    background: #A3134C;
                    transform: translateY(-1px);
                }

                .hero-cta.ghost {
                    background: transparent;
                    color: #C2185B;
                    border: 1px solid #E8C9D6;
                }

                .hero-cta.ghost:hover {
                    background: #FBEFF4;
                    transform: none;
                }

                .hero-cta:disabled {
                    opacity: 0.6;
                    cursor: default;
                    transform: none;
                }

                .mockup-panel {
                    background: linear-gradient(135deg, #FDEDE4, #F9DCE7);
                    border-radius: 20px;
                    padding: 2rem;
                }

                .mockup-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 4px 16px rgba(43, 27, 36, 0.08);
                    padding: 1rem;
                    margin-bottom: 0.75rem;
                }

                .mockup-card.tilt-right {
                    transform: rotate(1deg);
                }

                .mockup-card.tilt-left {
                    transform: rotate(-1deg);
                    margin-left: 1rem;
                }

                .mockup-card.tilt-right-more {
                    transform: rotate(2deg);
                    margin-left: 0.5rem;
                    margin-bottom: 0;
                }

                .mockup-card-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .mockup-pills {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 0.6rem;
                }

                .icon-circle {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #F9DCE7;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    flex-shrink: 0;
                }

                .icon-circle.small {
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.1rem;
                }

                .icon-circle.muted {
                    background: #F6E7E0;
                    margin: 0 auto 0.75rem;
                }

                .row-title {
                    font-weight: 500;
                    font-size: 0.9rem;
                }

                .row-meta {
                    font-size: 0.78rem;
                    color: #7A6470;
                }

                .status-pill {
                    font-size: 0.72rem;
                    padding: 0.2rem 0.55rem;
                    border-radius: 6px;
                }

                .status-pill.confirmed {
                    background: #E3F4E5;
                    color: #2E7D43;
                }

                .status-pill.pending {
                    background: #FBF3D9;
                    color: #9B7A1B;
                }

                .strip {
                    background: #FBEFF4;
                    padding: 1.25rem 1.5rem;
                    text-align: center;
                }

                .strip p {
                    font-size: 0.9rem;
                    color: #7A6470;
                }

                .problems,
                .solutions,
                .features,
                .how-it-works,
                .pricing,
                .testimonials,
                .faq-section,
                .final-cta {
                    padding: 4rem 1.5rem;
                }

                .problems h2,
                .solutions h2,
                .features h2,
                .how-it-works h2,
                .pricing h2,
                .testimonials h2,
                .faq-section h2,
                .final-cta h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .solutions {
                    background: #FDF4F0;
                }

                .solutions h2 {
                    margin-bottom: 0.5rem;
                }

                .section-subtitle {
                    text-align: center;
                    color: #7A6470;
                    margin-bottom: 2.5rem;
                }

                .card-grid {
                    max-width: 900px;
                    margin: 0 auto;
                    display: grid;
                    gap: 1rem;
                }

                .card-grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .pain-card,
                .benefit-card,
                .testimonial-card {
                    background: #fff;
                    border: 1px solid #F0E2DA;
                    border-radius: 14px;
                    padding: 1.5rem;
                }

                .pain-card {
                    text-align: center;
                }

                .pain-card p {
                    font-size: 0.9rem;
                    color: #7A6470;
                }

                .benefit-card h3 {
                    font-size: 1.05rem;
                    margin: 0.9rem 0 0.5rem;
                }

                .benefit-card p {
                    font-size: 0.9rem;
                    color: #7A6470;
                }

                .tab-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }

                .tab-button {
                    background: #fff;
                    border: 1px solid #E8C9D6;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    font-size: 0.88rem;
                    font-family: inherit;
                    color: #7A6470;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .tab-button:hover {
                    border-color: #C2185B;
                    color: #C2185B;
                }

                .tab-button.active {
                    background: #C2185B;
                    border-color: #C2185B;
                    color: #fff;
                }

                .feature-detail {
                    max-width: 950px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }

                .feature-head {
                    display: flex;
                    align-items: center;
                    gap: 0.9rem;
                    margin-bottom: 1rem;
                }

                .feature-head h3 {
                    font-size: 1.3rem;
                }

                .feature-text > p {
                    color: #7A6470;
                    line-height: 1.6;
                }

                .example-card {
                    background: #FDF4F0;
                    border-radius: 14px;
                    padding: 1.5rem;
                }

                .example-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .guest-row {
                    background: #fff;
                    border-radius: 10px;
                    padding: 0.8rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .guest-identity {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .guest-avatar {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #F9DCE7;
                }

                .invite-preview {
                    background: #fff;
                    border-radius: 10px;
                    padding: 1rem;
                }

                .invite-text {
                    font-size: 0.9rem;
                    margin-top: 0.4rem;
                    line-height: 1.5;
                }

                .copy-button {
                    margin-top: 0.8rem;
                    background: none;
                    border: 1px solid #E8C9D6;
                    border-radius: 8px;
                    padding: 0.4rem 0.9rem;
                    font-size: 0.82rem;
                    font-family: inherit;
                    color: #C2185B;
                    cursor: pointer;
                }

                .copy-button:hover {
                    background: #FBEFF4;
                }

                .timeline-row {
                    background: #fff;
                    border-radius: 10px;
                    padding: 0.8rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .timeline-dot {
                    width: 0.55rem;
                    height: 0.55rem;
                    border-radius: 50%;
                    flex-shrink: 0;
                }

                .timeline-dot.done {
                    background: #4CAF50;
                }

                .timeline-dot.next {
                    background: #C2185B;
                }

                .timeline-dot.later {
                    background: #E8A33B;
                }

                .budget-preview {
                    background: #fff;
                    border-radius: 10px;
                    padding: 1rem;
                }

                .budget-line {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }

                .budget-line.spent {
                    color: #7A6470;
                }

                .budget-total {
                    font-weight: 600;
                }

                .budget-track {
                    margin-top: 0.7rem;
                    background: #F6E7E0;
                    border-radius: 999px;
                    height: 0.5rem;
                    overflow: hidden;
                }

                .budget-fill {
                    background: #C2185B;
                    height: 100%;
                    border-radius: 999px;
                }

                .how-it-works {
                    background: #FDF4F0;
                }

                .steps-grid {
                    max-width: 900px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    counter-reset: setup-steps;
                }

                .step {
                    text-align: center;
                    padding: 1rem;
                    counter-increment: setup-steps;
                }

                .step::before {
                    content: counter(setup-steps);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #C2185B;
                    color: #fff;
                    font-size: 1.3rem;
                    font-weight: 700;
                    margin: 0 auto 1rem;
                }

                .step h3 {
                    font-size: 1.05rem;
                    margin-bottom: 0.5rem;
                }

                .step p {
                    font-size: 0.9rem;
                    color: #7A6470;
                }

                .section-cta {
                    text-align: center;
                    margin-top: 2.5rem;
                }

                .pricing-grid {
                    max-width: 760px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .price-card {
                    background: #fff;
                    border: 1px solid #F0E2DA;
                    border-radius: 14px;
                    padding: 1.75rem;
                    position: relative;
                }

                .price-card.featured {
                    border: 2px solid #C2185B;
                }

                .price-card-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.25rem;
                }

                .price-card h3 {
                    font-size: 1.3rem;
                }

                .availability-badge {
                    font-size: 0.72rem;
                    background: #F9DCE7;
                    color: #C2185B;
                    padding: 0.25rem 0.6rem;
                    border-radius: 6px;
                }

                .coming-soon-badge {
                    position: absolute;
                    top: 0.9rem;
                    right: 0.9rem;
                    font-size: 0.72rem;
                    background: #F6E7E0;
                    color: #7A6470;
                    padding: 0.25rem 0.6rem;
                    border-radius: 6px;
                }

                .price-card:not(.featured) h3 {
                    margin-bottom: 1.25rem;
                }

                .plan-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }

                .plan-list li {
                    font-size: 0.9rem;
                    color: #7A6470;
                    padding: 0.45rem 0;
                    padding-left: 1.6rem;
                    position: relative;
                }

                .plan-list li::before {
                    content: '✓';
                    position: absolute;
                    left: 0.2rem;
                    color: #C2185B;
                    font-weight: 700;
                }

                .plan-list.locked li::before {
                    content: '🔒';
                    font-size: 0.75rem;
                    font-weight: 400;
                }

                .testimonials {
                    background: #FBEFF4;
                }

                .testimonial-quote {
                    font-style: italic;
                    font-size: 0.95rem;
                    color: #7A6470;
                    margin-bottom: 1rem;
                    line-height: 1.5;
                }

                .author-name {
                    font-weight: 500;
                    font-size: 0.9rem;
                }

                .author-title {
                    font-size: 0.78rem;
                    color: #7A6470;
                }

                .faq-list {
                    max-width: 640px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #F0E2DA;
                    border-radius: 12px;
                    overflow: hidden;
                    transition: border-color 0.2s ease;
                }

                .faq-item:hover {
                    border-color: #E8C9D6;
                }

                .faq-question {
                    width: 100%;
                    padding: 1rem 1.25rem;
                    background: none;
                    border: none;
                    font-family: inherit;
                    font-size: 0.92rem;
                    font-weight: 500;
                    color: #2B1B24;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .toggle-icon {
                    color: #C2185B;
                    font-size: 1.1rem;
                    flex-shrink: 0;
                }

                .faq-answer {
                    padding: 0 1.25rem 1rem;
                }

                .faq-answer p {
                    font-size: 0.9rem;
                    color: #7A6470;
                    line-height: 1.6;
                }

                .final-cta {
                    background: #F9DCE7;
                    text-align: center;
                }

                .final-cta h2 {
                    margin-bottom: 1rem;
                }

                .final-cta p {
                    color: #7A6470;
                    max-width: 480px;
                    margin: 0 auto 1.75rem;
                }

                .footer {
                    border-top: 1px solid #F0E2DA;
                    padding: 2rem 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .footer-note {
                    font-size: 0.85rem;
                    color: #7A6470;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font-size: 0.85rem;
                    font-family: inherit;
                    color: #7A6470;
                    cursor: pointer;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-link:hover {
                    color: #2B1B24;
                }

                .footer-link.static {
                    cursor: default;
                }

                .footer-link.static:hover {
                    color: #7A6470;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }

                    .hero {
                        padding-top: 5.5rem;
                    }

                    .hero-inner {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .hero-copy h1 {
                        font-size: 2.1rem;
                    }

                    .hero-cta-group {
                        justify-content: center;
                    }

                    .card-grid.three {
                        grid-template-columns: 1fr;
                    }

                    .feature-detail {
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    .steps-grid {
                        grid-template-columns: 1fr;
                    }

                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_opens_from_all_closed() {
        assert_eq!(toggle_faq(None, 2), Some(2));
    }

    #[test]
    fn faq_toggling_open_entry_closes_it() {
        assert_eq!(toggle_faq(Some(1), 1), None);
    }

    #[test]
    fn faq_switches_without_ever_holding_two_open() {
        assert_eq!(toggle_faq(Some(0), 3), Some(3));
        assert_eq!(toggle_faq(Some(3), 0), Some(0));
    }

    #[test]
    fn faq_transitions_cover_every_entry() {
        for index in 0..FAQ_ITEMS.len() {
            assert_eq!(toggle_faq(None, index), Some(index));
            assert_eq!(toggle_faq(Some(index), index), None);
        }
    }

    #[test]
    fn navbar_threshold_is_exclusive_at_20px() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(20.0));
        assert!(past_scroll_threshold(21.0));
    }

    #[test]
    fn every_tab_index_has_a_feature_entry() {
        for index in 0..FEATURE_TABS.len() {
            assert!(!FEATURE_TABS[index].title.is_empty());
            assert!(!FEATURE_TABS[index].description.is_empty());
        }
    }
}
