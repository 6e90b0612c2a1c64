//! Landing page component
//!
//! The single-page site:
//! - SEO meta tags
//! - Header that turns opaque once the page scrolls
//! - Hero with section shortcuts
//! - Services grid from the shared catalog, each card opening the booking wizard
//! - About section with stats and values
//! - Contact details and the contact form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::{INKSPIRE, ServiceRecord, service_catalog};
use crate::ui::booking_wizard::{BookingModal, provide_booking_modal, use_booking_modal};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::performance::{PerformanceContext, use_performance_context, use_scrolled_past};

/// Scroll distance after which the header gets a background
const HEADER_OPAQUE_AFTER_PX: f64 = 50.0;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("About", "about"),
    ("Services", "services"),
    ("Contact", "contact"),
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Happy Clients"),
    ("1000+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("24/7", "Support Available"),
];

const VALUES: [(&str, &str, &str); 6] = [
    (
        "Innovation",
        "We stay ahead of technology trends to provide cutting-edge solutions",
        "from-yellow-500 to-orange-500",
    ),
    (
        "Customer First",
        "Your success is our priority. We build lasting relationships through exceptional service",
        "from-red-500 to-pink-500",
    ),
    (
        "Reliability",
        "Dependable solutions and support you can trust for your business needs",
        "from-green-500 to-emerald-500",
    ),
    (
        "Excellence",
        "We deliver quality results that exceed expectations every time",
        "from-blue-500 to-cyan-500",
    ),
    (
        "Collaboration",
        "Working together with our clients to achieve shared success",
        "from-purple-500 to-indigo-500",
    ),
    (
        "Expertise",
        "Years of experience across multiple technology domains",
        "from-amber-500 to-yellow-500",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    provide_booking_modal();

    view! {
        <SeoMeta />

        <div class="min-h-screen overflow-x-hidden">
            <Header />
            <Hero />
            <ServicesSection />
            <AboutSection />
            <ContactSection />
            <Footer />
            <BookingModal />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} | {}", INKSPIRE.name, INKSPIRE.tagline);
    view! {
        <Title text=title.clone() />
        <Meta name="description" content=format!(
            "{} in {}: web development, design, performance, security, SEO and mobile apps.",
            INKSPIRE.name, INKSPIRE.location
        ) />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=INKSPIRE.tagline />
    }
}

/// In-page link that scrolls with the session's scroll behaviour.
#[component]
fn SectionLink(
    label: &'static str,
    section: &'static str,
    #[prop(default = "nav-link")]
    class: &'static str,
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let perf = use_performance_context();
    view! {
        <a
            href=format!("#{}", section)
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                perf.scroll_to(section);
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
            }
        >
            {label}
        </a>
    }
}

#[component]
fn Logo(#[prop(default = "w-12 h-12")] size: &'static str) -> impl IntoView {
    view! {
        <div class=format!("{} rounded-full bg-gradient-to-r from-cyan-400 to-blue-500 flex items-center justify-center p-0.5", size)>
            <div class="w-full h-full rounded-full bg-slate-900 flex items-center justify-center">
                <Icon name=icons::SPARKLES class="w-1/2 h-1/2 invert" />
            </div>
        </div>
    }
}

#[component]
fn Wordmark() -> impl IntoView {
    view! {
        <div class="text-2xl font-bold">
            <span class="text-emerald-800">"INKSPIRE"</span>
            <span class="text-cyan-400 ml-1">"SUPPORT"</span>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let scrolled = use_scrolled_past(HEADER_OPAQUE_AFTER_PX);
    let modal = use_booking_modal();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let close_menu = Callback::new(move |_| set_mobile_menu_open.set(false));

    view! {
        <header class="site-header" class:site-header-scrolled=move || scrolled.get()>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <Logo />
                        <Wordmark />
                    </div>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_SECTIONS.into_iter().map(|(label, section)| view! {
                            <SectionLink label=label section=section />
                        }).collect_view()}
                        <button class="btn-base btn-primary" on:click=move |_| modal.open(None)>
                            "Book Now"
                        </button>
                    </div>

                    <button
                        class="md:hidden"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6 invert" /> }
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6 invert" /> }
                        }}
                    </button>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-64=move || mobile_menu_open.get()
                    class:max-h-0=move || !mobile_menu_open.get()
                >
                    <div class="mobile-menu">
                        {NAV_SECTIONS.into_iter().map(|(label, section)| view! {
                            <SectionLink
                                label=label
                                section=section
                                class="block px-4 text-white hover:text-cyan-400"
                                on_navigate=close_menu
                            />
                        }).collect_view()}
                        <button
                            class="block px-4 text-cyan-400 font-semibold"
                            on:click=move |_| {
                                set_mobile_menu_open.set(false);
                                modal.open(None);
                            }
                        >
                            "Book Now"
                        </button>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let perf: PerformanceContext = use_performance_context();

    view! {
        <section id="home" class="hero">
            <div class="relative z-10 text-center px-6 max-w-5xl mx-auto">
                <div class="flex items-center justify-center mb-6">
                    <span class="text-cyan-400 font-medium tracking-wider uppercase text-sm">
                        "Technology Solutions"
                    </span>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight hero-title">
                    <span class="block">"Inspiring Technology,"</span>
                    <span class="block">"Empowering You"</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 max-w-3xl mx-auto leading-relaxed">
                    "Your trusted technology partner offering innovative IT, branding, gaming, and digital services to empower individuals and businesses in Morogoro and beyond."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <Button
                        size=ButtonSize::Large
                        class="rounded-full".to_string()
                        on_click=Callback::new(move |_| perf.scroll_to("services"))
                    >
                        "Explore Services"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Large
                        class="rounded-full".to_string()
                        on_click=Callback::new(move |_| perf.scroll_to("contact"))
                    >
                        "Contact Us"
                    </Button>
                </div>
                <div class="mt-12 grid grid-cols-2 md:grid-cols-4 gap-4 text-sm text-gray-400">
                    {INKSPIRE.service_lines.iter().take(4).map(|line| view! {
                        <div class="flex items-center justify-center gap-2">
                            <span class="w-2 h-2 bg-cyan-400 rounded-full"></span>
                            <span>{*line}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static ServiceRecord) -> impl IntoView {
    let modal = use_booking_modal();
    let perf = use_performance_context();
    let id = service.id.as_str();

    view! {
        <div class="service-card" style=move || perf.transition_style()>
            <div class=format!("service-accent bg-gradient-to-r {}", service.color)></div>
            <h3 class="text-2xl font-bold text-white mb-3">{service.title.as_str()}</h3>
            <p class="text-gray-300 mb-6 leading-relaxed">{service.description.as_str()}</p>
            <ul class="space-y-2 mb-6">
                {service.highlights.iter().map(|h| view! {
                    <li class="flex items-center gap-2 text-gray-400 text-sm">
                        <span class="w-1.5 h-1.5 bg-cyan-400 rounded-full"></span>
                        {h.as_str()}
                    </li>
                }).collect_view()}
            </ul>
            <div class="flex items-center justify-between text-sm mb-6">
                <span class="text-cyan-400 font-semibold">{service.price.as_str()}</span>
                <span class="text-gray-400">{service.duration.as_str()}</span>
            </div>
            <button class="btn-base btn-primary w-full" on:click=move |_| modal.open(Some(id))>
                "Get Started"
                <Icon name=icons::ARROW_RIGHT class="icon-btn invert" />
            </button>
            <A href=format!("/book?service={}", id) attr:class="block text-center text-sm text-gray-400 hover:text-cyan-400 mt-3">
                "or use the booking form"
            </A>
        </div>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-slate-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">"Our Services"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Comprehensive technology solutions designed to empower your digital journey"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {service_catalog().iter().map(|service| view! {
                        <ServiceCard service=service />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-gradient-to-br from-slate-50 to-gray-100">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                        {format!("About {}", INKSPIRE.name)}
                    </h2>
                    <div class="max-w-4xl mx-auto">
                        <p class="text-xl text-gray-700 mb-8 leading-relaxed">
                            <strong>{INKSPIRE.name}</strong>
                            " is your trusted technology partner, offering innovative IT, branding, gaming, and digital services to empower individuals and businesses. Based in the heart of Morogoro, we combine local expertise with global technology standards to deliver exceptional results."
                        </p>
                        <p class="text-lg text-gray-600 leading-relaxed">
                            "Our mission is simple: "
                            <em>{format!("\"{}\"", INKSPIRE.tagline)}</em>
                            ". We believe that technology should be accessible, reliable, and transformative."
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-20">
                    {STATS.into_iter().map(|(number, label)| view! {
                        <div class="stat-card">
                            <div class="stat-number">{number}</div>
                            <div class="text-gray-600 font-medium">{label}</div>
                        </div>
                    }).collect_view()}
                </div>

                <h3 class="text-3xl md:text-4xl font-bold text-center text-gray-900 mb-12">"Our Core Values"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                    {VALUES.into_iter().map(|(title, description, color)| view! {
                        <div class="value-card">
                            <div class=format!("w-16 h-16 bg-gradient-to-r {} rounded-2xl mb-6", color)></div>
                            <h4 class="text-xl font-bold text-gray-900 mb-3">{title}</h4>
                            <p class="text-gray-600 leading-relaxed">{description}</p>
                        </div>
                    }).collect_view()}
                </div>

                <div class="bg-gradient-to-r from-cyan-600 to-blue-600 rounded-3xl p-8 md:p-12 text-white text-center">
                    <h3 class="text-3xl md:text-4xl font-bold mb-6">
                        {format!("Why Choose {}?", INKSPIRE.name)}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto text-left">
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Comprehensive Solutions"</h4>
                            <p class="text-cyan-100">"From IT maintenance to custom gaming setups, we cover all your technology needs under one roof."</p>
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Local Expertise"</h4>
                            <p class="text-cyan-100">"Based in Morogoro, we understand the local market and provide personalized service."</p>
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Fast Response"</h4>
                            <p class="text-cyan-100">"Quick turnaround times and efficient service delivery for all your urgent needs."</p>
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-3">"Fair Pricing"</h4>
                            <p class="text-cyan-100">"Transparent prices with no surprises, for individuals and businesses alike."</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(
    icon: &'static str,
    title: &'static str,
    value: String,
    color: &'static str,
    /// Opened in a new tab when set
    #[prop(optional)]
    href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <div class=format!("w-12 h-12 rounded-xl bg-gradient-to-r {} flex items-center justify-center", color)>
            <Icon name=icon class="w-6 h-6 invert" />
        </div>
        <div>
            <h4 class="text-white font-semibold">{title}</h4>
            <p class="text-gray-300">{value}</p>
        </div>
    };
    match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="contact-item cursor-pointer">{body}</a>
        }.into_any(),
        None => view! { <div class="contact-item">{body}</div> }.into_any(),
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-slate-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">"Contact Us"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        {format!("Ready to transform your technology experience? Get in touch with {} today.", INKSPIRE.name)}
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Get In Touch"</h3>
                            <p class="text-gray-300 text-lg leading-relaxed">
                                "Located in the heart of Morogoro, we're here to provide exceptional technology solutions. Whether you need IT support, gaming setup, or digital services, our team is ready to help."
                            </p>
                        </div>
                        <div class="space-y-6">
                            <ContactItem
                                icon=icons::MAP_PIN
                                title="Address"
                                value=INKSPIRE.location.to_string()
                                color="from-green-500 to-emerald-500"
                            />
                            <ContactItem
                                icon=icons::PHONE
                                title="Phone"
                                value=INKSPIRE.phone_line()
                                color="from-cyan-500 to-blue-500"
                                href=INKSPIRE.whatsapp_chat_url()
                            />
                            <ContactItem
                                icon=icons::MAIL
                                title="Email"
                                value=INKSPIRE.email.to_string()
                                color="from-purple-500 to-pink-500"
                                href=INKSPIRE.mailto_url()
                            />
                            <ContactItem
                                icon=icons::CLOCK
                                title="Hours"
                                value=INKSPIRE.hours.to_string()
                                color="from-orange-500 to-amber-500"
                            />
                        </div>
                        <div class="bg-cyan-600/20 rounded-2xl p-6 border border-cyan-400/20">
                            <h4 class="text-white font-semibold mb-3">"Service Areas"</h4>
                            <p class="text-cyan-100 text-sm">
                                "Primarily serving Morogoro and surrounding areas. Remote support available nationwide for digital services."
                            </p>
                        </div>
                    </div>

                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white py-12 border-t border-cyan-500/20">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo size="w-14 h-14" />
                            <Wordmark />
                        </div>
                        <p class="text-gray-400 max-w-md leading-relaxed mb-4">
                            {format!(
                                "Your trusted technology partner in Morogoro. {} with innovative IT, branding, gaming, and digital services.",
                                INKSPIRE.tagline
                            )}
                        </p>
                        <div class="space-y-2 text-sm text-gray-400">
                            <div class="flex items-center gap-2">
                                <Icon name=icons::MAP_PIN class="w-4 h-4 invert" />
                                <span>{INKSPIRE.location}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <Icon name=icons::PHONE class="w-4 h-4 invert" />
                                <span>{INKSPIRE.phone_line()}</span>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-cyan-400">"Our Services"</h3>
                        <ul class="space-y-2 text-sm">
                            {service_catalog().iter().map(|service| view! {
                                <li>
                                    <A href=format!("/book?service={}", service.id) attr:class="text-gray-400 hover:text-white">
                                        {service.title.as_str()}
                                    </A>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-cyan-400">"What We Do"</h3>
                        <ul class="space-y-2 text-sm">
                            {INKSPIRE.service_lines.iter().map(|line| view! {
                                <li class="text-gray-400">{*line}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 text-center md:text-right">
                    <p class="text-gray-400 text-sm">
                        {format!("{} © All rights reserved.", INKSPIRE.name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
