//! 404 page for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::INKSPIRE;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found | {}", INKSPIRE.name)/>
        <div class="min-h-screen bg-slate-900 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 invert" />
                </div>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-base btn-primary">"Go Home"</A>
                    <A href="/book" attr:class="btn-base btn-outline">"Book a Consultation"</A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{format!("© {}", INKSPIRE.name)}</p>
            </div>
        </div>
    }
}
