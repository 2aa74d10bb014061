use leptos::prelude::*;
use leptos::task::spawn_local;
use waitlist::{join, FormView, ModalCopy, ModalKind, StoreConfig, SubmissionState, SupabaseStore};

const STORE_CONFIG: &str = include_str!(concat!(env!("OUT_DIR"), "/config.toml"));

#[component]
fn App(store: SupabaseStore) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col md:flex-row font-sans relative" style="background-color: #ECFDF5">
            <Sidebar />
            <main class="flex-1 flex flex-col p-8 md:p-24 relative">
                <div class="flex items-center gap-2 mb-8">
                    <span class="w-5 h-5 rounded-full animate-pulse" style="background-color: #F59E0B"></span>
                    <span class="text-xs font-bold uppercase tracking-widest" style="color: #6B7280">
                        "Beta Version Launching Soon"
                    </span>
                </div>

                <section class="max-w-xl">
                    <h1 class="text-5xl md:text-6xl font-black mb-8 leading-[1.1]" style="color: #0F172A">
                        "Ready to " <span style="color: #16A34A">"Buy & Sell?"</span>
                    </h1>
                    <p class="text-lg mb-12 leading-relaxed" style="color: #6B7280">
                        "Stop wasting time on sketchy group chats. Join the waitlist for the only marketplace "
                        "officially designed for Nigerian campus life."
                    </p>
                    <WaitlistForm store=store />
                </section>

                <footer class="mt-auto pt-12 flex justify-between items-center border-t" style="border-color: #E5E7EB">
                    <p class="text-xs font-semibold" style="color: #6B7280">"© 2026 TRADESQUARE NOVA"</p>
                    <div class="flex gap-4">
                        <span class="text-xs font-bold cursor-pointer" style="color: #0F172A">"Privacy"</span>
                        <span class="text-xs font-bold cursor-pointer" style="color: #0F172A">"Campus Terms"</span>
                    </div>
                </footer>
            </main>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-full md:w-1/3 p-8 md:p-12 flex flex-col justify-between text-white relative overflow-hidden" style="background-color: #0F172A">
            <div class="relative z-10">
                <div class="flex items-center gap-3 mb-12">
                    <div class="w-12 h-12 rounded-2xl flex items-center justify-center shadow-lg text-xl font-black" style="background-color: #16A34A">
                        "T"
                    </div>
                    <span class="text-2xl font-bold tracking-tight">"TradeSquare"</span>
                </div>
                <h2 class="text-4xl font-extrabold leading-tight mb-6">
                    "The Student " <br />
                    <span style="color: #22C55E">"Economy"</span> <br />
                    "Redefined."
                </h2>
                <div class="space-y-6 mt-12">
                    <Feature text="Instant campus-wide reach for your listings." />
                    <Feature text="Verified student profiles for safe trading." />
                </div>
            </div>
            <div class="absolute -bottom-20 -left-20 w-64 h-64 rounded-full opacity-10" style="border: 40px solid #16A34A"></div>
        </aside>
    }
}

#[component]
fn Feature(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <span class="mt-1 font-bold" style="color: #22C55E">"✓"</span>
            <p class="text-sm opacity-80" style="color: #E5E7EB">{text}</p>
        </div>
    }
}

/// Email input, submit button, inline error banner and the result dialog.
#[component]
fn WaitlistForm(store: SupabaseStore) -> impl IntoView {
    let state = RwSignal::new(SubmissionState::new());
    let form = Memo::new(move |_| state.with(|s| FormView::from(s)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Refused while a request is in flight, so at most one insert runs
        let mut record = None;
        state.update(|s| record = s.begin_submit());
        let Some(record) = record else {
            return;
        };

        let store = store.clone();
        spawn_local(async move {
            let outcome = join(&store, &record).await;
            state.update(|s| s.resolve(outcome));
        });
    };

    let dismiss = Callback::new(move |_: ()| state.update(|s| s.dismiss()));

    view! {
        <form
            on:submit=on_submit
            class="p-1 rounded-2xl bg-white shadow-xl border flex flex-col md:flex-row gap-2"
            style="border-color: #E5E7EB"
        >
            <input
                type="email"
                placeholder="student@university.edu"
                class="flex-1 px-6 py-5 rounded-xl text-lg outline-none transition-all disabled:opacity-50"
                style="color: #111827"
                required
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_email(value));
                }
                disabled=move || form.with(|f| f.locked)
            />
            <button
                type="submit"
                disabled=move || form.with(|f| f.locked)
                class="px-8 py-5 rounded-xl font-bold text-lg flex items-center justify-center gap-3 transition-all hover:brightness-110 active:scale-95 text-white disabled:opacity-70"
                style="background-color: #16A34A"
            >
                {move || {
                    if form.with(|f| f.busy) {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { "Join Waitlist" <span aria-hidden="true">"→"</span> }.into_any()
                    }
                }}
            </button>
        </form>

        {move || form.with(|f| f.banner.clone()).map(|message| view! { <ErrorBanner message=message /> })}
        {move || form.with(|f| f.modal).map(|copy| view! { <ResultModal copy=copy on_dismiss=dismiss /> })}
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <span
            class="inline-block w-6 h-6 rounded-full border-4 border-white/40 border-t-white animate-spin"
            role="status"
            aria-label="Joining"
        ></span>
    }
}

#[component]
fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div
            class="mt-6 flex items-center gap-2 p-4 rounded-xl border bg-white"
            style="border-color: #F59E0B; color: #0F172A"
            role="alert"
        >
            <span class="font-bold" style="color: #F59E0B">"!"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

#[component]
fn ResultModal(copy: ModalCopy, on_dismiss: Callback<()>) -> impl IntoView {
    let (badge_color, badge) = match copy.kind {
        ModalKind::Joined => ("#ECFDF5", view! { <span class="text-4xl font-black" style="color: #16A34A">"✓"</span> }.into_any()),
        ModalKind::AlreadyJoined => ("#FFFBEB", view! { <span class="text-4xl" style="color: #F59E0B">"♥"</span> }.into_any()),
    };

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-[#0F172A]/60 backdrop-blur-sm"
                on:click=move |_| on_dismiss.run(())
            ></div>

            <div
                class="relative w-full max-w-sm rounded-3xl p-8 shadow-2xl text-center"
                style="background-color: #FFFFFF"
                role="dialog"
                aria-modal="true"
            >
                <button
                    class="absolute top-4 right-4 p-2 rounded-full hover:bg-gray-100 transition-colors"
                    style="color: #6B7280"
                    aria-label="Close"
                    on:click=move |_| on_dismiss.run(())
                >
                    "×"
                </button>

                <div class="flex justify-center mb-6">
                    <div
                        class="relative w-20 h-20 rounded-full flex items-center justify-center"
                        style=format!("background-color: {}", badge_color)
                    >
                        {badge}
                    </div>
                </div>

                <h3 class="text-2xl font-black mb-2" style="color: #0F172A">{copy.title}</h3>
                <p class="mb-8" style="color: #6B7280">{copy.body}</p>

                <button
                    class="w-full py-4 rounded-xl font-bold text-white transition-all active:scale-95"
                    style="background-color: #16A34A"
                    on:click=move |_| on_dismiss.run(())
                >
                    {copy.acknowledge}
                </button>
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = match StoreConfig::from_toml_str(STORE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{:#}", err);
            StoreConfig::new("", "")
        }
    };
    log::info!("Waitlist endpoint: {}", config.table_endpoint());

    let store = SupabaseStore::new(config);
    leptos::mount::mount_to_body(move || view! { <App store=store /> })
}
