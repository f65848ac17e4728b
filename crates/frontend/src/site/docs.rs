use leptos::prelude::*;
use leptos_router::components::A;

const QUICK_START: [(&str, &str); 5] = [
    (
        "Sign in",
        "Use the account created by your administrator. The session survives page reloads until you sign out or the token expires.",
    ),
    (
        "Import rules",
        "Open Rules and either upload a .nfo or .txt rule file or import one from scenerules.org. Scene, section and year are read from the file when left empty.",
    ),
    (
        "Review releases",
        "The Releases page lists every release with filters on type, status and free text. Open a release to see its metadata.",
    ),
    (
        "Run jobs",
        "From a release page, queue NFOFIX, READNFO, REPACK or DIRFIX. Each job is processed by the backend; the confirmation appears as a notification.",
    ),
    (
        "Troubleshoot",
        "Enable debug mode from the debug panel to keep a log of the last 50 API calls with headers, bodies and responses.",
    ),
];

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <div class="site-page docs">
            <h1>"Quick start"</h1>
            <ol class="docs__steps">
                {QUICK_START
                    .iter()
                    .map(|(title, text)| view! {
                        <li class="docs__step">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
            <p>
                <A href="/about">"Back to the overview"</A>
            </p>
        </div>
    }
}
