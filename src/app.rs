//! Root application component: contexts, routing, and the redirect bridge.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::notice_banner::NoticeBanner;
use crate::components::route_guard::Guarded;
use crate::net::http::Http;
use crate::pages::about::AboutPage;
use crate::pages::admin::categories::AdminCategoriesPage;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::post_edit::AdminPostEditPage;
use crate::pages::admin::post_list::AdminPostListPage;
use crate::pages::admin::settings::AdminSettingsPage;
use crate::pages::admin::tags::AdminTagsPage;
use crate::pages::archives::ArchivesPage;
use crate::pages::category::CategoryPostsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::post_detail::PostDetailPage;
use crate::pages::register::RegisterPage;
use crate::pages::tag::TagPostsPage;
use crate::routing::guard::Notice;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Performs the navigation the HTTP wrapper requests after clearing an
/// invalid session. Lives inside the `Router` so `use_navigate` is
/// available; the wrapper itself never sees the router.
#[component]
fn RedirectBridge() -> impl IntoView {
    let forced = expect_context::<RwSignal<Option<String>>>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(target) = forced.get() {
            leptos::logging::log!("session expired, redirecting to {target}");
            navigate(&target, Default::default());
        }
    });
}

/// Root component.
///
/// Provides the session store, the API client, the guard notice slot, and
/// the forced-redirect signal, then sets up client-side routing. Guarded
/// routes are wrapped in [`Guarded`] with their pattern from the static
/// route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::load(BrowserStorage));
    let forced_redirect = RwSignal::new(None::<String>);
    let notices = RwSignal::new(None::<Notice>);
    let http = Http::new(session, forced_redirect);

    provide_context(session);
    provide_context(forced_redirect);
    provide_context(notices);
    provide_context(http);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="My Blog"/>

        <Router>
            <RedirectBridge/>
            <header class="site-header">
                <a class="site-header__brand" href="/">"My Blog"</a>
                <nav class="site-header__nav">
                    <a href="/">"Home"</a>
                    <a href="/archives">"Archives"</a>
                    <a href="/about">"About"</a>
                </nav>
            </header>
            <NoticeBanner/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("post"), ParamSegment("slug"))
                        view=PostDetailPage
                    />
                    <Route
                        path=(StaticSegment("category"), ParamSegment("slug"))
                        view=CategoryPostsPage
                    />
                    <Route path=(StaticSegment("tag"), ParamSegment("slug")) view=TagPostsPage/>
                    <Route path=StaticSegment("archives") view=ArchivesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>

                    <Route
                        path=(StaticSegment("admin"), StaticSegment("login"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/login">
                                    <LoginPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("register"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/register">
                                    <RegisterPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/dashboard">
                                    <AdminDashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("posts"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/posts">
                                    <AdminPostListPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("posts"),
                            StaticSegment("create"),
                        )
                        view=|| {
                            view! {
                                <Guarded route="/admin/posts/create">
                                    <AdminPostEditPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("posts"),
                            StaticSegment("edit"),
                            ParamSegment("id"),
                        )
                        view=|| {
                            view! {
                                <Guarded route="/admin/posts/edit/:id">
                                    <AdminPostEditPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("categories"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/categories">
                                    <AdminCategoriesPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("tags"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/tags">
                                    <AdminTagsPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("settings"))
                        view=|| {
                            view! {
                                <Guarded route="/admin/settings">
                                    <AdminSettingsPage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
            <footer class="site-footer">
                <p>"Powered by a Rust + WASM front-end."</p>
            </footer>
        </Router>
    }
}
