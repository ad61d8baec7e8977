pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Каркас приложения:
/// ```text
/// +--------------------------+
/// |        TopHeader         |
/// +--------------------------+
/// |  Sidebar  |   Content    |
/// +--------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !is_open()>
                    {left()}
                </div>
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
