use leptos::prelude::*;

/// Заголовок экрана: название, подзаголовок и кнопки действий справа
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Например, "Showing 4 of 10"
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Кнопки действий (пустой фрагмент, если не нужны)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
