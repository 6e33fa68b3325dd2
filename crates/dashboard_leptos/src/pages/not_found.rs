use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Halaman Tidak Ditemukan"</h1>
            <p>"Halaman yang Anda cari tidak tersedia."</p>
            <p>
                <a href="/">"Kembali ke halaman masuk"</a>
            </p>
        </div>
    }
}
