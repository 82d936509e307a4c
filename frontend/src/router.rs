use crate::download::api::{clear_history, fetch_video_info, load_history, request_download};
use crate::download::components::{alert, HistoryList, UrlForm, VideoPreview};
use crate::download::save::{save_file, DOWNLOAD_FILENAME};
use crate::models::{HistoryEntry, VideoInfo};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <DownloaderApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the downloader"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(DownloaderApp)]
pub fn downloader_app() -> Html {
    let url = use_state(String::new);
    let folder = use_state(String::new);
    let video_info = use_state(|| None::<VideoInfo>);
    let selected_format = use_state(String::new);
    let history = use_state(Vec::<HistoryEntry>::default);
    let history_error = use_state(Option::<String>::default);
    let fetching = use_state(|| false);
    let downloading = use_state(|| false);

    // Per-operation request counters. A response is applied only when its
    // number is still the latest issued, so a slow response never overwrites
    // the result of a newer request.
    let info_seq = use_mut_ref(|| 0u64);
    let download_seq = use_mut_ref(|| 0u64);
    let history_seq = use_mut_ref(|| 0u64);

    let refresh_history = {
        let history = history.clone();
        let history_error = history_error.clone();
        let history_seq = history_seq.clone();

        Callback::from(move |_: ()| {
            *history_seq.borrow_mut() += 1;
            let seq = *history_seq.borrow();

            let history = history.clone();
            let history_error = history_error.clone();
            let history_seq = history_seq.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = load_history().await;
                if *history_seq.borrow() != seq {
                    return;
                }
                match result {
                    Ok(entries) => {
                        history.set(entries);
                        history_error.set(None);
                    }
                    Err(e) => {
                        history_error.set(Some(format!("Failed to load history: {e}")));
                    }
                }
            });
        })
    };

    // Load history once on mount
    {
        let refresh_history = refresh_history.clone();
        use_effect_with((), move |_| {
            refresh_history.emit(());
            || ()
        });
    }

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            url.set(input_value);
        })
    };

    let on_folder_input = {
        let folder = folder.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            folder.set(input_value);
        })
    };

    let on_format_change = {
        let selected_format = selected_format.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            selected_format.set(value);
        })
    };

    let on_fetch = {
        let url = url.clone();
        let video_info = video_info.clone();
        let selected_format = selected_format.clone();
        let fetching = fetching.clone();
        let info_seq = info_seq.clone();
        let refresh_history = refresh_history.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let request_url = (*url).clone();
            *info_seq.borrow_mut() += 1;
            let seq = *info_seq.borrow();

            let video_info = video_info.clone();
            let selected_format = selected_format.clone();
            let fetching = fetching.clone();
            let info_seq = info_seq.clone();
            let refresh_history = refresh_history.clone();

            fetching.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_video_info(&request_url).await;
                if *info_seq.borrow() != seq {
                    return;
                }
                match result {
                    Ok(info) => {
                        selected_format.set(
                            info.formats
                                .first()
                                .map(|f| f.format_id.clone())
                                .unwrap_or_default(),
                        );
                        video_info.set(Some(info));
                        refresh_history.emit(());
                    }
                    // Extraction failures come back verbatim from the backend;
                    // the previous preview stays untouched.
                    Err(message) => alert(&message),
                }
                fetching.set(false);
            });
        })
    };

    let on_download = {
        let url = url.clone();
        let selected_format = selected_format.clone();
        let folder = folder.clone();
        let downloading = downloading.clone();
        let download_seq = download_seq.clone();
        let refresh_history = refresh_history.clone();

        Callback::from(move |_: MouseEvent| {
            let request_url = (*url).clone();
            let format_id = (*selected_format).clone();
            let target_folder = (*folder).clone();

            *download_seq.borrow_mut() += 1;
            let seq = *download_seq.borrow();

            let downloading = downloading.clone();
            let download_seq = download_seq.clone();
            let refresh_history = refresh_history.clone();

            downloading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = request_download(&request_url, &format_id, &target_folder).await;
                if *download_seq.borrow() != seq {
                    return;
                }
                match result {
                    Ok(bytes) => match save_file(&bytes, DOWNLOAD_FILENAME) {
                        Ok(()) => refresh_history.emit(()),
                        Err(message) => alert(&format!("Failed to save file: {message}")),
                    },
                    Err(message) => alert(&message),
                }
                downloading.set(false);
            });
        })
    };

    let on_clear = {
        let history_error = history_error.clone();
        let refresh_history = refresh_history.clone();

        Callback::from(move |_: MouseEvent| {
            let history_error = history_error.clone();
            let refresh_history = refresh_history.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match clear_history().await {
                    Ok(()) => refresh_history.emit(()),
                    Err(e) => {
                        history_error.set(Some(format!("Failed to clear history: {e}")));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {"Video Downloader"}
                </h1>

                <UrlForm
                    url={(*url).clone()}
                    loading={*fetching}
                    on_url_input={on_url_input}
                    on_fetch={on_fetch}
                />

                {
                    if let Some(video) = &*video_info {
                        html! {
                            <VideoPreview
                                video={video.clone()}
                                selected_format={(*selected_format).clone()}
                                folder={(*folder).clone()}
                                downloading={*downloading}
                                on_format_change={on_format_change}
                                on_folder_input={on_folder_input}
                                on_download={on_download}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <HistoryList
                    entries={(*history).clone()}
                    error={(*history_error).clone()}
                    on_clear={on_clear}
                />
            </div>
        </div>
    }
}
