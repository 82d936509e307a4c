use crate::models::{HistoryEntry, VideoInfo};
use crate::utils::{
    embed_url, extract_video_id, format_history_line, format_history_meta, format_option_label,
};
use yew::prelude::*;

// Backend-reported errors block the page the same way the classic UI did.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    pub url: String,
    pub loading: bool,
    pub on_url_input: Callback<InputEvent>,
    pub on_fetch: Callback<web_sys::SubmitEvent>,
}

#[function_component(UrlForm)]
pub fn url_form(props: &UrlFormProps) -> Html {
    html! {
        <form onsubmit={props.on_fetch.clone()} class="flex mb-6">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Paste a video URL..."
                value={props.url.clone()}
                oninput={props.on_url_input.clone()}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Fetching..." } else { "Fetch Info" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPreviewProps {
    pub video: VideoInfo,
    pub selected_format: String,
    pub folder: String,
    pub downloading: bool,
    pub on_format_change: Callback<Event>,
    pub on_folder_input: Callback<InputEvent>,
    pub on_download: Callback<MouseEvent>,
}

#[function_component(VideoPreview)]
pub fn video_preview(props: &VideoPreviewProps) -> Html {
    html! {
        <div class="bg-gray-100 rounded-lg p-4 mb-6">
            <h2 class="text-xl font-semibold text-gray-800 mb-2">{ &props.video.title }</h2>
            <img
                src={props.video.thumbnail.clone()}
                alt="Video thumbnail"
                class="w-full rounded mb-4"
            />
            {
                // The embed id comes from the response URL, not the typed input.
                match extract_video_id(&props.video.url) {
                    Some(id) => html! {
                        <iframe
                            src={embed_url(&id)}
                            class="w-full aspect-video rounded mb-4"
                        />
                    },
                    None => html! {
                        <p class="text-sm text-gray-500 mb-4">
                            {"No inline preview available for this URL."}
                        </p>
                    },
                }
            }
            <div class="mb-4">
                <label class="block text-gray-700 text-sm font-bold mb-2">
                    {"Format"}
                </label>
                <select
                    class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    onchange={props.on_format_change.clone()}
                >
                    {
                        for props.video.formats.iter().map(|format| html! {
                            <option
                                value={format.format_id.clone()}
                                selected={format.format_id == props.selected_format}
                            >
                                { format_option_label(format) }
                            </option>
                        })
                    }
                </select>
            </div>
            <div class="mb-4">
                <label class="block text-gray-700 text-sm font-bold mb-2">
                    {"Destination folder"}
                </label>
                <input
                    type="text"
                    class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="e.g. downloads"
                    value={props.folder.clone()}
                    oninput={props.on_folder_input.clone()}
                />
            </div>
            <button
                onclick={props.on_download.clone()}
                disabled={props.downloading || props.video.formats.is_empty()}
                class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 disabled:opacity-50"
            >
                { if props.downloading { "Downloading..." } else { "Download" } }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub entries: Vec<HistoryEntry>,
    pub error: Option<String>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div>
            <div class="flex justify-between items-center mb-2">
                <h2 class="text-xl font-semibold text-gray-800">{"Download History"}</h2>
                <button
                    onclick={props.on_clear.clone()}
                    disabled={props.entries.is_empty()}
                    class="text-red-600 hover:text-red-900 text-sm disabled:opacity-50"
                >
                    {"Clear"}
                </button>
            </div>
            <ErrorMessage error_message={props.error.clone()} />
            {
                if props.entries.is_empty() {
                    html! {
                        <p class="text-center text-gray-500">{"No downloads yet."}</p>
                    }
                } else {
                    html! {
                        <ul class="divide-y divide-gray-200">
                            { for props.entries.iter().map(|entry| html! {
                                <li class="py-2">
                                    <p class="text-sm text-gray-900">{ format_history_line(entry) }</p>
                                    {
                                        if let Some(meta) = format_history_meta(entry) {
                                            html! { <p class="text-xs text-gray-500">{ meta }</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </li>
                            })}
                        </ul>
                    }
                }
            }
        </div>
    }
}
