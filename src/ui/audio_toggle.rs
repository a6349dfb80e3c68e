//! Ambient audio play/mute toggle
//!
//! Tries to start the track on load. When the browser refuses autoplay the
//! controller moves to `Denied` and the button shows the muted affordance
//! until the user clicks it.

use leptos::prelude::*;

use crate::core::audio::AMBIENT_VOLUME;
use crate::core::{AudioController, Persistence};

#[cfg(not(feature = "ssr"))]
async fn play(audio: &leptos::web_sys::HtmlAudioElement) -> Result<(), wasm_bindgen::JsValue> {
    let promise = audio.play()?;
    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ())
}

#[cfg(not(feature = "ssr"))]
fn start_playback(audio: leptos::web_sys::HtmlAudioElement, controller: RwSignal<AudioController>) {
    use leptos::logging::log;
    use leptos::task::spawn_local;

    spawn_local(async move {
        match play(&audio).await {
            Ok(()) => {
                controller.try_update(|c| c.playback_started());
            }
            Err(err) => {
                log!("ambient audio blocked: {:?}", err);
                controller.try_update(|c| c.playback_denied());
            }
        }
    });
}

#[component]
pub fn AudioToggle(
    /// Track URL
    #[prop(into)]
    src: String,
    /// Remember the on/off choice across visits
    #[prop(default = true)]
    remember: bool,
    /// Playback volume in `[0, 1]`
    #[prop(default = AMBIENT_VOLUME)]
    volume: f64,
) -> impl IntoView {
    #[allow(unused_variables)]
    let volume = volume.clamp(0.0, 1.0);
    let persistence = if remember {
        Persistence::Remember
    } else {
        Persistence::Off
    };
    // Rendered paused on the server; the real state is known after load
    let controller = RwSignal::new(AudioController::new(persistence, None));
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::browser::LocalStorageStore;

        audio_ref.on_load(move |audio| {
            let loaded = AudioController::load(persistence, &LocalStorageStore);
            controller.set(loaded);

            audio.set_loop(true);
            audio.set_volume(volume);
            if loaded.wants_autoplay() {
                start_playback(audio, controller);
            }
        });
    }

    let on_click = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::PlaybackAction;
            use crate::ui::browser::LocalStorageStore;

            let Some(audio) = audio_ref.get_untracked() else {
                return;
            };
            let action = controller.try_update(|c| {
                let action = c.toggle();
                c.persist(&LocalStorageStore);
                action
            });
            match action {
                Some(PlaybackAction::Pause) => {
                    let _ = audio.pause();
                    controller.update(|c| c.playback_paused());
                }
                Some(PlaybackAction::Play) => start_playback(audio, controller),
                None => {}
            }
        }
    };

    let affordance = move || controller.get().affordance();

    view! {
        <audio node_ref=audio_ref src=src preload="auto"></audio>
        <button
            type="button"
            class="audio-toggle"
            class:muted=move || affordance().muted
            aria-pressed=move || affordance().aria_pressed()
            aria-label=move || affordance().label
            on:click=on_click
        >
            {move || affordance().icon}
        </button>
    }
}
