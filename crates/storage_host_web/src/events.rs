//! Bridge from [`ChangeBus`] notifications to DOM `CustomEvent`s on `window`.

use storage_host::{ChangeBus, ListenerId, StorageChangeEvent, StorageError};

#[derive(Debug, Clone, Copy, Default)]
/// Re-broadcasts storage change events as `local-storage-change` events on `window`.
///
/// The event `detail` is `{ key, value, action }`, with `value` set to `null` when the key is
/// absent.
pub struct WindowEventDispatcher;

impl WindowEventDispatcher {
    /// Dispatches `event` on `window`. A no-op on non-`wasm32` targets.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no window or the DOM event cannot be built or dispatched.
    pub fn dispatch(self, event: &StorageChangeEvent) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            use serde::Serialize;
            use storage_host::LOCAL_STORAGE_CHANGE_EVENT;

            let window = web_sys::window().ok_or(StorageError::NoHost)?;
            let detail = event
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| StorageError::Serialize(e.to_string()))?;
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            let dom_event =
                web_sys::CustomEvent::new_with_event_init_dict(LOCAL_STORAGE_CHANGE_EVENT, &init)
                    .map_err(|e| StorageError::Host(format!("CustomEvent init failed: {e:?}")))?;
            window
                .dispatch_event(&dom_event)
                .map(|_| ())
                .map_err(|e| StorageError::Host(format!("dispatchEvent failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
            Ok(())
        }
    }

    /// Subscribes this dispatcher to `bus` so every notification also reaches DOM listeners.
    ///
    /// Dispatch failures are dropped; the broadcast is fire-and-forget.
    pub fn attach(self, bus: &ChangeBus) -> ListenerId {
        bus.subscribe(move |event| {
            let _ = self.dispatch(event);
        })
    }
}
