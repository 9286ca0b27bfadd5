//! Locale-switch controller.
//!
//! Owns the current locale and drives fetch-and-render cycles. Cycles may
//! overlap (a viewer can click the toggle again while a fetch is in flight);
//! they are serialized by outcome rather than by blocking. A cycle applies its
//! result only if the locale it captured when it started is still the live
//! locale when its fetch completes, so the most recent request always wins
//! regardless of the order responses arrive in.
//!
//! Everything runs on a single thread: state lives in `Cell`/`RefCell` and
//! the only suspension point is the content fetch.

use crate::i18n::Locale;
use crate::prefs::{PreferenceStore, PREFERRED_LANG_KEY};
use crate::render::render;
use crate::source::ContentSource;
use crate::view::HostDocument;
use std::cell::{Cell, Ref, RefCell};
use tracing::{debug, info, warn};

/// A fetch-and-render cycle in the `Requested` state.
///
/// Carries the locale captured when the cycle was requested; pass it to
/// [`LocaleController::run`] to move it through `Awaiting` to an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a cycle does nothing until it is run"]
pub struct Cycle {
    requested: Locale,
}

impl Cycle {
    pub fn requested(&self) -> Locale {
        self.requested
    }
}

/// Terminal state of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Content was fetched and rendered.
    Applied,
    /// A newer switch happened while the fetch was in flight; nothing was
    /// rendered, whether the fetch succeeded or failed.
    DiscardedStale,
    /// The fetch failed and the content area now shows the failure message.
    FailedApplied,
}

/// Whether a cycle that requested `requested` may still touch the view.
pub fn is_current(requested: Locale, live: Locale) -> bool {
    requested == live
}

/// Pick the startup locale: a valid stored preference, else the host
/// document's declared language if supported, else the default locale.
pub fn resolve_startup_locale(
    prefs: &dyn PreferenceStore,
    declared_language: Option<&str>,
) -> Locale {
    match prefs.get(PREFERRED_LANG_KEY) {
        Ok(Some(stored)) => {
            if let Ok(locale) = Locale::from_code(&stored) {
                return locale;
            }
            debug!("Ignoring unsupported stored locale '{}'", stored);
        }
        Ok(None) => {}
        Err(e) => debug!("Preference store unavailable: {}", e),
    }

    declared_language
        .and_then(|code| Locale::from_code(code).ok())
        .unwrap_or_else(Locale::default_locale)
}

pub struct LocaleController<S, P, V> {
    source: S,
    prefs: P,
    view: RefCell<V>,
    current: Cell<Locale>,
    fetches: Cell<usize>,
}

impl<S, P, V> LocaleController<S, P, V>
where
    S: ContentSource,
    P: PreferenceStore,
    V: HostDocument,
{
    /// Resolve the startup locale and label the toggle. Call [`start`] and
    /// run the returned cycle to load the first document.
    ///
    /// [`start`]: LocaleController::start
    pub fn new(source: S, prefs: P, view: V) -> Self {
        let declared = view.declared_language();
        let current = resolve_startup_locale(&prefs, declared.as_deref());
        info!("Starting with locale {}", current);

        let controller = Self {
            source,
            prefs,
            view: RefCell::new(view),
            current: Cell::new(current),
            fetches: Cell::new(0),
        };
        controller.update_toggle();
        controller
    }

    /// The initial cycle, for the resolved startup locale.
    pub fn start(&self) -> Cycle {
        Cycle {
            requested: self.current.get(),
        }
    }

    pub fn current(&self) -> Locale {
        self.current.get()
    }

    /// Switch to the locale named by `code`.
    ///
    /// Returns `None` (and changes nothing) when the code is unsupported or
    /// already current. Otherwise the locale state, stored preference and
    /// toggle label are updated before this returns, and the returned cycle
    /// must be run to load the content.
    pub fn switch_to(&self, code: &str) -> Option<Cycle> {
        let Ok(locale) = Locale::from_code(code) else {
            debug!("Ignoring switch to unsupported locale '{}'", code);
            return None;
        };
        if locale == self.current.get() {
            return None;
        }

        self.current.set(locale);
        if let Err(e) = self.prefs.set(PREFERRED_LANG_KEY, locale.code()) {
            debug!("Could not persist preferred locale: {}", e);
        }
        self.update_toggle();
        info!("Switched to locale {}", locale);

        Some(Cycle { requested: locale })
    }

    /// What a click on the toggle does: switch to the next locale.
    pub fn toggle(&self) -> Option<Cycle> {
        self.switch_to(self.current.get().next().code())
    }

    /// Fetch the cycle's document and render it if the cycle is still current.
    pub async fn run(&self, cycle: Cycle) -> CycleOutcome {
        let requested = cycle.requested;
        self.fetches.set(self.fetches.get() + 1);
        debug!("Fetching content for {}", requested);

        let result = self.source.fetch(requested).await;

        let live = self.current.get();
        if !is_current(requested, live) {
            info!(
                "Discarding stale {} content (current locale is {})",
                requested, live
            );
            return CycleOutcome::DiscardedStale;
        }

        let mut view = self.view.borrow_mut();
        match result {
            Ok(document) => {
                render(&document, requested, &mut *view);
                info!("Rendered {} content", requested);
                CycleOutcome::Applied
            }
            Err(e) => {
                warn!("Failed to load {} content: {}", requested, e);
                view.show_error(requested.strings().load_failed);
                CycleOutcome::FailedApplied
            }
        }
    }

    /// `switch_to` followed by `run`, for callers that do not need to
    /// interleave cycles.
    pub async fn switch_and_render(&self, code: &str) -> Option<CycleOutcome> {
        let cycle = self.switch_to(code)?;
        Some(self.run(cycle).await)
    }

    /// Number of cycles that have started fetching.
    pub fn fetches_started(&self) -> usize {
        self.fetches.get()
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// The toggle names the language the next click switches *to*.
    fn update_toggle(&self) {
        let target = self.current.get().next().strings();
        self.view
            .borrow_mut()
            .set_toggle(target.toggle_label, target.switch_prompt);
    }
}
