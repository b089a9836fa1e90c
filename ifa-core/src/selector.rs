//! State machine behind the autocomplete location selectors.
//!
//! The machine is pure and synchronous. Loading candidates is a separate
//! async stage owned by the caller: `begin_fetch` hands out a ticket,
//! the caller resolves the candidates however it likes (backend, fallback
//! table), and `finish_fetch` installs them unless a newer fetch has
//! started in the meantime. Filtering is the second, synchronous stage and
//! never touches the remote layer.

/// Interaction phase of a selector.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SelectorPhase {
    Idle,
    FetchingCandidates,
    Typing,
    Open,
    Selected,
}

/// Case-insensitive substring filter over a candidate list.
///
/// An empty term passes the list through unchanged.
pub fn filter_candidates(candidates: &[String], term: &str) -> Vec<String> {
    if term.is_empty() {
        return candidates.to_vec();
    }
    let needle = term.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Transient session state for one autocomplete selector.
///
/// Destroyed (via `reset`) whenever the bound scope changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorMachine {
    phase: SelectorPhase,
    candidates: Vec<String>,
    filtered: Vec<String>,
    search_term: String,
    committed: String,
    open: bool,
    loading: bool,
    fetch_seq: u64,
}

impl Default for SelectorMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorMachine {
    pub fn new() -> Self {
        SelectorMachine {
            phase: SelectorPhase::Idle,
            candidates: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            committed: String::new(),
            open: false,
            loading: false,
            fetch_seq: 0,
        }
    }

    /// Invalidate current candidates and start a fetch cycle. Returns the
    /// ticket the eventual `finish_fetch` must present; a newer
    /// `begin_fetch` makes all earlier tickets stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.candidates.clear();
        self.filtered.clear();
        self.open = false;
        self.loading = true;
        self.phase = SelectorPhase::FetchingCandidates;
        self.fetch_seq
    }

    /// Install fetched candidates. Stale tickets are discarded silently
    /// and leave the machine untouched; returns whether the ticket won.
    pub fn finish_fetch(&mut self, ticket: u64, candidates: Vec<String>) -> bool {
        if ticket != self.fetch_seq {
            return false;
        }
        self.filtered = filter_candidates(&candidates, &self.search_term);
        self.candidates = candidates;
        self.loading = false;
        if self.phase == SelectorPhase::FetchingCandidates {
            self.phase = SelectorPhase::Idle;
        }
        true
    }

    /// Keystroke: recompute the filtered list locally and force the
    /// dropdown open.
    pub fn set_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.filtered = filter_candidates(&self.candidates, term);
        self.open = true;
        self.phase = SelectorPhase::Typing;
    }

    /// Focus re-opens the dropdown with the current filter intact.
    pub fn open_dropdown(&mut self) {
        if self.loading {
            return;
        }
        self.open = true;
        if self.phase == SelectorPhase::Idle {
            self.phase = SelectorPhase::Open;
        }
    }

    /// Commit a candidate: mirror it into the visible search text and
    /// close the dropdown. Re-enterable by further typing or focus.
    pub fn select(&mut self, value: &str) {
        self.committed = value.to_string();
        self.search_term = value.to_string();
        self.filtered = filter_candidates(&self.candidates, value);
        self.open = false;
        self.phase = SelectorPhase::Selected;
    }

    /// Click-outside dismissal: close without touching the committed value.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Full reset for a scope change. The fetch sequence keeps counting so
    /// an in-flight fetch from before the reset can never land.
    pub fn reset(&mut self) {
        let seq = self.fetch_seq + 1;
        *self = SelectorMachine::new();
        self.fetch_seq = seq;
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the dropdown would be empty and a "no results" affordance
    /// should render instead.
    pub fn no_matches(&self) -> bool {
        self.filtered.is_empty() && !self.loading
    }
}
