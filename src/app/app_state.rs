use std::sync::mpsc::{self, Receiver};

use crate::autocomplete::SearchBox;
use crate::config::StyleConfig;
use crate::suggest::SuggestionFetcher;
use crate::texture::Texture;

/// Application state
pub struct App {
    pub search: SearchBox,
    /// Textures picked so far, oldest first
    pub picked: Vec<Texture>,
    picked_rx: Receiver<Texture>,
    pub source_label: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(fetcher: SuggestionFetcher, style: StyleConfig, source_label: &str) -> Self {
        let (picked_tx, picked_rx) = mpsc::channel();
        let search = SearchBox::new(
            fetcher,
            style,
            Box::new(move |texture: &Texture| {
                let _ = picked_tx.send(texture.clone());
            }),
        );

        Self {
            search,
            picked: Vec::new(),
            picked_rx,
            source_label: source_label.to_string(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply completed fetches
    ///
    /// Returns true if anything on screen may have changed.
    pub fn tick(&mut self) -> bool {
        let fetched = self.search.poll_fetches();
        let picked = self.collect_picked();
        fetched || picked
    }

    pub(super) fn collect_picked(&mut self) -> bool {
        let before = self.picked.len();
        self.picked.extend(self.picked_rx.try_iter());
        self.picked.len() > before
    }

    pub fn into_picked(mut self) -> Vec<Texture> {
        self.collect_picked();
        self.picked
    }
}
