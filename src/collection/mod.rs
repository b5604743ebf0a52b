//! Media link collection and input editor
//!
//! The collection is ordered and append-only: insertion order is
//! significant, duplicates are permitted, and every link carries an
//! append-order id so duplicate URLs stay distinguishable.

use tracing::{debug, info};

/// Links seeded into the gallery on first connection
pub const STARTER_LINKS: [&str; 3] = [
    "https://media.giphy.com/media/hTDFjlnLtjkDKzATgp/giphy-downsized-large.gif",
    "https://media.giphy.com/media/Zg51pFbwzcTcI/giphy.gif",
    "https://media.giphy.com/media/xThtauMOoaoOSQgpFK/giphy.gif",
];

/// One entry in the gallery
///
/// `id` is the append-order sequence number and is the render identity;
/// two submissions of the same URL get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub id: u64,
    pub url: String,
}

/// 有序的媒体链接集合
#[derive(Debug, Default)]
pub struct LinkCollection {
    links: Vec<MediaLink>,
    next_id: u64,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self) -> &[MediaLink] {
        &self.links
    }

    pub fn get(&self, index: usize) -> Option<&MediaLink> {
        self.links.get(index)
    }

    /// Append one link to the end of the collection
    pub fn append<T: Into<String>>(&mut self, url: T) -> MediaLink {
        let link = MediaLink {
            id: self.next_id,
            url: url.into(),
        };
        self.next_id += 1;
        self.links.push(link.clone());
        link
    }

    /// Replace the collection content with the given sequence
    ///
    /// Ids keep counting up across a seed so they are never reused.
    pub fn seed<I, T>(&mut self, urls: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.links.clear();
        for url in urls {
            self.append(url);
        }
    }
}

/// Pending-input editor over a [`LinkCollection`]
#[derive(Debug, Default)]
pub struct LinkEditor {
    collection: LinkCollection,
    pending_input: String,
}

impl LinkEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &LinkCollection {
        &self.collection
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replace the pending input unconditionally
    pub fn update_input<T: Into<String>>(&mut self, value: T) {
        self.pending_input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.pending_input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.pending_input.pop();
    }

    /// Submit the pending input
    ///
    /// A non-empty input is appended to the collection and the input is
    /// cleared. An empty input changes nothing; this is logged but never
    /// surfaced to the user as an error.
    pub fn submit(&mut self) -> Option<MediaLink> {
        if self.pending_input.is_empty() {
            debug!("Empty input, nothing submitted");
            return None;
        }

        let url = std::mem::take(&mut self.pending_input);
        info!("Gif link submitted: {}", url);
        Some(self.collection.append(url))
    }

    /// Seed the collection with the starter links
    pub fn seed_starters(&mut self) {
        self.collection.seed(STARTER_LINKS);
    }
}
