use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::error::TexsearchError;
use crate::texture::Texture;

/// Maximum number of textures returned for one query
pub const MAX_CATALOG_RESULTS: usize = 25;

/// In-memory texture list searched with fzf-style matching
pub struct Catalog {
    textures: Vec<Texture>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("textures", &self.textures.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(textures: Vec<Texture>) -> Self {
        Self {
            textures,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Parse a JSON array of textures
    pub fn from_json(json: &str) -> Result<Self, TexsearchError> {
        let textures: Vec<Texture> =
            serde_json::from_str(json).map_err(|e| TexsearchError::Catalog(e.to_string()))?;
        Ok(Self::new(textures))
    }

    pub fn from_file(path: &Path) -> Result<Self, TexsearchError> {
        let json = fs::read_to_string(path)?;
        let textures: Vec<Texture> = serde_json::from_str(&json)
            .map_err(|e| TexsearchError::Catalog(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(textures))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Rank textures against `query`
    ///
    /// Every whitespace-separated term must match. Name matches outrank
    /// description matches; ties keep catalog order.
    pub fn search(&self, query: &str) -> Vec<Texture> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, i64)> = self
            .textures
            .iter()
            .enumerate()
            .filter_map(|(idx, texture)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.score_term(texture, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(MAX_CATALOG_RESULTS)
            .map(|(idx, _)| self.textures[idx].clone())
            .collect()
    }

    fn score_term(&self, texture: &Texture, term: &str) -> Option<i64> {
        self.matcher
            .fuzzy_match(&texture.name, term)
            .map(|score| score * 2)
            .or_else(|| self.matcher.fuzzy_match(&texture.description, term))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
