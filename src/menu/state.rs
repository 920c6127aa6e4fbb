//! Restaurant Menu State Management
//!
//! This module owns the authoritative dish list for a session, along with
//! the session-level application state (widget assets, session identity).

use super::helpers::format_price;
use super::models::{Dish, DishCandidate};
use crate::error::ValidationError;
use std::{
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};
use uuid::Uuid;

const WIDGET_HTML_FILE: &str = "restaurant-menu.html";
const WIDGET_BUILD_PREFIX: &str = "restaurant-menu-";

// =============================================================================
// Menu Store
// =============================================================================

/// Ordered list of dishes plus the id counter that numbers them.
///
/// Dishes stay in insertion order. Ids come from a counter that only ever
/// moves forward, so an id is never handed out twice, even after the dish
/// holding it has been removed.
#[derive(Debug)]
pub struct MenuStore {
    dishes: Vec<Dish>,
    next_id: u64,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore {
    /// Creates an empty store whose first dish will get id 1.
    pub fn new() -> Self {
        Self {
            dishes: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a dish built from `candidate` and returns it.
    ///
    /// The candidate is re-checked here; an invalid one is rejected without
    /// consuming an id or touching the list.
    pub fn add(&mut self, candidate: DishCandidate) -> Result<Dish, ValidationError> {
        let dish_name = candidate.dish_name.trim();
        let dish_description = candidate.dish_description.trim();
        if dish_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if dish_description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if !candidate.dish_price.is_finite() || candidate.dish_price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        let dish = Dish {
            id: self.next_id,
            course_type: candidate.course_type,
            dish_name: dish_name.to_string(),
            dish_description: dish_description.to_string(),
            dish_price: format_price(candidate.dish_price),
        };
        self.next_id += 1;
        self.dishes.push(dish.clone());

        debug!(dish_id = dish.id, course = %dish.course_type, "dish added");
        Ok(dish)
    }

    /// Removes the dish with `id`, if there is one.
    ///
    /// Unknown ids are a no-op. The id counter is left alone either way.
    pub fn remove(&mut self, id: u64) -> Option<Dish> {
        let position = self.dishes.iter().position(|d| d.id == id)?;
        let removed = self.dishes.remove(position);
        debug!(dish_id = id, "dish removed");
        Some(removed)
    }

    /// Current dishes, oldest first.
    pub fn snapshot(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// The id the next successful `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// One application session: its menu and the assets used to render it
pub struct AppState {
    /// The session's menu. Requests mutate it one at a time.
    menu: Mutex<MenuStore>,

    /// Identifies this session to the widget.
    pub session_id: String,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a session with an empty menu and locates the assets directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_assets_dir(Self::locate_assets_directory(&current_dir))
    }

    /// Creates a session with an empty menu serving assets from `assets_dir`
    pub fn with_assets_dir(assets_dir: PathBuf) -> Self {
        let session_id = Uuid::new_v4().simple().to_string();
        info!(%session_id, assets_dir = %assets_dir.display(), "menu session started");

        Self {
            menu: Mutex::new(MenuStore::new()),
            session_id,
            assets_dir,
        }
    }

    /// Locks the session's menu.
    ///
    /// Every store mutation is a single push or remove, so a poisoned lock
    /// still guards a consistent store and is recovered.
    pub fn menu(&self) -> MutexGuard<'_, MenuStore> {
        self.menu.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// First of `./assets` and `../assets` that exists, else `assets`.
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        current_dir
            .ancestors()
            .take(2)
            .map(|dir| dir.join("assets"))
            .find(|candidate| candidate.is_dir())
            .unwrap_or_else(|| PathBuf::from("assets"))
    }

    /// Reads the menu widget HTML from the assets directory.
    ///
    /// `restaurant-menu.html` wins; otherwise the lexicographically last
    /// `restaurant-menu-*.html` build is used.
    pub async fn load_widget_html(&self) -> io::Result<String> {
        let path = self.widget_html_path().await?;
        debug!(path = %path.display(), "loading widget html");
        tokio::fs::read_to_string(path).await
    }

    async fn widget_html_path(&self) -> io::Result<PathBuf> {
        let primary = self.assets_dir.join(WIDGET_HTML_FILE);
        if tokio::fs::try_exists(&primary).await? {
            return Ok(primary);
        }

        let mut latest_build: Option<PathBuf> = None;
        let mut entries = tokio::fs::read_dir(&self.assets_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_build = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(WIDGET_BUILD_PREFIX) && n.ends_with(".html"));
            if is_build && latest_build.as_ref().map_or(true, |latest| path > *latest) {
                latest_build = Some(path);
            }
        }

        latest_build.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no menu widget html in {}", self.assets_dir.display()),
            )
        })
    }
}
