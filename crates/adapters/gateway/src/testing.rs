//! Test doubles shared by the handler, factory and router tests.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing_subscriber::fmt::MakeWriter;

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::error::{NotFoundError, RecipeBoardError};
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::{Recipe, RecipeType};
use recipeboard_domain::time::now;

use crate::flush::LogFlush;

/// Recipe manager keeping everything in a map.
#[derive(Default)]
pub(crate) struct InMemoryRecipes {
    store: Mutex<HashMap<RecipeId, Recipe>>,
}

impl InMemoryRecipes {
    pub(crate) fn insert(&self, recipe: Recipe) {
        let id = recipe.id.clone().expect("seeded recipes carry an id");
        self.store.lock().unwrap().insert(id, recipe);
    }

    pub(crate) fn stored(&self, id: &str) -> Option<Recipe> {
        self.store.lock().unwrap().get(&RecipeId::from(id)).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.store.lock().unwrap().len()
    }
}

fn not_found(id: &RecipeId) -> RecipeBoardError {
    NotFoundError {
        entity: "Recipe",
        id: id.to_string(),
    }
    .into()
}

impl RecipeManager for InMemoryRecipes {
    fn create(
        &self,
        mut recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        let id = RecipeId::generate();
        recipe.id = Some(id.clone());
        recipe.created_at = Some(now());
        self.store.lock().unwrap().insert(id, recipe.clone());
        async { Ok(recipe) }
    }

    fn get(&self, id: &RecipeId) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id));
        async { result }
    }

    fn list(
        &self,
        recipe_type: RecipeType,
    ) -> impl Future<Output = Result<Vec<Recipe>, RecipeBoardError>> + Send {
        let result: Vec<Recipe> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.recipe_type == recipe_type)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<(), RecipeBoardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = recipe.id.clone().expect("updates carry an id");
        let result = match store.get_mut(&id) {
            Some(existing) => {
                *existing = recipe;
                Ok(())
            }
            None => Err(not_found(&id)),
        };
        async { result }
    }

    fn delete(&self, id: &RecipeId) -> impl Future<Output = Result<(), RecipeBoardError>> + Send {
        self.store.lock().unwrap().remove(id);
        async { Ok(()) }
    }
}

/// Recipe manager whose every call fails with a storage error.
pub(crate) struct FailingRecipes;

fn outage() -> RecipeBoardError {
    RecipeBoardError::Storage("backend unavailable".into())
}

impl RecipeManager for FailingRecipes {
    async fn create(&self, _recipe: Recipe) -> Result<Recipe, RecipeBoardError> {
        Err(outage())
    }

    async fn get(&self, _id: &RecipeId) -> Result<Recipe, RecipeBoardError> {
        Err(outage())
    }

    async fn list(&self, _recipe_type: RecipeType) -> Result<Vec<Recipe>, RecipeBoardError> {
        Err(outage())
    }

    async fn update(&self, _recipe: Recipe) -> Result<(), RecipeBoardError> {
        Err(outage())
    }

    async fn delete(&self, _id: &RecipeId) -> Result<(), RecipeBoardError> {
        Err(outage())
    }
}

/// Log sink counting how often it was flushed.
#[derive(Default)]
pub(crate) struct CountingFlush {
    flushes: AtomicUsize,
}

impl CountingFlush {
    pub(crate) fn count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl LogFlush for CountingFlush {
    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Formatted log output collected in memory.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Plain-text subscriber writing into this buffer, debug level and up.
    pub(crate) fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub(crate) fn cake(id: &str) -> Recipe {
    Recipe::builder(RecipeType::Baking)
        .id(id)
        .title("Bake a Cake")
        .ingredients("100g flour")
        .description("Mix. Bake.")
        .created_at(now())
        .build()
        .unwrap()
}

pub(crate) fn soup(id: &str) -> Recipe {
    Recipe::builder(RecipeType::Cooking)
        .id(id)
        .title("Tomato Soup")
        .ingredients("1kg tomatoes")
        .description("Simmer.")
        .created_at(now())
        .build()
        .unwrap()
}
