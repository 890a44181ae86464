use crate::calendar::Navigator;
use crate::store::HabitStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handles for the rendering layer. The store lock is held across each
/// mutation and its write, so saves never observe a half-applied change.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HabitStore>>,
    pub navigator: Arc<Mutex<Navigator>>,
}

impl AppState {
    pub fn new(store: HabitStore, navigator: Navigator) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            navigator: Arc::new(Mutex::new(navigator)),
        }
    }
}
