//! Coach read-side business logic.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::Coach;
use crate::repositories::CoachRepository;

/// Coach service for the public coach listing.
#[derive(Clone)]
pub struct CoachService {
    repo: Arc<dyn CoachRepository>,
}

impl CoachService {
    pub fn new(repo: Arc<dyn CoachRepository>) -> Self {
        Self { repo }
    }

    /// Lists coaches that are approved and therefore bookable.
    pub async fn list_coaches(&self) -> AppResult<Vec<Coach>> {
        self.repo.list_approved().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoachStatus;
    use crate::repositories::MemoryStore;

    #[tokio::test]
    async fn test_only_approved_coaches_listed() {
        let store = MemoryStore::new();
        store.seed_coach("Alex", "Rivera", CoachStatus::Approved);
        store.seed_coach("Max", "Stone", CoachStatus::Pending);
        store.seed_coach("Kim", "Okafor", CoachStatus::Suspended);

        let service = CoachService::new(Arc::new(store));
        let coaches = service.list_coaches().await.unwrap();
        assert_eq!(coaches.len(), 1);
        assert_eq!(coaches[0].first_name, "Alex");
    }
}
