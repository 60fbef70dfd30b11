use std::collections::BTreeSet;

use super::ContentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::taxonomy::{CategoryId, TagId},
};

impl ContentCommandService {
    pub(super) async fn resolve_category(
        &self,
        category_id: Option<i64>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(raw) = category_id else {
            return Ok(None);
        };

        let id = CategoryId::new(raw)?;
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("category {raw} not found")))?;
        Ok(Some(id))
    }

    /// Deduplicates and checks that every referenced tag exists.
    pub(super) async fn resolve_tags(&self, tag_ids: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let ids = tag_ids
            .iter()
            .map(|raw| TagId::new(*raw))
            .collect::<Result<BTreeSet<_>, _>>()?
            .into_iter()
            .collect::<Vec<_>>();

        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.tags.find_by_ids(&ids).await?;
        if let Some(missing) = ids
            .iter()
            .find(|id| !found.iter().any(|tag| tag.id == **id))
        {
            return Err(ApplicationError::not_found(format!(
                "tag {} not found",
                missing.0
            )));
        }

        Ok(ids)
    }
}
