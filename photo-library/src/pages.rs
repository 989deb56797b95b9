use crate::error::CameraRollError;
use crate::models::{Asset, Page};
use crate::requests::EnumerationRequest;
use crate::service::CameraRoll;

/// Follows `end_cursor` from page to page with otherwise identical filters.
///
/// Each call to [`PageWalker::next_page`] is one native round trip. Nothing
/// is cached; dropping the walker simply stops the walk.
#[derive(Debug)]
pub struct PageWalker<'a> {
    roll: &'a CameraRoll,
    params: EnumerationRequest,
    finished: bool,
    limited: bool,
}

impl<'a> PageWalker<'a> {
    pub(crate) fn new(roll: &'a CameraRoll, params: EnumerationRequest) -> Self {
        Self {
            roll,
            params,
            finished: false,
            limited: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether any page so far was capped by limited library access
    pub fn was_limited(&self) -> bool {
        self.limited
    }

    /// Fetch the next page, or `None` once the walk is over
    pub async fn next_page(&mut self) -> Result<Option<Page>, CameraRollError> {
        if self.finished {
            return Ok(None);
        }

        let page = self.roll.get_photos(&self.params).await?;
        self.limited |= page.is_limited();

        match (&page.page_info.end_cursor, page.page_info.has_next_page) {
            (Some(cursor), true) => self.params.after = Some(cursor.clone()),
            (None, true) => {
                log::warn!("Page reports more data but carries no end_cursor, stopping");
                self.finished = true;
            }
            (_, false) => self.finished = true,
        }

        Ok(Some(page))
    }

    /// Walk until the end, or until `limit` assets have been gathered
    pub async fn collect_assets(mut self, limit: usize) -> Result<Vec<Asset>, CameraRollError> {
        let mut assets = Vec::new();
        while assets.len() < limit {
            match self.next_page().await? {
                Some(page) => assets.extend(page.edges),
                None => break,
            }
        }
        assets.truncate(limit);
        Ok(assets)
    }
}
