use crate::server::proto::{MarkItemCompletedRequest, MarkItemCompletedResponse};
use crate::server::structured_error::to_error_json;
use crate::server::SharedStore;
use tonic::{Response, Status};
use tracing::{info, warn};

pub async fn mark_item_completed(
    store: &SharedStore,
    req: MarkItemCompletedRequest,
) -> Result<Response<MarkItemCompletedResponse>, Status> {
    let result = store.write().await.mark_item_completed(req.id);
    match result {
        Ok(()) => {
            info!(item_id = req.id, "Marked shopping item completed");
            Ok(Response::new(MarkItemCompletedResponse {
                success: true,
                error: String::new(),
            }))
        }
        Err(e) => {
            warn!(item_id = req.id, "Completion rejected: {e}");
            Ok(Response::new(MarkItemCompletedResponse {
                success: false,
                error: to_error_json(&e),
            }))
        }
    }
}
