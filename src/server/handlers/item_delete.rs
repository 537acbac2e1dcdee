use crate::server::proto::{DeleteItemRequest, DeleteItemResponse};
use crate::server::structured_error::to_error_json;
use crate::server::SharedStore;
use tonic::{Response, Status};
use tracing::{info, warn};

pub async fn delete_item(
    store: &SharedStore,
    req: DeleteItemRequest,
) -> Result<Response<DeleteItemResponse>, Status> {
    let result = store.write().await.delete_item(req.id);
    match result {
        Ok(()) => {
            info!(item_id = req.id, "Deleted shopping item");
            Ok(Response::new(DeleteItemResponse {
                success: true,
                error: String::new(),
            }))
        }
        Err(e) => {
            warn!(item_id = req.id, "Delete rejected: {e}");
            Ok(Response::new(DeleteItemResponse {
                success: false,
                error: to_error_json(&e),
            }))
        }
    }
}
