use crate::server::proto::{EditItemRequest, EditItemResponse};
use crate::server::structured_error::to_error_json;
use crate::server::SharedStore;
use tonic::{Response, Status};
use tracing::{info, warn};

pub async fn edit_item(
    store: &SharedStore,
    req: EditItemRequest,
) -> Result<Response<EditItemResponse>, Status> {
    let id = req.id;
    let result = store
        .write()
        .await
        .edit_item(id, req.text, req.description, req.due_date);
    match result {
        Ok(()) => {
            info!(item_id = id, "Edited shopping item");
            Ok(Response::new(EditItemResponse {
                success: true,
                error: String::new(),
            }))
        }
        Err(e) => {
            warn!(item_id = id, "Edit rejected: {e}");
            Ok(Response::new(EditItemResponse {
                success: false,
                error: to_error_json(&e),
            }))
        }
    }
}
