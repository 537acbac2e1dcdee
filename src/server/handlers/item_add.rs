use crate::server::proto::{AddItemRequest, AddItemResponse};
use crate::server::structured_error::to_error_json;
use crate::server::SharedStore;
use tonic::{Response, Status};
use tracing::info;

pub async fn add_item(
    store: &SharedStore,
    req: AddItemRequest,
) -> Result<Response<AddItemResponse>, Status> {
    let result = store
        .write()
        .await
        .add_item(req.text, req.description, req.due_date);
    match result {
        Ok(id) => {
            info!(item_id = id, "Added shopping item");
            Ok(Response::new(AddItemResponse {
                success: true,
                error: String::new(),
                id,
            }))
        }
        Err(e) => Ok(Response::new(AddItemResponse {
            success: false,
            error: to_error_json(&e),
            id: 0,
        })),
    }
}
